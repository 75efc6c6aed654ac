//! Dashboard settings loaded from defaults, an optional TOML file and
//! BIKEDASH_* environment overrides

use bikedash_common::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Input table locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    /// Daily record table (one row per calendar day)
    pub daily_table: PathBuf,
    /// Correlation-ready numeric feature table
    pub feature_table: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            daily_table: PathBuf::from("data/day.csv"),
            feature_table: PathBuf::from("data/features.csv"),
        }
    }
}

/// Chart output dimensions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
        }
    }
}

/// Top-level dashboard settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    pub data: DataSettings,
    pub chart: ChartSettings,
    /// Directory receiving the rendered chart files
    pub output_dir: PathBuf,
    /// tracing filter directive, e.g. "info" or "bikedash=debug"
    pub log_level: String,
    /// Startup year selection; defaults to the first available year
    pub year: Option<i32>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            data: DataSettings::default(),
            chart: ChartSettings::default(),
            output_dir: PathBuf::from("out"),
            log_level: "info".to_string(),
            year: None,
        }
    }
}

impl DashboardSettings {
    /// Load settings by layering defaults, an optional TOML file and
    /// environment variables prefixed with BIKEDASH_.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        builder = match file {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name("bikedash").required(false)),
        };
        builder = builder.add_source(Environment::with_prefix("BIKEDASH").separator("__"));

        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}
