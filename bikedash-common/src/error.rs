//! Error types and utilities for the dashboard

use thiserror::Error;

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Main error type for dashboard operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Input table loading errors (missing source, malformed rows, schema mismatch)
    #[error("Load error: {message}")]
    Load {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Chart rendering errors (expected column absent or wrong shape at render time)
    #[error("Render error: {message}")]
    Render {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Year selection errors (selected year not in the available set)
    #[error("Selection error: {message}")]
    Selection {
        message: String,
        year: Option<i32>,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DashboardError {
    /// Create a new load error
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new load error with source
    pub fn load_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Load {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new render error
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new render error with source
    pub fn render_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Render {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new selection error
    pub fn selection(msg: impl Into<String>) -> Self {
        Self::Selection {
            message: msg.into(),
            year: None,
        }
    }

    /// Create a new selection error for a specific year
    pub fn selection_year(msg: impl Into<String>, year: i32) -> Self {
        Self::Selection {
            message: msg.into(),
            year: Some(year),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Error conversion implementations for external types

/// Convert from csv::Error to DashboardError
impl From<csv::Error> for DashboardError {
    fn from(err: csv::Error) -> Self {
        Self::load_with_source("CSV parsing error", err)
    }
}

/// Convert from config::ConfigError to DashboardError
impl From<config::ConfigError> for DashboardError {
    fn from(err: config::ConfigError) -> Self {
        Self::config_with_source("Configuration loading error", err)
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to DashboardError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for DashboardError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::render_with_source("Chart rendering failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let load_error = DashboardError::load("daily table missing");
        assert!(load_error.to_string().contains("Load error"));
        assert!(load_error.to_string().contains("daily table missing"));

        let render_error = DashboardError::render("matrix not square");
        assert!(render_error.to_string().contains("Render error"));

        let selection_error = DashboardError::selection_year("year not available", 2013);
        assert!(selection_error.to_string().contains("Selection error"));
        assert!(selection_error.to_string().contains("year not available"));

        let config_error = DashboardError::config("output dir unset");
        assert!(config_error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wrapped = DashboardError::load_with_source("Failed to read daily table", io_error);

        assert!(wrapped.to_string().contains("Failed to read daily table"));
        assert!(wrapped.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: DashboardError = io_error.into();

        assert!(error.to_string().contains("I/O error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_selection_year_field() {
        let error = DashboardError::selection_year("not in set", 2015);
        match error {
            DashboardError::Selection { year, .. } => assert_eq!(year, Some(2015)),
            _ => panic!("Expected selection error"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u32> {
            Ok(42)
        }

        fn returns_error() -> Result<u32> {
            Err(DashboardError::load("failure"))
        }

        assert!(returns_result().is_ok());
        assert!(returns_error().is_err());
    }
}
