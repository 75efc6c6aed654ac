use anyhow::{Context, Result};
use bikedash_app::{DashboardController, DashboardSettings, DashboardSlot, LoadedTables};
use bikedash_charts::ChartConfig;
use bikedash_common::{init_logging, LoggingConfig};
use std::env;
use std::path::PathBuf;
use tracing::{error, info};

fn main() -> Result<()> {
    let config_file = env::args().nth(1).map(PathBuf::from);
    let settings = DashboardSettings::load(config_file.as_deref())
        .context("failed to load dashboard settings")?;

    let logging = LoggingConfig {
        level: settings.log_level.clone(),
        ..LoggingConfig::default()
    };
    if let Err(err) = init_logging(logging) {
        eprintln!("logging initialization failed: {err}");
    }

    info!(
        daily = %settings.data.daily_table.display(),
        features = %settings.data.feature_table.display(),
        "loading input tables"
    );
    let tables = LoadedTables::load(&settings.data.daily_table, &settings.data.feature_table)
        .context("failed to load daily record table")?;

    let mut controller = DashboardController::new(tables);
    let selection = match settings.year {
        Some(year) => controller
            .select_year(year)
            .with_context(|| format!("configured year {year} is not in the dataset"))?,
        None => controller
            .default_selection()
            .context("daily table is empty, nothing to report on")?,
    };

    std::fs::create_dir_all(&settings.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            settings.output_dir.display()
        )
    })?;

    let chart_config = ChartConfig {
        width: settings.chart.width,
        height: settings.chart.height,
        ..ChartConfig::default()
    };

    let slots = controller.render_pass(selection);
    for slot in &slots {
        match slot {
            DashboardSlot::Narrative { heading, body } => {
                println!("\n== {heading} ==\n{body}");
            }
            DashboardSlot::Chart(artifact) => {
                let path = settings.output_dir.join(format!("{}.png", artifact.name()));
                match artifact.render_to_file(&chart_config, &path) {
                    Ok(()) => {
                        info!(chart = artifact.name(), path = %path.display(), "chart written");
                        println!("\n[chart] {} -> {}", artifact.title(), path.display());
                    }
                    Err(err) => {
                        error!(chart = artifact.name(), error = %err, "chart rendering failed");
                        println!("\n[chart unavailable] {}: {err}", artifact.title());
                    }
                }
            }
            DashboardSlot::Failed { title, message } => {
                println!("\n[chart unavailable] {title}: {message}");
            }
        }
    }

    Ok(())
}
