//! Logging and telemetry bootstrap
//!
//! Always installs a tracing subscriber with env-filter and a console fmt
//! layer. When a telemetry connection string is configured, an additional
//! journald export layer is attached, tagged with the fixed service name.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

/// Service name reported by the telemetry exporter
pub const SERVICE_NAME: &str = "bookshelf-api";

/// Initialize tracing from the logging and telemetry configuration
pub fn init(config: &AppConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "bookshelf_server={},tower_http=debug",
            config.logging.level
        )
        .into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    let json = config.logging.format == "json";

    match config.telemetry.connection() {
        Some(_) => {
            let exporter = tracing_journald::layer()
                .context("telemetry export requested but journald is unavailable")?
                .with_syslog_identifier(SERVICE_NAME.to_string());
            if json {
                registry
                    .with(tracing_subscriber::fmt::layer().json())
                    .with(exporter)
                    .init();
            } else {
                registry
                    .with(tracing_subscriber::fmt::layer())
                    .with(exporter)
                    .init();
            }
            tracing::info!("Telemetry export enabled as {}", SERVICE_NAME);
        }
        None => {
            if json {
                registry
                    .with(tracing_subscriber::fmt::layer().json())
                    .init();
            } else {
                registry.with(tracing_subscriber::fmt::layer()).init();
            }
        }
    }

    Ok(())
}
