//! Configuration management for the Bookshelf server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection string. Absent or empty selects the in-memory backend.
    pub url: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Connection string, with an empty string treated as unset
    pub fn connection_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HttpConfig {
    /// Prefix prepended to every route, e.g. "/bookshelf". Empty by default.
    pub path_prefix: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Presence (non-empty) enables the telemetry export layer.
    pub connection_string: Option<String>,
}

impl TelemetryConfig {
    /// Telemetry connection string, with an empty string treated as unset
    pub fn connection(&self) -> Option<&str> {
        self.connection_string.as_deref().filter(|c| !c.is_empty())
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub http: HttpConfig,
    pub telemetry: TelemetryConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix BOOKSHELF_)
            .add_source(
                Environment::with_prefix("BOOKSHELF")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override database URL from DATABASE_URL env var if present
            .set_override_option("database.url", env::var("DATABASE_URL").ok())?
            // Override route prefix from PATH_PREFIX env var if present
            .set_override_option("http.path_prefix", env::var("PATH_PREFIX").ok())?
            // Override telemetry export from TELEMETRY_CONNECTION_STRING env var if present
            .set_override_option(
                "telemetry.connection_string",
                env::var("TELEMETRY_CONNECTION_STRING").ok(),
            )?
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would produce unroutable paths
    pub fn validate(&self) -> Result<(), ConfigError> {
        let prefix = &self.http.path_prefix;
        if !prefix.is_empty() && !prefix.starts_with('/') {
            return Err(ConfigError::Message(format!(
                "http.path_prefix must begin with '/', got {:?}",
                prefix
            )));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
            min_connections: 2,
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            path_prefix: String::new(),
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            connection_string: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.database.connection_url().is_none());
        assert!(config.telemetry.connection().is_none());
        assert_eq!(config.http.path_prefix, "");
    }

    #[test]
    fn prefix_must_start_with_slash() {
        let mut config = AppConfig::default();
        config.http.path_prefix = "bookshelf".to_string();
        assert!(config.validate().is_err());

        config.http.path_prefix = "/bookshelf".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_connection_strings_are_unset() {
        let mut config = AppConfig::default();
        config.database.url = Some(String::new());
        config.telemetry.connection_string = Some(String::new());
        assert!(config.database.connection_url().is_none());
        assert!(config.telemetry.connection().is_none());

        config.database.url = Some("postgres://localhost/books".to_string());
        assert_eq!(
            config.database.connection_url(),
            Some("postgres://localhost/books")
        );
    }
}
