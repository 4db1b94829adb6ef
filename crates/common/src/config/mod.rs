//! Configuration management for CiteForge
//!
//! Supports loading configuration from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config/default.toml, config/{APP_ENV}.toml, config/local.toml)
//! - Default values

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Interactive shell configuration
    #[serde(default)]
    pub shell: ShellConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error) or a full EnvFilter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default = "default_json_logging")]
    pub json_logging: bool,

    /// Service name attached to the startup log line
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ShellConfig {
    /// Prefix printed in front of every error message
    #[serde(default = "default_error_prefix")]
    pub error_prefix: String,

    /// Number of decimals kept when truncating floating results
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,

    /// Echo each accepted command to the log at debug level
    #[serde(default = "default_echo_commands")]
    pub echo_commands: bool,
}

// Default value functions
fn default_log_level() -> String { "warn".to_string() }
fn default_json_logging() -> bool { false }
fn default_service_name() -> String { "citeforge".to_string() }
fn default_error_prefix() -> String { "Error, ".to_string() }
fn default_decimal_places() -> u32 { 3 }
fn default_echo_commands() -> bool { true }

impl ShellConfig {
    /// `10^decimal_places`
    pub fn truncation_scale(&self) -> f64 {
        10f64.powi(self.decimal_places as i32)
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logging: default_json_logging(),
            service_name: default_service_name(),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            error_prefix: default_error_prefix(),
            decimal_places: default_decimal_places(),
            echo_commands: default_echo_commands(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and files
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with defaults
            .set_default("observability.log_level", default_log_level())?
            .set_default("shell.decimal_places", default_decimal_places() as i64)?

            // Load base config file
            .add_source(File::with_name("config/default").required(false))

            // Load environment-specific config
            .add_source(File::with_name(&format!("config/{}", env)).required(false))

            // Load local overrides
            .add_source(File::with_name("config/local").required(false))

            // Load from environment variables with APP__ prefix
            // e.g., APP__OBSERVABILITY__LOG_LEVEL=debug
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
            )

            .build()?;

        config.try_deserialize()
    }

    /// Load from a specific TOML file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(path))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
            )
            .build()?;

        config.try_deserialize()
    }

    /// Scale factor used to truncate floating results
    pub fn truncation_scale(&self) -> f64 {
        self.shell.truncation_scale()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            observability: ObservabilityConfig::default(),
            shell: ShellConfig::default(),
        }
    }
}
