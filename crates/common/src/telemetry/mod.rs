//! Tracing subscriber setup
//!
//! Logs go to stderr; stdout is reserved for command output.

use crate::config::ObservabilityConfig;
use crate::errors::{AppError, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// Build the filter from `RUST_LOG` if set, otherwise from the configured level
pub fn env_filter(config: &ObservabilityConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| AppError::Configuration {
            message: format!("invalid log level {:?}: {}", config.log_level, e),
        }),
    }
}

/// Install the global tracing subscriber
pub fn init_tracing(config: &ObservabilityConfig) -> Result<()> {
    let filter = env_filter(config)?;

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let installed = if config.json_logging {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| AppError::Configuration {
        message: format!("failed to install tracing subscriber: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_accepts_directives() {
        let config = ObservabilityConfig {
            log_level: "citeforge_core=debug,warn".to_string(),
            ..ObservabilityConfig::default()
        };
        assert!(env_filter(&config).is_ok());
    }
}
