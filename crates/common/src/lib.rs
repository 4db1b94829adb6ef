//! CiteForge Common Library
//!
//! Shared code for the CiteForge crates including:
//! - Error types and handling
//! - Configuration management
//! - Tracing setup
//! - Metrics

pub mod config;
pub mod errors;
pub mod metrics;
pub mod telemetry;

// Re-export commonly used types
pub use config::AppConfig;
pub use errors::{AppError, ErrorCode, ErrorKind, Result};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Smallest accepted publication or conference year
pub const MIN_YEAR: u16 = 0;

/// Largest accepted publication or conference year
pub const MAX_YEAR: u16 = 9999;
