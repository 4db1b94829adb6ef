//! CiteForge Shell
//!
//! Line-oriented front end to the knowledge base:
//! - Command grammar and parsing
//! - Validation before every mutation
//! - Query presentation on stdout, logs on stderr
//!
//! ```bash
//! citeforge --log-level debug < session.txt
//! ```

mod command;
mod output;
mod session;

use anyhow::{Context, Result};
use citeforge_common::{config::AppConfig, metrics::register_metrics, telemetry, VERSION};
use clap::Parser;
use session::Session;
use std::io;
use std::path::PathBuf;
use tracing::info;

/// Interactive bibliographic knowledge base
#[derive(Debug, Parser)]
#[command(name = "citeforge", version, about)]
struct Cli {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level or EnvFilter directive; overrides the configured level
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(&path.to_string_lossy()),
        None => AppConfig::load(),
    }
    .context("Failed to load configuration")?;

    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }

    telemetry::init_tracing(&config.observability)?;
    register_metrics();

    info!(
        service = %config.observability.service_name,
        version = VERSION,
        "Starting CiteForge shell"
    );

    let mut session =
        Session::new(config.shell.clone()).context("Failed to compile command grammar")?;
    let processed = session
        .run(io::stdin().lock(), io::stdout().lock())
        .context("Failed to process input")?;

    info!(
        lines = processed,
        articles = session.store().article_count(),
        citations = session.store().citations().edge_count(),
        "Session ended"
    );
    Ok(())
}
