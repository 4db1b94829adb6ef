//! Presentation of command results

use citeforge_common::config::ShellConfig;
use std::io::{self, Write};

/// Result of a successfully executed command
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Mutations print nothing
    Silent,
    /// One line per item; an empty list prints nothing
    Lines(Vec<String>),
    /// Lines prefixed with `[k] `, starting at 1
    Numbered(Vec<String>),
    Count(usize),
    /// Truncated, never rounded
    Ratio(f64),
}

impl Output {
    /// Lines to print for this result
    pub fn render(&self, config: &ShellConfig) -> Vec<String> {
        match self {
            Output::Silent => Vec::new(),
            Output::Lines(lines) => lines.clone(),
            Output::Numbered(lines) => lines
                .iter()
                .enumerate()
                .map(|(i, line)| format!("[{}] {}", i + 1, line))
                .collect(),
            Output::Count(value) => vec![value.to_string()],
            Output::Ratio(value) => vec![format_ratio(*value, config)],
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W, config: &ShellConfig) -> io::Result<()> {
        for line in self.render(config) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

/// `floor(x * 10^d) / 10^d` printed with `d` decimals
pub fn format_ratio(value: f64, config: &ShellConfig) -> String {
    let scale = config.truncation_scale();
    let truncated = (value * scale).floor() / scale;
    format!("{:.*}", config.decimal_places as usize, truncated)
}
