//! Metrics utilities
//!
//! Counters are recorded through the `metrics` facade. Nothing is exported
//! unless the embedding process installs a recorder.

use metrics::{counter, describe_counter, Unit};

use crate::errors::AppError;

/// Metrics prefix for all CiteForge metrics
pub const METRICS_PREFIX: &str = "citeforge";

/// Commands accepted by the shell, labelled by command name
pub const COMMANDS_TOTAL: &str = "citeforge_commands_total";

/// Commands rejected by validation or parsing, labelled by error code and kind
pub const COMMAND_ERRORS_TOTAL: &str = "citeforge_command_errors_total";

/// Mutations applied to the knowledge base, labelled by operation
pub const MUTATIONS_TOTAL: &str = "citeforge_mutations_total";

/// Register all metric descriptions
pub fn register_metrics() {
    describe_counter!(
        COMMANDS_TOTAL,
        Unit::Count,
        "Total number of commands accepted by the shell"
    );

    describe_counter!(
        COMMAND_ERRORS_TOTAL,
        Unit::Count,
        "Total number of commands rejected with an error"
    );

    describe_counter!(
        MUTATIONS_TOTAL,
        Unit::Count,
        "Total number of mutations applied to the knowledge base"
    );
}

/// Record an accepted command
pub fn record_command(command: &'static str) {
    counter!(COMMANDS_TOTAL, "command" => command).increment(1);
}

/// Record a rejected command
pub fn record_command_error(err: &AppError) {
    counter!(
        COMMAND_ERRORS_TOTAL,
        "code" => err.code().as_str(),
        "kind" => err.kind().as_str()
    )
    .increment(1);
}

/// Record an applied mutation
pub fn record_mutation(operation: &'static str) {
    counter!(MUTATIONS_TOTAL, "operation" => operation).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_names_share_prefix() {
        for name in [COMMANDS_TOTAL, COMMAND_ERRORS_TOTAL, MUTATIONS_TOTAL] {
            assert!(name.starts_with(METRICS_PREFIX));
        }
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        register_metrics();
        record_command("quit");
        record_command_error(&AppError::InvalidCommand);
        record_mutation("add_author");
    }
}
