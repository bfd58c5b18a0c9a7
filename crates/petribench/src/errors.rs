//! Error handling and exit codes.

use petribench_core::constants::exit_codes;
use petribench_core::BenchError;

/// Map a benchmark error to its exit code.
pub fn handle_error(err: &BenchError) -> i32 {
    match err {
        BenchError::Overflow { .. } | BenchError::EmptySequence(_) => exit_codes::ERROR_GENERIC,
        BenchError::Config(_) => exit_codes::ERROR_CONFIG,
    }
}

/// Exit code for any error surfaced by [`crate::app::run`].
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<BenchError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
