//! Error types for the banner CLI helpers.

use std::io;

use thiserror::Error;

/// Main error type for banner CLI operations.
///
/// The helpers define no deliberate failure modes of their own; the only
/// runtime fault is an unusable standard output stream, which propagates
/// here and is reported once by the binary before it exits non-zero.
#[derive(Debug, Error)]
pub enum CliError {
    /// Failed to write to the output stream
    #[error("cannot write to standard output: {0}")]
    Write(#[from] io::Error),
}

/// Formats an error message for stderr with the program name prefix.
///
/// # Parameters
///
/// * `program` - Program name to prefix (e.g. `"print-title"`)
/// * `err` - The error returned by the CLI runner
///
/// # Returns
///
/// A single-line message of the form `<program>: <error>`.
#[must_use]
pub fn format_error_for_stderr(program: &str, err: &CliError) -> String {
    format!("{program}: {err}")
}
