//! Common CLI utilities and shared functionality for the banner helper tools.
//!
//! This module provides the orchestration layer between the command-line
//! binaries and the pure formatting logic in `banner-core`: the binaries
//! parse arguments and report errors, while the functions here render output
//! and write it through any [`io::Write`].

use std::io;

use banner_core::render_banner;

pub mod error;

pub use error::{format_error_for_stderr, CliError};


/// Default buffer size for the stdout writer
pub const DEFAULT_BUFFER_SIZE: usize = 4 * 1024;

/// Writes the banner line for `title` to `output`.
///
/// # Parameters
///
/// * `title` - Optional title text to embed in the banner
/// * `output` - Writer receiving the rendered line
///
/// # Errors
///
/// Returns [`CliError::Write`] if the line cannot be written or flushed.
pub fn run_print_title(title: Option<&str>, mut output: impl io::Write) -> Result<(), CliError> {
    output.write_all(render_banner(title).as_bytes())?;
    output.flush()?;
    Ok(())
}

/// Writes one `argv[N]: value` line per argument to `output`.
///
/// The slice is expected to start with the program name, as produced by
/// [`std::env::args`]; every element is reported, including index 0.
///
/// # Errors
///
/// Returns [`CliError::Write`] if a line cannot be written or flushed.
pub fn run_echoargs(args: &[String], mut output: impl io::Write) -> Result<(), CliError> {
    for (index, arg) in args.iter().enumerate() {
        writeln!(output, "argv[{index}]: {arg}")?;
    }
    output.flush()?;
    Ok(())
}

/// Opens a buffered writer over stdout.
pub fn stdout_writer() -> impl io::Write {
    io::BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, io::stdout())
}
