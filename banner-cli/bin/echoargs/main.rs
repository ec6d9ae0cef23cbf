//! Argument inspection utility
//!
//! Reports back every argument passed to it, including the command name
//! itself. Useful for seeing exactly how shells and scripts expand argument
//! lists.

use std::env;
use std::process;

use banner_cli::{format_error_for_stderr, run_echoargs, stdout_writer};

const PROGRAM_NAME: &str = "echoargs";

fn main() {
    // No option parsing: arguments that look like flags are echoed verbatim.
    let args: Vec<String> = env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    if let Err(err) = run_echoargs(&args, stdout_writer()) {
        eprintln!("{}", format_error_for_stderr(PROGRAM_NAME, &err));
        process::exit(1);
    }
}
