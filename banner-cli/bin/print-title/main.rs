//! Decorative title banner utility
//!
//! Prints a fixed-width line of asterisks to stdout, optionally with a title
//! embedded in it. Intended for pretty-printing section headers in build and
//! helper scripts.

use std::process;

mod opts;

use opts::PrintTitleOpts;

use banner_cli::{format_error_for_stderr, run_print_title, stdout_writer};

const PROGRAM_NAME: &str = "print-title";

fn main() {
    let opts = PrintTitleOpts::parse();

    if let Err(err) = run_print_title(opts.title(), stdout_writer()) {
        eprintln!("{}", format_error_for_stderr(PROGRAM_NAME, &err));
        process::exit(1);
    }
}
