//! Command line argument parsing for the print-title utility.

use clap::Parser;

/// Decorative title banner utility
///
/// Prints a 35-character asterisk banner, optionally with a title embedded.
#[derive(Debug, Parser)]
#[command(
    name = "print-title",
    version = "0.1.0",
    about = "Pretty-print a title banner for scripts",
    long_about = "print-title writes a fixed-width line of asterisks to standard \
                 output. When TITLE is given it is embedded in the line, separated \
                 from the asterisks by single spaces. Arguments after TITLE are \
                 accepted and ignored."
)]
pub struct PrintTitleOpts {
    /// Title to embed in the banner line
    #[arg(value_name = "TITLE", allow_hyphen_values = true)]
    title: Option<String>,

    /// Further positional arguments, accepted for script compatibility
    #[arg(value_name = "IGNORED", hide = true, allow_hyphen_values = true)]
    rest: Vec<String>,
}

impl PrintTitleOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// The title supplied on the command line, if any
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}
