//! Command line argument parsing.
//!
//! The greeter accepts no arguments. To keep argv from ever changing the
//! output, the built-in help and version flags are disabled and a hidden
//! catch-all swallows anything supplied, so every invocation prints the same
//! greeting and exits 0.

use std::ffi::OsString;

use clap::Parser;

/// Compile-time architecture greeter
#[derive(Parser, Debug)]
#[command(
    name = "archgreet",
    about = "Prints a greeting naming the CPU architecture this binary was compiled for",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Extra arguments, accepted and discarded
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub ignored: Vec<OsString>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
