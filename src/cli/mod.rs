//! Command line interface for the architecture greeter.

mod args;

pub use args::Args;

use std::env::consts;
use std::io::{self, Write};

use crate::arch;
use crate::error::Result;
use crate::greeting;

/// Main CLI entry point
///
/// Writes the greeting block for the compiled target architecture to stdout
/// and returns exit code 0. Diagnostics go to the log only, never stdout.
pub fn run() -> Result<i32> {
    let args = Args::parse_args();

    if !args.ignored.is_empty() {
        log::debug!("Ignoring {} extra argument(s)", args.ignored.len());
    }

    log::debug!(
        "Compiled for {:?}, host reports {}/{}",
        arch::TARGET,
        consts::OS,
        consts::ARCH
    );

    let mut stdout = io::stdout().lock();
    greeting::write_greeting(&mut stdout, arch::TARGET)?;
    stdout.flush()?;

    Ok(0)
}
