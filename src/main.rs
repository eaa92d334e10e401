//! Archgreet - compile-time architecture greeter.
//!
//! This binary prints a greeting naming the CPU architecture it was compiled
//! for (ARM64, x86_64, or unknown) and exits 0. The architecture is fixed at
//! build time from the target triple, never probed at runtime.

mod arch;
mod cli;
mod error;
mod greeting;

use std::process;

fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
