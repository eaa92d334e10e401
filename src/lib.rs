//! Compile-time architecture greeter.
//!
//! Resolves the build target's CPU architecture class (`ARM64`, `x86_64`, or
//! unknown) as a constant baked into the binary, and renders a fixed greeting
//! block for it.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod arch;
pub mod cli;
pub mod error;
pub mod greeting;

// Re-export commonly used types
pub use arch::ArchitectureClass;
pub use error::{GreeterError, Result};
