//! Error types for greeter operations.

use thiserror::Error;

/// Result type alias for greeter operations
pub type Result<T> = std::result::Result<T, GreeterError>;

/// Main error type for all greeter operations
///
/// The greeter has no failure modes of its own; the only way it can fail is
/// the underlying write to standard output.
#[derive(Error, Debug)]
pub enum GreeterError {
    /// IO errors from writing the greeting
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
