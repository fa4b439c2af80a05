//! Error types for keydemo

use thiserror::Error;

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, DemoError>;

/// Demo error types
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
