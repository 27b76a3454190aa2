//! Render error types

use thiserror::Error;

/// Errors that can occur while writing artifacts.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Output file could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
