//! Guard error types

use thiserror::Error;

/// Errors that can occur while building or running the guard.
#[derive(Error, Debug)]
pub enum GuardError {
    /// Configuration error (e.g. an invalid leak pattern)
    #[error("Configuration error: {0}")]
    Config(String),
}
