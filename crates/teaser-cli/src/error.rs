//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
///
/// Per-company failures are not errors: they become failed outcomes in the
/// batch summary. These variants are the fatal, before-any-work conditions.
#[derive(Debug, Error)]
pub enum CliError {
    /// A required credential is absent
    #[error("missing credential: set the {0} environment variable")]
    MissingCredential(&'static str),

    /// Input path problem
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
