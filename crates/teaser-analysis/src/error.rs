//! Error types for the analysis pipeline

use thiserror::Error;

/// Errors that can occur while analyzing a company.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Every generation attempt failed generation, parsing, or validation
    #[error("analysis failed after {attempts} attempts: {last_failure}")]
    AttemptsExhausted {
        /// How many attempts were made
        attempts: usize,
        /// Why the final attempt was rejected
        last_failure: String,
    },

    /// Guard construction failed
    #[error("guard error: {0}")]
    Guard(#[from] teaser_guard::GuardError),
}
