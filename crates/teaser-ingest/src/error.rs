//! Error types for ingestion
//!
//! These errors stay internal to the chunkers: the loader surface degrades to
//! empty chunk sets instead of propagating them, per the never-abort-the-batch
//! contract.

use thiserror::Error;

/// Errors that can occur while reading or parsing a source.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Filesystem read failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Web fetch failed or returned a non-success status
    #[error("Fetch error: {0}")]
    Fetch(String),
}
