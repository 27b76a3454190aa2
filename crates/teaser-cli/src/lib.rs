//! Teaser CLI - batch driver for the anonymized teaser pipeline.

pub mod cli;
pub mod company;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use error::{CliError, Result};
