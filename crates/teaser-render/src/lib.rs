//! Teaser Render
//!
//! Writes the two per-company artifacts: a three-slide Markdown deck and a
//! citation report that resolves citation ids back to the chunks they came
//! from.

#![warn(missing_docs)]

mod citation;
mod deck;
mod error;

pub use citation::{citation_report, write_citation_report};
pub use deck::{deck_markdown, write_deck};
pub use error::RenderError;
