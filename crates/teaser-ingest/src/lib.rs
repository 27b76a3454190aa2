//! Teaser Ingest
//!
//! Turns heterogeneous company sources into attributable chunks.
//!
//! # Overview
//!
//! Each supported source format has its own chunker with format-specific
//! splitting rules: spreadsheets chunk per sheet, PDFs per page, markdown per
//! header section, word documents per ~1000-char paragraph window, web pages
//! per heading section, and everything else as one full-text chunk. All
//! chunkers share one text-cleaning primitive so chunk identity and length
//! limits behave identically across formats.
//!
//! # Degradation
//!
//! Chunkers never fail the caller: a missing file, corrupt document, or
//! failed scrape logs a warning and yields zero (or partial) chunks so batch
//! processing continues with whatever was gathered.
//!
//! # Example Usage
//!
//! ```no_run
//! use teaser_ingest::UniversalLoader;
//!
//! # async fn example() {
//! let loader = UniversalLoader::new();
//! let chunks = loader.load("Centum-OnePager.md").await;
//! println!("gathered {} chunks", chunks.len());
//! # }
//! ```

#![warn(missing_docs)]

mod clean;
mod docx;
mod error;
mod excel;
mod markdown;
mod pdf;
mod source;
mod text;
mod web;

pub use clean::clean_text;
pub use error::IngestError;
pub use source::{SourceKind, UniversalLoader};
pub use web::WebScraper;
