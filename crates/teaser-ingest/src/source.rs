//! Source format detection and chunker dispatch

use crate::{docx, excel, markdown, pdf, text, web::WebScraper};
use std::path::Path;
use teaser_domain::Chunk;
use tracing::warn;

/// The closed set of source formats the loader understands.
///
/// Dispatch is by extension for files and by scheme for URLs; anything
/// unrecognized falls back to plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Spreadsheet (xlsx/xls)
    Tabular,
    /// Paginated document (pdf)
    Paginated,
    /// Word-processor document (docx/doc)
    Flowed,
    /// Structured markdown (md/markdown)
    Markdown,
    /// Plain text or unknown extension
    PlainText,
    /// Public web page (http/https)
    Web,
}

impl SourceKind {
    /// Detect the format of a source path or URL.
    pub fn detect(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            return SourceKind::Web;
        }
        let extension = Path::new(source)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("xlsx") | Some("xls") => SourceKind::Tabular,
            Some("pdf") => SourceKind::Paginated,
            Some("docx") | Some("doc") => SourceKind::Flowed,
            Some("md") | Some("markdown") => SourceKind::Markdown,
            _ => SourceKind::PlainText,
        }
    }
}

/// Loads any supported source into chunks.
pub struct UniversalLoader {
    web: WebScraper,
}

impl UniversalLoader {
    /// Create a loader with the default web scraper.
    pub fn new() -> Self {
        Self {
            web: WebScraper::new(),
        }
    }

    /// Chunk a source file or URL.
    ///
    /// Never fails: unreadable or unparseable sources yield an empty vector
    /// after logging, so one bad source cannot abort a company's analysis.
    pub async fn load(&self, source: &str) -> Vec<Chunk> {
        let kind = SourceKind::detect(source);
        if kind == SourceKind::Web {
            return self.web.scrape(source).await;
        }

        let path = Path::new(source);
        if !path.exists() {
            warn!("source not found: {}", source);
            return Vec::new();
        }
        match kind {
            SourceKind::Tabular => excel::chunk_excel(path),
            SourceKind::Paginated => pdf::chunk_pdf(path),
            SourceKind::Flowed => docx::chunk_docx(path),
            SourceKind::Markdown => markdown::chunk_markdown(path),
            SourceKind::PlainText => text::chunk_plain_text(path),
            SourceKind::Web => unreachable!("handled above"),
        }
    }
}

impl Default for UniversalLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Display name for a file source: the final path component.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}
