//! Paginated chunker: one chunk per PDF page

use crate::clean::clean_text;
use crate::source::display_name;
use lopdf::Document;
use std::path::Path;
use teaser_domain::{Chunk, ChunkKind};
use tracing::{debug, warn};

/// Pages whose cleaned text is this short carry no usable content.
const MIN_PAGE_TEXT: usize = 20;

/// Chunk every page of a PDF. Unreadable documents yield nothing; pages that
/// fail text extraction are skipped individually.
pub(crate) fn chunk_pdf(path: &Path) -> Vec<Chunk> {
    let filename = display_name(path);
    let document = match Document::load(path) {
        Ok(document) => document,
        Err(e) => {
            warn!("error reading PDF {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let mut chunks = Vec::new();
    for (page_number, _) in document.get_pages() {
        let raw = match document.extract_text(&[page_number]) {
            Ok(raw) => raw,
            Err(e) => {
                debug!("no text on page {} of {}: {}", page_number, filename, e);
                continue;
            }
        };
        let text = clean_text(&raw);
        if text.chars().count() > MIN_PAGE_TEXT {
            chunks.push(Chunk::new(
                text,
                filename.clone(),
                format!("Page {}", page_number),
                ChunkKind::Pdf,
            ));
        }
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_pdf_degrades_to_empty() {
        assert!(chunk_pdf(Path::new("missing.pdf")).is_empty());
    }

    #[test]
    fn test_garbage_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"not a pdf at all").unwrap();
        assert!(chunk_pdf(&path).is_empty());
    }
}
