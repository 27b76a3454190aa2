//! Plain-text fallback chunker: the whole file as one chunk

use crate::clean::clean_text;
use crate::source::display_name;
use std::fs;
use std::path::Path;
use teaser_domain::{Chunk, ChunkKind};
use tracing::warn;

/// Chunk a plain-text (or unknown-extension) file as a single full-text
/// chunk. Unreadable or empty files yield nothing.
pub(crate) fn chunk_plain_text(path: &Path) -> Vec<Chunk> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("error reading {}: {}", path.display(), e);
            return Vec::new();
        }
    };
    let text = clean_text(&content);
    if text.is_empty() {
        return Vec::new();
    }
    vec![Chunk::new(
        text,
        display_name(path),
        "Full Text",
        ChunkKind::FullText,
    )]
}
