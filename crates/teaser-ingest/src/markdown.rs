//! Structured-markdown chunker: one chunk per header section

use crate::clean::clean_text;
use crate::source::display_name;
use crate::text;
use regex::Regex;
use std::fs;
use std::path::Path;
use teaser_domain::{Chunk, ChunkKind};
use tracing::warn;

/// Segments at or above this length are never section titles.
const MAX_TITLE_CHARS: usize = 100;

/// Sections whose cleaned text is this short are noise fragments.
const MIN_SECTION_TEXT: usize = 20;

const FINANCIAL_TITLE_MARKERS: [&str; 5] = ["financial", "revenue", "profit", "p&l", "balance"];
const ABOUT_TITLE_MARKERS: [&str; 3] = ["about", "profile", "business"];

/// Chunk a markdown file by its header structure. A read failure falls back
/// to the plain-text chunker.
pub(crate) fn chunk_markdown(path: &Path) -> Vec<Chunk> {
    match fs::read_to_string(path) {
        Ok(content) => chunks_from_markdown(&display_name(path), &content),
        Err(e) => {
            warn!(
                "error reading markdown {}: {}; falling back to plain text",
                path.display(),
                e
            );
            text::chunk_plain_text(path)
        }
    }
}

/// Split markdown content on level 1-3 headers.
///
/// Header lines update the current section title; text between headers is
/// accumulated and becomes a chunk typed by the title it sits under. Short
/// title-like segments (under 100 chars, no internal newline) never produce
/// chunks, and accumulated bodies of 20 chars or fewer are dropped as noise.
pub(crate) fn chunks_from_markdown(filename: &str, content: &str) -> Vec<Chunk> {
    let header = Regex::new(r"^#{1,3}[ \t]+").expect("static regex");

    let mut segments: Vec<String> = Vec::new();
    let mut body = String::new();
    for line in content.lines() {
        if let Some(matched) = header.find(line) {
            if !body.trim().is_empty() {
                segments.push(std::mem::take(&mut body));
            }
            body.clear();
            segments.push(line[matched.end()..].to_string());
        } else {
            body.push_str(line);
            body.push('\n');
        }
    }
    if !body.trim().is_empty() {
        segments.push(body);
    }

    let mut current_title = "Intro".to_string();
    let mut chunks = Vec::new();
    for segment in segments {
        let trimmed = segment.trim();
        if trimmed.is_empty() {
            continue;
        }
        // Title heuristic: short and single-line means header, not content.
        if segment.chars().count() < MAX_TITLE_CHARS && !segment.contains('\n') {
            current_title = trimmed.to_string();
            continue;
        }
        let cleaned = clean_text(&segment);
        if cleaned.chars().count() > MIN_SECTION_TEXT {
            chunks.push(Chunk::new(
                cleaned,
                filename,
                format!("Section: {}", current_title),
                kind_for_title(&current_title),
            ));
        }
    }
    chunks
}

fn kind_for_title(title: &str) -> ChunkKind {
    let lower = title.to_lowercase();
    if FINANCIAL_TITLE_MARKERS.iter().any(|m| lower.contains(m)) {
        ChunkKind::MarkdownFinancial
    } else if ABOUT_TITLE_MARKERS.iter().any(|m| lower.contains(m)) {
        ChunkKind::MarkdownAbout
    } else {
        ChunkKind::MarkdownGeneric
    }
}
