//! Flowed-document chunker: paragraph windows of roughly 1000 characters
//!
//! Word documents are zip archives; the paragraph stream lives in
//! `word/document.xml` as `<w:p>` elements whose runs carry `<w:t>` text
//! nodes. Parsing the XML directly keeps the dependency surface to the
//! archive and event-parser crates.

use crate::clean::clean_text;
use crate::error::IngestError;
use crate::source::display_name;
use quick_xml::events::Event;
use quick_xml::Reader as XmlReader;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use teaser_domain::{Chunk, ChunkKind};
use tracing::warn;

/// Emit a chunk whenever the accumulated paragraph text exceeds this.
const WINDOW_CHARS: usize = 1000;

/// Chunk a word-processor document. Unreadable archives yield nothing.
pub(crate) fn chunk_docx(path: &Path) -> Vec<Chunk> {
    match read_docx(path) {
        Ok(chunks) => chunks,
        Err(e) => {
            warn!("error reading document {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

fn read_docx(path: &Path) -> Result<Vec<Chunk>, IngestError> {
    let file = File::open(path)?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| IngestError::Parse(e.to_string()))?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| IngestError::Parse(e.to_string()))?
        .read_to_string(&mut xml)?;

    let paragraphs = paragraphs_from_xml(&xml)?;
    Ok(chunks_from_paragraphs(&display_name(path), &paragraphs))
}

/// Pull the text of each `<w:p>` out of the document XML, in order.
fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>, IngestError> {
    let mut reader = XmlReader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => in_text_run = true,
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text_run => {
                let unescaped = t.unescape().map_err(|e| IngestError::Parse(e.to_string()))?;
                current.push_str(&unescaped);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(IngestError::Parse(e.to_string())),
        }
        buf.clear();
    }
    Ok(paragraphs)
}

/// Accumulate cleaned paragraphs; whenever the buffer passes the window size,
/// emit a chunk covering the paragraph index range consumed so far.
pub(crate) fn chunks_from_paragraphs(filename: &str, paragraphs: &[String]) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut buffer = String::new();
    let mut window_start = 0usize;

    for (index, paragraph) in paragraphs.iter().enumerate() {
        let text = clean_text(paragraph);
        if !text.is_empty() {
            buffer.push_str(&text);
            buffer.push('\n');
        }
        if buffer.chars().count() > WINDOW_CHARS {
            chunks.push(Chunk::new(
                buffer.clone(),
                filename,
                format!("Para {}-{}", window_start, index),
                ChunkKind::Docx,
            ));
            buffer.clear();
            window_start = index + 1;
        }
    }
    if !buffer.is_empty() {
        chunks.push(Chunk::new(
            buffer,
            filename,
            format!("Para {}-End", window_start),
            ChunkKind::Docx,
        ));
    }
    chunks
}
