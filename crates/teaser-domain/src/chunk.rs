//! Chunk module - the atomic unit of extracted source text

use sha2::{Digest, Sha256};
use std::fmt;

/// How many leading characters of the text participate in the fingerprint.
const FINGERPRINT_PREFIX_CHARS: usize = 20;

/// Hex width of a chunk fingerprint.
const FINGERPRINT_HEX_CHARS: usize = 8;

/// Short content-addressed identifier for a chunk.
///
/// The fingerprint is a deterministic function of (source, location, leading
/// text): identical inputs produce identical ids across runs and processes,
/// which is what lets citations reference chunks by id. Two chunks with the
/// same source, location, and leading 20 characters collide by design; the
/// truncated width makes collisions possible and that weak uniqueness is an
/// accepted property, not a defect.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChunkId(String);

impl ChunkId {
    /// Derive the fingerprint for a chunk from its provenance and text.
    pub fn fingerprint(source: &str, location: &str, text: &str) -> Self {
        let prefix: String = text.chars().take(FINGERPRINT_PREFIX_CHARS).collect();
        let digest = Sha256::digest(format!("{}-{}-{}", source, location, prefix).as_bytes());

        let mut hex = String::with_capacity(FINGERPRINT_HEX_CHARS);
        for byte in digest.iter().take(FINGERPRINT_HEX_CHARS / 2) {
            hex.push_str(&format!("{:02x}", byte));
        }
        Self(hex)
    }

    /// Reconstruct an id from its string form (citation lookups).
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Provenance and domain tag for a chunk.
///
/// The private/public axis records where the text came from; the
/// generic/financial/about axis drives prioritization and filtering
/// downstream (financial chunks rank first in context assembly).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkKind {
    /// Spreadsheet sheet with no financial signal in its name
    ExcelGeneric,
    /// Spreadsheet sheet named like a financial statement
    ExcelFinancial,
    /// One page of a PDF document
    Pdf,
    /// Markdown section under a generic header
    MarkdownGeneric,
    /// Markdown section under a financial header
    MarkdownFinancial,
    /// Markdown section under an about/profile header
    MarkdownAbout,
    /// Whole-file plain-text fallback
    FullText,
    /// Word-processor paragraph range
    Docx,
    /// Web page section or full page without domain signal
    WebGeneric,
    /// Web page section under an investor-relations heading
    WebFinancial,
    /// Web page section under an about heading
    WebAbout,
}

impl ChunkKind {
    /// Display tag for the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkKind::ExcelGeneric => "private_excel_generic",
            ChunkKind::ExcelFinancial => "private_excel_financial",
            ChunkKind::Pdf => "private_pdf",
            ChunkKind::MarkdownGeneric => "private_text_generic",
            ChunkKind::MarkdownFinancial => "private_text_financial",
            ChunkKind::MarkdownAbout => "private_text_about",
            ChunkKind::FullText => "private_text",
            ChunkKind::Docx => "private_docx",
            ChunkKind::WebGeneric => "public_web_generic",
            ChunkKind::WebFinancial => "public_web_financial",
            ChunkKind::WebAbout => "public_web_about",
        }
    }

    /// Whether the chunk came from a private document.
    pub fn is_private(&self) -> bool {
        !matches!(
            self,
            ChunkKind::WebGeneric | ChunkKind::WebFinancial | ChunkKind::WebAbout
        )
    }

    /// Whether the chunk came from a public web page.
    pub fn is_public(&self) -> bool {
        !self.is_private()
    }

    /// Whether the chunk carries financial content.
    pub fn is_financial(&self) -> bool {
        matches!(
            self,
            ChunkKind::ExcelFinancial | ChunkKind::MarkdownFinancial | ChunkKind::WebFinancial
        )
    }
}

impl fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A chunk - the atomic attributable unit of extracted source text.
///
/// Chunks are created exclusively by a format chunker from one source and are
/// never mutated after creation; they live in memory for the duration of one
/// company's analysis and are discarded after citation rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    /// Content-addressed fingerprint
    pub id: ChunkId,

    /// Cleaned content text
    pub text: String,

    /// Originating filename or URL
    pub source: String,

    /// Human-readable locator within the source (sheet, page, section...)
    pub location: String,

    /// Provenance and domain tag
    pub kind: ChunkKind,
}

impl Chunk {
    /// Create a chunk, deriving its fingerprint from the other fields.
    pub fn new(
        text: impl Into<String>,
        source: impl Into<String>,
        location: impl Into<String>,
        kind: ChunkKind,
    ) -> Self {
        let text = text.into();
        let source = source.into();
        let location = location.into();
        let id = ChunkId::fingerprint(&source, &location, &text);
        Self {
            id,
            text,
            source,
            location,
            kind,
        }
    }
}
