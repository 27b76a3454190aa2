//! Context assembly: the bounded payload handed to the generation step

use std::cmp::Reverse;
use std::collections::HashSet;
use teaser_domain::Chunk;

/// Hard cap on the assembled context, in characters.
const MAX_CONTEXT_CHARS: usize = 1_000_000;

/// Per-entry cap on chunk text, in characters.
const MAX_ENTRY_TEXT_CHARS: usize = 40_000;

const CONTEXT_HEADER: &str = "DATA VAULT (Cite these IDs):\n";

/// The assembled generation payload.
pub struct AssembledContext {
    /// Formatted, citable entries up to the context cap
    pub text: String,

    /// Reserved for leak-token tracking
    pub placeholders: HashSet<String>,
}

/// Order and truncate chunks into the generation payload.
///
/// Financial chunks rank above all others; the sort is stable so original
/// order is preserved among equals, which keeps assembly reproducible.
/// Appending stops at the first entry that would push the total past the
/// cap; entries are never split.
pub fn assemble_context(chunks: &[Chunk]) -> AssembledContext {
    let mut ordered: Vec<&Chunk> = chunks.iter().collect();
    ordered.sort_by_key(|chunk| Reverse(priority(chunk)));

    let mut text = String::from(CONTEXT_HEADER);
    let mut total_chars = CONTEXT_HEADER.chars().count();
    for chunk in ordered {
        let entry = format!(
            "[{}] SOURCE: {} ({})\n{}\n\n",
            chunk.id,
            chunk.source,
            chunk.location,
            truncate_chars(&chunk.text, MAX_ENTRY_TEXT_CHARS)
        );
        let entry_chars = entry.chars().count();
        if total_chars + entry_chars > MAX_CONTEXT_CHARS {
            break;
        }
        text.push_str(&entry);
        total_chars += entry_chars;
    }

    AssembledContext {
        text,
        placeholders: HashSet::new(),
    }
}

fn priority(chunk: &Chunk) -> u8 {
    if chunk.kind.is_financial() {
        3
    } else {
        1
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use teaser_domain::ChunkKind;

    fn chunk(text: &str, kind: ChunkKind) -> Chunk {
        Chunk::new(text, "pager.md", "Section: Intro", kind)
    }

    #[test]
    fn test_financial_chunks_rank_first() {
        let chunks = vec![
            chunk("generic alpha", ChunkKind::MarkdownGeneric),
            chunk("financial beta", ChunkKind::MarkdownFinancial),
            chunk("generic gamma", ChunkKind::MarkdownGeneric),
        ];
        let assembled = assemble_context(&chunks);

        let beta = assembled.text.find("financial beta").unwrap();
        let alpha = assembled.text.find("generic alpha").unwrap();
        let gamma = assembled.text.find("generic gamma").unwrap();
        assert!(beta < alpha);
        assert!(alpha < gamma);
    }

    #[test]
    fn test_order_stable_among_equal_priority() {
        let chunks: Vec<Chunk> = (0..10)
            .map(|i| chunk(&format!("entry number {:02}", i), ChunkKind::MarkdownGeneric))
            .collect();
        let assembled = assemble_context(&chunks);

        let positions: Vec<usize> = (0..10)
            .map(|i| assembled.text.find(&format!("entry number {:02}", i)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_entries_carry_id_and_provenance() {
        let chunks = vec![chunk("some body text", ChunkKind::MarkdownGeneric)];
        let assembled = assemble_context(&chunks);
        let expected = format!(
            "[{}] SOURCE: pager.md (Section: Intro)\nsome body text\n\n",
            chunks[0].id
        );
        assert!(assembled.text.starts_with(CONTEXT_HEADER));
        assert!(assembled.text.contains(&expected));
    }

    #[test]
    fn test_cap_drops_whole_entries() {
        // Each entry is ~100_040 chars; the cap fits nine, not ten.
        let chunks: Vec<Chunk> = (0..12)
            .map(|i| chunk(&format!("{}{}", i, "x".repeat(100_000)), ChunkKind::MarkdownGeneric))
            .collect();
        let assembled = assemble_context(&chunks);

        assert!(assembled.text.chars().count() <= MAX_CONTEXT_CHARS);
        // Entries present are complete: every opening bracket has its full
        // entry terminator.
        let entries = assembled.text.matches("] SOURCE: ").count();
        let terminators = assembled.text.matches("\n\n").count();
        assert_eq!(entries, terminators);
        assert!(entries < 12);
    }

    #[test]
    fn test_per_entry_text_truncated() {
        let chunks = vec![chunk(&"y".repeat(50_000), ChunkKind::MarkdownGeneric)];
        let assembled = assemble_context(&chunks);
        let longest_run = assembled
            .text
            .split(|c| c != 'y')
            .map(|run| run.len())
            .max()
            .unwrap_or(0);
        assert_eq!(longest_run, MAX_ENTRY_TEXT_CHARS);
    }

    #[test]
    fn test_empty_chunk_set() {
        let assembled = assemble_context(&[]);
        assert_eq!(assembled.text, CONTEXT_HEADER);
        assert!(assembled.placeholders.is_empty());
    }
}
