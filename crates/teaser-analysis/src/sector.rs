//! Sector classification by weighted keyword scoring

use teaser_domain::{Chunk, Sector};
use tracing::info;

/// How many leading chunks feed the classification sample.
const SAMPLE_CHUNKS: usize = 15;

/// Scores at or below this are too weak to trust; classify as General.
const MIN_SECTOR_SCORE: u32 = 5;

/// Weighted keyword sets per sector.
///
/// Declaration order is the tie-break: the first sector to reach the maximum
/// score wins, so reordering this table changes classification of ties.
const SECTOR_KEYWORDS: [(Sector, &[(&str, u32)]); 6] = [
    (
        Sector::Pharma,
        &[("pharmaceutical", 10), ("api", 10), ("drug", 10)],
    ),
    (Sector::Tech, &[("saas", 10), ("software", 10)]),
    (Sector::Manufacturing, &[("plant", 10), ("factory", 10)]),
    (Sector::Logistics, &[("fleet", 10)]),
    (Sector::ConsumerGoods, &[("fmcg", 10)]),
    (Sector::D2c, &[("ecommerce", 10)]),
];

/// Classify a company from the leading chunks of its data set.
pub fn classify(chunks: &[Chunk]) -> Sector {
    let sample = chunks
        .iter()
        .take(SAMPLE_CHUNKS)
        .map(|chunk| chunk.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    let sector = classify_sample(&sample);
    info!("sector: {}", sector);
    sector
}

/// Score the lowercased sample against every sector's keyword set.
pub(crate) fn classify_sample(sample: &str) -> Sector {
    let mut best = Sector::General;
    let mut best_score = 0u32;
    for (sector, keywords) in SECTOR_KEYWORDS {
        let score: u32 = keywords
            .iter()
            .map(|(keyword, weight)| sample.matches(keyword).count() as u32 * weight)
            .sum();
        if score > best_score {
            best_score = score;
            best = sector;
        }
    }

    if best_score > MIN_SECTOR_SCORE {
        best
    } else {
        Sector::General
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teaser_domain::ChunkKind;

    fn chunk(text: &str) -> Chunk {
        Chunk::new(text, "pager.md", "Section: Intro", ChunkKind::MarkdownGeneric)
    }

    #[test]
    fn test_dominant_sector_wins() {
        let sample = "pharmaceutical intermediates and drug masters for api makers";
        assert_eq!(classify_sample(sample), Sector::Pharma);
    }

    #[test]
    fn test_weak_signal_degrades_to_general() {
        // A single keyword occurrence scores 10; below is zero occurrences.
        assert_eq!(classify_sample("a trading company"), Sector::General);
    }

    #[test]
    fn test_occurrences_multiply_weight() {
        // fleet x1 (10) vs software x2 (20).
        let sample = "fleet telematics software for software vendors";
        assert_eq!(classify_sample(sample), Sector::Tech);
    }

    #[test]
    fn test_tie_breaks_by_declaration_order() {
        // One pharma keyword and one tech keyword score 10 each; Pharma is
        // declared first and must win deterministically.
        let sample = "drug discovery software";
        assert_eq!(classify_sample(sample), Sector::Pharma);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let chunks: Vec<Chunk> = (0..20)
            .map(|i| chunk(&format!("plant number {} runs factory lines", i)))
            .collect();
        let first = classify(&chunks);
        for _ in 0..5 {
            assert_eq!(classify(&chunks), first);
        }
        assert_eq!(first, Sector::Manufacturing);
    }

    #[test]
    fn test_only_first_fifteen_chunks_sampled() {
        let mut chunks: Vec<Chunk> = (0..15).map(|_| chunk("nothing sectoral here")).collect();
        chunks.push(chunk("pharmaceutical pharmaceutical pharmaceutical"));
        assert_eq!(classify(&chunks), Sector::General);
    }

    #[test]
    fn test_substring_matching() {
        // "api" matches inside larger words; that looseness is part of the
        // scoring scheme.
        let sample = "api api capital apis";
        assert_eq!(classify_sample(sample), Sector::Pharma);
    }
}
