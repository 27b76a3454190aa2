//! Citation report: claims resolved back to their source chunks

use crate::RenderError;
use std::collections::HashMap;
use std::path::Path;
use teaser_domain::{AnalysisResult, Chunk};
use tracing::info;

/// Excerpt length quoted per resolved citation.
const EXCERPT_CHARS: usize = 300;

/// Write the citation report for one company.
pub fn write_citation_report(
    result: &AnalysisResult,
    chunks: &[Chunk],
    path: &Path,
) -> Result<(), RenderError> {
    std::fs::write(path, citation_report(result, chunks))?;
    info!("citation report saved: {}", path.display());
    Ok(())
}

/// Render the report. Citations whose id matches a known chunk quote the
/// chunk's provenance and an excerpt; unknown ids fall back to the display
/// source with a "not found" note.
pub fn citation_report(result: &AnalysisResult, chunks: &[Chunk]) -> String {
    let by_id: HashMap<&str, &Chunk> = chunks
        .iter()
        .map(|chunk| (chunk.id.as_str(), chunk))
        .collect();

    let mut out = format!("# Citation Report - {}\n\n", result.code_name);
    for citation in &result.citations {
        let claim = if citation.claim.is_empty() {
            "Claim"
        } else {
            &citation.claim
        };
        out.push_str(&format!("## {}\n\n", claim));

        match by_id.get(citation.id.as_str()) {
            Some(chunk) => {
                let excerpt: String = chunk.text.chars().take(EXCERPT_CHARS).collect();
                out.push_str(&format!("Source: {}\n", chunk.source));
                out.push_str(&format!("Location: {}\n", chunk.location));
                out.push_str(&format!("Excerpt: \"{}...\"\n\n", excerpt));
            }
            None => {
                let source = if citation.source_display.is_empty() {
                    "Unknown"
                } else {
                    &citation.source_display
                };
                out.push_str(&format!("Source: {}\n", source));
                out.push_str("Note: direct chunk reference not found in data vault.\n\n");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use teaser_domain::{ChunkKind, Citation};

    fn result_with_citation(id: &str) -> AnalysisResult {
        AnalysisResult {
            code_name: "Project X".to_string(),
            citations: vec![Citation {
                id: id.to_string(),
                claim: "Revenue grew to 120 Cr".to_string(),
                source_display: "Internal Doc".to_string(),
            }],
            ..AnalysisResult::default()
        }
    }

    #[test]
    fn test_resolved_citation_quotes_chunk() {
        let chunk = Chunk::new(
            "Revenue grew from 100 Cr to 120 Cr in FY24.",
            "financials.xlsx",
            "Sheet: P&L Summary",
            ChunkKind::ExcelFinancial,
        );
        let result = result_with_citation(chunk.id.as_str());
        let report = citation_report(&result, &[chunk.clone()]);

        assert!(report.contains("# Citation Report - Project X"));
        assert!(report.contains("## Revenue grew to 120 Cr"));
        assert!(report.contains("Source: financials.xlsx"));
        assert!(report.contains("Location: Sheet: P&L Summary"));
        assert!(report.contains("Excerpt: \"Revenue grew from 100 Cr"));
    }

    #[test]
    fn test_unknown_id_notes_missing_chunk() {
        let result = result_with_citation("ffffffff");
        let report = citation_report(&result, &[]);

        assert!(report.contains("Source: Internal Doc"));
        assert!(report.contains("not found in data vault"));
    }

    #[test]
    fn test_excerpt_is_capped() {
        let chunk = Chunk::new(
            "z".repeat(1000),
            "memo.docx",
            "Para 0-End",
            ChunkKind::Docx,
        );
        let result = result_with_citation(chunk.id.as_str());
        let report = citation_report(&result, &[chunk]);

        let longest_run = report
            .split(|c| c != 'z')
            .map(|run| run.len())
            .max()
            .unwrap_or(0);
        assert_eq!(longest_run, EXCERPT_CHARS);
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Citations_Acme.md");
        write_citation_report(&result_with_citation("abc"), &[], &path).unwrap();
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .contains("Citation Report"));
    }
}
