//! End-to-end agent tests over a realistic chunk set

use teaser_analysis::{classify, AnalysisAgent};
use teaser_domain::{Chunk, ChunkKind, CostLedger, Sector};
use teaser_guard::{Guard, GuardConfig};
use teaser_llm::MockGenerator;

fn pharma_chunks() -> Vec<Chunk> {
    vec![
        Chunk::new(
            "Maker of pharmaceutical intermediates and API supplies for drug formulators.",
            "Ind Swift-OnePager.md",
            "Section: Company Profile",
            ChunkKind::MarkdownAbout,
        ),
        Chunk::new(
            "| Year | Revenue |\n| 2023 | 100 Cr |\n| 2024 | 120 Cr |",
            "financials.xlsx",
            "Sheet: P&L Summary",
            ChunkKind::ExcelFinancial,
        ),
    ]
}

fn response(sector: &str) -> String {
    format!(
        r#"{{
            "code_name": "Project X",
            "sector": "{}",
            "slide_1": {{"headline": "Niche API platform", "sub_headline": "S", "bullets": ["WHO-GMP"]}},
            "slide_2": {{"metrics": {{"Total Revenue (INR Cr)": "120"}},
                        "chart_data": {{"years": ["2023", "2024"], "revenue_values": [100, 120], "data_quality": "Actuals"}}}},
            "slide_3": {{"hooks": ["Sticky customer base"]}},
            "citations": [{{"id": "deadbeef", "claim": "Revenue grew to 120 Cr", "source_display": "Internal Doc"}}]
        }}"#,
        sector
    )
}

#[test]
fn classifier_reads_the_chunk_sample() {
    assert_eq!(classify(&pharma_chunks()), Sector::Pharma);
}

#[tokio::test(start_paused = true)]
async fn agent_carries_detected_sector_into_outcome() {
    let generator = MockGenerator::new(response("Pharma"));
    let agent = AnalysisAgent::new(generator, Guard::new(GuardConfig::default()).unwrap());

    let mut ledger = CostLedger::new();
    let outcome = agent
        .analyze_company(&pharma_chunks(), "Ind Swift", &mut ledger)
        .await
        .unwrap();

    assert_eq!(outcome.sector, Sector::Pharma);
    assert_eq!(outcome.result.sector, "Pharma");
    assert_eq!(outcome.result.citations.len(), 1);
    assert!(ledger.total_inr() > 0.0);
}

#[tokio::test(start_paused = true)]
async fn echoed_filename_in_citation_is_scrubbed() {
    let leaky = response("Pharma").replace("Internal Doc", "Ind Swift-OnePager.md");
    let generator = MockGenerator::new(leaky);
    let agent = AnalysisAgent::new(generator, Guard::new(GuardConfig::default()).unwrap());

    let mut ledger = CostLedger::new();
    let outcome = agent
        .analyze_company(&pharma_chunks(), "Ind Swift", &mut ledger)
        .await
        .unwrap();

    assert_eq!(outcome.result.citations[0].source_display, "Internal Doc");
}
