//! Per-company processing: ingest, analyze, illustrate, render.

use regex::Regex;
use std::path::{Path, PathBuf};
use teaser_analysis::AnalysisAgent;
use teaser_domain::{Chunk, CostLedger, TextGenerator};
use teaser_ingest::UniversalLoader;
use teaser_render::{write_citation_report, write_deck};
use teaser_visual::VisualEngine;
use tracing::{error, info, warn};

/// Images fetched per deck, one per slide.
const SLIDE_COUNT: usize = 3;

/// Keyword used when the generator supplies too few visual keywords.
const FALLBACK_KEYWORD: &str = "office";

/// What one company's run produced, for the batch summary.
#[derive(Debug, Clone)]
pub struct CompanyOutcome {
    /// Company name derived from the source filename
    pub company: String,

    /// Whether a deck and citation report were produced
    pub success: bool,

    /// Generation spend for this company, INR
    pub cost_inr: f64,
}

/// Derive the real company name from a source filename.
///
/// `Ind Swift-OnePager.md` carries the real name `Ind Swift`; the common
/// artifact suffixes are stripped so anonymity checks test the right string.
pub fn clean_company_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let suffixes = Regex::new(r"(?i)[-_ ]?(OnePager|Pitch|Deck|Teaser|Report|Analysis)")
        .expect("static regex");
    suffixes.replace_all(stem, "").trim().to_string()
}

/// Extract a company website URL from a `## Website` section, if present.
pub fn extract_website_url(content: &str) -> Option<String> {
    let pattern = Regex::new(r#"(?is)##\s*Website.*?(https?://[^\s<>)"]+)"#)
        .expect("static regex");
    pattern
        .captures(content)
        .map(|captures| captures[1].to_string())
}

/// Log how much usable material the chunkers gathered.
fn assess_data_quality(chunks: &[Chunk]) {
    let private = chunks.iter().filter(|c| c.kind.is_private()).count();
    let web = chunks.iter().filter(|c| c.kind.is_public()).count();
    let financial = chunks.iter().filter(|c| c.kind.is_financial()).count();
    info!(
        "DATA QUALITY: {} chunks (Pvt: {}, Web: {}, Fin: {})",
        chunks.len(),
        private,
        web,
        financial
    );
}

/// Run the full pipeline for one company file.
///
/// Failures along the way degrade: no chunks or a rejected analysis produce a
/// failed outcome carrying whatever cost accrued, and the batch moves on.
pub async fn process_company<G>(
    file: &Path,
    loader: &UniversalLoader,
    agent: &AnalysisAgent<G>,
    visual: Option<&mut VisualEngine>,
    out_dir: &Path,
) -> CompanyOutcome
where
    G: TextGenerator + Send + Sync,
    G::Error: std::fmt::Display,
{
    let company = clean_company_name(file);
    info!("processing: {} (file: {})", company, file.display());

    // A. Private documents
    let mut chunks = loader.load(&file.to_string_lossy()).await;

    // B. Public website, when the one-pager links one
    if let Ok(content) = std::fs::read_to_string(file) {
        if let Some(url) = extract_website_url(&content) {
            info!("found website: {} -> scraping", url);
            chunks.extend(loader.load(&url).await);
        }
    }

    if chunks.is_empty() {
        error!("no data found for {}", company);
        return CompanyOutcome {
            company,
            success: false,
            cost_inr: 0.0,
        };
    }
    assess_data_quality(&chunks);

    // C. Analyze
    let mut ledger = CostLedger::new();
    let outcome = match agent.analyze_company(&chunks, &company, &mut ledger).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("analysis failed for {}: {}", company, e);
            return CompanyOutcome {
                company,
                success: false,
                cost_inr: ledger.total_inr(),
            };
        }
    };

    // D. Visuals
    let images = match visual {
        Some(engine) => fetch_slide_images(engine, &outcome, &company, out_dir).await,
        None => vec![None; SLIDE_COUNT],
    };

    // E. Artifacts
    let deck_path = out_dir.join(format!("Output_{}.md", company));
    let citations_path = out_dir.join(format!("Citations_{}.md", company));
    let mut success = true;
    if let Err(e) = write_deck(&outcome.result, &images, &deck_path) {
        error!("could not write deck for {}: {}", company, e);
        success = false;
    }
    if let Err(e) = write_citation_report(&outcome.result, &chunks, &citations_path) {
        error!("could not write citations for {}: {}", company, e);
        success = false;
    }

    // F. Temp cleanup
    for image in images.into_iter().flatten() {
        if let Err(e) = std::fs::remove_file(&image) {
            warn!("could not remove temp image {}: {}", image.display(), e);
        }
    }

    CompanyOutcome {
        company,
        success,
        cost_inr: ledger.total_inr(),
    }
}

async fn fetch_slide_images(
    engine: &mut VisualEngine,
    outcome: &teaser_analysis::AnalysisOutcome,
    company: &str,
    out_dir: &Path,
) -> Vec<Option<PathBuf>> {
    let keywords = &outcome.result.visual_keywords;
    let sector = outcome.sector.as_str();

    let mut images = Vec::with_capacity(SLIDE_COUNT);
    for slide in 0..SLIDE_COUNT {
        let keyword = keywords
            .get(slide)
            .map(String::as_str)
            .unwrap_or(FALLBACK_KEYWORD);
        let url = match engine.fetch_image(keyword, sector, slide + 1).await {
            Some(url) => url,
            None => {
                images.push(None);
                continue;
            }
        };
        let path = out_dir.join(format!("temp_{}_{}.jpg", company, slide));
        if engine.download(&url, &path).await {
            images.push(Some(path));
        } else {
            images.push(None);
        }
    }
    images
}
