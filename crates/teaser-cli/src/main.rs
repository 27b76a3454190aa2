//! Teaser CLI - anonymized investment teasers from company documents.

use clap::Parser;
use teaser_analysis::AnalysisAgent;
use teaser_cli::company::{process_company, CompanyOutcome};
use teaser_cli::{Cli, CliError};
use teaser_guard::{Guard, GuardConfig};
use teaser_ingest::UniversalLoader;
use teaser_llm::GeminiGenerator;
use teaser_visual::VisualEngine;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Pre-flight: the generation credential is fatal when absent; the image
    // credential only disables visuals.
    let gemini_key = std::env::var("GEMINI_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or(CliError::MissingCredential("GEMINI_API_KEY"))?;
    let mut visual = match std::env::var("PEXELS_API_KEY") {
        Ok(key) if !key.trim().is_empty() => Some(VisualEngine::new(key)),
        _ => {
            warn!("PEXELS_API_KEY not set; decks will render without images");
            None
        }
    };

    let mut generator = GeminiGenerator::new(gemini_key);
    generator.negotiate_model().await;

    let loader = UniversalLoader::new();
    let guard =
        Guard::new(GuardConfig::default()).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let agent = AnalysisAgent::new(generator, guard);

    std::fs::create_dir_all(&cli.out_dir).map_err(CliError::Io)?;

    let mut outcomes: Vec<CompanyOutcome> = Vec::new();
    for input in cli.gather_inputs()? {
        let outcome =
            process_company(&input, &loader, &agent, visual.as_mut(), &cli.out_dir).await;
        outcomes.push(outcome);
    }

    println!("{}", teaser_cli::output::batch_summary(&outcomes, true));
    Ok(())
}
