//! The analysis agent: generation with a guarded, bounded retry loop

use crate::context::assemble_context;
use crate::error::AnalysisError;
use crate::parser::parse_result;
use crate::prompt::PromptBuilder;
use crate::sector::classify;
use std::time::Duration;
use teaser_domain::{AnalysisResult, Chunk, CostLedger, Sector, TextGenerator};
use teaser_guard::{sanitize, Guard, ValidationStatus};
use tracing::{info, warn};

/// Attempt budget per company.
pub const MAX_ATTEMPTS: usize = 3;

/// Fixed pause between attempts.
const RETRY_DELAY_SECS: u64 = 2;

/// Outcome of a successful company analysis.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// The accepted, sanitized summary
    pub result: AnalysisResult,

    /// Sector detected from the chunk sample
    pub sector: Sector,
}

/// Drives chunks through classification, assembly, generation and the guard.
pub struct AnalysisAgent<G: TextGenerator> {
    generator: G,
    guard: Guard,
}

impl<G> AnalysisAgent<G>
where
    G: TextGenerator + Send + Sync,
    G::Error: std::fmt::Display,
{
    /// Create an agent from a generator and a configured guard.
    pub fn new(generator: G, guard: Guard) -> Self {
        Self { generator, guard }
    }

    /// Analyze one company.
    ///
    /// Each attempt re-invokes generation, re-sanitizes and re-validates; the
    /// first attempt passing both guard checks is returned immediately.
    /// Exhausting the budget is a total failure carrying the last rejection,
    /// with no partial output. Token usage lands in `ledger`, including for
    /// attempts that are later rejected.
    pub async fn analyze_company(
        &self,
        chunks: &[Chunk],
        real_name: &str,
        ledger: &mut CostLedger,
    ) -> Result<AnalysisOutcome, AnalysisError> {
        let sector = classify(chunks);
        let context = assemble_context(chunks);
        let prompt = PromptBuilder::new(real_name, sector).build();

        let mut last_failure = String::new();
        for attempt in 1..=MAX_ATTEMPTS {
            info!("generation attempt {}/{}", attempt, MAX_ATTEMPTS);
            match self.attempt(&prompt, &context.text, real_name, ledger).await {
                Ok(result) => return Ok(AnalysisOutcome { result, sector }),
                Err(failure) => {
                    warn!("attempt {} rejected: {}", attempt, failure);
                    last_failure = failure;
                    if attempt < MAX_ATTEMPTS {
                        tokio::time::sleep(Duration::from_secs(RETRY_DELAY_SECS)).await;
                    }
                }
            }
        }

        Err(AnalysisError::AttemptsExhausted {
            attempts: MAX_ATTEMPTS,
            last_failure,
        })
    }

    async fn attempt(
        &self,
        prompt: &str,
        context: &str,
        real_name: &str,
        ledger: &mut CostLedger,
    ) -> Result<AnalysisResult, String> {
        let generation = self
            .generator
            .generate_json(prompt, context)
            .await
            .map_err(|e| format!("generation error: {}", e))?;
        ledger.record(generation.input_tokens, generation.output_tokens);

        let value = parse_result(&generation.text)?;
        let value = sanitize(value, real_name);

        let review = self.guard.review(&value, real_name);
        if review.status != ValidationStatus::Accepted {
            let reasons: Vec<String> = review.reasons.iter().map(|r| r.to_string()).collect();
            return Err(reasons.join(" | "));
        }
        if let Some(reason) = self.guard.check_citations(&value) {
            warn!("accepted with weak citations: {}", reason);
        }

        serde_json::from_value(value).map_err(|e| format!("contract mismatch: {}", e))
    }
}
