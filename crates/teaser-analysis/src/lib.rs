//! Teaser Analysis
//!
//! Drives one company's chunks through classification, context assembly,
//! generation, and the guardrail gate.
//!
//! # Architecture
//!
//! ```text
//! Chunks → Sector Classifier ┐
//!                            ├→ Prompt + Context → TextGenerator → Sanitize → Guard → AnalysisResult
//! Chunks → Context Assembler ┘            (up to 3 attempts)
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use teaser_analysis::AnalysisAgent;
//! use teaser_domain::CostLedger;
//! use teaser_guard::{Guard, GuardConfig};
//! use teaser_llm::MockGenerator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let guard = Guard::new(GuardConfig::default())?;
//! let agent = AnalysisAgent::new(MockGenerator::default(), guard);
//!
//! let mut ledger = CostLedger::new();
//! let outcome = agent.analyze_company(&[], "Acme Widgets", &mut ledger).await?;
//! println!("code name: {}", outcome.result.code_name);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod agent;
mod context;
mod error;
mod parser;
mod prompt;
mod sector;

pub use agent::{AnalysisAgent, AnalysisOutcome, MAX_ATTEMPTS};
pub use context::{assemble_context, AssembledContext};
pub use error::AnalysisError;
pub use prompt::PromptBuilder;
pub use sector::classify;
