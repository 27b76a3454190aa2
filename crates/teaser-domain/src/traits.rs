//! Trait definitions for external collaborators
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates (teaser-llm).

use async_trait::async_trait;

/// One completed generation call, with the token usage the cost ledger needs.
#[derive(Debug, Clone)]
pub struct Generation {
    /// Raw response text (expected to be JSON)
    pub text: String,

    /// Prompt tokens billed for the call
    pub input_tokens: u64,

    /// Completion tokens billed for the call
    pub output_tokens: u64,
}

/// Trait for the external text-generation collaborator.
///
/// Implemented by the infrastructure layer (teaser-llm). The generator is a
/// black box: task prompt and context in, JSON text out, fallible.
#[async_trait]
pub trait TextGenerator {
    /// Error type for generation operations
    type Error;

    /// Generate a JSON response for the given task prompt and context.
    async fn generate_json(&self, prompt: &str, context: &str)
        -> Result<Generation, Self::Error>;
}
