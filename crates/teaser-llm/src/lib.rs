//! Teaser LLM Provider Layer
//!
//! Implementations of the `TextGenerator` trait from `teaser-domain`.
//!
//! # Providers
//!
//! - `MockGenerator`: deterministic scripted responses for testing
//! - `GeminiGenerator`: Gemini-compatible JSON-mode REST integration
//!
//! # Examples
//!
//! ```
//! use teaser_llm::MockGenerator;
//! use teaser_domain::TextGenerator;
//!
//! # async fn example() {
//! let generator = MockGenerator::new(r#"{"sector": "General"}"#);
//! let generation = generator.generate_json("task", "context").await.unwrap();
//! assert_eq!(generation.text, r#"{"sector": "General"}"#);
//! # }
//! ```

#![warn(missing_docs)]

pub mod gemini;

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use teaser_domain::{Generation, TextGenerator};
use thiserror::Error;

pub use gemini::GeminiGenerator;

/// Errors that can occur during generation calls.
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Response body did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Requested model is not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Token usage the mock reports per call.
const MOCK_INPUT_TOKENS: u64 = 1000;
const MOCK_OUTPUT_TOKENS: u64 = 200;

/// Scripted generator for deterministic testing.
///
/// Responses queued with [`MockGenerator::push_response`] are returned in
/// order; once the queue drains, every call returns the default response.
/// Errors can be interleaved to exercise retry paths.
///
/// # Examples
///
/// ```
/// use teaser_llm::MockGenerator;
/// use teaser_domain::TextGenerator;
///
/// # async fn example() {
/// let generator = MockGenerator::new("{}");
/// generator.push_response(r#"{"sector": "Pharma"}"#);
/// assert_eq!(generator.generate_json("p", "c").await.unwrap().text, r#"{"sector": "Pharma"}"#);
/// assert_eq!(generator.generate_json("p", "c").await.unwrap().text, "{}");
/// assert_eq!(generator.call_count(), 2);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockGenerator {
    default_response: String,
    scripted: Arc<Mutex<VecDeque<Result<String, String>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockGenerator {
    /// Create a mock returning a fixed response once scripted ones drain.
    pub fn new(default_response: impl Into<String>) -> Self {
        Self {
            default_response: default_response.into(),
            scripted: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Queue the next response.
    pub fn push_response(&self, response: impl Into<String>) {
        self.scripted
            .lock()
            .unwrap()
            .push_back(Ok(response.into()));
    }

    /// Queue a failing call.
    pub fn push_error(&self, message: impl Into<String>) {
        self.scripted
            .lock()
            .unwrap()
            .push_back(Err(message.into()));
    }

    /// Number of generate calls made so far.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new("{}")
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    type Error = LlmError;

    async fn generate_json(
        &self,
        _prompt: &str,
        _context: &str,
    ) -> Result<Generation, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let next = self.scripted.lock().unwrap().pop_front();
        let text = match next {
            Some(Ok(text)) => text,
            Some(Err(message)) => return Err(LlmError::Other(message)),
            None => self.default_response.clone(),
        };
        Ok(Generation {
            text,
            input_tokens: MOCK_INPUT_TOKENS,
            output_tokens: MOCK_OUTPUT_TOKENS,
        })
    }
}
