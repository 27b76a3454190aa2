//! Gemini Provider Implementation
//!
//! JSON-mode text generation against the Gemini REST API, with model
//! negotiation against the remote model list.
//!
//! # Examples
//!
//! ```no_run
//! use teaser_llm::GeminiGenerator;
//!
//! # async fn example() {
//! let mut generator = GeminiGenerator::new("api-key");
//! let model = generator.negotiate_model().await;
//! println!("using {}", model);
//! # }
//! ```

use crate::LlmError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use teaser_domain::{Generation, TextGenerator};
use tracing::{debug, info, warn};

/// Default API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default timeout for generation requests (30 seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Models probed in order during negotiation.
pub const PRIORITY_MODELS: [&str; 3] = [
    "gemini-2.0-flash-lite",
    "gemini-1.5-flash",
    "gemini-2.5-flash-lite",
];

/// Model assumed when negotiation finds nothing usable.
pub const FALLBACK_MODEL: &str = "gemini-1.5-flash";

/// Gemini REST provider.
pub struct GeminiGenerator {
    endpoint: String,
    api_key: String,
    active_model: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent {
    role: &'static str,
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    usage_metadata: UsageMetadata,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u64,
    #[serde(default)]
    candidates_token_count: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelListResponse {
    #[serde(default)]
    models: Vec<ModelEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelEntry {
    name: String,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

impl GeminiGenerator {
    /// Create a provider against the default endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key)
    }

    /// Create a provider against a custom endpoint (tests, proxies).
    pub fn with_endpoint(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("client configuration is static");
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            active_model: FALLBACK_MODEL.to_string(),
            client,
        }
    }

    /// The model generation calls will use.
    pub fn active_model(&self) -> &str {
        &self.active_model
    }

    /// Probe the remote model list and pick the first priority model that
    /// answers a test generation. Falls back to [`FALLBACK_MODEL`]; never
    /// fails, since the fallback may still work at generation time.
    pub async fn negotiate_model(&mut self) -> String {
        let remotes = match self.list_models().await {
            Ok(remotes) => remotes,
            Err(e) => {
                warn!("model listing failed: {}", e);
                Vec::new()
            }
        };

        for candidate in PRIORITY_MODELS {
            let matched = remotes.iter().find(|name| name.contains(candidate));
            if let Some(model) = matched {
                match self.generate_with_model(model, "Test", "").await {
                    Ok(_) => {
                        self.active_model = model.clone();
                        info!("negotiated model: {}", self.active_model);
                        return self.active_model.clone();
                    }
                    Err(e) => debug!("model {} failed probe: {}", model, e),
                }
            }
        }

        self.active_model = FALLBACK_MODEL.to_string();
        info!("falling back to model: {}", self.active_model);
        self.active_model.clone()
    }

    /// Remote model names that support content generation.
    async fn list_models(&self) -> Result<Vec<String>, LlmError> {
        let url = format!("{}/models?key={}", self.endpoint, self.api_key);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LlmError::Communication(e.to_string()))?;
        if !response.status().is_success() {
            return Err(LlmError::Communication(format!(
                "HTTP {} listing models",
                response.status()
            )));
        }
        let list: ModelListResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;
        Ok(list
            .models
            .into_iter()
            .filter(|m| {
                m.supported_generation_methods
                    .iter()
                    .any(|method| method == "generateContent")
            })
            .map(|m| m.name.replace("models/", ""))
            .collect())
    }

    async fn generate_with_model(
        &self,
        model: &str,
        prompt: &str,
        context: &str,
    ) -> Result<Generation, LlmError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, model, self.api_key
        );

        let mut contents = Vec::new();
        if !context.is_empty() {
            contents.push(RequestContent {
                role: "user",
                parts: vec![RequestPart {
                    text: format!("CONTEXT:\n{}", context),
                }],
            });
        }
        contents.push(RequestContent {
            role: "user",
            parts: vec![RequestPart {
                text: prompt.to_string(),
            }],
        });

        let body = GenerateRequest {
            contents,
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(model.to_string()));
        }
        if !response.status().is_success() {
            let status = response.status();
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(LlmError::Communication(format!("HTTP {}: {}", status, detail)));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let text = parsed
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.clone())
            .ok_or_else(|| LlmError::InvalidResponse("no candidates in response".to_string()))?;

        Ok(Generation {
            text,
            input_tokens: parsed.usage_metadata.prompt_token_count,
            output_tokens: parsed.usage_metadata.candidates_token_count,
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    type Error = LlmError;

    async fn generate_json(&self, prompt: &str, context: &str) -> Result<Generation, Self::Error> {
        self.generate_with_model(&self.active_model, prompt, context)
            .await
    }
}
