//! The structured output contract returned by the generation step

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The anonymized investment summary produced by the generation call.
///
/// Every field defaults: the generator is expected to emit all keys but a
/// partially-filled response is still representable, and the guardrail (not
/// deserialization) decides whether it is acceptable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Anonymized project name (normally "Project X")
    #[serde(default)]
    pub code_name: String,

    /// Sector echoed back by the generator
    #[serde(default)]
    pub sector: String,

    /// Investment-theme slide
    #[serde(default)]
    pub slide_1: SlideOne,

    /// Financials slide
    #[serde(default)]
    pub slide_2: SlideTwo,

    /// Investment-hooks slide
    #[serde(default)]
    pub slide_3: SlideThree,

    /// Claims with chunk-id references back into the data vault
    #[serde(default)]
    pub citations: Vec<Citation>,

    /// Keywords steering stock-photo search, one per slide
    #[serde(default)]
    pub visual_keywords: Vec<String>,
}

/// Headline slide content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlideOne {
    /// Key investment theme
    #[serde(default)]
    pub headline: String,

    /// One-sentence summary
    #[serde(default)]
    pub sub_headline: String,

    /// Highlight bullets
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// Financial metrics slide content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlideTwo {
    /// Named metrics; values are left untyped since generators emit a mix of
    /// strings and numbers
    #[serde(default)]
    pub metrics: Map<String, Value>,

    /// Revenue trend data
    #[serde(default)]
    pub chart_data: ChartData,
}

/// Revenue trend series.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartData {
    /// Year labels
    #[serde(default)]
    pub years: Vec<String>,

    /// Revenue per year
    #[serde(default)]
    pub revenue_values: Vec<f64>,

    /// "Actuals", "Estimates", ...
    #[serde(default)]
    pub data_quality: String,
}

/// Investment hooks slide content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlideThree {
    /// Short hook phrases
    #[serde(default)]
    pub hooks: Vec<String>,
}

/// A claim attributed back to a chunk in the data vault.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Citation {
    /// Chunk fingerprint the claim cites
    #[serde(default)]
    pub id: String,

    /// The claim text
    #[serde(default)]
    pub claim: String,

    /// Anonymized source label shown to readers
    #[serde(default)]
    pub source_display: String,
}
