//! Teaser Visual
//!
//! Stock-photo search for slide illustration. Queries lean on a per-sector
//! "vibe" so results look abstract rather than identifiable, and candidates
//! whose alt text suggests logos, signage or charts are rejected since those
//! can deanonymize or clash with rendered content.
//!
//! Every failure degrades to `None`/`false`: missing imagery never fails a
//! company.

#![warn(missing_docs)]

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use teaser_domain::Sector;
use tracing::{debug, warn};

/// Default search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.pexels.com/v1";

/// Timeout for a search request.
const SEARCH_TIMEOUT_SECS: u64 = 5;

/// Timeout for an image download.
const DOWNLOAD_TIMEOUT_SECS: u64 = 10;

/// Candidates requested per search.
const RESULTS_PER_QUERY: u32 = 10;

/// Alt-text terms that disqualify a candidate.
const RISKY_ALT_TERMS: [&str; 6] = ["logo", "text", "sign", "dashboard", "graph", "chart"];

/// One image decision, kept for post-run review.
#[derive(Debug, Clone)]
pub struct AuditEntry {
    /// Slide the image was fetched for
    pub slide: usize,

    /// Query that produced the image
    pub query: String,

    /// Chosen image URL
    pub url: String,

    /// Which query strategy succeeded
    pub decision: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Deserialize)]
struct Photo {
    #[serde(default)]
    alt: String,
    src: PhotoSrc,
}

#[derive(Deserialize)]
struct PhotoSrc {
    large2x: String,
}

/// Searches and downloads slide imagery.
pub struct VisualEngine {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
    audit_log: Vec<AuditEntry>,
}

impl VisualEngine {
    /// Create an engine against the default endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key)
    }

    /// Create an engine against a custom endpoint (tests, proxies).
    pub fn with_endpoint(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(SEARCH_TIMEOUT_SECS))
            .build()
            .expect("client configuration is static");
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            client,
            audit_log: Vec::new(),
        }
    }

    /// Fetch an image URL for one slide.
    ///
    /// Tries a smart query combining the sector vibe with the generator's
    /// keyword, then the bare vibe. The vibe rotates by slide index so a
    /// deck's three slides do not repeat the same query.
    pub async fn fetch_image(
        &mut self,
        keyword: &str,
        sector: &str,
        slide_index: usize,
    ) -> Option<String> {
        let vibes = vibe_queries(sector);
        let vibe = vibes[slide_index % vibes.len()];
        let smart_query = format!("{} {} no text", vibe, keyword);

        let (url, decision) = match self.search(&smart_query).await {
            Some(url) => (url, "Smart Query Success"),
            None => (self.search(vibe).await?, "Fallback to Vibe"),
        };

        self.audit_log.push(AuditEntry {
            slide: slide_index,
            query: smart_query,
            url: url.clone(),
            decision: decision.to_string(),
        });
        Some(url)
    }

    async fn search(&self, query: &str) -> Option<String> {
        let url = format!("{}/search", self.endpoint);
        let per_page = RESULTS_PER_QUERY.to_string();
        let request = self
            .client
            .get(&url)
            .header("Authorization", &self.api_key)
            .query(&[
                ("query", query),
                ("per_page", per_page.as_str()),
                ("orientation", "landscape"),
            ]);

        let response = match request.send().await {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                debug!("image search '{}' returned HTTP {}", query, response.status());
                return None;
            }
            Err(e) => {
                debug!("image search '{}' failed: {}", query, e);
                return None;
            }
        };

        let parsed: SearchResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("image search '{}' bad body: {}", query, e);
                return None;
            }
        };
        first_safe_photo(&parsed.photos)
    }

    /// Download an image to a local path. Failures log and return false.
    pub async fn download(&self, url: &str, path: &Path) -> bool {
        let bytes = match self.fetch_bytes(url).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("image download {} failed: {}", url, e);
                return false;
            }
        };
        match std::fs::write(path, bytes) {
            Ok(()) => true,
            Err(e) => {
                warn!("could not write image {}: {}", path.display(), e);
                false
            }
        }
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, reqwest::Error> {
        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(DOWNLOAD_TIMEOUT_SECS))
            .send()
            .await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Decisions made so far.
    pub fn audit_log(&self) -> &[AuditEntry] {
        &self.audit_log
    }
}

/// First candidate whose alt text avoids every risky term.
fn first_safe_photo(photos: &[Photo]) -> Option<String> {
    photos
        .iter()
        .find(|photo| {
            let alt = photo.alt.to_lowercase();
            !RISKY_ALT_TERMS.iter().any(|term| alt.contains(term))
        })
        .map(|photo| photo.src.large2x.clone())
}

/// Abstract query themes per sector; unknown sectors use the General set.
fn vibe_queries(sector: &str) -> &'static [&'static str] {
    match Sector::parse(sector) {
        Some(Sector::Manufacturing) => &["factory interior blur", "industrial automation"],
        Some(Sector::Pharma) => &[
            "laboratory research blur",
            "pharmaceutical production abstract",
        ],
        Some(Sector::Logistics) => &["warehouse blurred", "container ship aerial"],
        Some(Sector::Tech) => &["abstract blue digital network", "server room bokeh"],
        Some(Sector::ConsumerGoods) => &["retail store blurred", "product packaging texture"],
        _ => &["modern office abstract", "business meeting blur"],
    }
}
