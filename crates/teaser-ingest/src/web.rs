//! Web-page chunker: one chunk per heading section

use crate::clean::{clean_text, truncate_chars};
use crate::error::IngestError;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use teaser_domain::{Chunk, ChunkKind};
use tracing::{info, warn};

/// Timeout for a page fetch.
const FETCH_TIMEOUT_SECS: u64 = 15;

/// Browser-like identification; some company sites refuse default clients.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
(KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";

/// Per-section text cap when the page has headings.
const SECTION_TEXT_CAP: usize = 4000;

/// Full-page text cap when the page has no headings.
const PAGE_TEXT_CAP: usize = 10000;

/// Heading sections shorter than this carry no usable content.
const MIN_SECTION_TEXT: usize = 50;

/// Width of the section locator shown in citations.
const LOCATION_TITLE_CAP: usize = 50;

/// Non-content tags excluded from text collection.
const SKIPPED_TAGS: [&str; 5] = ["script", "style", "nav", "footer", "iframe"];

/// Fetches and chunks public web pages.
pub struct WebScraper {
    client: reqwest::Client,
}

impl WebScraper {
    /// Create a scraper with browser-like identification and a bounded
    /// timeout. Corporate sites frequently ship broken certificates, so
    /// verification failures are tolerated.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .danger_accept_invalid_certs(true)
            .build()
            .expect("client configuration is static");
        Self { client }
    }

    /// Scrape a URL into chunks. Any network failure or non-success status
    /// logs a warning and yields zero chunks.
    pub async fn scrape(&self, url: &str) -> Vec<Chunk> {
        info!("scraping: {}", url);
        match self.fetch(url).await {
            Ok(html) => chunks_from_html(url, &html),
            Err(e) => {
                warn!("failed to scrape {}: {}", url, e);
                Vec::new()
            }
        }
    }

    async fn fetch(&self, url: &str) -> Result<String, IngestError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| IngestError::Fetch(e.to_string()))?;
        if !response.status().is_success() {
            return Err(IngestError::Fetch(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }
        response
            .text()
            .await
            .map_err(|e| IngestError::Fetch(e.to_string()))
    }
}

impl Default for WebScraper {
    fn default() -> Self {
        Self::new()
    }
}

/// Chunk a parsed page: per-heading sections when h1-h3 exist, the whole
/// page otherwise.
pub(crate) fn chunks_from_html(url: &str, html: &str) -> Vec<Chunk> {
    let document = Html::parse_document(html);
    let heading_selector = Selector::parse("h1, h2, h3").expect("static selector");
    let headings: Vec<ElementRef> = document.select(&heading_selector).collect();

    if headings.is_empty() {
        let text = clean_text(&collect_text(document.root_element(), "\n"));
        if text.is_empty() {
            return Vec::new();
        }
        return vec![Chunk::new(
            truncate_chars(&text, PAGE_TEXT_CAP),
            url,
            "Main Page",
            ChunkKind::WebGeneric,
        )];
    }

    let mut chunks = Vec::new();
    for heading in headings {
        let title = clean_text(&heading.text().collect::<String>());
        let body = section_body(heading);
        let text = clean_text(&body);
        if text.chars().count() > MIN_SECTION_TEXT {
            chunks.push(Chunk::new(
                truncate_chars(&text, SECTION_TEXT_CAP),
                url,
                format!("Section: {}", truncate_chars(&title, LOCATION_TITLE_CAP)),
                kind_for_heading(&title),
            ));
        }
    }
    chunks
}

/// Text of every sibling node following a heading, up to the next heading.
fn section_body(heading: ElementRef) -> String {
    let mut body = String::new();
    for sibling in heading.next_siblings() {
        if let Some(element) = ElementRef::wrap(sibling) {
            if matches!(element.value().name(), "h1" | "h2" | "h3") {
                break;
            }
            body.push_str(&collect_text(element, " "));
            body.push(' ');
        } else if let Some(text) = sibling.value().as_text() {
            body.push_str(text);
            body.push(' ');
        }
    }
    body
}

/// Recursively collect element text, skipping non-content tags.
fn collect_text(element: ElementRef, separator: &str) -> String {
    fn walk(element: ElementRef, separator: &str, out: &mut String) {
        if SKIPPED_TAGS.contains(&element.value().name()) {
            return;
        }
        for child in element.children() {
            if let Some(text) = child.value().as_text() {
                out.push_str(text);
                out.push_str(separator);
            } else if let Some(child_element) = ElementRef::wrap(child) {
                walk(child_element, separator, out);
            }
        }
    }

    let mut out = String::new();
    walk(element, separator, &mut out);
    out
}

fn kind_for_heading(title: &str) -> ChunkKind {
    let lower = title.to_lowercase();
    if lower.contains("about") {
        ChunkKind::WebAbout
    } else if lower.contains("investor") {
        ChunkKind::WebFinancial
    } else {
        ChunkKind::WebGeneric
    }
}
