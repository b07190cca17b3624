//! Wikipedia knowledge lookup
//!
//! Resolves a place name (used verbatim as a page title) against the
//! Wikipedia REST summary endpoint, then fetches the rendered page and pulls
//! the `og:image` social-preview tag for a representative image. A missing
//! page, a failed secondary fetch and an absent tag all look the same to the
//! caller: absent data.

use reqwest::Client;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use anyhow::{Context, Result};

/// Wikipedia locale the original castle data lives under
pub const LANGUAGE: &str = "fr";

/// Encyclopedia summary derived per place
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeSummary {
    /// First line of the page summary, when a page exists
    pub description: Option<String>,
    /// Social-preview image URL, when the page declares one
    pub image_url: Option<String>,
}

/// Wikipedia REST API client
pub struct WikipediaClient {
    client: Client,
    base_url: String,
}

impl WikipediaClient {
    /// Create a new client for the configured locale
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("castle-explorer/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: format!("https://{LANGUAGE}.wikipedia.org"),
        })
    }

    /// Look up the summary and preview image for an entity name
    pub async fn lookup(&self, title: &str) -> Result<KnowledgeSummary> {
        debug!("Looking up '{}' on {}.wikipedia.org", title, LANGUAGE);

        let url = format!(
            "{}/api/rest_v1/page/summary/{}",
            self.base_url,
            urlencoding::encode(title)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| "Summary request failed")?;

        // 404 means no page under this exact title
        if !response.status().is_success() {
            debug!("No page found for '{}' ({})", title, response.status());
            return Ok(KnowledgeSummary::default());
        }

        let payload: response::SummaryResponse = response
            .json()
            .await
            .with_context(|| "Failed to parse summary response")?;

        let description = payload
            .extract
            .as_deref()
            .and_then(first_line)
            .map(str::to_string);

        let image_url = match payload.page_url() {
            Some(page_url) => self.fetch_og_image(&page_url).await,
            None => None,
        };

        Ok(KnowledgeSummary {
            description,
            image_url,
        })
    }

    /// Fetch the rendered page and extract its `og:image` tag
    ///
    /// Every failure mode collapses to `None`; the caller cannot tell a
    /// fetch error from a page without a preview image.
    async fn fetch_og_image(&self, page_url: &str) -> Option<String> {
        let response = self.client.get(page_url).send().await.ok()?;
        let body = response.text().await.ok()?;
        extract_og_image(&body)
    }
}

/// Text before the first line break, skipping an empty summary
fn first_line(extract: &str) -> Option<&str> {
    let line = extract.split('\n').next().unwrap_or("").trim();
    if line.is_empty() { None } else { Some(line) }
}

/// Pull the `og:image` content attribute out of a rendered document
fn extract_og_image(body: &str) -> Option<String> {
    let document = Html::parse_document(body);
    let selector = Selector::parse(r#"meta[property="og:image"]"#).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|tag| tag.value().attr("content"))
        .map(str::to_string)
}

/// Wikipedia REST API response payloads
mod response {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct SummaryResponse {
        pub extract: Option<String>,
        pub content_urls: Option<ContentUrls>,
    }

    #[derive(Debug, Deserialize)]
    pub struct ContentUrls {
        pub desktop: Option<PlatformUrls>,
    }

    #[derive(Debug, Deserialize)]
    pub struct PlatformUrls {
        pub page: Option<String>,
    }

    impl SummaryResponse {
        /// Canonical desktop page URL, when the API reports one
        pub fn page_url(&self) -> Option<String> {
            self.content_urls
                .as_ref()
                .and_then(|urls| urls.desktop.as_ref())
                .and_then(|desktop| desktop.page.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line() {
        assert_eq!(
            first_line("Le château de Test est un château fort.\nIl fut construit au XIIe siècle."),
            Some("Le château de Test est un château fort.")
        );
        assert_eq!(first_line("Une seule ligne."), Some("Une seule ligne."));
        assert_eq!(first_line(""), None);
        assert_eq!(first_line("\nsecond line only"), None);
    }

    #[test]
    fn test_extract_og_image() {
        let body = r#"<html><head>
            <meta property="og:title" content="Château de Test"/>
            <meta property="og:image" content="https://upload.wikimedia.org/test.jpg"/>
        </head><body></body></html>"#;
        assert_eq!(
            extract_og_image(body).as_deref(),
            Some("https://upload.wikimedia.org/test.jpg")
        );
    }

    #[test]
    fn test_extract_og_image_absent() {
        let body = "<html><head><title>Château de Test</title></head><body></body></html>";
        assert_eq!(extract_og_image(body), None);
    }

    #[test]
    fn test_summary_response_page_url() {
        let body = r#"{
            "extract": "Le château de Test est un château fort.",
            "content_urls": {"desktop": {"page": "https://fr.wikipedia.org/wiki/Ch%C3%A2teau_de_Test"}}
        }"#;
        let payload: response::SummaryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            payload.page_url().as_deref(),
            Some("https://fr.wikipedia.org/wiki/Ch%C3%A2teau_de_Test")
        );
    }

    #[test]
    fn test_summary_response_without_urls() {
        let payload: response::SummaryResponse = serde_json::from_str("{}").unwrap();
        assert!(payload.extract.is_none());
        assert!(payload.page_url().is_none());
    }
}
