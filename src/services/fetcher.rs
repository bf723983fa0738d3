use crate::error::{HarvestError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Retrieves raw markup for a url.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| HarvestError::fetch(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Prepends `https://` unless the url already names an http(s) scheme.
    pub fn normalize_url(url: &str) -> String {
        let url = url.trim();
        if Self::has_http_scheme(url) {
            url.to_string()
        } else {
            format!("https://{}", url)
        }
    }

    fn has_http_scheme(url: &str) -> bool {
        let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
        lower.starts_with("http://") || lower.starts_with("https://")
    }

    fn resolve(url: &str) -> Result<Url> {
        let normalized = Self::normalize_url(url);
        Url::parse(&normalized)
            .map_err(|e| HarvestError::fetch(format!("Invalid URL '{}': {}", normalized, e)))
    }

    fn classify(url: &Url, err: reqwest::Error) -> HarvestError {
        let reason = if err.is_timeout() {
            format!("Request to {} timed out", url)
        } else if err.is_connect() {
            format!("Could not connect to {}: {}", url, err)
        } else if err.is_body() || err.is_decode() {
            format!("Failed to read response body from {}: {}", url, err)
        } else {
            format!("Request to {} failed: {}", url, err)
        };
        HarvestError::fetch(reason)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let url = Self::resolve(url)?;
        info!("Fetching page: {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Self::classify(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::fetch(format!("HTTP {} for {}", status, url)));
        }

        let body = response.text().await.map_err(|e| Self::classify(&url, e))?;
        debug!("Fetched {} bytes from {}", body.len(), url);

        Ok(body)
    }
}
