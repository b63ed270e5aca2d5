//! HTTP-based fetcher implementation.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};
use crate::traits::fetcher::Fetcher;
use crate::types::page::FetchedPage;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

/// HTTP fetcher: one GET per call, no retries, transport-default timeouts.
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        debug!(url = %url, "HTTP fetch starting");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "HTTP request failed");
                CatalogError::network(url, e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "HTTP error status");
            return Err(CatalogError::network(url, format!("HTTP {}", status)));
        }

        // Capture final URL after redirects
        let final_url = response.url().to_string();

        let html = response
            .text()
            .await
            .map_err(|e| CatalogError::network(url, e))?;

        debug!(url = %url, final_url = %final_url, bytes = html.len(), "Page fetched");

        Ok(FetchedPage::new(url, html).with_final_url(final_url))
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let fetcher = HttpFetcher::new();

        let err = fetcher.fetch("http://127.0.0.1:9/manga").await.unwrap_err();
        assert!(matches!(err, CatalogError::Network { ref url, .. } if url == "http://127.0.0.1:9/manga"));
    }

    #[test]
    fn test_user_agent_override() {
        let fetcher = HttpFetcher::new().with_user_agent("catalog-test/1.0");
        assert_eq!(fetcher.user_agent, "catalog-test/1.0");
        assert_eq!(fetcher.name(), "http");
    }
}
