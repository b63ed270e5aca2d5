//! Mock fetcher for testing.
//!
//! Provides a configurable mock implementation of the Fetcher trait.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{CatalogError, Result};
use crate::traits::fetcher::Fetcher;
use crate::types::page::FetchedPage;

/// Mock fetcher for testing.
///
/// Serves canned documents by URL. Unknown URLs fail like an HTTP 404 would,
/// which the extractor reports as a network error.
///
/// # Example
///
/// ```rust
/// use catalog::fetchers::MockFetcher;
///
/// let mock = MockFetcher::new()
///     .with_page("https://example.com/manga/Blue-Lock", "<div id=\"manga-page\"></div>");
/// assert_eq!(mock.call_count(), 0);
/// ```
#[derive(Default, Clone)]
pub struct MockFetcher {
    /// Canned pages indexed by URL
    pages: Arc<RwLock<HashMap<String, FetchedPage>>>,
    /// Canned transport failures indexed by URL
    failures: Arc<RwLock<HashMap<String, String>>>,
    /// Track requested URLs for verification
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    /// Create a new empty mock fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for `url`.
    pub fn add_page(&self, url: impl Into<String>, html: impl Into<String>) {
        let url = url.into();
        let page = FetchedPage::new(url.clone(), html);
        self.pages.write().unwrap().insert(url, page);
    }

    /// Serve a page that was reached through a redirect.
    pub fn add_redirect(&self, url: impl Into<String>, final_url: impl Into<String>, html: impl Into<String>) {
        let url = url.into();
        let page = FetchedPage::new(url.clone(), html).with_final_url(final_url);
        self.pages.write().unwrap().insert(url, page);
    }

    /// Fail requests for `url` with a transport error.
    pub fn add_failure(&self, url: impl Into<String>, reason: impl Into<String>) {
        self.failures.write().unwrap().insert(url.into(), reason.into());
    }

    /// Serve `html` for `url` (builder pattern).
    pub fn with_page(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.add_page(url, html);
        self
    }

    /// Fail requests for `url` (builder pattern).
    pub fn with_failure(self, url: impl Into<String>, reason: impl Into<String>) -> Self {
        self.add_failure(url, reason);
        self
    }

    /// Get the number of fetches made.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Get the URLs that were requested, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Clear all recorded calls.
    pub fn reset_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        // Record the call
        self.calls.write().unwrap().push(url.to_string());

        if let Some(reason) = self.failures.read().unwrap().get(url) {
            return Err(CatalogError::network(url, reason));
        }

        self.pages
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| CatalogError::network(url, "HTTP 404 Not Found"))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
