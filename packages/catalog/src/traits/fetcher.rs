//! Fetcher trait for pluggable page retrieval.
//!
//! The extractor only needs "give me the HTML behind this URL". Keeping the
//! transport behind a trait lets tests feed canned documents through the
//! same control flow the live source uses.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::page::FetchedPage;

/// Retrieves one document per call.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch a single URL.
    ///
    /// Fails with `CatalogError::Network` on transport failure or an
    /// unsuccessful HTTP status. No retries.
    async fn fetch(&self, url: &str) -> Result<FetchedPage>;

    /// Get the fetcher name (for logging).
    fn name(&self) -> &str;
}

#[async_trait]
impl<T: Fetcher + ?Sized> Fetcher for std::sync::Arc<T> {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        (**self).fetch(url).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
