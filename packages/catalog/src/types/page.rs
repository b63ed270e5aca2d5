//! Page types - documents returned by a fetcher.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fetched HTML document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedPage {
    /// URL that was requested
    pub url: String,

    /// URL after redirects; relative links resolve against this
    pub final_url: String,

    /// Raw HTML body
    pub html: String,

    /// When the page was fetched
    pub fetched_at: DateTime<Utc>,
}

impl FetchedPage {
    /// Create a page that was served from the requested URL.
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            final_url: url.clone(),
            url,
            html: html.into(),
            fetched_at: Utc::now(),
        }
    }

    /// Record the URL the request was redirected to.
    pub fn with_final_url(mut self, final_url: impl Into<String>) -> Self {
        self.final_url = final_url.into();
        self
    }
}
