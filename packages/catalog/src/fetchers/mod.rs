//! Fetcher implementations.
//!
//! # Available Fetchers
//!
//! - `HttpFetcher` - Single blocking-style HTTP GET per call
//! - `MockFetcher` - Canned documents for testing
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog::fetchers::HttpFetcher;
//! use catalog::traits::fetcher::Fetcher;
//!
//! let fetcher = HttpFetcher::new();
//! let page = fetcher.fetch("https://demonicscans.org/manga/Blue-Lock").await?;
//! ```

mod http;
mod mock;

pub use http::HttpFetcher;
pub use mock::MockFetcher;

// Re-export from traits for convenience
pub use crate::traits::fetcher::Fetcher;
