//! Manga Catalog Library
//!
//! Fetches a title's metadata from a listing site, parses it into a
//! normalized [`Record`], and keeps a local store in step with it.
//!
//! # Design Philosophy
//!
//! - Scraping is fragile: a broken landmark costs one field, never the record
//! - Site markup is data ([`SourceProfile`]), not control flow
//! - Absence is `Option` in the model; sentinel strings only exist on the wire
//! - One row per normalized title
//!
//! # Usage
//!
//! ```rust,ignore
//! use catalog::{CatalogService, Extractor, HttpFetcher, Reconciler, SqliteStore, DEMONICSCANS};
//!
//! let store = SqliteStore::connect("sqlite://mangas.db?mode=rwc").await?;
//! let service = CatalogService::new(
//!     Extractor::new(HttpFetcher::new(), DEMONICSCANS),
//!     Reconciler::new(store),
//! );
//!
//! let confirmation = service.track("Blue Lock").await?;
//! println!("{}", confirmation.message());
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (Fetcher, MangaStore)
//! - [`types`] - Record, stored row and fetched page types
//! - [`sources`] - Landmark tables for the supported sites
//! - [`pipeline`] - Extraction, reconciliation and the composed service
//! - [`stores`] - Storage implementations (SqliteStore, MemoryStore)
//! - [`fetchers`] - Page fetchers (HttpFetcher, MockFetcher)
//! - [`testing`] - Canned pages and sample records for tests

pub mod error;
pub mod fetchers;
pub mod pipeline;
pub mod sources;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

pub use error::{CatalogError, FieldError, Result};
pub use traits::{fetcher::Fetcher, store::MangaStore};
pub use types::{
    page::FetchedPage,
    record::{Record, StoredManga, TitleKey},
};

pub use sources::{SourceProfile, DEMONICSCANS, MANGANATO};

pub use pipeline::{
    CatalogService, Confirmation, Extractor, Reconciler, RefreshOutcome, RefreshReport, Removal,
};

pub use stores::{MemoryStore, SqliteStore};

pub use fetchers::{HttpFetcher, MockFetcher};
