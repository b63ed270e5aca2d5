//! Catalog pipeline.
//!
//! - [`extract`] - fetch a title's detail page and parse it into a `Record`
//! - [`normalize`] - raw landmark text to canonical field values
//! - [`reconcile`] - insert-or-update against a `MangaStore`
//! - [`service`] - the two composed, as used by the API

pub mod extract;
pub mod normalize;
pub mod reconcile;
pub mod service;

pub use extract::Extractor;
pub use reconcile::{Confirmation, Reconciler, Removal};
pub use service::{CatalogService, RefreshOutcome, RefreshReport};
