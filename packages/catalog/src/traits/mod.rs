//! Core trait abstractions for the catalog library.

pub mod fetcher;
pub mod store;
