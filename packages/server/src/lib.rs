// Manga Catalog - API Core
//
// This crate provides the HTTP API over the catalog library: tracking a
// title fetches it from the configured source and upserts it locally.

pub mod config;
pub mod server;

pub use config::*;
