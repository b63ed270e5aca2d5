//! Storage implementations for the catalog.
//!
//! Available backends:
//! - `MemoryStore` - In-memory storage for tests and development
//! - `SqliteStore` - SQLite storage, file-backed or in-memory

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
