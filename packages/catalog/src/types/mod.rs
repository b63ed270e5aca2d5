//! Data types for the catalog library.

pub mod page;
pub mod record;
pub mod sentinel;
