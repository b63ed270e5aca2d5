//! Storage trait for persisted catalog rows.
//!
//! Rows are keyed by `TitleKey`. Implementations assign the surrogate id and
//! timestamps; callers only ever hand over a `Record`.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::record::{Record, StoredManga, TitleKey};

/// Keyed persistent store for catalog entries.
#[async_trait]
pub trait MangaStore: Send + Sync {
    /// Insert a new row for `key`, generating its id.
    async fn insert(&self, key: &TitleKey, record: &Record) -> Result<StoredManga>;

    /// Overwrite every mutable field of the row for `key`.
    ///
    /// The id and creation time are preserved.
    async fn update(&self, key: &TitleKey, record: &Record) -> Result<StoredManga>;

    /// Get the row for `key`, if any.
    async fn get(&self, key: &TitleKey) -> Result<Option<StoredManga>>;

    /// All rows ordered by key.
    async fn list(&self) -> Result<Vec<StoredManga>>;

    /// Delete the row for `key`. Returns whether a row was removed.
    async fn delete(&self, key: &TitleKey) -> Result<bool>;

    /// Count stored rows.
    async fn count(&self) -> Result<usize> {
        Ok(self.list().await?.len())
    }

    /// Check that the backing storage is reachable.
    async fn ping(&self) -> Result<()> {
        self.count().await.map(|_| ())
    }
}

#[async_trait]
impl<T: MangaStore + ?Sized> MangaStore for std::sync::Arc<T> {
    async fn insert(&self, key: &TitleKey, record: &Record) -> Result<StoredManga> {
        (**self).insert(key, record).await
    }

    async fn update(&self, key: &TitleKey, record: &Record) -> Result<StoredManga> {
        (**self).update(key, record).await
    }

    async fn get(&self, key: &TitleKey) -> Result<Option<StoredManga>> {
        (**self).get(key).await
    }

    async fn list(&self) -> Result<Vec<StoredManga>> {
        (**self).list().await
    }

    async fn delete(&self, key: &TitleKey) -> Result<bool> {
        (**self).delete(key).await
    }

    async fn count(&self) -> Result<usize> {
        (**self).count().await
    }

    async fn ping(&self) -> Result<()> {
        (**self).ping().await
    }
}
