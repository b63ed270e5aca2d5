//! In-memory storage implementation for testing and development.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::RwLock;
use uuid::Uuid;

use crate::error::{CatalogError, Result};
use crate::traits::store::MangaStore;
use crate::types::record::{Record, StoredManga, TitleKey};

/// In-memory catalog storage.
///
/// Useful for testing and development. Not suitable for production
/// as data is lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    rows: RwLock<BTreeMap<TitleKey, StoredManga>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data.
    pub fn clear(&self) {
        self.rows.write().unwrap().clear();
    }

    /// Get the number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl MangaStore for MemoryStore {
    async fn insert(&self, key: &TitleKey, record: &Record) -> Result<StoredManga> {
        let mut rows = self.rows.write().unwrap();
        if rows.contains_key(key) {
            return Err(CatalogError::Duplicate {
                key: key.to_string(),
            });
        }

        let now = Utc::now();
        let stored = StoredManga {
            id: Uuid::now_v7(),
            record: record.clone(),
            created_at: now,
            updated_at: now,
        };
        rows.insert(key.clone(), stored.clone());
        Ok(stored)
    }

    async fn update(&self, key: &TitleKey, record: &Record) -> Result<StoredManga> {
        let mut rows = self.rows.write().unwrap();
        let stored = rows.get_mut(key).ok_or_else(|| CatalogError::MissingRow {
            key: key.to_string(),
        })?;

        stored.record = record.clone();
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn get(&self, key: &TitleKey) -> Result<Option<StoredManga>> {
        Ok(self.rows.read().unwrap().get(key).cloned())
    }

    async fn list(&self) -> Result<Vec<StoredManga>> {
        Ok(self.rows.read().unwrap().values().cloned().collect())
    }

    async fn delete(&self, key: &TitleKey) -> Result<bool> {
        Ok(self.rows.write().unwrap().remove(key).is_some())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.len())
    }
}
