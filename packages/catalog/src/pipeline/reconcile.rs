//! Reconciler - insert-or-update of extracted records, keyed by title.

use tracing::{debug, info};

use crate::error::{CatalogError, Result};
use crate::traits::store::MangaStore;
use crate::types::record::{Record, StoredManga, TitleKey};

/// Outcome of a successful upsert.
#[derive(Debug, Clone, PartialEq)]
pub enum Confirmation {
    /// No row existed for the title; one was inserted
    Created(StoredManga),

    /// The existing row was overwritten in place
    Updated(StoredManga),
}

impl Confirmation {
    pub fn stored(&self) -> &StoredManga {
        match self {
            Confirmation::Created(row) | Confirmation::Updated(row) => row,
        }
    }

    pub fn into_stored(self) -> StoredManga {
        match self {
            Confirmation::Created(row) | Confirmation::Updated(row) => row,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Confirmation::Created(_))
    }

    /// Human readable confirmation, e.g. "Manga: Blue Lock stored successfully."
    pub fn message(&self) -> String {
        match self {
            Confirmation::Created(row) => {
                format!("Manga: {} stored successfully.", row.record.title)
            }
            Confirmation::Updated(row) => {
                format!("Manga: {} updated successfully.", row.record.title)
            }
        }
    }
}

/// Outcome of a remove request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Removed,
    NotFound,
}

/// Keeps the store in step with freshly extracted records.
pub struct Reconciler<S> {
    store: S,
}

impl<S: MangaStore> Reconciler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Insert the record if its title is unknown, otherwise overwrite the
    /// existing row's fields.
    ///
    /// The lookup and the write are separate store calls. Two concurrent
    /// upserts of a new title race; the loser gets a storage error from the
    /// unique key rather than a second row.
    pub async fn upsert(&self, record: &Record) -> Result<Confirmation> {
        let key = record.key();
        if key.is_empty() {
            return Err(CatalogError::InvalidTitle);
        }

        match self.store.get(&key).await? {
            None => {
                let row = self.store.insert(&key, record).await?;
                info!(key = %key, id = %row.id, "Entry created");
                Ok(Confirmation::Created(row))
            }
            Some(existing) => {
                let row = self.store.update(&key, record).await?;
                info!(key = %key, id = %existing.id, "Entry updated");
                Ok(Confirmation::Updated(row))
            }
        }
    }

    pub async fn get(&self, title: &str) -> Result<Option<StoredManga>> {
        self.store.get(&TitleKey::new(title)).await
    }

    /// Every stored entry, ordered by title key.
    pub async fn list_all(&self) -> Result<Vec<StoredManga>> {
        self.store.list().await
    }

    pub async fn remove(&self, title: &str) -> Result<Removal> {
        let key = TitleKey::new(title);
        if self.store.delete(&key).await? {
            info!(key = %key, "Entry removed");
            Ok(Removal::Removed)
        } else {
            debug!(key = %key, "Nothing to remove");
            Ok(Removal::NotFound)
        }
    }
}
