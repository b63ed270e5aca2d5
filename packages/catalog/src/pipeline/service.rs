//! Catalog service - the fetch-then-reconcile cycle behind the API.

use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::pipeline::extract::Extractor;
use crate::pipeline::reconcile::{Confirmation, Reconciler, Removal};
use crate::traits::fetcher::Fetcher;
use crate::traits::store::MangaStore;
use crate::types::record::StoredManga;

/// Result of refreshing one stored title.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RefreshOutcome {
    Created,
    Updated,
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefreshReport {
    pub title: String,
    #[serde(flatten)]
    pub outcome: RefreshOutcome,
}

/// Extractor and reconciler composed over one source and one store.
pub struct CatalogService<F, S> {
    extractor: Extractor<F>,
    reconciler: Reconciler<S>,
}

impl<F: Fetcher, S: MangaStore> CatalogService<F, S> {
    pub fn new(extractor: Extractor<F>, reconciler: Reconciler<S>) -> Self {
        Self {
            extractor,
            reconciler,
        }
    }

    pub fn extractor(&self) -> &Extractor<F> {
        &self.extractor
    }

    pub fn reconciler(&self) -> &Reconciler<S> {
        &self.reconciler
    }

    /// Fetch `title` from the source and upsert it.
    ///
    /// Storage is only touched once the fetch has succeeded.
    pub async fn track(&self, title: &str) -> Result<Confirmation> {
        let record = self.extractor.fetch(title).await?;
        self.reconciler.upsert(&record).await
    }

    /// Re-fetch every stored title, one after the other.
    ///
    /// A title that fails is reported and skipped; only a failure to list
    /// the store aborts the run.
    pub async fn refresh_all(&self) -> Result<Vec<RefreshReport>> {
        let rows = self.reconciler.list_all().await?;
        info!(count = rows.len(), "Refreshing all entries");

        let mut reports = Vec::with_capacity(rows.len());
        for row in rows {
            let title = row.record.title;
            let outcome = match self.track(&title).await {
                Ok(Confirmation::Created(_)) => RefreshOutcome::Created,
                Ok(Confirmation::Updated(_)) => RefreshOutcome::Updated,
                Err(e) => {
                    warn!(title = %title, error = %e, "Refresh failed");
                    RefreshOutcome::Failed {
                        message: e.to_string(),
                    }
                }
            };
            reports.push(RefreshReport { title, outcome });
        }
        Ok(reports)
    }

    pub async fn get(&self, title: &str) -> Result<Option<StoredManga>> {
        self.reconciler.get(title).await
    }

    pub async fn list_all(&self) -> Result<Vec<StoredManga>> {
        self.reconciler.list_all().await
    }

    pub async fn remove(&self, title: &str) -> Result<Removal> {
        self.reconciler.remove(title).await
    }
}
