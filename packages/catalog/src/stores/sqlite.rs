//! SQLite storage implementation.
//!
//! A file-based storage backend using SQLite. Good for:
//! - Local, single-user deployments
//! - Testing with persistent data
//!
//! The schema is applied once by [`SqliteStore::connect`] through embedded
//! migrations. Every operation acquires its own pooled connection and
//! releases it when the operation returns.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{CatalogError, Result};
use crate::traits::store::MangaStore;
use crate::types::record::{Record, StoredManga, TitleKey};

const COLUMNS: &str = "id, title, source_url, cover_image_url, authors, status, genres, views, \
     rating, description, latest_chapter_label, latest_chapter_url, latest_chapter_date, \
     created_at, updated_at";

/// SQLite-based catalog store.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open a store at the given connection URL and apply migrations.
    ///
    /// # Example URLs
    /// - `sqlite://mangas.db?mode=rwc` - File-based, created if missing
    /// - `sqlite::memory:` - Use [`SqliteStore::in_memory`] instead
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        let store = Self { pool };
        store.run_migrations().await?;
        info!(database_url = %database_url, "Catalog store ready");
        Ok(store)
    }

    /// Create an in-memory SQLite store (for testing).
    ///
    /// Pinned to a single long-lived connection, since every new in-memory
    /// connection would start from an empty database.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        let store = Self { pool };
        store.run_migrations().await?;
        Ok(store)
    }

    /// Run database migrations. Safe to call repeatedly.
    async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        debug!("Catalog migrations applied");
        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// Row type for sqlx queries
#[derive(Debug, FromRow)]
struct MangaRow {
    id: Uuid,
    title: String,
    source_url: String,
    cover_image_url: Option<String>,
    authors: Option<String>,
    status: Option<String>,
    genres: String,
    views: Option<String>,
    rating: Option<f64>,
    description: Option<String>,
    latest_chapter_label: Option<String>,
    latest_chapter_url: Option<String>,
    latest_chapter_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl MangaRow {
    fn into_stored(self) -> Result<StoredManga> {
        let genres: Vec<String> =
            serde_json::from_str(&self.genres).map_err(|e| CatalogError::Corrupt {
                reason: format!("invalid genres JSON for {}: {}", self.title, e),
            })?;

        Ok(StoredManga {
            id: self.id,
            record: Record {
                title: self.title,
                source_url: self.source_url,
                cover_image_url: self.cover_image_url,
                authors: self.authors,
                status: self.status,
                genres,
                views: self.views,
                rating: self.rating,
                description: self.description,
                latest_chapter_label: self.latest_chapter_label,
                latest_chapter_url: self.latest_chapter_url,
                latest_chapter_date: self.latest_chapter_date,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn genres_json(record: &Record) -> Result<String> {
    serde_json::to_string(&record.genres).map_err(|e| CatalogError::Corrupt {
        reason: format!("genres for {} not encodable: {}", record.title, e),
    })
}

#[async_trait]
impl MangaStore for SqliteStore {
    async fn insert(&self, key: &TitleKey, record: &Record) -> Result<StoredManga> {
        let mut conn = self.pool.acquire().await?;
        let now = Utc::now();

        let row = sqlx::query_as::<_, MangaRow>(&format!(
            r#"
            INSERT INTO mangas (
                id, title_key, title, source_url, cover_image_url, authors, status, genres,
                views, rating, description, latest_chapter_label, latest_chapter_url,
                latest_chapter_date, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(Uuid::now_v7())
        .bind(key.as_str())
        .bind(&record.title)
        .bind(&record.source_url)
        .bind(&record.cover_image_url)
        .bind(&record.authors)
        .bind(&record.status)
        .bind(genres_json(record)?)
        .bind(&record.views)
        .bind(record.rating)
        .bind(&record.description)
        .bind(&record.latest_chapter_label)
        .bind(&record.latest_chapter_url)
        .bind(record.latest_chapter_date)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *conn)
        .await?;

        row.into_stored()
    }

    async fn update(&self, key: &TitleKey, record: &Record) -> Result<StoredManga> {
        let mut conn = self.pool.acquire().await?;

        let row = sqlx::query_as::<_, MangaRow>(&format!(
            r#"
            UPDATE mangas SET
                title = ?,
                source_url = ?,
                cover_image_url = ?,
                authors = ?,
                status = ?,
                genres = ?,
                views = ?,
                rating = ?,
                description = ?,
                latest_chapter_label = ?,
                latest_chapter_url = ?,
                latest_chapter_date = ?,
                updated_at = ?
            WHERE title_key = ?
            RETURNING {COLUMNS}
            "#
        ))
        .bind(&record.title)
        .bind(&record.source_url)
        .bind(&record.cover_image_url)
        .bind(&record.authors)
        .bind(&record.status)
        .bind(genres_json(record)?)
        .bind(&record.views)
        .bind(record.rating)
        .bind(&record.description)
        .bind(&record.latest_chapter_label)
        .bind(&record.latest_chapter_url)
        .bind(record.latest_chapter_date)
        .bind(Utc::now())
        .bind(key.as_str())
        .fetch_optional(&mut *conn)
        .await?;

        row.ok_or_else(|| CatalogError::MissingRow {
            key: key.to_string(),
        })?
        .into_stored()
    }

    async fn get(&self, key: &TitleKey) -> Result<Option<StoredManga>> {
        let mut conn = self.pool.acquire().await?;

        let row = sqlx::query_as::<_, MangaRow>(&format!(
            "SELECT {COLUMNS} FROM mangas WHERE title_key = ?"
        ))
        .bind(key.as_str())
        .fetch_optional(&mut *conn)
        .await?;

        row.map(MangaRow::into_stored).transpose()
    }

    async fn list(&self) -> Result<Vec<StoredManga>> {
        let mut conn = self.pool.acquire().await?;

        let rows = sqlx::query_as::<_, MangaRow>(&format!(
            "SELECT {COLUMNS} FROM mangas ORDER BY title_key"
        ))
        .fetch_all(&mut *conn)
        .await?;

        rows.into_iter().map(MangaRow::into_stored).collect()
    }

    async fn delete(&self, key: &TitleKey) -> Result<bool> {
        let mut conn = self.pool.acquire().await?;

        let result = sqlx::query("DELETE FROM mangas WHERE title_key = ?")
            .bind(key.as_str())
            .execute(&mut *conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<usize> {
        let mut conn = self.pool.acquire().await?;

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM mangas")
            .fetch_one(&mut *conn)
            .await?;

        Ok(count as usize)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    async fn test_store() -> SqliteStore {
        SqliteStore::in_memory().await.unwrap()
    }

    fn full_record(title: &str) -> Record {
        Record {
            title: title.to_string(),
            source_url: "https://demonicscans.org/manga/Blue-Lock".to_string(),
            cover_image_url: Some("https://cdn.example.com/blue-lock.jpg".to_string()),
            authors: Some("Muneyuki Kaneshiro, Yusuke Nomura".to_string()),
            status: Some("Ongoing".to_string()),
            genres: vec!["Sports".to_string(), "Drama".to_string()],
            views: Some("1234567".to_string()),
            rating: Some(0.87),
            description: Some("A striker training program.".to_string()),
            latest_chapter_label: Some("Chapter 280".to_string()),
            latest_chapter_url: Some("https://demonicscans.org/title/Blue-Lock/chapter/280/1".to_string()),
            latest_chapter_date: Some(Utc.with_ymd_and_hms(2024, 10, 1, 0, 0, 0).unwrap()),
        }
    }

    #[tokio::test]
    async fn test_record_round_trip() {
        let store = test_store().await;
        let record = full_record("Blue Lock");
        let key = record.key();

        let inserted = store.insert(&key, &record).await.unwrap();
        let retrieved = store.get(&key).await.unwrap().unwrap();

        assert_eq!(retrieved.record, record);
        assert_eq!(retrieved.id, inserted.id);
    }

    #[tokio::test]
    async fn test_absent_fields_stay_absent() {
        let store = test_store().await;
        let record = Record::new("Blue Lock", "https://example.com");

        store.insert(&record.key(), &record).await.unwrap();
        let retrieved = store.get(&record.key()).await.unwrap().unwrap();

        assert_eq!(retrieved.record, record);
        assert_eq!(retrieved.record.authors, None);
        assert!(retrieved.record.genres.is_empty());
    }

    #[tokio::test]
    async fn test_update_overwrites_in_place() {
        let store = test_store().await;
        let key = TitleKey::new("Blue Lock");
        let first = store.insert(&key, &full_record("Blue Lock")).await.unwrap();

        let mut newer = full_record("BLUE LOCK");
        newer.latest_chapter_label = Some("Chapter 281".to_string());
        newer.rating = None;
        let updated = store.update(&key, &newer).await.unwrap();

        assert_eq!(updated.id, first.id);
        assert_eq!(updated.created_at, first.created_at);
        assert_eq!(updated.record, newer);
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_row() {
        let store = test_store().await;
        let err = store
            .update(&TitleKey::new("Nope"), &Record::new("Nope", "https://example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::MissingRow { .. }));
    }

    #[tokio::test]
    async fn test_title_key_is_unique() {
        let store = test_store().await;
        let key = TitleKey::new("Blue Lock");

        store.insert(&key, &full_record("Blue Lock")).await.unwrap();
        let err = store.insert(&key, &full_record("blue lock")).await.unwrap_err();

        assert!(matches!(err, CatalogError::Storage(_)));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_and_delete() {
        let store = test_store().await;
        for title in ["Vagabond", "Berserk", "Monster"] {
            let record = Record::new(title, "https://example.com");
            store.insert(&record.key(), &record).await.unwrap();
        }

        let titles: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.record.title)
            .collect();
        assert_eq!(titles, vec!["Berserk", "Monster", "Vagabond"]);

        assert!(store.delete(&TitleKey::new("berserk")).await.unwrap());
        assert!(!store.delete(&TitleKey::new("berserk")).await.unwrap());
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let store = test_store().await;
        store.run_migrations().await.unwrap();
        store.ping().await.unwrap();
    }
}
