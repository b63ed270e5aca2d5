//! Record types - the normalized manga entity and its persisted row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::sentinel;

/// Normalized, in-memory representation of one catalog entry.
///
/// Absent fields are `None`; the sentinel placeholders only appear in the
/// serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Caller-supplied title, kept verbatim
    pub title: String,

    /// Resolved detail-page URL
    pub source_url: String,

    #[serde(default, with = "sentinel::cover_image")]
    pub cover_image_url: Option<String>,

    /// Comma-joined when the source lists several
    #[serde(default, with = "sentinel::authors")]
    pub authors: Option<String>,

    #[serde(default, with = "sentinel::status")]
    pub status: Option<String>,

    /// Site order, no duplicates
    #[serde(default)]
    pub genres: Vec<String>,

    /// Digits only
    #[serde(default, with = "sentinel::views")]
    pub views: Option<String>,

    /// Fraction in 0.0..=1.0
    #[serde(default, with = "sentinel::rating")]
    pub rating: Option<f64>,

    #[serde(default, with = "sentinel::description")]
    pub description: Option<String>,

    #[serde(default, with = "sentinel::chapter_label")]
    pub latest_chapter_label: Option<String>,

    #[serde(default, with = "sentinel::chapter_url")]
    pub latest_chapter_url: Option<String>,

    #[serde(default)]
    pub latest_chapter_date: Option<DateTime<Utc>>,
}

impl Record {
    /// Create a record with every data field absent.
    pub fn new(title: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source_url: source_url.into(),
            cover_image_url: None,
            authors: None,
            status: None,
            genres: Vec::new(),
            views: None,
            rating: None,
            description: None,
            latest_chapter_label: None,
            latest_chapter_url: None,
            latest_chapter_date: None,
        }
    }

    /// Lookup key derived from the title.
    pub fn key(&self) -> TitleKey {
        TitleKey::new(&self.title)
    }
}

/// Normalized lookup key: trimmed, whitespace runs collapsed, lower-cased.
///
/// Two titles denote the same entry iff their keys are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TitleKey(String);

impl TitleKey {
    pub fn new(title: &str) -> Self {
        let collapsed = title.split_whitespace().collect::<Vec<_>>().join(" ");
        Self(collapsed.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for TitleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A record as persisted by a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredManga {
    pub id: Uuid,

    #[serde(flatten)]
    pub record: Record,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredManga {
    pub fn key(&self) -> TitleKey {
        self.record.key()
    }
}
