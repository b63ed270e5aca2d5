//! Typed errors for the catalog library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can tell a
//! network failure from a title the source does not know about.

use thiserror::Error;

/// Errors that abort a catalog operation.
///
/// Messages are written to be shown to an end user as-is.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport failure or unsuccessful HTTP status while reaching the source
    #[error("could not reach {url}: {reason}")]
    Network { url: String, reason: String },

    /// Source answered but has no entry for the title
    #[error("no results found for {title}")]
    NotFound { title: String },

    /// Blank title supplied by the caller
    #[error("title must not be empty")]
    InvalidTitle,

    /// Storage operation failed
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Schema migration failed
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Insert for a key that already has a row
    #[error("an entry for {key} already exists")]
    Duplicate { key: String },

    /// Update for a key that has no row
    #[error("no stored entry for {key}")]
    MissingRow { key: String },

    /// A stored row could not be decoded
    #[error("corrupt stored row: {reason}")]
    Corrupt { reason: String },
}

impl CatalogError {
    pub(crate) fn network(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Network {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn not_found(title: impl Into<String>) -> Self {
        Self::NotFound {
            title: title.into(),
        }
    }
}

/// Per-field extraction failure.
///
/// Never returned from a fetch: the extractor logs it and degrades the
/// affected field to its default.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// Landmark node not present in the document
    #[error("no node matches `{selector}`")]
    Missing { selector: String },

    /// Node found but its content could not be normalized
    #[error("malformed value {value:?}: {reason}")]
    Malformed { value: String, reason: String },

    /// The source does not publish this field at all
    #[error("not published by this source")]
    Unpublished,

    /// Selector in a source profile failed to parse
    #[error("invalid selector `{selector}`")]
    InvalidSelector { selector: String },
}

impl FieldError {
    pub(crate) fn missing(selector: impl Into<String>) -> Self {
        Self::Missing {
            selector: selector.into(),
        }
    }

    pub(crate) fn malformed(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Result type alias for a single field extraction.
pub type FieldResult<T> = std::result::Result<T, FieldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_displayable() {
        let err = CatalogError::not_found("Solo Leveling");
        assert_eq!(err.to_string(), "no results found for Solo Leveling");

        let err = CatalogError::network("https://example.com", "HTTP 503");
        assert_eq!(err.to_string(), "could not reach https://example.com: HTTP 503");
    }
}
