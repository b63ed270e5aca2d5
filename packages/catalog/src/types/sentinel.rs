//! Serde adapters that render absent values as sentinel placeholders.
//!
//! Inside the crate an absent field is `None`. Consumers of the serialized
//! form always see a non-empty string (or `0.0` for the rating), and the
//! placeholder is read back as `None`.

macro_rules! sentinel_text {
    ($(#[$meta:meta])* $name:ident => $sentinel:literal) => {
        $(#[$meta])*
        pub mod $name {
            use serde::{Deserialize, Deserializer, Serializer};

            pub const SENTINEL: &str = $sentinel;

            pub fn serialize<S: Serializer>(
                value: &Option<String>,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(value.as_deref().unwrap_or(SENTINEL))
            }

            pub fn deserialize<'de, D: Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Option<String>, D::Error> {
                let raw = Option::<String>::deserialize(deserializer)?;
                Ok(raw.filter(|v| !v.trim().is_empty() && v != SENTINEL))
            }
        }
    };
}

sentinel_text!(cover_image => "No image link found");
sentinel_text!(authors => "No author found");
sentinel_text!(status => "No status found");
sentinel_text!(
    /// Views are digit strings; the placeholder replaces them when the
    /// source does not publish a view count.
    views => "No views found"
);
sentinel_text!(description => "No description found");
sentinel_text!(chapter_label => "No chapter found");
sentinel_text!(chapter_url => "No chapter URL found");

/// Ratings serialize as `0.0` when absent; a serialized `0.0` reads back as
/// absent.
pub mod rating {
    use serde::{Deserialize, Deserializer, Serializer};

    pub const SENTINEL: f64 = 0.0;

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.unwrap_or(SENTINEL))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        let raw = Option::<f64>::deserialize(deserializer)?;
        Ok(raw.filter(|v| *v != SENTINEL))
    }
}
