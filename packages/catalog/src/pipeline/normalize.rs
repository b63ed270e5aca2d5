//! Field normalization - raw landmark text to canonical values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use url::Url;

use crate::error::{FieldError, FieldResult};
use crate::sources::RatingScale;

/// Deduplicate while keeping the first occurrence's position.
pub fn distinct(values: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.to_lowercase()))
        .collect()
}

/// Several names become one comma-joined string.
pub fn joined(values: Vec<String>) -> FieldResult<String> {
    let values = distinct(values);
    if values.is_empty() {
        return Err(FieldError::malformed("", "no names"));
    }
    Ok(values.join(", "))
}

/// View counts are stored as plain digits.
///
/// `,` `_` `'` and whitespace are dropped. `.` is dropped only when it
/// separates thousands groups, so "1.234.567" is accepted but "1.2M" is not.
pub fn views(raw: &str) -> FieldResult<String> {
    let compact: String = raw
        .chars()
        .filter(|c| !matches!(c, ',' | '_' | '\'') && !c.is_whitespace())
        .collect();

    let digits = if compact.contains('.') {
        let mut groups = compact.split('.');
        let lead = groups.next().unwrap_or_default();
        if !(1..=3).contains(&lead.len()) || !groups.all(|group| group.len() == 3) {
            return Err(FieldError::malformed(raw, "not a whole number"));
        }
        compact.replace('.', "")
    } else {
        compact
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(FieldError::malformed(raw, "not a whole number"));
    }
    Ok(digits)
}

/// Ratings are stored as a fraction between 0.0 and 1.0.
pub fn rating(raw: &str, scale: RatingScale) -> FieldResult<f64> {
    let number = raw.trim().trim_end_matches('%').trim();
    let value: f64 = number
        .parse()
        .map_err(|_| FieldError::malformed(raw, "not a number"))?;

    let fraction = scale.to_fraction(value);
    if !(0.0..=1.0).contains(&fraction) {
        return Err(FieldError::malformed(raw, "outside the rating scale"));
    }
    Ok(fraction)
}

/// Parse a site-specific timestamp, trying each format in order.
///
/// Date-only formats are taken as midnight UTC. Sites publish no zone, so
/// every parsed value is treated as UTC.
pub fn timestamp(raw: &str, formats: &[&str]) -> FieldResult<DateTime<Utc>> {
    let raw_trimmed = raw.trim();
    formats
        .iter()
        .find_map(|format| {
            NaiveDateTime::parse_from_str(raw_trimmed, format)
                .ok()
                .or_else(|| {
                    NaiveDate::parse_from_str(raw_trimmed, format)
                        .ok()
                        .and_then(|date| date.and_hms_opt(0, 0, 0))
                })
        })
        .map(|naive| naive.and_utc())
        .ok_or_else(|| FieldError::malformed(raw, "unrecognized date format"))
}

/// Resolve a possibly relative link against the page it was found on.
pub fn absolute_url(raw: &str, base: Option<&Url>) -> FieldResult<String> {
    let resolved = match base {
        Some(base) => base.join(raw),
        None => Url::parse(raw),
    };
    resolved
        .map(|url| url.to_string())
        .map_err(|e| FieldError::malformed(raw, e.to_string()))
}

/// Chapter number from a label such as "Chapter 112.5".
pub fn chapter_number(label: &str) -> FieldResult<String> {
    let number: String = label
        .split_whitespace()
        .last()
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let number = number.trim_matches('.');
    if number.is_empty() {
        return Err(FieldError::malformed(label, "no chapter number"));
    }
    Ok(number.to_string())
}
