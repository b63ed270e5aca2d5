//! Source profiles - declarative landmark tables for listing sites.
//!
//! Everything that depends on a site's markup lives here as data: how a
//! title becomes a URL, which container proves the page is a detail page,
//! and where each field sits in the document. When a site changes its
//! markup, only the profile changes; the extractor's control flow does not.
//!
//! Available profiles:
//! - [`MANGANATO`] - search page, then the first result's detail page
//! - [`DEMONICSCANS`] - detail page addressed directly by slug

mod demonicscans;
mod locator;
mod manganato;

pub use demonicscans::DEMONICSCANS;
pub use locator::{Locator, Read};
pub use manganato::MANGANATO;

/// How a source is addressed and where its fields are.
#[derive(Debug, Clone)]
pub struct SourceProfile {
    /// Short name used in configuration and logs
    pub name: &'static str,

    /// Scheme and host, no trailing slash
    pub base_url: &'static str,

    /// How a slug turns into the detail page
    pub lookup: Lookup,

    /// How a title turns into a slug
    pub slug: SlugRule,

    /// Selector that only matches on a real detail page
    pub container: &'static str,

    pub fields: Landmarks,

    pub rating_scale: RatingScale,

    /// `chrono` formats tried in order for the latest chapter date
    pub date_formats: &'static [&'static str],

    pub chapter_link: ChapterLink,
}

/// Location of every data field on a detail page.
#[derive(Debug, Clone)]
pub struct Landmarks {
    pub cover_image: Locator,
    pub authors: Locator,
    pub status: Locator,
    pub genres: Locator,
    pub views: Locator,
    pub rating: Locator,
    pub description: Locator,
    pub latest_chapter: Locator,
    pub latest_chapter_date: Locator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Detail page is `{base_url}{path}{slug}`
    Direct { path: &'static str },

    /// Search page is `{base_url}{path}{slug}`; the `href` of the first
    /// `result` match is the detail page. No match means the title is unknown.
    Search {
        path: &'static str,
        result: &'static str,
    },
}

/// Title to path-segment transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugRule {
    pub lowercase: bool,

    /// Replaces each run of whitespace
    pub separator: &'static str,

    /// Number of percent-encoding passes. Some sites expect the segment
    /// encoded twice.
    pub encode_passes: u8,
}

impl SlugRule {
    pub fn apply(&self, title: &str) -> String {
        let joined = title.split_whitespace().collect::<Vec<_>>().join(self.separator);
        let mut slug = if self.lowercase {
            joined.to_lowercase()
        } else {
            joined
        };

        for _ in 0..self.encode_passes {
            slug = urlencoding::encode(&slug).into_owned();
        }
        slug
    }
}

/// Scale a source publishes ratings on. Ratings are stored as a 0.0–1.0
/// fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatingScale {
    /// `"87%"` or `"87"` means 0.87
    Percent,

    /// A plain number out of the given maximum
    OutOf(f64),
}

impl RatingScale {
    pub fn to_fraction(self, value: f64) -> f64 {
        match self {
            RatingScale::Percent => value / 100.0,
            RatingScale::OutOf(max) => value / max,
        }
    }
}

/// Where the latest chapter's URL comes from.
#[derive(Debug, Clone)]
pub enum ChapterLink {
    /// Attribute on a node, resolved against the page URL
    Href(Locator),

    /// Built from the chapter number in the label. The template may use
    /// `{base}`, `{slug}` and `{number}`.
    Numbered { template: &'static str },
}

impl SourceProfile {
    /// URL of the first page to fetch for a slug.
    pub fn lookup_url(&self, slug: &str) -> String {
        let path = match self.lookup {
            Lookup::Direct { path } => path,
            Lookup::Search { path, .. } => path,
        };
        format!("{}{}{}", self.base_url, path, slug)
    }

    /// Look up a built-in profile by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<SourceProfile> {
        Self::builtin()
            .into_iter()
            .find(|profile| profile.name.eq_ignore_ascii_case(name.trim()))
    }

    /// All built-in profiles.
    pub fn builtin() -> Vec<SourceProfile> {
        vec![MANGANATO, DEMONICSCANS]
    }

    /// Every selector the profile refers to, for validation.
    pub fn selectors(&self) -> Vec<&'static str> {
        let mut selectors = vec![self.container];
        if let Lookup::Search { result, .. } = self.lookup {
            selectors.push(result);
        }

        let fields = &self.fields;
        for locator in [
            &fields.cover_image,
            &fields.authors,
            &fields.status,
            &fields.genres,
            &fields.views,
            &fields.rating,
            &fields.description,
            &fields.latest_chapter,
            &fields.latest_chapter_date,
        ] {
            selectors.extend(locator.selectors());
        }

        if let ChapterLink::Href(locator) = &self.chapter_link {
            selectors.extend(locator.selectors());
        }
        selectors
    }
}
