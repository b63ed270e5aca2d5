//! Extractor - title in, normalized [`Record`] out.
//!
//! A fetch has two kinds of failure with very different blast radius:
//!
//! - **Page-level** (transport error, bad status, title unknown to the
//!   source) aborts the whole fetch with a [`CatalogError`].
//! - **Field-level** (landmark gone, value unparsable) degrades exactly one
//!   field to its default. Every field is extracted by its own call and the
//!   result is passed through [`Extractor::isolate`], so a broken selector
//!   cannot take the rest of the record down with it.

use scraper::{Html, Selector};
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{CatalogError, FieldError, FieldResult, Result};
use crate::pipeline::normalize;
use crate::sources::{ChapterLink, Lookup, SourceProfile};
use crate::traits::fetcher::Fetcher;
use crate::types::page::FetchedPage;
use crate::types::record::Record;

/// Fetches and parses catalog entries from one source.
pub struct Extractor<F> {
    fetcher: F,
    profile: SourceProfile,
}

impl<F: Fetcher> Extractor<F> {
    pub fn new(fetcher: F, profile: SourceProfile) -> Self {
        Self { fetcher, profile }
    }

    pub fn profile(&self) -> &SourceProfile {
        &self.profile
    }

    /// Fetch the entry for `title`.
    ///
    /// The returned record's `title` is `title` verbatim, never the source's
    /// rendering of the name.
    pub async fn fetch(&self, title: &str) -> Result<Record> {
        if title.trim().is_empty() {
            return Err(CatalogError::InvalidTitle);
        }

        let slug = self.profile.slug.apply(title);
        info!(source = self.profile.name, title = %title, slug = %slug, "Fetching entry");

        let page = self.detail_page(title, &slug).await?;
        let record = self.parse_record(title, &slug, &page)?;

        debug!(
            source = self.profile.name,
            title = %title,
            source_url = %record.source_url,
            "Entry extracted"
        );
        Ok(record)
    }

    /// Fetch the detail page, going through the search page when the
    /// source requires it.
    async fn detail_page(&self, title: &str, slug: &str) -> Result<FetchedPage> {
        let page = self.fetcher.fetch(&self.profile.lookup_url(slug)).await?;

        match self.profile.lookup {
            Lookup::Direct { .. } => Ok(page),
            Lookup::Search { result, .. } => {
                let href = first_result_href(&page, result).ok_or_else(|| {
                    info!(source = self.profile.name, title = %title, "No search results");
                    CatalogError::not_found(title)
                })?;
                self.fetcher.fetch(&href).await
            }
        }
    }

    /// Parse a detail page. Only fails when the page is not a detail page.
    fn parse_record(&self, title: &str, slug: &str, page: &FetchedPage) -> Result<Record> {
        let document = Html::parse_document(&page.html);

        let is_detail_page = Selector::parse(self.profile.container)
            .map(|container| document.select(&container).next().is_some())
            .unwrap_or(false);
        if !is_detail_page {
            info!(
                source = self.profile.name,
                title = %title,
                url = %page.final_url,
                "Page has no detail container"
            );
            return Err(CatalogError::not_found(title));
        }

        Ok(self.build_record(title, slug, page, &document))
    }

    /// Assemble a record field by field. Never short-circuits.
    fn build_record(&self, title: &str, slug: &str, page: &FetchedPage, document: &Html) -> Record {
        let fields = &self.profile.fields;
        let base = Url::parse(&page.final_url).ok();

        let mut record = Record::new(title, &page.final_url);

        record.cover_image_url = self.isolate(
            "cover_image_url",
            fields
                .cover_image
                .first(document)
                .and_then(|raw| normalize::absolute_url(&raw, base.as_ref())),
        );
        record.authors = self.isolate(
            "authors",
            fields.authors.collect(document).and_then(normalize::joined),
        );
        record.status = self.isolate("status", fields.status.first(document));
        record.genres = self
            .isolate(
                "genres",
                fields.genres.collect(document).map(normalize::distinct),
            )
            .unwrap_or_default();
        record.views = self.isolate(
            "views",
            fields
                .views
                .first(document)
                .and_then(|raw| normalize::views(&raw)),
        );
        record.rating = self.isolate(
            "rating",
            fields
                .rating
                .first(document)
                .and_then(|raw| normalize::rating(&raw, self.profile.rating_scale)),
        );
        record.description = self.isolate("description", fields.description.first(document));
        record.latest_chapter_label =
            self.isolate("latest_chapter_label", fields.latest_chapter.first(document));
        record.latest_chapter_url = self.isolate(
            "latest_chapter_url",
            self.chapter_url(document, record.latest_chapter_label.as_deref(), slug, base.as_ref()),
        );
        record.latest_chapter_date = self.isolate(
            "latest_chapter_date",
            fields
                .latest_chapter_date
                .first(document)
                .and_then(|raw| normalize::timestamp(&raw, self.profile.date_formats)),
        );

        record
    }

    fn chapter_url(
        &self,
        document: &Html,
        label: Option<&str>,
        slug: &str,
        base: Option<&Url>,
    ) -> FieldResult<String> {
        match &self.profile.chapter_link {
            ChapterLink::Href(locator) => locator
                .first(document)
                .and_then(|raw| normalize::absolute_url(&raw, base)),
            ChapterLink::Numbered { template } => {
                let label = label.ok_or_else(|| FieldError::missing("latest chapter label"))?;
                let number = normalize::chapter_number(label)?;
                Ok(template
                    .replace("{base}", self.profile.base_url)
                    .replace("{slug}", slug)
                    .replace("{number}", &number))
            }
        }
    }

    /// Absorb a field failure: log it and fall back to the field's default.
    fn isolate<T>(&self, field: &'static str, result: FieldResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(FieldError::Unpublished) => {
                debug!(source = self.profile.name, field, "Field not published by source");
                None
            }
            Err(e) => {
                warn!(
                    source = self.profile.name,
                    field,
                    error = %e,
                    "Field extraction failed, using default"
                );
                None
            }
        }
    }
}

/// Absolute `href` of the first search result, if any.
fn first_result_href(page: &FetchedPage, result: &str) -> Option<String> {
    let document = Html::parse_document(&page.html);
    let selector = Selector::parse(result).ok()?;
    let href = document.select(&selector).next()?.value().attr("href")?;

    match Url::parse(&page.final_url) {
        Ok(base) => base.join(href.trim()).ok().map(|url| url.to_string()),
        Err(_) => Url::parse(href.trim()).ok().map(|url| url.to_string()),
    }
}
