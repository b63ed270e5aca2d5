//! Manganato: search page first, then the first result's detail page.

use super::{ChapterLink, Landmarks, Locator, Lookup, RatingScale, Read, SlugRule, SourceProfile};

const INFO_ROWS: &str = "table.variations-tableInfo tr";
const EXTENT_ROWS: &str = "div.story-info-right-extent p";

pub const MANGANATO: SourceProfile = SourceProfile {
    name: "manganato",
    base_url: "https://manganato.com",
    lookup: Lookup::Search {
        path: "/search/story/",
        result: "div.panel-search-story div.search-story-item a[href]",
    },
    slug: SlugRule {
        lowercase: true,
        separator: "_",
        encode_passes: 1,
    },
    container: "div.panel-story-info",
    fields: Landmarks {
        cover_image: Locator::Node {
            selector: "div.story-info-left span.info-image img",
            read: Read::Attr("src"),
        },
        authors: Locator::Labeled {
            rows: INFO_ROWS,
            cells: "td",
            key: "Author",
            read: Read::Items("a"),
        },
        status: Locator::Labeled {
            rows: INFO_ROWS,
            cells: "td",
            key: "Status",
            read: Read::Text,
        },
        genres: Locator::Labeled {
            rows: INFO_ROWS,
            cells: "td",
            key: "Genres",
            read: Read::Items("a"),
        },
        views: Locator::Labeled {
            rows: EXTENT_ROWS,
            cells: "span",
            key: "View",
            read: Read::Text,
        },
        rating: Locator::Node {
            selector: "em[property='v:average']",
            read: Read::Text,
        },
        description: Locator::Node {
            selector: "div.panel-story-info-description",
            read: Read::OwnText,
        },
        latest_chapter: Locator::Node {
            selector: "ul.row-content-chapter a.chapter-name",
            read: Read::Text,
        },
        latest_chapter_date: Locator::Node {
            selector: "ul.row-content-chapter span.chapter-time",
            read: Read::Attr("title"),
        },
    },
    rating_scale: RatingScale::OutOf(5.0),
    date_formats: &["%b %d,%Y %H:%M", "%b %d,%y %H:%M"],
    chapter_link: ChapterLink::Href(Locator::Node {
        selector: "ul.row-content-chapter a.chapter-name",
        read: Read::Attr("href"),
    }),
};
