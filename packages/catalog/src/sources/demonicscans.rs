//! Demonicscans: detail page addressed directly by a double-encoded slug.

use super::{ChapterLink, Landmarks, Locator, Lookup, RatingScale, Read, SlugRule, SourceProfile};

const STAT_ROWS: &str = "div#manga-info-stats div.flex.flex-row";

pub const DEMONICSCANS: SourceProfile = SourceProfile {
    name: "demonicscans",
    base_url: "https://demonicscans.org",
    lookup: Lookup::Direct { path: "/manga/" },
    slug: SlugRule {
        lowercase: false,
        separator: "-",
        encode_passes: 2,
    },
    container: "div#manga-page",
    fields: Landmarks {
        cover_image: Locator::Node {
            selector: "div#manga-page div.center-align img",
            read: Read::Attr("src"),
        },
        authors: Locator::Labeled {
            rows: STAT_ROWS,
            cells: "li",
            key: "Author",
            read: Read::Text,
        },
        status: Locator::Labeled {
            rows: STAT_ROWS,
            cells: "li",
            key: "Status",
            read: Read::Text,
        },
        genres: Locator::Node {
            selector: "div.genres-list",
            read: Read::Items("li"),
        },
        views: Locator::Unpublished,
        rating: Locator::Labeled {
            rows: STAT_ROWS,
            cells: "li",
            key: "Rating",
            read: Read::Text,
        },
        description: Locator::Node {
            selector: "div.white-font",
            read: Read::Text,
        },
        latest_chapter: Locator::Node {
            selector: "div#chapters-container a",
            read: Read::OwnText,
        },
        latest_chapter_date: Locator::Labeled {
            rows: STAT_ROWS,
            cells: "li",
            key: "Last Update",
            read: Read::Text,
        },
    },
    rating_scale: RatingScale::Percent,
    date_formats: &["%Y-%m-%d"],
    chapter_link: ChapterLink::Numbered {
        template: "{base}/title/{slug}/chapter/{number}/1",
    },
};
