//! Locators - find a field's node and read raw text out of it.

use scraper::{ElementRef, Html, Selector};

use crate::error::{FieldError, FieldResult};

/// Where a field lives in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// First node matching `selector`
    Node { selector: &'static str, read: Read },

    /// Label/value layouts (tables, stat lists). The first `rows` match
    /// whose first `cells` match contains `key` wins; `read` is applied to
    /// its second `cells` match.
    Labeled {
        rows: &'static str,
        cells: &'static str,
        key: &'static str,
        read: Read,
    },

    /// The source never publishes this field
    Unpublished,
}

/// What to read from a located node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Read {
    /// All descendant text
    Text,

    /// Only the node's direct text children, skipping nested headings etc.
    OwnText,

    /// An attribute value
    Attr(&'static str),

    /// Text of every descendant matching the selector
    Items(&'static str),
}

impl Locator {
    /// Raw, whitespace-collapsed values at this location.
    ///
    /// Never returns an empty vector or empty strings: a location that
    /// yields no text is malformed.
    pub fn collect(&self, document: &Html) -> FieldResult<Vec<String>> {
        let values = match self {
            Locator::Unpublished => return Err(FieldError::Unpublished),
            Locator::Node { selector, read } => {
                let node = document
                    .select(&parse(selector)?)
                    .next()
                    .ok_or_else(|| FieldError::missing(*selector))?;
                read.apply(node)?
            }
            Locator::Labeled {
                rows,
                cells,
                key,
                read,
            } => {
                let cell_selector = parse(cells)?;
                let value = document
                    .select(&parse(rows)?)
                    .find_map(|row| {
                        let mut row_cells = row.select(&cell_selector);
                        let label = row_cells.next()?;
                        let value = row_cells.next()?;
                        collapse(label.text()).contains(key).then_some(value)
                    })
                    .ok_or_else(|| FieldError::missing(format!("{rows} labeled {key:?}")))?;
                read.apply(value)?
            }
        };

        let values: Vec<String> = values.into_iter().filter(|v| !v.is_empty()).collect();
        if values.is_empty() {
            return Err(FieldError::malformed("", "no text at landmark"));
        }
        Ok(values)
    }

    /// First raw value at this location.
    pub fn first(&self, document: &Html) -> FieldResult<String> {
        self.collect(document)
            .map(|values| values.into_iter().next().unwrap_or_default())
    }

    pub(crate) fn selectors(&self) -> Vec<&'static str> {
        let mut selectors = match self {
            Locator::Unpublished => Vec::new(),
            Locator::Node { selector, .. } => vec![*selector],
            Locator::Labeled { rows, cells, .. } => vec![*rows, *cells],
        };
        if let Locator::Node { read, .. } | Locator::Labeled { read, .. } = self {
            if let Read::Items(items) = *read {
                selectors.push(items);
            }
        }
        selectors
    }
}

impl Read {
    fn apply(self, node: ElementRef<'_>) -> FieldResult<Vec<String>> {
        match self {
            Read::Text => Ok(vec![collapse(node.text())]),
            Read::OwnText => {
                let own = node
                    .children()
                    .filter_map(|child| child.value().as_text())
                    .map(|text| &**text);
                Ok(vec![collapse(own)])
            }
            Read::Attr(name) => node
                .value()
                .attr(name)
                .map(|value| vec![value.trim().to_string()])
                .ok_or_else(|| FieldError::missing(format!("@{name}"))),
            Read::Items(items) => Ok(node
                .select(&parse(items)?)
                .map(|item| collapse(item.text()))
                .collect()),
        }
    }
}

fn parse(selector: &str) -> FieldResult<Selector> {
    Selector::parse(selector).map_err(|_| FieldError::InvalidSelector {
        selector: selector.to_string(),
    })
}

/// Join text fragments with single spaces, collapsing whitespace runs.
///
/// Fragments from separate nodes never run together.
pub(crate) fn collapse<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const HTML: &str = r#"
        <div class="info">
            <h3>Description :</h3>
            A   story about
            football.
            <img class="cover" src=" /covers/1.jpg ">
        </div>
        <table>
            <tr><td class="label">Author(s) :</td><td class="value"><a>One</a> - <a>Two</a></td></tr>
            <tr><td class="label">Status :</td><td class="value"> Ongoing </td></tr>
            <tr><td class="label">Empty :</td><td class="value">   </td></tr>
        </table>
    "#;

    fn doc() -> Html {
        Html::parse_document(HTML)
    }

    #[test]
    fn test_node_text_and_own_text() {
        let text = Locator::Node {
            selector: "div.info",
            read: Read::Text,
        };
        assert!(text.first(&doc()).unwrap().starts_with("Description : A story"));

        let own = Locator::Node {
            selector: "div.info",
            read: Read::OwnText,
        };
        assert_eq!(own.first(&doc()).unwrap(), "A story about football.");
    }

    #[test]
    fn test_attribute_is_trimmed() {
        let locator = Locator::Node {
            selector: "img.cover",
            read: Read::Attr("src"),
        };
        assert_eq!(locator.first(&doc()).unwrap(), "/covers/1.jpg");

        let missing = Locator::Node {
            selector: "img.cover",
            read: Read::Attr("alt"),
        };
        assert_eq!(
            missing.first(&doc()).unwrap_err(),
            FieldError::missing("@alt")
        );
    }

    #[test]
    fn test_labeled_items() {
        let locator = Locator::Labeled {
            rows: "tr",
            cells: "td",
            key: "Author",
            read: Read::Items("a"),
        };
        assert_eq!(locator.collect(&doc()).unwrap(), vec!["One", "Two"]);

        let status = Locator::Labeled {
            rows: "tr",
            cells: "td",
            key: "Status",
            read: Read::Text,
        };
        assert_eq!(status.first(&doc()).unwrap(), "Ongoing");
    }

    #[test]
    fn test_missing_and_empty_landmarks() {
        let absent = Locator::Node {
            selector: "span.nope",
            read: Read::Text,
        };
        assert!(matches!(
            absent.first(&doc()),
            Err(FieldError::Missing { .. })
        ));

        let empty = Locator::Labeled {
            rows: "tr",
            cells: "td",
            key: "Empty",
            read: Read::Text,
        };
        assert!(matches!(
            empty.first(&doc()),
            Err(FieldError::Malformed { .. })
        ));

        assert_eq!(
            Locator::Unpublished.first(&doc()),
            Err(FieldError::Unpublished)
        );
    }

    #[test]
    fn test_text_across_nodes_keeps_word_boundaries() {
        let doc = Html::parse_document(
            r#"<div class="desc"><p>Needs a striker.</p><p>Forwards compete.</p></div>
               <li class="author"><a>Muneyuki</a><a>Kaneshiro</a></li>"#,
        );

        let text = Locator::Node {
            selector: "div.desc",
            read: Read::Text,
        };
        assert_eq!(text.first(&doc).unwrap(), "Needs a striker. Forwards compete.");

        let author = Locator::Node {
            selector: "li.author",
            read: Read::Text,
        };
        assert_eq!(author.first(&doc).unwrap(), "Muneyuki Kaneshiro");
    }

    #[test]
    fn test_invalid_selector() {
        let broken = Locator::Node {
            selector: "td[[",
            read: Read::Text,
        };
        assert!(matches!(
            broken.first(&doc()),
            Err(FieldError::InvalidSelector { .. })
        ));
    }
}
