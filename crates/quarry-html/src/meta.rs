//! Title/author/date extraction from document head and common content patterns.

use scraper::{ElementRef, Html, Selector};

/// Metadata fields scraped from a single document. All optional; the
/// pipeline attaches the filename separately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    pub title: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

/// Pulls title, author, and publication date out of a document.
///
/// Author prefers `<meta name="author">` over the first element with an
/// `author` class. Date prefers `<meta property="article:published_time">`
/// over the first `<time>` tag (its `datetime` attribute, falling back to
/// its text).
#[must_use]
pub fn extract_metadata(html: &str) -> PageMeta {
    let document = Html::parse_document(html);

    let title = select_first(&document, "title")
        .and_then(|el| non_empty(&el.text().collect::<String>()));

    let author = select_first(&document, r#"meta[name="author"]"#)
        .and_then(|el| el.value().attr("content"))
        .and_then(non_empty)
        .or_else(|| {
            select_first(&document, ".author").and_then(|el| {
                let joined = el
                    .text()
                    .flat_map(str::split_whitespace)
                    .collect::<Vec<_>>()
                    .join(" ");
                non_empty(&joined)
            })
        });

    let date = select_first(&document, r#"meta[property="article:published_time"]"#)
        .and_then(|el| el.value().attr("content"))
        .and_then(non_empty)
        .or_else(|| {
            select_first(&document, "time").and_then(|el| {
                el.value()
                    .attr("datetime")
                    .and_then(non_empty)
                    .or_else(|| non_empty(&el.text().collect::<String>()))
            })
        });

    PageMeta {
        title,
        author,
        date,
    }
}

fn select_first<'a>(document: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    document.select(&selector).next()
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
