//! Markup-to-text cleanup: strip non-content tags, keep line structure.

use std::collections::HashSet;

use scraper::node::Node;
use scraper::{ElementRef, Html};

/// Tags whose every occurrence is dropped with its subtree.
const STRIP_ALL: [&str; 3] = ["script", "style", "noscript"];

/// Boilerplate containers: the first occurrence of each (document order) is
/// dropped; later ones are kept, since forums and articles nest secondary
/// headers inside content.
const STRIP_FIRST: [&str; 5] = ["header", "footer", "nav", "aside", "form"];

/// Collapses an HTML document to readable plain text.
///
/// Script, style, and noscript subtrees are removed, as is the first
/// header/footer/nav/aside/form container. Remaining text nodes are emitted
/// in document order, one per line, with every line trimmed and blank lines
/// dropped. The single-newline line structure is what the splitter's
/// separator hierarchy keys on.
#[must_use]
pub fn clean_html(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut dropped: HashSet<&'static str> = HashSet::new();
    let mut parts: Vec<String> = Vec::new();
    collect_text(document.root_element(), &mut dropped, &mut parts);
    normalize_lines(&parts.join("\n"))
}

fn collect_text(element: ElementRef, dropped: &mut HashSet<&'static str>, parts: &mut Vec<String>) {
    let name = element.value().name();
    if STRIP_ALL.contains(&name) {
        return;
    }
    if let Some(&tag) = STRIP_FIRST.iter().find(|&&t| t == name)
        && dropped.insert(tag)
    {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    parts.push(trimmed.to_owned());
                }
            }
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, dropped, parts);
                }
            }
            _ => {}
        }
    }
}

fn normalize_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_body_text() {
        let html = "<html><body><h1>Hello</h1><p>World</p></body></html>";
        assert_eq!(clean_html(html), "Hello\nWorld");
    }

    #[test]
    fn strips_scripts_and_styles() {
        let html = r"
            <html><head><style>p { color: red; }</style></head>
            <body><script>alert('x');</script><p>Content</p></body></html>";
        let text = clean_html(html);
        assert_eq!(text, "Content");
    }

    #[test]
    fn strips_noscript() {
        let html = "<body><noscript>enable js</noscript><p>Real text</p></body>";
        assert_eq!(clean_html(html), "Real text");
    }

    #[test]
    fn strips_first_boilerplate_container_only() {
        let html = "\
            <body>\
            <header>Site banner</header>\
            <article><header>Post header</header><p>Body</p></article>\
            </body>";
        let text = clean_html(html);
        assert!(!text.contains("Site banner"));
        assert!(text.contains("Post header"));
        assert!(text.contains("Body"));
    }

    #[test]
    fn strips_nav_footer_aside_form() {
        let html = "\
            <body>\
            <nav>Menu</nav>\
            <p>Keep me</p>\
            <aside>Related links</aside>\
            <form><input></form>\
            <footer>Copyright</footer>\
            </body>";
        assert_eq!(clean_html(html), "Keep me");
    }

    #[test]
    fn title_text_is_part_of_the_content() {
        let html = "<html><head><title>Page title</title></head><body><p>Body</p></body></html>";
        assert_eq!(clean_html(html), "Page title\nBody");
    }

    #[test]
    fn blank_lines_and_indentation_collapse() {
        let html = "<body><div>\n\n   spaced   \n</div><p>\n\nnext</p></body>";
        assert_eq!(clean_html(html), "spaced\nnext");
    }

    #[test]
    fn entities_are_decoded() {
        let html = "<body><p>Fish &amp; chips &lt;3</p></body>";
        assert_eq!(clean_html(html), "Fish & chips <3");
    }

    #[test]
    fn text_follows_document_order() {
        let html = "<body><p>one</p><div><span>two</span></div><p>three</p></body>";
        assert_eq!(clean_html(html), "one\ntwo\nthree");
    }

    #[test]
    fn empty_document_yields_empty_text() {
        assert_eq!(clean_html(""), "");
        assert_eq!(clean_html("<html><body></body></html>"), "");
    }

    #[test]
    fn malformed_markup_is_handled_leniently() {
        let html = "<p>unclosed <b>bold <p>next";
        let text = clean_html(html);
        assert!(text.contains("unclosed"));
        assert!(text.contains("next"));
    }
}
