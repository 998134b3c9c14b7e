//! HTML to plain text
//!
//! Non-content elements are dropped whole, the remaining text nodes are
//! concatenated, and whitespace is normalized in a fixed order:
//!
//! 1. three or more newlines become a blank line
//! 2. runs of horizontal whitespace become one space
//! 3. non-breaking spaces become spaces
//! 4. blank-line separated blocks are joined with a space
//! 5. remaining newlines become spaces

use regex::Regex;
use scout_application::TextExtractor;
use std::sync::LazyLock;

/// Elements whose entire subtree is ignored
const SKIP_TAGS: [&str; 11] = [
    "script", "style", "meta", "link", "head", "noscript", "button", "footer", "form", "iframe",
    "nav",
];

/// Elements after which a line break is implied
const BLOCK_TAGS: [&str; 16] = [
    "p", "div", "br", "li", "tr", "h1", "h2", "h3", "h4", "h5", "h6", "section", "article",
    "header", "table", "blockquote",
];

static MANY_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));
static HORIZONTAL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\x0c\r]{2,}").expect("valid regex"));
static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));
static SPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").expect("valid regex"));

/// [`TextExtractor`] backed by `scraper`
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlTextExtractor;

impl HtmlTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for HtmlTextExtractor {
    fn extract(&self, markup: &str) -> String {
        html_to_text(markup)
    }
}

/// Readable text of an HTML document, on a single line.
pub fn html_to_text(html: &str) -> String {
    let document = scraper::Html::parse_document(html);
    let mut raw = String::new();
    collect_text(document.root_element(), &mut raw);
    normalize_whitespace(&raw)
}

fn collect_text(element: scraper::ElementRef, out: &mut String) {
    let tag = element.value().name();
    if SKIP_TAGS.contains(&tag) {
        return;
    }

    for child in element.children() {
        match child.value() {
            scraper::Node::Text(text) => out.push_str(text),
            scraper::Node::Element(_) => {
                if let Some(child_el) = scraper::ElementRef::wrap(child) {
                    collect_text(child_el, out);
                }
            }
            _ => {}
        }
    }

    if BLOCK_TAGS.contains(&tag) {
        out.push('\n');
    }
}

fn normalize_whitespace(text: &str) -> String {
    let text = MANY_NEWLINES.replace_all(text, "\n\n");
    let text = HORIZONTAL_RUN.replace_all(&text, " ");
    let text = text.replace('\u{a0}', " ");
    let text = BLANK_LINE.replace_all(&text, " ");
    let text = text.replace('\n', " ");
    SPACE_RUN.replace_all(text.trim(), " ").into_owned()
}
