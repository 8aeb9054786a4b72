// src/core/html.rs
// Document loading and small tree-query helpers on top of `scraper`.
// Callers match class markers and captions as substrings, never exact values.

use scraper::{ElementRef, Html, Selector};

/// Parse a raw HTML payload into a queryable tree.
///
/// html5ever never rejects input: unclosed tags are closed, stray end tags are
/// dropped and plain text ends up inside a synthesized `<body>`. An empty or
/// garbage payload therefore yields a tree that simply has no rows in it.
pub fn load(doc: &str) -> Html {
    Html::parse_document(doc)
}

/// Load raw bytes. Invalid UTF-8 is replaced rather than rejected, so a page
/// with a broken encoding still produces a (possibly empty) tree.
pub fn load_bytes(bytes: &[u8]) -> Html {
    load(&String::from_utf8_lossy(bytes))
}

/// Compile a selector that is known at build time.
/// Only used for fixed, literal selectors in this crate.
pub fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"))
}

/// All text nodes under `el`, concatenated as-is (no whitespace collapsing).
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// First descendant of `el` matching `sel`.
pub fn first_match<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.select(sel).next()
}
