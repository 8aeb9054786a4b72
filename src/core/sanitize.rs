// src/core/sanitize.rs

use scraper::Html;

/// Decode HTML entities in registry strings (plugin names come back
/// HTML-escaped from the API). Any markup is reduced to its text.
/// Non-breaking spaces become plain spaces.
pub fn normalize_entities(s: &str) -> String {
    if !s.contains('&') && !s.contains('<') {
        return s.to_string();
    }
    let text: String = Html::parse_fragment(s).root_element().text().collect();
    text.replace('\u{a0}', " ")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Parse the leading base-10 integer of `s` (after trimming).
///
/// - `"170"` → `Some(170)`, `"12 strings"` → `Some(12)`
/// - `"1,234"` → `Some(1)`; separators are not part of the page format
/// - negative values are coerced to `Some(0)`
/// - no leading digits (empty, `"—"`, `"n/a"`) → `None`
/// - overflow saturates at `u64::MAX`
pub fn parse_leading_count(s: &str) -> Option<u64> {
    let t = s.trim();
    let (negative, rest) = match t.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, t.strip_prefix('+').unwrap_or(t)),
    };

    let end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() { return None; }
    if negative { return Some(0); }

    Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}

/// True when `slug` can be dropped into a URL path segment unescaped.
pub fn slug_is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_count_variants() {
        assert_eq!(parse_leading_count(" 170 "), Some(170));
        assert_eq!(parse_leading_count("12 strings"), Some(12));
        assert_eq!(parse_leading_count("1,234"), Some(1));
        assert_eq!(parse_leading_count("-5"), Some(0));
        assert_eq!(parse_leading_count(""), None);
        assert_eq!(parse_leading_count("n/a"), None);
        assert_eq!(parse_leading_count("-"), None);
        assert_eq!(parse_leading_count("99999999999999999999999"), Some(u64::MAX));
    }

    #[test]
    fn entities_decode_once() {
        assert_eq!(normalize_entities("Foo &amp; Bar"), "Foo & Bar");
        assert_eq!(normalize_entities("&amp;lt;"), "&lt;");
        assert_eq!(normalize_entities("It&#039;s"), "It's");
        assert_eq!(normalize_entities("A&nbsp;B"), "A B");
    }

    #[test]
    fn entities_decode_named_and_numeric() {
        assert_eq!(
            normalize_entities("&#8220;Fast&#8221; &hellip; cache &#8212; &eacute;t&eacute;"),
            "\u{201c}Fast\u{201d} \u{2026} cache \u{2014} \u{e9}t\u{e9}"
        );
        assert_eq!(normalize_entities("plain name"), "plain name");
    }

    #[test]
    fn ws_collapses() {
        assert_eq!(normalize_ws("  a \n\t b  "), "a b");
    }

    #[test]
    fn slug_safety() {
        assert!(slug_is_url_safe("contact-form-7"));
        assert!(!slug_is_url_safe("bad slug"));
        assert!(!slug_is_url_safe(""));
    }
}
