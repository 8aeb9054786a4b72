//! Scraping *spec* for the plugin registry listing.
//!
//! Purpose:
//! - Build `query_plugins` URLs for one author, page by page.
//! - Turn one JSON page into `ExtensionRecord`s plus paging info.
//!
//! The paging loop itself lives in `scrape::collect_catalogue`.

use std::error::Error;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::config::consts::REGISTRY_API;
use crate::core::reldate;
use crate::core::sanitize::{normalize_entities, normalize_ws, slug_is_url_safe};
use crate::data::ExtensionRecord;

#[derive(Debug, Default, Deserialize)]
struct RawInfo {
    #[serde(default)]
    page: u32,
    #[serde(default)]
    pages: u32,
    #[serde(default)]
    results: u64,
}

#[derive(Debug, Deserialize)]
struct RawPlugin {
    #[serde(default)]
    name: String,
    slug: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    active_installs: Option<u64>,
    #[serde(default)]
    rating: Option<u8>,
    #[serde(default)]
    num_ratings: Option<u64>,
    #[serde(default)]
    last_updated: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPage {
    #[serde(default)]
    info: RawInfo,
    #[serde(default)]
    plugins: Vec<RawPlugin>,
    #[serde(default)]
    error: Option<String>,
}

/// One decoded page of the listing.
#[derive(Debug)]
pub struct CataloguePage {
    pub page: u32,
    pub pages: u32,
    pub results: u64,
    pub records: Vec<ExtensionRecord>,
    /// Entries on the page before unusable slugs were dropped.
    pub raw_count: usize,
}

impl CataloguePage {
    /// More pages after `requested`? An empty page ends the walk even if
    /// `pages` says otherwise; a page whose entries were all skipped does not.
    pub fn has_more_after(&self, requested: u32) -> bool {
        self.raw_count > 0 && requested < self.pages
    }
}

/// `query_plugins` URL for `author`, 1-based `page`.
pub fn catalogue_url(author: &str, page: u32, per_page: u32) -> String {
    format!(
        "{}?action=query_plugins&request[author]={}&request[page]={}&request[per_page]={}",
        REGISTRY_API,
        encode_query_value(author),
        page,
        per_page
    )
}

// Authors are wp.org usernames; escape anything outside the unreserved set anyway.
fn encode_query_value(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{:02X}", b));
        }
    }
    out
}

/// Decode one listing page. `now` anchors the relative dates.
///
/// Entries with an empty or non URL-safe slug are skipped: the slug is the key
/// every derived URL is built from.
pub fn parse_page(json: &str, now: DateTime<Utc>) -> Result<CataloguePage, Box<dyn Error>> {
    let raw: RawPage = serde_json::from_str(json)?;
    if let Some(err) = raw.error {
        return Err(format!("registry error: {}", err).into());
    }

    let raw_count = raw.plugins.len();
    let mut records = Vec::with_capacity(raw_count);
    for p in raw.plugins {
        let slug = p.slug.trim().to_string();
        if !slug_is_url_safe(&slug) {
            tracing::warn!(slug = %p.slug, "skipping entry with unusable slug");
            continue;
        }
        records.push(to_record(p, slug, now));
    }

    Ok(CataloguePage {
        page: raw.info.page,
        pages: raw.info.pages,
        results: raw.info.results,
        records,
        raw_count,
    })
}

fn to_record(p: RawPlugin, slug: String, now: DateTime<Utc>) -> ExtensionRecord {
    let name = normalize_ws(&normalize_entities(&p.name));
    let name = if name.is_empty() { slug.clone() } else { name };

    let raw_updated = p.last_updated.unwrap_or_default();
    let last_updated = reldate::parse_registry_date(&raw_updated);
    let relative = match last_updated {
        Some(then) => reldate::relative_to(then, now),
        None => raw_updated.trim().to_string(),
    };

    let mut rec = ExtensionRecord::new(name, slug, p.active_installs.unwrap_or(0), relative);
    rec.version = p.version.unwrap_or_default();
    rec.rating = p.rating.unwrap_or(0).min(100);
    rec.num_ratings = p.num_ratings.unwrap_or(0);
    rec.last_updated = last_updated;
    rec
}
