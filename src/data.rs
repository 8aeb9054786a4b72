// src/data.rs
//
// Canonical records produced by a run.
//
// - ExtensionRecord: one catalogue entry. Built once from registry data; the
//                    only later change is attaching translation stats.
// - SummaryRecord:   aggregated translation counters for one extension page.
//                    The total is always derived from the four counters.

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::config::consts::PLUGIN_PAGE_PREFIX;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionRecord {
    pub name: String,
    pub slug: String,
    pub version: String,
    pub active_installs: u64,
    pub rating: u8,
    pub num_ratings: u64,
    pub last_updated: Option<DateTime<Utc>>,
    pub last_updated_relative: String,
    pub url: String,
    translations: Option<SummaryRecord>,
}

impl ExtensionRecord {
    pub fn new(name: String, slug: String, active_installs: u64, last_updated_relative: String) -> Self {
        let url = plugin_url(&slug);
        Self {
            name,
            slug,
            version: s!(),
            active_installs,
            rating: 0,
            num_ratings: 0,
            last_updated: None,
            last_updated_relative,
            url,
            translations: None,
        }
    }

    pub fn translations(&self) -> Option<&SummaryRecord> {
        self.translations.as_ref()
    }

    /// One-time attachment. A second call keeps the first summary.
    pub fn attach_translations(&mut self, summary: SummaryRecord) {
        if self.translations.is_none() {
            self.translations = Some(summary);
        }
    }
}

/// `https://wordpress.org/plugins/<slug>/`
pub fn plugin_url(slug: &str) -> String {
    format!("{}{}/", PLUGIN_PAGE_PREFIX, slug)
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SummaryRecord {
    fuzzy: u64,
    untranslated: u64,
    waiting: u64,
    changes_requested: u64,
    source_url: String,
}

impl SummaryRecord {
    pub fn new(fuzzy: u64, untranslated: u64, waiting: u64, changes_requested: u64, source_url: String) -> Self {
        Self { fuzzy, untranslated, waiting, changes_requested, source_url }
    }

    pub fn fuzzy(&self) -> u64 { self.fuzzy }
    pub fn untranslated(&self) -> u64 { self.untranslated }
    pub fn waiting(&self) -> u64 { self.waiting }
    pub fn changes_requested(&self) -> u64 { self.changes_requested }
    pub fn source_url(&self) -> &str { &self.source_url }

    /// Sum of the four counters. Saturates instead of wrapping.
    pub fn total_not_translated(&self) -> u64 {
        self.fuzzy
            .saturating_add(self.untranslated)
            .saturating_add(self.waiting)
            .saturating_add(self.changes_requested)
    }
}

impl Serialize for SummaryRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("SummaryRecord", 6)?;
        st.serialize_field("fuzzy", &self.fuzzy)?;
        st.serialize_field("untranslated", &self.untranslated)?;
        st.serialize_field("waiting", &self.waiting)?;
        st.serialize_field("changesRequested", &self.changes_requested)?;
        st.serialize_field("totalNotTranslated", &self.total_not_translated())?;
        st.serialize_field("sourceUrl", &self.source_url)?;
        st.end()
    }
}
