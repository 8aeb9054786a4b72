//! Scraping *spec* for translation-status pages.
//!
//! Purpose:
//! - Read one plugin's project page on translate.wordpress.org
//!   (`/locale/<locale>/default/wp-plugins/<slug>/`) and sum the
//!   "not yet translated" counters of its four sub-projects.
//!
//! Page shape (the part we rely on):
//! ```text
//! <tr>
//!   <td><strong><a href="…/stable/">Stable (latest release)</a></strong></td>
//!   <td class="stats percent">96%</td>
//!   <td class="stats translated"><a>…</a></td>
//!   <td class="stats fuzzy"><a>2</a></td>
//!   <td class="stats untranslated"><a>170</a></td>
//!   <td class="stats waiting"><a>5</a></td>
//!   <td class="stats changesrequested"><a>0</a></td>
//! </tr>
//! ```
//!
//! Non-Responsibilities:
//! - **No networking.** The caller fetches the page and passes the text in.
//! - **No errors.** Missing rows, cells or numbers count as zero.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{PORTAL_PREFIX, PORTAL_PROJECT_PATH};
use crate::core::html;
use crate::core::sanitize::parse_leading_count;
use crate::data::SummaryRecord;

static ROW: LazyLock<Selector> = LazyLock::new(|| html::selector("tr"));
static STATS_CELL: LazyLock<Selector> = LazyLock::new(|| html::selector(r#"td[class*="stats"]"#));
static LINK: LazyLock<Selector> = LazyLock::new(|| html::selector("a"));

/// Minimum number of stats cells a row needs to count as a data row.
const MIN_STATS_CELLS: usize = 4;

/// The four translation targets a plugin project can have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubProject {
    Stable,
    StableReadme,
    Development,
    DevelopmentReadme,
}

impl SubProject {
    /// Aggregation order.
    pub const ALL: [SubProject; 4] = [
        SubProject::Stable,
        SubProject::StableReadme,
        SubProject::Development,
        SubProject::DevelopmentReadme,
    ];

    /// Row caption as printed on the page.
    pub fn caption(self) -> &'static str {
        match self {
            SubProject::Stable => "Stable (latest release)",
            SubProject::StableReadme => "Stable Readme (latest release)",
            SubProject::Development => "Development (trunk)",
            SubProject::DevelopmentReadme => "Development Readme (trunk)",
        }
    }

    /// Caption that must NOT appear in a matching row.
    ///
    /// The code captions are not prefix-free against their readme siblings, so
    /// a row mentioning the readme caption is rejected for the code label. No
    /// caption is contained in a readme caption, so readme labels need no
    /// exclusion.
    pub fn excluded_caption(self) -> Option<&'static str> {
        match self {
            SubProject::Stable => Some(SubProject::StableReadme.caption()),
            SubProject::Development => Some(SubProject::DevelopmentReadme.caption()),
            SubProject::StableReadme | SubProject::DevelopmentReadme => None,
        }
    }

    /// Does `row_text` belong to this sub-project?
    pub fn matches_text(self, row_text: &str) -> bool {
        row_text.contains(self.caption())
            && !self.excluded_caption().is_some_and(|ex| row_text.contains(ex))
    }
}

/// The four counters read from each row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Counter {
    Fuzzy,
    Untranslated,
    Waiting,
    ChangesRequested,
}

impl Counter {
    pub const ALL: [Counter; 4] = [
        Counter::Fuzzy,
        Counter::Untranslated,
        Counter::Waiting,
        Counter::ChangesRequested,
    ];

    /// Substring of the cell's `class` attribute.
    pub fn marker(self) -> &'static str {
        match self {
            Counter::Fuzzy => "fuzzy",
            Counter::Untranslated => "untranslated",
            Counter::Waiting => "waiting",
            Counter::ChangesRequested => "changesrequested",
        }
    }

    fn cell_selector(self) -> &'static Selector {
        static CELLS: LazyLock<[Selector; 4]> = LazyLock::new(|| {
            Counter::ALL.map(|c| html::selector(&format!(r#"td[class*="{}"]"#, c.marker())))
        });
        &CELLS[self as usize]
    }
}

/// Raw counters of one matched row. `None` = cell, link or number missing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowCounters {
    pub fuzzy: Option<u64>,
    pub untranslated: Option<u64>,
    pub waiting: Option<u64>,
    pub changes_requested: Option<u64>,
}

impl RowCounters {
    pub fn get(&self, counter: Counter) -> Option<u64> {
        match counter {
            Counter::Fuzzy => self.fuzzy,
            Counter::Untranslated => self.untranslated,
            Counter::Waiting => self.waiting,
            Counter::ChangesRequested => self.changes_requested,
        }
    }

    fn set(&mut self, counter: Counter, v: Option<u64>) {
        match counter {
            Counter::Fuzzy => self.fuzzy = v,
            Counter::Untranslated => self.untranslated = v,
            Counter::Waiting => self.waiting = v,
            Counter::ChangesRequested => self.changes_requested = v,
        }
    }
}

/// Running totals while folding rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Totals {
    fuzzy: u64,
    untranslated: u64,
    waiting: u64,
    changes_requested: u64,
}

impl Totals {
    /// Absent counters (and absent rows) collapse to zero here, and only here.
    fn add(self, row: Option<RowCounters>) -> Self {
        let row = row.unwrap_or_default();
        Self {
            fuzzy: self.fuzzy.saturating_add(row.fuzzy.unwrap_or(0)),
            untranslated: self.untranslated.saturating_add(row.untranslated.unwrap_or(0)),
            waiting: self.waiting.saturating_add(row.waiting.unwrap_or(0)),
            changes_requested: self.changes_requested.saturating_add(row.changes_requested.unwrap_or(0)),
        }
    }
}

/// Portal URL for one plugin in one locale.
pub fn portal_url(locale: &str, slug: &str) -> String {
    format!("{}{}/{}/{}/", PORTAL_PREFIX, locale, PORTAL_PROJECT_PATH, slug)
}

/// Find the data row for `sub`: first `tr` whose concatenated text matches the
/// caption rule and which carries at least four stats cells.
pub fn locate_row(doc: &Html, sub: SubProject) -> Option<ElementRef<'_>> {
    doc.select(&ROW).find(|tr| {
        sub.matches_text(&html::text_of(*tr)) && tr.select(&STATS_CELL).count() >= MIN_STATS_CELLS
    })
}

/// Read one counter: marked cell → first link → leading integer.
pub fn extract_counter(row: ElementRef<'_>, counter: Counter) -> Option<u64> {
    let cell = html::first_match(row, counter.cell_selector())?;
    let link = html::first_match(cell, &LINK)?;
    parse_leading_count(&html::text_of(link))
}

pub fn extract_counters(row: ElementRef<'_>) -> RowCounters {
    let mut out = RowCounters::default();
    for counter in Counter::ALL {
        out.set(counter, extract_counter(row, counter));
    }
    out
}

/// Per sub-project lookup, in aggregation order. `None` = row not on the page.
pub fn collect_rows(doc: &Html) -> Vec<(SubProject, Option<RowCounters>)> {
    SubProject::ALL
        .iter()
        .map(|&sub| (sub, locate_row(doc, sub).map(extract_counters)))
        .collect()
}

/// Aggregate a parsed page into one summary. Total: never fails.
pub fn summarize(doc: &Html, source_url: &str) -> SummaryRecord {
    let totals = collect_rows(doc).into_iter().fold(Totals::default(), |acc, (sub, row)| {
        match &row {
            Some(r) => tracing::debug!(sub = ?sub, counters = ?r, "row found"),
            None => tracing::debug!(sub = ?sub, "row missing; counts as zero"),
        }
        acc.add(row)
    });

    SummaryRecord::new(
        totals.fuzzy,
        totals.untranslated,
        totals.waiting,
        totals.changes_requested,
        source_url.to_string(),
    )
}

/// Load + summarize in one go.
pub fn summarize_html(page: &str, source_url: &str) -> SummaryRecord {
    summarize(&html::load(page), source_url)
}
