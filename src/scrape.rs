// src/scrape.rs
use std::{collections::HashMap, error::Error, time::Duration};

use chrono::Utc;

use crate::{
    config::consts::{MAX_PAGES, PER_PAGE},
    config::options::{ScrapeOptions, SortKey},
    core::{FetchError, HttpClient},
    data::ExtensionRecord,
    progress::Progress,
    specs::{catalogue, translations},
};

/// Where pages come from. `HttpClient` in production; fixtures in tests.
pub trait PageSource {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

impl PageSource for HttpClient {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.get_text(url).await
    }
}

/// Canned responses keyed by URL; unknown URLs answer 404.
#[derive(Debug, Default, Clone)]
pub struct StaticPages {
    pages: HashMap<String, String>,
}

impl StaticPages {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, url: impl Into<String>, body: impl Into<String>) -> &mut Self {
        self.pages.insert(url.into(), body.into());
        self
    }
}

impl PageSource for StaticPages {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Http { status: 404, url: url.to_string() })
    }
}

/// Walk the author's listing until the registry runs out of pages.
pub async fn collect_catalogue<S: PageSource>(
    source: &S,
    author: &str,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<ExtensionRecord>, Box<dyn Error>> {
    if author.trim().is_empty() {
        return Err("author must not be empty".into());
    }

    let now = Utc::now();
    let mut out = Vec::new();
    let mut page = 1;

    loop {
        let url = catalogue::catalogue_url(author, page, PER_PAGE);
        let body = source.fetch(&url).await?;
        let parsed = catalogue::parse_page(&body, now)?;
        tracing::info!(
            author,
            page,
            pages = parsed.pages,
            results = parsed.results,
            count = parsed.records.len(),
            "catalogue page"
        );
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Catalogue page {}/{}", page, parsed.pages.max(page)));
        }

        let more = parsed.has_more_after(page);
        out.extend(parsed.records);
        if !more {
            break;
        }
        if page >= MAX_PAGES {
            tracing::warn!(page, "catalogue page limit reached; stopping");
            break;
        }
        page += 1;
    }

    // The registry has been seen to repeat entries across page boundaries.
    let mut seen = std::collections::HashSet::new();
    out.retain(|r| seen.insert(r.slug.clone()));

    Ok(out)
}

/// Fetch and summarize one plugin's translation page.
pub async fn fetch_translations<S: PageSource>(
    source: &S,
    locale: &str,
    slug: &str,
) -> Result<crate::data::SummaryRecord, FetchError> {
    let url = translations::portal_url(locale, slug);
    let page = source.fetch(&url).await?;
    Ok(translations::summarize_html(&page, &url))
}

/// Attach translation stats to each record, one request at a time with a
/// fixed pause in between. A failed page leaves that record without stats.
pub async fn augment_translations<S: PageSource>(
    source: &S,
    records: &mut [ExtensionRecord],
    locale: &str,
    delay: Duration,
    mut progress: Option<&mut dyn Progress>,
) -> usize {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(records.len());
    }

    let mut attached = 0;
    for (i, rec) in records.iter_mut().enumerate() {
        if i > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let ok = match fetch_translations(source, locale, &rec.slug).await {
            Ok(summary) => {
                tracing::info!(
                    slug = %rec.slug,
                    total = summary.total_not_translated(),
                    "translations"
                );
                rec.attach_translations(summary);
                attached += 1;
                true
            }
            Err(e) => {
                tracing::warn!(slug = %rec.slug, error = %e, "translation page unavailable; skipping");
                false
            }
        };

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&rec.slug, ok);
        }
    }

    attached
}

// Shorten the trait object lifetime too, so `progress` can be lent out more than once.
fn reborrow<'b>(progress: &'b mut Option<&mut dyn Progress>) -> Option<&'b mut dyn Progress> {
    progress.as_mut().map(|p| &mut **p as &mut dyn Progress)
}

pub fn sort_records(records: &mut [ExtensionRecord], key: SortKey) {
    match key {
        SortKey::Installs => records.sort_by(|a, b| {
            b.active_installs.cmp(&a.active_installs).then_with(|| a.slug.cmp(&b.slug))
        }),
        SortKey::Name => records.sort_by(|a, b| {
            a.name.to_lowercase().cmp(&b.name.to_lowercase()).then_with(|| a.slug.cmp(&b.slug))
        }),
        SortKey::Updated => records.sort_by(|a, b| {
            b.last_updated.cmp(&a.last_updated).then_with(|| a.slug.cmp(&b.slug))
        }),
        SortKey::Untranslated => records.sort_by(|a, b| {
            let ta = a.translations().map(|t| t.total_not_translated());
            let tb = b.translations().map(|t| t.total_not_translated());
            tb.cmp(&ta).then_with(|| a.slug.cmp(&b.slug))
        }),
    }
}

/// Whole run: listing → optional translation stats → sort.
pub async fn collect<S: PageSource>(
    source: &S,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<ExtensionRecord>, Box<dyn Error>> {
    let mut records = collect_catalogue(source, &opts.author, reborrow(&mut progress)).await?;
    tracing::info!(author = %opts.author, count = records.len(), "catalogue complete");

    if opts.with_translations && !records.is_empty() {
        let attached = augment_translations(
            source,
            &mut records,
            &opts.locale,
            Duration::from_millis(opts.delay_ms),
            reborrow(&mut progress),
        )
        .await;
        tracing::info!(attached, total = records.len(), locale = %opts.locale, "translations complete");
    }

    sort_records(&mut records, opts.sort);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(records)
}
