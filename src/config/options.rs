// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Most active installs first
    #[default]
    Installs,
    Name,
    /// Most recently updated first
    Updated,
    /// Most untranslated strings first; records without stats go last
    Untranslated,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub author: String,
    pub locale: String,
    pub with_translations: bool,
    pub delay_ms: u64,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub sort: SortKey,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            author: s!(),
            locale: s!(DEFAULT_LOCALE),
            with_translations: false,
            delay_ms: REQUEST_PAUSE_MS,
            timeout_secs: TIMEOUT_SECS,
            user_agent: s!(USER_AGENT),
            sort: SortKey::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
    Tsv,
}

impl OutputFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            OutputFormat::Table => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
        }
    }

    /// Field separator for the delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            OutputFormat::Csv => Some(','),
            OutputFormat::Tsv => Some('\t'),
            OutputFormat::Table | OutputFormat::Json => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: OutputFormat,
    /// `None` → stdout
    pub out: Option<PathBuf>,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            out: None,
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// Where the output goes. A path ending in a separator (or an existing
    /// directory) gets `<author>.<ext>` appended.
    pub fn out_path(&self, author: &str) -> Option<PathBuf> {
        let p = self.out.as_ref()?;
        if p.is_dir() || crate::file::looks_like_dir_hint(p) {
            let stem = if author.is_empty() { "plugins" } else { author };
            Some(p.join(format!("{}.{}", stem, self.format.ext())))
        } else {
            Some(p.clone())
        }
    }
}
