// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::{
    config::consts::{DEFAULT_LOCALE, LOG_FILE, REQUEST_PAUSE_MS, TIMEOUT_SECS, USER_AGENT},
    config::options::{AppOptions, ExportOptions, OutputFormat, ScrapeOptions, SortKey},
    core::HttpClient,
    progress::Progress,
};

/// List a WordPress.org author's plugins, optionally with translation status
/// for one locale.
#[derive(Parser, Debug)]
#[command(name = "plugin_scrape", version, about)]
pub struct Cli {
    /// WordPress.org username of the plugin author
    #[arg(short, long)]
    pub author: String,

    /// Translation locale slug as used by translate.wordpress.org (e.g. de, fr, pt-br)
    #[arg(short, long, default_value = DEFAULT_LOCALE)]
    pub locale: String,

    /// Fetch translation status for every plugin (one request per plugin)
    #[arg(short, long)]
    pub translations: bool,

    #[arg(short, long, value_enum, default_value_t = FormatArg::Table)]
    pub format: FormatArg,

    /// Write to this file (or directory, if it ends with a separator) instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Omit the header row in CSV/TSV output
    #[arg(long)]
    pub no_headers: bool,

    #[arg(long, value_enum, default_value_t = SortArg::Installs)]
    pub sort: SortArg,

    /// Pause between translation page requests, in milliseconds
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub delay_ms: u64,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = TIMEOUT_SECS)]
    pub timeout: u64,

    #[arg(long, default_value = USER_AGENT)]
    pub user_agent: String,

    /// More log output on stderr (-v, -vv, -vvv). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also append logs to a file
    #[arg(long, num_args = 0..=1, default_missing_value = LOG_FILE)]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Table,
    Json,
    Csv,
    Tsv,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Tsv => OutputFormat::Tsv,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Installs,
    Name,
    Updated,
    Untranslated,
}

impl From<SortArg> for SortKey {
    fn from(s: SortArg) -> Self {
        match s {
            SortArg::Installs => SortKey::Installs,
            SortArg::Name => SortKey::Name,
            SortArg::Updated => SortKey::Updated,
            SortArg::Untranslated => SortKey::Untranslated,
        }
    }
}

impl Cli {
    pub fn to_options(&self) -> AppOptions {
        AppOptions {
            scrape: ScrapeOptions {
                author: self.author.trim().to_string(),
                locale: self.locale.trim().to_ascii_lowercase(),
                with_translations: self.translations,
                delay_ms: self.delay_ms,
                timeout_secs: self.timeout,
                user_agent: self.user_agent.clone(),
                sort: self.sort.into(),
            },
            export: ExportOptions {
                format: self.format.into(),
                out: self.output.clone(),
                include_headers: !self.no_headers,
            },
        }
    }
}

/// Progress on stderr via tracing; quiet unless -v.
struct LogProgress {
    total: usize,
    done: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        tracing::info!("fetching translation status for {} plugins", total);
    }
    fn log(&mut self, msg: &str) {
        tracing::info!("{}", msg);
    }
    fn item_done(&mut self, slug: &str, ok: bool) {
        self.done += 1;
        tracing::info!("[{}/{}] {} {}", self.done, self.total, slug, if ok { "ok" } else { "skipped" });
    }
}

/// Parse args, set up logging, run.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    crate::log::init(cli.verbose, cli.log_file.as_deref())?;
    run_with(&cli.to_options()).await
}

pub async fn run_with(opts: &AppOptions) -> Result<(), Box<dyn std::error::Error>> {
    let client = HttpClient::new(&opts.scrape.user_agent, opts.scrape.timeout_secs)?;
    let mut sink = LogProgress { total: 0, done: 0 };
    let progress: &mut dyn Progress = &mut sink;

    let records = crate::scrape::collect(&client, &opts.scrape, Some(progress)).await?;
    let rendered = crate::render::render(&records, &opts.export)?;

    let out = opts.export.out_path(&opts.scrape.author);
    if let Some(path) = crate::file::write_output(out.as_deref(), &rendered)? {
        tracing::info!("wrote {} plugins to {}", records.len(), path.display());
    }
    Ok(())
}
