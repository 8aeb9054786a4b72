// tests/cli_options.rs
//
// Argument parsing → AppOptions.
//
use clap::Parser;
use std::path::PathBuf;

use plugin_scrape::cli::Cli;
use plugin_scrape::config::consts::{DEFAULT_LOCALE, LOG_FILE, REQUEST_PAUSE_MS, USER_AGENT};
use plugin_scrape::config::options::{OutputFormat, SortKey};

#[test]
fn defaults() {
    let cli = Cli::try_parse_from(["plugin_scrape", "--author", " jane "]).unwrap();
    let opts = cli.to_options();

    assert_eq!(opts.scrape.author, "jane");
    assert_eq!(opts.scrape.locale, DEFAULT_LOCALE);
    assert!(!opts.scrape.with_translations);
    assert_eq!(opts.scrape.delay_ms, REQUEST_PAUSE_MS);
    assert_eq!(opts.scrape.user_agent, USER_AGENT);
    assert_eq!(opts.scrape.sort, SortKey::Installs);
    assert_eq!(opts.export.format, OutputFormat::Table);
    assert!(opts.export.include_headers);
    assert_eq!(opts.export.out, None);
    assert_eq!(cli.log_file, None);
}

#[test]
fn everything_set() {
    let cli = Cli::try_parse_from([
        "plugin_scrape", "-a", "jane", "-l", "PT-BR", "-t", "-f", "tsv", "-o", "out/x.tsv",
        "--no-headers", "--sort", "untranslated", "--delay-ms", "250", "--timeout", "5", "-vv",
        "--log-file",
    ])
    .unwrap();
    let opts = cli.to_options();

    assert_eq!(opts.scrape.locale, "pt-br");
    assert!(opts.scrape.with_translations);
    assert_eq!(opts.scrape.delay_ms, 250);
    assert_eq!(opts.scrape.timeout_secs, 5);
    assert_eq!(opts.scrape.sort, SortKey::Untranslated);
    assert_eq!(opts.export.format, OutputFormat::Tsv);
    assert_eq!(opts.export.out, Some(PathBuf::from("out/x.tsv")));
    assert!(!opts.export.include_headers);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.log_file, Some(PathBuf::from(LOG_FILE)));
}

#[test]
fn author_is_required_and_formats_are_checked() {
    assert!(Cli::try_parse_from(["plugin_scrape"]).is_err());
    assert!(Cli::try_parse_from(["plugin_scrape", "-a", "x", "--format", "xml"]).is_err());
}

#[test]
fn format_helpers() {
    assert_eq!(OutputFormat::Csv.delim(), Some(','));
    assert_eq!(OutputFormat::Tsv.delim(), Some('\t'));
    assert_eq!(OutputFormat::Json.delim(), None);
    assert_eq!(OutputFormat::Json.ext(), "json");
}
