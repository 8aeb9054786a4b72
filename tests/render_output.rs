// tests/render_output.rs
//
// Table / JSON / CSV / TSV rendering and file output.
//
use std::fs;

use plugin_scrape::config::options::{ExportOptions, OutputFormat};
use plugin_scrape::file::write_output;
use plugin_scrape::render::{self, format_installs, NOT_AVAILABLE};
use plugin_scrape::{ExtensionRecord, SummaryRecord};

fn records() -> Vec<ExtensionRecord> {
    let mut a = ExtensionRecord::new("Alpha, the \"first\"".into(), "alpha".into(), 12345, "2 days ago".into());
    a.version = "2.0".into();
    a.attach_translations(SummaryRecord::new(
        2,
        170,
        5,
        0,
        "https://translate.wordpress.org/locale/de/default/wp-plugins/alpha/".into(),
    ));

    let b = ExtensionRecord::new("Beta".into(), "beta".into(), 3, "1 year ago".into());
    vec![a, b]
}

#[test]
fn installs_formatting() {
    assert_eq!(format_installs(0), "<10");
    assert_eq!(format_installs(10), "10+");
    assert_eq!(format_installs(1000), "1,000+");
    assert_eq!(format_installs(1234567), "1,234,567+");
}

#[test]
fn table_shows_na_for_missing_stats() {
    let out = render::table(&records());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    let header: Vec<&str> = lines[0].split_whitespace().collect();
    assert_eq!(header, ["Name", "Slug", "Installs", "Updated", "Untranslated", "URL"]);
    assert!(lines[1].starts_with("----"));
    assert!(lines[2].contains("  alpha  "));
    assert!(lines[2].contains("12,345+"));
    assert!(lines[2].contains("177"));
    assert!(lines[3].contains("  beta  "));
    assert!(lines[3].contains(NOT_AVAILABLE));
    assert!(lines[3].contains("https://wordpress.org/plugins/beta/"));
}

#[test]
fn table_empty() {
    assert_eq!(render::table(&[]), "No plugins found.\n");
}

#[test]
fn json_shape() {
    let out = render::json(&records()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();

    let a = &v[0];
    assert_eq!(a["slug"], "alpha");
    assert_eq!(a["activeInstalls"], 12345);
    assert_eq!(a["lastUpdatedRelative"], "2 days ago");
    assert_eq!(a["url"], "https://wordpress.org/plugins/alpha/");
    assert_eq!(a["translations"]["fuzzy"], 2);
    assert_eq!(a["translations"]["changesRequested"], 0);
    assert_eq!(a["translations"]["totalNotTranslated"], 177);
    assert!(a["translations"]["sourceUrl"].as_str().unwrap().ends_with("/alpha/"));

    assert!(v[1]["translations"].is_null());
}

#[test]
fn csv_quotes_and_blanks() {
    let out = render::delimited(&records(), true, ',');
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Name,Slug,Version,Active installs"));
    assert!(lines[1].starts_with("\"Alpha, the \"\"first\"\"\",alpha,2.0,12345,"));
    assert!(lines[1].contains(",2,170,5,0,177,https://translate.wordpress.org/"));
    assert!(lines[2].ends_with(",,,,,,"));
}

#[test]
fn tsv_without_headers() {
    let export = ExportOptions { format: OutputFormat::Tsv, out: None, include_headers: false };
    let out = render::render(&records(), &export).unwrap();
    let first = out.lines().next().unwrap();
    assert!(first.starts_with("\"Alpha, the \"\"first\"\"\"\talpha\t2.0\t12345"));
    assert_eq!(out.lines().count(), 2);
}

#[test]
fn attach_is_one_time() {
    let mut r = ExtensionRecord::new("X".into(), "x".into(), 0, "".into());
    r.attach_translations(SummaryRecord::new(1, 0, 0, 0, "first".into()));
    r.attach_translations(SummaryRecord::new(9, 9, 9, 9, "second".into()));
    assert_eq!(r.translations().unwrap().source_url(), "first");
    assert_eq!(r.translations().unwrap().total_not_translated(), 1);
}

#[test]
fn write_output_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/out/plugins.json");
    let written = write_output(Some(path.as_path()), "[]\n").unwrap();
    assert_eq!(written.as_deref(), Some(path.as_path()));
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");
}

#[test]
fn out_path_for_directory_hint() {
    let dir = tempfile::tempdir().unwrap();
    let export = ExportOptions {
        format: OutputFormat::Csv,
        out: Some(dir.path().to_path_buf()),
        include_headers: true,
    };
    assert_eq!(export.out_path("jane"), Some(dir.path().join("jane.csv")));

    let file = ExportOptions { out: Some("report.txt".into()), ..export.clone() };
    assert_eq!(file.out_path("jane"), Some("report.txt".into()));

    let stdout = ExportOptions::default();
    assert_eq!(stdout.out_path("jane"), None);
}
