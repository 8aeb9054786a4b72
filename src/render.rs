// src/render.rs
// Output formats for a finished run. Records are never modified here.

use crate::config::options::{ExportOptions, OutputFormat};
use crate::csv::rows_to_string;
use crate::data::ExtensionRecord;

pub const NOT_AVAILABLE: &str = "n/a";

/// Render `records` in the configured format. Output always ends with a newline.
pub fn render(records: &[ExtensionRecord], export: &ExportOptions) -> Result<String, serde_json::Error> {
    Ok(match export.format {
        OutputFormat::Table => table(records),
        OutputFormat::Json => json(records)?,
        OutputFormat::Csv | OutputFormat::Tsv => {
            let sep = export.format.delim().unwrap_or(',');
            delimited(records, export.include_headers, sep)
        }
    })
}

/// `12345` → `"12,345+"`; the registry rounds installs down, so the plus is honest.
/// Under ten is shown as `"<10"`.
pub fn format_installs(n: u64) -> String {
    if n < 10 {
        return s!("<10");
    }
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push('+');
    out
}

/* ---------------- Table ---------------- */

const TABLE_HEADERS: [&str; 6] = ["Name", "Slug", "Installs", "Updated", "Untranslated", "URL"];

fn table_row(r: &ExtensionRecord) -> [String; 6] {
    let untranslated = match r.translations() {
        Some(t) => t.total_not_translated().to_string(),
        None => s!(NOT_AVAILABLE),
    };
    [
        r.name.clone(),
        r.slug.clone(),
        format_installs(r.active_installs),
        r.last_updated_relative.clone(),
        untranslated,
        r.url.clone(),
    ]
}

/// Column-aligned plain text. Numeric columns are right-aligned.
pub fn table(records: &[ExtensionRecord]) -> String {
    if records.is_empty() {
        return s!("No plugins found.\n");
    }

    let rows: Vec<[String; 6]> = records.iter().map(table_row).collect();
    let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let right_aligned = [false, false, true, false, true, false];
    let mut out = String::new();
    let mut push_line = |cells: &[&str]| {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 { line.push_str("  "); }
            let pad = widths[i].saturating_sub(cell.chars().count());
            if right_aligned[i] {
                line.push_str(&" ".repeat(pad));
                line.push_str(cell);
            } else {
                line.push_str(cell);
                line.push_str(&" ".repeat(pad));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    };

    push_line(&TABLE_HEADERS);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&rule.iter().map(String::as_str).collect::<Vec<_>>());
    for row in &rows {
        push_line(&row.iter().map(String::as_str).collect::<Vec<_>>());
    }
    out
}

/* ---------------- JSON ---------------- */

pub fn json(records: &[ExtensionRecord]) -> Result<String, serde_json::Error> {
    let mut s = serde_json::to_string_pretty(records)?;
    s.push('\n');
    Ok(s)
}

/* ---------------- CSV / TSV ---------------- */

pub fn delimited_headers() -> Vec<String> {
    [
        "Name", "Slug", "Version", "Active installs", "Rating", "Last updated", "URL",
        "Fuzzy", "Untranslated", "Waiting", "Changes requested", "Total not translated",
        "Translations URL",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn delimited_row(r: &ExtensionRecord) -> Vec<String> {
    let mut row = vec![
        r.name.clone(),
        r.slug.clone(),
        r.version.clone(),
        r.active_installs.to_string(),
        r.rating.to_string(),
        r.last_updated_relative.clone(),
        r.url.clone(),
    ];
    match r.translations() {
        Some(t) => row.extend([
            t.fuzzy().to_string(),
            t.untranslated().to_string(),
            t.waiting().to_string(),
            t.changes_requested().to_string(),
            t.total_not_translated().to_string(),
            t.source_url().to_string(),
        ]),
        None => row.extend(std::iter::repeat_n(s!(), 6)),
    }
    row
}

pub fn delimited(records: &[ExtensionRecord], include_headers: bool, sep: char) -> String {
    let headers = delimited_headers();
    let rows: Vec<Vec<String>> = records.iter().map(delimited_row).collect();
    rows_to_string(include_headers.then_some(headers.as_slice()), &rows, sep)
}
