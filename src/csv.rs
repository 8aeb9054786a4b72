// src/csv.rs

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Append a single CSV/TSV row (with trailing newline) to `buf`.
pub fn push_row(buf: &mut String, row: &[String], sep: char) {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 { buf.push(sep); }
        if needs_quotes(cell, sep) {
            buf.push('"');
            buf.push_str(&cell.replace('"', "\"\""));
            buf.push('"');
        } else {
            buf.push_str(cell);
        }
    }
    buf.push('\n');
}

/// Stringify rows with an optional header line.
pub fn rows_to_string(headers: Option<&[String]>, rows: &[Vec<String>], sep: char) -> String {
    let mut buf = String::new();
    if let Some(h) = headers {
        push_row(&mut buf, h, sep);
    }
    for r in rows {
        push_row(&mut buf, r, sep);
    }
    buf
}
