// src/file.rs

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

/// Write rendered output to `path`, or to stdout when `path` is `None`.
/// Returns the path written to, if any.
pub fn write_output(path: Option<&Path>, contents: &str) -> Result<Option<PathBuf>, Box<dyn std::error::Error>> {
    match path {
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(contents.as_bytes())?;
            lock.flush()?;
            Ok(None)
        }
        Some(p) => {
            if let Some(parent) = p.parent() {
                if !parent.as_os_str().is_empty() {
                    ensure_directory(parent)?;
                }
            }
            fs::write(p, contents)?;
            Ok(Some(p.to_path_buf()))
        }
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
