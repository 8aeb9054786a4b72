// src/log.rs
// Tracing setup for the CLI. stdout carries rendered output, so human logs go
// to stderr; an optional plain-text file mirrors them for later digging.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Default filter for a `-v` count: 0 → warn, 1 → info, 2 → debug, 3+ → trace.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)))
}

/// Install the global subscriber. `RUST_LOG` wins over `verbosity`.
/// Fails if the log file cannot be opened or a subscriber is already set.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_filter(env_filter(verbosity));

    let file_layer = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(env_filter(verbosity.max(2))),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    if let Some(path) = log_file {
        tracing::debug!("file log at {}", path.display());
    }
    Ok(())
}
