// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod data;
pub mod file;
pub mod log;
pub mod progress;
pub mod render;
pub mod scrape;

pub use data::{ExtensionRecord, SummaryRecord};
pub use specs::translations::{summarize, summarize_html, SubProject};
