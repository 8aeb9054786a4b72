//! # Scraping “specs” module
//!
//! Page-specific knowledge: *where the ground truth lives* in a remote payload
//! and *how to read it robustly*.
//!
//! ## What lives here
//! - `catalogue` – the registry's JSON listing (`query_plugins`), one page at a time.
//! - `translations` – the translation portal's per-plugin status page (HTML),
//!   reduced to one `SummaryRecord`.
//!
//! ## What does **not** live here
//! - **Networking and pacing** – `scrape` fetches pages and sleeps between them.
//! - **Output formatting** – see `render`.
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::collect → specs::catalogue::parse_page      (per listing page)
//!                       ↘ specs::translations::summarize_html (per plugin)
//!     → render::render
//! ```
//!
//! ## Conventions & invariants
//! - Parsers are pure: text in, value out. Offline-testable against fixtures.
//! - The HTML side never errors. Missing pieces read as zero.
pub mod catalogue;
pub mod translations;
