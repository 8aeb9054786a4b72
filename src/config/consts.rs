// src/config/consts.rs

// Registry (catalogue listing)
pub const REGISTRY_API: &str = "https://api.wordpress.org/plugins/info/1.2/";
pub const PLUGIN_PAGE_PREFIX: &str = "https://wordpress.org/plugins/";
pub const PER_PAGE: u32 = 100;
// Upper bound on catalogue pages; an author with more than this is a bug on our side.
pub const MAX_PAGES: u32 = 50;

// Translation portal
pub const PORTAL_PREFIX: &str = "https://translate.wordpress.org/locale/";
pub const PORTAL_PROJECT_PATH: &str = "default/wp-plugins";
pub const DEFAULT_LOCALE: &str = "de";

// Net config
pub const USER_AGENT: &str = concat!("plugin_scrape/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 20;
pub const CONNECT_TIMEOUT_SECS: u64 = 10;
pub const MAX_REDIRECTS: usize = 5;
pub const MAX_RETRIES: u32 = 2;
pub const RETRY_BACKOFF_MS: u64 = 500;

// Be polite to the portal
pub const REQUEST_PAUSE_MS: u64 = 1000;

// Local files
pub const LOG_FILE: &str = ".store/debug.log";
