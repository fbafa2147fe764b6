//! Reads the process environment once at startup.
//!
//! The values are turned into the explicit structs from `common::config` and
//! passed down from `main`; nothing else in the server touches `std::env`.

use common::config::{SiteConfig, StoreConfig};
use log::{info, warn};

/// Server bind settings from `SITE_HOST`, `SITE_PORT` and `SITE_OPEN_BROWSER`.
pub fn site_config() -> SiteConfig {
    SiteConfig::from_lookup(|key| std::env::var(key).ok())
}

/// Store settings handed to the browser through `GET /api/config`.
pub fn store_config() -> StoreConfig {
    let config = StoreConfig::from_lookup(|key| std::env::var(key).ok());
    if config.is_placeholder() {
        warn!(
            "Testimonial store is not configured ({} / {} unset); testimonials will not load",
            common::config::STORE_URL_VAR,
            common::config::STORE_KEY_VAR
        );
    } else {
        info!(
            "Testimonial store: {} (table {}, timeout {} ms)",
            config.url, config.table, config.request_timeout_ms
        );
    }
    config
}
