//! Explicit configuration for the site.
//!
//! Nothing here reads ambient state by itself. Callers hand in a lookup function
//! (`std::env::var` on the server, a constant table in tests) and get back a plain
//! struct that is then passed to whoever needs it.

use serde::{Deserialize, Serialize};

pub const STORE_URL_VAR: &str = "TESTIMONIAL_STORE_URL";
pub const STORE_KEY_VAR: &str = "TESTIMONIAL_STORE_KEY";
pub const STORE_TABLE_VAR: &str = "TESTIMONIAL_STORE_TABLE";
pub const STORE_TIMEOUT_VAR: &str = "TESTIMONIAL_STORE_TIMEOUT_MS";

pub const PLACEHOLDER_STORE_URL: &str = "https://your-project.supabase.co";
pub const PLACEHOLDER_STORE_KEY: &str = "public-anon-key";
pub const DEFAULT_STORE_TABLE: &str = "client_testimonials";
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

pub const SITE_HOST_VAR: &str = "SITE_HOST";
pub const SITE_PORT_VAR: &str = "SITE_PORT";
pub const SITE_OPEN_BROWSER_VAR: &str = "SITE_OPEN_BROWSER";

/// How long the "thank you" banner stays after a testimonial is accepted.
pub const SUBMISSION_SUCCESS_MS: u32 = 5_000;
/// How long the contact button stays disabled after opening the deep link.
pub const CONTACT_CONFIRMATION_MS: u32 = 6_000;

/// Connection settings for the hosted testimonial store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Project endpoint, e.g. `https://abc.supabase.co`.
    pub url: String,
    /// Public (anon) access key, sent as `apikey` and bearer token.
    pub anon_key: String,
    pub table: String,
    pub request_timeout_ms: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: PLACEHOLDER_STORE_URL.to_string(),
            anon_key: PLACEHOLDER_STORE_KEY.to_string(),
            table: DEFAULT_STORE_TABLE.to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl StoreConfig {
    /// Builds the config from a key lookup. Unset or blank values fall back to the
    /// placeholders; a zero or unparsable timeout falls back to the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            url: value(STORE_URL_VAR)
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.url),
            anon_key: value(STORE_KEY_VAR).unwrap_or(defaults.anon_key),
            table: value(STORE_TABLE_VAR).unwrap_or(defaults.table),
            request_timeout_ms: value(STORE_TIMEOUT_VAR)
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.request_timeout_ms),
        }
    }

    /// True while either the endpoint or the key is still the documented placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.url == PLACEHOLDER_STORE_URL || self.anon_key == PLACEHOLDER_STORE_KEY
    }
}

/// Destination for the contact form deep link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub messaging_base_url: String,
    /// International format; a leading `+` is tolerated and stripped.
    pub destination_number: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            messaging_base_url: "https://wa.me".to_string(),
            destination_number: "923052692482".to_string(),
        }
    }
}

/// Bind settings for the server that hosts the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            open_browser: true,
        }
    }
}

impl SiteConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            host: value(SITE_HOST_VAR).unwrap_or(defaults.host),
            port: value(SITE_PORT_VAR)
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(defaults.port),
            open_browser: value(SITE_OPEN_BROWSER_VAR)
                .map(|v| !matches!(v.to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off"))
                .unwrap_or(defaults.open_browser),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn unset_store_values_use_placeholders() {
        let config = StoreConfig::from_lookup(|_| None);
        assert_eq!(config, StoreConfig::default());
        assert!(config.is_placeholder());
    }

    #[test]
    fn store_values_are_read_and_normalized() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            (STORE_URL_VAR, " https://abc.supabase.co/ "),
            (STORE_KEY_VAR, "anon-123"),
            (STORE_TIMEOUT_VAR, "2500"),
        ]));
        assert_eq!(config.url, "https://abc.supabase.co");
        assert_eq!(config.anon_key, "anon-123");
        assert_eq!(config.table, DEFAULT_STORE_TABLE);
        assert_eq!(config.request_timeout_ms, 2500);
        assert!(!config.is_placeholder());
    }

    #[test]
    fn blank_and_invalid_values_fall_back() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            (STORE_URL_VAR, "   "),
            (STORE_TIMEOUT_VAR, "0"),
        ]));
        assert_eq!(config.url, PLACEHOLDER_STORE_URL);
        assert_eq!(config.request_timeout_ms, DEFAULT_TIMEOUT_MS);

        let config = StoreConfig::from_lookup(lookup_from(&[(STORE_TIMEOUT_VAR, "soon")]));
        assert_eq!(config.request_timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn site_config_parses_port_and_browser_flag() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            (SITE_HOST_VAR, "0.0.0.0"),
            (SITE_PORT_VAR, "3000"),
            (SITE_OPEN_BROWSER_VAR, "false"),
        ]));
        assert_eq!(config.url(), "http://0.0.0.0:3000");
        assert!(!config.open_browser);

        let config = SiteConfig::from_lookup(lookup_from(&[(SITE_PORT_VAR, "not-a-port")]));
        assert_eq!(config.port, 8080);
        assert!(config.open_browser);
    }
}
