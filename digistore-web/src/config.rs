use reqwest::Url;
use thiserror::Error;
use tracing::{error, info};

/// API root used when no override is compiled in
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";
/// Products requested for the home page
pub const DEFAULT_FEATURED_PER_PAGE: u32 = 6;
const MAX_PER_PAGE: u32 = 100;

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid API base URL {url:?}: {reason}")]
    InvalidApiBase { url: String, reason: String },
    #[error("Unsupported API base scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),
    #[error("Invalid featured page size {0:?}, expected 1..=100")]
    InvalidPerPage(String),
}

/// Storefront configuration, provided to the component tree as context.
///
/// The browser has no process environment, so overrides are read at build
/// time from `DIGISTORE_API_BASE` and `DIGISTORE_FEATURED_PER_PAGE`.
#[derive(Clone, Debug, PartialEq)]
pub struct StoreConfig {
    /// API root without trailing slash, e.g. `http://localhost:5000/api`
    pub api_base: String,
    /// `per_page` sent with the featured products request
    pub featured_per_page: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            featured_per_page: DEFAULT_FEATURED_PER_PAGE,
        }
    }
}

impl StoreConfig {
    /// Load configuration from build-time overrides, falling back to defaults
    /// when an override is invalid.
    pub fn load() -> Self {
        match Self::from_values(
            option_env!("DIGISTORE_API_BASE"),
            option_env!("DIGISTORE_FEATURED_PER_PAGE"),
        ) {
            Ok(config) => {
                info!(
                    "Store config: api_base={}, featured_per_page={}",
                    config.api_base, config.featured_per_page
                );
                config
            }
            Err(e) => {
                error!("Invalid store configuration: {e}. Using defaults");
                Self::default()
            }
        }
    }

    /// Build a config from optional raw values; `None` keeps the default.
    pub fn from_values(
        api_base: Option<&str>,
        featured_per_page: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_base = match api_base.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => parse_api_base(raw)?,
            None => DEFAULT_API_BASE.to_string(),
        };

        let featured_per_page = match featured_per_page.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => parse_per_page(raw)?,
            None => DEFAULT_FEATURED_PER_PAGE,
        };

        Ok(Self {
            api_base,
            featured_per_page,
        })
    }
}

fn parse_api_base(raw: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidApiBase {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(raw.trim_end_matches('/').to_string()),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

fn parse_per_page(raw: &str) -> Result<u32, ConfigError> {
    raw.parse::<u32>()
        .ok()
        .filter(|n| (1..=MAX_PER_PAGE).contains(n))
        .ok_or_else(|| ConfigError::InvalidPerPage(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = StoreConfig::from_values(None, None).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.api_base, "http://localhost:5000/api");
        assert_eq!(config.featured_per_page, 6);
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = StoreConfig::from_values(Some("  "), Some("")).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config =
            StoreConfig::from_values(Some("https://shop.example.com/api/"), Some("12")).unwrap();
        assert_eq!(config.api_base, "https://shop.example.com/api");
        assert_eq!(config.featured_per_page, 12);
    }

    #[test]
    fn test_rejects_relative_url() {
        let err = StoreConfig::from_values(Some("/api"), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidApiBase { .. }));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = StoreConfig::from_values(Some("ftp://files.example.com"), None).unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedScheme("ftp".to_string()));
    }

    #[test]
    fn test_rejects_out_of_range_page_size() {
        for raw in ["0", "101", "-3", "six"] {
            let err = StoreConfig::from_values(None, Some(raw)).unwrap_err();
            assert_eq!(err, ConfigError::InvalidPerPage(raw.to_string()));
        }
    }
}
