use serde::Deserialize;
use std::env::vars;

/// Origin used when no environment override is present.
pub const DEFAULT_API_BASE_URL: &str = "https://api.winner.acwad.tech";

/// Rows requested per list call when the caller does not ask for more.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

const ENV_PREFIX: &str = "SITEDESK_";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration from environment: {0}")]
    Env(#[from] serde_env::Error),
    #[error("SITEDESK_PAGE_SIZE must be greater than zero")]
    ZeroPageSize,
}

/// Raw environment view, every field optional so defaults can be applied.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    api_base_url: Option<String>,
    page_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Origin every endpoint path is appended to, without a trailing slash.
    pub api_base_url: String,
    /// `limit` sent with list requests issued by entity pages.
    pub page_size: u32,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(base_url.into()),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Reads `SITEDESK_API_BASE_URL` and `SITEDESK_PAGE_SIZE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(vars())
    }

    /// Same as [`Self::from_env`], over an explicit variable list.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let scoped: Vec<(String, String)> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.as_ref()
                    .strip_prefix(ENV_PREFIX)
                    .map(|key| (key.to_owned(), value.as_ref().to_owned()))
            })
            .collect();

        let raw: RawConfig = serde_env::from_iter(scoped)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let RawConfig {
            api_base_url,
            page_size,
        } = raw;

        let api_base_url = match api_base_url {
            Some(url) if !url.trim().is_empty() => {
                log::info!("Using API base URL from environment: {url}");
                url
            }
            _ => DEFAULT_API_BASE_URL.to_owned(),
        };

        let page_size = match page_size {
            Some(0) => return Err(ConfigError::ZeroPageSize),
            Some(size) => size,
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            api_base_url: normalize_base_url(api_base_url),
            page_size,
        })
    }

    /// Joins an endpoint path (always starting with `/`) onto the base URL.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.api_base_url)
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_production_origin() {
        let config = BusinessConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(
            config.url("/api/faqs"),
            "https://api.winner.acwad.tech/api/faqs"
        );
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = BusinessConfig::new("http://localhost:3000/");
        assert_eq!(config.url("/health"), "http://localhost:3000/health");
    }

    #[test]
    fn env_overrides_are_applied() {
        let config = BusinessConfig::from_vars(vec![
            ("SITEDESK_API_BASE_URL", "http://127.0.0.1:9000/"),
            ("SITEDESK_PAGE_SIZE", "25"),
            ("UNRELATED", "ignored"),
        ])
        .expect("config should build");

        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn missing_env_falls_back_to_defaults() {
        let config =
            BusinessConfig::from_vars(Vec::<(String, String)>::new()).expect("config should build");
        assert_eq!(config, BusinessConfig::default());
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let result = BusinessConfig::from_vars(vec![("SITEDESK_PAGE_SIZE", "0")]);
        assert!(matches!(result, Err(ConfigError::ZeroPageSize)));
    }
}
