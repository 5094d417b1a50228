//! Configuration for the CMS connection

use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::locale::DEFAULT_LOCALE;

/// Configuration for talking to the CMS
#[derive(Debug, Clone)]
pub struct CmsConfig {
    /// CMS base URL without the `/api` suffix (e.g., "https://cms.cacao.studio")
    pub base_url: String,

    /// Read-only API token sent as a bearer token
    pub api_token: Option<String>,

    /// HTTP timeout for fetches
    pub timeout: Duration,

    /// Proxy URL (socks5:// or http://)
    pub proxy_url: Option<String>,

    /// Locale used until the CMS locale list is known
    pub default_locale: String,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:1337".to_string(),
            api_token: None,
            timeout: Duration::from_secs(30),
            proxy_url: None,
            default_locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl CmsConfig {
    /// Load configuration from environment variables.
    ///
    /// `CMS_URL`, `CMS_TOKEN`, `CMS_TIMEOUT_SECS`, `CMS_PROXY` and
    /// `CMS_DEFAULT_LOCALE`; anything unset keeps its default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` with an injectable variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("CMS_URL") {
            config.base_url = normalize_base_url(&url)?;
        }

        config.api_token = lookup("CMS_TOKEN").filter(|t| !t.is_empty());
        config.proxy_url = lookup("CMS_PROXY").filter(|p| !p.is_empty());

        if let Some(raw) = lookup("CMS_TIMEOUT_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(locale) = lookup("CMS_DEFAULT_LOCALE").filter(|l| !l.is_empty()) {
            config.default_locale = locale;
        }

        Ok(config)
    }

    /// Configure with an API token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Configure with custom proxy
    pub fn with_proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    /// Full URL of a CMS REST endpoint (`{base}/api/{path}`)
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    url::Url::parse(trimmed).map_err(|_| ConfigError::InvalidUrl(raw.to_string()))?;
    Ok(trimmed.to_string())
}

/// Errors from reading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// CMS_URL is not an absolute URL
    #[error("invalid CMS URL: {0}")]
    InvalidUrl(String),

    /// CMS_TIMEOUT_SECS is not a whole number of seconds
    #[error("invalid CMS timeout: {0}")]
    InvalidTimeout(String),
}
