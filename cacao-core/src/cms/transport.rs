//! CMS transport
//!
//! A transport performs one HTTP GET against the CMS REST API and returns
//! the decoded JSON body. It does not retry and does not cache; non-2xx
//! responses are errors.

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

#[cfg(feature = "http")]
use super::config::CmsConfig;
#[cfg(feature = "http")]
use reqwest::Client;

/// One request to the CMS REST API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmsRequest {
    /// Path below `/api/` (e.g., "blogs")
    pub path: String,
    /// Query pairs in insertion order
    pub query: Vec<(String, String)>,
}

impl CmsRequest {
    /// Creates a request for a collection path
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Appends a query pair
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// First value of a query parameter
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Locale this request was issued for
    pub fn locale(&self) -> Option<&str> {
        self.param("locale")
    }
}

/// Platform-agnostic access to the CMS.
///
/// Implementations issue exactly one network call per `get`.
pub trait CmsTransport: Send + Sync {
    /// Fetches `request` and returns the JSON body.
    fn get(&self, request: &CmsRequest) -> impl Future<Output = Result<Value, FetchError>> + Send;
}

impl<T: CmsTransport> CmsTransport for Arc<T> {
    fn get(&self, request: &CmsRequest) -> impl Future<Output = Result<Value, FetchError>> + Send {
        (**self).get(request)
    }
}

/// Fetches CMS content over HTTP
#[cfg(feature = "http")]
pub struct HttpCmsTransport {
    client: Client,
    config: CmsConfig,
}

#[cfg(feature = "http")]
impl HttpCmsTransport {
    /// Create a new transport from config
    pub fn new(config: &CmsConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder().timeout(config.timeout).user_agent(format!(
            "Cacao/{}",
            option_env!("CARGO_PKG_VERSION").unwrap_or("0.1.0")
        ));

        if let Some(proxy_url) = &config.proxy_url {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        Ok(Self {
            client: builder.build()?,
            config: config.clone(),
        })
    }
}

#[cfg(feature = "http")]
impl CmsTransport for HttpCmsTransport {
    fn get(&self, request: &CmsRequest) -> impl Future<Output = Result<Value, FetchError>> + Send {
        let url = self.config.api_url(&request.path);
        let mut builder = self.client.get(&url).query(&request.query);
        if let Some(token) = &self.config.api_token {
            builder = builder.bearer_auth(token);
        }

        async move {
            tracing::debug!(url = %url, locale = ?request.locale(), "cms request");
            let response = builder.send().await?;

            if !response.status().is_success() {
                return Err(FetchError::HttpError(response.status().as_u16()));
            }

            Ok(response.json::<Value>().await?)
        }
    }
}

/// Errors that can occur during content fetching
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP error with status code
    #[error("HTTP error: {0}")]
    HttpError(u16),

    /// Network/request error
    #[cfg(feature = "http")]
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Transport failure without an HTTP status
    #[error("Transport error: {0}")]
    Transport(String),

    /// Body does not match the expected record shape
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Body is not a `{ "data": ... }` envelope
    #[error("Response has no data envelope")]
    MissingEnvelope,
}
