//! Content fetcher for CMS records
//!
//! One method per content type. Each issues a single request with the
//! locale and populate directive embedded, unwraps the `data` envelope and
//! decodes the record. By-slug lookups filter the collection and take the
//! first match.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::kind::ContentKind;
use super::transport::{CmsRequest, CmsTransport, FetchError};
use super::types::{BlogCategory, BlogPost, Footer, Header, HomePage, Service, ServicesPage};
use crate::locale::Locale;

/// Path of the CMS locale list endpoint
const LOCALES_PATH: &str = "i18n/locales";

/// Fetches typed content from the CMS
pub struct ContentFetcher<T> {
    transport: T,
}

impl<T: CmsTransport> ContentFetcher<T> {
    /// Create a new content fetcher over a transport
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch the site header
    pub async fn header(&self, locale: &str) -> Result<Option<Header>, FetchError> {
        self.single(ContentKind::Header, locale).await
    }

    /// Fetch the site footer
    pub async fn footer(&self, locale: &str) -> Result<Option<Footer>, FetchError> {
        self.single(ContentKind::Footer, locale).await
    }

    /// Fetch the homepage
    pub async fn homepage(&self, locale: &str) -> Result<Option<HomePage>, FetchError> {
        self.single(ContentKind::HomePage, locale).await
    }

    /// Fetch the services listing page
    pub async fn services_page(&self, locale: &str) -> Result<Option<ServicesPage>, FetchError> {
        self.single(ContentKind::ServicesPage, locale).await
    }

    /// Fetch all services
    pub async fn services(&self, locale: &str) -> Result<Vec<Service>, FetchError> {
        self.list(ContentKind::Service.request(locale)).await
    }

    /// Fetch one service by slug
    pub async fn service(&self, locale: &str, slug: &str) -> Result<Option<Service>, FetchError> {
        self.by_slug(ContentKind::Service, locale, slug).await
    }

    /// Fetch all blog posts, newest first
    pub async fn blog_posts(&self, locale: &str) -> Result<Vec<BlogPost>, FetchError> {
        let request = ContentKind::BlogPost
            .request(locale)
            .with("sort[0]", "publishedAt:desc");
        self.list(request).await
    }

    /// Fetch one blog post by slug
    pub async fn blog_post(&self, locale: &str, slug: &str) -> Result<Option<BlogPost>, FetchError> {
        self.by_slug(ContentKind::BlogPost, locale, slug).await
    }

    /// Fetch blog posts tagged with a category slug, newest first
    pub async fn blog_posts_by_category(
        &self,
        locale: &str,
        category_slug: &str,
    ) -> Result<Vec<BlogPost>, FetchError> {
        let request = ContentKind::BlogPost
            .request(locale)
            .with("filters[categories][slug][$eq]", category_slug)
            .with("sort[0]", "publishedAt:desc");
        self.list(request).await
    }

    /// Fetch all blog categories
    pub async fn blog_categories(&self, locale: &str) -> Result<Vec<BlogCategory>, FetchError> {
        self.list(ContentKind::BlogCategory.request(locale)).await
    }

    /// Fetch the locales configured in the CMS.
    ///
    /// The i18n endpoint answers with a bare array; an enveloped array is
    /// accepted as well.
    pub async fn locales(&self) -> Result<Vec<Locale>, FetchError> {
        let body = self.transport.get(&CmsRequest::new(LOCALES_PATH)).await?;
        let list = match body {
            Value::Object(mut map) => map.remove("data").ok_or(FetchError::MissingEnvelope)?,
            other => other,
        };
        Ok(serde_json::from_value(list)?)
    }

    async fn data(&self, request: CmsRequest) -> Result<Value, FetchError> {
        debug!(path = %request.path, locale = ?request.locale(), "fetching content");
        let body = self.transport.get(&request).await?;
        unwrap_envelope(body)
    }

    async fn single<R: DeserializeOwned>(
        &self,
        kind: ContentKind,
        locale: &str,
    ) -> Result<Option<R>, FetchError> {
        match self.data(kind.request(locale)).await? {
            Value::Null => Ok(None),
            record => Ok(Some(serde_json::from_value(record)?)),
        }
    }

    async fn list<R: DeserializeOwned>(&self, request: CmsRequest) -> Result<Vec<R>, FetchError> {
        match self.data(request).await? {
            Value::Null => Ok(Vec::new()),
            records => Ok(serde_json::from_value(records)?),
        }
    }

    async fn by_slug<R: DeserializeOwned>(
        &self,
        kind: ContentKind,
        locale: &str,
        slug: &str,
    ) -> Result<Option<R>, FetchError> {
        let request = kind.request(locale).with("filters[slug][$eq]", slug);
        let records: Vec<R> = self.list(request).await?;
        Ok(records.into_iter().next())
    }
}

/// Takes `data` out of a `{ "data": ..., "meta": ... }` body.
fn unwrap_envelope(body: Value) -> Result<Value, FetchError> {
    match body {
        Value::Object(mut map) => map.remove("data").ok_or(FetchError::MissingEnvelope),
        _ => Err(FetchError::MissingEnvelope),
    }
}
