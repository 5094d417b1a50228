//! Per-content-type hooks
//!
//! Every hook has the same lifecycle: build the key from the explicit
//! locale context (and slug), run the matching fetcher through the loader,
//! return the settled view.

use std::sync::Arc;

use super::events::EventHandler;
use super::state::{ContentKey, LoadSnapshot, Loader};
use crate::cms::{
    BlogCategory, BlogPost, CmsTransport, ContentFetcher, ContentKind, Footer, Header, HomePage,
    Service, ServicesPage,
};
use crate::locale::LocaleContext;

/// Loads the site header for `ctx`.
pub async fn use_header<T: CmsTransport>(
    fetcher: &ContentFetcher<T>,
    ctx: &LocaleContext,
    loader: &Loader<Header>,
) -> LoadSnapshot<Header> {
    let key = ContentKey::new(ContentKind::Header, ctx);
    loader
        .load(Some(key), |key| async move { fetcher.header(&key.locale).await })
        .await
}

/// Loads the site footer for `ctx`.
pub async fn use_footer<T: CmsTransport>(
    fetcher: &ContentFetcher<T>,
    ctx: &LocaleContext,
    loader: &Loader<Footer>,
) -> LoadSnapshot<Footer> {
    let key = ContentKey::new(ContentKind::Footer, ctx);
    loader
        .load(Some(key), |key| async move { fetcher.footer(&key.locale).await })
        .await
}

/// Loads the homepage for `ctx`.
pub async fn use_homepage<T: CmsTransport>(
    fetcher: &ContentFetcher<T>,
    ctx: &LocaleContext,
    loader: &Loader<HomePage>,
) -> LoadSnapshot<HomePage> {
    let key = ContentKey::new(ContentKind::HomePage, ctx);
    loader
        .load(Some(key), |key| async move {
            fetcher.homepage(&key.locale).await
        })
        .await
}

/// Loads the services listing page for `ctx`.
pub async fn use_services_page<T: CmsTransport>(
    fetcher: &ContentFetcher<T>,
    ctx: &LocaleContext,
    loader: &Loader<ServicesPage>,
) -> LoadSnapshot<ServicesPage> {
    let key = ContentKey::new(ContentKind::ServicesPage, ctx);
    loader
        .load(Some(key), |key| async move {
            fetcher.services_page(&key.locale).await
        })
        .await
}

/// Loads one service by slug. A missing slug settles idle without a request.
pub async fn use_service<T: CmsTransport>(
    fetcher: &ContentFetcher<T>,
    ctx: &LocaleContext,
    slug: Option<&str>,
    loader: &Loader<Service>,
) -> LoadSnapshot<Service> {
    let key = ContentKey::by_slug(ContentKind::Service, ctx, slug);
    loader
        .load(key, |key| async move {
            let slug = key.slug.as_deref().unwrap_or_default();
            fetcher.service(&key.locale, slug).await
        })
        .await
}

/// Loads every blog post for `ctx`.
pub async fn use_blog_posts<T: CmsTransport>(
    fetcher: &ContentFetcher<T>,
    ctx: &LocaleContext,
    loader: &Loader<Vec<BlogPost>>,
) -> LoadSnapshot<Vec<BlogPost>> {
    let key = ContentKey::new(ContentKind::BlogPost, ctx);
    loader
        .load(Some(key), |key| async move {
            fetcher.blog_posts(&key.locale).await.map(Some)
        })
        .await
}

/// Loads one blog post by slug. A missing slug settles idle without a request.
pub async fn use_blog_post<T: CmsTransport>(
    fetcher: &ContentFetcher<T>,
    ctx: &LocaleContext,
    slug: Option<&str>,
    loader: &Loader<BlogPost>,
) -> LoadSnapshot<BlogPost> {
    let key = ContentKey::by_slug(ContentKind::BlogPost, ctx, slug);
    loader
        .load(key, |key| async move {
            let slug = key.slug.as_deref().unwrap_or_default();
            fetcher.blog_post(&key.locale, slug).await
        })
        .await
}

/// Loads every blog category for `ctx`.
pub async fn use_blog_categories<T: CmsTransport>(
    fetcher: &ContentFetcher<T>,
    ctx: &LocaleContext,
    loader: &Loader<Vec<BlogCategory>>,
) -> LoadSnapshot<Vec<BlogCategory>> {
    let key = ContentKey::new(ContentKind::BlogCategory, ctx);
    loader
        .load(Some(key), |key| async move {
            fetcher.blog_categories(&key.locale).await.map(Some)
        })
        .await
}

/// The locale-driven loaders mounted on a client session.
#[derive(Clone, Default)]
pub struct SiteHooks {
    pub header: Loader<Header>,
    pub footer: Loader<Footer>,
    pub homepage: Loader<HomePage>,
    pub services_page: Loader<ServicesPage>,
    pub blog_posts: Loader<Vec<BlogPost>>,
    pub blog_categories: Loader<Vec<BlogCategory>>,
}

impl SiteHooks {
    /// Creates hooks with no observers
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates hooks reporting every transition to `handler`
    pub fn with_events(handler: Arc<dyn EventHandler>) -> Self {
        Self {
            header: Loader::with_events(Arc::clone(&handler)),
            footer: Loader::with_events(Arc::clone(&handler)),
            homepage: Loader::with_events(Arc::clone(&handler)),
            services_page: Loader::with_events(Arc::clone(&handler)),
            blog_posts: Loader::with_events(Arc::clone(&handler)),
            blog_categories: Loader::with_events(handler),
        }
    }

    /// Re-keys every hook to `ctx` and waits until all have settled.
    pub async fn switch_locale<T: CmsTransport>(
        &self,
        fetcher: &ContentFetcher<T>,
        ctx: &LocaleContext,
    ) {
        tokio::join!(
            use_header(fetcher, ctx, &self.header),
            use_footer(fetcher, ctx, &self.footer),
            use_homepage(fetcher, ctx, &self.homepage),
            use_services_page(fetcher, ctx, &self.services_page),
            use_blog_posts(fetcher, ctx, &self.blog_posts),
            use_blog_categories(fetcher, ctx, &self.blog_categories),
        );
    }
}
