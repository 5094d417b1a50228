// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP server: the server render step
//!
//! Each page request resolves its locale from the `NEXT_LOCALE` cookie,
//! settles the header, footer and page loaders concurrently, and renders.
//! Nothing is cached between requests.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use cacao_core::cms::{CmsTransport, ContentFetcher, ContentKind};
use cacao_core::loader::{
    use_blog_categories, use_blog_post, use_blog_posts, use_footer, use_header, use_homepage,
    use_service, use_services_page, ContentKey, LoadSnapshot, Loader,
};
use cacao_core::locale::{
    locale_cookie, locale_from_cookie_header_or, Locale, LocaleContext, DEFAULT_LOCALE,
};
use cacao_core::{BlogPost, HomePage, PagePayload, SectionPayload};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::static_content::{school_preview, shop_preview};
use crate::views;

/// Longest accepted locale code
const MAX_LOCALE_LEN: usize = 16;

/// Shared state for HTTP handlers.
pub struct AppState<T> {
    pub fetcher: Arc<ContentFetcher<T>>,
    /// Locale for requests without a locale cookie
    pub default_locale: Arc<str>,
    pub start_time: Instant,
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            default_locale: Arc::clone(&self.default_locale),
            start_time: self.start_time,
        }
    }
}

impl<T: CmsTransport> AppState<T> {
    /// Creates state over a CMS transport
    pub fn new(transport: T) -> Self {
        Self {
            fetcher: Arc::new(ContentFetcher::new(transport)),
            default_locale: Arc::from(DEFAULT_LOCALE),
            start_time: Instant::now(),
        }
    }

    /// Overrides the cookie-less fallback locale
    pub fn with_default_locale(mut self, code: &str) -> Self {
        self.default_locale = Arc::from(code);
        self
    }

    fn fetcher(&self) -> &ContentFetcher<T> {
        &self.fetcher
    }
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
}

#[derive(Debug, Deserialize)]
pub struct BlogQuery {
    /// Category slug filter
    pub category: Option<String>,
}

/// Creates the router with every page, the locale switch and the payload API.
pub fn create_router<T: CmsTransport + 'static>(state: AppState<T>) -> Router {
    Router::new()
        .route("/", get(home_handler::<T>))
        .route("/blog", get(blog_handler::<T>))
        .route("/blog/:slug", get(blog_post_handler::<T>))
        .route("/services", get(services_handler::<T>))
        .route("/services/:slug", get(service_handler::<T>))
        .route("/shop", get(shop_handler::<T>))
        .route("/school", get(school_handler::<T>))
        .route("/locale/:code", post(set_locale_handler))
        .route("/api/payload/home", get(home_payload_handler::<T>))
        .route("/health", get(health_handler::<T>))
        .with_state(state)
}

/// Locale context for a request, from its `Cookie` header.
fn request_context(headers: &HeaderMap, default_locale: &str) -> LocaleContext {
    let cookie = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok());
    LocaleContext::new(locale_from_cookie_header_or(cookie, default_locale))
}

/// CMS locale list; a failure leaves the page without a switcher.
async fn load_locales<T: CmsTransport>(fetcher: &ContentFetcher<T>) -> Vec<Locale> {
    match fetcher.locales().await {
        Ok(locales) => locales,
        Err(e) => {
            warn!(error = %e, "failed to load locales");
            Vec::new()
        }
    }
}

/// Settles header, footer, locale list and `page` concurrently.
async fn assemble<T, P, Fut>(
    state: &AppState<T>,
    ctx: &LocaleContext,
    page: Fut,
) -> PagePayload<P>
where
    T: CmsTransport,
    Fut: Future<Output = LoadSnapshot<P>>,
{
    let fetcher = state.fetcher();
    let header_loader = Loader::new();
    let footer_loader = Loader::new();

    let (header, footer, locales, page) = tokio::join!(
        use_header(fetcher, ctx, &header_loader),
        use_footer(fetcher, ctx, &footer_loader),
        load_locales(fetcher),
        page,
    );

    PagePayload {
        locale: ctx.locale().to_string(),
        locales,
        header: header.into(),
        footer: footer.into(),
        page: page.into(),
    }
}

/// Renders a payload into a full page. A not-found page section gives 404.
fn render_page<P>(payload: &PagePayload<P>, body: impl FnOnce(&P) -> String) -> Response {
    let status = if payload.page.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    let main = views::section(&payload.page, body);
    let html = views::layout(
        &payload.locale,
        &payload.locales,
        &payload.header,
        &payload.footer,
        &main,
    );
    (status, Html(html)).into_response()
}

async fn home_handler<T: CmsTransport>(
    State(state): State<AppState<T>>,
    headers: HeaderMap,
) -> Response {
    let ctx = request_context(&headers, &state.default_locale);
    let loader = Loader::new();
    let payload = assemble(&state, &ctx, use_homepage(state.fetcher(), &ctx, &loader)).await;
    render_page(&payload, views::home)
}

async fn blog_handler<T: CmsTransport>(
    State(state): State<AppState<T>>,
    Query(query): Query<BlogQuery>,
    headers: HeaderMap,
) -> Response {
    let ctx = request_context(&headers, &state.default_locale);
    let fetcher = state.fetcher();
    let posts_loader = Loader::new();
    let categories_loader = Loader::new();

    let posts = async {
        match query.category.as_deref().filter(|c| !c.trim().is_empty()) {
            Some(category) => {
                let key = ContentKey::new(ContentKind::BlogPost, &ctx);
                posts_loader
                    .load(Some(key), |key| async move {
                        fetcher
                            .blog_posts_by_category(&key.locale, category)
                            .await
                            .map(Some)
                    })
                    .await
            }
            None => use_blog_posts(fetcher, &ctx, &posts_loader).await,
        }
    };

    let (payload, categories) = tokio::join!(
        assemble(&state, &ctx, posts),
        use_blog_categories(fetcher, &ctx, &categories_loader),
    );
    let categories: SectionPayload<_> = categories.into();
    render_page(&payload, |posts: &Vec<BlogPost>| {
        views::blog(posts, &categories)
    })
}

async fn blog_post_handler<T: CmsTransport>(
    State(state): State<AppState<T>>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Response {
    let ctx = request_context(&headers, &state.default_locale);
    let loader = Loader::new();
    let page = use_blog_post(state.fetcher(), &ctx, Some(&slug), &loader);
    let payload = assemble(&state, &ctx, page).await;
    render_page(&payload, views::blog_post)
}

async fn services_handler<T: CmsTransport>(
    State(state): State<AppState<T>>,
    headers: HeaderMap,
) -> Response {
    let ctx = request_context(&headers, &state.default_locale);
    let loader = Loader::new();
    let page = use_services_page(state.fetcher(), &ctx, &loader);
    let payload = assemble(&state, &ctx, page).await;
    render_page(&payload, views::services_page)
}

async fn service_handler<T: CmsTransport>(
    State(state): State<AppState<T>>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Response {
    let ctx = request_context(&headers, &state.default_locale);
    let loader = Loader::new();
    let page = use_service(state.fetcher(), &ctx, Some(&slug), &loader);
    let payload = assemble(&state, &ctx, page).await;
    render_page(&payload, views::service)
}

async fn shop_handler<T: CmsTransport>(
    State(state): State<AppState<T>>,
    headers: HeaderMap,
) -> Response {
    let ctx = request_context(&headers, &state.default_locale);
    let preview = shop_preview(ctx.locale());
    let page = async {
        LoadSnapshot {
            data: Some(preview),
            is_loading: false,
            error: None,
        }
    };
    let payload = assemble(&state, &ctx, page).await;
    render_page(&payload, |page| views::preview(page))
}

async fn school_handler<T: CmsTransport>(
    State(state): State<AppState<T>>,
    headers: HeaderMap,
) -> Response {
    let ctx = request_context(&headers, &state.default_locale);
    let preview = school_preview(ctx.locale());
    let page = async {
        LoadSnapshot {
            data: Some(preview),
            is_loading: false,
            error: None,
        }
    };
    let payload = assemble(&state, &ctx, page).await;
    render_page(&payload, |page| views::preview(page))
}

/// Persists the locale choice in the cookie and sends the browser back.
async fn set_locale_handler(Path(code): Path<String>, headers: HeaderMap) -> Response {
    let valid = !code.is_empty()
        && code.len() <= MAX_LOCALE_LEN
        && code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if !valid {
        return (StatusCode::BAD_REQUEST, "Invalid locale").into_response();
    }

    debug!(locale = %code, "locale switched");
    let back = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(referer_path)
        .unwrap_or("/")
        .to_string();

    (
        StatusCode::SEE_OTHER,
        [
            (header::SET_COOKIE, locale_cookie(&code)),
            (header::LOCATION, back),
        ],
    )
        .into_response()
}

/// Path part of a `Referer`, so the redirect never leaves the site.
fn referer_path(referer: &str) -> Option<&str> {
    let path = match referer.split_once("://") {
        Some((_, rest)) => &rest[rest.find('/')?..],
        None => referer,
    };
    // Browsers read `\` as `/`, so `/\host` would leave the site.
    let on_site = path.starts_with('/') && !path.starts_with("//") && !path.contains('\\');
    on_site.then_some(path)
}

/// Home page payload for the client render step.
async fn home_payload_handler<T: CmsTransport>(
    State(state): State<AppState<T>>,
    headers: HeaderMap,
) -> Json<PagePayload<HomePage>> {
    let ctx = request_context(&headers, &state.default_locale);
    let loader = Loader::new();
    let page = use_homepage(state.fetcher(), &ctx, &loader);
    Json(assemble(&state, &ctx, page).await)
}

/// Health check endpoint - always returns 200 if server is running.
async fn health_handler<T: CmsTransport>(State(state): State<AppState<T>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
