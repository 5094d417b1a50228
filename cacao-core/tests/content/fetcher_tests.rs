// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for ContentFetcher
//!
//! - One request per fetch, locale embedded
//! - `data` envelope unwrapped
//! - Errors propagate unchanged

use std::sync::Arc;

use cacao_core::cms::{ContentFetcher, FetchError, MockCmsTransport, MockReply};
use serde_json::json;

fn fetcher() -> (Arc<MockCmsTransport>, ContentFetcher<Arc<MockCmsTransport>>) {
    let mock = Arc::new(MockCmsTransport::new());
    let fetcher = ContentFetcher::new(Arc::clone(&mock));
    (mock, fetcher)
}

#[tokio::test]
async fn test_header_unwraps_envelope() {
    let (mock, fetcher) = fetcher();
    mock.on(
        "header",
        "en",
        json!({
            "id": 1,
            "logo": {"url": "/uploads/logo.svg"},
            "navigation": [{"label": "Blog", "url": "/blog"}]
        }),
    );

    let header = fetcher.header("en").await.unwrap().unwrap();

    assert_eq!(header.logo.unwrap().url, "/uploads/logo.svg");
    assert_eq!(header.navigation[0].label, "Blog");
    assert_eq!(mock.request_count(), 1);
}

#[tokio::test]
async fn test_every_fetcher_sends_locale() {
    let (mock, fetcher) = fetcher();

    for locale in ["ru", "en", "de"] {
        let _ = fetcher.header(locale).await;
        let _ = fetcher.footer(locale).await;
        let _ = fetcher.homepage(locale).await;
        let _ = fetcher.services_page(locale).await;
        let _ = fetcher.services(locale).await;
        let _ = fetcher.service(locale, "truffles").await;
        let _ = fetcher.blog_posts(locale).await;
        let _ = fetcher.blog_post(locale, "tempering").await;
        let _ = fetcher.blog_categories(locale).await;
        let _ = fetcher.blog_posts_by_category(locale, "recipes").await;
    }

    let requests = mock.requests();
    assert_eq!(requests.len(), 30);
    for (i, request) in requests.iter().enumerate() {
        let expected = ["ru", "en", "de"][i / 10];
        assert_eq!(request.locale(), Some(expected), "{}", request.path);
        assert!(
            request.query.iter().any(|(k, _)| k.starts_with("populate")),
            "{} has no populate directive",
            request.path
        );
    }
}

#[tokio::test]
async fn test_null_singleton_is_none() {
    let (mock, fetcher) = fetcher();
    mock.on("footer", "ru", json!(null));

    assert!(fetcher.footer("ru").await.unwrap().is_none());
}

#[tokio::test]
async fn test_service_by_slug_takes_first_match() {
    let (mock, fetcher) = fetcher();
    mock.on_slug(
        "services",
        "ru",
        "workshop",
        json!([
            {"title": "Мастер-класс", "slug": "workshop", "icon": "workshop"},
            {"title": "Duplicate", "slug": "workshop"}
        ]),
    );

    let service = fetcher.service("ru", "workshop").await.unwrap().unwrap();
    assert_eq!(service.title, "Мастер-класс");

    let request = mock.last_request().unwrap();
    assert_eq!(request.param("filters[slug][$eq]"), Some("workshop"));
}

#[tokio::test]
async fn test_by_slug_empty_result_is_none() {
    let (mock, fetcher) = fetcher();
    mock.on_slug("blogs", "en", "missing", json!([]));

    assert!(fetcher.blog_post("en", "missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_blog_posts_sorted_newest_first() {
    let (mock, fetcher) = fetcher();
    mock.on(
        "blogs",
        "en",
        json!([
            {"title": "Bean to bar", "slug": "bean-to-bar", "categories": [{"name": "Craft", "slug": "craft"}]},
            {"title": "Tempering", "slug": "tempering", "categories": null}
        ]),
    );

    let posts = fetcher.blog_posts("en").await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].categories[0].slug, "craft");
    assert!(posts[1].categories.is_empty());
    assert_eq!(
        mock.last_request().unwrap().param("sort[0]"),
        Some("publishedAt:desc")
    );
}

#[tokio::test]
async fn test_posts_by_category_filter() {
    let (mock, fetcher) = fetcher();
    mock.on("blogs", "ru", json!([]));

    let posts = fetcher.blog_posts_by_category("ru", "recipes").await.unwrap();

    assert!(posts.is_empty());
    assert_eq!(
        mock.last_request()
            .unwrap()
            .param("filters[categories][slug][$eq]"),
        Some("recipes")
    );
}

#[tokio::test]
async fn test_http_error_propagates() {
    let (mock, fetcher) = fetcher();
    mock.fail("homepage", 503);

    let result = fetcher.homepage("ru").await;
    assert!(matches!(result, Err(FetchError::HttpError(503))));
}

#[tokio::test]
async fn test_transport_error_propagates() {
    let (mock, fetcher) = fetcher();
    mock.route(
        "services-page",
        &[],
        MockReply::Error("connection reset".into()),
    );

    let result = fetcher.services_page("ru").await;
    assert!(matches!(result, Err(FetchError::Transport(_))));
}

#[tokio::test]
async fn test_missing_envelope_is_error() {
    let (mock, fetcher) = fetcher();
    mock.on_raw("header", json!({"id": 1}));

    assert!(matches!(
        fetcher.header("ru").await,
        Err(FetchError::MissingEnvelope)
    ));
}

#[tokio::test]
async fn test_wrong_shape_is_json_error() {
    let (mock, fetcher) = fetcher();
    mock.on("blog-categories", "ru", json!({"not": "a list"}));

    assert!(matches!(
        fetcher.blog_categories("ru").await,
        Err(FetchError::JsonError(_))
    ));
}

#[tokio::test]
async fn test_locales_bare_array() {
    let (mock, fetcher) = fetcher();
    mock.on_raw(
        "i18n/locales",
        json!([
            {"id": 1, "name": "Russian (ru)", "code": "ru", "isDefault": true},
            {"id": 2, "name": "English (en)", "code": "en", "isDefault": false}
        ]),
    );

    let locales = fetcher.locales().await.unwrap();

    assert_eq!(locales.len(), 2);
    assert!(locales[0].is_default);
    assert_eq!(locales[1].code, "en");
}

#[tokio::test]
async fn test_locales_enveloped_array() {
    let (mock, fetcher) = fetcher();
    mock.on_raw("i18n/locales", json!({"data": [{"code": "en"}]}));

    let locales = fetcher.locales().await.unwrap();
    assert_eq!(locales[0].code, "en");
}
