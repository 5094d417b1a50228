// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Loader and hook tests
//!
//! - Loading on every key change, exactly one terminal state
//! - Stale responses never overwrite newer state
//! - Empty slug skips the request
//! - Not-found distinct from fetch failure

use std::sync::{Arc, Mutex};

use cacao_core::cms::{ContentFetcher, MockCmsTransport};
use cacao_core::loader::{
    use_blog_post, use_footer, use_header, use_service, CallbackHandler, EventHandler, LoadState,
    Loader, LoaderEvent, SiteHooks,
};
use cacao_core::LocaleContext;
use serde_json::json;

type Fetcher = ContentFetcher<Arc<MockCmsTransport>>;

fn fetcher() -> (Arc<MockCmsTransport>, Fetcher) {
    let mock = Arc::new(MockCmsTransport::new());
    let fetcher = ContentFetcher::new(Arc::clone(&mock));
    (mock, fetcher)
}

fn recorder() -> (Arc<Mutex<Vec<LoaderEvent>>>, Arc<dyn EventHandler>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let handler = CallbackHandler::new(move |event| sink.lock().unwrap().push(event));
    (events, Arc::new(handler))
}

fn header_for(label: &str) -> serde_json::Value {
    json!({"navigation": [{"label": label, "url": "/"}]})
}

fn seed_site(mock: &MockCmsTransport, locale: &str) {
    mock.on("header", locale, header_for(locale))
        .on("footer", locale, json!({"copyright": locale}))
        .on("homepage", locale, json!({"title": locale}))
        .on("services-page", locale, json!({"title": locale}))
        .on("blogs", locale, json!([{"title": locale, "slug": "post"}]))
        .on("blog-categories", locale, json!([]));
}

#[tokio::test]
async fn test_header_hook_loads_data() {
    let (mock, fetcher) = fetcher();
    mock.on("header", "ru", header_for("Главная"));
    let loader = Loader::new();

    let snapshot = use_header(&fetcher, &LocaleContext::new("ru"), &loader).await;

    assert!(!snapshot.is_loading);
    assert!(snapshot.error.is_none());
    assert_eq!(snapshot.data.unwrap().navigation[0].label, "Главная");
}

#[tokio::test]
async fn test_fetch_failure_sets_message() {
    let (mock, fetcher) = fetcher();
    mock.fail("footer", 500);
    let loader = Loader::new();

    let snapshot = use_footer(&fetcher, &LocaleContext::new("ru"), &loader).await;

    assert!(!snapshot.is_loading);
    assert!(snapshot.data.is_none());
    assert_eq!(
        snapshot.error_message().as_deref(),
        Some("Failed to load footer")
    );
}

#[tokio::test]
async fn test_empty_slug_skips_request() {
    let (mock, fetcher) = fetcher();
    let loader = Loader::new();
    let ctx = LocaleContext::new("en");

    let missing = use_blog_post(&fetcher, &ctx, None, &loader).await;
    let blank = use_blog_post(&fetcher, &ctx, Some(""), &loader).await;

    for snapshot in [missing, blank] {
        assert!(!snapshot.is_loading);
        assert!(snapshot.data.is_none());
        assert!(snapshot.error.is_none());
    }
    assert_eq!(mock.request_count(), 0);
    assert_eq!(loader.state(), LoadState::Idle);
}

#[tokio::test]
async fn test_null_lookup_is_not_found() {
    let (mock, fetcher) = fetcher();
    mock.on_slug("services", "en", "ghost", json!([]));
    let loader = Loader::new();

    let snapshot = use_service(&fetcher, &LocaleContext::new("en"), Some("ghost"), &loader).await;

    assert!(snapshot.data.is_none());
    let error = snapshot.error.unwrap();
    assert!(error.is_not_found());
    assert_eq!(error.to_string(), "No service found");
}

#[tokio::test]
async fn test_slug_change_reloads() {
    let (mock, fetcher) = fetcher();
    mock.on_slug("blogs", "en", "a", json!([{"title": "A", "slug": "a"}]))
        .on_slug("blogs", "en", "b", json!([{"title": "B", "slug": "b"}]));
    let loader = Loader::new();
    let ctx = LocaleContext::new("en");

    use_blog_post(&fetcher, &ctx, Some("a"), &loader).await;
    let snapshot = use_blog_post(&fetcher, &ctx, Some("b"), &loader).await;

    assert_eq!(snapshot.data.unwrap().title, "B");
    assert_eq!(mock.request_count(), 2);
}

#[tokio::test]
async fn test_loading_visible_while_in_flight() {
    let (mock, fetcher) = fetcher();
    let gate = mock.on_gated("header", "ru", header_for("ru"));
    let loader = Loader::new();
    let ctx = LocaleContext::new("ru");

    let observed = Arc::new(Mutex::new(None));
    let seen = Arc::clone(&observed);
    let observer = loader.clone();

    tokio::join!(use_header(&fetcher, &ctx, &loader), async move {
        tokio::task::yield_now().await;
        *seen.lock().unwrap() = Some(observer.snapshot().is_loading);
        gate.notify_one();
    });

    assert_eq!(*observed.lock().unwrap(), Some(true));
    assert!(!loader.snapshot().is_loading);
}

#[tokio::test]
async fn test_late_response_for_old_locale_is_discarded() {
    let (mock, fetcher) = fetcher();
    let slow_gate = mock.on_gated("header", "ru", header_for("ru"));
    mock.on("header", "en", header_for("en"));

    let (events, handler) = recorder();
    let loader = Loader::with_events(handler);
    let ru = LocaleContext::new("ru");
    let en = LocaleContext::new("en");

    tokio::join!(use_header(&fetcher, &ru, &loader), async {
        tokio::task::yield_now().await;
        use_header(&fetcher, &en, &loader).await;
        slow_gate.notify_one();
    });

    let snapshot = loader.snapshot();
    assert_eq!(snapshot.data.unwrap().navigation[0].label, "en");
    assert!(snapshot.error.is_none());

    let events = events.lock().unwrap();
    let discarded: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            LoaderEvent::Discarded { key } => Some(key.locale.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(discarded, vec!["ru".to_string()]);
}

#[tokio::test]
async fn test_locale_switch_reloads_every_hook_once() {
    let (mock, fetcher) = fetcher();
    seed_site(&mock, "ru");
    seed_site(&mock, "en");

    let (events, handler) = recorder();
    let hooks = SiteHooks::with_events(handler);

    hooks.switch_locale(&fetcher, &LocaleContext::new("ru")).await;
    events.lock().unwrap().clear();

    hooks.switch_locale(&fetcher, &LocaleContext::new("en")).await;

    let events = events.lock().unwrap();
    let loading = events
        .iter()
        .filter(|e| matches!(e, LoaderEvent::Loading { .. }))
        .count();
    let settled = events
        .iter()
        .filter(|e| matches!(e, LoaderEvent::Loaded { .. } | LoaderEvent::Failed { .. }))
        .count();
    assert_eq!(loading, 6);
    assert_eq!(settled, 6);

    assert!(events.iter().all(|e| match e {
        LoaderEvent::Loading { key } | LoaderEvent::Loaded { key } => key.locale == "en",
        _ => false,
    }));

    assert_eq!(hooks.homepage.snapshot().data.unwrap().title, "en");
    assert_eq!(
        hooks.blog_posts.snapshot().data.unwrap()[0].title,
        "en".to_string()
    );
}

#[tokio::test]
async fn test_locale_switch_requests_carry_new_locale() {
    let (mock, fetcher) = fetcher();
    seed_site(&mock, "en");
    let hooks = SiteHooks::new();

    hooks.switch_locale(&fetcher, &LocaleContext::new("en")).await;

    let requests = mock.requests();
    assert_eq!(requests.len(), 6);
    assert!(requests.iter().all(|r| r.locale() == Some("en")));
}

#[tokio::test]
async fn test_section_failure_is_isolated() {
    let (mock, fetcher) = fetcher();
    seed_site(&mock, "ru");
    mock.fail("footer", 502);
    let hooks = SiteHooks::new();

    hooks.switch_locale(&fetcher, &LocaleContext::new("ru")).await;

    assert!(hooks.footer.snapshot().error.is_some());
    assert!(hooks.header.snapshot().data.is_some());
    assert!(hooks.homepage.snapshot().data.is_some());
}
