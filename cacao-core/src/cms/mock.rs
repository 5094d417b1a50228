// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mock CMS transport
//!
//! In-memory transport for tests and local development. Records every
//! request and answers from scripted routes. Gated replies hold the
//! response until released, which lets tests decide completion order.

use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::Notify;

use super::transport::{CmsRequest, CmsTransport, FetchError};

/// Scripted answer for a route
#[derive(Debug, Clone)]
pub enum MockReply {
    /// 200 with this JSON body
    Json(Value),
    /// Non-2xx status
    Status(u16),
    /// Transport failure
    Error(String),
    /// 200 with this body once `gate` is notified
    Gated { gate: Arc<Notify>, body: Value },
}

#[derive(Debug, Clone)]
struct Route {
    path: String,
    params: Vec<(String, String)>,
    reply: MockReply,
}

impl Route {
    fn matches(&self, request: &CmsRequest) -> bool {
        self.path == request.path
            && self
                .params
                .iter()
                .all(|(k, v)| request.param(k) == Some(v.as_str()))
    }
}

/// Mock transport for testing.
///
/// Unmatched requests answer with HTTP 404. When several routes match, the
/// most recently added one wins.
#[derive(Debug, Default)]
pub struct MockCmsTransport {
    routes: Mutex<Vec<Route>>,
    requests: Mutex<Vec<CmsRequest>>,
}

impl MockCmsTransport {
    /// Creates a transport with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `path` for `locale` with `{"data": data}`.
    pub fn on(&self, path: &str, locale: &str, data: Value) -> &Self {
        self.route(
            path,
            &[("locale", locale)],
            MockReply::Json(serde_json::json!({ "data": data })),
        )
    }

    /// Answers a by-slug lookup on `path` with `{"data": data}`.
    pub fn on_slug(&self, path: &str, locale: &str, slug: &str, data: Value) -> &Self {
        self.route(
            path,
            &[("locale", locale), ("filters[slug][$eq]", slug)],
            MockReply::Json(serde_json::json!({ "data": data })),
        )
    }

    /// Answers `path` with a raw body regardless of parameters.
    pub fn on_raw(&self, path: &str, body: Value) -> &Self {
        self.route(path, &[], MockReply::Json(body))
    }

    /// Answers `path` with a non-2xx status regardless of parameters.
    pub fn fail(&self, path: &str, status: u16) -> &Self {
        self.route(path, &[], MockReply::Status(status))
    }

    /// Answers `path` for `locale` only after the returned gate is notified.
    pub fn on_gated(&self, path: &str, locale: &str, data: Value) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.route(
            path,
            &[("locale", locale)],
            MockReply::Gated {
                gate: Arc::clone(&gate),
                body: serde_json::json!({ "data": data }),
            },
        );
        gate
    }

    /// Adds a route matching `path` and every listed parameter.
    pub fn route(&self, path: &str, params: &[(&str, &str)], reply: MockReply) -> &Self {
        self.routes.lock().push(Route {
            path: path.to_string(),
            params: params
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            reply,
        });
        self
    }

    /// All requests issued so far, oldest first.
    pub fn requests(&self) -> Vec<CmsRequest> {
        self.requests.lock().clone()
    }

    /// Number of requests issued so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Most recent request, if any.
    pub fn last_request(&self) -> Option<CmsRequest> {
        self.requests.lock().last().cloned()
    }

    fn lookup(&self, request: &CmsRequest) -> MockReply {
        self.routes
            .lock()
            .iter()
            .rev()
            .find(|route| route.matches(request))
            .map(|route| route.reply.clone())
            .unwrap_or(MockReply::Status(404))
    }
}

impl CmsTransport for MockCmsTransport {
    fn get(&self, request: &CmsRequest) -> impl Future<Output = Result<Value, FetchError>> + Send {
        self.requests.lock().push(request.clone());
        let reply = self.lookup(request);

        async move {
            match reply {
                MockReply::Json(body) => Ok(body),
                MockReply::Status(status) => Err(FetchError::HttpError(status)),
                MockReply::Error(message) => Err(FetchError::Transport(message)),
                MockReply::Gated { gate, body } => {
                    gate.notified().await;
                    Ok(body)
                }
            }
        }
    }
}
