// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Loader state
//!
//! Each `begin` bumps the loader's request generation and hands out a
//! `Ticket`. `finish` commits only when the ticket's generation is still
//! the latest, so a slow response for an old key can never overwrite the
//! state of a newer one. Stale responses are dropped on arrival; in-flight
//! requests are not cancelled.

use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tracing::{debug, warn};

use super::events::{EventHandler, LoaderEvent};
use crate::cms::{ContentKind, FetchError};
use crate::locale::LocaleContext;

/// What a loader is fetching: kind, locale and, for lookups, a slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentKey {
    pub kind: ContentKind,
    pub locale: String,
    pub slug: Option<String>,
}

impl ContentKey {
    /// Key for a singleton record or a whole collection
    pub fn new(kind: ContentKind, ctx: &LocaleContext) -> Self {
        Self {
            kind,
            locale: ctx.locale().to_string(),
            slug: None,
        }
    }

    /// Key for a by-slug lookup; `None` when the slug is missing or blank.
    pub fn by_slug(kind: ContentKind, ctx: &LocaleContext, slug: Option<&str>) -> Option<Self> {
        let slug = slug.map(str::trim).filter(|s| !s.is_empty())?;
        Some(Self {
            kind,
            locale: ctx.locale().to_string(),
            slug: Some(slug.to_string()),
        })
    }

    /// Whether a missing record is an error (by-slug lookups)
    pub fn is_lookup(&self) -> bool {
        self.slug.is_some()
    }

    /// Name used in messages
    pub fn label(&self) -> &'static str {
        if self.kind.is_collection() && self.slug.is_none() {
            self.kind.plural_label()
        } else {
            self.kind.label()
        }
    }
}

/// Why a section has no data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Network or HTTP failure
    #[error("Failed to load {label}")]
    Fetch {
        label: &'static str,
        /// Underlying fetch error, for logs
        reason: String,
    },

    /// The request succeeded but no record matched
    #[error("No {label} found")]
    NotFound { label: &'static str },
}

impl LoadError {
    /// Whether this is a not-found rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }
}

/// State of one loader
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Key was empty; nothing requested
    Idle,
    /// Request in flight
    Loading,
    /// Latest request succeeded; `None` when a singleton is absent in the CMS
    Loaded(Option<T>),
    /// Latest request failed or found nothing
    Failed(LoadError),
}

/// `{data, is_loading, error}` view of a loader for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct LoadSnapshot<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<LoadError>,
}

impl<T> From<LoadState<T>> for LoadSnapshot<T> {
    fn from(state: LoadState<T>) -> Self {
        match state {
            LoadState::Idle => Self {
                data: None,
                is_loading: false,
                error: None,
            },
            LoadState::Loading => Self {
                data: None,
                is_loading: true,
                error: None,
            },
            LoadState::Loaded(data) => Self {
                data,
                is_loading: false,
                error: None,
            },
            LoadState::Failed(error) => Self {
                data: None,
                is_loading: false,
                error: Some(error),
            },
        }
    }
}

impl<T> LoadSnapshot<T> {
    /// Human-readable error, if any
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

/// Proof of a started request
#[derive(Debug, Clone)]
pub struct Ticket {
    generation: u64,
    key: ContentKey,
}

impl Ticket {
    /// Key the request was started for
    pub fn key(&self) -> &ContentKey {
        &self.key
    }
}

struct Inner<T> {
    generation: u64,
    key: Option<ContentKey>,
    state: LoadState<T>,
}

/// State container behind one page section.
///
/// Cloning shares the state.
pub struct Loader<T> {
    inner: Arc<Mutex<Inner<T>>>,
    events: Option<Arc<dyn EventHandler>>,
}

impl<T> Clone for Loader<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            events: self.events.clone(),
        }
    }
}

impl<T> Default for Loader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Loader<T> {
    /// Creates a loader in the `Loading` state
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                generation: 0,
                key: None,
                state: LoadState::Loading,
            })),
            events: None,
        }
    }

    /// Creates a loader reporting transitions to `handler`
    pub fn with_events(handler: Arc<dyn EventHandler>) -> Self {
        Self {
            events: Some(handler),
            ..Self::new()
        }
    }

    /// Key of the latest request
    pub fn key(&self) -> Option<ContentKey> {
        self.inner.lock().key.clone()
    }

    /// Starts a request for `key`.
    ///
    /// Prior data is discarded. Any request still in flight becomes stale.
    /// An empty key settles the loader as `Idle` and returns no ticket.
    pub fn begin(&self, key: Option<ContentKey>) -> Option<Ticket> {
        let (ticket, event) = {
            let mut inner = self.inner.lock();
            inner.generation += 1;
            inner.key = key.clone();

            match key {
                Some(key) => {
                    inner.state = LoadState::Loading;
                    let ticket = Ticket {
                        generation: inner.generation,
                        key: key.clone(),
                    };
                    (Some(ticket), LoaderEvent::Loading { key })
                }
                None => {
                    inner.state = LoadState::Idle;
                    (None, LoaderEvent::Skipped)
                }
            }
        };

        self.emit(event);
        ticket
    }

    /// Commits a fetch result if `ticket` is still the latest request.
    ///
    /// Returns whether the result was committed.
    pub fn finish(&self, ticket: Ticket, result: Result<Option<T>, FetchError>) -> bool {
        let label = ticket.key.label();

        let event = {
            let mut inner = self.inner.lock();
            if inner.generation != ticket.generation {
                debug!(key = ?ticket.key, "discarding stale response");
                LoaderEvent::Discarded { key: ticket.key }
            } else {
                let state = match result {
                    Ok(Some(data)) => LoadState::Loaded(Some(data)),
                    Ok(None) if ticket.key.is_lookup() => {
                        LoadState::Failed(LoadError::NotFound { label })
                    }
                    Ok(None) => LoadState::Loaded(None),
                    Err(e) => {
                        warn!(key = ?ticket.key, error = %e, "content fetch failed");
                        LoadState::Failed(LoadError::Fetch {
                            label,
                            reason: e.to_string(),
                        })
                    }
                };

                let event = match &state {
                    LoadState::Failed(error) => LoaderEvent::Failed {
                        key: ticket.key,
                        error: error.clone(),
                    },
                    _ => LoaderEvent::Loaded { key: ticket.key },
                };
                inner.state = state;
                event
            }
        };

        let committed = !matches!(event, LoaderEvent::Discarded { .. });
        self.emit(event);
        committed
    }

    fn emit(&self, event: LoaderEvent) {
        if let Some(handler) = &self.events {
            handler.on_event(event);
        }
    }
}

impl<T: Clone> Loader<T> {
    /// Current state
    pub fn state(&self) -> LoadState<T> {
        self.inner.lock().state.clone()
    }

    /// Current `{data, is_loading, error}` view
    pub fn snapshot(&self) -> LoadSnapshot<T> {
        self.state().into()
    }

    /// Runs one request for `key` through `fetch` and returns the settled view.
    ///
    /// With an empty key `fetch` is never called. If a newer request starts
    /// before this one completes, the returned view is the newer state.
    pub async fn load<F, Fut>(&self, key: Option<ContentKey>, fetch: F) -> LoadSnapshot<T>
    where
        F: FnOnce(ContentKey) -> Fut,
        Fut: Future<Output = Result<Option<T>, FetchError>>,
    {
        if let Some(ticket) = self.begin(key) {
            let result = fetch(ticket.key().clone()).await;
            self.finish(ticket, result);
        }
        self.snapshot()
    }
}
