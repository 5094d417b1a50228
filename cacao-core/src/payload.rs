// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Server-to-client page payloads
//!
//! The server render step settles every loader of a page and serializes
//! the outcome. The client step deserializes it, hydrates its locale
//! session from the shipped locale list and renders without refetching.

use serde::{Deserialize, Serialize};

use crate::cms::{Footer, Header};
use crate::loader::LoadSnapshot;
use crate::locale::{Locale, LocaleSession, PreferenceStore};

/// Settled outcome of one page section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionPayload<T> {
    /// Content to render
    Ready { data: T },
    /// Nothing to render (absent in the CMS, or never requested)
    Omitted,
    /// By-slug lookup matched nothing
    NotFound { message: String },
    /// Fetch failed; render an error placeholder
    Error { message: String },
}

impl<T> SectionPayload<T> {
    /// Data, if ready
    pub fn data(&self) -> Option<&T> {
        match self {
            SectionPayload::Ready { data } => Some(data),
            _ => None,
        }
    }

    /// Whether this section is a not-found
    pub fn is_not_found(&self) -> bool {
        matches!(self, SectionPayload::NotFound { .. })
    }
}

impl<T> From<LoadSnapshot<T>> for SectionPayload<T> {
    fn from(snapshot: LoadSnapshot<T>) -> Self {
        match (snapshot.data, snapshot.error) {
            (_, Some(error)) if error.is_not_found() => SectionPayload::NotFound {
                message: error.to_string(),
            },
            (_, Some(error)) => SectionPayload::Error {
                message: error.to_string(),
            },
            (Some(data), None) => SectionPayload::Ready { data },
            (None, None) => SectionPayload::Omitted,
        }
    }
}

/// Everything the client step needs to render one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagePayload<P> {
    /// Locale the page was rendered in
    pub locale: String,
    /// Locales the CMS serves
    pub locales: Vec<Locale>,
    pub header: SectionPayload<Header>,
    pub footer: SectionPayload<Footer>,
    /// Page-specific section
    pub page: SectionPayload<P>,
}

impl<P> PagePayload<P> {
    /// Hydrates a client session from the shipped locale list
    pub fn hydrate_session<S: PreferenceStore>(&self, session: &mut LocaleSession<S>) {
        session.hydrate(self.locales.clone());
    }
}

impl<P: Serialize> PagePayload<P> {
    /// Serializes for embedding in the page
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<P: for<'de> Deserialize<'de>> PagePayload<P> {
    /// Parses a payload embedded by the server step
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
