// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Cacao Core Library
//!
//! Locale-aware content layer for the Cacao chocolate studio website.
//! Pages get their editorial content from a headless CMS through:
//! - **Locale resolution**: cookie on the server, persisted preference on the client
//! - **Content fetchers**: one CMS request per content type, parameterized by locale
//! - **Loaders**: per-section `{data, is_loading, error}` state with stale-response guard
//! - **Blocks renderer**: CMS rich-text blocks to HTML

pub mod blocks;
pub mod cms;
pub mod error;
pub mod icons;
pub mod loader;
pub mod locale;
pub mod payload;

pub use blocks::{escape_html, render_blocks};
#[cfg(feature = "http")]
pub use cms::HttpCmsTransport;
pub use cms::{
    BlogCategory, BlogPost, CmsConfig, CmsRequest, CmsTransport, ContentFetcher, ContentKind,
    FetchError, Footer, Header, HomePage, MockCmsTransport, MockReply, Service, ServicesPage,
};
pub use error::CacaoError;
pub use icons::Icon;
pub use loader::{
    ContentKey, EventHandler, LoadError, LoadSnapshot, LoadState, Loader, LoaderEvent, SiteHooks,
};
pub use locale::{
    locale_from_cookie_header, Locale, LocaleContext, LocaleSession, MemoryPreferenceStore,
    PreferenceStore, DEFAULT_LOCALE, LOCALE_COOKIE, LOCALE_STORAGE_KEY,
};
pub use payload::{PagePayload, SectionPayload};
