// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! CMS content access
//!
//! Everything editorial on the site (header, footer, homepage, services,
//! blog) is owned by a headless CMS and requested per locale:
//! - `ContentKind` names the collection and the relations to populate
//! - `CmsTransport` performs exactly one request and returns the JSON body
//! - `ContentFetcher` unwraps the `data` envelope into typed records
//!
//! Fetchers never retry and never cache. Errors propagate to the caller,
//! which for views is the loader layer.

mod config;
mod fetcher;
mod kind;
mod mock;
mod transport;
mod types;

pub use config::{CmsConfig, ConfigError};
pub use fetcher::ContentFetcher;
pub use kind::{ContentKind, Populate};
pub use mock::{MockCmsTransport, MockReply};
#[cfg(feature = "http")]
pub use transport::HttpCmsTransport;
pub use transport::{CmsRequest, CmsTransport, FetchError};
pub use types::{
    BlogCategory, BlogPost, FaqItem, Footer, FooterColumn, Header, Hero, HomePage, Media,
    NavLink, Service, ServicesPage, SocialLink, Testimonial,
};
