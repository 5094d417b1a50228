// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Data-loading hooks
//!
//! A `Loader` is the state behind one content section of a page. Every key
//! change (locale, or locale and slug) starts a new request; only the most
//! recently started request may commit its result.
//!
//! # Example
//!
//! ```ignore
//! use cacao_core::loader::{use_blog_post, Loader};
//!
//! let loader = Loader::new();
//! let snapshot = use_blog_post(&fetcher, &ctx, Some("ganache"), &loader).await;
//! if snapshot.is_loading { /* placeholder */ }
//! ```

mod events;
mod hooks;
mod state;

pub use events::{CallbackHandler, EventHandler, LoaderEvent};
pub use hooks::{
    use_blog_categories, use_blog_post, use_blog_posts, use_footer, use_header, use_homepage,
    use_service, use_services_page, SiteHooks,
};
pub use state::{ContentKey, LoadError, LoadSnapshot, LoadState, Loader, Ticket};
