// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Cacao Web
//!
//! Server-rendered pages for the Cacao site: home, blog, services, shop and
//! school previews, plus the locale switch and JSON page payloads.

pub mod config;
pub mod error;
pub mod http;
pub mod static_content;
pub mod views;

pub use config::{ServerConfig, WebConfig, WebConfigError};
pub use error::{ServerError, ServerResult};
pub use http::{create_router, AppState};
