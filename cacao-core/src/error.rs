// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error Types
//!
//! Unified error type for callers that drive several layers at once.

use thiserror::Error;

use crate::cms::{ConfigError, FetchError};
use crate::loader::LoadError;
use crate::locale::{LocaleError, PreferenceError};

/// Unified error type for Cacao operations.
#[derive(Error, Debug)]
pub enum CacaoError {
    /// CMS request failed.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Loader settled with an error.
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Locale switch rejected.
    #[error("locale error: {0}")]
    Locale(#[from] LocaleError),

    /// Preference store failed.
    #[error("preference error: {0}")]
    Preference(#[from] PreferenceError),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
