// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Locale resolution
//!
//! The set of locales is owned by the CMS. Two render targets pick the
//! active one:
//! - **Server**: the `NEXT_LOCALE` cookie of the inbound request, else the default
//! - **Client**: a `LocaleSession` that starts on the default and switches to the
//!   stored preference (or the CMS default) once the locale list has loaded
//!
//! Loaders never read the active locale from global state; they receive a
//! `LocaleContext` value.

mod cookie;
mod session;
mod store;

use serde::{Deserialize, Serialize};

pub use cookie::{locale_cookie, locale_from_cookie_header, locale_from_cookie_header_or};
pub use session::{LocaleError, LocaleSession};
pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceError, PreferenceStore};

/// Locale used until the CMS locale list is known
pub const DEFAULT_LOCALE: &str = "ru";

/// Cookie carrying the locale preference to the server
pub const LOCALE_COOKIE: &str = "NEXT_LOCALE";

/// Client-side storage key of the locale preference
pub const LOCALE_STORAGE_KEY: &str = "preferred-locale";

/// A locale configured in the CMS
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    #[serde(default)]
    pub id: u64,
    /// Code such as "ru" or "en"
    pub code: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Whether the CMS marks this as its default locale
    #[serde(default)]
    pub is_default: bool,
}

/// The locale a fetch runs in, passed explicitly to every loader
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleContext {
    locale: String,
}

impl LocaleContext {
    /// Creates a context for `locale`
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }

    /// The locale code
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

/// Picks the CMS default from a locale list, else the first entry.
pub fn cms_default(locales: &[Locale]) -> Option<&Locale> {
    locales
        .iter()
        .find(|l| l.is_default)
        .or_else(|| locales.first())
}

/// Whether `code` is one of `locales`
pub fn is_supported(locales: &[Locale], code: &str) -> bool {
    locales.iter().any(|l| l.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_locale_deserializes_cms_shape() {
        let locale: Locale = serde_json::from_value(json!({
            "id": 2,
            "name": "English (en)",
            "code": "en",
            "isDefault": false,
            "createdAt": "2024-01-01T00:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(locale.code, "en");
        assert!(!locale.is_default);
    }

    #[test]
    fn test_cms_default_prefers_flag() {
        let locales = vec![
            Locale {
                id: 1,
                code: "en".into(),
                name: "English".into(),
                is_default: false,
            },
            Locale {
                id: 2,
                code: "ru".into(),
                name: "Русский".into(),
                is_default: true,
            },
        ];
        assert_eq!(cms_default(&locales).map(|l| l.code.as_str()), Some("ru"));
        assert_eq!(cms_default(&locales[..1]).map(|l| l.code.as_str()), Some("en"));
        assert!(cms_default(&[]).is_none());
    }

    #[test]
    fn test_default_context() {
        assert_eq!(LocaleContext::default().locale(), DEFAULT_LOCALE);
    }
}
