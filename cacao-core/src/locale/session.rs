//! Client-side locale session

use thiserror::Error;
use tracing::{debug, warn};

use super::store::{PreferenceError, PreferenceStore};
use super::{cms_default, is_supported, Locale, LocaleContext, DEFAULT_LOCALE};
use crate::cms::{CmsTransport, ContentFetcher};

/// Active locale of one client session.
///
/// Starts on `DEFAULT_LOCALE`. Once the CMS locale list is known the active
/// code is always one of its members.
pub struct LocaleSession<S: PreferenceStore> {
    current: String,
    available: Vec<Locale>,
    store: S,
}

impl<S: PreferenceStore> LocaleSession<S> {
    /// Creates a session on the default locale
    pub fn new(store: S) -> Self {
        Self {
            current: DEFAULT_LOCALE.to_string(),
            available: Vec::new(),
            store,
        }
    }

    /// Active locale code
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Locales loaded from the CMS (empty until hydrated)
    pub fn available(&self) -> &[Locale] {
        &self.available
    }

    /// Whether the CMS locale list has loaded
    pub fn is_loaded(&self) -> bool {
        !self.available.is_empty()
    }

    /// Context value for loaders
    pub fn context(&self) -> LocaleContext {
        LocaleContext::new(self.current.clone())
    }

    /// Get access to the preference store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Applies a loaded locale list.
    ///
    /// The stored preference wins if the CMS knows it, then the CMS default,
    /// then the first locale. An empty list changes nothing.
    pub fn hydrate(&mut self, locales: Vec<Locale>) -> &str {
        if locales.is_empty() {
            return &self.current;
        }

        let stored = self.store.load().unwrap_or_else(|e| {
            warn!(error = %e, "failed to read stored locale preference");
            None
        });

        let next = stored
            .filter(|code| is_supported(&locales, code))
            .or_else(|| cms_default(&locales).map(|l| l.code.clone()));

        if let Some(code) = next {
            self.current = code;
        }
        self.available = locales;
        debug!(locale = %self.current, "locale session hydrated");
        &self.current
    }

    /// Loads the locale list from the CMS and hydrates.
    ///
    /// On failure the session stays on its current locale; the error is
    /// logged, never returned.
    pub async fn hydrate_from<T: CmsTransport>(&mut self, fetcher: &ContentFetcher<T>) -> &str {
        match fetcher.locales().await {
            Ok(locales) => self.hydrate(locales),
            Err(e) => {
                warn!(error = %e, locale = %self.current, "failed to load CMS locales");
                &self.current
            }
        }
    }

    /// Switches the active locale and persists the preference.
    ///
    /// Once locales have loaded, unknown codes are rejected. If the
    /// preference cannot be saved the active locale is left unchanged.
    pub fn set_locale(&mut self, code: &str) -> Result<(), LocaleError> {
        if self.is_loaded() && !is_supported(&self.available, code) {
            return Err(LocaleError::Unsupported(code.to_string()));
        }

        self.store.save(code)?;
        self.current = code.to_string();
        Ok(())
    }
}

/// Errors from switching locale
#[derive(Debug, Error)]
pub enum LocaleError {
    /// The CMS does not serve this locale
    #[error("unsupported locale: {0}")]
    Unsupported(String),

    /// The preference could not be persisted
    #[error("preference error: {0}")]
    Preference(#[from] PreferenceError),
}
