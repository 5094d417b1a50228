// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for CMS configuration

use std::collections::HashMap;
use std::time::Duration;

use cacao_core::cms::{CmsConfig, ConfigError};
use cacao_core::DEFAULT_LOCALE;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = CmsConfig::default();

    assert_eq!(config.base_url, "http://localhost:1337");
    assert!(config.api_token.is_none());
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.proxy_url.is_none());
    assert_eq!(config.default_locale, DEFAULT_LOCALE);
}

#[test]
fn test_config_from_lookup() {
    let config = CmsConfig::from_lookup(lookup(&[
        ("CMS_URL", "https://cms.cacao.studio/"),
        ("CMS_TOKEN", "secret"),
        ("CMS_TIMEOUT_SECS", "5"),
        ("CMS_DEFAULT_LOCALE", "en"),
    ]))
    .unwrap();

    assert_eq!(config.base_url, "https://cms.cacao.studio");
    assert_eq!(config.api_token.as_deref(), Some("secret"));
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.default_locale, "en");
}

#[test]
fn test_empty_token_is_none() {
    let config = CmsConfig::from_lookup(lookup(&[("CMS_TOKEN", "")])).unwrap();
    assert!(config.api_token.is_none());
}

#[test]
fn test_invalid_timeout_rejected() {
    let result = CmsConfig::from_lookup(lookup(&[("CMS_TIMEOUT_SECS", "soon")]));
    assert_eq!(
        result.unwrap_err(),
        ConfigError::InvalidTimeout("soon".to_string())
    );
}

#[test]
fn test_invalid_url_rejected() {
    let result = CmsConfig::from_lookup(lookup(&[("CMS_URL", "not a url")]));
    assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
}

#[test]
fn test_config_builders() {
    let config = CmsConfig::default()
        .with_token("t")
        .with_proxy("socks5://127.0.0.1:9050");

    assert_eq!(config.api_token.as_deref(), Some("t"));
    assert_eq!(config.proxy_url.as_deref(), Some("socks5://127.0.0.1:9050"));
}
