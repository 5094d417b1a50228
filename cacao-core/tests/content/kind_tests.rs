// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for content kinds

use cacao_core::cms::{ContentKind, Populate};

const ALL_KINDS: [ContentKind; 7] = [
    ContentKind::Header,
    ContentKind::Footer,
    ContentKind::HomePage,
    ContentKind::ServicesPage,
    ContentKind::Service,
    ContentKind::BlogPost,
    ContentKind::BlogCategory,
];

#[test]
fn test_every_request_embeds_locale() {
    for kind in ALL_KINDS {
        for locale in ["ru", "en"] {
            let request = kind.request(locale);
            assert_eq!(request.locale(), Some(locale), "{kind}");
            assert_eq!(request.path, kind.collection());
        }
    }
}

#[test]
fn test_every_kind_populates_relations() {
    for kind in ALL_KINDS {
        assert_ne!(kind.populate(), Populate::None, "{kind}");
        assert!(!kind.populate().params().is_empty());
    }
}

#[test]
fn test_collections() {
    assert!(ContentKind::BlogPost.is_collection());
    assert!(ContentKind::Service.is_collection());
    assert!(!ContentKind::Header.is_collection());
    assert!(!ContentKind::HomePage.is_collection());
}

#[test]
fn test_populate_all() {
    assert_eq!(
        Populate::All.params(),
        vec![("populate".to_string(), "*".to_string())]
    );
    assert!(Populate::None.params().is_empty());
}
