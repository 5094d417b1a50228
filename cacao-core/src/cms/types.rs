// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content record definitions
//!
//! Typed views of the records the CMS returns. The CMS owns the schema, so
//! every record tolerates `null` in place of any field and keeps unknown
//! fields in `extra`. Rich-text fields stay raw JSON for the blocks renderer.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Treats an explicit `null` like a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Uploaded media file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    /// Public URL (absolute or relative to the CMS)
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
    /// Alt text
    #[serde(default)]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Navigation or call-to-action link
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    #[serde(default, deserialize_with = "nullable")]
    pub label: String,
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
    /// Icon key (see `Icon::from_key`)
    #[serde(default)]
    pub icon: Option<String>,
}

/// Link to a social profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    /// Platform key, also used as icon key
    #[serde(default, deserialize_with = "nullable")]
    pub platform: String,
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
}

/// Site header
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub logo: Option<Media>,
    #[serde(default, deserialize_with = "nullable")]
    pub navigation: Vec<NavLink>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Column of footer links
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterColumn {
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub links: Vec<NavLink>,
}

/// Site footer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub logo: Option<Media>,
    /// Rich text
    #[serde(default)]
    pub description: Value,
    #[serde(default, deserialize_with = "nullable")]
    pub columns: Vec<FooterColumn>,
    #[serde(default, deserialize_with = "nullable")]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Hero section shared by landing pages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Rich text
    #[serde(default)]
    pub description: Value,
    #[serde(default)]
    pub image: Option<Media>,
    #[serde(default)]
    pub cta: Option<NavLink>,
}

/// Customer testimonial
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(default, deserialize_with = "nullable")]
    pub author: String,
    #[serde(default)]
    pub role: Option<String>,
    /// Rich text
    #[serde(default)]
    pub quote: Value,
    #[serde(default)]
    pub avatar: Option<Media>,
}

/// Question and answer pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    #[serde(default, deserialize_with = "nullable")]
    pub question: String,
    /// Rich text
    #[serde(default)]
    pub answer: Value,
}

/// Homepage content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default)]
    pub hero: Option<Hero>,
    #[serde(default, deserialize_with = "nullable")]
    pub testimonials: Vec<Testimonial>,
    #[serde(default, deserialize_with = "nullable")]
    pub faq: Vec<FaqItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A service offered by the studio (workshops, custom orders, catering)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub slug: String,
    #[serde(default)]
    pub summary: Option<String>,
    /// Rich text
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub image: Option<Media>,
    /// Icon key (see `Icon::from_key`)
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub faq: Vec<FaqItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Services listing page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesPage {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default)]
    pub hero: Option<Hero>,
    #[serde(default, deserialize_with = "nullable")]
    pub services: Vec<Service>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Blog category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogCategory {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub slug: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Blog post
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Rich text
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub cover: Option<Media>,
    #[serde(default, deserialize_with = "nullable")]
    pub categories: Vec<BlogCategory>,
    /// ISO 8601 publication timestamp
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_relations_become_empty() {
        let header: Header = serde_json::from_value(json!({
            "id": 3,
            "logo": null,
            "navigation": null
        }))
        .unwrap();

        assert_eq!(header.id, Some(3));
        assert!(header.logo.is_none());
        assert!(header.navigation.is_empty());
    }

    #[test]
    fn test_unknown_fields_kept_in_extra() {
        let post: BlogPost = serde_json::from_value(json!({
            "title": "Tempering",
            "slug": "tempering",
            "readingTime": 7
        }))
        .unwrap();

        assert_eq!(post.slug, "tempering");
        assert_eq!(post.extra.get("readingTime"), Some(&json!(7)));
    }

    #[test]
    fn test_camel_case_fields() {
        let media: Media = serde_json::from_value(json!({
            "url": "/uploads/bonbon.jpg",
            "alternativeText": "Bonbons"
        }))
        .unwrap();
        assert_eq!(media.alternative_text.as_deref(), Some("Bonbons"));
    }
}
