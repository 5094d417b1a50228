// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content kinds served by the CMS
//!
//! Each kind maps to one REST collection and to the `populate` directive
//! that expands the relations its view needs.

use super::transport::CmsRequest;

/// Relations to expand in a CMS response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Populate {
    /// No expansion
    None,
    /// Expand every first-level relation (`populate=*`)
    All,
    /// Expand the listed relations (`populate[0]=..&populate[1]=..`)
    Fields(&'static [&'static str]),
}

impl Populate {
    /// Query pairs for this directive
    pub fn params(&self) -> Vec<(String, String)> {
        match self {
            Populate::None => Vec::new(),
            Populate::All => vec![("populate".to_string(), "*".to_string())],
            Populate::Fields(fields) => fields
                .iter()
                .enumerate()
                .map(|(i, field)| (format!("populate[{i}]"), (*field).to_string()))
                .collect(),
        }
    }
}

/// Types of content the site requests from the CMS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Site header (logo, navigation)
    Header,
    /// Site footer (columns, socials)
    Footer,
    /// Homepage sections
    HomePage,
    /// Services listing page
    ServicesPage,
    /// Individual service (collection)
    Service,
    /// Blog post (collection)
    BlogPost,
    /// Blog category (collection)
    BlogCategory,
}

impl ContentKind {
    /// REST collection path below `/api/`
    pub fn collection(&self) -> &'static str {
        match self {
            ContentKind::Header => "header",
            ContentKind::Footer => "footer",
            ContentKind::HomePage => "homepage",
            ContentKind::ServicesPage => "services-page",
            ContentKind::Service => "services",
            ContentKind::BlogPost => "blogs",
            ContentKind::BlogCategory => "blog-categories",
        }
    }

    /// Relations each view renders
    pub fn populate(&self) -> Populate {
        match self {
            ContentKind::Header => Populate::Fields(&["logo", "navigation"]),
            ContentKind::Footer => {
                Populate::Fields(&["logo", "columns", "columns.links", "socials"])
            }
            ContentKind::HomePage => Populate::Fields(&[
                "hero",
                "hero.image",
                "hero.cta",
                "testimonials",
                "testimonials.avatar",
                "faq",
            ]),
            ContentKind::ServicesPage => {
                Populate::Fields(&["hero", "hero.image", "services", "services.image"])
            }
            ContentKind::Service => Populate::Fields(&["image", "faq"]),
            ContentKind::BlogPost => Populate::Fields(&["cover", "categories"]),
            ContentKind::BlogCategory => Populate::All,
        }
    }

    /// Whether the kind is a collection (looked up by slug) rather than a singleton
    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            ContentKind::Service | ContentKind::BlogPost | ContentKind::BlogCategory
        )
    }

    /// Human-readable name of one record, used in loader messages
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Header => "header",
            ContentKind::Footer => "footer",
            ContentKind::HomePage => "homepage",
            ContentKind::ServicesPage => "services page",
            ContentKind::Service => "service",
            ContentKind::BlogPost => "blog post",
            ContentKind::BlogCategory => "blog category",
        }
    }

    /// Human-readable name of a whole collection
    pub fn plural_label(&self) -> &'static str {
        match self {
            ContentKind::Service => "services",
            ContentKind::BlogPost => "blog posts",
            ContentKind::BlogCategory => "blog categories",
            other => other.label(),
        }
    }

    /// Base request for this kind in `locale`
    pub fn request(&self, locale: &str) -> CmsRequest {
        let mut request = CmsRequest::new(self.collection()).with("locale", locale);
        for (key, value) in self.populate().params() {
            request = request.with(key, value);
        }
        request
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.collection())
    }
}
