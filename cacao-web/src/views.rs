// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTML views
//!
//! Plain semantic markup. Every CMS string goes through `escape_html`;
//! rich-text fields go through `render_blocks`. A failed section renders a
//! placeholder in place of its content and the rest of the page still
//! renders.

use std::fmt::Write;

use cacao_core::cms::{FaqItem, Hero, Media, NavLink, Testimonial};
use cacao_core::{
    escape_html, render_blocks, BlogCategory, BlogPost, Footer, Header, HomePage, Icon, Locale,
    SectionPayload, Service, ServicesPage,
};

use crate::static_content::PreviewPage;

/// Wraps `main` in the document shell with header and footer.
pub fn layout(
    locale: &str,
    locales: &[Locale],
    header: &SectionPayload<Header>,
    footer: &SectionPayload<Footer>,
    main: &str,
) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html><html lang=\"{}\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"></head><body>",
        escape_html(locale)
    );
    html.push_str(&section(header, |h| site_header(h, locale, locales)));
    let _ = write!(html, "<main>{main}</main>");
    html.push_str(&section(footer, site_footer));
    html.push_str("</body></html>");
    html
}

/// Renders a settled section, or its placeholder.
pub fn section<T>(payload: &SectionPayload<T>, render: impl FnOnce(&T) -> String) -> String {
    match payload {
        SectionPayload::Ready { data } => render(data),
        SectionPayload::Omitted => String::new(),
        SectionPayload::NotFound { message } => not_found(message),
        SectionPayload::Error { message } => format!(
            "<div class=\"section-error\" role=\"alert\">{}</div>",
            escape_html(message)
        ),
    }
}

/// Body of a 404 page
pub fn not_found(message: &str) -> String {
    format!(
        "<section class=\"not-found\"><h1>404</h1><p>{}</p><a href=\"/\">←</a></section>",
        escape_html(message)
    )
}

fn site_header(header: &Header, locale: &str, locales: &[Locale]) -> String {
    let mut html = String::from("<header class=\"site-header\">");
    if let Some(logo) = &header.logo {
        let _ = write!(html, "<a href=\"/\">{}</a>", image(logo));
    }
    html.push_str("<nav><ul>");
    for link in &header.navigation {
        let _ = write!(html, "<li>{}</li>", nav_link(link));
    }
    html.push_str("</ul></nav>");
    html.push_str(&locale_switcher(locale, locales));
    html.push_str("</header>");
    html
}

/// One form button per CMS locale; the active one is disabled.
fn locale_switcher(current: &str, locales: &[Locale]) -> String {
    if locales.len() < 2 {
        return String::new();
    }
    let mut html = String::from("<div class=\"locale-switcher\">");
    for locale in locales {
        let code = escape_html(&locale.code);
        let label = if locale.name.is_empty() {
            code.to_uppercase()
        } else {
            escape_html(&locale.name)
        };
        let disabled = if locale.code == current { " disabled" } else { "" };
        let _ = write!(
            html,
            "<form method=\"post\" action=\"/locale/{code}\">\
             <button type=\"submit\"{disabled}>{label}</button></form>"
        );
    }
    html.push_str("</div>");
    html
}

fn site_footer(footer: &Footer) -> String {
    let mut html = String::from("<footer class=\"site-footer\">");
    if let Some(logo) = &footer.logo {
        html.push_str(&image(logo));
    }
    let description = render_blocks(&footer.description);
    if !description.is_empty() {
        let _ = write!(html, "<div class=\"footer-description\">{description}</div>");
    }
    for column in &footer.columns {
        let _ = write!(html, "<section><h3>{}</h3><ul>", escape_html(&column.title));
        for link in &column.links {
            let _ = write!(html, "<li>{}</li>", nav_link(link));
        }
        html.push_str("</ul></section>");
    }
    if !footer.socials.is_empty() {
        html.push_str("<ul class=\"socials\">");
        for social in &footer.socials {
            let _ = write!(
                html,
                "<li><a href=\"{}\" aria-label=\"{}\">{}</a></li>",
                escape_html(&social.url),
                escape_html(&social.platform),
                Icon::from_key(&social.platform)
                    .map(icon)
                    .unwrap_or_else(|| escape_html(&social.platform))
            );
        }
        html.push_str("</ul>");
    }
    if let Some(copyright) = &footer.copyright {
        let _ = write!(html, "<p class=\"copyright\">{}</p>", escape_html(copyright));
    }
    html.push_str("</footer>");
    html
}

/// Home page body
pub fn home(page: &HomePage) -> String {
    let mut html = String::new();
    match &page.hero {
        Some(h) => html.push_str(&hero(h)),
        None if !page.title.is_empty() => {
            let _ = write!(html, "<h1>{}</h1>", escape_html(&page.title));
        }
        None => {}
    }
    if !page.testimonials.is_empty() {
        html.push_str("<section class=\"testimonials\">");
        for t in &page.testimonials {
            html.push_str(&testimonial(t));
        }
        html.push_str("</section>");
    }
    html.push_str(&faq(&page.faq));
    html
}

/// Services listing body
pub fn services_page(page: &ServicesPage) -> String {
    let mut html = String::new();
    match &page.hero {
        Some(h) => html.push_str(&hero(h)),
        None => {
            let _ = write!(html, "<h1>{}</h1>", escape_html(&page.title));
        }
    }
    html.push_str("<section class=\"services\">");
    for service in &page.services {
        html.push_str(&service_card(service));
    }
    html.push_str("</section>");
    html
}

/// Single service body
pub fn service(service: &Service) -> String {
    let mut html = String::from("<article class=\"service\">");
    let _ = write!(html, "<h1>{}</h1>", escape_html(&service.title));
    if let Some(image_media) = &service.image {
        html.push_str(&image(image_media));
    }
    if let Some(price) = &service.price {
        let _ = write!(html, "<p class=\"price\">{}</p>", escape_html(price));
    }
    let _ = write!(html, "<div class=\"content\">{}</div>", render_blocks(&service.content));
    html.push_str(&faq(&service.faq));
    html.push_str("</article>");
    html
}

/// Blog listing body
pub fn blog(posts: &[BlogPost], categories: &SectionPayload<Vec<BlogCategory>>) -> String {
    let mut html = String::new();
    html.push_str(&section(categories, |categories| {
        let mut nav = String::from("<nav class=\"categories\"><ul>");
        for category in categories {
            let _ = write!(
                nav,
                "<li><a href=\"/blog?category={}\">{}</a></li>",
                escape_html(&category.slug),
                escape_html(&category.name)
            );
        }
        nav.push_str("</ul></nav>");
        nav
    }));
    html.push_str("<section class=\"posts\">");
    for post in posts {
        let _ = write!(
            html,
            "<article><a href=\"/blog/{}\">",
            escape_html(&post.slug)
        );
        if let Some(cover) = &post.cover {
            html.push_str(&image(cover));
        }
        let _ = write!(html, "<h2>{}</h2></a>", escape_html(&post.title));
        if let Some(excerpt) = &post.excerpt {
            let _ = write!(html, "<p>{}</p>", escape_html(excerpt));
        }
        html.push_str("</article>");
    }
    html.push_str("</section>");
    html
}

/// Single blog post body
pub fn blog_post(post: &BlogPost) -> String {
    let mut html = String::from("<article class=\"post\">");
    let _ = write!(html, "<h1>{}</h1>", escape_html(&post.title));
    if let Some(date) = &post.published_at {
        let _ = write!(html, "<time datetime=\"{0}\">{0}</time>", escape_html(date));
    }
    if let Some(cover) = &post.cover {
        html.push_str(&image(cover));
    }
    let _ = write!(html, "<div class=\"content\">{}</div>", render_blocks(&post.content));
    if !post.categories.is_empty() {
        html.push_str("<ul class=\"categories\">");
        for category in &post.categories {
            let _ = write!(html, "<li>{}</li>", escape_html(&category.name));
        }
        html.push_str("</ul>");
    }
    html.push_str("</article>");
    html
}

/// Shop or school preview body
pub fn preview(page: &PreviewPage) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<h1>{}</h1><p>{}</p><section class=\"preview\">",
        escape_html(page.title),
        escape_html(page.intro)
    );
    for item in page.items {
        let _ = write!(
            html,
            "<article>{}<h2>{}</h2><p>{}</p><p class=\"detail\">{}</p></article>",
            icon(item.icon),
            escape_html(item.title),
            escape_html(item.description),
            escape_html(item.detail)
        );
    }
    html.push_str("</section>");
    html
}

fn hero(hero: &Hero) -> String {
    let mut html = String::from("<section class=\"hero\">");
    let _ = write!(html, "<h1>{}</h1>", escape_html(&hero.title));
    if let Some(subtitle) = &hero.subtitle {
        let _ = write!(html, "<p class=\"subtitle\">{}</p>", escape_html(subtitle));
    }
    html.push_str(&render_blocks(&hero.description));
    if let Some(image_media) = &hero.image {
        html.push_str(&image(image_media));
    }
    if let Some(cta) = &hero.cta {
        html.push_str(&nav_link(cta));
    }
    html.push_str("</section>");
    html
}

fn testimonial(t: &Testimonial) -> String {
    let mut html = String::from("<figure class=\"testimonial\">");
    if let Some(avatar) = &t.avatar {
        html.push_str(&image(avatar));
    }
    let _ = write!(
        html,
        "<blockquote>{}</blockquote><figcaption>{}",
        render_blocks(&t.quote),
        escape_html(&t.author)
    );
    if let Some(role) = &t.role {
        let _ = write!(html, ", {}", escape_html(role));
    }
    html.push_str("</figcaption></figure>");
    html
}

fn faq(items: &[FaqItem]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut html = String::from("<section class=\"faq\">");
    for item in items {
        let _ = write!(
            html,
            "<details><summary>{}</summary>{}</details>",
            escape_html(&item.question),
            render_blocks(&item.answer)
        );
    }
    html.push_str("</section>");
    html
}

fn service_card(service: &Service) -> String {
    let mut html = format!(
        "<article class=\"service-card\"><a href=\"/services/{}\">",
        escape_html(&service.slug)
    );
    if let Some(i) = service.icon.as_deref().and_then(Icon::from_key) {
        html.push_str(&icon(i));
    }
    let _ = write!(html, "<h2>{}</h2></a>", escape_html(&service.title));
    if let Some(summary) = &service.summary {
        let _ = write!(html, "<p>{}</p>", escape_html(summary));
    }
    if let Some(price) = &service.price {
        let _ = write!(html, "<p class=\"price\">{}</p>", escape_html(price));
    }
    html.push_str("</article>");
    html
}

fn nav_link(link: &NavLink) -> String {
    let icon_html = link
        .icon
        .as_deref()
        .and_then(Icon::from_key)
        .map(icon)
        .unwrap_or_default();
    format!(
        "<a href=\"{}\">{icon_html}{}</a>",
        escape_html(&link.url),
        escape_html(&link.label)
    )
}

fn image(media: &Media) -> String {
    let alt = media.alternative_text.as_deref().unwrap_or_default();
    let mut html = format!(
        "<img src=\"{}\" alt=\"{}\"",
        escape_html(&media.url),
        escape_html(alt)
    );
    if let (Some(w), Some(h)) = (media.width, media.height) {
        let _ = write!(html, " width=\"{w}\" height=\"{h}\"");
    }
    html.push('>');
    html
}

fn icon(icon: Icon) -> String {
    format!(
        "<svg class=\"icon\" aria-hidden=\"true\"><use href=\"#{}\"></use></svg>",
        icon.symbol()
    )
}
