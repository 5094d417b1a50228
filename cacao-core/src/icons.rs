//! Icon identifiers
//!
//! CMS entries name icons by string key ("instagram", "cake", ...). Keys are
//! resolved once into `Icon`, and `Icon::symbol` is the single mapping to the
//! sprite symbol the views reference.

use serde::{Deserialize, Serialize};

/// Icons used across the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Instagram,
    Telegram,
    WhatsApp,
    Vk,
    YouTube,
    Phone,
    Email,
    Location,
    Clock,
    Cake,
    Gift,
    Delivery,
    Workshop,
    Chef,
    Heart,
    Star,
    ArrowRight,
}

impl Icon {
    /// Every icon, in declaration order
    pub const ALL: [Icon; 17] = [
        Icon::Instagram,
        Icon::Telegram,
        Icon::WhatsApp,
        Icon::Vk,
        Icon::YouTube,
        Icon::Phone,
        Icon::Email,
        Icon::Location,
        Icon::Clock,
        Icon::Cake,
        Icon::Gift,
        Icon::Delivery,
        Icon::Workshop,
        Icon::Chef,
        Icon::Heart,
        Icon::Star,
        Icon::ArrowRight,
    ];

    /// Resolve a CMS key (case-insensitive, common aliases accepted)
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "instagram" | "ig" => Some(Icon::Instagram),
            "telegram" | "tg" => Some(Icon::Telegram),
            "whatsapp" => Some(Icon::WhatsApp),
            "vk" | "vkontakte" => Some(Icon::Vk),
            "youtube" => Some(Icon::YouTube),
            "phone" | "tel" => Some(Icon::Phone),
            "email" | "mail" => Some(Icon::Email),
            "location" | "address" | "map" => Some(Icon::Location),
            "clock" | "hours" => Some(Icon::Clock),
            "cake" => Some(Icon::Cake),
            "gift" => Some(Icon::Gift),
            "delivery" | "truck" => Some(Icon::Delivery),
            "workshop" | "school" | "education" => Some(Icon::Workshop),
            "chef" | "chef-hat" => Some(Icon::Chef),
            "heart" => Some(Icon::Heart),
            "star" => Some(Icon::Star),
            "arrow-right" | "arrow" => Some(Icon::ArrowRight),
            _ => None,
        }
    }

    /// Sprite symbol id
    pub fn symbol(&self) -> &'static str {
        match self {
            Icon::Instagram => "icon-instagram",
            Icon::Telegram => "icon-telegram",
            Icon::WhatsApp => "icon-whatsapp",
            Icon::Vk => "icon-vk",
            Icon::YouTube => "icon-youtube",
            Icon::Phone => "icon-phone",
            Icon::Email => "icon-email",
            Icon::Location => "icon-location",
            Icon::Clock => "icon-clock",
            Icon::Cake => "icon-cake",
            Icon::Gift => "icon-gift",
            Icon::Delivery => "icon-delivery",
            Icon::Workshop => "icon-workshop",
            Icon::Chef => "icon-chef",
            Icon::Heart => "icon-heart",
            Icon::Star => "icon-star",
            Icon::ArrowRight => "icon-arrow-right",
        }
    }
}
