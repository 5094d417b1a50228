// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shop and school previews
//!
//! These pages are not managed in the CMS. Their content ships with the
//! binary, one table per locale; unknown locales get the Russian table.

use cacao_core::Icon;
use serde::Serialize;

/// One card on a preview page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PreviewItem {
    pub title: &'static str,
    pub description: &'static str,
    /// Display price or duration
    pub detail: &'static str,
    pub icon: Icon,
}

/// A static preview page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PreviewPage {
    pub title: &'static str,
    pub intro: &'static str,
    pub items: &'static [PreviewItem],
}

const SHOP_RU: PreviewPage = PreviewPage {
    title: "Магазин",
    intro: "Скоро здесь появится онлайн-витрина наших конфет и плиток.",
    items: &[
        PreviewItem {
            title: "Набор трюфелей",
            description: "Двенадцать трюфелей ручной работы с ганашем на сливках.",
            detail: "от 1 900 ₽",
            icon: Icon::Gift,
        },
        PreviewItem {
            title: "Шоколадные плитки",
            description: "Тёмный, молочный и белый шоколад с орехами и ягодами.",
            detail: "от 450 ₽",
            icon: Icon::Heart,
        },
        PreviewItem {
            title: "Торты на заказ",
            description: "Шоколадные торты к празднику по вашему эскизу.",
            detail: "от 3 500 ₽",
            icon: Icon::Cake,
        },
        PreviewItem {
            title: "Доставка",
            description: "Курьером по городу в термоупаковке.",
            detail: "1–2 дня",
            icon: Icon::Delivery,
        },
    ],
};

const SHOP_EN: PreviewPage = PreviewPage {
    title: "Shop",
    intro: "Our online counter for bonbons and bars is opening soon.",
    items: &[
        PreviewItem {
            title: "Truffle box",
            description: "Twelve hand-rolled truffles with fresh cream ganache.",
            detail: "from 1,900 ₽",
            icon: Icon::Gift,
        },
        PreviewItem {
            title: "Chocolate bars",
            description: "Dark, milk and white chocolate with nuts and berries.",
            detail: "from 450 ₽",
            icon: Icon::Heart,
        },
        PreviewItem {
            title: "Custom cakes",
            description: "Chocolate celebration cakes made to your sketch.",
            detail: "from 3,500 ₽",
            icon: Icon::Cake,
        },
        PreviewItem {
            title: "Delivery",
            description: "City courier in insulated packaging.",
            detail: "1–2 days",
            icon: Icon::Delivery,
        },
    ],
};

const SCHOOL_RU: PreviewPage = PreviewPage {
    title: "Школа шоколада",
    intro: "Мастер-классы и курсы для любителей и профессионалов.",
    items: &[
        PreviewItem {
            title: "Темперирование",
            description: "Основа работы с шоколадом: блеск, хруст и стабильность.",
            detail: "3 часа",
            icon: Icon::Workshop,
        },
        PreviewItem {
            title: "Конфеты ручной работы",
            description: "Корпусные конфеты, начинки и роспись какао-маслом.",
            detail: "2 дня",
            icon: Icon::Chef,
        },
        PreviewItem {
            title: "Детский мастер-класс",
            description: "Шоколадные фигурки и плитки для детей от 6 лет.",
            detail: "1,5 часа",
            icon: Icon::Star,
        },
    ],
};

const SCHOOL_EN: PreviewPage = PreviewPage {
    title: "Chocolate school",
    intro: "Workshops and courses for enthusiasts and professionals.",
    items: &[
        PreviewItem {
            title: "Tempering",
            description: "The foundation of chocolate work: shine, snap and stability.",
            detail: "3 hours",
            icon: Icon::Workshop,
        },
        PreviewItem {
            title: "Handmade bonbons",
            description: "Moulded bonbons, fillings and cocoa butter painting.",
            detail: "2 days",
            icon: Icon::Chef,
        },
        PreviewItem {
            title: "Kids workshop",
            description: "Chocolate figures and bars for children aged 6 and up.",
            detail: "1.5 hours",
            icon: Icon::Star,
        },
    ],
};

/// Shop preview for `locale`
pub fn shop_preview(locale: &str) -> &'static PreviewPage {
    match locale {
        "en" => &SHOP_EN,
        _ => &SHOP_RU,
    }
}

/// School preview for `locale`
pub fn school_preview(locale: &str) -> &'static PreviewPage {
    match locale {
        "en" => &SCHOOL_EN,
        _ => &SCHOOL_RU,
    }
}
