//! Static UI labels used alongside store content.

use crate::language::SupportedLanguage;

/// Keys understood by [`t`].
pub const KEYS: [&str; 4] = ["night", "room", "untitled", "price_on_request"];

/// Return a localized static label for `key` in `lang`.
/// Unknown keys yield `"???"`.
pub fn t(key: &str, lang: SupportedLanguage) -> &'static str {
    use crate::language::SupportedLanguage::*;
    match key {
        "night" => match lang {
            Am => "գիշեր",
            Ru => "ночь",
            Fa => "شب",
            En => "night",
        },
        // Fallback card title when a room has no usable name.
        "room" => match lang {
            Am => "Սենյակ",
            Ru => "Номер",
            Fa => "اتاق",
            En => "Room",
        },
        "untitled" => match lang {
            Am => "Անվերնագիր",
            Ru => "Без названия",
            Fa => "بدون عنوان",
            En => "Untitled",
        },
        "price_on_request" => match lang {
            Am => "Գինը՝ ըստ հարցման",
            Ru => "Цена по запросу",
            Fa => "قیمت با درخواست",
            En => "Price on request",
        },
        _ => "???",
    }
}
