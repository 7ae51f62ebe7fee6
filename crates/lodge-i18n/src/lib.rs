//! # lodge-i18n
//!
//! Multi-locale content resolution: decide which language variant of a
//! `<field>_<langcode>` column family to display, with a fixed fallback.
//!
//! Everything here is a pure function or a plain value with no shared
//! state. Nothing returns an error: a malformed hint resolves to English
//! and a row without usable text yields `""`.

pub mod direction;
pub mod format;
pub mod labels;
pub mod language;
pub mod pick;
pub mod text;

#[cfg(test)]
mod tests;

pub use direction::{DirectionRules, LanguageContext, TextDirection};
pub use labels::t;
pub use language::{fallback_order, resolve_language, SupportedLanguage, FALLBACK_ORDER};
pub use pick::{is_usable, localized_key, pick_localized, pick_localized_by, LocalizedRow};
pub use text::{split_title, to_bullets, TitleParts};
