//! Localized field picking over rows with `<base>_<lang>` columns.

use crate::language::{fallback_order, SupportedLanguage};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// A string-keyed row whose values may or may not be strings.
///
/// `text` returns the value at `key` only when it is a string. Absent keys,
/// nulls and non-string values all look the same to the picker.
pub trait LocalizedRow {
    fn text(&self, key: &str) -> Option<&str>;
}

impl LocalizedRow for Map<String, Value> {
    fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

impl LocalizedRow for Value {
    fn text(&self, key: &str) -> Option<&str> {
        self.as_object().and_then(|obj| obj.text(key))
    }
}

impl LocalizedRow for HashMap<String, String> {
    fn text(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl LocalizedRow for HashMap<String, Option<String>> {
    fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Option::as_deref)
    }
}

impl LocalizedRow for BTreeMap<String, String> {
    fn text(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<R: LocalizedRow + ?Sized> LocalizedRow for &R {
    fn text(&self, key: &str) -> Option<&str> {
        (**self).text(key)
    }
}

/// A value is usable when it has something other than whitespace.
pub fn is_usable(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Column name for `base` in `lang`: `localized_key("name", Ru) == "name_ru"`.
pub fn localized_key(base: &str, lang: SupportedLanguage) -> String {
    format!("{base}_{}", lang.code())
}

/// Best display string for the `base` column family.
///
/// Tries `lang` first, then English, Armenian, Russian and Persian. The
/// first usable value is returned as stored, untrimmed. Returns `""` when
/// no variant is usable.
pub fn pick_localized<'a, R>(row: &'a R, base: &str, lang: SupportedLanguage) -> &'a str
where
    R: LocalizedRow + ?Sized,
{
    pick_localized_by(row, lang, |code| localized_key(base, code))
}

/// Same fallback walk as [`pick_localized`] with a custom column naming.
///
/// For tables that predate the `<base>_<lang>` convention, e.g.
/// `about_text` / `about_en_text`.
pub fn pick_localized_by<'a, R, F>(row: &'a R, lang: SupportedLanguage, key_for: F) -> &'a str
where
    R: LocalizedRow + ?Sized,
    F: Fn(SupportedLanguage) -> String,
{
    fallback_order(lang)
        .into_iter()
        .filter_map(|code| row.text(&key_for(code)))
        .find(|value| is_usable(value))
        .unwrap_or("")
}
