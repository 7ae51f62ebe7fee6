//! Supported languages and locale hint resolution.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four languages the content store carries variants for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedLanguage {
    /// Armenian.
    Am,
    /// English.
    En,
    /// Russian.
    Ru,
    /// Persian (Farsi).
    Fa,
}

/// Order tried after the requested language when its variant is missing.
///
/// English is the universal fallback, then Armenian, Russian and Persian.
pub const FALLBACK_ORDER: [SupportedLanguage; 4] = [
    SupportedLanguage::En,
    SupportedLanguage::Am,
    SupportedLanguage::Ru,
    SupportedLanguage::Fa,
];

impl SupportedLanguage {
    /// All supported languages in declaration order.
    pub const ALL: [SupportedLanguage; 4] = [Self::Am, Self::En, Self::Ru, Self::Fa];

    /// The two-letter code used as a column suffix (`name_am`, `name_en`, ...).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Am => "am",
            Self::En => "en",
            Self::Ru => "ru",
            Self::Fa => "fa",
        }
    }

    /// English name of the language, for display in listings.
    pub fn english_name(&self) -> &'static str {
        match self {
            Self::Am => "Armenian",
            Self::En => "English",
            Self::Ru => "Russian",
            Self::Fa => "Persian",
        }
    }

    /// Exact code lookup, case-insensitive. Unlike [`resolve_language`] this
    /// does not fall back: `"de"` and `"armenian"` both yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    /// Whether text in this language is written right to left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Self::Fa)
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Lenient parse: never fails, same rules as [`resolve_language`].
impl FromStr for SupportedLanguage {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(resolve_language(Some(s)))
    }
}

/// Normalize an arbitrary locale hint to a supported language.
///
/// Case-insensitive prefix match, first hit wins: `am`, then `ru`, then
/// `fa` or `ir`. Anything else, including an absent or empty hint, is
/// English. Only the leading letters count: `"am-AM"` and `"AMx"` are
/// Armenian, while `"armenian"` (which starts with `ar`) is English.
pub fn resolve_language(hint: Option<&str>) -> SupportedLanguage {
    let hint = match hint {
        Some(h) if !h.is_empty() => h.to_lowercase(),
        _ => return SupportedLanguage::En,
    };

    if hint.starts_with("am") {
        SupportedLanguage::Am
    } else if hint.starts_with("ru") {
        SupportedLanguage::Ru
    } else if hint.starts_with("fa") || hint.starts_with("ir") {
        SupportedLanguage::Fa
    } else {
        SupportedLanguage::En
    }
}

/// Candidate order for `lang`: `lang` itself, then [`FALLBACK_ORDER`] with
/// `lang` removed.
pub fn fallback_order(lang: SupportedLanguage) -> [SupportedLanguage; 4] {
    let mut order = [lang; 4];
    let rest = FALLBACK_ORDER.iter().filter(|&&code| code != lang);
    for (slot, &code) in order.iter_mut().skip(1).zip(rest) {
        *slot = code;
    }
    order
}
