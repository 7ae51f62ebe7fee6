//! Explicit language context: the current hint, its resolved language and
//! the writing direction the page should use.
//!
//! Changing language means building a new context, there is no global.

use crate::language::{resolve_language, SupportedLanguage};
use serde::{Deserialize, Serialize};

/// Default viewport width (px) below which a client counts as mobile.
pub const DEFAULT_MOBILE_BREAKPOINT: u32 = 768;

/// Writing direction for the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// Which languages render right to left, and where mobile starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionRules {
    /// Primary language subtags, lowercase (`fa`, `ar`, `he`).
    pub rtl_languages: Vec<String>,
    /// Viewports narrower than this are mobile and always left to right.
    pub mobile_breakpoint: u32,
}

impl Default for DirectionRules {
    fn default() -> Self {
        Self {
            rtl_languages: vec!["fa".into(), "ar".into(), "he".into()],
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
        }
    }
}

impl DirectionRules {
    fn is_rtl_hint(&self, hint: &str) -> bool {
        let primary = primary_subtag(hint);
        self.rtl_languages
            .iter()
            .any(|code| code.eq_ignore_ascii_case(&primary))
    }
}

/// Language state for one render, passed down instead of read from a global.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageContext {
    hint: String,
    language: SupportedLanguage,
    is_mobile: bool,
    direction: TextDirection,
}

impl LanguageContext {
    pub fn new(hint: &str, viewport_width: u32, rules: &DirectionRules) -> Self {
        Self::build(hint, viewport_width < rules.mobile_breakpoint, rules)
    }

    /// A context for `hint` with the same viewport classification.
    pub fn with_language(&self, hint: &str, rules: &DirectionRules) -> Self {
        Self::build(hint, self.is_mobile, rules)
    }

    fn build(hint: &str, is_mobile: bool, rules: &DirectionRules) -> Self {
        let direction = if !is_mobile && rules.is_rtl_hint(hint) {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        };
        Self {
            hint: hint.to_string(),
            language: resolve_language(Some(hint)),
            is_mobile,
            direction,
        }
    }

    /// The raw hint this context was built from.
    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn language(&self) -> SupportedLanguage {
        self.language
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    pub fn is_rtl(&self) -> bool {
        self.direction == TextDirection::Rtl
    }

    /// Value for the document `lang` attribute.
    pub fn html_lang(&self) -> &str {
        if self.hint.is_empty() {
            "en"
        } else {
            &self.hint
        }
    }
}

/// `"fa-IR"` → `"fa"`, `"pt_BR"` → `"pt"`.
fn primary_subtag(hint: &str) -> String {
    hint.split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persian_desktop_is_rtl() {
        let ctx = LanguageContext::new("fa", 1280, &DirectionRules::default());
        assert_eq!(ctx.language(), SupportedLanguage::Fa);
        assert_eq!(ctx.direction(), TextDirection::Rtl);
        assert!(ctx.is_rtl());
        assert_eq!(ctx.html_lang(), "fa");
    }

    #[test]
    fn test_region_subtag_still_rtl() {
        let ctx = LanguageContext::new("fa-IR", 1024, &DirectionRules::default());
        assert!(ctx.is_rtl());
    }

    #[test]
    fn test_mobile_is_always_ltr() {
        let ctx = LanguageContext::new("fa", 375, &DirectionRules::default());
        assert!(ctx.is_mobile());
        assert_eq!(ctx.direction(), TextDirection::Ltr);
        assert_eq!(ctx.language(), SupportedLanguage::Fa);
    }

    #[test]
    fn test_breakpoint_is_exclusive() {
        let rules = DirectionRules::default();
        assert!(!LanguageContext::new("fa", 768, &rules).is_mobile());
        assert!(LanguageContext::new("fa", 767, &rules).is_mobile());
    }

    #[test]
    fn test_rtl_list_is_independent_of_supported_set() {
        let ctx = LanguageContext::new("he", 1280, &DirectionRules::default());
        assert!(ctx.is_rtl());
        assert_eq!(ctx.language(), SupportedLanguage::En);
    }

    #[test]
    fn test_ltr_languages() {
        let rules = DirectionRules::default();
        for hint in ["am", "en-US", "ru", ""] {
            assert_eq!(
                LanguageContext::new(hint, 1280, &rules).direction(),
                TextDirection::Ltr,
                "{hint}"
            );
        }
    }

    #[test]
    fn test_empty_hint_html_lang() {
        let ctx = LanguageContext::new("", 1280, &DirectionRules::default());
        assert_eq!(ctx.html_lang(), "en");
    }

    #[test]
    fn test_with_language_keeps_viewport() {
        let rules = DirectionRules::default();
        let ctx = LanguageContext::new("en", 1280, &rules);
        let switched = ctx.with_language("fa", &rules);
        assert!(switched.is_rtl());
        assert_eq!(ctx.direction(), TextDirection::Ltr);
    }
}
