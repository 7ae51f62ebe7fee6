pub(super) fn default_name() -> String {
    "lodge".to_string()
}

pub(super) fn default_log_level() -> String {
    "info".to_string()
}

pub(super) fn default_hint() -> String {
    "en".to_string()
}

pub(super) fn default_rtl_languages() -> Vec<String> {
    vec!["fa".to_string(), "ar".to_string(), "he".to_string()]
}

pub(super) fn default_mobile_breakpoint() -> u32 {
    lodge_i18n::direction::DEFAULT_MOBILE_BREAKPOINT
}

pub(super) fn default_store_path() -> String {
    "data/content.json".to_string()
}
