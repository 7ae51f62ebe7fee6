use super::*;

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.lodge.log_level, "info");
    assert_eq!(cfg.locale.default_hint, "en");
    assert_eq!(cfg.locale.mobile_breakpoint, 768);
    assert_eq!(cfg.locale.rtl_languages, vec!["fa", "ar", "he"]);
    assert_eq!(cfg.store.path, "data/content.json");
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_locale_from_toml() {
    let toml_str = r#"
        [locale]
        default_hint = "hy-AM"
        rtl_languages = ["FA", " ar "]
        mobile_breakpoint = 640
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.locale.mobile_breakpoint, 640);
    assert_eq!(cfg.locale.default_language(), SupportedLanguage::En);

    let rules = cfg.locale.direction_rules();
    assert_eq!(rules.rtl_languages, vec!["fa", "ar"]);
    assert_eq!(rules.mobile_breakpoint, 640);
}

#[test]
fn test_missing_sections_use_defaults() {
    let toml_str = r#"
        [store]
        path = "/srv/lodge/content.json"
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(cfg.store.path, "/srv/lodge/content.json");
    assert_eq!(cfg.locale.default_hint, "en");
    assert_eq!(cfg.lodge.name, "lodge");
}

#[test]
fn test_zero_breakpoint_rejected() {
    let mut cfg = Config::default();
    cfg.locale.mobile_breakpoint = 0;
    assert!(matches!(cfg.validate(), Err(LodgeError::Config(_))));
}

#[test]
fn test_unsupported_default_hint_only_warns() {
    let mut cfg = Config::default();
    cfg.locale.default_hint = "am-AM".to_string();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.locale.default_language(), SupportedLanguage::Am);

    cfg.locale.default_hint = "armenian".to_string();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.locale.default_language(), SupportedLanguage::En);
}

#[test]
fn test_load_missing_file_gives_defaults() {
    let cfg = load("/nonexistent/__lodge_test__/config.toml").unwrap();
    assert_eq!(cfg.locale.default_hint, "en");
}

#[test]
fn test_load_from_file() {
    let tmp = std::env::temp_dir().join("__lodge_test_config_load__");
    let _ = std::fs::remove_dir_all(&tmp);
    std::fs::create_dir_all(&tmp).unwrap();
    let path = tmp.join("config.toml");
    std::fs::write(&path, "[locale]\ndefault_hint = \"ru\"\n").unwrap();

    let cfg = load(path.to_str().unwrap()).unwrap();
    assert_eq!(cfg.locale.default_language(), SupportedLanguage::Ru);

    std::fs::write(&path, "[locale\n").unwrap();
    assert!(matches!(
        load(path.to_str().unwrap()),
        Err(LodgeError::Config(_))
    ));

    let _ = std::fs::remove_dir_all(&tmp);
}

#[test]
fn test_shellexpand_leaves_plain_paths() {
    assert_eq!(shellexpand("data/content.json"), "data/content.json");
    if let Some(home) = std::env::var_os("HOME") {
        assert_eq!(
            shellexpand("~/content.json"),
            format!("{}/content.json", home.to_string_lossy())
        );
    }
}
