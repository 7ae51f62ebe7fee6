use super::*;
use serde_json::{json, Map, Value};

#[test]
fn test_all_labels_are_translated() {
    for key in labels::KEYS {
        for lang in SupportedLanguage::ALL {
            let label = t(key, lang);
            assert_ne!(label, "???", "missing {key} for {lang}");
            assert!(is_usable(label));
        }
    }
    assert_eq!(t("no_such_key", SupportedLanguage::En), "???");
}

/// Every combination of present/absent/blank/non-string for the four
/// variants of one field.
fn variant_rows() -> Vec<Value> {
    let states = [
        None,
        Some(json!(null)),
        Some(json!("")),
        Some(json!("  \t")),
        Some(json!(7)),
        Some(json!("text")),
    ];
    let mut rows = Vec::new();
    for a in &states {
        for b in &states {
            for c in &states {
                for d in &states {
                    let mut row = Map::new();
                    for (lang, state) in SupportedLanguage::ALL.iter().zip([a, b, c, d]) {
                        if let Some(v) = state {
                            row.insert(localized_key("title", *lang), v.clone());
                        }
                    }
                    rows.push(Value::Object(row));
                }
            }
        }
    }
    rows
}

#[test]
fn test_empty_result_iff_no_usable_variant() {
    for row in variant_rows() {
        let any_usable = SupportedLanguage::ALL.iter().any(|lang| {
            row.get(localized_key("title", *lang))
                .and_then(Value::as_str)
                .is_some_and(is_usable)
        });
        for lang in SupportedLanguage::ALL {
            let picked = pick_localized(&row, "title", lang);
            assert_eq!(picked.is_empty(), !any_usable, "{row} / {lang}");
        }
    }
}

#[test]
fn test_pick_follows_fallback_order() {
    for row in variant_rows() {
        for lang in SupportedLanguage::ALL {
            let expected = fallback_order(lang)
                .into_iter()
                .find(|code| {
                    row.get(localized_key("title", *code))
                        .and_then(Value::as_str)
                        .is_some_and(is_usable)
                })
                .map(|code| row[localized_key("title", code)].as_str().unwrap_or(""))
                .unwrap_or("");
            assert_eq!(pick_localized(&row, "title", lang), expected);
        }
    }
}

#[test]
fn test_resolved_hint_feeds_picker() {
    let row = json!({
        "name_am": "Լյուքս",
        "name_en": "Deluxe",
        "name_ru": "Люкс",
        "name_fa": "لوکس"
    });
    let cases = [
        (Some("hy-AM"), "Deluxe"),
        (Some("am"), "Լյուքս"),
        (Some("ru-RU"), "Люкс"),
        (Some("IR"), "لوکس"),
        (Some("de-DE"), "Deluxe"),
        (None, "Deluxe"),
    ];
    for (hint, expected) in cases {
        assert_eq!(pick_localized(&row, "name", resolve_language(hint)), expected);
    }
}

#[test]
fn test_concurrent_calls_agree() {
    let row = std::sync::Arc::new(json!({ "name_en": "", "name_ru": "Номер" }));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let row = std::sync::Arc::clone(&row);
            std::thread::spawn(move || {
                let lang = resolve_language(Some("fa-IR"));
                pick_localized(&*row, "name", lang).to_string()
            })
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), "Номер");
    }
}
