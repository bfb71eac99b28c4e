use super::*;

#[test]
fn chinese_variants_map_to_zh_cn() {
    for tag in ["zh", "zh-CN", "zh-TW", "zh-HK"] {
        assert_eq!(Locale::from_language_tag(tag), Locale::ZhCn, "{tag}");
    }
}

#[test]
fn other_tags_map_to_en_us() {
    for tag in ["en", "en-GB", "fr-FR", "ja", "", "z", "xx-XX"] {
        assert_eq!(Locale::from_language_tag(tag), Locale::EnUs, "{tag}");
    }
}

#[test]
fn tag_match_is_exact_prefix() {
    assert_eq!(Locale::from_language_tag("ZH-CN"), Locale::EnUs);
    assert_eq!(Locale::from_language_tag(" zh"), Locale::EnUs);
}

#[test]
fn parse_accepts_only_supported_codes() {
    assert_eq!(Locale::parse("zh-CN"), Some(Locale::ZhCn));
    assert_eq!(Locale::parse("en-US"), Some(Locale::EnUs));
    assert_eq!(Locale::parse("xx-XX"), None);
    assert_eq!(Locale::parse("zh"), None);
    assert_eq!(Locale::parse("en-us"), None);
}

#[test]
fn fallback_is_english() {
    assert_eq!(FALLBACK_LOCALE, Locale::EnUs);
    assert_eq!(<Locale as Preference>::FALLBACK, Locale::EnUs);
    assert!(!<Locale as Preference>::TRACKS_SYSTEM_CHANGES);
}

#[test]
fn all_locales_have_switcher_metadata() {
    assert_eq!(Locale::ALL.len(), 2);
    assert_eq!(Locale::ZhCn.native_name(), "简体中文");
    assert_eq!(Locale::EnUs.name(), "English");
}

#[test]
fn serde_uses_code() {
    assert_eq!(serde_json::to_string(&Locale::ZhCn).unwrap(), "\"zh-CN\"");
    let parsed: Locale = serde_json::from_str("\"en-US\"").unwrap();
    assert_eq!(parsed, Locale::EnUs);
}
