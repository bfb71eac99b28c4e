use super::*;

#[test]
fn primary_language_wins() {
    assert_eq!(locale_from_navigator(Some("zh-TW"), Some("en-US")), Locale::ZhCn);
    assert_eq!(locale_from_navigator(Some("en-GB"), Some("zh-CN")), Locale::EnUs);
}

#[test]
fn first_listed_language_used_when_primary_missing() {
    assert_eq!(locale_from_navigator(None, Some("zh-HK")), Locale::ZhCn);
    assert_eq!(locale_from_navigator(Some(""), Some("zh")), Locale::ZhCn);
}

#[test]
fn no_language_falls_back_to_english() {
    assert_eq!(locale_from_navigator(None, None), Locale::EnUs);
    assert_eq!(locale_from_navigator(Some(""), Some("")), Locale::EnUs);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn navigator_is_unavailable_in_non_hydrate_tests() {
    assert_eq!(NavigatorLanguage.current(), None);
    apply(Locale::ZhCn);
}
