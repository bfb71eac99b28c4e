use super::*;

#[test]
fn detached_preferences_reconcile_to_fallbacks() {
    let prefs = Preferences::detached();
    prefs.init();
    assert_eq!(prefs.theme.current(), Theme::Light);
    assert_eq!(prefs.locale.current(), Locale::EnUs);
    assert!(prefs.theme.is_following_system());
    assert!(prefs.locale.is_following_system());
}

#[test]
fn kinds_share_storage_without_interfering() {
    let storage = Rc::new(MemoryStorage::with_entry("vscode-plugin-locale", "zh-CN"));
    let prefs = Preferences::new(
        storage.clone(),
        Rc::new(ManualSignal::new(Theme::Dark)),
        Rc::new(ManualSignal::snapshot(Locale::EnUs)),
    );
    prefs.init();
    assert_eq!(prefs.theme.current(), Theme::Dark);
    assert!(prefs.theme.is_following_system());
    assert_eq!(prefs.locale.current(), Locale::ZhCn);
    assert!(!prefs.locale.is_following_system());

    prefs.theme.toggle();
    assert_eq!(storage.raw("vscode-plugin-theme").as_deref(), Some("light"));
    assert_eq!(storage.raw("vscode-plugin-locale").as_deref(), Some("zh-CN"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_preferences_degrade_to_fallbacks_outside_browser() {
    let prefs = Preferences::browser();
    prefs.init();
    assert_eq!(prefs.theme.current(), Theme::Light);
    assert_eq!(prefs.locale.current(), Locale::EnUs);

    prefs.theme.set(Theme::Dark);
    assert_eq!(prefs.theme.current(), Theme::Dark);
    assert!(!prefs.theme.is_following_system());
}
