//! Browser language signal and `<html lang>` attribute.
//!
//! The language is read once at startup; browsers expose no change event
//! this crate listens to.

#[cfg(test)]
#[path = "browser_language_test.rs"]
mod browser_language_test;

use crate::state::locale::{FALLBACK_LOCALE, Locale};
use crate::util::system_signal::SystemSignal;

/// Pick a locale from `navigator.language`, then `navigator.languages[0]`.
/// Empty tags count as missing.
pub fn locale_from_navigator(language: Option<&str>, first_listed: Option<&str>) -> Locale {
    language
        .filter(|tag| !tag.is_empty())
        .or(first_listed.filter(|tag| !tag.is_empty()))
        .map_or(FALLBACK_LOCALE, Locale::from_language_tag)
}

/// The browser's preferred language.
#[derive(Debug, Default, Clone, Copy)]
pub struct NavigatorLanguage;

impl SystemSignal<Locale> for NavigatorLanguage {
    fn current(&self) -> Option<Locale> {
        #[cfg(feature = "hydrate")]
        {
            let navigator = web_sys::window()?.navigator();
            let language = navigator.language();
            let languages: js_sys::Array = navigator.languages();
            let first_listed = languages.get(0).as_string();
            Some(locale_from_navigator(language.as_deref(), first_listed.as_deref()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

/// Set the `lang` attribute on the `<html>` element.
pub fn apply(locale: Locale) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("lang", locale.code());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locale;
    }
}
