//! UI locale preference and language-tag mapping.
//!
//! SYSTEM CONTEXT
//! ==============
//! Translation catalogs live outside this crate; consumers key them by
//! [`Locale::code`] and fall back to [`FALLBACK_LOCALE`] for missing strings.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use serde::{Deserialize, Serialize};

use super::preference::Preference;

/// Supported UI locales.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
}

/// Locale whose catalog backs any missing translation.
pub const FALLBACK_LOCALE: Locale = Locale::EnUs;

impl Locale {
    /// Every supported locale, in switcher order.
    pub const ALL: [Locale; 2] = [Locale::ZhCn, Locale::EnUs];

    /// Map a browser language tag onto a supported locale.
    ///
    /// Every Chinese variant (`zh`, `zh-CN`, `zh-TW`, `zh-HK`) maps to
    /// simplified Chinese; anything else is English.
    pub fn from_language_tag(tag: &str) -> Self {
        if tag.starts_with("zh") { Self::ZhCn } else { Self::EnUs }
    }

    /// BCP 47 code, also the stored form.
    pub fn code(self) -> &'static str {
        match self {
            Self::ZhCn => "zh-CN",
            Self::EnUs => "en-US",
        }
    }

    /// English display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::ZhCn => "Chinese (Simplified)",
            Self::EnUs => "English",
        }
    }

    /// Name in the locale's own language, for the language switcher.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::ZhCn => "简体中文",
            Self::EnUs => "English",
        }
    }
}

impl Preference for Locale {
    const STORAGE_KEY: &'static str = "vscode-plugin-locale";
    const FALLBACK: Self = FALLBACK_LOCALE;
    const TRACKS_SYSTEM_CHANGES: bool = false;
    const LABEL: &'static str = "locale";

    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == raw)
    }

    fn as_str(self) -> &'static str {
        self.code()
    }
}
