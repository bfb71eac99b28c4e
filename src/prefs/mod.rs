//! Reactive preference stores and the session-wide context object.
//!
//! DESIGN
//! ======
//! One [`Preferences`] value is constructed at startup and injected through
//! Leptos context. It owns exactly one store per preference kind; consumers
//! read the stores' signals and call their actions, never mutating state
//! directly.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod store;

use std::rc::Rc;

use crate::state::locale::{FALLBACK_LOCALE, Locale};
use crate::state::theme::Theme;
use crate::util::browser_language::NavigatorLanguage;
use crate::util::dark_mode::PrefersDarkScheme;
use crate::util::storage::{BrowserStorage, KeyValueStorage, MemoryStorage};
use crate::util::system_signal::{ManualSignal, SystemSignal};

pub use store::{LocaleStore, PreferenceStore, ThemeStore};

/// Theme and locale stores for the current session.
#[derive(Clone, Copy)]
pub struct Preferences {
    pub theme: ThemeStore,
    pub locale: LocaleStore,
}

impl Preferences {
    /// Build stores over an explicit storage backend and system signals.
    pub fn new(
        storage: Rc<dyn KeyValueStorage>,
        theme_signal: Rc<dyn SystemSignal<Theme>>,
        locale_signal: Rc<dyn SystemSignal<Locale>>,
    ) -> Self {
        Self {
            theme: PreferenceStore::new(storage.clone(), theme_signal),
            locale: PreferenceStore::new(storage, locale_signal),
        }
    }

    /// `localStorage`, `prefers-color-scheme`, and `navigator.language`.
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage), Rc::new(PrefersDarkScheme), Rc::new(NavigatorLanguage))
    }

    /// In-memory stores that reconcile to the fallbacks. Used for server
    /// rendering, where no browser signal exists.
    pub fn detached() -> Self {
        Self::new(
            Rc::new(MemoryStorage::new()),
            Rc::new(ManualSignal::snapshot(Theme::default())),
            Rc::new(ManualSignal::snapshot(FALLBACK_LOCALE)),
        )
    }

    /// Browser stores under `hydrate`, detached stores otherwise.
    pub fn for_environment() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::browser()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::detached()
        }
    }

    /// Run startup reconciliation for every kind.
    pub fn init(&self) {
        self.theme.init();
        self.locale.init();
    }
}
