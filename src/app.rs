//! Startup wiring for the preference context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component calls [`provide_preferences`] once before rendering any
//! route. Components then reach the stores with [`use_preferences`]:
//!
//! ```ignore
//! let prefs = use_preferences();
//! view! {
//!     <button on:click=move |_| prefs.theme.toggle()>
//!         {move || if prefs.theme.is_dark().get() { "☀" } else { "☾" }}
//!     </button>
//! }
//! ```

use leptos::prelude::*;

use crate::prefs::Preferences;
use crate::util::{browser_language, dark_mode};

/// Construct the session's stores, reconcile them, mirror them onto the
/// document, and provide them as context.
pub fn provide_preferences() -> Preferences {
    let prefs = Preferences::for_environment();
    prefs.init();
    install_document_sync(prefs);
    provide_context(prefs);
    prefs
}

/// Preference stores provided by [`provide_preferences`].
pub fn use_preferences() -> Preferences {
    expect_context::<Preferences>()
}

/// Keep the `<html>` theme class and `lang` attribute in step with the stores.
pub fn install_document_sync(prefs: Preferences) {
    let theme = prefs.theme.value();
    let locale = prefs.locale.value();
    Effect::new(move || dark_mode::apply(theme.get()));
    Effect::new(move || browser_language::apply(locale.get()));
}

/// Browser logging and panic reporting. Call once from the hydrate entry.
#[cfg(feature = "hydrate")]
pub fn install_browser_runtime() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
}
