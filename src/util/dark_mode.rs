//! OS dark-mode signal and `<html>` theme class.
//!
//! Reads `(prefers-color-scheme: dark)` through `matchMedia`, forwards its
//! `change` events, and toggles the `dark` class on the `<html>` element for
//! class-based dark styles. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Outside the browser the signal reports nothing and `apply` is a no-op so
//! SSR output stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::Theme;
use crate::util::system_signal::{ChangeHandler, Subscription, SystemSignal};

/// Class toggled on the document element while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

#[cfg(feature = "hydrate")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[cfg(feature = "hydrate")]
fn media_query() -> Option<web_sys::MediaQueryList> {
    web_sys::window()?.match_media(DARK_QUERY).ok().flatten()
}

/// The browser's `prefers-color-scheme` media query.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrefersDarkScheme;

impl SystemSignal<Theme> for PrefersDarkScheme {
    fn current(&self) -> Option<Theme> {
        #[cfg(feature = "hydrate")]
        {
            media_query().map(|mq| Theme::from_dark(mq.matches()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn subscribe(&self, on_change: ChangeHandler<Theme>) -> Option<Subscription> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::{JsCast, closure::Closure};

            let mq = media_query()?;
            let listener: Closure<dyn Fn(web_sys::MediaQueryListEvent)> =
                Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
                    on_change(Theme::from_dark(event.matches()));
                }));
            if let Err(e) = mq.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref()) {
                leptos::logging::warn!("dark mode change listener rejected: {e:?}");
                return None;
            }
            Some(Subscription::new(move || {
                if let Err(e) = mq.remove_event_listener_with_callback("change", listener.as_ref().unchecked_ref()) {
                    leptos::logging::warn!("dark mode change listener removal failed: {e:?}");
                }
            }))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = on_change;
            None
        }
    }
}

/// Add or remove the `dark` class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
