//! Reactive preference store: startup reconciliation, explicit set, and live
//! system tracking for one preference kind.
//!
//! DESIGN
//! ======
//! The store owns the only writable handle to its [`PreferenceState`]. Every
//! change publishes through the signal first and is then written back to
//! storage. While the state follows the system, the store holds exactly one
//! [`Subscription`]; pinning the value cancels it before returning, and the
//! change handler re-checks the tracking flag so a notification already in
//! flight cannot override a pinned value.
//!
//! The store is `Copy` (signals plus arena-backed handles) so it can be
//! provided through Leptos context and captured freely by event handlers.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::state::locale::Locale;
use crate::state::preference::{Preference, PreferenceState};
use crate::state::theme::Theme;
use crate::util::storage::{KeyValueStorage, PreferencePersistence};
use crate::util::system_signal::{ChangeHandler, Subscription, SystemSignal};

/// Store for one preference kind.
#[derive(Clone, Copy)]
pub struct PreferenceStore<T: Preference> {
    state: RwSignal<PreferenceState<T>>,
    persistence: StoredValue<PreferencePersistence<T>, LocalStorage>,
    signal: StoredValue<Rc<dyn SystemSignal<T>>, LocalStorage>,
    subscription: StoredValue<Option<Subscription>, LocalStorage>,
}

pub type ThemeStore = PreferenceStore<Theme>;
pub type LocaleStore = PreferenceStore<Locale>;

impl<T: Preference> PreferenceStore<T> {
    /// Create a store holding the fallback value. Call [`Self::init`] once at
    /// startup to reconcile it.
    pub fn new(storage: Rc<dyn KeyValueStorage>, signal: Rc<dyn SystemSignal<T>>) -> Self {
        Self {
            state: RwSignal::new(PreferenceState::default()),
            persistence: StoredValue::new_local(PreferencePersistence::new(storage)),
            signal: StoredValue::new_local(signal),
            subscription: StoredValue::new_local(None),
        }
    }

    /// Reactive current value.
    pub fn value(&self) -> Signal<T> {
        let state = self.state;
        Signal::derive(move || state.get().value)
    }

    /// Reactive tracking flag.
    pub fn follows_system(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().follows_system)
    }

    /// Read-only view of the whole state.
    pub fn state(&self) -> ReadSignal<PreferenceState<T>> {
        self.state.read_only()
    }

    /// Current value without subscribing the caller.
    pub fn current(&self) -> T {
        self.state.get_untracked().value
    }

    /// Current tracking flag without subscribing the caller.
    pub fn is_following_system(&self) -> bool {
        self.state.get_untracked().follows_system
    }

    /// Reconcile stored value, system signal, and fallback.
    pub fn init(&self) {
        let stored = self.persistence.with_value(PreferencePersistence::read);
        let next = PreferenceState::reconcile(stored, || self.system_value());
        self.commit(next);
    }

    /// Pin the preference to `value` and stop following the system.
    pub fn set(&self, value: T) {
        self.commit(PreferenceState::pinned(value));
    }

    fn system_value(&self) -> T {
        self.signal
            .with_value(|signal| signal.current())
            .unwrap_or_else(|| {
                leptos::logging::warn!(
                    "system {} unavailable, defaulting to {}",
                    T::LABEL,
                    T::FALLBACK.as_str()
                );
                T::FALLBACK
            })
    }

    fn commit(&self, next: PreferenceState<T>) {
        if next.follows_system {
            self.start_tracking();
        } else {
            self.stop_tracking();
        }
        self.state.set(next);
        self.persistence.with_value(|p| p.write(next.value));
    }

    fn start_tracking(&self) {
        if !T::TRACKS_SYSTEM_CHANGES || self.subscription.with_value(Option::is_some) {
            return;
        }

        let state = self.state;
        let persistence = self.persistence;
        let on_change: ChangeHandler<T> = Rc::new(move |value: T| {
            let Some(next) = state
                .try_get_untracked()
                .and_then(|current| current.with_system_value(value))
            else {
                return;
            };
            state.set(next);
            let _ = persistence.try_with_value(|p| p.write(value));
        });

        let subscription = self.signal.with_value(|signal| signal.subscribe(on_change));
        if subscription.is_none() {
            leptos::logging::log!("system {} changes are not observable", T::LABEL);
        }
        self.subscription.set_value(subscription);
    }

    fn stop_tracking(&self) {
        let mut active = None;
        self.subscription.update_value(|slot| active = slot.take());
        // Cancel outside the arena borrow.
        drop(active);
    }
}

impl PreferenceStore<Theme> {
    /// Switch to the other theme and stop following the system.
    pub fn toggle(&self) {
        self.set(self.current().toggled());
    }

    /// Reactive dark flag for class bindings.
    pub fn is_dark(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().value.is_dark())
    }
}
