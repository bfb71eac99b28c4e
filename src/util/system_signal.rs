//! External system signals (OS dark mode, browser language).
//!
//! SYSTEM CONTEXT
//! ==============
//! A signal is polled once at startup and, for kinds that track live changes,
//! subscribed to through a [`Subscription`] handle. Browser implementations
//! live in `dark_mode` and `browser_language`; [`ManualSignal`] stands in for
//! them during SSR and tests.

#[cfg(test)]
#[path = "system_signal_test.rs"]
mod system_signal_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Callback invoked with each new system value.
pub type ChangeHandler<T> = Rc<dyn Fn(T)>;

/// Live platform preference source.
pub trait SystemSignal<T> {
    /// Current system value, or `None` when the platform cannot report one.
    fn current(&self) -> Option<T>;

    /// Register `on_change` for live updates. `None` when the platform has no
    /// change notifications.
    fn subscribe(&self, on_change: ChangeHandler<T>) -> Option<Subscription> {
        let _ = on_change;
        None
    }
}

/// Registration handle. Dropping it deregisters the callback.
#[must_use = "dropping a Subscription deregisters it immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// Deregister now.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

type Listeners<T> = Rc<RefCell<Vec<(u64, ChangeHandler<T>)>>>;

/// Signal driven by hand. Used for SSR, where no platform exists, and tests.
pub struct ManualSignal<T> {
    value: Cell<Option<T>>,
    listeners: Listeners<T>,
    next_id: Cell<u64>,
    live: bool,
}

impl<T: Copy + 'static> ManualSignal<T> {
    /// Signal that reports `value` and accepts subscriptions.
    pub fn new(value: T) -> Self {
        Self::build(Some(value), true)
    }

    /// Signal whose platform capability is missing entirely.
    pub fn unavailable() -> Self {
        Self::build(None, false)
    }

    /// Signal that reports `value` but never notifies changes.
    pub fn snapshot(value: T) -> Self {
        Self::build(Some(value), false)
    }

    fn build(value: Option<T>, live: bool) -> Self {
        Self {
            value: Cell::new(value),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(0),
            live,
        }
    }

    /// Change the system value and notify subscribers in registration order.
    pub fn emit(&self, value: T) {
        self.value.set(Some(value));
        // Snapshot first: handlers may unsubscribe while we iterate.
        let handlers: Vec<ChangeHandler<T>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler(value);
        }
    }

    /// Number of active subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl<T: Copy + 'static> SystemSignal<T> for ManualSignal<T> {
    fn current(&self) -> Option<T> {
        self.value.get()
    }

    fn subscribe(&self, on_change: ChangeHandler<T>) -> Option<Subscription> {
        if !self.live {
            return None;
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, on_change));

        let listeners = Rc::downgrade(&self.listeners);
        Some(Subscription::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut().retain(|(entry, _)| *entry != id);
            }
        }))
    }
}
