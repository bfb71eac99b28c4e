//! Preference kinds and the reconciled per-kind state.
//!
//! DESIGN
//! ======
//! Theme and locale share one reconciliation strategy. Each kind declares its
//! storage key, fallback, and closed value set through [`Preference`]; the
//! transitions on [`PreferenceState`] are pure so the reactive store only
//! decides when to run them.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

/// A user preference with a fixed, closed set of values.
pub trait Preference: Copy + Eq + std::fmt::Debug + Send + Sync + 'static {
    /// `localStorage` key holding the persisted value.
    const STORAGE_KEY: &'static str;
    /// Value used when the system signal is unavailable.
    const FALLBACK: Self;
    /// Whether live system changes are followed after startup.
    const TRACKS_SYSTEM_CHANGES: bool;
    /// Short kind label for log lines.
    const LABEL: &'static str;

    /// Parse a stored string. Anything outside the valid set is `None`.
    fn parse(raw: &str) -> Option<Self>;

    /// Canonical stored form.
    fn as_str(self) -> &'static str;
}

/// Current value of one preference kind plus its tracking mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreferenceState<T> {
    pub value: T,
    /// True while the value mirrors the live system signal.
    pub follows_system: bool,
}

impl<T: Preference> Default for PreferenceState<T> {
    fn default() -> Self {
        Self::pinned(T::FALLBACK)
    }
}

impl<T: Preference> PreferenceState<T> {
    /// State for a value chosen explicitly or restored from storage.
    pub fn pinned(value: T) -> Self {
        Self { value, follows_system: false }
    }

    /// State that mirrors the system signal.
    pub fn following(value: T) -> Self {
        Self { value, follows_system: true }
    }

    /// Startup precedence: stored value, then the system value.
    pub fn reconcile(stored: Option<T>, system: impl FnOnce() -> T) -> Self {
        match stored {
            Some(value) => Self::pinned(value),
            None => Self::following(system()),
        }
    }

    /// Apply a system change notification.
    ///
    /// Returns `None` when the state is pinned, so stale notifications never
    /// override an explicit choice.
    pub fn with_system_value(self, value: T) -> Option<Self> {
        self.follows_system.then_some(Self::following(value))
    }
}
