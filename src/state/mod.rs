//! Preference state models.
//!
//! DESIGN
//! ======
//! Plain data and pure transitions only. Reactive wiring lives in `prefs`,
//! browser access in `util`.

pub mod locale;
pub mod preference;
pub mod theme;
