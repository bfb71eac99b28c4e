//! # landing
//!
//! Leptos client crate for the extension's landing site. Views, routing,
//! and translation catalogs are consumers of this crate; what lives here is
//! the preference layer that decides the session's theme and locale.
//!
//! A preference is reconciled once at startup from the persisted choice, the
//! live system signal, and a fixed fallback, in that order. The theme keeps
//! following the OS dark-mode setting until the user picks one explicitly.

pub mod app;
pub mod prefs;
pub mod state;
pub mod util;
