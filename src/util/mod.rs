//! Browser integration helpers for preference handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, media
//! queries, navigator, document attributes) from the preference stores so
//! the stores can be tested natively.

pub mod browser_language;
pub mod dark_mode;
pub mod storage;
pub mod system_signal;
