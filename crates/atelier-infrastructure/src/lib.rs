//! Infrastructure layer for Atelier.
//!
//! Provides the preference store backends (in-memory and file-backed) and
//! the preference-backed implementation of the core `StateStore` trait.

pub mod paths;
pub mod preference_store;
pub mod state_store;

pub use preference_store::{JsonFilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use state_store::{APP_STATE_PREFERENCE_KEY, PreferenceStateStore};
