//! Preference-backed state store.
//!
//! Serializes the `AppState` aggregate as JSON under a fixed preference key.

use std::sync::Arc;

use async_trait::async_trait;

use atelier_core::error::Result;
use atelier_core::state::{AppState, StateStore};

use crate::preference_store::PreferenceStore;

/// The preference key that holds the serialized application state.
pub const APP_STATE_PREFERENCE_KEY: &str = "IdeAppState";

/// `StateStore` implementation over a key-value preference store.
pub struct PreferenceStateStore {
    store: Arc<dyn PreferenceStore>,
}

impl PreferenceStateStore {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl StateStore for PreferenceStateStore {
    /// Loads the aggregate from the preference store.
    ///
    /// An absent value or a decode failure yields an empty state; a corrupt
    /// blob is logged and discarded, never surfaced as an error.
    async fn load(&self) -> AppState {
        let Some(raw) = self.store.value(APP_STATE_PREFERENCE_KEY).await else {
            return AppState::new();
        };

        match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("Discarding undecodable application state: {}", e);
                AppState::new()
            }
        }
    }

    /// Serializes the aggregate, stages it under the fixed key, and asks the
    /// preference store to commit. No retry on failure.
    async fn save(&self, state: &AppState) -> Result<()> {
        let json = serde_json::to_string(state)?;
        self.store
            .set_value(APP_STATE_PREFERENCE_KEY, json)
            .await;
        self.store.flush().await
    }
}
