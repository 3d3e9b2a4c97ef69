//! State store trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::state::model::AppState;

/// Storage for the persisted application state aggregate.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Loads the persisted application state.
    ///
    /// Never fails: an absent or undecodable stored value yields an empty
    /// `AppState`.
    async fn load(&self) -> AppState;

    /// Persists the full application state.
    ///
    /// A failed write leaves the previously committed value in place; the
    /// caller decides whether to retry (the state manager does not).
    async fn save(&self, state: &AppState) -> Result<()>;
}
