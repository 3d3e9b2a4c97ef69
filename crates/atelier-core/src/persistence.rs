//! Persistence component contract.

use crate::state::model::ActionRecord;

/// A pluggable contributor of reproducible UI state.
///
/// Each component owns one slice of workspace configuration (open editors,
/// visible panels, ...) and describes it as actions that recreate it.
pub trait PersistenceComponent: Send + Sync {
    /// Returns the actions needed to reproduce this component's current
    /// state, in replay order.
    ///
    /// Called synchronously during a persist cycle; must not block.
    fn actions(&self) -> Vec<ActionRecord>;
}
