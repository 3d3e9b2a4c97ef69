//! Session state domain module.
//!
//! - `model`: persisted state aggregate (`AppState`, `WorkspaceState`,
//!   `ActionRecord`)
//! - `store`: storage trait for the aggregate (`StateStore`)

pub mod model;
pub mod store;

pub use model::{ActionRecord, AppState, WorkspaceState};
pub use store::StateStore;
