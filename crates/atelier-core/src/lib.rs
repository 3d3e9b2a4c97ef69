//! Core domain layer for Atelier.
//!
//! Defines the persisted session state models and the collaborator contracts
//! (state storage, action execution, persistence components, lifecycle
//! notifications) that the application layer orchestrates.

pub mod action;
pub mod error;
pub mod lifecycle;
pub mod persistence;
pub mod state;

// Re-export common error type
pub use error::AtelierError;
