//! Application layer for Atelier.
//!
//! This crate provides the orchestrator that captures, persists, and
//! restores reproducible session state across application restarts.

pub mod state_manager;

pub use state_manager::AppStateManager;
