//! Session state persistence orchestration.
//!
//! `AppStateManager` reacts to host lifecycle notifications: when a session
//! winds down it captures the current workspace configuration from the
//! registered persistence components and writes it to the state store; when
//! a workspace comes up it replays the stored actions through the action
//! executor. Every failure on either path degrades to a log entry; nothing
//! is surfaced to the user.

use std::sync::Arc;

use atelier_core::action::{ActionExecutor, ActionInvocation};
use atelier_core::lifecycle::{LifecycleEvent, WorkspaceContext};
use atelier_core::persistence::PersistenceComponent;
use atelier_core::state::{AppState, StateStore, WorkspaceState};

/// Orchestrates persist and restore cycles for workspace session state.
///
/// The manager exclusively owns the in-memory `AppState` aggregate. All
/// mutation happens synchronously inside a persist cycle, before the store
/// write is issued; lifecycle handlers are delivered one at a time by the
/// host, so no two cycles mutate the aggregate concurrently.
pub struct AppStateManager {
    /// The in-memory aggregate, loaded once at construction.
    state: AppState,
    /// Storage backend for the aggregate.
    store: Arc<dyn StateStore>,
    /// Supplies the id of the workspace the user is currently in.
    context: Arc<dyn WorkspaceContext>,
    /// Registered contributors, in contribution order.
    components: Vec<Arc<dyn PersistenceComponent>>,
    /// Resolves and runs persisted actions.
    executor: Arc<dyn ActionExecutor>,
}

impl AppStateManager {
    /// Loads the persisted state and builds the manager.
    ///
    /// Components contribute to every persist cycle in the order given here.
    pub async fn new(
        store: Arc<dyn StateStore>,
        context: Arc<dyn WorkspaceContext>,
        components: Vec<Arc<dyn PersistenceComponent>>,
        executor: Arc<dyn ActionExecutor>,
    ) -> Self {
        let state = store.load().await;

        Self {
            state,
            store,
            context,
            components,
            executor,
        }
    }

    /// Entry point for host lifecycle notifications.
    pub async fn handle_event(&mut self, event: LifecycleEvent) {
        match event {
            LifecycleEvent::WindowClosing
            | LifecycleEvent::AgentStopped
            | LifecycleEvent::WorkspaceStopped => self.persist_current_workspace().await,
            LifecycleEvent::WorkspaceReady { workspace_id } => {
                self.restore_workspace(&workspace_id).await
            }
            LifecycleEvent::WindowClosed | LifecycleEvent::AgentStarted => {}
        }
    }

    /// Read access to the loaded aggregate for the host shell.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    async fn persist_current_workspace(&mut self) {
        let Some(workspace_id) = self.context.current_workspace_id() else {
            tracing::debug!("No current workspace, skipping state persist");
            return;
        };
        self.persist_workspace(&workspace_id).await;
    }

    /// Captures contributed actions for `workspace_id` and writes the
    /// aggregate out.
    ///
    /// The workspace's previous snapshot is fully replaced, never merged.
    /// A failed write is logged and dropped; the in-memory aggregate keeps
    /// the new snapshot either way.
    pub async fn persist_workspace(&mut self, workspace_id: &str) {
        self.state.recent_workspace_id = Some(workspace_id.to_string());

        let mut snapshot = WorkspaceState::default();
        for component in &self.components {
            snapshot.actions.extend(component.actions());
        }
        self.state
            .workspaces
            .insert(workspace_id.to_string(), snapshot);

        if let Err(e) = self.store.save(&self.state).await {
            tracing::error!("Failed to persist application state: {}", e);
        }
    }

    /// Replays the stored snapshot for `workspace_id`.
    ///
    /// A missing snapshot or an empty action list is a no-op. Action ids the
    /// executor no longer knows are skipped; the surviving actions keep
    /// their stored order. An execution failure is logged and not retried;
    /// actions that already ran stay applied.
    pub async fn restore_workspace(&self, workspace_id: &str) {
        let Some(snapshot) = self.state.workspaces.get(workspace_id) else {
            return;
        };
        if snapshot.actions.is_empty() {
            return;
        }

        let mut batch = Vec::with_capacity(snapshot.actions.len());
        for record in &snapshot.actions {
            let Some(action) = self.executor.lookup(&record.id) else {
                tracing::debug!("Skipping unresolvable action '{}'", record.id);
                continue;
            };
            batch.push(ActionInvocation::new(action, record.parameters.clone()));
        }

        if let Err(e) = self.executor.perform_actions(batch).await {
            tracing::warn!("Failed to restore workspace state: {}", e);
        }
    }
}
