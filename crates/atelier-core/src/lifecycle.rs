//! Lifecycle notifications and host context.

use serde::{Deserialize, Serialize};

/// Lifecycle notifications delivered by the host shell.
///
/// The host delivers these one at a time; handlers never run concurrently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// The main window is about to close.
    WindowClosing,
    /// The main window has closed.
    WindowClosed,
    /// The workspace agent came up.
    AgentStarted,
    /// The workspace agent went down.
    AgentStopped,
    /// The workspace was stopped.
    WorkspaceStopped,
    /// A workspace finished starting and is ready for use.
    WorkspaceReady { workspace_id: String },
}

/// Read-only view of the host application context.
pub trait WorkspaceContext: Send + Sync {
    /// Id of the workspace the user is currently working in, if any.
    fn current_workspace_id(&self) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization_is_tagged() {
        let event = LifecycleEvent::WorkspaceReady {
            workspace_id: "ws-1".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "workspace_ready");
        assert_eq!(json["workspace_id"], "ws-1");

        let json = serde_json::to_value(LifecycleEvent::WindowClosing).unwrap();
        assert_eq!(json["type"], "window_closing");
    }
}
