//! Session state domain models.
//!
//! Contains the persisted application state: for every workspace, the ordered
//! list of reproducible actions that recreates its UI configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A serializable reference to a UI action plus its invocation parameters.
///
/// The id is opaque to this subsystem; it is resolved by the action executor
/// at restore time. Parameters are string-keyed and uninterpreted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActionRecord {
    /// Action identifier as known to the action executor.
    pub id: String,
    /// Invocation parameters recorded at persist time.
    #[serde(default)]
    pub parameters: HashMap<String, String>,
}

impl ActionRecord {
    /// Creates a record with no parameters.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parameters: HashMap::new(),
        }
    }

    /// Adds a parameter, builder style.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }
}

/// The persisted action list for one workspace session.
///
/// A snapshot is rebuilt from scratch and fully replaced on every persist
/// cycle for its workspace; it is never merged with a previous snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceState {
    /// Actions in the order they were contributed at persist time.
    #[serde(default)]
    pub actions: Vec<ActionRecord>,
}

/// Application state that persists across sessions, keyed by workspace id.
///
/// This is the single aggregate written to the preference store. It is
/// exclusively owned and mutated by the state manager; collaborators only
/// ever see it by reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// Id of the workspace persisted most recently.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_workspace_id: Option<String>,

    /// Snapshot per workspace id.
    #[serde(default)]
    pub workspaces: HashMap<String, WorkspaceState>,
}

impl AppState {
    /// Creates a new, empty AppState.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let state = AppState::new();
        assert!(state.recent_workspace_id.is_none());
        assert!(state.workspaces.is_empty());
    }

    #[test]
    fn test_action_record_builder() {
        let record = ActionRecord::new("openFile").with_parameter("path", "src/main.rs");
        assert_eq!(record.id, "openFile");
        assert_eq!(
            record.parameters.get("path"),
            Some(&"src/main.rs".to_string())
        );
    }

    #[test]
    fn test_serialized_schema_uses_camel_case() {
        let mut state = AppState::new();
        state.recent_workspace_id = Some("ws-1".to_string());
        state.workspaces.insert(
            "ws-1".to_string(),
            WorkspaceState {
                actions: vec![ActionRecord::new("openFile").with_parameter("path", "a.rs")],
            },
        );

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["recentWorkspaceId"], "ws-1");
        assert_eq!(json["workspaces"]["ws-1"]["actions"][0]["id"], "openFile");
        assert_eq!(
            json["workspaces"]["ws-1"]["actions"][0]["parameters"]["path"],
            "a.rs"
        );
    }

    #[test]
    fn test_deserialize_tolerates_missing_fields() {
        let state: AppState = serde_json::from_str("{}").unwrap();
        assert!(state.recent_workspace_id.is_none());
        assert!(state.workspaces.is_empty());

        let record: ActionRecord = serde_json::from_str(r#"{"id":"a"}"#).unwrap();
        assert!(record.parameters.is_empty());
    }

    #[test]
    fn test_action_order_survives_round_trip() {
        let snapshot = WorkspaceState {
            actions: vec![
                ActionRecord::new("first"),
                ActionRecord::new("second"),
                ActionRecord::new("third"),
            ],
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let decoded: WorkspaceState = serde_json::from_str(&json).unwrap();
        let ids: Vec<&str> = decoded.actions.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }
}
