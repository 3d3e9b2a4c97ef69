//! Action execution contracts.
//!
//! The state manager only resolves ids and submits batches; what an action
//! does, and how it runs, is entirely the executor's concern.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

/// A resolved, executable UI action.
pub trait Action: Send + Sync {
    /// Identifier this action was registered under.
    fn id(&self) -> &str;
}

/// A resolved action paired with the parameters recorded at persist time.
#[derive(Clone)]
pub struct ActionInvocation {
    pub action: Arc<dyn Action>,
    pub parameters: HashMap<String, String>,
}

impl ActionInvocation {
    pub fn new(action: Arc<dyn Action>, parameters: HashMap<String, String>) -> Self {
        Self { action, parameters }
    }
}

/// Resolves persisted action ids and executes ordered batches.
#[async_trait]
pub trait ActionExecutor: Send + Sync {
    /// Resolves an action id. Returns `None` when the id is unknown.
    fn lookup(&self, id: &str) -> Option<Arc<dyn Action>>;

    /// Executes a batch in order.
    ///
    /// Succeeds only if every action in the batch runs without error.
    /// Actions executed before a failure stay applied.
    async fn perform_actions(&self, batch: Vec<ActionInvocation>) -> Result<()>;
}
