//! Collecting a module's actions by name.

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use strata_core::{ActionContext, ActionError, ActionTree, CompiledAction};

use super::compiler::{ActionCompiler, ActionParams};

/// Named actions of one module, compiled as they are registered.
///
/// One action per name: registering a name again replaces the earlier action.
pub struct ActionRegistry {
    compiler: ActionCompiler,
    actions: ActionTree,
}

impl ActionRegistry {
    pub fn new(compiler: ActionCompiler) -> Self {
        Self {
            compiler,
            actions: ActionTree::new(),
        }
    }

    /// Register an action without a commit target.
    pub fn action<F, Fut>(&mut self, name: &str, method: F) -> &mut Self
    where
        F: Fn(Arc<dyn ActionContext>, Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, ActionError>> + Send + 'static,
    {
        let action = self.compiler.compile(name, None, method);
        self.insert(action)
    }

    /// Register an action with explicit params.
    pub fn action_with<F, Fut>(&mut self, name: &str, params: ActionParams, method: F) -> &mut Self
    where
        F: Fn(Arc<dyn ActionContext>, Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, ActionError>> + Send + 'static,
    {
        let action = self.compiler.compile(name, Some(&params), method);
        self.insert(action)
    }

    /// Register an action with a typed payload and result.
    pub fn typed<P, R, F, Fut>(
        &mut self,
        name: &str,
        params: Option<ActionParams>,
        method: F,
    ) -> &mut Self
    where
        P: DeserializeOwned + 'static,
        R: Serialize + 'static,
        F: Fn(Arc<dyn ActionContext>, P) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, ActionError>> + Send + 'static,
    {
        let action = self.compiler.compile_typed(name, params.as_ref(), method);
        self.insert(action)
    }

    /// Register an already compiled action under its own name.
    pub fn insert(&mut self, action: CompiledAction) -> &mut Self {
        let name = action.name().to_string();
        if self.actions.insert(name.clone(), action).is_some() {
            tracing::debug!(action = %name, "replaced earlier action");
        }
        self
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn into_tree(self) -> ActionTree {
        self.actions
    }
}
