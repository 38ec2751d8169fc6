//! Compiled actions: the store-facing handle around an async method.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

use crate::context::ActionContext;

/// Boxed `Send` future, the return type of every action invocation.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Failure of an action body, its payload conversion, or its result commit.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("mutation `{0}` is not registered")]
    UnknownMutation(String),

    #[error("invalid payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("could not encode result: {0}")]
    Encode(serde_json::Error),

    #[error("{0}")]
    Failed(String),

    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl ActionError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    pub fn other<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other(Box::new(err))
    }
}

/// What happened during one action invocation.
#[derive(Debug)]
pub enum ActionOutcome {
    /// The method resolved. `committed` names the mutation that received its value.
    Success { committed: Option<String> },
    /// The method or its result commit failed. The wrapper committed nothing.
    Failure(ActionError),
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn committed(&self) -> Option<&str> {
        match self {
            Self::Success { committed } => committed.as_deref(),
            Self::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ActionError> {
        match self {
            Self::Success { .. } => None,
            Self::Failure(err) => Some(err),
        }
    }
}

type Invoke =
    dyn Fn(Arc<dyn ActionContext>, Value) -> BoxFuture<'static, ActionOutcome> + Send + Sync;

/// Store-facing action handle.
///
/// Cloning is cheap and every clone runs the same wrapper. Invocations share
/// no state with each other.
#[derive(Clone)]
pub struct CompiledAction {
    name: Arc<str>,
    invoke: Arc<Invoke>,
}

impl CompiledAction {
    pub fn new<F>(name: impl Into<Arc<str>>, invoke: F) -> Self
    where
        F: Fn(Arc<dyn ActionContext>, Value) -> BoxFuture<'static, ActionOutcome>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: name.into(),
            invoke: Arc::new(invoke),
        }
    }

    /// Name the action was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the action and hand back its outcome.
    pub fn invoke(
        &self,
        context: Arc<dyn ActionContext>,
        payload: Value,
    ) -> BoxFuture<'static, ActionOutcome> {
        (self.invoke)(context, payload)
    }

    /// Run the action the way the store does. The outcome is not surfaced.
    pub async fn dispatch(&self, context: Arc<dyn ActionContext>, payload: Value) {
        self.invoke(context, payload).await;
    }
}

impl fmt::Debug for CompiledAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledAction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
