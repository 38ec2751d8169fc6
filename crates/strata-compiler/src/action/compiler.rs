//! Wrapping async methods into store actions.

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use strata_core::{ActionContext, ActionError, ActionOutcome, CompiledAction};

use super::reporter::{ActionReporter, TracingReporter};

/// Per-action configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionParams {
    /// Mutation that receives the method's resolved value.
    pub(crate) commit: Option<String>,
}

impl ActionParams {
    /// Create params with no commit target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit the resolved value to `mutation` on success.
    pub fn commit(mut self, mutation: impl Into<String>) -> Self {
        self.commit = Some(mutation.into());
        self
    }

    /// Configured mutation name. An empty name is no target.
    pub fn commit_target(&self) -> Option<&str> {
        self.commit.as_deref().filter(|mutation| !mutation.is_empty())
    }
}

/// Compiles async methods into [`CompiledAction`]s.
///
/// Compilation has no side effects; the method first runs when the store
/// invokes the compiled action.
#[derive(Clone)]
pub struct ActionCompiler {
    reporter: Arc<dyn ActionReporter>,
}

impl Default for ActionCompiler {
    fn default() -> Self {
        Self {
            reporter: Arc::new(TracingReporter),
        }
    }
}

impl ActionCompiler {
    /// Create a compiler that reports through `tracing`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Send outcomes to `reporter` instead.
    pub fn with_reporter(mut self, reporter: Arc<dyn ActionReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Compile `method` into an action registered as `name`.
    pub fn compile<F, Fut>(
        &self,
        name: &str,
        params: Option<&ActionParams>,
        method: F,
    ) -> CompiledAction
    where
        F: Fn(Arc<dyn ActionContext>, Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, ActionError>> + Send + 'static,
    {
        let action_name: Arc<str> = Arc::from(name);
        let commit: Option<Arc<str>> = params
            .and_then(ActionParams::commit_target)
            .map(Arc::from);
        let reporter = Arc::clone(&self.reporter);

        CompiledAction::new(Arc::clone(&action_name), move |context, payload| {
            let pending = method(Arc::clone(&context), payload);
            let action_name = Arc::clone(&action_name);
            let commit = commit.clone();
            let reporter = Arc::clone(&reporter);

            Box::pin(async move {
                let outcome = settle(pending, context.as_ref(), commit.as_deref()).await;
                reporter.report(&action_name, &outcome);
                outcome
            })
        })
    }

    /// Compile a method with a typed payload and result.
    ///
    /// A payload that does not decode as `P`, or a result that does not
    /// encode, fails the action like any other error.
    pub fn compile_typed<P, R, F, Fut>(
        &self,
        name: &str,
        params: Option<&ActionParams>,
        method: F,
    ) -> CompiledAction
    where
        P: DeserializeOwned + 'static,
        R: Serialize + 'static,
        F: Fn(Arc<dyn ActionContext>, P) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, ActionError>> + Send + 'static,
    {
        self.compile(name, params, move |context, payload| {
            let pending =
                serde_json::from_value::<P>(payload).map(|payload| method(context, payload));
            async move {
                let result = pending?.await?;
                serde_json::to_value(result).map_err(ActionError::Encode)
            }
        })
    }
}

/// Await the method, then commit its value if a target is configured.
async fn settle<Fut>(
    pending: Fut,
    context: &dyn ActionContext,
    commit: Option<&str>,
) -> ActionOutcome
where
    Fut: Future<Output = Result<Value, ActionError>>,
{
    let value = match pending.await {
        Ok(value) => value,
        Err(err) => return ActionOutcome::Failure(err),
    };

    let Some(mutation) = commit else {
        return ActionOutcome::Success { committed: None };
    };

    match context.commit(mutation, value) {
        Ok(()) => ActionOutcome::Success {
            committed: Some(mutation.to_string()),
        },
        Err(err) => ActionOutcome::Failure(err),
    }
}
