//! Where action outcomes go once the wrapper has contained them.

use strata_core::ActionOutcome;

/// Receives the outcome of every compiled action invocation.
///
/// The store never sees failures; this is the only channel that does.
pub trait ActionReporter: Send + Sync {
    fn report(&self, action: &str, outcome: &ActionOutcome);
}

/// Default reporter: failures at `error`, successes at `debug`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl ActionReporter for TracingReporter {
    fn report(&self, action: &str, outcome: &ActionOutcome) {
        match outcome {
            ActionOutcome::Success { committed } => {
                tracing::debug!(action, committed = committed.as_deref(), "action completed");
            }
            ActionOutcome::Failure(err) => {
                tracing::error!(action, error = %err, "could not perform action");
            }
        }
    }
}
