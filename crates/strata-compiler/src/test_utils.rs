//! Test doubles for the store side of the contract.

use std::sync::{Arc, Mutex};

use serde_json::Value;
use strata_core::{ActionContext, ActionError, ActionOutcome, State};

use crate::action::ActionReporter;

/// Store context that records every commit.
///
/// With a mutation list, commits to other names fail with
/// [`ActionError::UnknownMutation`] the way a real store would reject them.
#[derive(Default)]
pub struct RecordingContext {
    mutations: Option<Vec<String>>,
    state: Option<State>,
    commits: Mutex<Vec<(String, Value)>>,
}

impl RecordingContext {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_mutations(names: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            mutations: Some(names.iter().map(|n| n.to_string()).collect()),
            ..Self::default()
        })
    }

    pub fn with_state(state: State) -> Arc<Self> {
        Arc::new(Self {
            state: Some(state),
            ..Self::default()
        })
    }

    pub fn commits(&self) -> Vec<(String, Value)> {
        self.commits.lock().unwrap().clone()
    }
}

impl ActionContext for RecordingContext {
    fn commit(&self, mutation: &str, payload: Value) -> Result<(), ActionError> {
        if let Some(known) = &self.mutations
            && !known.iter().any(|m| m == mutation)
        {
            return Err(ActionError::UnknownMutation(mutation.to_string()));
        }
        self.commits
            .lock()
            .unwrap()
            .push((mutation.to_string(), payload));
        Ok(())
    }

    fn state(&self) -> Option<State> {
        self.state.clone()
    }
}

/// Reporter that keeps one line per outcome: `action: ok`, `action: ok -> mutation`,
/// or `action: failed: <error>`.
#[derive(Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl ActionReporter for RecordingReporter {
    fn report(&self, action: &str, outcome: &ActionOutcome) {
        let line = match outcome {
            ActionOutcome::Success {
                committed: Some(mutation),
            } => format!("{action}: ok -> {mutation}"),
            ActionOutcome::Success { committed: None } => format!("{action}: ok"),
            ActionOutcome::Failure(err) => format!("{action}: failed: {err}"),
        };
        self.lines.lock().unwrap().push(line);
    }
}
