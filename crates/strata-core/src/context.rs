//! The store-provided context handed to every dispatched action.

use serde_json::Value;

use crate::action::ActionError;
use crate::tree::State;

/// What the external store exposes to a running action.
///
/// The store owns mutation routing. An action only names the mutation and
/// hands over a payload; an unknown name is reported back as
/// [`ActionError::UnknownMutation`].
pub trait ActionContext: Send + Sync {
    /// Commit `payload` to the mutation registered as `mutation`.
    fn commit(&self, mutation: &str, payload: Value) -> Result<(), ActionError>;

    /// Snapshot of the module's current state, if the store shares one.
    fn state(&self) -> Option<State> {
        None
    }
}
