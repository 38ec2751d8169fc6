//! Initial state extraction from a default-constructed module.

use serde::Serialize;
use serde_json::Value;
use strata_core::State;

use crate::{ModuleError, Result};

/// Serialize `instance` and keep its fields as state.
///
/// Skipped fields (`#[serde(skip)]`, typically closures or handles) never
/// reach the state. A unit-like module has no state.
pub(crate) fn extract_state<M: Serialize>(instance: &M) -> Result<State> {
    let module = std::any::type_name::<M>();
    let value = serde_json::to_value(instance)
        .map_err(|source| ModuleError::Serialize { module, source })?;

    match value {
        Value::Object(fields) => Ok(fields.into_iter().collect()),
        Value::Null => Ok(State::new()),
        other => Err(ModuleError::StateNotObject {
            module,
            found: kind_name(&other),
        }),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
