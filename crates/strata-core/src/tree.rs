//! Named trees that make up a module descriptor.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::action::CompiledAction;
use crate::descriptor::ModuleDescriptor;

/// Field name to value, in field declaration order.
pub type State = IndexMap<String, Value>;

/// Pure derived view over a module's state.
pub type Getter = Arc<dyn Fn(&State) -> Value + Send + Sync>;

/// State-mutating operation. Only the store invokes these.
pub type Mutation = Arc<dyn Fn(&mut State, Value) + Send + Sync>;

pub type GetterTree = IndexMap<String, Getter>;
pub type ActionTree = IndexMap<String, CompiledAction>;
pub type MutationTree = IndexMap<String, Mutation>;
pub type ModuleTree = IndexMap<String, ModuleDescriptor>;
