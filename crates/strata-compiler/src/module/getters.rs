//! Registration of derived views.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use strata_core::{Getter, GetterTree, State};

/// Derived views of one module, by name.
#[derive(Default)]
pub struct GetterRegistry {
    views: GetterTree,
}

impl GetterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view over the raw state map.
    pub fn getter<F>(&mut self, name: &str, view: F) -> &mut Self
    where
        F: Fn(&State) -> Value + Send + Sync + 'static,
    {
        let view: Getter = Arc::new(view);
        self.views.insert(name.to_string(), view);
        self
    }

    /// Register a view over the module type decoded from state.
    ///
    /// Evaluates to `null` when the state does not decode as `T` or the
    /// result does not encode.
    pub fn accessor<T, R, F>(&mut self, name: &str, view: F) -> &mut Self
    where
        T: DeserializeOwned,
        R: Serialize,
        F: Fn(&T) -> R + Send + Sync + 'static,
    {
        let getter: Arc<str> = Arc::from(name);
        self.getter(name, move |state| {
            let fields = state.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
            let evaluated = serde_json::from_value::<T>(Value::Object(fields))
                .and_then(|module| serde_json::to_value(view(&module)));
            match evaluated {
                Ok(value) => value,
                Err(err) => {
                    tracing::warn!(getter = %getter, error = %err, "could not evaluate accessor");
                    Value::Null
                }
            }
        })
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn into_tree(self) -> GetterTree {
        self.views
    }
}
