//! Core module compiler and its entry points.

use std::sync::Arc;

use serde::Serialize;
use strata_core::{ActionTree, Getter, GetterTree, ModuleDescriptor, RawModule, State};

use super::getters::GetterRegistry;
use super::options::{GetterBinding, ModuleOptions};
use super::state::extract_state;
use crate::Result;
use crate::action::{ActionCompiler, ActionRegistry};

/// A type that compiles into a module descriptor.
///
/// Data fields come from the serialized `Default` instance. Everything else
/// is declared through the hooks below, which all default to nothing.
pub trait ModuleDefinition: Default + Serialize {
    /// Sections that exist before compilation. Their getters, actions,
    /// mutations and submodules are kept as they are.
    fn statics() -> RawModule {
        RawModule::default()
    }

    /// Declare derived views.
    fn getters(_getters: &mut GetterRegistry) {}

    /// Declare actions.
    fn actions(_actions: &mut ActionRegistry) {}
}

/// Compiles [`ModuleDefinition`]s into [`ModuleDescriptor`]s.
#[derive(Clone, Default)]
pub struct ModuleCompiler {
    actions: ActionCompiler,
}

impl ModuleCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile actions with `actions` (e.g. to attach a reporter).
    pub fn with_action_compiler(mut self, actions: ActionCompiler) -> Self {
        self.actions = actions;
        self
    }

    /// Compile `M` with default options.
    pub fn compile<M: ModuleDefinition>(&self) -> Result<ModuleDescriptor> {
        self.compile_with::<M>(&ModuleOptions::default())
    }

    /// Compile `M`.
    ///
    /// The default instance is only inspected, never kept. Instance fields
    /// override same-named static state; registered getters and actions
    /// override same-named static ones.
    pub fn compile_with<M: ModuleDefinition>(
        &self,
        options: &ModuleOptions,
    ) -> Result<ModuleDescriptor> {
        let fields = extract_state(&M::default())?;

        let mut raw = M::statics();
        raw.namespaced = options.namespaced;

        let state = raw.state.get_or_insert_with(State::new);
        state.extend(fields);
        let snapshot = Arc::new(state.clone());

        let mut views = GetterRegistry::new();
        M::getters(&mut views);
        let getters = raw.getters.get_or_insert_with(GetterTree::new);
        for (name, view) in views.into_tree() {
            getters.insert(name, bind(view, options.getter_binding, &snapshot));
        }

        let mut actions = ActionRegistry::new(self.actions.clone());
        M::actions(&mut actions);
        if !actions.is_empty() {
            raw.actions
                .get_or_insert_with(ActionTree::new)
                .extend(actions.into_tree());
        }

        tracing::debug!(
            module = std::any::type_name::<M>(),
            name = options.module_name(),
            namespaced = options.namespaced,
            state = snapshot.len(),
            getters = raw.getters.as_ref().map_or(0, |g| g.len()),
            actions = raw.actions.as_ref().map_or(0, |a| a.len()),
            "compiled module"
        );

        Ok(ModuleDescriptor::adapt(raw))
    }
}

fn bind(view: Getter, binding: GetterBinding, snapshot: &Arc<State>) -> Getter {
    match binding {
        GetterBinding::CallerState => view,
        GetterBinding::Snapshot => {
            let snapshot = Arc::clone(snapshot);
            Arc::new(move |_: &State| view(&snapshot))
        }
    }
}
