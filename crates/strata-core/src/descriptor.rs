//! The module descriptor and its hand-assembled counterpart.
//!
//! [`RawModule`] is the open, field-by-field shape used to assemble a module
//! by hand or to seed a compiled one. [`ModuleDescriptor`] is the canonical,
//! read-only value a store consumes. Converting between the two is a plain
//! field copy.

use std::fmt;

use crate::action::CompiledAction;
use crate::tree::{ActionTree, Getter, GetterTree, ModuleTree, MutationTree, State};

/// Module shape with every section optional and publicly writable.
#[derive(Clone, Default)]
pub struct RawModule {
    pub namespaced: Option<bool>,
    pub state: Option<State>,
    pub getters: Option<GetterTree>,
    pub actions: Option<ActionTree>,
    pub mutations: Option<MutationTree>,
    pub modules: Option<ModuleTree>,
}

/// Compiled module descriptor.
///
/// Never mutated after construction. Sections absent from the source stay
/// absent: nothing is defaulted here.
#[derive(Clone)]
pub struct ModuleDescriptor {
    namespaced: Option<bool>,
    state: Option<State>,
    getters: Option<GetterTree>,
    actions: Option<ActionTree>,
    mutations: Option<MutationTree>,
    modules: Option<ModuleTree>,
}

impl ModuleDescriptor {
    /// Copy a hand-assembled module into a descriptor.
    pub fn adapt(raw: RawModule) -> Self {
        Self::from(raw)
    }

    pub fn namespaced(&self) -> Option<bool> {
        self.namespaced
    }

    pub fn state(&self) -> Option<&State> {
        self.state.as_ref()
    }

    pub fn getters(&self) -> Option<&GetterTree> {
        self.getters.as_ref()
    }

    pub fn getter(&self, name: &str) -> Option<&Getter> {
        self.getters.as_ref()?.get(name)
    }

    pub fn actions(&self) -> Option<&ActionTree> {
        self.actions.as_ref()
    }

    pub fn action(&self, name: &str) -> Option<&CompiledAction> {
        self.actions.as_ref()?.get(name)
    }

    pub fn mutations(&self) -> Option<&MutationTree> {
        self.mutations.as_ref()
    }

    pub fn modules(&self) -> Option<&ModuleTree> {
        self.modules.as_ref()
    }

    pub fn submodule(&self, name: &str) -> Option<&ModuleDescriptor> {
        self.modules.as_ref()?.get(name)
    }

    /// Give the sections back as a [`RawModule`], e.g. to nest under a parent.
    pub fn into_raw(self) -> RawModule {
        RawModule {
            namespaced: self.namespaced,
            state: self.state,
            getters: self.getters,
            actions: self.actions,
            mutations: self.mutations,
            modules: self.modules,
        }
    }
}

impl From<RawModule> for ModuleDescriptor {
    fn from(raw: RawModule) -> Self {
        Self {
            namespaced: raw.namespaced,
            state: raw.state,
            getters: raw.getters,
            actions: raw.actions,
            mutations: raw.mutations,
            modules: raw.modules,
        }
    }
}

/// Human-readable dump in `[section]` blocks.
///
/// Absent sections print `-`; present but empty sections print nothing
/// under their header.
impl fmt::Display for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[module]\n")?;
        match self.namespaced {
            Some(namespaced) => writeln!(f, "namespaced = {namespaced}")?,
            None => f.write_str("namespaced = -\n")?,
        }

        f.write_str("\n[state]\n")?;
        match &self.state {
            Some(state) => {
                for (key, value) in state {
                    writeln!(f, "{key} = {value}")?;
                }
            }
            None => f.write_str("-\n")?,
        }

        write_names(f, "getters", self.getters.as_ref().map(|t| t.keys()))?;
        write_names(f, "actions", self.actions.as_ref().map(|t| t.keys()))?;
        write_names(f, "mutations", self.mutations.as_ref().map(|t| t.keys()))?;
        write_names(f, "modules", self.modules.as_ref().map(|t| t.keys()))
    }
}

fn write_names<'a>(
    f: &mut fmt::Formatter<'_>,
    section: &str,
    names: Option<impl Iterator<Item = &'a String>>,
) -> fmt::Result {
    writeln!(f, "\n[{section}]")?;
    let Some(names) = names else {
        return f.write_str("-\n");
    };
    for name in names {
        writeln!(f, "{name}")?;
    }
    Ok(())
}

fn keys<V>(tree: &Option<indexmap::IndexMap<String, V>>) -> Option<Vec<&str>> {
    tree.as_ref().map(|t| t.keys().map(String::as_str).collect())
}

macro_rules! impl_debug_sections {
    ($ty:ident) => {
        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($ty))
                    .field("namespaced", &self.namespaced)
                    .field("state", &self.state)
                    .field("getters", &keys(&self.getters))
                    .field("actions", &keys(&self.actions))
                    .field("mutations", &keys(&self.mutations))
                    .field("modules", &keys(&self.modules))
                    .finish()
            }
        }
    };
}

impl_debug_sections!(RawModule);
impl_debug_sections!(ModuleDescriptor);
