//! Configuration types for module compilation.

/// Which state a compiled getter reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GetterBinding {
    /// The compiled state snapshot. The state argument passed by the store
    /// is ignored, so views stay correct only while the store holds that
    /// same snapshot.
    #[default]
    Snapshot,
    /// The state the store passes at call time.
    CallerState,
}

/// Options for compiling a module.
#[derive(Clone, Debug, Default)]
pub struct ModuleOptions {
    /// Mount name for the external registration step. Not used by the compiler.
    pub(crate) name: Option<String>,
    /// Whether the store prefixes this module's names with its path.
    pub(crate) namespaced: Option<bool>,
    /// State source of registered getters.
    pub(crate) getter_binding: GetterBinding,
}

impl ModuleOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the module's mount name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set whether the module is namespaced.
    pub fn namespaced(mut self, value: bool) -> Self {
        self.namespaced = Some(value);
        self
    }

    /// Set the state source of registered getters.
    pub fn getter_binding(mut self, value: GetterBinding) -> Self {
        self.getter_binding = value;
        self
    }

    /// Mount name, for whoever registers the compiled module.
    pub fn module_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
