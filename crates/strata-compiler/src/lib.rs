//! strata compiler: turns module definitions into store-ready descriptors.
//!
//! This crate provides the two definition-time transforms:
//! - `action` - wraps async methods into store actions (result commit,
//!   failure containment, outcome reporting)
//! - `module` - compiles a [`ModuleDefinition`] into a [`ModuleDescriptor`]
//!   (state extraction, derived views, action registration)
//!
//! The store that consumes the descriptors lives elsewhere; nothing here
//! dispatches or commits on its own.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod action;
pub mod module;

#[cfg(test)]
pub mod test_utils;


pub use action::{ActionCompiler, ActionParams, ActionRegistry, ActionReporter, TracingReporter};
pub use module::{GetterBinding, GetterRegistry, ModuleCompiler, ModuleDefinition, ModuleOptions};
pub use strata_core::{
    ActionContext, ActionError, ActionOutcome, CompiledAction, ModuleDescriptor, RawModule, State,
};

/// Errors that can occur while compiling a module definition.
#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    /// The default instance could not be turned into state values.
    #[error("could not serialize default instance of `{module}`: {source}")]
    Serialize {
        module: &'static str,
        source: serde_json::Error,
    },

    /// The default instance is not struct-shaped.
    #[error("default instance of `{module}` serialized as {found}, expected a struct")]
    StateNotObject {
        module: &'static str,
        found: &'static str,
    },
}

/// Result type for module compilation.
pub type Result<T> = std::result::Result<T, ModuleError>;
