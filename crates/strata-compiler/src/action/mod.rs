//! Action compilation.
//!
//! An action is an async method `(context, payload) -> Result<Value, ActionError>`.
//! Compiling it produces a [`CompiledAction`](strata_core::CompiledAction) that:
//! - runs the method with the store's context as its receiver
//! - commits the resolved value to the configured mutation, if any
//! - contains every failure and hands the outcome to an [`ActionReporter`]

mod compiler;
mod registry;
mod reporter;

#[cfg(test)]
mod registry_tests;

pub use compiler::{ActionCompiler, ActionParams};
pub use registry::ActionRegistry;
pub use reporter::{ActionReporter, TracingReporter};
