//! Module compilation.
//!
//! A module is a type implementing [`ModuleDefinition`]:
//! - its `Default` instance, serialized, is the initial state
//! - `getters` registers derived views over that state
//! - `actions` registers async methods as store actions
//! - `statics` seeds sections that are written by hand (mutations, submodules, ...)

mod compiler;
mod getters;
mod options;
mod state;

#[cfg(test)]
mod getters_tests;

pub use compiler::{ModuleCompiler, ModuleDefinition};
pub use getters::GetterRegistry;
pub use options::{GetterBinding, ModuleOptions};
