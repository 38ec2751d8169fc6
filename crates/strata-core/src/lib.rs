#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for strata module descriptors.
//!
//! A module descriptor is the declarative shape an external state store reads:
//! - **state**: initial field values
//! - **getters**: pure derived views over state
//! - **actions**: async operations that may commit a mutation
//! - **mutations** / **modules**: passed through untouched
//!
//! Descriptors come out of `strata-compiler`, or are copied from a
//! hand-assembled [`RawModule`].

mod action;
mod context;
mod descriptor;
mod tree;


pub use action::{ActionError, ActionOutcome, BoxFuture, CompiledAction};
pub use context::ActionContext;
pub use descriptor::{ModuleDescriptor, RawModule};
pub use tree::{ActionTree, Getter, GetterTree, ModuleTree, Mutation, MutationTree, State};
