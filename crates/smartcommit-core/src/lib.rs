//! Core library for Smartcommit.
//!
//! This crate provides the commit compiler: it runs the field extractors,
//! applies the mandatory-field policy and the subtask completion gate, and
//! rewrites the commit message file with the canonical smart commit.

mod branch;
mod compiler;
mod error;
mod gate;
mod store;

pub use branch::BranchPolicy;
pub use compiler::{CommitCompiler, FieldPolicy};
pub use error::{CompileError, CompileResult, MandatoryField};
pub use gate::{GateScope, SubtaskGate};
pub use store::CommitMessageStore;
