//! Language-agnostic building blocks for pagegen's generators.
//!
//! - [`builder`] - Code generation primitives (CodeBuilder, CodeFragment, etc.)
//! - [`composition`] - Slot-ordered sections checked against a dependency table
//! - [`ImportCollector`] - Import deduplication
//! - [`lint`] - Non-fatal checks over page definitions

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod builder;
pub mod composition;
mod imports;
pub mod lint;

pub use imports::{ImportCollector, ImportedName, ModuleImports};
