//! Core utilities shared across the pagegen workspace.
//!
//! Two concerns live here because every other crate needs them:
//! identifier derivation for column names, and the sink that writes
//! generated sources to disk.

mod file;
mod naming;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Naming
pub use naming::{to_identifier, to_label, to_pascal_case, to_route_id};
