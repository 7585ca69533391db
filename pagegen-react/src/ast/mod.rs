//! JavaScript syntax builders.
//!
//! Each builder produces [`CodeFragment`](pagegen_codegen::builder::CodeFragment)s,
//! so it can be emitted into any section writer at that section's indent.

mod consts;
mod exports;
mod imports;
mod objects;

pub use consts::Const;
pub use exports::Export;
pub use imports::Import;
pub use objects::{JsObject, Property};
