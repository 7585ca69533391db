//! React page generator for pagegen.
//!
//! Turns a table's column metadata and a set of feature toggles into the
//! source of one self-contained React component built on
//! [MUI](https://mui.com/): a data table with optional pagination, sorting,
//! search, per-column filters, refresh, and a create/edit/delete workflow
//! against a REST endpoint.
//!
//! The component is assembled from sections (see
//! [`pagegen_codegen::composition`]). Each feature contributes whole sections
//! or nothing, and composition fails rather than emit a reference to a symbol
//! that no included section declares.
//!
//! # Generated Output
//!
//! One `<ComponentName>.jsx` file importing from `react`, `axios`,
//! `@mui/material` and `@mui/icons-material`, with the component as its
//! default export. The caller writes it through [`GeneratedSource`]'s
//! [`GeneratedFile`](pagegen_core::GeneratedFile) implementation.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod context;
mod generator;
mod imports;
mod sections;
mod values;

pub mod ast;

pub use context::{FALLBACK_PRIMARY_KEY, PageContext};
pub use generator::{
    DEFAULT_API_BASE, DEFAULT_EXTENSION, GenerateError, GeneratedSource, Generator,
};
pub use imports::EsImports;
pub use sections::page_composer;
pub use values::{InputKind, MOCK_ROW_COUNT, default_for, js_string, mock_for};
