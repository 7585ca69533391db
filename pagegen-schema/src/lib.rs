// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod domain;
mod error;
mod options;
mod table;
mod validate;

pub use config::{ApiConfig, Config, OutputConfig};
pub use domain::{DomainType, is_large_text};
pub use error::{Error, Result};
pub use options::{GenerationOptions, PageNames};
pub use table::{DEFAULT_COLUMN_TYPE, FieldDescriptor, SelectedField, TableMetadata};
pub use validate::{validate_component_name, validate_table_name};
