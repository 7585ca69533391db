//! Built-in lints.

mod component_name_case;
mod filtering;
mod missing_primary_key;

pub use component_name_case::ComponentNameCaseLint;
pub use filtering::{InertFilteringLint, LargeTextFilterLint};
pub use missing_primary_key::MissingPrimaryKeyLint;
