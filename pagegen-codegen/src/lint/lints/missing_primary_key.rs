//! Lint for CRUD pages without a primary key.

use pagegen_schema::{GenerationOptions, TableMetadata};

use super::super::{Diagnostic, Lint};

/// Warns when CRUD is enabled but no selected column is a primary key.
///
/// Update and delete requests then address rows by `id`, which may not exist.
pub struct MissingPrimaryKeyLint;

impl Lint for MissingPrimaryKeyLint {
    fn name(&self) -> &'static str {
        "missing-primary-key"
    }

    fn description(&self) -> &'static str {
        "Require a selected primary key when CRUD is enabled"
    }

    fn check(
        &self,
        table: &TableMetadata,
        options: &GenerationOptions,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        if options.crud && table.primary_key().is_none() {
            diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    format!(
                        "CRUD is enabled but no selected column of '{}' is a primary key; rows will be addressed by 'id'",
                        table.table_name
                    ),
                )
                .at("fields"),
            );
        }
    }
}
