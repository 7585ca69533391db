//! Lints for column filtering.

use pagegen_schema::{GenerationOptions, TableMetadata};

use super::super::{Diagnostic, Lint};

/// Warns about large text columns marked filterable.
pub struct LargeTextFilterLint;

impl Lint for LargeTextFilterLint {
    fn name(&self) -> &'static str {
        "large-text-filter"
    }

    fn description(&self) -> &'static str {
        "Large text and binary columns make poor filters"
    }

    fn check(
        &self,
        table: &TableMetadata,
        _options: &GenerationOptions,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        for field in table.fields.iter().filter(|f| f.selected) {
            if field.filterable && field.is_large_text() {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "column '{}' is {} but marked filterable",
                            field.name,
                            field.base_type()
                        ),
                    )
                    .at(format!("fields.{}", field.name)),
                );
            }
        }
    }
}

/// Notes when filtering is on but no selected column can be filtered.
pub struct InertFilteringLint;

impl Lint for InertFilteringLint {
    fn name(&self) -> &'static str {
        "inert-filtering"
    }

    fn description(&self) -> &'static str {
        "Filtering without filterable columns has no effect"
    }

    fn check(
        &self,
        table: &TableMetadata,
        options: &GenerationOptions,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let any_filterable = table.fields.iter().any(|f| f.selected && f.filterable);
        if options.filtering && !any_filterable {
            diagnostics.push(
                Diagnostic::info(
                    self.name(),
                    "filtering is enabled but no selected column is filterable; the filter row is omitted",
                )
                .at("options.filtering"),
            );
        }
    }
}
