//! Non-fatal checks over table metadata and generation options.

mod diagnostic;
mod lints;

pub use diagnostic::{Diagnostic, Severity};
pub use lints::{ComponentNameCaseLint, InertFilteringLint, LargeTextFilterLint, MissingPrimaryKeyLint};
use pagegen_schema::{GenerationOptions, TableMetadata};

/// A lint that checks a page definition for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A short description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the page definition and add any diagnostics.
    fn check(
        &self,
        table: &TableMetadata,
        options: &GenerationOptions,
        diagnostics: &mut Vec<Diagnostic>,
    );
}

/// The built-in lints, in the order they run.
pub fn default_lints() -> Vec<Box<dyn Lint>> {
    vec![
        Box::new(MissingPrimaryKeyLint),
        Box::new(ComponentNameCaseLint),
        Box::new(LargeTextFilterLint),
        Box::new(InertFilteringLint),
    ]
}

/// Run every built-in lint.
pub fn run_lints(table: &TableMetadata, options: &GenerationOptions) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for lint in default_lints() {
        lint.check(table, options, &mut diagnostics);
    }
    diagnostics
}

#[cfg(test)]
mod tests {
    use pagegen_schema::FieldDescriptor;

    use super::*;

    #[test]
    fn test_clean_definition_has_no_diagnostics() {
        let table = TableMetadata::new(
            "users",
            vec![
                FieldDescriptor::new("id", "int").primary_key(true),
                FieldDescriptor::new("email", "varchar(255)").order(1),
            ],
        );

        assert!(run_lints(&table, &GenerationOptions::default()).is_empty());
    }

    #[test]
    fn test_lint_names_are_unique() {
        let lints = default_lints();
        let mut names: Vec<_> = lints.iter().map(|l| l.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), lints.len());
    }
}
