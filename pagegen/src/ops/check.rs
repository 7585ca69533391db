//! Check operation - metadata validation and lints.

use std::path::Path;

use miette::Diagnostic as _;
use pagegen_codegen::lint::{Severity, run_lints};
use pagegen_react::{GenerateError, Generator};
use pagegen_schema::{GenerationOptions, TableMetadata};

use crate::reports::{CheckReport, CheckedPage};

fn error_message(error: &GenerateError) -> String {
    match error.help() {
        Some(help) => format!("{}\n  help: {}", error, help),
        None => error.to_string(),
    }
}

/// Execute the check operation.
///
/// Validates the page as `generate` would and collects lint diagnostics.
pub fn check(
    generator: &Generator,
    table: &TableMetadata,
    options: &GenerationOptions,
    metadata_path: &Path,
) -> CheckReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    let page = match generator.generate(table, options) {
        Ok(page) => Some(CheckedPage {
            fields: table
                .select()
                .map(|fields| {
                    fields
                        .iter()
                        .map(|f| format!("{} ({})", f.identifier, f.label))
                        .collect()
                })
                .unwrap_or_default(),
            component_name: page.component_name,
            page_title: page.page_title,
            file_name: page.file_name,
        }),
        Err(e) => {
            errors.push(error_message(&e));
            None
        }
    };

    for diag in run_lints(table, options) {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    tracing::debug!(
        errors = errors.len(),
        warnings = warnings.len(),
        "checked {}",
        metadata_path.display()
    );

    CheckReport {
        metadata_path: metadata_path.to_path_buf(),
        page,
        errors,
        warnings,
        infos,
    }
}

#[cfg(test)]
mod tests {
    use pagegen_schema::FieldDescriptor;

    use super::*;

    fn check_fields(fields: Vec<FieldDescriptor>, options: GenerationOptions) -> CheckReport {
        let table = TableMetadata::new("users", fields);
        check(&Generator::default(), &table, &options, Path::new("users.json"))
    }

    #[test]
    fn test_valid_metadata() {
        let report = check_fields(
            vec![
                FieldDescriptor::new("id", "INT").primary_key(true),
                FieldDescriptor::new("created_at", "TIMESTAMP").order(1),
            ],
            GenerationOptions::default(),
        );

        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
        let page = report.page.unwrap();
        assert_eq!(page.component_name, "UsersTable");
        assert_eq!(page.file_name, "UsersTable.jsx");
        assert_eq!(page.fields, ["id (Id)", "createdAt (Created At)"]);
    }

    #[test]
    fn test_validation_failure_is_an_error() {
        let report = check_fields(
            vec![FieldDescriptor::new("id", "INT").selected(false)],
            GenerationOptions::default(),
        );

        assert!(!report.is_valid());
        assert!(report.page.is_none());
    }

    #[test]
    fn test_lint_warnings_do_not_fail() {
        let report = check_fields(
            vec![FieldDescriptor::new("name", "VARCHAR(50)")],
            GenerationOptions::default(),
        );

        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("--> "));
    }
}
