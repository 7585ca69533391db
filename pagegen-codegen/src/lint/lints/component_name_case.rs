//! Lint for component names that React would treat as HTML tags.

use pagegen_schema::{GenerationOptions, TableMetadata};

use super::super::{Diagnostic, Lint};

/// Warns when the component name does not start with an upper-case letter.
pub struct ComponentNameCaseLint;

impl Lint for ComponentNameCaseLint {
    fn name(&self) -> &'static str {
        "component-name-case"
    }

    fn description(&self) -> &'static str {
        "Component names should be PascalCase"
    }

    fn check(
        &self,
        table: &TableMetadata,
        options: &GenerationOptions,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        // An invalid name is reported by validation, not here.
        let Ok(names) = options.resolve_names(&table.table_name) else {
            return;
        };

        if !names.component_name.starts_with(|c: char| c.is_ascii_uppercase()) {
            diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    format!(
                        "component '{}' should start with an upper-case letter; JSX treats lower-case tags as HTML elements",
                        names.component_name
                    ),
                )
                .at("options.componentName"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use pagegen_schema::FieldDescriptor;

    use super::*;

    fn check(component_name: &str) -> Vec<Diagnostic> {
        let table = TableMetadata::new("users", vec![FieldDescriptor::new("id", "int")]);
        let options = GenerationOptions {
            component_name: Some(component_name.to_string()),
            ..Default::default()
        };
        let mut diagnostics = Vec::new();
        ComponentNameCaseLint.check(&table, &options, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_pascal_case_is_clean() {
        assert!(check("UsersTable").is_empty());
    }

    #[test]
    fn test_lower_case_warns() {
        let diagnostics = check("usersTable");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_deref(), Some("options.componentName"));
    }

    #[test]
    fn test_invalid_name_is_left_to_validation() {
        assert!(check("3users").is_empty());
    }
}
