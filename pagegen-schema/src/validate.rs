//! Validation of names that end up as JavaScript identifiers

use crate::{Error, Result};

/// JavaScript reserved words, including strict-mode and literal names.
/// Source: https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Lexical_grammar#keywords
pub(crate) const JS_RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "import", "in", "instanceof", "new", "null", "return", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
    // Strict mode
    "implements", "interface", "let", "package", "private", "protected", "public", "static",
    // Not keywords, but cannot be rebound in strict mode
    "arguments", "eval", "undefined", "NaN", "Infinity",
];

pub(crate) fn is_reserved_word(name: &str) -> bool {
    JS_RESERVED_WORDS.contains(&name)
}

/// Check a component name against `^[A-Za-z][A-Za-z0-9_]*$` and the reserved words.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn component_name_problem(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        Some(_) => return Some("name must start with a letter"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    if is_reserved_word(name) {
        return Some("name is a JavaScript reserved word");
    }

    None
}

/// Check a table name against `^[A-Za-z0-9_.-]+$`, excluding names made only of dots.
pub(crate) fn table_name_problem(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    {
        return Some("name must contain only letters, numbers, '_', '-', and '.'");
    }
    if name.chars().all(|c| c == '.') {
        return Some("name cannot consist only of dots");
    }
    None
}

/// Validate a table name before it is placed in the API URL.
pub fn validate_table_name(name: &str) -> Result<()> {
    match table_name_problem(name) {
        Some(reason) => Err(Error::invalid_table_name(name, reason)),
        None => Ok(()),
    }
}

/// Validate the name of a generated component.
pub fn validate_component_name(name: &str) -> Result<()> {
    match component_name_problem(name) {
        Some(reason) => Err(Error::invalid_component_name(name, reason)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_component_names() {
        assert!(component_name_problem("UsersTable").is_none());
        assert!(component_name_problem("Claims_2024").is_none());
        assert!(component_name_problem("x").is_none());
        // Lower-case is legal, the component-name-case lint reports it.
        assert!(component_name_problem("usersTable").is_none());
    }

    #[test]
    fn test_invalid_start_character() {
        assert!(component_name_problem("3Table").is_some());
        assert!(component_name_problem("_Table").is_some());
        assert!(component_name_problem("$Table").is_some());
        assert!(component_name_problem("").is_some());
    }

    #[test]
    fn test_invalid_characters() {
        assert!(component_name_problem("Users Table").is_some());
        assert!(component_name_problem("Users-Table").is_some());
        assert!(component_name_problem("Users$").is_some());
        assert!(component_name_problem("Usérs").is_some());
    }

    #[test]
    fn test_reserved_words() {
        assert!(component_name_problem("class").is_some());
        assert!(component_name_problem("default").is_some());
        assert!(component_name_problem("undefined").is_some());
        assert!(component_name_problem("Class").is_none());
    }

    #[test]
    fn test_table_names() {
        assert!(table_name_problem("users").is_none());
        assert!(table_name_problem("user_roles").is_none());
        assert!(table_name_problem("order-items").is_none());
        assert!(table_name_problem("sales.orders").is_none());
        assert!(table_name_problem("Claims2024").is_none());

        assert!(table_name_problem("").is_some());
        assert!(table_name_problem("user roles").is_some());
        assert!(table_name_problem("orders#1").is_some());
        assert!(table_name_problem("a/b").is_some());
        assert!(table_name_problem("..").is_some());
        assert!(table_name_problem("tablé").is_some());
    }

    #[test]
    fn test_validate_table_name_error() {
        let err = validate_table_name("user roles").unwrap_err();
        match *err {
            Error::InvalidTableName { name, reason } => {
                assert_eq!(name, "user roles");
                assert_eq!(reason, "name must contain only letters, numbers, '_', '-', and '.'");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_component_name_error() {
        let err = validate_component_name("3Table").unwrap_err();
        match *err {
            Error::InvalidComponentName { name, reason } => {
                assert_eq!(name, "3Table");
                assert_eq!(reason, "name must start with a letter");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
