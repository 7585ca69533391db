//! Per-field value tables: form defaults, sample rows and input kinds.

use pagegen_schema::{DomainType, FieldDescriptor};

/// Number of sample rows shown when the API cannot be reached.
pub const MOCK_ROW_COUNT: usize = 15;

/// Initial form value for a field, as a JavaScript expression.
pub fn default_for(field: &FieldDescriptor) -> &'static str {
    if field.primary_key {
        return "null";
    }
    match field.domain {
        DomainType::Integer | DomainType::Decimal => "null",
        DomainType::Boolean => "false",
        DomainType::Date | DomainType::DateTime => "null",
        DomainType::Text => "''",
    }
}

/// Sample value for row `index` of the fallback data, as a JavaScript expression.
pub fn mock_for(field: &FieldDescriptor) -> String {
    if field.primary_key {
        return "index + 1".to_string();
    }
    match field.domain {
        DomainType::Integer | DomainType::Decimal => "(index + 1) * 10".to_string(),
        DomainType::Date | DomainType::DateTime => {
            "new Date(Date.now() - index * 86400000).toISOString()".to_string()
        }
        DomainType::Boolean => "index % 2 === 0".to_string(),
        DomainType::Text => format!("`Sample {} ${{index + 1}}`", template_text(&field.name)),
    }
}

/// Form control used to edit a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Number,
    Switch,
    Date,
    DateTime,
    Multiline,
    Text,
}

impl InputKind {
    pub fn for_field(field: &FieldDescriptor) -> Self {
        match field.domain {
            DomainType::Integer | DomainType::Decimal => InputKind::Number,
            DomainType::Boolean => InputKind::Switch,
            DomainType::Date => InputKind::Date,
            DomainType::DateTime => InputKind::DateTime,
            DomainType::Text if field.is_large_text() => InputKind::Multiline,
            DomainType::Text => InputKind::Text,
        }
    }

    /// The `type` attribute of the text field, if it needs one.
    pub fn html_type(self) -> Option<&'static str> {
        match self {
            InputKind::Number => Some("number"),
            InputKind::Date => Some("date"),
            InputKind::DateTime => Some("datetime-local"),
            InputKind::Switch | InputKind::Multiline | InputKind::Text => None,
        }
    }
}

/// Single-quoted JavaScript string literal.
pub fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Escape text for the inside of a template literal.
fn template_text(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Text as a JSX child. Anything JSX would interpret is wrapped in a string
/// expression.
pub fn jsx_text(s: &str) -> String {
    let plain = s
        .chars()
        .all(|c| !matches!(c, '{' | '}' | '<' | '>' | '&' | '\n' | '\r'));
    if plain && s.trim() == s && !s.is_empty() {
        s.to_string()
    } else {
        format!("{{{}}}", js_string(s))
    }
}

/// A JSX attribute value for a string.
pub fn jsx_attr(s: &str) -> String {
    let plain = s
        .chars()
        .all(|c| !matches!(c, '"' | '&' | '\\' | '\n' | '\r'));
    if plain {
        format!("\"{}\"", s)
    } else {
        format!("{{{}}}", js_string(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, ty: &str) -> FieldDescriptor {
        FieldDescriptor::new(name, ty)
    }

    #[test]
    fn test_default_for() {
        assert_eq!(default_for(&field("id", "INT").primary_key(true)), "null");
        assert_eq!(default_for(&field("code", "VARCHAR(10)").primary_key(true)), "null");
        assert_eq!(default_for(&field("price", "DECIMAL(10,2)")), "null");
        assert_eq!(default_for(&field("active", "BOOLEAN")), "false");
        assert_eq!(default_for(&field("born", "DATE")), "null");
        assert_eq!(default_for(&field("name", "VARCHAR(50)")), "''");
    }

    #[test]
    fn test_mock_for() {
        assert_eq!(mock_for(&field("id", "BIGINT").primary_key(true)), "index + 1");
        assert_eq!(mock_for(&field("qty", "INT")), "(index + 1) * 10");
        assert_eq!(mock_for(&field("active", "BIT")), "index % 2 === 0");
        assert_eq!(
            mock_for(&field("created_at", "TIMESTAMP")),
            "new Date(Date.now() - index * 86400000).toISOString()"
        );
        assert_eq!(mock_for(&field("name", "TEXT")), "`Sample name ${index + 1}`");
    }

    #[test]
    fn test_mock_text_escapes_template() {
        assert_eq!(
            mock_for(&field("a`b${c}", "VARCHAR")),
            "`Sample a\\`b\\${c} ${index + 1}`"
        );
    }

    #[test]
    fn test_input_kind() {
        assert_eq!(InputKind::for_field(&field("n", "SMALLINT")), InputKind::Number);
        assert_eq!(InputKind::for_field(&field("b", "BOOL")), InputKind::Switch);
        assert_eq!(InputKind::for_field(&field("d", "DATE")), InputKind::Date);
        assert_eq!(InputKind::for_field(&field("t", "DATETIME")), InputKind::DateTime);
        assert_eq!(InputKind::for_field(&field("notes", "LONGTEXT")), InputKind::Multiline);
        assert_eq!(InputKind::for_field(&field("s", "CHAR(2)")), InputKind::Text);
        assert_eq!(InputKind::DateTime.html_type(), Some("datetime-local"));
        assert_eq!(InputKind::Switch.html_type(), None);
    }

    #[test]
    fn test_escaping() {
        assert_eq!(js_string("it's"), "'it\\'s'");
        assert_eq!(js_string("a\\b"), "'a\\\\b'");
        assert_eq!(jsx_text("Users Management"), "Users Management");
        assert_eq!(jsx_text("A <b> & {c}"), "{'A <b> & {c}'}");
        assert_eq!(jsx_attr("Created At"), "\"Created At\"");
        assert_eq!(jsx_attr("Say \"hi\""), "{'Say \"hi\"'}");
    }
}
