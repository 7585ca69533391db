use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for pagegen-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(pagegen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse table metadata")]
    #[diagnostic(
        code(pagegen::metadata_parse_error),
        help("expected {{\"tableName\": ..., \"fields\": [...]}} or a bare array of columns")
    )]
    MetadataParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("table metadata has no table name")]
    #[diagnostic(
        code(pagegen::missing_table_name),
        help("a bare column array needs the table name passed explicitly")
    )]
    MissingTableName,

    #[error("invalid table name '{name}'")]
    #[diagnostic(
        code(pagegen::invalid_table_name),
        help(
            "{reason}. The table name becomes the API path segment, so it may contain only letters, numbers, '_', '-', and '.'."
        )
    )]
    InvalidTableName { name: String, reason: String },

    #[error("failed to parse config")]
    #[diagnostic(code(pagegen::config_parse_error))]
    ConfigParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(pagegen::invalid_config))]
    InvalidConfig {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid component name '{name}'")]
    #[diagnostic(
        code(pagegen::invalid_component_name),
        help(
            "{reason}. Component names start with a letter and contain only letters, numbers, and underscores."
        )
    )]
    InvalidComponentName { name: String, reason: String },

    #[error("no fields selected for table '{table}'")]
    #[diagnostic(
        code(pagegen::no_fields_selected),
        help("select at least one column to display")
    )]
    NoFieldsSelected { table: String },

    #[error("column '{name}' has no usable identifier")]
    #[diagnostic(
        code(pagegen::invalid_field_name),
        help("column names need at least one ASCII letter or digit")
    )]
    InvalidFieldName { name: String },

    #[error("columns '{first}' and '{second}' both map to identifier '{identifier}'")]
    #[diagnostic(
        code(pagegen::duplicate_identifier),
        help("deselect one of the columns or alias it in the metadata")
    )]
    DuplicateIdentifier {
        identifier: String,
        first: String,
        second: String,
    },

    #[error("columns '{first}' and '{second}' share display order {order}")]
    #[diagnostic(code(pagegen::duplicate_field_order))]
    DuplicateFieldOrder {
        order: u32,
        first: String,
        second: String,
    },
}

impl Error {
    /// Read failure for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a metadata parse error, pointing at serde_json's line/column.
    pub fn metadata_parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = offset_of(src, source.line(), source.column()).map(|at| SourceSpan::from((at, 1)));
        Box::new(Error::MetadataParse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a config parse error from a toml error with source context.
    pub fn config_parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a config validation error, labelling `key` when it can be found.
    pub fn invalid_config(
        message: impl Into<String>,
        key: &str,
        src: &str,
        filename: &str,
    ) -> Box<Self> {
        Box::new(Error::InvalidConfig {
            src: NamedSource::new(filename, src.to_string()),
            span: find_key_span(src, key),
            message: message.into(),
        })
    }

    pub fn invalid_table_name(name: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidTableName {
            name: name.into(),
            reason: reason.into(),
        })
    }

    pub fn invalid_component_name(name: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidComponentName {
            name: name.into(),
            reason: reason.into(),
        })
    }
}

/// Byte offset of a 1-based line/column pair.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let at = line_start + column.saturating_sub(1);
    (at < src.len()).then_some(at)
}

/// Find `key =` at the start of a line in a TOML document.
fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        if let Some(rest) = trimmed.strip_prefix(key) {
            if rest.trim_start().starts_with('=') {
                return Some(SourceSpan::from((offset + indent, key.len())));
            }
        }
        offset += line.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let src = "{\n  \"a\": 1,\n}";
        assert_eq!(offset_of(src, 1, 1), Some(0));
        assert_eq!(offset_of(src, 2, 3), Some(4));
        assert_eq!(offset_of(src, 0, 1), None);
        assert_eq!(offset_of(src, 9, 1), None);
    }

    #[test]
    fn test_find_key_span() {
        let src = "[output]\nextension = \"\"\n";
        let span = find_key_span(src, "extension").unwrap();
        assert_eq!(span.offset(), 9);
        assert_eq!(span.len(), 9);
        assert!(find_key_span(src, "dir").is_none());
    }
}
