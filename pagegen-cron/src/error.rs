use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum Error {
    #[error("malformed schedule expression '{expression}': {reason}")]
    #[diagnostic(
        code(pagegen::malformed_expression),
        help(
            "expected `second minute hour day-of-month month day-of-week [year]`, e.g. `0 30 21 ? * MON`"
        )
    )]
    MalformedExpression { expression: String, reason: String },

    #[error("{field} {value} is out of range ({min}..={max})")]
    #[diagnostic(code(pagegen::out_of_range))]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("unknown {kind} '{value}'")]
    #[diagnostic(code(pagegen::unknown_name))]
    UnknownName { kind: &'static str, value: String },

    #[error("{recurrence} schedules need {field}")]
    #[diagnostic(code(pagegen::missing_schedule_field))]
    MissingField {
        recurrence: &'static str,
        field: &'static str,
    },
}

impl Error {
    pub(crate) fn malformed(expression: &str, reason: impl Into<String>) -> Self {
        Error::MalformedExpression {
            expression: expression.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Error::UnknownName {
            kind,
            value: value.to_string(),
        }
    }
}

/// Check `value` against an inclusive range.
pub(crate) fn in_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<u32> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(Error::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
