use serde::Serialize;

/// Value domain of a column, derived from its database type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainType {
    Integer,
    Decimal,
    Boolean,
    Date,
    DateTime,
    Text,
}

const INTEGER_TYPES: &[&str] = &[
    "INT", "INTEGER", "BIGINT", "SMALLINT", "TINYINT", "MEDIUMINT", "INT2", "INT4", "INT8",
    "SERIAL", "SMALLSERIAL", "BIGSERIAL",
];

const DECIMAL_TYPES: &[&str] = &[
    "DECIMAL", "NUMERIC", "NUMBER", "FLOAT", "FLOAT4", "FLOAT8", "DOUBLE", "REAL", "MONEY",
];

const BOOLEAN_TYPES: &[&str] = &["BOOLEAN", "BOOL", "BIT"];

const DATETIME_TYPES: &[&str] = &[
    "DATETIME",
    "DATETIME2",
    "SMALLDATETIME",
    "TIMESTAMP",
    "TIMESTAMPTZ",
    "TIMESTAMP_TZ",
    "TIMESTAMP_NTZ",
    "TIMESTAMP_LTZ",
];

const LARGE_TEXT_TYPES: &[&str] = &["TEXT", "MEDIUMTEXT", "LONGTEXT", "BLOB", "CLOB"];

/// Upper-cased base name of a column type: `varchar(255)` -> `VARCHAR`,
/// `double precision` -> `DOUBLE`.
pub(crate) fn base_type(raw: &str) -> String {
    raw.split(|c: char| c == '(' || c.is_whitespace())
        .find(|part| !part.is_empty())
        .unwrap_or_default()
        .to_ascii_uppercase()
}

impl DomainType {
    /// Classify a raw column type, case-insensitively.
    pub fn classify(raw: &str) -> Self {
        let base = base_type(raw);
        let base = base.as_str();

        if INTEGER_TYPES.contains(&base) {
            DomainType::Integer
        } else if DECIMAL_TYPES.contains(&base) {
            DomainType::Decimal
        } else if BOOLEAN_TYPES.contains(&base) {
            DomainType::Boolean
        } else if base == "DATE" {
            DomainType::Date
        } else if DATETIME_TYPES.contains(&base) {
            DomainType::DateTime
        } else {
            DomainType::Text
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, DomainType::Integer | DomainType::Decimal)
    }

    /// Date or date-time.
    pub fn is_temporal(self) -> bool {
        matches!(self, DomainType::Date | DomainType::DateTime)
    }
}

/// Whether a raw column type holds unbounded text or binary data.
pub fn is_large_text(raw: &str) -> bool {
    LARGE_TEXT_TYPES.contains(&base_type(raw).as_str())
}
