use std::{collections::HashMap, path::Path};

use pagegen_core::{to_identifier, to_label};
use serde::{Deserialize, Serialize};

use crate::{
    DomainType, Error, Result,
    domain::{base_type, is_large_text},
    validate::validate_table_name,
};

/// Column type assumed when the metadata omits one.
pub const DEFAULT_COLUMN_TYPE: &str = "VARCHAR";

/// A column of the source table, normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: String,
    /// Upper-cased raw type, e.g. `VARCHAR(255)`.
    pub column_type: String,
    pub domain: DomainType,
    pub primary_key: bool,
    pub nullable: bool,
    pub selected: bool,
    /// Display position among selected fields.
    pub order: u32,
    pub sortable: bool,
    pub filterable: bool,
}

impl FieldDescriptor {
    /// A selected, nullable, sortable column at position 0.
    ///
    /// Large text columns start out not filterable.
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        let column_type = column_type.into().trim().to_ascii_uppercase();
        let column_type = if column_type.is_empty() {
            DEFAULT_COLUMN_TYPE.to_string()
        } else {
            column_type
        };

        Self {
            name: name.into(),
            domain: DomainType::classify(&column_type),
            filterable: !is_large_text(&column_type),
            column_type,
            primary_key: false,
            nullable: true,
            selected: true,
            order: 0,
            sortable: true,
        }
    }

    pub fn primary_key(mut self, primary_key: bool) -> Self {
        self.primary_key = primary_key;
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// The camelCase access name used in generated code.
    pub fn identifier(&self) -> String {
        to_identifier(&self.name)
    }

    /// Column heading shown to users.
    pub fn label(&self) -> String {
        to_label(&self.name)
    }

    /// Base type name without length or precision, e.g. `VARCHAR`.
    pub fn base_type(&self) -> String {
        base_type(&self.column_type)
    }

    /// Unbounded text or binary column.
    pub fn is_large_text(&self) -> bool {
        is_large_text(&self.column_type)
    }
}

/// A selected field paired with its derived names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedField {
    pub field: FieldDescriptor,
    pub identifier: String,
    pub label: String,
}

/// Column metadata for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableMetadata {
    pub table_name: String,
    pub fields: Vec<FieldDescriptor>,
}

/// A column as it appears in a metadata document. Everything but the name is optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawColumn {
    #[serde(alias = "column_name", alias = "columnName")]
    name: String,
    #[serde(rename = "type", alias = "columnType", alias = "column_type", alias = "dataType")]
    column_type: Option<String>,
    #[serde(alias = "primary_key", alias = "isPrimaryKey")]
    primary_key: Option<bool>,
    nullable: Option<bool>,
    selected: Option<bool>,
    order: Option<u32>,
    sortable: Option<bool>,
    filterable: Option<bool>,
}

impl RawColumn {
    fn normalize(self, index: usize) -> FieldDescriptor {
        let mut field = FieldDescriptor::new(self.name, self.column_type.unwrap_or_default());
        field.primary_key = self.primary_key.unwrap_or(false);
        field.nullable = self.nullable.unwrap_or(true);
        field.selected = self.selected.unwrap_or(true);
        field.order = self
            .order
            .unwrap_or_else(|| u32::try_from(index).unwrap_or(u32::MAX));
        field.sortable = self.sortable.unwrap_or(true);
        if let Some(filterable) = self.filterable {
            field.filterable = filterable;
        }
        field
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTable {
    #[serde(alias = "table_name", alias = "table")]
    table_name: Option<String>,
    #[serde(alias = "columns")]
    fields: Vec<RawColumn>,
}

impl TableMetadata {
    pub fn new(table_name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            table_name: table_name.into(),
            fields,
        }
    }

    /// Read and parse a metadata document from disk.
    pub fn open(path: impl AsRef<Path>, table_name: Option<&str>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&content, &path.display().to_string(), table_name)
    }

    /// Parse a metadata document.
    ///
    /// The document is either `{"tableName": ..., "fields": [...]}` or a bare
    /// column array. An explicit `table_name` wins over the document's.
    pub fn from_json(src: &str, filename: &str, table_name: Option<&str>) -> Result<Self> {
        let (document_name, columns) = if src.trim_start().starts_with('[') {
            let columns: Vec<RawColumn> =
                serde_json::from_str(src).map_err(|e| Error::metadata_parse(e, src, filename))?;
            (None, columns)
        } else {
            let table: RawTable =
                serde_json::from_str(src).map_err(|e| Error::metadata_parse(e, src, filename))?;
            (table.table_name, table.fields)
        };

        let table_name = table_name
            .map(str::to_string)
            .or(document_name)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| Box::new(Error::MissingTableName))?;
        validate_table_name(&table_name)?;

        let fields = columns
            .into_iter()
            .enumerate()
            .map(|(index, column)| column.normalize(index))
            .collect();

        Ok(Self { table_name, fields })
    }

    /// The first selected primary-key field, if any.
    pub fn primary_key(&self) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.selected && f.primary_key)
    }

    /// Selected fields in display order, with their identifiers.
    ///
    /// Fails when the table name cannot be used as a URL path segment, when
    /// nothing is selected, when two selected fields share an order, or when
    /// identifiers are empty or collide.
    pub fn select(&self) -> Result<Vec<SelectedField>> {
        validate_table_name(&self.table_name)?;

        let mut selected: Vec<&FieldDescriptor> = self.fields.iter().filter(|f| f.selected).collect();
        if selected.is_empty() {
            return Err(Box::new(Error::NoFieldsSelected {
                table: self.table_name.clone(),
            }));
        }
        selected.sort_by_key(|f| f.order);

        for pair in selected.windows(2) {
            if pair[0].order == pair[1].order {
                return Err(Box::new(Error::DuplicateFieldOrder {
                    order: pair[0].order,
                    first: pair[0].name.clone(),
                    second: pair[1].name.clone(),
                }));
            }
        }

        let mut seen: HashMap<String, &str> = HashMap::new();
        let mut fields = Vec::with_capacity(selected.len());
        for field in selected {
            let identifier = field.identifier();
            if identifier.is_empty() {
                return Err(Box::new(Error::InvalidFieldName {
                    name: field.name.clone(),
                }));
            }
            if let Some(first) = seen.insert(identifier.clone(), &field.name) {
                return Err(Box::new(Error::DuplicateIdentifier {
                    identifier,
                    first: first.to_string(),
                    second: field.name.clone(),
                }));
            }
            fields.push(SelectedField {
                field: field.clone(),
                label: field.label(),
                identifier,
            });
        }

        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USERS: &str = r#"{
  "tableName": "users",
  "fields": [
    { "name": "id", "type": "int", "primaryKey": true, "nullable": false },
    { "name": "email", "type": "varchar(255)", "nullable": false },
    { "name": "bio", "type": "text" },
    { "name": "created_at", "type": "timestamp", "order": 10 },
    { "name": "legacy_flag", "selected": false }
  ]
}"#;

    #[test]
    fn test_parse_table_document() {
        let table = TableMetadata::from_json(USERS, "users.json", None).unwrap();

        assert_eq!(table.table_name, "users");
        assert_eq!(table.fields.len(), 5);

        let id = &table.fields[0];
        assert!(id.primary_key);
        assert!(!id.nullable);
        assert_eq!(id.column_type, "INT");
        assert_eq!(id.domain, DomainType::Integer);
        assert_eq!(id.order, 0);
    }

    #[test]
    fn test_normalization_defaults() {
        let table = TableMetadata::from_json(USERS, "users.json", None).unwrap();

        let email = &table.fields[1];
        assert_eq!(email.column_type, "VARCHAR(255)");
        assert!(email.selected);
        assert!(email.sortable);
        assert!(email.filterable);
        assert_eq!(email.order, 1);

        let bio = &table.fields[2];
        assert!(bio.nullable);
        assert!(!bio.filterable);

        assert_eq!(table.fields[3].order, 10);

        let legacy = &table.fields[4];
        assert_eq!(legacy.column_type, DEFAULT_COLUMN_TYPE);
        assert!(!legacy.selected);
    }

    #[test]
    fn test_bare_array_needs_table_name() {
        let src = r#"[{ "name": "id" }]"#;

        let err = TableMetadata::from_json(src, "cols.json", None).unwrap_err();
        assert!(matches!(*err, Error::MissingTableName));

        let table = TableMetadata::from_json(src, "cols.json", Some("claims")).unwrap();
        assert_eq!(table.table_name, "claims");
    }

    #[test]
    fn test_explicit_table_name_wins() {
        let table = TableMetadata::from_json(USERS, "users.json", Some("people")).unwrap();
        assert_eq!(table.table_name, "people");
    }

    #[test]
    fn test_document_rejects_unsafe_table_name() {
        let src = r#"{"tableName": "user roles", "fields": [{"name": "id"}]}"#;
        let err = TableMetadata::from_json(src, "users.json", None).unwrap_err();
        assert!(matches!(*err, Error::InvalidTableName { ref name, .. } if name == "user roles"));

        let err = TableMetadata::from_json(USERS, "users.json", Some("orders#1")).unwrap_err();
        assert!(matches!(*err, Error::InvalidTableName { .. }));
    }

    #[test]
    fn test_select_rejects_unsafe_table_name() {
        let table = TableMetadata::new("a/b", vec![FieldDescriptor::new("id", "int")]);
        let err = table.select().unwrap_err();
        assert!(matches!(*err, Error::InvalidTableName { ref name, .. } if name == "a/b"));
    }

    #[test]
    fn test_select_punctuation_merges_identifiers() {
        let table = TableMetadata::new(
            "users",
            vec![
                FieldDescriptor::new("email", "varchar").order(0),
                FieldDescriptor::new("e.mail", "varchar").order(1),
            ],
        );

        let err = table.select().unwrap_err();
        assert!(matches!(*err, Error::DuplicateIdentifier { ref identifier, .. } if identifier == "email"));
    }

    #[test]
    fn test_parse_error_has_span() {
        let src = "{\n  \"tableName\": \"users\",\n  \"fields\": [ { \"name\": 1 } ]\n}";

        let err = TableMetadata::from_json(src, "bad.json", None).unwrap_err();
        match *err {
            Error::MetadataParse { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_select_sorts_by_order() {
        let table = TableMetadata::new(
            "orders",
            vec![
                FieldDescriptor::new("total", "decimal").order(2),
                FieldDescriptor::new("id", "int").primary_key(true).order(0),
                FieldDescriptor::new("placed_at", "date").order(1),
                FieldDescriptor::new("notes", "text").order(3).selected(false),
            ],
        );

        let fields = table.select().unwrap();
        let identifiers: Vec<_> = fields.iter().map(|f| f.identifier.as_str()).collect();
        assert_eq!(identifiers, ["id", "placedAt", "total"]);
        assert_eq!(fields[1].label, "Placed At");
    }

    #[test]
    fn test_select_nothing_selected() {
        let table = TableMetadata::new(
            "orders",
            vec![FieldDescriptor::new("id", "int").selected(false)],
        );

        let err = table.select().unwrap_err();
        assert!(matches!(*err, Error::NoFieldsSelected { ref table } if table == "orders"));
    }

    #[test]
    fn test_select_duplicate_identifier() {
        let table = TableMetadata::new(
            "users",
            vec![
                FieldDescriptor::new("created_at", "date").order(0),
                FieldDescriptor::new("createdAt", "date").order(1),
            ],
        );

        let err = table.select().unwrap_err();
        match *err {
            Error::DuplicateIdentifier {
                identifier,
                first,
                second,
            } => {
                assert_eq!(identifier, "createdAt");
                assert_eq!(first, "created_at");
                assert_eq!(second, "createdAt");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_select_duplicate_order() {
        let table = TableMetadata::new(
            "users",
            vec![
                FieldDescriptor::new("id", "int").order(1),
                FieldDescriptor::new("name", "varchar").order(1),
            ],
        );

        let err = table.select().unwrap_err();
        assert!(matches!(*err, Error::DuplicateFieldOrder { order: 1, .. }));
    }

    #[test]
    fn test_select_unusable_name() {
        let table = TableMetadata::new("users", vec![FieldDescriptor::new("???", "varchar")]);

        let err = table.select().unwrap_err();
        assert!(matches!(*err, Error::InvalidFieldName { .. }));
    }

    #[test]
    fn test_primary_key_ignores_unselected() {
        let table = TableMetadata::new(
            "users",
            vec![
                FieldDescriptor::new("id", "int").primary_key(true).selected(false),
                FieldDescriptor::new("name", "varchar").order(1),
            ],
        );
        assert!(table.primary_key().is_none());
    }
}
