use pagegen_schema::{DomainType, GenerationOptions, PageNames, SelectedField};

/// Access name used for row identity when no primary key is selected.
pub const FALLBACK_PRIMARY_KEY: &str = "id";

/// Everything a section needs to render one page.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub names: PageNames,
    pub table_name: String,
    /// Selected fields in display order.
    pub fields: Vec<SelectedField>,
    /// Identifier of the selected primary key, or [`FALLBACK_PRIMARY_KEY`].
    pub primary_key: String,
    pub options: GenerationOptions,
    /// Collection endpoint, `{api_base}/{table_name}`.
    pub api_url: String,
}

impl PageContext {
    pub fn new(
        names: PageNames,
        table_name: &str,
        fields: Vec<SelectedField>,
        options: GenerationOptions,
        api_base: &str,
    ) -> Self {
        let primary_key = fields
            .iter()
            .find(|f| f.field.primary_key)
            .map(|f| f.identifier.clone())
            .unwrap_or_else(|| FALLBACK_PRIMARY_KEY.to_string());

        Self {
            names,
            table_name: table_name.to_string(),
            fields,
            primary_key,
            options,
            api_url: format!("{}/{}", api_base.trim_end_matches('/'), table_name),
        }
    }

    pub fn component_name(&self) -> &str {
        &self.names.component_name
    }

    pub fn crud(&self) -> bool {
        self.options.crud
    }

    /// Sorting is on and at least one column can be sorted.
    pub fn sorting(&self) -> bool {
        self.options.sorting && self.fields.iter().any(|f| f.field.sortable)
    }

    /// Filtering is on and at least one column can be filtered.
    pub fn filtering(&self) -> bool {
        self.options.filtering && self.fields.iter().any(|f| f.field.filterable)
    }

    pub fn search(&self) -> bool {
        self.options.search
    }

    pub fn pagination(&self) -> bool {
        self.options.pagination
    }

    pub fn refresh(&self) -> bool {
        self.options.refresh
    }

    /// Rows are searched, filtered or sorted before display.
    pub fn derives_rows(&self) -> bool {
        self.search() || self.filtering() || self.sorting()
    }

    pub fn has_temporal(&self) -> bool {
        self.fields.iter().any(|f| f.field.domain.is_temporal())
    }

    /// Rows the table displays: the derived list when one exists.
    pub fn rows_symbol(&self) -> &'static str {
        if self.derives_rows() { "filteredData" } else { "data" }
    }

    /// Expression that is truthy while the list is loading.
    pub fn fetching_expr(&self) -> &'static str {
        if self.crud() { "loading.fetch" } else { "loading" }
    }

    /// Fields that appear on the create/edit form.
    pub fn form_fields(&self) -> impl Iterator<Item = &SelectedField> {
        self.fields.iter().filter(|f| !f.field.primary_key)
    }

    /// Columns in the table, plus the actions column under CRUD.
    pub fn column_count(&self) -> usize {
        self.fields.len() + usize::from(self.crud())
    }

    /// Fields whose value is checked before saving.
    pub fn required_fields(&self) -> impl Iterator<Item = &SelectedField> {
        self.form_fields()
            .filter(|f| !f.field.nullable && f.field.domain != DomainType::Boolean)
    }
}

#[cfg(test)]
mod tests {
    use pagegen_schema::{FieldDescriptor, TableMetadata};

    use super::*;

    fn context(fields: Vec<FieldDescriptor>, options: GenerationOptions) -> PageContext {
        let fields = fields
            .into_iter()
            .zip(0..)
            .map(|(field, order)| field.order(order))
            .collect();
        let table = TableMetadata::new("users", fields);
        let names = options.resolve_names(&table.table_name).unwrap();
        PageContext::new(
            names,
            &table.table_name,
            table.select().unwrap(),
            options,
            "http://localhost:8080/api/",
        )
    }

    #[test]
    fn test_primary_key_and_url() {
        let ctx = context(
            vec![
                FieldDescriptor::new("user_id", "INT").primary_key(true),
                FieldDescriptor::new("name", "VARCHAR"),
            ],
            GenerationOptions::default(),
        );
        assert_eq!(ctx.primary_key, "userId");
        assert_eq!(ctx.api_url, "http://localhost:8080/api/users");
        assert_eq!(ctx.form_fields().count(), 1);
        assert_eq!(ctx.column_count(), 3);
    }

    #[test]
    fn test_primary_key_fallback() {
        let ctx = context(
            vec![FieldDescriptor::new("name", "VARCHAR")],
            GenerationOptions::default(),
        );
        assert_eq!(ctx.primary_key, FALLBACK_PRIMARY_KEY);
    }

    #[test]
    fn test_features_need_capable_columns() {
        let ctx = context(
            vec![
                FieldDescriptor::new("notes", "TEXT")
                    .sortable(false)
                    .filterable(false),
            ],
            GenerationOptions::default(),
        );
        assert!(!ctx.sorting());
        assert!(!ctx.filtering());
        assert!(ctx.derives_rows());
        assert_eq!(ctx.rows_symbol(), "filteredData");

        let mut options = GenerationOptions::minimal();
        options.sorting = true;
        let ctx = context(
            vec![FieldDescriptor::new("notes", "TEXT").sortable(false)],
            options,
        );
        assert!(!ctx.derives_rows());
        assert_eq!(ctx.rows_symbol(), "data");
        assert_eq!(ctx.fetching_expr(), "loading");
    }

    #[test]
    fn test_required_fields_skip_booleans_and_key() {
        let ctx = context(
            vec![
                FieldDescriptor::new("id", "INT")
                    .primary_key(true)
                    .nullable(false),
                FieldDescriptor::new("name", "VARCHAR").nullable(false),
                FieldDescriptor::new("active", "BOOLEAN").nullable(false),
                FieldDescriptor::new("notes", "TEXT"),
            ],
            GenerationOptions::default(),
        );
        let required: Vec<_> = ctx.required_fields().map(|f| f.identifier.as_str()).collect();
        assert_eq!(required, ["name"]);
    }
}
