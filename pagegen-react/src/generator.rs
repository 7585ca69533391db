//! Page generation entry point.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use pagegen_codegen::composition::{Composer, CompositionError};
use pagegen_core::{FileRules, GeneratedFile};
use pagegen_schema::{Config, GenerationOptions, TableMetadata};
use thiserror::Error;

use crate::{EsImports, PageContext, sections::page_composer};

pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";
pub const DEFAULT_EXTENSION: &str = "jsx";

/// Why a page could not be generated. Nothing is produced in either case.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(pagegen_schema::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Composition(#[from] CompositionError),
}

impl From<Box<pagegen_schema::Error>> for GenerateError {
    fn from(error: Box<pagegen_schema::Error>) -> Self {
        GenerateError::Validation(*error)
    }
}

/// Generates React list/CRUD page components from table metadata.
///
/// ```
/// use pagegen_react::Generator;
/// use pagegen_schema::{FieldDescriptor, GenerationOptions, TableMetadata};
///
/// let table = TableMetadata::new(
///     "users",
///     vec![
///         FieldDescriptor::new("id", "INT").primary_key(true),
///         FieldDescriptor::new("email", "VARCHAR(255)").order(1),
///     ],
/// );
/// let page = Generator::default()
///     .generate(&table, &GenerationOptions::default())
///     .unwrap();
///
/// assert_eq!(page.file_name, "UsersTable.jsx");
/// assert!(page.text.ends_with("export default UsersTable;\n"));
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    api_base: String,
    extension: String,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl Generator {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api.base_url.as_str()).with_extension(config.output.extension.as_str())
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Build the page context, validating everything the sections rely on.
    pub fn context(
        &self,
        table: &TableMetadata,
        options: &GenerationOptions,
    ) -> Result<PageContext, GenerateError> {
        let fields = table.select()?;
        let names = options.resolve_names(&table.table_name)?;
        Ok(PageContext::new(
            names,
            &table.table_name,
            fields,
            options.clone(),
            &self.api_base,
        ))
    }

    pub fn composer(&self) -> Composer<PageContext> {
        page_composer()
    }

    /// Generate the component source for `table`.
    pub fn generate(
        &self,
        table: &TableMetadata,
        options: &GenerationOptions,
    ) -> Result<GeneratedSource, GenerateError> {
        let span = tracing::info_span!("generate", table = %table.table_name);
        let _enter = span.enter();

        let ctx = self.context(table, options)?;
        tracing::debug!(
            component = %ctx.component_name(),
            fields = ctx.fields.len(),
            primary_key = %ctx.primary_key,
            "resolved page"
        );

        let composition = self.composer().compose(&ctx, &EsImports)?;
        for id in composition.section_ids() {
            tracing::debug!(section = id, "included section");
        }
        for id in &composition.skipped {
            tracing::debug!(section = *id, "skipped section");
        }

        let text = composition.text();
        tracing::info!(
            component = %ctx.component_name(),
            sections = composition.sections.len(),
            bytes = text.len(),
            "generated page"
        );

        Ok(GeneratedSource {
            file_name: format!("{}.{}", ctx.component_name(), self.extension),
            component_name: ctx.names.component_name,
            page_title: ctx.names.page_title,
            sections: composition.section_ids(),
            skipped: composition.skipped,
            skipped_declares: composition.skipped_declares.into_iter().collect(),
            text,
        })
    }
}

/// A generated page component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    pub component_name: String,
    pub page_title: String,
    /// `<componentName>.<extension>`
    pub file_name: String,
    /// Ids of the emitted sections, in file order.
    pub sections: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
    /// Symbols declared only by skipped sections, sorted.
    pub skipped_declares: Vec<String>,
    pub text: String,
}

impl GeneratedFile for GeneratedSource {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.file_name)
    }

    fn rules(&self) -> FileRules {
        FileRules {
            header: Some("// Generated by pagegen. Regenerating this page replaces manual edits.".to_string()),
            ..FileRules::default()
        }
    }

    fn render(&self) -> String {
        self.text.clone()
    }
}
