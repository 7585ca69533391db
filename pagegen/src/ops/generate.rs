//! Generate operation - component file and page index.

use std::path::Path;

use eyre::{Context, Result};
use pagegen_codegen::lint::run_lints;
use pagegen_core::{File, GeneratedFile, WriteResult, to_route_id};
use pagegen_react::GeneratedSource;
use pagegen_schema::{GenerationOptions, TableMetadata};
use serde::{Deserialize, Serialize};

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};

/// Page index read by the host app to build its menu and routes.
pub const INDEX_FILENAME: &str = "components.json";

/// One generated page in the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexEntry {
    pub route_id: String,
    pub component_name: String,
    pub page_title: String,
    /// File name relative to the output directory.
    pub file: String,
}

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the component and the index are written to.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Writes the generated page and records it in the page index.
pub fn generate(
    page: &GeneratedSource,
    table: &TableMetadata,
    options: &GenerationOptions,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let warnings = run_lints(table, options)
        .into_iter()
        .filter(|d| d.severity.is_warning())
        .map(|d| d.message)
        .collect();

    let result = if opts.dry_run {
        GenerationResult::Preview(PreviewFile {
            path: page.path(opts.output_dir).display().to_string(),
            content: File::new(page.path(opts.output_dir), page.render())
                .with_rules(page.rules())
                .content(),
        })
    } else {
        let component_result = page
            .write(opts.output_dir)
            .wrap_err("Failed to write component")?;
        let entry = IndexEntry {
            route_id: to_route_id(&table.table_name),
            component_name: page.component_name.clone(),
            page_title: page.page_title.clone(),
            file: page.file_name.clone(),
        };
        let index = opts.output_dir.join(INDEX_FILENAME);
        let index_result = upsert_index(&index, entry)?;
        tracing::info!(
            component = %page.component_name,
            index = %index.display(),
            "wrote page"
        );

        GenerationResult::Written(WrittenResult {
            component: page.path(opts.output_dir),
            component_result,
            index,
            index_result,
        })
    };

    Ok(GenerateReport {
        component_name: page.component_name.clone(),
        page_title: page.page_title.clone(),
        warnings,
        section_count: page.sections.len(),
        skipped: page.skipped.clone(),
        result,
    })
}

/// Add `entry` to the index at `path`, replacing any entry with the same route.
fn upsert_index(path: &Path, entry: IndexEntry) -> Result<WriteResult> {
    let mut entries: Vec<IndexEntry> = if path.exists() {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .wrap_err_with(|| format!("{} is not a page index", path.display()))?
    } else {
        Vec::new()
    };

    match entries.iter_mut().find(|e| e.route_id == entry.route_id) {
        Some(existing) => *existing = entry,
        None => entries.push(entry),
    }

    let mut content = serde_json::to_string_pretty(&entries).wrap_err("Failed to encode page index")?;
    content.push('\n');
    File::new(path, content).write()
}

#[cfg(test)]
mod tests {
    use pagegen_react::Generator;
    use pagegen_schema::FieldDescriptor;
    use tempfile::TempDir;

    use super::*;

    fn table(name: &str) -> TableMetadata {
        TableMetadata::new(
            name,
            vec![
                FieldDescriptor::new("id", "INT").primary_key(true),
                FieldDescriptor::new("name", "VARCHAR(100)").order(1),
            ],
        )
    }

    fn run(dir: &Path, table: &TableMetadata, options: &GenerationOptions) -> GenerateReport {
        let page = Generator::default().generate(table, options).unwrap();
        generate(
            &page,
            table,
            options,
            GenerateOptions {
                output_dir: dir,
                dry_run: false,
            },
        )
        .unwrap()
    }

    fn read_index(dir: &Path) -> Vec<IndexEntry> {
        let content = std::fs::read_to_string(dir.join(INDEX_FILENAME)).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    #[test]
    fn test_writes_component_and_index() {
        let temp = TempDir::new().unwrap();
        let options = GenerationOptions::default();

        let report = run(temp.path(), &table("user_roles"), &options);

        assert!(temp.path().join("UserRolesTable.jsx").exists());
        assert_eq!(
            read_index(temp.path()),
            [IndexEntry {
                route_id: "user-roles".to_string(),
                component_name: "UserRolesTable".to_string(),
                page_title: "UserRoles Management".to_string(),
                file: "UserRolesTable.jsx".to_string(),
            }]
        );
        assert!(matches!(report.result, GenerationResult::Written(_)));
    }

    #[test]
    fn test_index_upserts_by_route() {
        let temp = TempDir::new().unwrap();
        let options = GenerationOptions::default();

        run(temp.path(), &table("users"), &options);
        run(temp.path(), &table("orders"), &options);
        let renamed = GenerationOptions {
            page_title: Some("People".to_string()),
            ..GenerationOptions::default()
        };
        run(temp.path(), &table("users"), &renamed);

        let index = read_index(temp.path());
        assert_eq!(index.len(), 2);
        assert_eq!(index[0].route_id, "users");
        assert_eq!(index[0].page_title, "People");
        assert_eq!(index[1].route_id, "orders");
    }

    #[test]
    fn test_regenerating_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let options = GenerationOptions::default();

        run(temp.path(), &table("users"), &options);
        let report = run(temp.path(), &table("users"), &options);

        let GenerationResult::Written(written) = report.result else {
            panic!("expected written result");
        };
        assert_eq!(written.component_result, WriteResult::Unchanged);
        assert_eq!(written.index_result, WriteResult::Unchanged);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let table = table("users");
        let options = GenerationOptions::default();
        let page = Generator::default().generate(&table, &options).unwrap();

        let report = generate(
            &page,
            &table,
            &options,
            GenerateOptions {
                output_dir: temp.path(),
                dry_run: true,
            },
        )
        .unwrap();

        let GenerationResult::Preview(preview) = report.result else {
            panic!("expected preview");
        };
        assert!(preview.content.starts_with("// Generated by pagegen."));
        assert!(std::fs::read_dir(temp.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_corrupt_index_is_an_error() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(INDEX_FILENAME), "not json").unwrap();
        let table = table("users");
        let options = GenerationOptions::default();
        let page = Generator::default().generate(&table, &options).unwrap();

        let err = generate(
            &page,
            &table,
            &options,
            GenerateOptions {
                output_dir: temp.path(),
                dry_run: false,
            },
        )
        .unwrap_err();

        assert!(err.to_string().contains("is not a page index"));
    }
}
