//! Generate command report data structures.

use std::path::PathBuf;

use pagegen_core::WriteResult;

use super::output::{Output, Report};

/// Report data from page generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub component_name: String,
    pub page_title: String,
    /// Lint warnings for the page definition.
    pub warnings: Vec<String>,
    /// Number of sections emitted.
    pub section_count: usize,
    /// Sections left out because their feature is off.
    pub skipped: Vec<&'static str>,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of page generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewFile),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub component: PathBuf,
    pub component_result: WriteResult,
    /// The page index the host app builds its menu from.
    pub index: PathBuf,
    pub index_result: WriteResult,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

fn file_line(path: &std::path::Path, result: WriteResult) -> String {
    match result {
        WriteResult::Written => path.display().to_string(),
        WriteResult::Unchanged => format!("{} (unchanged)", path.display()),
        WriteResult::Skipped => format!("{} (kept existing)", path.display()),
    }
}

impl GenerateReport {
    fn render_header(&self, out: &mut dyn Output) {
        out.preformatted(&format!("{} ({})", self.component_name, self.page_title));
        out.key_value_indented(
            "Sections",
            &format!(
                "{} emitted, {} skipped",
                self.section_count,
                self.skipped.len()
            ),
        );
        out.newline();
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        self.render_header(out);

        out.section("Files");
        out.added_item(&file_line(&written.component, written.component_result));
        out.added_item(&file_line(&written.index, written.index_result));
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewFile) {
        out.divider(&preview.path);
        out.preformatted(&preview.content);

        out.divider("Summary");
        self.render_header(out);
        if !self.skipped.is_empty() {
            out.section("Skipped sections");
            for id in &self.skipped {
                out.list_item(id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            component_name: "UsersTable".to_string(),
            page_title: "Users Management".to_string(),
            warnings: Vec::new(),
            section_count: 5,
            skipped: vec!["crud-state"],
            result,
        }
    }

    #[test]
    fn test_written_lists_files() {
        let mut out = BufferOutput::default();
        report(GenerationResult::Written(WrittenResult {
            component: PathBuf::from("out/UsersTable.jsx"),
            component_result: WriteResult::Written,
            index: PathBuf::from("out/components.json"),
            index_result: WriteResult::Unchanged,
        }))
        .render(&mut out);

        assert_eq!(
            out.lines,
            [
                "UsersTable (Users Management)",
                "  Sections: 5 emitted, 1 skipped",
                "",
                "Files:",
                "  + out/UsersTable.jsx",
                "  + out/components.json (unchanged)",
            ]
        );
    }

    #[test]
    fn test_preview_prints_source() {
        let mut out = BufferOutput::default();
        report(GenerationResult::Preview(PreviewFile {
            path: "out/UsersTable.jsx".to_string(),
            content: "export default UsersTable;".to_string(),
        }))
        .render(&mut out);

        assert_eq!(out.lines[0], "── out/UsersTable.jsx ──");
        assert_eq!(out.lines[1], "export default UsersTable;");
        assert!(out.lines.contains(&"  - crud-state".to_string()));
    }
}
