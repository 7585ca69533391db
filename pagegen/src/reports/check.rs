//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from metadata validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the metadata file.
    pub metadata_path: PathBuf,
    /// Resolved page, when validation got far enough to name it.
    pub page: Option<CheckedPage>,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

/// What `generate` would produce for the checked metadata.
#[derive(Debug)]
pub struct CheckedPage {
    pub component_name: String,
    pub page_title: String,
    pub file_name: String,
    /// Selected fields as `identifier (label)`, in display order.
    pub fields: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.metadata_path.display()));
        if let Some(page) = &self.page {
            out.newline();
            out.key_value_indented("Component", &page.component_name);
            out.key_value_indented("Title", &page.page_title);
            out.key_value_indented("File", &page.file_name);
            out.newline();
            out.section(&format!(
                "  {} field{}",
                page.fields.len(),
                if page.fields.len() == 1 { "" } else { "s" }
            ));
            for field in &page.fields {
                out.list_item(field);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    fn report(errors: Vec<String>) -> CheckReport {
        CheckReport {
            metadata_path: PathBuf::from("users.json"),
            page: Some(CheckedPage {
                component_name: "UsersTable".to_string(),
                page_title: "Users Management".to_string(),
                file_name: "UsersTable.jsx".to_string(),
                fields: vec!["id (Id)".to_string()],
            }),
            errors,
            warnings: vec!["crud is on but no primary key is selected".to_string()],
            infos: Vec::new(),
        }
    }

    #[test]
    fn test_valid_report_lists_page() {
        let mut out = BufferOutput::default();
        report(Vec::new()).render(&mut out);

        let text = out.text();
        assert!(text.starts_with("warning: crud is on"));
        assert!(text.contains("✓ users.json is valid"));
        assert!(text.contains("  Component: UsersTable"));
        assert!(text.contains("  1 field:"));
    }

    #[test]
    fn test_invalid_report_skips_summary() {
        let mut out = BufferOutput::default();
        report(vec!["no fields are selected".to_string()]).render(&mut out);

        let text = out.text();
        assert!(text.starts_with("error: no fields are selected"));
        assert!(!text.contains("is valid"));
        assert!(!text.contains("Component"));
    }
}
