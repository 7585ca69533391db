use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// A source artifact that knows where it lives and how to render itself.
pub trait GeneratedFile {
    /// Path of the file under `base`.
    fn path(&self, base: &Path) -> PathBuf;

    /// Rules for writing this file.
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the full file content.
    fn render(&self) -> String;

    /// Write the file under `base` according to its rules.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        File::new(self.path(base), self.render())
            .with_rules(self.rules())
            .write()
    }
}

/// Outcome of a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// The file was created or its content replaced.
    Written,
    /// The file already held exactly this content.
    Unchanged,
    /// The file exists and the rules forbid overwriting it.
    Skipped,
}

/// How to treat a file that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Replace it (generated code).
    Always,
    /// Leave it alone (files the user is expected to edit).
    IfMissing,
}

/// Rules that determine how a file is written.
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
    /// Banner prepended to the content, one comment line.
    pub header: Option<String>,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: None,
        }
    }
}

/// A file to be written to disk.
#[derive(Debug)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a file that is always overwritten and has no banner.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Content as it will land on disk, banner included.
    pub fn content(&self) -> String {
        match &self.rules.header {
            Some(header) => format!("{}\n{}", header, self.content),
            None => self.content.clone(),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn write(&self) -> Result<WriteResult> {
        if self.exists() {
            if self.rules.overwrite == Overwrite::IfMissing {
                return Ok(WriteResult::Skipped);
            }
            let current = std::fs::read_to_string(&self.path)
                .wrap_err_with(|| format!("failed to read {}", self.path.display()))?;
            if current == self.content() {
                return Ok(WriteResult::Unchanged);
            }
        }

        write_file(&self.path, &self.content())?;
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Page;

    impl GeneratedFile for Page {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("generated").join("UsersTable.jsx")
        }

        fn render(&self) -> String {
            "export default UsersTable;\n".to_string()
        }
    }

    #[test]
    fn test_generated_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();

        let result = Page.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        let written = fs::read_to_string(temp.path().join("generated/UsersTable.jsx")).unwrap();
        assert_eq!(written, "export default UsersTable;\n");
    }

    #[test]
    fn test_rewrite_with_same_content_is_unchanged() {
        let temp = TempDir::new().unwrap();

        Page.write(temp.path()).unwrap();
        let result = Page.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Unchanged);
    }

    #[test]
    fn test_always_overwrites_different_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("page.jsx");
        fs::write(&path, "old").unwrap();

        let result = File::new(&path, "new").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("page.jsx");
        fs::write(&path, "hand edited").unwrap();

        let file = File::new(&path, "generated").with_rules(FileRules {
            overwrite: Overwrite::IfMissing,
            header: None,
        });

        assert_eq!(file.write().unwrap(), WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hand edited");
    }

    #[test]
    fn test_header_is_prepended() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("page.jsx");

        let file = File::new(&path, "const x = 1;\n").with_rules(FileRules {
            overwrite: Overwrite::Always,
            header: Some("// generated".to_string()),
        });
        file.write().unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "// generated\nconst x = 1;\n"
        );
    }
}
