//! ES module export statements.

use pagegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for `export` statements.
#[derive(Debug, Clone)]
pub struct Export {
    default: Option<String>,
    named: Vec<String>,
}

impl Export {
    pub fn new() -> Self {
        Self {
            default: None,
            named: Vec::new(),
        }
    }

    /// Export as default.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Export a named item.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::js();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if !self.named.is_empty() {
            fragments.push(CodeFragment::line(format!(
                "export {{ {} }};",
                self.named.join(", ")
            )));
        }
        if let Some(default) = &self.default {
            fragments.push(CodeFragment::line(format!("export default {};", default)));
        }
        fragments
    }
}
