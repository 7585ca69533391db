//! ES module import statements.

use pagegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// Named imports beyond this count are broken over several lines.
const INLINE_NAMED_LIMIT: usize = 3;

/// Builder for `import ... from '...'` statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<(String, Option<String>)>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
        }
    }

    /// Bind the default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Add a named import.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push((name.into(), None));
        self
    }

    /// Add a named import bound under another local name (`Add as AddIcon`).
    pub fn named_as(mut self, name: impl Into<String>, alias: impl Into<String>) -> Self {
        self.named.push((name.into(), Some(alias.into())));
        self
    }

    fn specifiers(&self) -> Vec<String> {
        self.named
            .iter()
            .map(|(name, alias)| match alias {
                Some(alias) => format!("{} as {}", name, alias),
                None => name.clone(),
            })
            .collect()
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::js();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let from = format!("from '{}';", self.from);
        let specifiers = self.specifiers();

        let line = match (&self.default, specifiers.is_empty()) {
            (Some(default), true) => format!("import {} {}", default, from),
            (None, true) => format!("import '{}';", self.from),
            _ if specifiers.len() > INLINE_NAMED_LIMIT => {
                let header = match &self.default {
                    Some(default) => format!("import {}, {{", default),
                    None => "import {".to_string(),
                };
                let body = specifiers
                    .into_iter()
                    .map(|s| CodeFragment::line(format!("{},", s)))
                    .collect();
                return vec![CodeFragment::block(header, body, format!("}} {}", from))];
            }
            (Some(default), false) => {
                format!("import {}, {{ {} }} {}", default, specifiers.join(", "), from)
            }
            (None, false) => format!("import {{ {} }} {}", specifiers.join(", "), from),
        };
        vec![CodeFragment::line(line)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_import() {
        let import = Import::new("axios").default("axios").build();
        assert_eq!(import, "import axios from 'axios';\n");
    }

    #[test]
    fn test_default_and_named() {
        let import = Import::new("react")
            .default("React")
            .named("useEffect")
            .named("useState")
            .build();
        assert_eq!(
            import,
            "import React, { useEffect, useState } from 'react';\n"
        );
    }

    #[test]
    fn test_long_named_list_is_multiline() {
        let import = Import::new("@mui/icons-material")
            .named_as("Add", "AddIcon")
            .named_as("Delete", "DeleteIcon")
            .named_as("Edit", "EditIcon")
            .named_as("Refresh", "RefreshIcon")
            .build();
        assert_eq!(
            import,
            "import {\n  Add as AddIcon,\n  Delete as DeleteIcon,\n  Edit as EditIcon,\n  Refresh as RefreshIcon,\n} from '@mui/icons-material';\n"
        );
    }

    #[test]
    fn test_side_effect_import() {
        assert_eq!(Import::new("./page.css").build(), "import './page.css';\n");
    }
}
