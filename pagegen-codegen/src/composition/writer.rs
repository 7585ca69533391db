use std::collections::BTreeSet;

use crate::{
    ImportCollector,
    builder::{CodeBuilder, Indent, Renderable},
};

/// Output handle for one section.
///
/// Besides the code itself, a section reports every symbol it references
/// and every import it needs, so the composer can check them.
#[derive(Debug)]
pub struct SectionWriter {
    code: CodeBuilder,
    uses: BTreeSet<String>,
    imports: ImportCollector,
}

impl SectionWriter {
    pub fn new(indent: Indent, depth: usize) -> Self {
        Self {
            code: CodeBuilder::new(indent).at_level(depth),
            uses: BTreeSet::new(),
            imports: ImportCollector::new(),
        }
    }

    pub fn line(&mut self, s: &str) -> &mut Self {
        self.code.push_line(s);
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.code.push_blank();
        self
    }

    pub fn comment(&mut self, text: &str) -> &mut Self {
        self.code.push_comment(text);
        self
    }

    pub fn indent(&mut self) -> &mut Self {
        self.code.push_indent();
        self
    }

    pub fn dedent(&mut self) -> &mut Self {
        self.code.push_dedent();
        self
    }

    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        self.code.emit(node);
        self
    }

    /// Record a reference to a symbol declared elsewhere.
    pub fn uses(&mut self, symbol: &str) -> &mut Self {
        self.uses.insert(symbol.to_string());
        self
    }

    pub fn uses_all<'a>(&mut self, symbols: impl IntoIterator<Item = &'a str>) -> &mut Self {
        for symbol in symbols {
            self.uses(symbol);
        }
        self
    }

    /// Record a default import; the local name counts as used.
    pub fn import_default(&mut self, module: &str, local: &str) -> &mut Self {
        self.imports.add_default(module, local);
        self.uses(local)
    }

    /// Record a named import; the name counts as used.
    pub fn import(&mut self, module: &str, symbol: &str) -> &mut Self {
        self.imports.add(module, symbol);
        self.uses(symbol)
    }

    /// Record a renamed import; the alias counts as used.
    pub fn import_as(&mut self, module: &str, symbol: &str, alias: &str) -> &mut Self {
        self.imports.add_aliased(module, symbol, alias);
        self.uses(alias)
    }

    pub(crate) fn finish(self) -> (String, BTreeSet<String>, ImportCollector) {
        (self.code.build(), self.uses, self.imports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_records_uses_and_imports() {
        let mut out = SectionWriter::new(Indent::JS, 1);
        out.import("react", "useState")
            .uses("data")
            .line("const [page, setPage] = useState(0);");

        let (code, uses, imports) = out.finish();
        assert_eq!(code, "  const [page, setPage] = useState(0);\n");
        assert!(uses.contains("useState"));
        assert!(uses.contains("data"));
        assert!(imports.has_symbol("react", "useState"));
    }

    #[test]
    fn test_alias_is_the_used_name() {
        let mut out = SectionWriter::new(Indent::JS, 0);
        out.import_as("@mui/icons-material", "Refresh", "RefreshIcon");

        let (_, uses, _) = out.finish();
        assert!(uses.contains("RefreshIcon"));
        assert!(!uses.contains("Refresh"));
    }
}
