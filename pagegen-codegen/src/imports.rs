//! Import collection.

use std::collections::BTreeSet;

use indexmap::IndexMap;

/// A named export, optionally renamed on import (`Search as SearchIcon`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImportedName {
    pub name: String,
    pub alias: Option<String>,
}

impl ImportedName {
    /// The name the importing module sees.
    pub fn local(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// Everything imported from one module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleImports {
    /// Local name bound to the module's default export.
    pub default: Option<String>,
    /// Named exports (sorted for deterministic output).
    pub named: BTreeSet<ImportedName>,
}

impl ModuleImports {
    /// Every local name this import statement binds.
    pub fn locals(&self) -> impl Iterator<Item = &str> {
        self.default
            .as_deref()
            .into_iter()
            .chain(self.named.iter().map(ImportedName::local))
    }
}

/// Tracks imports and deduplicates them.
///
/// Modules keep insertion order for deterministic output.
///
/// # Example
///
/// ```
/// use pagegen_codegen::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add_default("react", "React");
/// imports.add("react", "useState");
/// imports.add("@mui/material", "Table");
///
/// let modules: Vec<&str> = imports.iter().map(|(module, _)| module).collect();
/// assert_eq!(modules, ["react", "@mui/material"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    imports: IndexMap<String, ModuleImports>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.insert_named(module, symbol, None);
    }

    /// Add a named import bound to a different local name.
    pub fn add_aliased(&mut self, module: &str, symbol: &str, alias: &str) {
        self.insert_named(module, symbol, Some(alias));
    }

    fn insert_named(&mut self, module: &str, symbol: &str, alias: Option<&str>) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .named
            .insert(ImportedName {
                name: symbol.to_string(),
                alias: alias.map(str::to_string),
            });
    }

    /// Bind the module's default export to `local`. The first binding wins.
    pub fn add_default(&mut self, module: &str, local: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .default
            .get_or_insert_with(|| local.to_string());
    }

    /// Merge another collector into this one.
    pub fn merge(&mut self, other: &ImportCollector) {
        for (module, imports) in &other.imports {
            if let Some(local) = &imports.default {
                self.add_default(module, local);
            }
            for imported in &imports.named {
                self.insert_named(module, &imported.name, imported.alias.as_deref());
            }
        }
    }

    pub fn has_module(&self, module: &str) -> bool {
        self.imports.contains_key(module)
    }

    /// Check if a module's export `symbol` is imported, under any local name.
    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.imports
            .get(module)
            .is_some_and(|imports| imports.named.iter().any(|n| n.name == symbol))
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModuleImports)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every local name bound by any import, with the module it came from.
    pub fn locals(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .flat_map(|(module, imports)| imports.locals().map(move |local| (local, module)))
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_collector_basic() {
        let mut imports = ImportCollector::new();
        imports.add("react", "useState");
        imports.add("react", "useEffect");
        imports.add("react", "useState");
        imports.add("@mui/material", "Paper");

        assert!(imports.has_module("react"));
        assert!(imports.has_symbol("react", "useEffect"));
        assert!(!imports.has_symbol("react", "useMemo"));
        assert_eq!(imports.len(), 2);

        let (_, react) = imports.iter().next().unwrap();
        let named: Vec<_> = react.named.iter().map(ImportedName::local).collect();
        assert_eq!(named, ["useEffect", "useState"]);
    }

    #[test]
    fn test_first_default_wins() {
        let mut imports = ImportCollector::new();
        imports.add_default("react", "React");
        imports.add_default("react", "R");

        let (_, react) = imports.iter().next().unwrap();
        assert_eq!(react.default.as_deref(), Some("React"));
    }

    #[test]
    fn test_import_collector_merge() {
        let mut a = ImportCollector::new();
        a.add("react", "useState");

        let mut b = ImportCollector::new();
        b.add_default("react", "React");
        b.add_aliased("@mui/icons-material", "Refresh", "RefreshIcon");

        a.merge(&b);

        assert!(a.has_symbol("react", "useState"));
        assert!(a.has_symbol("@mui/icons-material", "Refresh"));
        let locals: Vec<_> = a.locals().map(|(local, _)| local).collect();
        assert_eq!(locals, ["React", "useState", "RefreshIcon"]);
    }
}
