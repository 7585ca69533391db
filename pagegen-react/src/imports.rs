use pagegen_codegen::{
    ImportCollector,
    builder::{CodeFragment, Renderable},
    composition::ImportRenderer,
};

use crate::ast::Import;

/// Renders collected imports as ES module `import` statements, one per module.
#[derive(Debug, Clone, Copy, Default)]
pub struct EsImports;

impl ImportRenderer for EsImports {
    fn render_imports(&self, imports: &ImportCollector) -> Vec<CodeFragment> {
        imports
            .iter()
            .flat_map(|(module, names)| {
                let mut import = Import::new(module);
                if let Some(default) = &names.default {
                    import = import.default(default);
                }
                for name in &names.named {
                    import = match &name.alias {
                        Some(alias) => import.named_as(&name.name, alias),
                        None => import.named(&name.name),
                    };
                }
                import.to_fragments()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pagegen_codegen::builder::CodeBuilder;

    use super::*;

    #[test]
    fn test_render_collected_imports() {
        let mut imports = ImportCollector::new();
        imports.add("react", "useState");
        imports.add_default("react", "React");
        imports.add_default("axios", "axios");
        imports.add_aliased("@mui/icons-material", "Refresh", "RefreshIcon");

        let mut code = CodeBuilder::js();
        code.emit(&EsImports.render_imports(&imports));
        assert_eq!(
            code.build(),
            "import React, { useState } from 'react';\nimport axios from 'axios';\nimport { Refresh as RefreshIcon } from '@mui/icons-material';\n"
        );
    }
}
