use std::collections::{BTreeSet, HashMap};

use super::{CompositionError, ImportRenderer, Section, SectionWriter, Slot};
use crate::{
    ImportCollector,
    builder::{CodeBuilder, Indent},
};

/// Owner name recorded for symbols bound by imports.
const IMPORTS: &str = "imports";

/// A section after rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub id: &'static str,
    pub slot: Slot,
    pub code: String,
}

/// Result of composing a set of sections.
#[derive(Debug, Clone)]
pub struct Composition {
    /// Included sections in slot order, imports first.
    pub sections: Vec<RenderedSection>,
    /// Ids of sections whose predicate excluded them.
    pub skipped: Vec<&'static str>,
    /// Symbols only skipped sections declare. None of them may appear in the
    /// composed text.
    pub skipped_declares: BTreeSet<String>,
    pub imports: ImportCollector,
}

impl Composition {
    pub fn section_ids(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.id).collect()
    }

    /// Concatenate the sections, separating them with blank lines except
    /// directly inside the declaration.
    pub fn text(&self) -> String {
        let mut text = String::new();
        let mut prev: Option<Slot> = None;
        for section in &self.sections {
            if let Some(prev) = prev {
                if prev != Slot::DeclarationOpen && section.slot != Slot::DeclarationClose {
                    text.push('\n');
                }
            }
            text.push_str(&section.code);
            prev = Some(section.slot);
        }
        text
    }
}

/// Assembles sections into one closed program.
///
/// The composer owns the imports slot: it is rendered last, from the imports
/// the included sections recorded, and placed first.
pub struct Composer<C> {
    sections: Vec<Box<dyn Section<C>>>,
    indent: Indent,
}

impl<C> Composer<C> {
    pub fn new(indent: Indent) -> Self {
        Self {
            sections: Vec::new(),
            indent,
        }
    }

    pub fn with_section(mut self, section: impl Section<C> + 'static) -> Self {
        self.sections.push(Box::new(section));
        self
    }

    /// Render every included section and check the references between them.
    pub fn compose(
        &self,
        ctx: &C,
        import_renderer: &dyn ImportRenderer,
    ) -> Result<Composition, CompositionError> {
        let mut included: Vec<&dyn Section<C>> = Vec::new();
        let mut excluded: Vec<&dyn Section<C>> = Vec::new();
        for section in &self.sections {
            if section.include(ctx) {
                included.push(section.as_ref());
            } else {
                excluded.push(section.as_ref());
            }
        }
        included.sort_by_key(|section| section.slot());

        let mut declared: HashMap<String, String> = HashMap::new();
        for section in &included {
            for symbol in section.declares(ctx) {
                declare(&mut declared, symbol, section.id())?;
            }
        }

        let mut rendered = Vec::with_capacity(included.len() + 1);
        let mut uses: Vec<(&'static str, BTreeSet<String>)> = Vec::with_capacity(included.len());
        let mut imports = ImportCollector::new();
        for section in &included {
            let mut out = SectionWriter::new(self.indent, section.slot().depth());
            section.render(ctx, &mut out);
            let (code, section_uses, section_imports) = out.finish();

            imports.merge(&section_imports);
            uses.push((section.id(), section_uses));
            rendered.push(RenderedSection {
                id: section.id(),
                slot: section.slot(),
                code,
            });
        }

        for (local, _) in imports.locals() {
            declare(&mut declared, local.to_string(), IMPORTS)?;
        }

        for (section, symbols) in uses {
            if let Some(symbol) = symbols.into_iter().find(|s| !declared.contains_key(s)) {
                return Err(CompositionError::DanglingReference { section, symbol });
            }
        }

        let skipped_declares = excluded
            .iter()
            .flat_map(|section| section.declares(ctx))
            .filter(|symbol| !declared.contains_key(symbol))
            .collect();

        if !imports.is_empty() {
            let mut code = CodeBuilder::new(self.indent);
            code.emit(&import_renderer.render_imports(&imports));
            rendered.insert(
                0,
                RenderedSection {
                    id: IMPORTS,
                    slot: Slot::Imports,
                    code: code.build(),
                },
            );
        }

        Ok(Composition {
            sections: rendered,
            skipped: excluded.iter().map(|section| section.id()).collect(),
            skipped_declares,
            imports,
        })
    }
}

fn declare(
    declared: &mut HashMap<String, String>,
    symbol: String,
    owner: &str,
) -> Result<(), CompositionError> {
    if let Some(first) = declared.get(&symbol) {
        return Err(CompositionError::DuplicateDeclaration {
            symbol,
            first: first.clone(),
            second: owner.to_string(),
        });
    }
    declared.insert(symbol, owner.to_string());
    Ok(())
}
