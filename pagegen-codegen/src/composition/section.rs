use super::{SectionWriter, Slot};
use crate::{ImportCollector, builder::CodeFragment};

/// One independently included piece of a generated file.
///
/// A section either renders whole or is skipped whole. Whatever it renders
/// may only reference symbols that an included section declares or that an
/// import binds.
pub trait Section<C> {
    /// Stable name, used in reports and composition errors.
    fn id(&self) -> &'static str;

    fn slot(&self) -> Slot;

    /// Whether the section is part of the output for `ctx`.
    fn include(&self, _ctx: &C) -> bool {
        true
    }

    /// Symbols this section brings into scope.
    fn declares(&self, _ctx: &C) -> Vec<String> {
        Vec::new()
    }

    fn render(&self, ctx: &C, out: &mut SectionWriter);
}

/// Renders the collected imports of a composition in the target language.
pub trait ImportRenderer {
    fn render_imports(&self, imports: &ImportCollector) -> Vec<CodeFragment>;
}
