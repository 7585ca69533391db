//! Section composition.
//!
//! A generated file is a fixed sequence of [`Slot`]s. Each [`Section`] fills
//! one slot, declares the symbols it introduces and records the symbols and
//! imports it uses. The [`Composer`] renders the included sections, derives
//! the import block from what was recorded, and rejects any composition in
//! which a reference has no declaration or a symbol is declared twice.

mod composer;
mod error;
mod section;
mod slot;
mod writer;

pub use composer::{Composer, Composition, RenderedSection};
pub use error::CompositionError;
pub use section::{ImportRenderer, Section};
pub use slot::Slot;
pub use writer::SectionWriter;
