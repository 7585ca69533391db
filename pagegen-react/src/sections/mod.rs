//! The sections of a generated page.
//!
//! Every section is a unit struct implementing [`Section<PageContext>`]. The
//! include predicate is the only place a feature flag decides whether code
//! exists; inside a section, flags only pick between variants of code the
//! section always emits.

mod data_access;
mod declaration;
mod effects;
mod form;
mod handlers;
mod helpers;
mod render;
mod state;

use pagegen_codegen::{
    builder::Indent,
    composition::{Composer, SectionWriter},
};

use crate::PageContext;

pub(crate) const REACT: &str = "react";
pub(crate) const AXIOS: &str = "axios";
pub(crate) const MUI: &str = "@mui/material";
pub(crate) const ICONS: &str = "@mui/icons-material";

/// Composer holding every page section in registration order.
pub fn page_composer() -> Composer<PageContext> {
    Composer::new(Indent::JS)
        .with_section(declaration::DeclarationOpen)
        .with_section(state::ListState)
        .with_section(state::PaginationState)
        .with_section(state::SortingState)
        .with_section(state::SearchState)
        .with_section(state::FilterState)
        .with_section(state::DerivedState)
        .with_section(state::CrudState)
        .with_section(effects::FetchOnMount)
        .with_section(effects::DeriveRows)
        .with_section(effects::FormSync)
        .with_section(data_access::FetchData)
        .with_section(data_access::CrudRequests)
        .with_section(handlers::RefreshHandler)
        .with_section(handlers::PaginationHandlers)
        .with_section(handlers::SortingHandlers)
        .with_section(handlers::SearchHandler)
        .with_section(handlers::FilterHandler)
        .with_section(handlers::CrudHandlers)
        .with_section(helpers::FormatHelpers)
        .with_section(helpers::CrudHelpers)
        .with_section(form::FormView)
        .with_section(render::ListView)
        .with_section(declaration::DeclarationClose)
        .with_section(declaration::DefaultExport)
}

/// `setFoo` for `foo`.
pub(crate) fn setter(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => format!("set{}{}", first.to_ascii_uppercase(), chars.as_str()),
        None => "set".to_string(),
    }
}

/// Both names bound by a `useState` pair.
pub(crate) fn state_pair(name: &str) -> [String; 2] {
    [name.to_string(), setter(name)]
}

/// Record an MUI component import.
pub(crate) fn mui(out: &mut SectionWriter, component: &str) {
    out.import(MUI, component);
}

/// Record an icon import under its `...Icon` alias and return the alias.
pub(crate) fn icon(out: &mut SectionWriter, name: &str, alias: &'static str) -> &'static str {
    out.import_as(ICONS, name, alias);
    alias
}
