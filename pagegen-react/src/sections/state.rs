use pagegen_codegen::composition::{Section, SectionWriter, Slot};

use super::{REACT, setter, state_pair};
use crate::{PageContext, ast::JsObject};

/// `const [name, setName] = useState(initial);`
fn use_state(out: &mut SectionWriter, name: &str, initial: &str) {
    out.import(REACT, "useState").line(&format!(
        "const [{}, {}] = useState({});",
        name,
        setter(name),
        initial
    ));
}

fn pairs(names: &[&str]) -> Vec<String> {
    names.iter().flat_map(|name| state_pair(name)).collect()
}

/// Loaded rows and the loading flag.
pub struct ListState;

impl Section<PageContext> for ListState {
    fn id(&self) -> &'static str {
        "state"
    }

    fn slot(&self) -> Slot {
        Slot::State
    }

    fn declares(&self, _ctx: &PageContext) -> Vec<String> {
        pairs(&["data", "loading"])
    }

    fn render(&self, ctx: &PageContext, out: &mut SectionWriter) {
        use_state(out, "data", "[]");
        if ctx.crud() {
            let loading = JsObject::new()
                .raw("fetch", "false")
                .raw("save", "false")
                .raw("delete", "false");
            use_state(out, "loading", &loading.inline());
        } else {
            use_state(out, "loading", "false");
        }
    }
}

pub struct PaginationState;

impl Section<PageContext> for PaginationState {
    fn id(&self) -> &'static str {
        "pagination-state"
    }

    fn slot(&self) -> Slot {
        Slot::State
    }

    fn include(&self, ctx: &PageContext) -> bool {
        ctx.pagination()
    }

    fn declares(&self, _ctx: &PageContext) -> Vec<String> {
        pairs(&["page", "rowsPerPage"])
    }

    fn render(&self, _ctx: &PageContext, out: &mut SectionWriter) {
        use_state(out, "page", "0");
        use_state(out, "rowsPerPage", "10");
    }
}

pub struct SortingState;

impl Section<PageContext> for SortingState {
    fn id(&self) -> &'static str {
        "sorting-state"
    }

    fn slot(&self) -> Slot {
        Slot::State
    }

    fn include(&self, ctx: &PageContext) -> bool {
        ctx.sorting()
    }

    fn declares(&self, _ctx: &PageContext) -> Vec<String> {
        pairs(&["sortBy", "sortDirection"])
    }

    fn render(&self, _ctx: &PageContext, out: &mut SectionWriter) {
        use_state(out, "sortBy", "''");
        use_state(out, "sortDirection", "'asc'");
    }
}

pub struct SearchState;

impl Section<PageContext> for SearchState {
    fn id(&self) -> &'static str {
        "search-state"
    }

    fn slot(&self) -> Slot {
        Slot::State
    }

    fn include(&self, ctx: &PageContext) -> bool {
        ctx.search()
    }

    fn declares(&self, _ctx: &PageContext) -> Vec<String> {
        pairs(&["searchQuery"])
    }

    fn render(&self, _ctx: &PageContext, out: &mut SectionWriter) {
        use_state(out, "searchQuery", "''");
    }
}

/// Per-column filter values keyed by field identifier.
pub struct FilterState;

impl Section<PageContext> for FilterState {
    fn id(&self) -> &'static str {
        "filter-state"
    }

    fn slot(&self) -> Slot {
        Slot::State
    }

    fn include(&self, ctx: &PageContext) -> bool {
        ctx.filtering()
    }

    fn declares(&self, _ctx: &PageContext) -> Vec<String> {
        pairs(&["filters"])
    }

    fn render(&self, _ctx: &PageContext, out: &mut SectionWriter) {
        use_state(out, "filters", "{}");
    }
}

/// Rows after search, filters and sorting.
pub struct DerivedState;

impl Section<PageContext> for DerivedState {
    fn id(&self) -> &'static str {
        "derived-state"
    }

    fn slot(&self) -> Slot {
        Slot::State
    }

    fn include(&self, ctx: &PageContext) -> bool {
        ctx.derives_rows()
    }

    fn declares(&self, _ctx: &PageContext) -> Vec<String> {
        pairs(&["filteredData"])
    }

    fn render(&self, _ctx: &PageContext, out: &mut SectionWriter) {
        use_state(out, "filteredData", "[]");
    }
}

/// Form, dialog and notification state.
pub struct CrudState;

impl Section<PageContext> for CrudState {
    fn id(&self) -> &'static str {
        "crud-state"
    }

    fn slot(&self) -> Slot {
        Slot::State
    }

    fn include(&self, ctx: &PageContext) -> bool {
        ctx.crud()
    }

    fn declares(&self, _ctx: &PageContext) -> Vec<String> {
        pairs(&[
            "formMode",
            "currentItem",
            "formData",
            "formErrors",
            "deleteDialogOpen",
            "itemToDelete",
            "notification",
        ])
    }

    fn render(&self, _ctx: &PageContext, out: &mut SectionWriter) {
        let notification = JsObject::new()
            .raw("open", "false")
            .string("message", "")
            .string("severity", "success");

        use_state(out, "formMode", "'list'");
        use_state(out, "currentItem", "null");
        out.uses("EMPTY_FORM");
        use_state(out, "formData", "EMPTY_FORM");
        use_state(out, "formErrors", "{}");
        use_state(out, "deleteDialogOpen", "false");
        use_state(out, "itemToDelete", "null");
        use_state(out, "notification", &notification.inline());
    }
}
