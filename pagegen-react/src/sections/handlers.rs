use pagegen_codegen::composition::{Section, SectionWriter, Slot};

use crate::PageContext;

/// Single-statement arrow handler: `const name = (params) => { body };`
fn handler(out: &mut SectionWriter, name: &str, params: &str, body: &[&str]) {
    out.line(&format!("const {} = ({}) => {{", name, params)).indent();
    for line in body {
        out.line(line);
    }
    out.dedent().line("};");
}

pub struct RefreshHandler;

impl Section<PageContext> for RefreshHandler {
    fn id(&self) -> &'static str {
        "refresh-handler"
    }

    fn slot(&self) -> Slot {
        Slot::EventHandlers
    }

    fn include(&self, ctx: &PageContext) -> bool {
        ctx.refresh()
    }

    fn declares(&self, _ctx: &PageContext) -> Vec<String> {
        vec!["handleRefresh".to_string()]
    }

    fn render(&self, _ctx: &PageContext, out: &mut SectionWriter) {
        out.uses("fetchData");
        handler(out, "handleRefresh", "", &["fetchData();"]);
    }
}

pub struct PaginationHandlers;

impl Section<PageContext> for PaginationHandlers {
    fn id(&self) -> &'static str {
        "pagination-handlers"
    }

    fn slot(&self) -> Slot {
        Slot::EventHandlers
    }

    fn include(&self, ctx: &PageContext) -> bool {
        ctx.pagination()
    }

    fn declares(&self, _ctx: &PageContext) -> Vec<String> {
        vec![
            "handleChangePage".to_string(),
            "handleChangeRowsPerPage".to_string(),
        ]
    }

    fn render(&self, _ctx: &PageContext, out: &mut SectionWriter) {
        out.uses_all(["setPage", "setRowsPerPage"]);
        handler(out, "handleChangePage", "event, newPage", &["setPage(newPage);"]);
        out.blank();
        handler(
            out,
            "handleChangeRowsPerPage",
            "event",
            &[
                "setRowsPerPage(parseInt(event.target.value, 10));",
                "setPage(0);",
            ],
        );
    }
}

pub struct SortingHandlers;

impl Section<PageContext> for SortingHandlers {
    fn id(&self) -> &'static str {
        "sorting-handlers"
    }

    fn slot(&self) -> Slot {
        Slot::EventHandlers
    }

    fn include(&self, ctx: &PageContext) -> bool {
        ctx.sorting()
    }

    fn declares(&self, _ctx: &PageContext) -> Vec<String> {
        vec!["handleSort".to_string()]
    }

    fn render(&self, _ctx: &PageContext, out: &mut SectionWriter) {
        out.uses_all(["sortBy", "setSortBy", "sortDirection", "setSortDirection"])
            .line("const handleSort = (column) => {")
            .indent()
            .line("if (sortBy === column) {")
            .indent()
            .line("setSortDirection(sortDirection === 'asc' ? 'desc' : 'asc');")
            .dedent()
            .line("} else {")
            .indent()
            .line("setSortBy(column);")
            .line("setSortDirection('asc');")
            .dedent()
            .line("}")
            .dedent()
            .line("};");
    }
}

pub struct SearchHandler;

impl Section<PageContext> for SearchHandler {
    fn id(&self) -> &'static str {
        "search-handler"
    }

    fn slot(&self) -> Slot {
        Slot::EventHandlers
    }

    fn include(&self, ctx: &PageContext) -> bool {
        ctx.search()
    }

    fn declares(&self, _ctx: &PageContext) -> Vec<String> {
        vec!["handleSearchChange".to_string()]
    }

    fn render(&self, ctx: &PageContext, out: &mut SectionWriter) {
        out.uses("setSearchQuery");
        let mut body = vec!["setSearchQuery(event.target.value);"];
        if ctx.pagination() {
            out.uses("setPage");
            body.push("setPage(0);");
        }
        handler(out, "handleSearchChange", "event", &body);
    }
}

pub struct FilterHandler;

impl Section<PageContext> for FilterHandler {
    fn id(&self) -> &'static str {
        "filter-handler"
    }

    fn slot(&self) -> Slot {
        Slot::EventHandlers
    }

    fn include(&self, ctx: &PageContext) -> bool {
        ctx.filtering()
    }

    fn declares(&self, _ctx: &PageContext) -> Vec<String> {
        vec!["handleFilterChange".to_string()]
    }

    fn render(&self, ctx: &PageContext, out: &mut SectionWriter) {
        out.uses("setFilters");
        let mut body = vec!["setFilters((prev) => ({ ...prev, [key]: value }));"];
        if ctx.pagination() {
            out.uses("setPage");
            body.push("setPage(0);");
        }
        handler(out, "handleFilterChange", "key, value", &body);
    }
}

/// Form navigation, submission, deletion and notification handlers.
pub struct CrudHandlers;

const CRUD_HANDLERS: [&str; 9] = [
    "handleAdd",
    "handleEdit",
    "handleCancel",
    "handleInputChange",
    "handleSubmit",
    "handleDeleteClick",
    "handleDeleteConfirm",
    "handleDeleteCancel",
    "handleCloseNotification",
];

impl Section<PageContext> for CrudHandlers {
    fn id(&self) -> &'static str {
        "crud-handlers"
    }

    fn slot(&self) -> Slot {
        Slot::EventHandlers
    }

    fn include(&self, ctx: &PageContext) -> bool {
        ctx.crud()
    }

    fn declares(&self, _ctx: &PageContext) -> Vec<String> {
        CRUD_HANDLERS.iter().map(|s| s.to_string()).collect()
    }

    fn render(&self, _ctx: &PageContext, out: &mut SectionWriter) {
        out.uses_all([
            "setCurrentItem",
            "setFormMode",
            "setFormData",
            "formMode",
            "formData",
            "validateForm",
            "createItem",
            "updateItem",
            "deleteItem",
            "itemToDelete",
            "setItemToDelete",
            "setDeleteDialogOpen",
            "setNotification",
        ]);

        handler(out, "handleAdd", "", &["setCurrentItem(null);", "setFormMode('create');"]);
        out.blank();
        handler(out, "handleEdit", "item", &["setCurrentItem(item);", "setFormMode('edit');"]);
        out.blank();
        handler(out, "handleCancel", "", &["setFormMode('list');", "setCurrentItem(null);"]);
        out.blank();
        handler(
            out,
            "handleInputChange",
            "key, value",
            &["setFormData((prev) => ({ ...prev, [key]: value }));"],
        );
        out.blank()
            .line("const handleSubmit = async (event) => {")
            .indent()
            .line("event.preventDefault();")
            .line("if (!validateForm()) return;")
            .line("const saved =")
            .indent()
            .line("formMode === 'edit' ? await updateItem(formData) : await createItem(formData);")
            .dedent()
            .line("if (saved) handleCancel();")
            .dedent()
            .line("};");
        out.blank();
        handler(
            out,
            "handleDeleteClick",
            "item",
            &["setItemToDelete(item);", "setDeleteDialogOpen(true);"],
        );
        out.blank()
            .line("const handleDeleteConfirm = async () => {")
            .indent()
            .line("if (itemToDelete) {")
            .indent()
            .line("await deleteItem(itemToDelete);")
            .dedent()
            .line("}")
            .line("setDeleteDialogOpen(false);")
            .line("setItemToDelete(null);")
            .dedent()
            .line("};");
        out.blank();
        handler(
            out,
            "handleDeleteCancel",
            "",
            &["setDeleteDialogOpen(false);", "setItemToDelete(null);"],
        );
        out.blank();
        handler(
            out,
            "handleCloseNotification",
            "",
            &["setNotification((prev) => ({ ...prev, open: false }));"],
        );
    }
}
