use pagegen_codegen::composition::{Section, SectionWriter, Slot};

use super::REACT;
use crate::PageContext;

/// Open a `useEffect(() => {` block; close it with [`close_effect`].
fn open_effect(out: &mut SectionWriter) {
    out.import(REACT, "useEffect")
        .line("useEffect(() => {")
        .indent();
}

fn close_effect(out: &mut SectionWriter, dependencies: &[&str]) {
    out.uses_all(dependencies.iter().copied())
        .dedent()
        .line(&format!("}}, [{}]);", dependencies.join(", ")));
}

pub struct FetchOnMount;

impl Section<PageContext> for FetchOnMount {
    fn id(&self) -> &'static str {
        "fetch-effect"
    }

    fn slot(&self) -> Slot {
        Slot::Effects
    }

    fn render(&self, _ctx: &PageContext, out: &mut SectionWriter) {
        open_effect(out);
        out.uses("fetchData").line("fetchData();");
        close_effect(out, &[]);
    }
}

/// Recomputes the displayed rows whenever the data or a criterion changes.
pub struct DeriveRows;

impl Section<PageContext> for DeriveRows {
    fn id(&self) -> &'static str {
        "derive-rows"
    }

    fn slot(&self) -> Slot {
        Slot::Effects
    }

    fn include(&self, ctx: &PageContext) -> bool {
        ctx.derives_rows()
    }

    fn render(&self, ctx: &PageContext, out: &mut SectionWriter) {
        let mut dependencies = vec!["data"];

        open_effect(out);
        out.line("let rows = [...data];");

        if ctx.search() {
            dependencies.push("searchQuery");
            out.blank()
                .line("if (searchQuery) {")
                .indent()
                .line("const query = searchQuery.toLowerCase();")
                .line("rows = rows.filter((row) =>")
                .indent()
                .line("Object.values(row).some((value) =>")
                .indent()
                .line("String(value ?? '').toLowerCase().includes(query),")
                .dedent()
                .line("),")
                .dedent()
                .line(");")
                .dedent()
                .line("}");
        }

        if ctx.filtering() {
            dependencies.push("filters");
            out.blank()
                .line("Object.entries(filters).forEach(([key, value]) => {")
                .indent()
                .line("if (!value) return;")
                .line("const needle = String(value).toLowerCase();")
                .line("rows = rows.filter((row) =>")
                .indent()
                .line("String(row[key] ?? '').toLowerCase().includes(needle),")
                .dedent()
                .line(");")
                .dedent()
                .line("});");
        }

        if ctx.sorting() {
            dependencies.extend(["sortBy", "sortDirection"]);
            out.blank()
                .line("if (sortBy) {")
                .indent()
                .line("rows.sort((a, b) => {")
                .indent()
                .line("const left = a[sortBy];")
                .line("const right = b[sortBy];")
                .line("if (left === right) return 0;")
                .line("if (left == null) return 1;")
                .line("if (right == null) return -1;")
                .line("const order = left < right ? -1 : 1;")
                .line("return sortDirection === 'asc' ? order : -order;")
                .dedent()
                .line("});")
                .dedent()
                .line("}");
        }

        out.blank()
            .uses("setFilteredData")
            .line("setFilteredData(rows);");
        close_effect(out, &dependencies);
    }
}

/// Keeps the form state in step with the selected item and mode.
pub struct FormSync;

impl Section<PageContext> for FormSync {
    fn id(&self) -> &'static str {
        "form-effects"
    }

    fn slot(&self) -> Slot {
        Slot::Effects
    }

    fn include(&self, ctx: &PageContext) -> bool {
        ctx.crud()
    }

    fn render(&self, _ctx: &PageContext, out: &mut SectionWriter) {
        open_effect(out);
        out.uses("setFormErrors").line("setFormErrors({});");
        close_effect(out, &["formData"]);

        out.blank();
        open_effect(out);
        out.uses_all(["setFormData", "EMPTY_FORM"])
            .line("if (formMode === 'edit' && currentItem) {")
            .indent()
            .line("setFormData({ ...currentItem });")
            .dedent()
            .line("} else if (formMode === 'create') {")
            .indent()
            .line("setFormData(EMPTY_FORM);")
            .dedent()
            .line("}");
        close_effect(out, &["currentItem", "formMode"]);
    }
}
