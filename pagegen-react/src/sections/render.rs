use pagegen_codegen::composition::{Section, SectionWriter, Slot};
use pagegen_schema::{DomainType, SelectedField};

use super::{REACT, icon, mui};
use crate::{
    PageContext,
    values::{jsx_attr, jsx_text},
};

/// Rows per page the pagination control offers.
const ROWS_PER_PAGE_OPTIONS: &str = "[5, 10, 25, 50]";

/// The table view: toolbar, header, rows, pagination and CRUD overlays.
pub struct ListView;

impl Section<PageContext> for ListView {
    fn id(&self) -> &'static str {
        "render"
    }

    fn slot(&self) -> Slot {
        Slot::Render
    }

    fn declares(&self, _ctx: &PageContext) -> Vec<String> {
        vec!["visibleRows".to_string()]
    }

    fn render(&self, ctx: &PageContext, out: &mut SectionWriter) {
        let rows = ctx.rows_symbol();
        out.import_default(REACT, "React").uses(rows);

        if ctx.pagination() {
            out.uses_all(["page", "rowsPerPage"]).line(&format!(
                "const visibleRows = {rows}.slice(page * rowsPerPage, page * rowsPerPage + rowsPerPage);"
            ));
        } else {
            out.line(&format!("const visibleRows = {rows};"));
        }

        mui(out, "Paper");
        out.blank()
            .line("return (")
            .indent()
            .line("<Paper sx={{ width: '100%', overflow: 'hidden' }}>")
            .indent();

        toolbar(ctx, out);
        mui(out, "LinearProgress");
        out.uses("loading")
            .line(&format!("{{{} && <LinearProgress />}}", ctx.fetching_expr()));
        table(ctx, out);

        if ctx.pagination() {
            mui(out, "TablePagination");
            out.uses_all(["handleChangePage", "handleChangeRowsPerPage"])
                .line("<TablePagination")
                .indent()
                .line("component=\"div\"")
                .line(&format!("count={{{rows}.length}}"))
                .line("page={page}")
                .line("rowsPerPage={rowsPerPage}")
                .line(&format!("rowsPerPageOptions={{{}}}", ROWS_PER_PAGE_OPTIONS))
                .line("onPageChange={handleChangePage}")
                .line("onRowsPerPageChange={handleChangeRowsPerPage}")
                .dedent()
                .line("/>");
        }

        if ctx.crud() {
            delete_dialog(out);
            notification_snackbar(out);
        }

        out.dedent()
            .line("</Paper>")
            .dedent()
            .line(");");
    }
}

fn toolbar(ctx: &PageContext, out: &mut SectionWriter) {
    mui(out, "Toolbar");
    mui(out, "Typography");
    out.line("<Toolbar sx={{ gap: 2, flexWrap: 'wrap', py: 1 }}>")
        .indent()
        .line("<Typography variant=\"h6\" component=\"div\" sx={{ flexGrow: 1 }}>")
        .indent()
        .line(&jsx_text(&ctx.names.page_title))
        .dedent()
        .line("</Typography>");

    if ctx.search() {
        mui(out, "TextField");
        out.uses_all(["searchQuery", "handleSearchChange"])
            .line("<TextField")
            .indent()
            .line("size=\"small\"")
            .line("placeholder=\"Search...\"")
            .line("value={searchQuery}")
            .line("onChange={handleSearchChange}");
        start_adornment(out, "Search", "SearchIcon", "");
        out.dedent().line("/>");
    }

    if ctx.refresh() {
        mui(out, "Tooltip");
        mui(out, "IconButton");
        let refresh = icon(out, "Refresh", "RefreshIcon");
        out.uses_all(["handleRefresh", "loading"])
            .line("<Tooltip title=\"Refresh\">")
            .indent()
            .line("<span>")
            .indent()
            .line(&format!(
                "<IconButton onClick={{handleRefresh}} disabled={{{}}}>",
                ctx.fetching_expr()
            ))
            .indent()
            .line(&format!("<{} />", refresh))
            .dedent()
            .line("</IconButton>")
            .dedent()
            .line("</span>")
            .dedent()
            .line("</Tooltip>");
    }

    if ctx.crud() {
        mui(out, "Button");
        let add = icon(out, "Add", "AddIcon");
        out.uses("handleAdd")
            .line(&format!(
                "<Button variant=\"contained\" startIcon={{<{} />}} onClick={{handleAdd}}>",
                add
            ))
            .indent()
            .line("Add")
            .dedent()
            .line("</Button>");
    }

    out.dedent().line("</Toolbar>");
}

/// `InputProps` with a leading icon adornment.
fn start_adornment(out: &mut SectionWriter, name: &str, alias: &'static str, icon_props: &str) {
    mui(out, "InputAdornment");
    let alias = icon(out, name, alias);
    out.line("InputProps={{")
        .indent()
        .line("startAdornment: (")
        .indent()
        .line("<InputAdornment position=\"start\">")
        .indent()
        .line(&format!("<{}{} />", alias, icon_props))
        .dedent()
        .line("</InputAdornment>")
        .dedent()
        .line("),")
        .dedent()
        .line("}}");
}

fn table(ctx: &PageContext, out: &mut SectionWriter) {
    for component in ["TableContainer", "Table", "TableHead", "TableBody", "TableRow", "TableCell"] {
        mui(out, component);
    }

    out.line("<TableContainer>")
        .indent()
        .line("<Table size=\"small\">")
        .indent()
        .line("<TableHead>")
        .indent()
        .line("<TableRow>")
        .indent();
    for f in &ctx.fields {
        header_cell(ctx, out, f);
    }
    if ctx.crud() {
        out.line("<TableCell align=\"right\">Actions</TableCell>");
    }
    out.dedent().line("</TableRow>");
    if ctx.filtering() {
        filter_row(ctx, out);
    }
    out.dedent().line("</TableHead>");

    out.line("<TableBody>")
        .indent()
        .line("{visibleRows.map((row, index) => (")
        .indent()
        .line(&format!(
            "<TableRow hover key={{row.{} ?? index}}>",
            ctx.primary_key
        ))
        .indent();
    for f in &ctx.fields {
        body_cell(out, f);
    }
    if ctx.crud() {
        row_actions(out);
    }
    out.dedent()
        .line("</TableRow>")
        .dedent()
        .line("))}")
        .line("{visibleRows.length === 0 && (")
        .indent()
        .line("<TableRow>")
        .indent()
        .line(&format!(
            "<TableCell colSpan={{{}}} align=\"center\">",
            ctx.column_count()
        ))
        .indent()
        .line("No records found")
        .dedent()
        .line("</TableCell>")
        .dedent()
        .line("</TableRow>")
        .dedent()
        .line(")}")
        .dedent()
        .line("</TableBody>")
        .dedent()
        .line("</Table>")
        .dedent()
        .line("</TableContainer>");
}

fn header_cell(ctx: &PageContext, out: &mut SectionWriter, f: &SelectedField) {
    let label = jsx_text(&f.label);
    if !(ctx.sorting() && f.field.sortable) {
        out.line(&format!("<TableCell>{}</TableCell>", label));
        return;
    }

    mui(out, "TableSortLabel");
    let key = &f.identifier;
    out.uses_all(["sortBy", "sortDirection", "handleSort"])
        .line(&format!(
            "<TableCell sortDirection={{sortBy === '{key}' ? sortDirection : false}}>"
        ))
        .indent()
        .line("<TableSortLabel")
        .indent()
        .line(&format!("active={{sortBy === '{key}'}}"))
        .line(&format!("direction={{sortBy === '{key}' ? sortDirection : 'asc'}}"))
        .line(&format!("onClick={{() => handleSort('{key}')}}"))
        .dedent()
        .line(">")
        .indent()
        .line(&label)
        .dedent()
        .line("</TableSortLabel>")
        .dedent()
        .line("</TableCell>");
}

fn filter_row(ctx: &PageContext, out: &mut SectionWriter) {
    out.line("<TableRow>").indent();
    for f in &ctx.fields {
        if !f.field.filterable {
            out.line("<TableCell />");
            continue;
        }
        let key = &f.identifier;
        mui(out, "TextField");
        out.uses_all(["filters", "handleFilterChange"])
            .line("<TableCell>")
            .indent()
            .line("<TextField")
            .indent()
            .line("size=\"small\"")
            .line("variant=\"standard\"")
            .line(&format!("placeholder={}", jsx_attr(&format!("Filter {}", f.label))))
            .line(&format!("value={{filters.{key} ?? ''}}"))
            .line(&format!(
                "onChange={{(event) => handleFilterChange('{key}', event.target.value)}}"
            ));
        start_adornment(out, "FilterList", "FilterIcon", " fontSize=\"small\"");
        out.dedent()
            .line("/>")
            .dedent()
            .line("</TableCell>");
    }
    if ctx.crud() {
        out.line("<TableCell />");
    }
    out.dedent().line("</TableRow>");
}

fn body_cell(out: &mut SectionWriter, f: &SelectedField) {
    let key = &f.identifier;
    let value = match f.field.domain {
        DomainType::Boolean => format!("row.{key} ? 'Yes' : 'No'"),
        DomainType::Date => {
            out.uses("formatDate");
            format!("formatDate(row.{key})")
        }
        DomainType::DateTime => {
            out.uses("formatDate");
            format!("formatDate(row.{key}, true)")
        }
        DomainType::Integer | DomainType::Decimal | DomainType::Text => format!("row.{key}"),
    };
    out.line(&format!("<TableCell>{{{value}}}</TableCell>"));
}

fn row_actions(out: &mut SectionWriter) {
    mui(out, "Tooltip");
    mui(out, "IconButton");
    let edit = icon(out, "Edit", "EditIcon");
    let delete = icon(out, "Delete", "DeleteIcon");
    out.uses_all(["handleEdit", "handleDeleteClick"])
        .line("<TableCell align=\"right\">")
        .indent()
        .line("<Tooltip title=\"Edit\">")
        .indent()
        .line("<IconButton size=\"small\" onClick={() => handleEdit(row)}>")
        .indent()
        .line(&format!("<{} fontSize=\"small\" />", edit))
        .dedent()
        .line("</IconButton>")
        .dedent()
        .line("</Tooltip>")
        .line("<Tooltip title=\"Delete\">")
        .indent()
        .line("<IconButton size=\"small\" color=\"error\" onClick={() => handleDeleteClick(row)}>")
        .indent()
        .line(&format!("<{} fontSize=\"small\" />", delete))
        .dedent()
        .line("</IconButton>")
        .dedent()
        .line("</Tooltip>")
        .dedent()
        .line("</TableCell>");
}

fn delete_dialog(out: &mut SectionWriter) {
    for component in ["Dialog", "DialogTitle", "DialogContent", "DialogContentText", "DialogActions", "Button"] {
        mui(out, component);
    }
    out.uses_all([
        "deleteDialogOpen",
        "handleDeleteCancel",
        "handleDeleteConfirm",
        "loading",
    ])
    .line("<Dialog open={deleteDialogOpen} onClose={handleDeleteCancel}>")
    .indent()
    .line("<DialogTitle>Delete record</DialogTitle>")
    .line("<DialogContent>")
    .indent()
    .line("<DialogContentText>")
    .indent()
    .line("This record will be permanently deleted.")
    .dedent()
    .line("</DialogContentText>")
    .dedent()
    .line("</DialogContent>")
    .line("<DialogActions>")
    .indent()
    .line("<Button onClick={handleDeleteCancel}>Cancel</Button>")
    .line("<Button color=\"error\" onClick={handleDeleteConfirm} disabled={loading.delete}>")
    .indent()
    .line("Delete")
    .dedent()
    .line("</Button>")
    .dedent()
    .line("</DialogActions>")
    .dedent()
    .line("</Dialog>");
}

/// Snackbar showing the current notification. Rendered by both views.
pub(super) fn notification_snackbar(out: &mut SectionWriter) {
    mui(out, "Snackbar");
    mui(out, "Alert");
    out.uses_all(["notification", "handleCloseNotification"])
        .line("<Snackbar")
        .indent()
        .line("open={notification.open}")
        .line("autoHideDuration={4000}")
        .line("onClose={handleCloseNotification}")
        .line("anchorOrigin={{ vertical: 'bottom', horizontal: 'right' }}")
        .dedent()
        .line(">")
        .indent()
        .line("<Alert")
        .indent()
        .line("onClose={handleCloseNotification}")
        .line("severity={notification.severity}")
        .line("sx={{ width: '100%' }}")
        .dedent()
        .line(">")
        .indent()
        .line("{notification.message}")
        .dedent()
        .line("</Alert>")
        .dedent()
        .line("</Snackbar>");
}
