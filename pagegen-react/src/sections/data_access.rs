use pagegen_codegen::composition::{Section, SectionWriter, Slot};

use super::AXIOS;
use crate::{PageContext, values::js_string};

/// `setLoading` for one request kind of the CRUD loading object.
fn busy(kind: &str, value: bool) -> String {
    format!("setLoading((prev) => ({{ ...prev, {}: {} }}));", kind, value)
}

/// Loads the collection, falling back to sample rows when the request fails.
pub struct FetchData;

impl Section<PageContext> for FetchData {
    fn id(&self) -> &'static str {
        "data-access"
    }

    fn slot(&self) -> Slot {
        Slot::DataAccess
    }

    fn declares(&self, _ctx: &PageContext) -> Vec<String> {
        vec!["fetchData".to_string()]
    }

    fn render(&self, ctx: &PageContext, out: &mut SectionWriter) {
        let (start, finish) = if ctx.crud() {
            (busy("fetch", true), busy("fetch", false))
        } else {
            ("setLoading(true);".to_string(), "setLoading(false);".to_string())
        };

        out.import_default(AXIOS, "axios")
            .uses_all(["API_URL", "setData", "setLoading", "buildMockRows"])
            .line("const fetchData = async () => {")
            .indent()
            .line(&start)
            .line("try {")
            .indent()
            .line("const response = await axios.get(API_URL);")
            .line("setData(response.data);")
            .dedent()
            .line("} catch (error) {")
            .indent()
            .line(&format!(
                "console.error({}, error);",
                js_string(&format!("Failed to fetch {}:", ctx.table_name))
            ))
            .line("setData(buildMockRows());");
        if ctx.crud() {
            out.uses("showNotification").line(&format!(
                "showNotification({}, 'warning');",
                js_string("Could not reach the server; showing sample data")
            ));
        }
        out.dedent()
            .line("} finally {")
            .indent()
            .line(&finish)
            .dedent()
            .line("}")
            .dedent()
            .line("};");
    }
}

/// Create, update and delete requests. Each resolves to whether it succeeded.
pub struct CrudRequests;

struct Request<'a> {
    name: &'a str,
    loading: &'a str,
    call: String,
    on_success: Vec<String>,
    success: &'a str,
    failure: &'a str,
}

fn render_request(out: &mut SectionWriter, request: Request<'_>) {
    out.line(&format!("const {} = async (item) => {{", request.name))
        .indent()
        .line(&busy(request.loading, true))
        .line("try {")
        .indent()
        .line(&request.call);
    for line in &request.on_success {
        out.line(line);
    }
    out.line(&format!("showNotification({}, 'success');", js_string(request.success)))
        .line("return true;")
        .dedent()
        .line("} catch (error) {")
        .indent()
        .line(&format!(
            "console.error({}, error);",
            js_string(&format!("{}:", request.failure))
        ))
        .line(&format!("showNotification({}, 'error');", js_string(request.failure)))
        .line("return false;")
        .dedent()
        .line("} finally {")
        .indent()
        .line(&busy(request.loading, false))
        .dedent()
        .line("}")
        .dedent()
        .line("};");
}

impl Section<PageContext> for CrudRequests {
    fn id(&self) -> &'static str {
        "crud-data-access"
    }

    fn slot(&self) -> Slot {
        Slot::DataAccess
    }

    fn include(&self, ctx: &PageContext) -> bool {
        ctx.crud()
    }

    fn declares(&self, _ctx: &PageContext) -> Vec<String> {
        vec![
            "createItem".to_string(),
            "updateItem".to_string(),
            "deleteItem".to_string(),
        ]
    }

    fn render(&self, ctx: &PageContext, out: &mut SectionWriter) {
        let pk = &ctx.primary_key;
        let item_url = format!("`${{API_URL}}/${{item.{}}}`", pk);

        out.import_default(AXIOS, "axios")
            .uses_all(["API_URL", "setData", "setLoading", "showNotification"]);

        render_request(
            out,
            Request {
                name: "createItem",
                loading: "save",
                call: "const response = await axios.post(API_URL, item);".to_string(),
                on_success: vec!["setData((prev) => [...prev, response.data]);".to_string()],
                success: "Record created",
                failure: "Failed to create record",
            },
        );
        out.blank();
        render_request(
            out,
            Request {
                name: "updateItem",
                loading: "save",
                call: format!("const response = await axios.put({}, item);", item_url),
                on_success: vec![format!(
                    "setData((prev) => prev.map((row) => (row.{pk} === item.{pk} ? response.data : row)));"
                )],
                success: "Record updated",
                failure: "Failed to update record",
            },
        );
        let mut on_delete = vec![format!(
            "setData((prev) => prev.filter((row) => row.{pk} !== item.{pk}));"
        )];
        if ctx.pagination() {
            // The deleted row was on screen, so the displayed list shrinks by one.
            let rows = ctx.rows_symbol();
            out.uses_all(["setPage", "rowsPerPage", rows]);
            on_delete.push(format!(
                "setPage((current) => Math.max(0, Math.min(current, Math.ceil(({rows}.length - 1) / rowsPerPage) - 1)));"
            ));
        }

        out.blank();
        render_request(
            out,
            Request {
                name: "deleteItem",
                loading: "delete",
                call: format!("await axios.delete({});", item_url),
                on_success: on_delete,
                success: "Record deleted",
                failure: "Failed to delete record",
            },
        );
    }
}
