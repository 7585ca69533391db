use pagegen_codegen::{
    builder::CodeFragment,
    composition::{Section, SectionWriter, Slot},
};

use crate::{
    PageContext,
    ast::{Const, Export, JsObject},
    values::{MOCK_ROW_COUNT, default_for, js_string, mock_for},
};

/// Module-level constants and the opening of the component.
pub struct DeclarationOpen;

impl Section<PageContext> for DeclarationOpen {
    fn id(&self) -> &'static str {
        "declaration-open"
    }

    fn slot(&self) -> Slot {
        Slot::DeclarationOpen
    }

    fn declares(&self, ctx: &PageContext) -> Vec<String> {
        let mut symbols = vec![
            ctx.component_name().to_string(),
            "API_URL".to_string(),
            "buildMockRows".to_string(),
        ];
        if ctx.crud() {
            symbols.push("EMPTY_FORM".to_string());
        }
        symbols
    }

    fn render(&self, ctx: &PageContext, out: &mut SectionWriter) {
        out.emit(&Const::new("API_URL", js_string(&ctx.api_url)));

        if ctx.crud() {
            let empty_form = ctx
                .fields
                .iter()
                .fold(JsObject::new(), |object, f| {
                    object.raw(f.identifier.as_str(), default_for(&f.field))
                });
            out.blank().emit(&Const::object("EMPTY_FORM", empty_form));
        }

        let mock_row = ctx
            .fields
            .iter()
            .fold(JsObject::new(), |object, f| {
                object.raw(f.identifier.as_str(), mock_for(&f.field))
            });
        out.blank()
            .line("const buildMockRows = () =>")
            .indent()
            .emit(&vec![CodeFragment::block(
                format!(
                    "Array.from({{ length: {} }}, (_, index) => ({{",
                    MOCK_ROW_COUNT
                ),
                mock_row.property_lines(),
                "}));",
            )])
            .dedent();

        out.blank()
            .line(&format!("const {} = () => {{", ctx.component_name()));
    }
}

pub struct DeclarationClose;

impl Section<PageContext> for DeclarationClose {
    fn id(&self) -> &'static str {
        "declaration-close"
    }

    fn slot(&self) -> Slot {
        Slot::DeclarationClose
    }

    fn render(&self, _ctx: &PageContext, out: &mut SectionWriter) {
        out.line("};");
    }
}

pub struct DefaultExport;

impl Section<PageContext> for DefaultExport {
    fn id(&self) -> &'static str {
        "export"
    }

    fn slot(&self) -> Slot {
        Slot::Export
    }

    fn render(&self, ctx: &PageContext, out: &mut SectionWriter) {
        out.uses(ctx.component_name())
            .emit(&Export::new().default(ctx.component_name()));
    }
}
