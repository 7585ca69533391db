use pagegen_codegen::composition::{Section, SectionWriter, Slot};

use crate::{PageContext, values::js_string};

/// Date display for temporal columns.
pub struct FormatHelpers;

impl Section<PageContext> for FormatHelpers {
    fn id(&self) -> &'static str {
        "format-helpers"
    }

    fn slot(&self) -> Slot {
        Slot::Helpers
    }

    fn include(&self, ctx: &PageContext) -> bool {
        ctx.has_temporal()
    }

    fn declares(&self, _ctx: &PageContext) -> Vec<String> {
        vec!["formatDate".to_string()]
    }

    fn render(&self, _ctx: &PageContext, out: &mut SectionWriter) {
        out.line("const formatDate = (value, withTime = false) => {")
            .indent()
            .line("if (!value) return '';")
            .line("const date = new Date(value);")
            .line("if (Number.isNaN(date.getTime())) return String(value);")
            .line("return withTime ? date.toLocaleString() : date.toLocaleDateString();")
            .dedent()
            .line("};");
    }
}

/// Notification and form validation helpers.
pub struct CrudHelpers;

impl Section<PageContext> for CrudHelpers {
    fn id(&self) -> &'static str {
        "crud-helpers"
    }

    fn slot(&self) -> Slot {
        Slot::Helpers
    }

    fn include(&self, ctx: &PageContext) -> bool {
        ctx.crud()
    }

    fn declares(&self, _ctx: &PageContext) -> Vec<String> {
        vec!["showNotification".to_string(), "validateForm".to_string()]
    }

    fn render(&self, ctx: &PageContext, out: &mut SectionWriter) {
        out.uses_all(["setNotification", "formData", "setFormErrors"])
            .line("const showNotification = (message, severity) => {")
            .indent()
            .line("setNotification({ open: true, message, severity });")
            .dedent()
            .line("};");

        out.blank()
            .line("const validateForm = () => {")
            .indent()
            .line("const errors = {};");

        for f in ctx.required_fields() {
            let key = &f.identifier;
            out.line(&format!(
                "if (formData.{key} == null || formData.{key} === '') {{"
            ))
            .indent()
            .line(&format!(
                "errors.{key} = {};",
                js_string(&format!("{} is required", f.label))
            ))
            .dedent()
            .line("}");
        }

        for f in ctx
            .form_fields()
            .filter(|f| f.field.domain.is_numeric())
        {
            let key = &f.identifier;
            out.line(&format!(
                "if (formData.{key} != null && formData.{key} !== '' && Number.isNaN(Number(formData.{key}))) {{"
            ))
            .indent()
            .line(&format!(
                "errors.{key} = {};",
                js_string(&format!("{} must be a number", f.label))
            ))
            .dedent()
            .line("}");
        }

        out.line("setFormErrors(errors);")
            .line("return Object.keys(errors).length === 0;")
            .dedent()
            .line("};");
    }
}
