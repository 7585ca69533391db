use pagegen_codegen::composition::{Section, SectionWriter, Slot};
use pagegen_schema::SelectedField;

use super::{REACT, icon, mui, render::notification_snackbar};
use crate::{
    PageContext,
    values::{InputKind, jsx_attr},
};

/// The create/edit form, shown instead of the table while a form is open.
pub struct FormView;

impl Section<PageContext> for FormView {
    fn id(&self) -> &'static str {
        "form-view"
    }

    fn slot(&self) -> Slot {
        Slot::Render
    }

    fn include(&self, ctx: &PageContext) -> bool {
        ctx.crud()
    }

    fn render(&self, ctx: &PageContext, out: &mut SectionWriter) {
        for component in ["Paper", "Typography", "Box", "Stack", "Button"] {
            mui(out, component);
        }
        let cancel = icon(out, "Cancel", "CancelIcon");
        let save = icon(out, "Save", "SaveIcon");

        out.import_default(REACT, "React")
            .uses_all(["formMode", "handleSubmit", "handleCancel", "loading"])
            .line("if (formMode !== 'list') {")
            .indent()
            .line("return (")
            .indent()
            .line("<>")
            .indent()
            .line("<Paper sx={{ p: 3 }}>")
            .indent()
            .line("<Typography variant=\"h6\" gutterBottom>")
            .indent()
            .line("{formMode === 'edit' ? 'Edit record' : 'New record'}")
            .dedent()
            .line("</Typography>")
            .line("<Box component=\"form\" onSubmit={handleSubmit} noValidate>")
            .indent()
            .line("<Stack spacing={2}>")
            .indent();

        for f in ctx.form_fields() {
            form_input(out, f);
        }

        out.dedent()
            .line("</Stack>")
            .line("<Box sx={{ mt: 3, display: 'flex', justifyContent: 'flex-end', gap: 1 }}>")
            .indent()
            .line(&format!(
                "<Button variant=\"outlined\" startIcon={{<{} />}} onClick={{handleCancel}}>",
                cancel
            ))
            .indent()
            .line("Cancel")
            .dedent()
            .line("</Button>")
            .line("<Button")
            .indent()
            .line("type=\"submit\"")
            .line("variant=\"contained\"")
            .line(&format!("startIcon={{<{} />}}", save))
            .line("disabled={loading.save}")
            .dedent()
            .line(">")
            .indent()
            .line("Save")
            .dedent()
            .line("</Button>")
            .dedent()
            .line("</Box>")
            .dedent()
            .line("</Box>")
            .dedent()
            .line("</Paper>");
        notification_snackbar(out);
        out.dedent()
            .line("</>")
            .dedent()
            .line(");")
            .dedent()
            .line("}");
    }
}

fn form_input(out: &mut SectionWriter, f: &SelectedField) {
    let key = &f.identifier;
    let label = jsx_attr(&f.label);
    out.uses_all(["formData", "formErrors", "handleInputChange"]);

    let kind = InputKind::for_field(&f.field);
    if kind == InputKind::Switch {
        mui(out, "FormControlLabel");
        mui(out, "Switch");
        out.line("<FormControlLabel")
            .indent()
            .line("control={")
            .indent()
            .line("<Switch")
            .indent()
            .line(&format!("checked={{Boolean(formData.{key})}}"))
            .line(&format!(
                "onChange={{(event) => handleInputChange('{key}', event.target.checked)}}"
            ))
            .dedent()
            .line("/>")
            .dedent()
            .line("}")
            .line(&format!("label={}", label))
            .dedent()
            .line("/>");
        return;
    }

    let (value, change) = match kind {
        InputKind::Number => (
            format!("formData.{key} ?? ''"),
            "event.target.value === '' ? null : Number(event.target.value)".to_string(),
        ),
        InputKind::Date => (
            format!("formData.{key} ? String(formData.{key}).slice(0, 10) : ''"),
            "event.target.value || null".to_string(),
        ),
        InputKind::DateTime => (
            format!("formData.{key} ? String(formData.{key}).slice(0, 16) : ''"),
            "event.target.value || null".to_string(),
        ),
        InputKind::Switch | InputKind::Multiline | InputKind::Text => (
            format!("formData.{key} ?? ''"),
            "event.target.value".to_string(),
        ),
    };

    mui(out, "TextField");
    out.line("<TextField").indent().line(&format!("label={}", label));
    if let Some(html_type) = kind.html_type() {
        out.line(&format!("type=\"{}\"", html_type));
    }
    out.line(&format!("value={{{value}}}"))
        .line(&format!(
            "onChange={{(event) => handleInputChange('{key}', {change})}}"
        ))
        .line(&format!("error={{Boolean(formErrors.{key})}}"))
        .line(&format!("helperText={{formErrors.{key}}}"));
    if matches!(kind, InputKind::Date | InputKind::DateTime) {
        out.line("InputLabelProps={{ shrink: true }}");
    }
    if kind == InputKind::Multiline {
        out.line("multiline").line("minRows={3}");
    }
    if !f.field.nullable {
        out.line("required");
    }
    out.line("fullWidth").dedent().line("/>");
}
