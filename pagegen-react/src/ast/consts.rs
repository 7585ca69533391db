//! `const` declarations.

use pagegen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::JsObject;

#[derive(Debug, Clone)]
enum ConstValue {
    Expr(String),
    Object(JsObject),
}

/// Builder for a module or block level `const`.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: ConstValue,
}

impl Const {
    /// A const bound to a single-line expression.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: ConstValue::Expr(value.into()),
        }
    }

    /// A const bound to an object literal, one property per line.
    pub fn object(name: impl Into<String>, value: JsObject) -> Self {
        Self {
            name: name.into(),
            value: ConstValue::Object(value),
        }
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::js();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match &self.value {
            ConstValue::Expr(value) => {
                vec![CodeFragment::line(format!("const {} = {};", self.name, value))]
            }
            ConstValue::Object(object) if object.is_empty() => {
                vec![CodeFragment::line(format!("const {} = {{}};", self.name))]
            }
            ConstValue::Object(object) => vec![CodeFragment::block(
                format!("const {} = {{", self.name),
                object.property_lines(),
                "};",
            )],
        }
    }
}
