//! JavaScript object literals.

use pagegen_codegen::builder::CodeFragment;

use crate::values::js_string;

/// A property in an object literal.
#[derive(Debug, Clone)]
pub struct Property {
    pub key: String,
    pub value: String,
}

/// Builder for object literals.
///
/// Values are raw expressions; [`JsObject::string`] quotes and escapes for you.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with a string value (will be quoted).
    pub fn string(self, key: impl Into<String>, value: &str) -> Self {
        self.raw(key, js_string(value))
    }

    /// Add a property with a raw expression value (will not be quoted).
    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Conditionally add a raw property.
    pub fn raw_if(self, condition: bool, key: impl Into<String>, value: impl Into<String>) -> Self {
        if condition { self.raw(key, value) } else { self }
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Single-line form: `{ open: false, message: '' }`.
    pub fn inline(&self) -> String {
        if self.properties.is_empty() {
            return "{}".to_string();
        }
        let body: Vec<String> = self
            .properties
            .iter()
            .map(|p| format!("{}: {}", p.key, p.value))
            .collect();
        format!("{{ {} }}", body.join(", "))
    }

    /// One `key: value,` line per property, for use inside a block.
    pub fn property_lines(&self) -> Vec<CodeFragment> {
        self.properties
            .iter()
            .map(|p| CodeFragment::line(format!("{}: {},", p.key, p.value)))
            .collect()
    }
}
