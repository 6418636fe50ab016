// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: MPL-2.0

use serde_json::Value;
use std::fmt;

pub const MODEL: &str = "product.product";
pub const FIELDS: &[&str] = &["name", "barcode"];

/// A field as Odoo returns it. Unset fields come back as `false`, so anything
/// that isn't a string is kept aside and only described when displayed.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Other(Value),
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Other(Value::Null)
    }
}

impl FieldValue {
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Other(value) => format!("(unexpected type: {})", kind(value)),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(serde::Deserialize)]
struct RawProduct {
    #[serde(default)]
    name: FieldValue,
    #[serde(default)]
    barcode: FieldValue,
}

/// A `product.product` record, already rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(from = "RawProduct")]
pub struct Product {
    pub name: String,
    pub barcode: String,
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        Self {
            name: raw.name.display(),
            barcode: raw.barcode.display(),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Product: {} - Barcode: {}", self.name, self.barcode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_fields_render_placeholder() {
        let products: Vec<Product> = serde_json::from_value(json!([
            {"id": 1, "name": "Widget", "barcode": "123"},
            {"id": 2, "name": false, "barcode": "456"},
            {"id": 3, "name": ["x"], "barcode": 42},
            {"id": 4},
        ]))
        .unwrap();
        let lines: Vec<String> = products.iter().map(|x| x.to_string()).collect();
        assert_eq!(
            lines,
            [
                "Product: Widget - Barcode: 123",
                "Product: (unexpected type: boolean) - Barcode: 456",
                "Product: (unexpected type: array) - Barcode: (unexpected type: number)",
                "Product: (unexpected type: null) - Barcode: (unexpected type: null)",
            ]
        );
    }

    #[test]
    fn empty_string_is_still_text() {
        let product: Product =
            serde_json::from_value(json!({"name": "", "barcode": null})).unwrap();
        assert_eq!(product.name, "");
        assert_eq!(product.barcode, "(unexpected type: null)");
    }
}
