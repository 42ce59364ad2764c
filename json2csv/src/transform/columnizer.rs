//! Record Columnizer
//!
//! Turns one JSON record into one CSV row following a [`FieldMapping`].

use serde_json::{Map, Value};

use super::mapping::FieldMapping;

/// One output line as ordered string cells
pub type Row = Vec<String>;

/// Text of a single JSON value as it appears in a CSV cell.
///
/// Null is the empty string. Numbers keep their source text. Nested
/// arrays and objects are written as compact JSON.
pub fn cell_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Extract the mapped fields of `record` in mapping order.
///
/// Missing and null fields both become `""`, so the row always has
/// exactly `mapping.len()` cells.
pub fn columnize(record: &Map<String, Value>, mapping: &FieldMapping) -> Row {
    let mut row = Row::with_capacity(mapping.len());
    for column in mapping {
        row.push(record.get(&column.incoming).map(cell_value).unwrap_or_default());
    }
    row
}
