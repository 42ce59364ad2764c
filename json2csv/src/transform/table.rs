//! Table Assembler
//!
//! Parses the fetched payload and produces the header row followed by one
//! row per record, in array order.
//!
//! ## Edge cases
//!
//! | Input                        | Rule mapping    | Result                 |
//! |------------------------------|-----------------|------------------------|
//! | `[]`                         | declared        | header only            |
//! | `[]`                         | none (inferred) | no rows at all         |
//! | first record is `{}`         | none (inferred) | no rows at all         |
//! | malformed JSON / not array   | any             | [`InputError`]         |
//! | element is not an object     | any             | [`InputError`]         |

use serde_json::{Map, Value};
use tracing::debug;

use super::columnizer::{columnize, Row};
use super::mapping::{resolve, FieldMapping};
use crate::error::{InputError, InputResult};
use crate::rules::Rule;

/// A JSON object from the input array
pub type Record = Map<String, Value>;

/// Progress of one assembly run. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyState {
    Idle,
    MappingPending,
    MappingResolved,
    Streaming,
    Done,
}

/// Header row followed by data rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// First row, if any
    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Data rows (everything after the header)
    pub fn records(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Header and data rows
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows, header included
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Name of a JSON value's type, for error messages
fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse a payload into its records.
///
/// The whole payload must be a JSON array of objects; anything else is
/// rejected rather than converted partially.
pub fn parse_records(bytes: &[u8]) -> InputResult<Vec<Record>> {
    let value: Value = serde_json::from_slice(bytes)?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(InputError::NotAnArray {
                found: json_type(&other),
            })
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            other => Err(InputError::NotAnObject {
                index,
                found: json_type(&other),
            }),
        })
        .collect()
}

/// Build the table for already-parsed records.
pub fn assemble_records(records: &[Record], rule: &Rule) -> Table {
    let mut state = AssemblyState::Idle;
    debug!(rule = %rule.name, records = records.len(), ?state, "assembling table");

    state = AssemblyState::MappingPending;
    debug!(?state, declared = rule.has_mapping(), "resolving mapping");

    let mapping: FieldMapping = match (FieldMapping::from_rule(rule), records.first()) {
        (Some(mapping), _) => mapping,
        (None, Some(first)) => resolve(rule, first),
        (None, None) => {
            state = AssemblyState::Done;
            debug!(?state, "no records and no declared mapping, emitting nothing");
            return Table::default();
        }
    };

    if mapping.is_empty() {
        state = AssemblyState::Done;
        debug!(?state, "first record has no fields to infer columns from, emitting nothing");
        return Table::default();
    }

    state = AssemblyState::MappingResolved;
    debug!(?state, columns = mapping.len(), "mapping resolved");

    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(mapping.headers());

    state = AssemblyState::Streaming;
    debug!(?state, "converting records");
    rows.extend(records.iter().map(|record| columnize(record, &mapping)));

    state = AssemblyState::Done;
    debug!(?state, rows = rows.len(), "table assembled");

    Table { rows }
}

/// Parse `bytes` and build the table for `rule`.
pub fn assemble(bytes: &[u8], rule: &Rule) -> InputResult<Table> {
    let records = parse_records(bytes)?;
    Ok(assemble_records(&records, rule))
}
