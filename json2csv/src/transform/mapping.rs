//! Column Mapping Resolver
//!
//! Decides, once per conversion, which record fields become which CSV
//! columns and in what order.

use serde_json::{Map, Value};

use crate::rules::Rule;

/// One resolved column: read `incoming` from the record, label it `outgoing`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPair {
    pub incoming: String,
    pub outgoing: String,
}

/// Ordered list of columns used for one conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMapping {
    columns: Vec<ColumnPair>,
}

impl FieldMapping {
    /// Copy of the rule's declared mapping, or `None` when the rule has none.
    pub fn from_rule(rule: &Rule) -> Option<Self> {
        if !rule.has_mapping() {
            return None;
        }

        let columns = rule
            .io_mapping
            .iter()
            .map(|pair| ColumnPair {
                incoming: pair.incoming.clone(),
                outgoing: pair.outgoing.clone(),
            })
            .collect();

        Some(Self { columns })
    }

    /// One `(key, key)` column per record key, sorted by key.
    ///
    /// JSON object key order carries no meaning, so the columns are sorted
    /// to keep the output stable across runs.
    pub fn infer(sample: &Map<String, Value>) -> Self {
        let mut keys: Vec<&String> = sample.keys().collect();
        keys.sort();

        let columns = keys
            .into_iter()
            .map(|key| ColumnPair {
                incoming: key.clone(),
                outgoing: key.clone(),
            })
            .collect();

        Self { columns }
    }

    /// Header row
    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.outgoing.clone()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColumnPair> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<'a> IntoIterator for &'a FieldMapping {
    type Item = &'a ColumnPair;
    type IntoIter = std::slice::Iter<'a, ColumnPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

/// Resolve the mapping for a run.
///
/// A rule with a declared mapping wins and `sample` is ignored. Otherwise
/// the columns are the keys of `sample`. Callers resolve once and reuse the
/// result for every record, even when later records have other keys.
pub fn resolve(rule: &Rule, sample: &Map<String, Value>) -> FieldMapping {
    FieldMapping::from_rule(rule).unwrap_or_else(|| FieldMapping::infer(sample))
}
