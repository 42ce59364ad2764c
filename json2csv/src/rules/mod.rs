//! Rule Store - Named conversion rules loaded from a JSON file
//!
//! A rules file is a JSON array of rule objects:
//!
//! ```json
//! [
//!   {
//!     "ruleName": "users",
//!     "ioMapping": [
//!       { "incoming": "id", "outgoing": "ID" },
//!       { "incoming": "name", "outgoing": "Name" }
//!     ],
//!     "targetUrlToken": "Bearer eyJhbGciOi..."
//!   }
//! ]
//! ```
//!
//! The store is loaded once and is read-only afterwards; it is passed
//! explicitly to whatever needs to look a rule up.

use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{RuleError, RuleResult};

/// One renaming pair: source field in the JSON record, header in the CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IoMappingPair {
    /// Field name in the incoming JSON record
    pub incoming: String,
    /// Column header in the outgoing CSV
    pub outgoing: String,
}

impl IoMappingPair {
    pub fn new(incoming: impl Into<String>, outgoing: impl Into<String>) -> Self {
        Self {
            incoming: incoming.into(),
            outgoing: outgoing.into(),
        }
    }
}

/// A named conversion rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Lookup key
    #[serde(rename = "ruleName")]
    pub name: String,

    /// Ordered column mapping; empty means "infer from the first record"
    #[serde(rename = "ioMapping", default, deserialize_with = "null_as_empty")]
    pub io_mapping: Vec<IoMappingPair>,

    /// Authorization header value for the source endpoint
    #[serde(rename = "targetUrlToken", default, skip_serializing_if = "Option::is_none")]
    pub target_token: Option<String>,
}

/// `"ioMapping": null` reads as an empty mapping
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<IoMappingPair>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<IoMappingPair>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Rule {
    /// Create a rule without mapping or token
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            io_mapping: Vec::new(),
            target_token: None,
        }
    }

    /// Append a mapping pair
    pub fn with_mapping(mut self, incoming: &str, outgoing: &str) -> Self {
        self.io_mapping.push(IoMappingPair::new(incoming, outgoing));
        self
    }

    /// Set the authorization token
    pub fn with_token(mut self, token: &str) -> Self {
        self.target_token = Some(token.to_string());
        self
    }

    /// Token to send, if any. Blank tokens count as absent.
    pub fn token(&self) -> Option<&str> {
        self.target_token.as_deref().filter(|t| !t.is_empty())
    }

    /// Whether columns come from the rule rather than from the data
    pub fn has_mapping(&self) -> bool {
        !self.io_mapping.is_empty()
    }
}

/// In-memory list of rules, in file order
#[derive(Debug, Clone, Default)]
pub struct RuleStore {
    rules: Vec<Rule>,
}

impl RuleStore {
    /// Create a store from already-built rules
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Parse a JSON array of rules
    pub fn from_bytes(bytes: &[u8]) -> RuleResult<Self> {
        let rules: Vec<Rule> = serde_json::from_slice(bytes)?;
        Ok(Self::new(rules))
    }

    /// Read and parse a rules file
    pub fn from_path(path: impl AsRef<Path>) -> RuleResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| RuleError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes)
    }

    /// Find a rule by exact, case-sensitive name.
    ///
    /// Duplicate names are allowed in the file; the first one wins.
    pub fn find(&self, name: &str) -> RuleResult<&Rule> {
        self.get(name)
            .ok_or_else(|| RuleError::NotFound(name.to_string()))
    }

    /// Same as [`RuleStore::find`] without the error
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// All rules in file order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rule names in file order
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const RULES: &str = r#"[
        {
            "ruleName": "users",
            "ioMapping": [
                {"incoming": "id", "outgoing": "ID"},
                {"incoming": "name", "outgoing": "Name"}
            ],
            "targetUrlToken": "Bearer abc"
        },
        {"ruleName": "raw"},
        {"ruleName": "users", "ioMapping": [{"incoming": "x", "outgoing": "X"}]}
    ]"#;

    #[test]
    fn test_load_rules() {
        let store = RuleStore::from_bytes(RULES.as_bytes()).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.names(), vec!["users", "raw", "users"]);

        let users = store.find("users").unwrap();
        assert_eq!(users.io_mapping[0], IoMappingPair::new("id", "ID"));
        assert_eq!(users.io_mapping[1], IoMappingPair::new("name", "Name"));
        assert_eq!(users.token(), Some("Bearer abc"));
    }

    #[test]
    fn test_optional_fields_default() {
        let store = RuleStore::from_bytes(RULES.as_bytes()).unwrap();
        let raw = store.find("raw").unwrap();

        assert!(raw.io_mapping.is_empty());
        assert!(!raw.has_mapping());
        assert_eq!(raw.token(), None);
    }

    #[test]
    fn test_null_mapping_is_empty() {
        let store = RuleStore::from_bytes(br#"[{"ruleName": "n", "ioMapping": null}]"#).unwrap();
        assert!(store.find("n").unwrap().io_mapping.is_empty());
    }

    #[test]
    fn test_blank_token_is_absent() {
        let rule = Rule::new("r").with_token("");
        assert_eq!(rule.token(), None);
    }

    #[test]
    fn test_first_duplicate_wins() {
        let store = RuleStore::from_bytes(RULES.as_bytes()).unwrap();
        let users = store.find("users").unwrap();
        assert_eq!(users.io_mapping.len(), 2);
        assert_eq!(users.io_mapping[0].outgoing, "ID");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let store = RuleStore::from_bytes(RULES.as_bytes()).unwrap();

        let err = store.find("Users").unwrap_err();
        assert!(matches!(err, RuleError::NotFound(ref n) if n == "Users"));
        assert!(store.get("USERS").is_none());
    }

    #[test]
    fn test_malformed_rules_rejected() {
        assert!(matches!(
            RuleStore::from_bytes(b"{not json"),
            Err(RuleError::Parse(_))
        ));
        // An object instead of an array
        assert!(RuleStore::from_bytes(br#"{"ruleName": "a"}"#).is_err());
        // Missing ruleName
        assert!(RuleStore::from_bytes(br#"[{"ioMapping": []}]"#).is_err());
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(RULES.as_bytes()).unwrap();

        let store = RuleStore::from_path(file.path()).unwrap();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = RuleStore::from_path(&path).unwrap_err();
        assert!(matches!(err, RuleError::Read { .. }));
    }
}
