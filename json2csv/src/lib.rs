//! # json2csv - Remote JSON array to CSV conversion
//!
//! Fetches a JSON array of objects over HTTP and writes it as CSV, using a
//! named rule to select, rename and order the columns.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ rules.json  │────▶│  RuleStore  │────▶│  Transform  │────▶│  CSV (CRLF) │
//! │  + URL      │     │  + Fetcher  │     │ (map/table) │     │   stdout    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use json2csv::{assemble, Rule};
//!
//! let rule = Rule::new("users").with_mapping("id", "ID").with_mapping("name", "Name");
//! let table = assemble(br#"[{"id":1,"name":"Alice"}]"#, &rule).unwrap();
//! assert_eq!(table.header().unwrap(), &vec!["ID", "Name"]);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per failure domain
//! - [`rules`] - Rule definitions and lookup
//! - [`transform`] - Mapping resolution, columnizing, table assembly, pipeline
//! - [`fetch`] - HTTP source fetch
//! - [`output`] - CSV writer
//! - [`logging`] - `tracing` setup

// Core modules
pub mod error;
pub mod rules;

// Transformation
pub mod transform;

// I/O collaborators
pub mod fetch;
pub mod output;

pub mod logging;

#[cfg(test)]
mod test_support;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ConvertError, ConvertResult, FetchError, InputError, OutputError, RuleError,
};

// =============================================================================
// Re-exports - Rules
// =============================================================================

pub use rules::{IoMappingPair, Rule, RuleStore};

// =============================================================================
// Re-exports - Transform
// =============================================================================

pub use transform::{
    assemble,
    assemble_records,
    cell_value,
    columnize,
    parse_records,
    resolve,
    ColumnPair,
    FieldMapping,
    Record,
    Row,
    Table,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{convert, convert_bytes, ConvertOptions, ConvertSummary};

// =============================================================================
// Re-exports - I/O
// =============================================================================

pub use fetch::{FetchOptions, Fetcher, DEFAULT_TIMEOUT};
pub use output::{table_to_string, write_table};
pub use logging::{init_logging, log_error, log_info, log_success, log_warning};
