//! Transformation module.
//!
//! This module handles JSON to CSV table conversion:
//! - Mapping: which fields become which columns
//! - Columnizer: one record to one row
//! - Table: header plus rows for a whole payload
//! - Pipeline: fetch, assemble and write in one call

pub mod columnizer;
pub mod mapping;
pub mod pipeline;
pub mod table;

pub use columnizer::{cell_value, columnize, Row};
pub use mapping::{resolve, ColumnPair, FieldMapping};
pub use pipeline::*;
pub use table::{assemble, assemble_records, parse_records, AssemblyState, Record, Table};
