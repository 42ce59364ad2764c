//! End-to-end conversion: rule lookup, fetch, assembly, CSV output.
//!
//! # Example
//!
//! ```rust,ignore
//! use json2csv::{convert, ConvertOptions, RuleStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = RuleStore::from_path("rules.json")?;
//!     let summary = convert(
//!         &store,
//!         "users",
//!         "https://api.example.com/users",
//!         &ConvertOptions::default(),
//!         std::io::stdout().lock(),
//!     )
//!     .await?;
//!
//!     eprintln!("{} records", summary.records);
//!     Ok(())
//! }
//! ```

use std::io::Write;

use super::table::assemble;
use crate::error::ConvertResult;
use crate::fetch::{FetchOptions, Fetcher};
use crate::logging::{log_info, log_success, log_warning};
use crate::output::write_table;
use crate::rules::{Rule, RuleStore};

/// Options for a conversion run
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// HTTP settings for the source fetch
    pub fetch: FetchOptions,
}

/// What a finished run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Name of the rule used
    pub rule: String,
    /// Number of CSV columns (0 when nothing was emitted)
    pub columns: usize,
    /// Number of data rows, header excluded
    pub records: usize,
}

/// Fetch `url` with the rule named `rule_name` and write the CSV to `writer`.
///
/// The rule is looked up before any network traffic. Nothing is written
/// unless the whole payload converted.
pub async fn convert<W: Write>(
    store: &RuleStore,
    rule_name: &str,
    url: &str,
    options: &ConvertOptions,
    writer: W,
) -> ConvertResult<ConvertSummary> {
    let rule = store.find(rule_name)?;
    log_info(format!("Using rule '{}'", rule.name));

    let fetcher = Fetcher::new(options.fetch.clone())?;
    let body = fetcher.fetch(url, rule.token()).await?;
    log_info(format!("Fetched {} bytes", body.len()));

    convert_bytes(&body, rule, writer)
}

/// Convert an already-fetched payload with `rule` and write the CSV to `writer`.
pub fn convert_bytes<W: Write>(
    bytes: &[u8],
    rule: &Rule,
    writer: W,
) -> ConvertResult<ConvertSummary> {
    let table = assemble(bytes, rule)?;
    if table.is_empty() {
        log_warning(format!(
            "Rule '{}' declares no mapping and no columns could be inferred; nothing to write",
            rule.name
        ));
    }
    write_table(writer, &table)?;

    let summary = ConvertSummary {
        rule: rule.name.clone(),
        columns: table.header().map_or(0, Vec::len),
        records: table.records().len(),
    };
    log_success(format!(
        "Wrote {} records x {} columns",
        summary.records, summary.columns
    ));

    Ok(summary)
}
