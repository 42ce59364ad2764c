//! Error types for the json2csv conversion pipeline.
//!
//! One enum per failure domain:
//!
//! - [`RuleError`] - Rule file loading and rule lookup
//! - [`InputError`] - Fetched payload is not a JSON array of objects
//! - [`FetchError`] - HTTP transport failures
//! - [`OutputError`] - CSV serialization failures
//! - [`ConvertError`] - Top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries. Nothing in the library
//! terminates the process; `main` decides the exit code.

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Rule Errors
// =============================================================================

/// Errors while loading or looking up conversion rules.
#[derive(Debug, Error)]
pub enum RuleError {
    /// Rule file could not be read.
    #[error("Failed to read rules file '{}': {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rule file is not a JSON array of rule objects.
    #[error("Invalid rules JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// No rule with the requested name.
    #[error("No rule found: {0}")]
    NotFound(String),
}

// =============================================================================
// Input Errors
// =============================================================================

/// Errors while parsing the fetched JSON payload.
#[derive(Debug, Error)]
pub enum InputError {
    /// Payload is not valid JSON.
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level value is valid JSON but not an array.
    #[error("Expected a JSON array at the top level, found {found}")]
    NotAnArray { found: &'static str },

    /// An array element is not an object.
    #[error("Element {index} of the JSON array is {found}, expected an object")]
    NotAnObject { index: usize, found: &'static str },
}

// =============================================================================
// Fetch Errors
// =============================================================================

/// HTTP transport errors. None of them are retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Source URL could not be parsed or uses an unsupported scheme.
    #[error("Invalid source URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request failed before a response arrived.
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Request exceeded the configured timeout.
    #[error("Request timed out after {secs} seconds")]
    Timeout { secs: u64 },

    /// Server answered with a non-2xx status.
    #[error("Server returned {status} for {url}")]
    Status { status: u16, url: String },

    /// Response body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

// =============================================================================
// Output Errors
// =============================================================================

/// Errors while serializing the table as CSV.
#[derive(Debug, Error)]
pub enum OutputError {
    /// CSV writer error.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying stream error (flush).
    #[error("Output IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Convert Errors (top-level)
// =============================================================================

/// Top-level conversion errors.
///
/// This is the error type returned by [`crate::transform::pipeline::convert`].
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Rule loading or lookup error.
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// Payload parsing error.
    #[error(transparent)]
    Input(#[from] InputError),

    /// HTTP transport error.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// CSV output error.
    #[error(transparent)]
    Output(#[from] OutputError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for rule operations.
pub type RuleResult<T> = Result<T, RuleError>;

/// Result type for payload parsing.
pub type InputResult<T> = Result<T, InputError>;

/// Result type for HTTP operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Result type for CSV output.
pub type OutputResult<T> = Result<T, OutputError>;

/// Result type for the whole conversion.
pub type ConvertResult<T> = Result<T, ConvertError>;
