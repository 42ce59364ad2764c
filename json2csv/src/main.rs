//! json2csv CLI - Fetch a JSON array and print it as CSV
//!
//! ```bash
//! json2csv rules.json users https://api.example.com/users > users.csv
//! ```
//!
//! Logs go to stderr; set `JSON2CSV_LOG=info` (or in `.env`) to see them.

use clap::Parser;
use json2csv::{convert, init_logging, log_error, ConvertError, ConvertOptions, RuleStore};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "json2csv", version)]
#[command(about = "Convert a remote JSON array to CSV using a named rule", long_about = None)]
struct Cli {
    /// JSON file with the rule definitions
    rules: PathBuf,

    /// Name of the rule to apply (case-sensitive)
    rule_name: String,

    /// URL returning a JSON array of objects
    source_url: String,
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = init_logging() {
        eprintln!("Error: failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli).await {
        log_error(format!("Conversion failed: {}", e));
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), ConvertError> {
    let store = RuleStore::from_path(&cli.rules)?;

    let stdout = io::stdout();
    convert(
        &store,
        &cli.rule_name,
        &cli.source_url,
        &ConvertOptions::default(),
        stdout.lock(),
    )
    .await?;

    Ok(())
}
