//! Transaction Retriever CLI
//!
//! Command-line interface for retrieving transaction history from a recorded
//! account-data session.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --start 2024-01-01 --end 2024-03-01 session.json > transactions.csv
//! cargo run -- --start 2024-01-01 --enrich --today 2024-03-10 session.json > transactions.csv
//! RUST_LOG=debug cargo run -- --start 2024-01-01 session.json
//! ```
//!
//! Transactions are written to stdout as CSV. Logs go to stderr, filtered by
//! `RUST_LOG` (default: `warn`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing fixture, invalid date range, failed request, etc.)

use std::process;
use tracing_subscriber::EnvFilter;
use transaction_retriever::cli;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    let mut output = std::io::stdout();
    if let Err(e) = cli::execute(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
