//! The retrieval command run by the binary
//!
//! Replays a recorded session through the transaction engine and writes the
//! retrieved transactions as CSV.
//!
//! ```text
//! CliArgs
//!     ├── ReplayTransport (fixture file)
//!     ├── Unthrottled     (rate limiter)
//!     └── TransactionEngine
//!             └── write_transactions_csv → output
//! ```

use crate::cli::CliArgs;
use crate::core::{FixedClock, TransactionEngine, Unthrottled};
use crate::io::csv_format::write_transactions_csv;
use crate::io::replay::ReplayTransport;
use futures::stream::TryStreamExt;
use std::io::Write;
use std::sync::Arc;

/// Retrieve transactions as described by `args` and write them to `output`
///
/// # Returns
///
/// * `Ok(())` if every transaction was retrieved and written
/// * `Err(String)` on the first fatal error (fixture unreadable, invalid
///   range, failed request, output error)
pub fn execute(args: &CliArgs, output: &mut dyn Write) -> Result<(), String> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to create tokio runtime: {}", e))?;

    runtime.block_on(async {
        let transport = ReplayTransport::from_path(&args.fixture)
            .await
            .map_err(|e| e.to_string())?;

        let mut engine = TransactionEngine::new(
            Arc::new(transport),
            Arc::new(Unthrottled),
            args.to_engine_config(),
        );
        if let Some(today) = args.today {
            engine = engine.with_clock(Arc::new(FixedClock(today)));
        }

        let mut transactions = Vec::new();
        let mut stream = engine
            .transactions(args.start, args.end)
            .map_err(|e| e.to_string())?;
        while let Some(mut transaction) = stream.try_next().await.map_err(|e| e.to_string())? {
            if args.enrich {
                engine
                    .enrich(&mut transaction)
                    .await
                    .map_err(|e| format!("Failed to enrich transaction {}: {}", transaction.id(), e))?;
            }
            transactions.push(transaction);
        }

        tracing::info!(count = transactions.len(), "retrieved transactions");
        write_transactions_csv(&transactions, output)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary fixture file for testing
    fn create_temp_fixture(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    const SESSION: &str = r#"{
        "bootstrap": {"cache": [{"response": {"defaultAccountId": 77}}], "profileId": 5},
        "pages": [
            [
                {"id": "t1", "amount": 19.99, "postDate": "2024-02-01", "merchantDbaName": "Books"},
                {"id": "t2", "amount": -4.00, "postDate": "2024-02-03", "merchantDbaName": "Cafe"}
            ]
        ],
        "details": {"t1": {"merchantOrderIdentifier": "ORD-1"}}
    }"#;

    fn args(fixture: &NamedTempFile, extra: &[&str]) -> CliArgs {
        let path = fixture.path().to_str().unwrap().to_string();
        let mut argv = vec![
            "program".to_string(),
            "--start".to_string(),
            "2024-01-15".to_string(),
            "--end".to_string(),
            "2024-03-01".to_string(),
            "--today".to_string(),
            "2024-03-10".to_string(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        argv.push(path);
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_execute_writes_transactions() {
        let fixture = create_temp_fixture(SESSION);
        let mut output = Vec::new();

        execute(&args(&fixture, &[]), &mut output).unwrap();

        let csv = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "t1,19.99,2024-02-01,Books,");
        assert_eq!(lines[2], "t2,-4,2024-02-03,Cafe,");
    }

    #[test]
    fn test_execute_with_enrichment() {
        let fixture = create_temp_fixture(SESSION);
        let mut output = Vec::new();

        execute(&args(&fixture, &["--enrich"]), &mut output).unwrap();

        let csv = String::from_utf8(output).unwrap();
        assert!(csv.contains("t1,19.99,2024-02-01,Books,ORD-1"));
    }

    #[test]
    fn test_execute_enrichment_failure_is_fatal() {
        // t1 has no recorded detail, so its detail request answers 404
        let fixture = create_temp_fixture(&SESSION.replace(r#""t1": "#, r#""t3": "#));
        let mut output = Vec::new();

        let result = execute(&args(&fixture, &["--enrich"]), &mut output);
        assert!(result.unwrap_err().contains("Failed to enrich transaction t1"));
    }

    #[test]
    fn test_execute_rejects_future_end_date() {
        let fixture = create_temp_fixture(SESSION);
        let mut output = Vec::new();

        let parsed = CliArgs::try_parse_from([
            "program",
            "--start",
            "2024-03-01",
            "--end",
            "2024-03-11",
            "--today",
            "2024-03-10",
            fixture.path().to_str().unwrap(),
        ])
        .unwrap();

        let result = execute(&parsed, &mut output);
        assert!(result.unwrap_err().contains("cannot be later than today"));
        assert!(output.is_empty());
    }

    #[test]
    fn test_execute_handles_missing_fixture() {
        let parsed =
            CliArgs::try_parse_from(["program", "--start", "2024-01-01", "nonexistent.json"])
                .unwrap();
        let mut output = Vec::new();

        let result = execute(&parsed, &mut output);
        assert!(result.unwrap_err().contains("Failed to read fixture"));
    }
}
