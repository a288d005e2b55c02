//! CSV output for retrieved transactions
//!
//! All functions are pure (no I/O beyond the supplied writer) for easy testing.

use crate::types::Transaction;
use std::io::Write;

/// Write transactions to CSV format
///
/// Writes transactions with columns:
/// id, amount, post_date, merchant_dba_name, merchant_order_identifier
///
/// Rows keep the order in which the transactions were retrieved. An
/// identifier that was never fetched is written as an empty field.
///
/// # Arguments
///
/// * `transactions` - Slice of transactions to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_transactions_csv(
    transactions: &[Transaction],
    output: &mut dyn Write,
) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record([
            "id",
            "amount",
            "post_date",
            "merchant_dba_name",
            "merchant_order_identifier",
        ])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for transaction in transactions {
        writer
            .write_record(&[
                transaction.id().to_string(),
                transaction.amount().to_string(),
                transaction.post_date().format("%Y-%m-%d").to_string(),
                transaction.merchant_dba_name().to_string(),
                transaction
                    .merchant_order_identifier()
                    .unwrap_or_default()
                    .to_string(),
            ])
            .map_err(|e| format!("Failed to write transaction {}: {}", transaction.id(), e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush CSV output: {}", e))?;

    Ok(())
}
