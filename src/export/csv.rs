//! CSV export
//!
//! One row per transaction in stored order. Amounts are written as plain
//! major-unit decimals without a currency symbol.

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::models::Transaction;

/// Column headers, in order
pub const TRANSACTION_HEADERS: [&str; 6] = ["id", "date", "type", "category", "amount", "note"];

fn export_err(e: impl std::fmt::Display) -> FinanceError {
    FinanceError::Export(e.to_string())
}

/// Export transactions to CSV
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> FinanceResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record(TRANSACTION_HEADERS).map_err(export_err)?;

    for txn in transactions {
        let date = txn.date.format("%Y-%m-%d").to_string();
        let amount = txn.amount.to_string();
        csv.write_record([
            txn.id.as_str(),
            date.as_str(),
            txn.kind.as_str(),
            txn.category.as_str(),
            amount.as_str(),
            txn.note.as_str(),
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)?;
    Ok(())
}
