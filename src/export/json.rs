//! JSON export
//!
//! Writes the complete ledger with export metadata. The `ledger` field has
//! exactly the shape of the persisted snapshot.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};
use crate::models::LedgerState;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub ledger: LedgerState,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub budget_count: usize,
    /// Earliest transaction date
    pub earliest_transaction: Option<String>,
    /// Latest transaction date
    pub latest_transaction: Option<String>,
}

impl FullExport {
    pub fn from_state(state: &LedgerState) -> Self {
        let dates = || state.transactions.iter().map(|t| t.date);

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            ledger: state.clone(),
            metadata: ExportMetadata {
                transaction_count: state.transactions.len(),
                budget_count: state.budgets.len(),
                earliest_transaction: dates().min().map(|d| d.to_string()),
                latest_transaction: dates().max().map(|d| d.to_string()),
            },
        }
    }
}

/// Export the full ledger to JSON
pub fn export_full_json<W: Write>(
    state: &LedgerState,
    writer: &mut W,
    pretty: bool,
) -> FinanceResult<()> {
    let export = FullExport::from_state(state);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::seed_state;

    #[test]
    fn test_full_export() {
        let state = seed_state();
        let export = FullExport::from_state(&state);

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.transaction_count, 20);
        assert_eq!(export.metadata.budget_count, 4);
        assert_eq!(export.metadata.earliest_transaction.as_deref(), Some("2025-03-01"));
        assert_eq!(export.metadata.latest_transaction.as_deref(), Some("2025-06-15"));
    }

    #[test]
    fn test_json_round_trip_preserves_ledger() {
        let state = seed_state();
        let mut out = Vec::new();
        export_full_json(&state, &mut out, true).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\n  \"schema_version\""));

        let parsed: FullExport = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.ledger, state);
    }
}
