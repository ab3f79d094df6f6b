//! YAML export
//!
//! Same content as the JSON export, for human reading.

use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::export::json::FullExport;
use crate::models::LedgerState;

fn export_err(e: impl std::fmt::Display) -> FinanceError {
    FinanceError::Export(e.to_string())
}

/// Export the full ledger to YAML
pub fn export_full_yaml<W: Write>(state: &LedgerState, writer: &mut W) -> FinanceResult<()> {
    let export = FullExport::from_state(state);

    writeln!(writer, "# fintrack ledger export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(export_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::seed_state;

    #[test]
    fn test_yaml_export() {
        let state = seed_state();
        let mut out = Vec::new();
        export_full_yaml(&state, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("# fintrack ledger export"));
        assert!(text.contains("schema_version:"));
        assert!(text.contains("Manoj Yadav"));

        let parsed: FullExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.ledger.transactions.len(), 20);
    }
}
