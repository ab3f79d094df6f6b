//! Export module for fintrack
//!
//! - CSV: transactions only (spreadsheet-compatible)
//! - JSON: the full ledger with export metadata
//! - YAML: the same content, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_transactions_csv, TRANSACTION_HEADERS};
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
