//! Display formatting for terminal output
//!
//! Renders ledger records and report results as plain text and tables.
//! Amounts are shown with the profile's currency symbol.

pub mod budget;
pub mod dashboard;
pub mod format;
pub mod transaction;

pub use budget::format_budget_overview;
pub use dashboard::{format_dashboard, format_profile};
pub use transaction::{format_transaction_details, format_transaction_table};
