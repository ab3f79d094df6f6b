//! Service layer for fintrack
//!
//! The services sit between callers and the ledger store, enforcing input
//! policy (positive amounts, budget limits, supported currencies) that the
//! store itself does not check.

pub mod budget;
pub mod profile;
pub mod transaction;

pub use budget::BudgetService;
pub use profile::ProfileService;
pub use transaction::{NewTransaction, TransactionChanges, TransactionFilter, TransactionService};
