//! Core data models for fintrack
//!
//! This module contains the data structures of the finance domain:
//! transactions, budgets, the user profile, and the ledger state that
//! bundles them for persistence.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod profile;
pub mod state;
pub mod transaction;

pub use budget::Budgets;
pub use category::{BUDGET_CATEGORIES, TRANSACTION_CATEGORIES};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use profile::{ProfileUpdate, UserProfile, SUPPORTED_CURRENCIES};
pub use state::LedgerState;
pub use transaction::{Transaction, TransactionType};
