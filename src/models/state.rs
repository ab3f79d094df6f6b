//! Ledger state: the single unit of persistence

use serde::{Deserialize, Serialize};

use super::budget::Budgets;
use super::ids::TransactionId;
use super::profile::UserProfile;
use super::transaction::Transaction;

/// Transactions, budgets and profile, serialized together as one document
///
/// Every field is required when parsing. A document missing any of them is
/// rejected as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    /// Transactions in insertion order
    pub transactions: Vec<Transaction>,
    pub budgets: Budgets,
    pub user: UserProfile,
}

impl LedgerState {
    pub fn new(user: UserProfile) -> Self {
        Self {
            transactions: Vec::new(),
            budgets: Budgets::new(),
            user,
        }
    }

    /// Find a transaction by id
    pub fn find(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    /// Position of a transaction in insertion order
    pub fn position(&self, id: &TransactionId) -> Option<usize> {
        self.transactions.iter().position(|t| &t.id == id)
    }

    /// The profile's currency symbol
    pub fn currency(&self) -> &str {
        &self.user.currency
    }
}
