//! Transaction service
//!
//! Input policy on top of the ledger store: id generation, amount and
//! category checks, and the expense-vs-budget rule.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{FinanceError, FinanceResult};
use crate::ledger::Ledger;
use crate::models::{Money, Transaction, TransactionId, TransactionType};
use crate::storage::SnapshotBackend;

/// Service for transaction management
pub struct TransactionService<'a, B: SnapshotBackend> {
    ledger: &'a mut Ledger<B>,
}

/// Options for filtering transactions
///
/// All set fields must match. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by date range start (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Filter by date range end (inclusive)
    pub end_date: Option<NaiveDate>,
    pub kind: Option<TransactionType>,
    pub category: Option<String>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Filter by date range
    pub fn date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start(start).end(end)
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        self.start_date.map_or(true, |start| txn.date >= start)
            && self.end_date.map_or(true, |end| txn.date <= end)
            && self.kind.map_or(true, |kind| txn.kind == kind)
            && self
                .category
                .as_deref()
                .map_or(true, |category| txn.category == category)
    }
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionType,
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
    pub note: String,
}

/// Fields to change on an existing transaction
#[derive(Debug, Clone, Default)]
pub struct TransactionChanges {
    pub kind: Option<TransactionType>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub note: Option<String>,
}

impl TransactionChanges {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.date.is_none()
            && self.note.is_none()
    }

    fn apply(self, txn: &mut Transaction) {
        if let Some(kind) = self.kind {
            txn.kind = kind;
        }
        if let Some(amount) = self.amount {
            txn.amount = amount;
        }
        if let Some(category) = self.category {
            txn.category = category;
        }
        if let Some(date) = self.date {
            txn.date = date;
        }
        if let Some(note) = self.note {
            txn.note = note;
        }
    }
}

impl<'a, B: SnapshotBackend> TransactionService<'a, B> {
    pub fn new(ledger: &'a mut Ledger<B>) -> Self {
        Self { ledger }
    }

    /// Create a new transaction with a generated id
    pub fn create(&mut self, input: NewTransaction) -> FinanceResult<Transaction> {
        let txn = Transaction::new(
            TransactionId::generate(),
            input.kind,
            input.amount,
            input.category.trim(),
            input.date,
            input.note.trim(),
        );

        self.check(&txn)?;
        self.ledger.add_transaction(txn.clone())?;
        debug!(id = %txn.id, "transaction created");
        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.ledger.find_transaction(id)
    }

    /// Find a transaction by its full id or a unique id prefix
    pub fn find(&self, identifier: &str) -> FinanceResult<&Transaction> {
        let identifier = identifier.trim();
        let transactions = &self.ledger.state().transactions;

        if let Some(txn) = transactions.iter().find(|t| t.id.as_str() == identifier) {
            return Ok(txn);
        }

        let mut matches = transactions
            .iter()
            .filter(|t| !identifier.is_empty() && t.id.as_str().starts_with(identifier));
        match (matches.next(), matches.next()) {
            (Some(txn), None) => Ok(txn),
            (Some(_), Some(_)) => Err(FinanceError::Validation(format!(
                "Transaction id prefix '{}' is ambiguous",
                identifier
            ))),
            _ => Err(FinanceError::transaction_not_found(identifier)),
        }
    }

    /// List transactions matching the filter, in stored order
    pub fn list(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        self.ledger
            .state()
            .transactions
            .iter()
            .filter(|t| filter.matches(t))
            .collect()
    }

    /// Apply changes to an existing transaction
    pub fn edit(
        &mut self,
        id: &TransactionId,
        changes: TransactionChanges,
    ) -> FinanceResult<Transaction> {
        let mut txn = self
            .ledger
            .find_transaction(id)
            .cloned()
            .ok_or_else(|| FinanceError::transaction_not_found(id.as_str()))?;

        changes.apply(&mut txn);
        txn.category = txn.category.trim().to_string();

        self.check(&txn)?;
        self.ledger.update_transaction(txn.clone())?;
        Ok(txn)
    }

    /// Delete a transaction
    pub fn remove(&mut self, id: &TransactionId) -> FinanceResult<()> {
        if self.ledger.delete_transaction(id)? {
            Ok(())
        } else {
            Err(FinanceError::transaction_not_found(id.as_str()))
        }
    }

    fn check(&self, txn: &Transaction) -> FinanceResult<()> {
        if !txn.amount.is_positive() {
            return Err(FinanceError::Validation(
                "Transaction amount must be greater than zero".into(),
            ));
        }

        if txn.category.is_empty() {
            return Err(FinanceError::Validation(
                "Transaction category cannot be empty".into(),
            ));
        }

        if txn.is_expense() {
            if let Some(budget) = self.ledger.state().budgets.limit_for(&txn.category) {
                if budget.is_positive() && txn.amount > budget {
                    return Err(FinanceError::BudgetExceeded {
                        category: txn.category.clone(),
                        amount: txn.amount,
                        budget,
                    });
                }
            }
        }

        Ok(())
    }
}
