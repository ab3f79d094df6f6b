//! Ledger store
//!
//! `Ledger` owns the single source of truth for transactions, budgets and the
//! user profile. It is constructed once per session and handed to consumers by
//! reference. Every mutation is applied in memory and then the whole state is
//! serialized and written to the snapshot backend under [`STATE_KEY`].
//!
//! The store performs no validation. Policy checks (positive amounts, budget
//! limits) belong to the callers in `services`.

pub mod seed;

use tracing::{debug, info, warn};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{LedgerState, Money, ProfileUpdate, Transaction, TransactionId};
use crate::storage::SnapshotBackend;

pub use seed::seed_state;

/// Fixed key under which the snapshot is stored
pub const STATE_KEY: &str = "financeState";

/// How `Ledger::open` obtained its initial state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateOrigin {
    /// Nothing was stored; the seed dataset was written
    Seeded,
    /// The stored snapshot was parsed and used as-is
    Restored,
    /// The stored snapshot was unreadable; the seed dataset is in use but
    /// nothing has been written yet
    Recovered,
}

/// Parse a snapshot document into a ledger state
///
/// Bytes that are not valid UTF-8 fail like any other malformed document.
pub fn parse_snapshot(document: impl AsRef<[u8]>) -> FinanceResult<LedgerState> {
    serde_json::from_slice(document.as_ref())
        .map_err(|e| FinanceError::Json(format!("Failed to parse ledger snapshot: {}", e)))
}

/// Serialize a ledger state into a snapshot document
pub fn serialize_snapshot(state: &LedgerState) -> FinanceResult<String> {
    serde_json::to_string(state)
        .map_err(|e| FinanceError::Json(format!("Failed to serialize ledger snapshot: {}", e)))
}

/// The state owner for one session
pub struct Ledger<B: SnapshotBackend> {
    state: LedgerState,
    backend: B,
    audit: Option<AuditLogger>,
    origin: StateOrigin,
}

impl<B: SnapshotBackend> Ledger<B> {
    /// Open the ledger stored in `backend`
    ///
    /// - nothing stored: the seed dataset is written and used
    /// - a parsable snapshot: used verbatim
    /// - an unparsable snapshot: discarded in favour of the seed dataset,
    ///   left on disk until the next mutation overwrites it
    ///
    /// # Errors
    ///
    /// Fails only if the backend cannot be read, or the seed cannot be written
    /// on first run.
    pub fn open(mut backend: B) -> FinanceResult<Self> {
        let (state, origin) = match backend.read(STATE_KEY)? {
            None => {
                let state = seed_state();
                backend.write(STATE_KEY, &serialize_snapshot(&state)?)?;
                info!(
                    transactions = state.transactions.len(),
                    "no stored ledger found, initialized with seed data"
                );
                (state, StateOrigin::Seeded)
            }
            Some(document) => match parse_snapshot(&document) {
                Ok(state) => {
                    debug!(transactions = state.transactions.len(), "restored ledger");
                    (state, StateOrigin::Restored)
                }
                Err(e) => {
                    warn!(error = %e, "stored ledger is unreadable, falling back to seed data");
                    (seed_state(), StateOrigin::Recovered)
                }
            },
        };

        Ok(Self {
            state,
            backend,
            audit: None,
            origin,
        })
    }

    /// Record every mutation in an audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// The current snapshot
    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    /// An owned copy of the current snapshot
    pub fn snapshot(&self) -> LedgerState {
        self.state.clone()
    }

    pub fn origin(&self) -> StateOrigin {
        self.origin
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    pub fn find_transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.state.find(id)
    }

    /// Append a transaction. The caller supplies the id.
    pub fn add_transaction(&mut self, txn: Transaction) -> FinanceResult<()> {
        let entry = AuditEntry::create(
            EntityType::Transaction,
            txn.id.as_str(),
            Some(describe(&txn)),
            &txn,
        );
        self.state.transactions.push(txn);
        self.persist()?;
        self.record(entry);
        Ok(())
    }

    /// Replace the transaction with the same id, keeping its position
    ///
    /// Returns `false` and leaves the transactions untouched if no entry has
    /// that id. The state is persisted either way.
    pub fn update_transaction(&mut self, txn: Transaction) -> FinanceResult<bool> {
        let entry = match self.state.position(&txn.id) {
            Some(idx) => {
                let before = std::mem::replace(&mut self.state.transactions[idx], txn);
                let after = &self.state.transactions[idx];
                Some(AuditEntry::update(
                    EntityType::Transaction,
                    after.id.as_str(),
                    Some(describe(after)),
                    &before,
                    after,
                ))
            }
            None => {
                debug!(id = %txn.id, "update of unknown transaction ignored");
                None
            }
        };

        self.persist()?;
        Ok(self.record_some(entry))
    }

    /// Remove the transaction with the given id
    ///
    /// Returns `false` if no entry had that id. The state is persisted either way.
    pub fn delete_transaction(&mut self, id: &TransactionId) -> FinanceResult<bool> {
        let entry = match self.state.position(id) {
            Some(idx) => {
                let removed = self.state.transactions.remove(idx);
                Some(AuditEntry::delete(
                    EntityType::Transaction,
                    removed.id.as_str(),
                    Some(describe(&removed)),
                    &removed,
                ))
            }
            None => {
                debug!(id = %id, "delete of unknown transaction ignored");
                None
            }
        };

        self.persist()?;
        Ok(self.record_some(entry))
    }

    /// Set or overwrite the monthly limit of a category
    pub fn set_budget(&mut self, category: impl Into<String>, amount: Money) -> FinanceResult<()> {
        let category = category.into();
        let entry = match self.state.budgets.set(category.clone(), amount) {
            Some(previous) => {
                AuditEntry::update(EntityType::Budget, category, None, &previous, &amount)
            }
            None => AuditEntry::create(EntityType::Budget, category, None, &amount),
        };
        self.persist()?;
        self.record(entry);
        Ok(())
    }

    /// Merge the given fields into the user profile
    pub fn update_user(&mut self, update: ProfileUpdate) -> FinanceResult<()> {
        let before = self.state.user.clone();
        self.state.user.apply(update);
        let entry = AuditEntry::update(
            EntityType::Profile,
            "user",
            Some(self.state.user.name.clone()),
            &before,
            &self.state.user,
        );
        self.persist()?;
        self.record(entry);
        Ok(())
    }

    /// Write the whole state to the backend
    ///
    /// Called after every mutation. On failure the in-memory state is kept and
    /// the next successful write persists it.
    pub fn persist(&mut self) -> FinanceResult<()> {
        let document = serialize_snapshot(&self.state)?;
        self.backend.write(STATE_KEY, &document)?;
        debug!(bytes = document.len(), "ledger persisted");
        Ok(())
    }

    /// Append to the audit log. Only called once the change is persisted.
    fn record(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                warn!(error = %e, "failed to write audit entry");
            }
        }
    }

    /// Record `entry` if there is one, reporting whether there was
    fn record_some(&self, entry: Option<AuditEntry>) -> bool {
        match entry {
            Some(entry) => {
                self.record(entry);
                true
            }
            None => false,
        }
    }
}

fn describe(txn: &Transaction) -> String {
    format!("{} {}", txn.date, txn.category)
}
