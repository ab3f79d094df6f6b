//! Audit logging for fintrack
//!
//! Records every ledger mutation (transactions, budgets, profile) with
//! before/after values in an append-only JSONL log.
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(EntityType::Transaction, "42", None, &txn))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
