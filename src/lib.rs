//! fintrack - personal finance ledger
//!
//! This library keeps a ledger of income and expense transactions, monthly
//! per-category budgets and a user profile, persists the whole ledger as one
//! JSON snapshot, and computes dashboard figures from it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, budgets, profile)
//! - `storage`: Snapshot backends (file and in-memory)
//! - `ledger`: The state owner with load, mutate and persist
//! - `reports`: Pure aggregation over snapshots
//! - `services`: Input policy on top of the ledger
//! - `audit`: Audit logging system
//! - `export`: CSV, JSON and YAML export
//! - `cli`, `display`: Command handlers and terminal formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::FintrackPaths;
//! use fintrack::ledger::Ledger;
//! use fintrack::storage::FileBackend;
//!
//! let paths = FintrackPaths::new()?;
//! let ledger = Ledger::open(FileBackend::new(paths.data_dir()))?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

use std::sync::Once;

pub use error::{FinanceError, FinanceResult};

static TRACING_INIT: Once = Once::new();

/// Install the diagnostics subscriber
///
/// Honors `RUST_LOG`, falling back to `fintrack=warn`. Output goes to stderr.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fintrack=warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_tracing_twice_does_not_panic() {
        super::init_tracing();
        super::init_tracing();
    }
}
