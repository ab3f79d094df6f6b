//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod dashboard;
pub mod export;
pub mod profile;
pub mod transaction;

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, TransactionType};

pub use budget::{handle_budget_command, BudgetCommands};
pub use dashboard::{handle_dashboard_command, DashboardArgs};
pub use export::{handle_export_command, ExportCommands};
pub use profile::{handle_profile_command, ProfileCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

/// The local calendar date
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub(crate) fn parse_date(value: &str) -> FinanceResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        FinanceError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", value))
    })
}

pub(crate) fn parse_amount(value: &str) -> FinanceResult<Money> {
    Money::parse(value).map_err(|e| {
        FinanceError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '2500' or '49.99'. Error: {}",
            value, e
        ))
    })
}

pub(crate) fn parse_kind(value: &str) -> FinanceResult<TransactionType> {
    value.parse().map_err(FinanceError::Validation)
}
