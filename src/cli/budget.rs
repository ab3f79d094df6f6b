//! Budget CLI commands

use clap::Subcommand;

use super::{parse_amount, today};
use crate::display::format_budget_overview;
use crate::display::format::money;
use crate::error::FinanceResult;
use crate::ledger::Ledger;
use crate::services::BudgetService;
use crate::storage::SnapshotBackend;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly limit of a category
    Set {
        /// Category name
        category: String,
        /// Amount (e.g., "10000" or "99.50")
        amount: String,
    },

    /// Show this month's progress for every category
    List,
}

/// Handle a budget command
pub fn handle_budget_command<B: SnapshotBackend>(
    ledger: &mut Ledger<B>,
    cmd: BudgetCommands,
) -> FinanceResult<()> {
    let symbol = ledger.state().currency().to_string();
    let mut service = BudgetService::new(ledger);

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let amount = parse_amount(&amount)?;
            service.set(&category, amount)?;
            println!(
                "Budget for {} set to {}",
                category.trim(),
                money(amount, &symbol)
            );
        }

        BudgetCommands::List => {
            print!("{}", format_budget_overview(&service.overview(today()), &symbol));
        }
    }

    Ok(())
}
