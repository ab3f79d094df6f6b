//! Transaction CLI commands
//!
//! Implements CLI commands for transaction management.

use clap::Subcommand;

use super::{parse_amount, parse_date, parse_kind, today};
use crate::display::{format_transaction_details, format_transaction_table};
use crate::error::{FinanceError, FinanceResult};
use crate::ledger::Ledger;
use crate::models::category::is_suggested;
use crate::models::Transaction;
use crate::services::{NewTransaction, TransactionChanges, TransactionFilter, TransactionService};
use crate::storage::SnapshotBackend;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// income or expense
        kind: String,
        /// Amount in major units (e.g., "2500" or "49.99")
        amount: String,
        /// Category name
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// List transactions
    List {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Filter by type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Filter by category name
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID or unique prefix
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID or unique prefix
        id: String,
        /// New type
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
        /// New note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID or unique prefix
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<B: SnapshotBackend>(
    ledger: &mut Ledger<B>,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    let symbol = ledger.state().currency().to_string();
    let mut service = TransactionService::new(ledger);

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            date,
            note,
        } => {
            let input = NewTransaction {
                kind: parse_kind(&kind)?,
                amount: parse_amount(&amount)?,
                date: match date {
                    Some(date) => parse_date(&date)?,
                    None => today(),
                },
                note: note.unwrap_or_default(),
                category,
            };

            let txn = service.create(input)?;

            println!("Created transaction:");
            print!("{}", format_transaction_details(&txn, &symbol));
            if !is_suggested(&txn.category) {
                println!("Note: '{}' is not one of the usual categories", txn.category);
            }
        }

        TransactionCommands::List {
            from,
            to,
            kind,
            category,
        } => {
            let from = from.as_deref().map(parse_date).transpose()?;
            let to = to.as_deref().map(parse_date).transpose()?;
            let mut filter = match (from, to) {
                (Some(from), Some(to)) => {
                    if from > to {
                        return Err(FinanceError::Validation(format!(
                            "--from {} is after --to {}",
                            from, to
                        )));
                    }
                    TransactionFilter::new().date_range(from, to)
                }
                (Some(from), None) => TransactionFilter::new().start(from),
                (None, Some(to)) => TransactionFilter::new().end(to),
                (None, None) => TransactionFilter::new(),
            };
            if let Some(kind) = kind {
                filter = filter.kind(parse_kind(&kind)?);
            }
            if let Some(category) = category {
                filter = filter.category(category);
            }

            let transactions = service.list(&filter);
            let total = service.list(&TransactionFilter::new()).len();
            print!("{}", format_transaction_table(&transactions, &symbol));
            println!("Showing {} of {} transactions", transactions.len(), total);
        }

        TransactionCommands::Show { id } => {
            let txn = resolve(&service, &id)?;
            print!("{}", format_transaction_details(txn, &symbol));
        }

        TransactionCommands::Edit {
            id,
            kind,
            amount,
            category,
            date,
            note,
        } => {
            let id = resolve(&service, &id)?.id.clone();
            let changes = TransactionChanges {
                kind: kind.as_deref().map(parse_kind).transpose()?,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                category,
                date: date.as_deref().map(parse_date).transpose()?,
                note,
            };

            if changes.is_empty() {
                println!("No changes specified.");
                return Ok(());
            }

            let txn = service.edit(&id, changes)?;
            println!("Updated transaction:");
            print!("{}", format_transaction_details(&txn, &symbol));
        }

        TransactionCommands::Delete { id } => {
            let txn = resolve(&service, &id)?.clone();
            service.remove(&txn.id)?;
            println!(
                "Deleted transaction {} ({} {} on {})",
                txn.id.short(),
                txn.kind,
                txn.category,
                txn.date
            );
        }
    }

    Ok(())
}

/// Look up a transaction by id or prefix, pointing at `tx list` when nothing matches
fn resolve<'s, B: SnapshotBackend>(
    service: &'s TransactionService<'_, B>,
    identifier: &str,
) -> FinanceResult<&'s Transaction> {
    service.find(identifier).map_err(|e| {
        if e.is_not_found() {
            eprintln!("Hint: run 'fintrack tx list' to see transaction ids");
        }
        e
    })
}
