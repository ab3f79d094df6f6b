//! Profile CLI commands

use clap::Subcommand;

use crate::display::format_profile;
use crate::error::{FinanceError, FinanceResult};
use crate::ledger::Ledger;
use crate::models::{ProfileUpdate, SUPPORTED_CURRENCIES};
use crate::reports::LifetimeStats;
use crate::services::ProfileService;
use crate::storage::SnapshotBackend;

/// Profile subcommands
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the profile and lifetime totals
    Show,

    /// Update profile fields
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Currency symbol
        #[arg(long)]
        currency: Option<String>,
    },

    /// List supported currencies
    Currencies,
}

/// Handle a profile command
pub fn handle_profile_command<B: SnapshotBackend>(
    ledger: &mut Ledger<B>,
    cmd: ProfileCommands,
) -> FinanceResult<()> {
    match cmd {
        ProfileCommands::Show => {
            let stats = LifetimeStats::compute(&ledger.state().transactions);
            print!("{}", format_profile(&ledger.state().user, &stats));
        }

        ProfileCommands::Set {
            name,
            email,
            currency,
        } => {
            let update = ProfileUpdate {
                name,
                email,
                currency,
            };
            if update.is_empty() {
                return Err(FinanceError::Validation(
                    "Nothing to update. Use --name, --email or --currency".into(),
                ));
            }

            let mut service = ProfileService::new(ledger);
            let user = service.update(update)?;
            println!("Profile updated: {} <{}> ({})", user.name, user.email, user.currency);
        }

        ProfileCommands::Currencies => {
            for (symbol, name) in SUPPORTED_CURRENCIES {
                println!("{}  {}", symbol, name);
            }
        }
    }

    Ok(())
}
