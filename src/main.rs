use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::audit::AuditLogger;
use fintrack::cli::{
    handle_budget_command, handle_dashboard_command, handle_export_command,
    handle_profile_command, handle_transaction_command, BudgetCommands, DashboardArgs,
    ExportCommands, ProfileCommands, TransactionCommands,
};
use fintrack::config::{FintrackPaths, Settings};
use fintrack::ledger::{Ledger, StateOrigin, STATE_KEY};
use fintrack::storage::FileBackend;

#[derive(Parser)]
#[command(
    name = "fintrack",
    author = "Kaylee Beyene",
    version,
    about = "Personal finance ledger for the terminal",
    long_about = "fintrack records income and expenses, tracks monthly budgets per \
                  category, and summarizes your finances in a dashboard."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and the seeded ledger
    Init,

    /// Show current configuration and paths
    Config,

    /// Transaction management commands
    #[command(subcommand, alias = "transaction")]
    Tx(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Profile commands
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Show the dashboard for a date range
    Dashboard(DashboardArgs),

    /// Export the ledger
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        count: usize,
    },
}

fn main() -> Result<()> {
    fintrack::init_tracing();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FintrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let audit = AuditLogger::new(paths.audit_log());

    let Some(command) = cli.command else {
        println!("fintrack - personal finance ledger");
        println!();
        println!("Run 'fintrack --help' for usage information.");
        return Ok(());
    };

    match &command {
        Commands::Config => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Audit enabled:  {}", settings.audit_enabled);
            return Ok(());
        }
        Commands::History { count } => {
            let entries = audit.read_recent(*count)?;
            if entries.is_empty() {
                println!("No changes recorded.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
            return Ok(());
        }
        _ => {}
    }

    paths.ensure_directories()?;
    let backend = FileBackend::new(paths.data_dir());
    let mut ledger = Ledger::open(backend)?;
    if settings.audit_enabled {
        ledger = ledger.with_audit(audit);
    }

    match command {
        Commands::Init => {
            settings.save(&paths)?;
            let snapshot = ledger.backend().path_for(STATE_KEY);
            match ledger.origin() {
                StateOrigin::Seeded => {
                    println!("Initialized fintrack at: {}", paths.base_dir().display());
                    println!(
                        "Sample ledger with {} transactions written to {}",
                        ledger.state().transactions.len(),
                        snapshot.display()
                    );
                }
                StateOrigin::Restored => {
                    println!("Ledger already exists at {}", snapshot.display());
                }
                StateOrigin::Recovered => {
                    ledger.persist()?;
                    println!(
                        "Stored ledger was unreadable; replaced it with sample data at {}",
                        snapshot.display()
                    );
                }
            }
        }
        Commands::Tx(cmd) => handle_transaction_command(&mut ledger, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&mut ledger, cmd)?,
        Commands::Profile(cmd) => handle_profile_command(&mut ledger, cmd)?,
        Commands::Dashboard(args) => handle_dashboard_command(&ledger, args)?,
        Commands::Export(cmd) => handle_export_command(&ledger, cmd)?,
        Commands::Config | Commands::History { .. } => {}
    }

    Ok(())
}
