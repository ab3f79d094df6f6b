//! CLI commands for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::FinanceResult;
use crate::export::{export_full_json, export_full_yaml, export_transactions_csv};
use crate::ledger::Ledger;
use crate::storage::SnapshotBackend;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export transactions to CSV
    Csv {
        /// Output file path, stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the full ledger to JSON
    Json {
        /// Output file path, stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write a single line instead of pretty-printed JSON
        #[arg(long)]
        compact: bool,
    },

    /// Export the full ledger to YAML
    Yaml {
        /// Output file path, stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn open_output(output: &Option<PathBuf>) -> FinanceResult<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    })
}

/// Handle an export command
pub fn handle_export_command<B: SnapshotBackend>(
    ledger: &Ledger<B>,
    cmd: ExportCommands,
) -> FinanceResult<()> {
    let state = ledger.state();

    let output = match cmd {
        ExportCommands::Csv { output } => {
            let mut writer = open_output(&output)?;
            export_transactions_csv(&state.transactions, &mut writer)?;
            writer.flush()?;
            output
        }
        ExportCommands::Json { output, compact } => {
            let mut writer = open_output(&output)?;
            export_full_json(state, &mut writer, !compact)?;
            writeln!(writer)?;
            writer.flush()?;
            output
        }
        ExportCommands::Yaml { output } => {
            let mut writer = open_output(&output)?;
            export_full_yaml(state, &mut writer)?;
            writer.flush()?;
            output
        }
    };

    if let Some(path) = output {
        eprintln!("Exported to {}", path.display());
    }

    Ok(())
}
