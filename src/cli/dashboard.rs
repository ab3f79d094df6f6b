//! Dashboard CLI command

use clap::Args;

use super::{parse_date, today};
use crate::display::format_dashboard;
use crate::error::FinanceResult;
use crate::ledger::Ledger;
use crate::reports::{DashboardSummary, DateRange};
use crate::storage::SnapshotBackend;

/// Dashboard arguments
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Range start (YYYY-MM-DD), defaults to the first of this month
    #[arg(long)]
    pub from: Option<String>,
    /// Range end (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub to: Option<String>,
}

impl DashboardArgs {
    fn range(&self) -> FinanceResult<DateRange> {
        let default = DateRange::current_month_to_date(today());
        let start = match &self.from {
            Some(from) => parse_date(from)?,
            None => default.start,
        };
        let end = match &self.to {
            Some(to) => parse_date(to)?,
            None => default.end,
        };
        Ok(DateRange::new(start, end))
    }
}

/// Handle the dashboard command
pub fn handle_dashboard_command<B: SnapshotBackend>(
    ledger: &Ledger<B>,
    args: DashboardArgs,
) -> FinanceResult<()> {
    let range = args.range()?;
    let summary = DashboardSummary::compute(ledger.state(), range, today());
    print!("{}", format_dashboard(&summary, ledger.state().currency()));
    Ok(())
}
