//! Dashboard summary
//!
//! Every figure except budget progress is computed over the transactions in
//! the selected date range. `remaining_budget` therefore compares each stored
//! limit with the spending inside the range, not inside the current month.

use chrono::NaiveDate;

use super::breakdown::{category_breakdown, monthly_breakdown, CategorySpend, MonthBucket};
use super::budget_progress::{budget_progress, todays_expenses, BudgetStatus};
use super::filter::{filter_by_date_range, DateRange};
use super::totals::{remaining_budget, savings, total_by_type};
use crate::models::{LedgerState, Money, Transaction, TransactionType};

/// Current-month progress of one budgeted category
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProgressRow {
    pub category: String,
    pub limit: Money,
    pub progress: f64,
    pub status: BudgetStatus,
}

/// All dashboard figures for one date range
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub range: DateRange,
    pub total_income: Money,
    pub total_expenses: Money,
    pub remaining_budget: Money,
    pub savings: Money,
    pub monthly: Vec<MonthBucket>,
    pub categories: Vec<CategorySpend>,
    pub budgets: Vec<BudgetProgressRow>,
    /// Expenses dated `today` within the range
    pub today_expenses: Vec<Transaction>,
}

impl DashboardSummary {
    pub fn compute(state: &LedgerState, range: DateRange, today: NaiveDate) -> Self {
        let filtered: Vec<&Transaction> =
            filter_by_date_range(&state.transactions, range.start, range.end).collect();
        let in_range = || filtered.iter().copied();

        let budgets = state
            .budgets
            .iter()
            .map(|(category, limit)| {
                let progress =
                    budget_progress(category, &state.budgets, &state.transactions, today);
                BudgetProgressRow {
                    category: category.to_string(),
                    limit,
                    progress,
                    status: BudgetStatus::from_progress(progress),
                }
            })
            .collect();

        Self {
            range,
            total_income: total_by_type(in_range(), TransactionType::Income),
            total_expenses: total_by_type(in_range(), TransactionType::Expense),
            remaining_budget: remaining_budget(&state.budgets, in_range()),
            savings: savings(in_range()),
            monthly: monthly_breakdown(in_range()),
            categories: category_breakdown(in_range()),
            budgets,
            today_expenses: todays_expenses(in_range(), today)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}
