//! Budget progress for the current calendar month
//!
//! Progress ignores any dashboard date range: it always looks at the month
//! containing `today`.

use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::models::{Budgets, LedgerState, Money, Transaction, BUDGET_CATEGORIES};

/// Progress at or above this percentage is a warning
pub const WARNING_THRESHOLD: f64 = 80.0;

/// Progress at or above this percentage means the budget is exceeded
pub const EXCEEDED_THRESHOLD: f64 = 100.0;

/// Presentation band of a progress value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Normal,
    Warning,
    Exceeded,
}

impl BudgetStatus {
    pub fn from_progress(progress: f64) -> Self {
        if progress >= EXCEEDED_THRESHOLD {
            Self::Exceeded
        } else if progress >= WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "OK"),
            Self::Warning => write!(f, "Warning"),
            Self::Exceeded => write!(f, "Exceeded"),
        }
    }
}

/// Progress clamped to 100 for a progress bar; the raw value is not clamped
pub fn bar_percent(progress: f64) -> f64 {
    progress.clamp(0.0, 100.0)
}

fn in_month_of(date: NaiveDate, today: NaiveDate) -> bool {
    date.year() == today.year() && date.month() == today.month()
}

/// Expenses in `category` dated in the same calendar month as `today`
pub fn month_spent<'a, I>(category: &str, transactions: I, today: NaiveDate) -> Money
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|t| t.is_expense() && t.category == category && in_month_of(t.date, today))
        .map(|t| t.amount)
        .sum()
}

/// `spent / budget * 100` for this month, or 0 when no limit is set
pub fn budget_progress<'a, I>(
    category: &str,
    budgets: &Budgets,
    transactions: I,
    today: NaiveDate,
) -> f64
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let Some(limit) = budgets.limit_for(category) else {
        return 0.0;
    };

    let spent = month_spent(category, transactions, today);
    spent.cents() as f64 / limit.cents() as f64 * 100.0
}

/// Expenses dated exactly `today`
pub fn todays_expenses<'a, I>(transactions: I, today: NaiveDate) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|t| t.is_expense() && t.date == today)
        .collect()
}

/// One row of the budgets page
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetLine {
    pub category: String,
    /// Stored limit, zero when unset
    pub limit: Money,
    pub spent: Money,
    pub progress: f64,
    pub status: BudgetStatus,
}

impl BudgetLine {
    pub fn has_limit(&self) -> bool {
        !self.limit.is_zero()
    }
}

/// Budget status of every budgetable category for the current month
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetOverview {
    pub month: String,
    pub lines: Vec<BudgetLine>,
}

impl BudgetOverview {
    /// Lines for the standard budget categories, followed by any other
    /// category that has a stored limit
    pub fn compute(state: &LedgerState, today: NaiveDate) -> Self {
        let mut categories: Vec<&str> = BUDGET_CATEGORIES.to_vec();
        categories.extend(
            state
                .budgets
                .iter()
                .map(|(category, _)| category)
                .filter(|category| !BUDGET_CATEGORIES.contains(category)),
        );

        let lines = categories
            .into_iter()
            .map(|category| {
                let progress =
                    budget_progress(category, &state.budgets, &state.transactions, today);
                BudgetLine {
                    category: category.to_string(),
                    limit: state.budgets.get(category).unwrap_or_default(),
                    spent: month_spent(category, &state.transactions, today),
                    progress,
                    status: BudgetStatus::from_progress(progress),
                }
            })
            .collect();

        Self {
            month: today.format("%B %Y").to_string(),
            lines,
        }
    }

    /// Lines whose budget is exceeded
    pub fn exceeded(&self) -> impl Iterator<Item = &BudgetLine> {
        self.lines
            .iter()
            .filter(|line| line.status == BudgetStatus::Exceeded)
    }
}
