//! Aggregation engine for fintrack
//!
//! Pure functions over ledger snapshots: date-range filtering, totals,
//! monthly and per-category breakdowns, budget progress and the dashboard
//! summary that combines them. Nothing here mutates or persists state.

pub mod breakdown;
pub mod budget_progress;
pub mod dashboard;
pub mod filter;
pub mod totals;

pub use breakdown::{category_breakdown, monthly_breakdown, CategorySpend, MonthBucket};
pub use budget_progress::{
    bar_percent, budget_progress, month_spent, todays_expenses, BudgetLine, BudgetOverview,
    BudgetStatus,
};
pub use dashboard::{BudgetProgressRow, DashboardSummary};
pub use filter::{filter_by_date_range, DateRange};
pub use totals::{remaining_budget, savings, spent_in_category, total_by_type, LifetimeStats};
