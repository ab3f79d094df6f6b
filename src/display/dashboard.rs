//! Dashboard and profile views

use super::format::{format_bar, format_percentage, money, money_colored, separator};
use crate::models::UserProfile;
use crate::reports::{bar_percent, DashboardSummary, LifetimeStats};

const WIDTH: usize = 56;

/// Format the dashboard summary
pub fn format_dashboard(summary: &DashboardSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Dashboard {} to {}\n",
        summary.range.start, summary.range.end
    ));
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "Total income:      {}\n",
        money(summary.total_income, symbol)
    ));
    output.push_str(&format!(
        "Total expenses:    {}\n",
        money(summary.total_expenses, symbol)
    ));
    output.push_str(&format!(
        "Remaining budget:  {}\n",
        money_colored(summary.remaining_budget, symbol)
    ));
    output.push_str(&format!(
        "Savings:           {}\n",
        money_colored(summary.savings, symbol)
    ));

    if !summary.monthly.is_empty() {
        output.push_str("\nMonthly\n");
        for bucket in &summary.monthly {
            output.push_str(&format!(
                "  {:<5} income {:>14}  expenses {:>14}\n",
                bucket.month,
                money(bucket.income, symbol),
                money(bucket.expenses, symbol)
            ));
        }
    }

    if !summary.categories.is_empty() {
        output.push_str("\nSpending by category\n");
        for spend in &summary.categories {
            output.push_str(&format!(
                "  {:<16} {:>14}\n",
                spend.category,
                money(spend.total, symbol)
            ));
        }
    }

    if !summary.budgets.is_empty() {
        output.push_str("\nBudget progress (this month)\n");
        for row in &summary.budgets {
            output.push_str(&format!(
                "  {:<16} {} {:>5}  {}\n",
                row.category,
                format_bar(bar_percent(row.progress), 20),
                format_percentage(row.progress),
                row.status
            ));
        }
    }

    output.push_str("\nToday's expenses\n");
    if summary.today_expenses.is_empty() {
        output.push_str("  (none)\n");
    } else {
        for txn in &summary.today_expenses {
            output.push_str(&format!(
                "  {:<16} {:>14}  {}\n",
                txn.category,
                money(txn.amount, symbol),
                txn.note
            ));
        }
    }

    output
}

/// Format the profile page
pub fn format_profile(user: &UserProfile, stats: &LifetimeStats) -> String {
    let symbol = user.currency.as_str();
    let mut output = String::new();

    output.push_str(&format!("Name:      {}\n", user.name));
    output.push_str(&format!("Email:     {}\n", user.email));
    output.push_str(&format!("Currency:  {}\n", user.currency));
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "Lifetime income:    {}\n",
        money(stats.total_income, symbol)
    ));
    output.push_str(&format!(
        "Lifetime expenses:  {}\n",
        money(stats.total_expenses, symbol)
    ));
    output.push_str(&format!(
        "Lifetime savings:   {}\n",
        money(stats.total_savings, symbol)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::seed_state;
    use crate::reports::DateRange;
    use chrono::NaiveDate;

    #[test]
    fn test_dashboard_output() {
        let state = seed_state();
        let today = NaiveDate::from_ymd_opt(2025, 6, 18).unwrap();
        let summary =
            DashboardSummary::compute(&state, DateRange::current_month_to_date(today), today);

        let text = format_dashboard(&summary, "₹");
        assert!(text.starts_with("Dashboard 2025-06-01 to 2025-06-18"));
        assert!(text.contains("Total income:      ₹67000.00"));
        assert!(text.contains("Total expenses:    ₹11500.00"));
        assert!(text.contains("Housing"));
        assert!(text.contains("(none)"));
    }

    #[test]
    fn test_profile_output() {
        let state = seed_state();
        let stats = LifetimeStats::compute(&state.transactions);

        let text = format_profile(&state.user, &stats);
        assert!(text.contains("Name:      Manoj Yadav"));
        assert!(text.contains("Lifetime income:    ₹277000.00"));
        assert!(text.contains("Lifetime expenses:  ₹51500.00"));
        assert!(text.contains("Lifetime savings:   ₹225500.00"));
    }
}
