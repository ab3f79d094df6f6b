//! Budget display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{format_bar, format_percentage, money};
use crate::reports::{bar_percent, BudgetLine, BudgetOverview};

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budget")]
    limit: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Progress")]
    bar: String,
    #[tabled(rename = "%")]
    percent: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl BudgetRow {
    fn new(line: &BudgetLine, symbol: &str) -> Self {
        if !line.has_limit() {
            return Self {
                category: line.category.clone(),
                limit: "-".into(),
                spent: money(line.spent, symbol),
                bar: String::new(),
                percent: String::new(),
                status: "No budget".into(),
            };
        }

        Self {
            category: line.category.clone(),
            limit: money(line.limit, symbol),
            spent: money(line.spent, symbol),
            bar: format_bar(bar_percent(line.progress), 20),
            percent: format_percentage(line.progress),
            status: line.status.to_string(),
        }
    }
}

/// Format the budgets page
pub fn format_budget_overview(overview: &BudgetOverview, symbol: &str) -> String {
    let mut output = format!("Budgets for {}\n", overview.month);

    let mut table = Table::new(overview.lines.iter().map(|l| BudgetRow::new(l, symbol)));
    table.with(Style::rounded());
    output.push_str(&table.to_string());
    output.push('\n');

    for line in overview.exceeded() {
        output.push_str(&format!("Budget exceeded: {}\n", line.category));
    }

    output
}
