//! Totals over a set of transactions

use crate::models::{Budgets, Money, Transaction, TransactionType};

/// Sum of amounts of the given type; zero when nothing matches
pub fn total_by_type<'a, I>(transactions: I, kind: TransactionType) -> Money
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Income minus expenses
pub fn savings<'a, I>(transactions: I) -> Money
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .fold(Money::zero(), |acc, t| match t.kind {
            TransactionType::Income => acc + t.amount,
            TransactionType::Expense => acc - t.amount,
        })
}

/// Expenses recorded against one category
pub fn spent_in_category<'a, I>(transactions: I, category: &str) -> Money
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|t| t.is_expense() && t.category == category)
        .map(|t| t.amount)
        .sum()
}

/// Sum of `budget - spent` over every budgeted category
///
/// Categories without a budget entry contribute nothing, neither their
/// spending nor an implicit zero limit.
pub fn remaining_budget<'a, I>(budgets: &Budgets, transactions: I) -> Money
where
    I: IntoIterator<Item = &'a Transaction> + Clone,
{
    budgets
        .iter()
        .map(|(category, limit)| limit - spent_in_category(transactions.clone(), category))
        .sum()
}

/// All-time figures shown on the profile page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifetimeStats {
    pub total_income: Money,
    pub total_expenses: Money,
    pub total_savings: Money,
}

impl LifetimeStats {
    pub fn compute(transactions: &[Transaction]) -> Self {
        let total_income = total_by_type(transactions, TransactionType::Income);
        let total_expenses = total_by_type(transactions, TransactionType::Expense);
        Self {
            total_income,
            total_expenses,
            total_savings: total_income - total_expenses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn test_total_by_type() {
        let txns = vec![
            Transaction::income("1", Money::from_units(55000), "Salary", date(1)),
            Transaction::expense("2", Money::from_units(2500), "Food", date(3)),
            Transaction::income("3", Money::from_cents(1050), "Freelance", date(4)),
        ];

        assert_eq!(
            total_by_type(&txns, TransactionType::Income),
            Money::from_cents(5_501_050)
        );
        assert_eq!(
            total_by_type(&txns, TransactionType::Expense),
            Money::from_units(2500)
        );

        let none: Vec<Transaction> = Vec::new();
        assert_eq!(total_by_type(&none, TransactionType::Expense), Money::zero());
    }

    #[test]
    fn test_savings_is_income_minus_expenses() {
        let txns = vec![
            Transaction::income("1", Money::from_units(100), "Salary", date(1)),
            Transaction::expense("2", Money::from_units(130), "Food", date(2)),
        ];

        assert_eq!(savings(&txns), Money::from_units(-30));
        assert_eq!(
            savings(&txns),
            total_by_type(&txns, TransactionType::Income)
                - total_by_type(&txns, TransactionType::Expense)
        );
    }

    #[test]
    fn test_remaining_budget() {
        let budgets: Budgets = [("Food", Money::from_units(10000))].into_iter().collect();
        let txns = vec![
            Transaction::expense("1", Money::from_units(3000), "Food", date(1)),
            Transaction::expense("2", Money::from_units(2000), "Food", date(2)),
        ];

        assert_eq!(remaining_budget(&budgets, &txns), Money::from_units(5000));
    }

    #[test]
    fn test_remaining_budget_ignores_unbudgeted_and_income() {
        let budgets: Budgets = [
            ("Food", Money::from_units(100)),
            ("Housing", Money::from_units(500)),
        ]
        .into_iter()
        .collect();
        let txns = vec![
            Transaction::expense("1", Money::from_units(40), "Food", date(1)),
            Transaction::expense("2", Money::from_units(999), "Travel", date(2)),
            Transaction::income("3", Money::from_units(70), "Food", date(3)),
            Transaction::expense("4", Money::from_units(600), "Housing", date(4)),
        ];

        // (100 - 40) + (500 - 600)
        assert_eq!(remaining_budget(&budgets, &txns), Money::from_units(-40));
    }

    #[test]
    fn test_lifetime_stats() {
        let txns = vec![
            Transaction::income("1", Money::from_units(100), "Salary", date(1)),
            Transaction::expense("2", Money::from_units(30), "Food", date(2)),
        ];
        let stats = LifetimeStats::compute(&txns);
        assert_eq!(stats.total_expenses, Money::from_units(30));
        assert_eq!(stats.total_savings, Money::from_units(70));
    }
}
