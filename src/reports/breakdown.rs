//! Monthly and per-category breakdowns
//!
//! Both keep buckets in the order their first transaction is encountered,
//! not in calendar or alphabetical order.

use crate::models::{Money, Transaction, TransactionType};

/// Income and expense totals for one month label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBucket {
    /// Short month name, e.g. "Jun"
    pub month: String,
    pub income: Money,
    pub expenses: Money,
}

/// Expense total for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpend {
    pub category: String,
    pub total: Money,
}

/// Group transactions by short month name
///
/// The bucket key is the label alone, so June 2024 and June 2025 land in the
/// same "Jun" bucket. Bucket order is first-occurrence order.
pub fn monthly_breakdown<'a, I>(transactions: I) -> Vec<MonthBucket>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut buckets: Vec<MonthBucket> = Vec::new();

    for txn in transactions {
        let month = txn.date.format("%b").to_string();
        let idx = match buckets.iter().position(|b| b.month == month) {
            Some(idx) => idx,
            None => {
                buckets.push(MonthBucket {
                    month,
                    income: Money::zero(),
                    expenses: Money::zero(),
                });
                buckets.len() - 1
            }
        };

        match txn.kind {
            TransactionType::Income => buckets[idx].income += txn.amount,
            TransactionType::Expense => buckets[idx].expenses += txn.amount,
        }
    }

    buckets
}

/// Sum expenses per category, in first-occurrence order
pub fn category_breakdown<'a, I>(transactions: I) -> Vec<CategorySpend>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals: Vec<CategorySpend> = Vec::new();

    for txn in transactions.into_iter().filter(|t| t.is_expense()) {
        match totals.iter_mut().find(|c| c.category == txn.category) {
            Some(entry) => entry.total += txn.amount,
            None => totals.push(CategorySpend {
                category: txn.category.clone(),
                total: txn.amount,
            }),
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::seed_state;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monthly_breakdown_first_occurrence_order() {
        let state = seed_state();
        let buckets = monthly_breakdown(&state.transactions);

        let months: Vec<_> = buckets.iter().map(|b| b.month.as_str()).collect();
        assert_eq!(months, vec!["Jun", "May", "Apr", "Mar"]);

        assert_eq!(buckets[0].income, Money::from_units(67000));
        assert_eq!(buckets[0].expenses, Money::from_units(11500));
        assert_eq!(buckets[3].income, Money::from_units(75000));
        assert_eq!(buckets[3].expenses, Money::from_units(16500));
    }

    #[test]
    fn test_monthly_breakdown_merges_same_month_across_years() {
        let txns = vec![
            Transaction::expense("1", Money::from_units(10), "Food", date(2025, 1, 5)),
            Transaction::expense("2", Money::from_units(7), "Food", date(2024, 12, 5)),
            Transaction::income("3", Money::from_units(3), "Salary", date(2024, 1, 9)),
        ];

        let buckets = monthly_breakdown(&txns);
        assert_eq!(buckets.len(), 2);
        assert_eq!(
            buckets[0],
            MonthBucket {
                month: "Jan".into(),
                income: Money::from_units(3),
                expenses: Money::from_units(10),
            }
        );
        assert_eq!(buckets[1].month, "Dec");
    }

    #[test]
    fn test_category_breakdown() {
        let txns = vec![
            Transaction::expense("1", Money::from_units(5), "Housing", date(2025, 6, 1)),
            Transaction::income("2", Money::from_units(100), "Salary", date(2025, 6, 2)),
            Transaction::expense("3", Money::from_units(2), "Food", date(2025, 6, 3)),
            Transaction::expense("4", Money::from_units(4), "Housing", date(2025, 6, 4)),
        ];

        let totals = category_breakdown(&txns);
        assert_eq!(
            totals,
            vec![
                CategorySpend {
                    category: "Housing".into(),
                    total: Money::from_units(9),
                },
                CategorySpend {
                    category: "Food".into(),
                    total: Money::from_units(2),
                },
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let none: Vec<Transaction> = Vec::new();
        assert!(monthly_breakdown(&none).is_empty());
        assert!(category_breakdown(&none).is_empty());
    }
}
