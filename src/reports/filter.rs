//! Date-range selection

use chrono::{Datelike, NaiveDate};

use crate::models::Transaction;

/// An inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// First day of `today`'s month through `today`, the dashboard default
    pub fn current_month_to_date(today: NaiveDate) -> Self {
        let start = today.with_day(1).unwrap_or(today);
        Self { start, end: today }
    }

    /// Whether `date` lies in the range. Always false when `start > end`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

/// Transactions with `start <= date <= end`, in stored order
pub fn filter_by_date_range<'a, I>(
    transactions: I,
    start: NaiveDate,
    end: NaiveDate,
) -> impl Iterator<Item = &'a Transaction> + 'a
where
    I: IntoIterator<Item = &'a Transaction>,
    I::IntoIter: 'a,
{
    let range = DateRange::new(start, end);
    transactions.into_iter().filter(move |t| range.contains(t.date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::expense("1", Money::from_units(1), "Food", date(2025, 5, 31)),
            Transaction::expense("2", Money::from_units(1), "Food", date(2025, 6, 1)),
            Transaction::expense("3", Money::from_units(1), "Food", date(2025, 6, 15)),
            Transaction::expense("4", Money::from_units(1), "Food", date(2025, 6, 30)),
            Transaction::expense("5", Money::from_units(1), "Food", date(2025, 7, 1)),
        ]
    }

    fn ids<'a>(iter: impl Iterator<Item = &'a Transaction>) -> Vec<&'a str> {
        iter.map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let txns = sample();
        let selected = ids(filter_by_date_range(&txns, date(2025, 6, 1), date(2025, 6, 30)));
        assert_eq!(selected, vec!["2", "3", "4"]);
    }

    #[test]
    fn test_single_day_range() {
        let txns = sample();
        let selected = ids(filter_by_date_range(&txns, date(2025, 6, 15), date(2025, 6, 15)));
        assert_eq!(selected, vec!["3"]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let txns = sample();
        assert_eq!(
            filter_by_date_range(&txns, date(2025, 7, 1), date(2025, 5, 1)).count(),
            0
        );
        assert!(DateRange::new(date(2025, 7, 1), date(2025, 5, 1)).is_empty());
    }

    #[test]
    fn test_current_month_to_date() {
        let range = DateRange::current_month_to_date(date(2025, 6, 18));
        assert_eq!(range.start, date(2025, 6, 1));
        assert_eq!(range.end, date(2025, 6, 18));
        assert!(range.contains(date(2025, 6, 18)));
        assert!(!range.contains(date(2025, 6, 19)));
    }
}
