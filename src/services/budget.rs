//! Budget service
//!
//! Validates monthly limits before they reach the ledger and builds the
//! budgets page overview.

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::ledger::Ledger;
use crate::models::Money;
use crate::reports::BudgetOverview;
use crate::storage::SnapshotBackend;

/// Service for budget management
pub struct BudgetService<'a, B: SnapshotBackend> {
    ledger: &'a mut Ledger<B>,
}

impl<'a, B: SnapshotBackend> BudgetService<'a, B> {
    pub fn new(ledger: &'a mut Ledger<B>) -> Self {
        Self { ledger }
    }

    /// Set the monthly limit of a category
    pub fn set(&mut self, category: &str, amount: Money) -> FinanceResult<()> {
        let category = category.trim();
        if category.is_empty() {
            return Err(FinanceError::Validation(
                "Budget category cannot be empty".into(),
            ));
        }
        if !amount.is_positive() {
            return Err(FinanceError::Validation(format!(
                "Budget for '{}' must be greater than zero",
                category
            )));
        }

        self.ledger.set_budget(category, amount)
    }

    /// Limit currently stored for a category
    pub fn get(&self, category: &str) -> Option<Money> {
        self.ledger.state().budgets.get(category)
    }

    /// Progress of every budgetable category in the month of `today`
    pub fn overview(&self, today: NaiveDate) -> BudgetOverview {
        BudgetOverview::compute(self.ledger.state(), today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BudgetStatus;
    use crate::storage::MemoryBackend;

    #[test]
    fn test_set_budget() {
        let mut ledger = Ledger::open(MemoryBackend::new()).unwrap();
        let mut service = BudgetService::new(&mut ledger);

        service.set("Travel", Money::from_units(2500)).unwrap();
        service.set("Food", Money::from_units(12000)).unwrap();
        assert_eq!(service.get("Travel"), Some(Money::from_units(2500)));
        assert_eq!(service.get("Food"), Some(Money::from_units(12000)));
    }

    #[test]
    fn test_non_positive_budget_rejected() {
        let mut ledger = Ledger::open(MemoryBackend::new()).unwrap();
        let writes = ledger.backend().write_count();
        let mut service = BudgetService::new(&mut ledger);

        assert!(service.set("Food", Money::zero()).unwrap_err().is_validation());
        assert!(service
            .set("Food", Money::from_units(-1))
            .unwrap_err()
            .is_validation());
        assert!(service
            .set(" ", Money::from_units(1))
            .unwrap_err()
            .is_validation());
        assert_eq!(service.get("Food"), Some(Money::from_units(10000)));
        assert_eq!(ledger.backend().write_count(), writes);
    }

    #[test]
    fn test_overview_on_seed() {
        let mut ledger = Ledger::open(MemoryBackend::new()).unwrap();
        let service = BudgetService::new(&mut ledger);
        let today = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();

        let overview = service.overview(today);
        let entertainment = overview
            .lines
            .iter()
            .find(|l| l.category == "Entertainment")
            .unwrap();
        // 4000 spent against 3000
        assert_eq!(entertainment.status, BudgetStatus::Exceeded);
        assert_eq!(overview.exceeded().count(), 1);
    }
}
