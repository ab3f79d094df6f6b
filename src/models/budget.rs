//! Monthly budget limits per category
//!
//! At most one limit per category; setting a limit overwrites the old one in
//! place. New categories go to the end, so the dashboard lists budgets in the
//! order they were created. A category without an entry has no limit. An
//! entry of zero is treated the same way by budget progress.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::money::Money;

/// Mapping from category name to its monthly limit, in insertion order
///
/// Serialized as a JSON object whose keys keep that order. A repeated key in
/// a document overwrites the earlier value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Budgets(Vec<(String, Money)>);

impl Budgets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or overwrite the limit for a category, returning the previous one
    pub fn set(&mut self, category: impl Into<String>, amount: Money) -> Option<Money> {
        let category = category.into();
        match self.0.iter_mut().find(|(name, _)| *name == category) {
            Some((_, limit)) => Some(std::mem::replace(limit, amount)),
            None => {
                self.0.push((category, amount));
                None
            }
        }
    }

    /// The stored limit, if any (may be zero)
    pub fn get(&self, category: &str) -> Option<Money> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, amount)| *amount)
    }

    /// The limit in effect: `None` when unset or zero
    pub fn limit_for(&self, category: &str) -> Option<Money> {
        self.get(category).filter(|amount| !amount.is_zero())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.0.iter().map(|(category, amount)| (category.as_str(), *amount))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Money)> for Budgets {
    fn from_iter<I: IntoIterator<Item = (S, Money)>>(iter: I) -> Self {
        let mut budgets = Self::new();
        for (category, amount) in iter {
            budgets.set(category, amount);
        }
        budgets
    }
}

impl Serialize for Budgets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, amount) in &self.0 {
            map.serialize_entry(category, amount)?;
        }
        map.end()
    }
}

struct BudgetsVisitor;

impl<'de> Visitor<'de> for BudgetsVisitor {
    type Value = Budgets;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of category names to limits")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut budgets = Budgets::new();
        while let Some((category, amount)) = access.next_entry::<String, Money>()? {
            budgets.set(category, amount);
        }
        Ok(budgets)
    }
}

impl<'de> Deserialize<'de> for Budgets {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(BudgetsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites() {
        let mut budgets = Budgets::new();
        assert_eq!(budgets.set("Food", Money::from_units(100)), None);
        assert_eq!(
            budgets.set("Food", Money::from_units(250)),
            Some(Money::from_units(100))
        );
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets.get("Food"), Some(Money::from_units(250)));
    }

    #[test]
    fn test_zero_means_no_limit() {
        let budgets: Budgets = [("Food", Money::zero()), ("Housing", Money::from_units(10))]
            .into_iter()
            .collect();

        assert_eq!(budgets.get("Food"), Some(Money::zero()));
        assert_eq!(budgets.limit_for("Food"), None);
        assert_eq!(budgets.limit_for("Housing"), Some(Money::from_units(10)));
        assert_eq!(budgets.limit_for("Travel"), None);
    }

    #[test]
    fn test_serializes_as_object() {
        let budgets: Budgets = [("Food", Money::from_units(10000))].into_iter().collect();
        assert_eq!(serde_json::to_string(&budgets).unwrap(), r#"{"Food":10000}"#);
    }

    #[test]
    fn test_keeps_insertion_order() {
        let mut budgets = Budgets::new();
        budgets.set("Food", Money::from_units(10000));
        budgets.set("Housing", Money::from_units(20000));
        budgets.set("Transportation", Money::from_units(5000));
        budgets.set("Entertainment", Money::from_units(3000));
        budgets.set("Food", Money::from_units(9000));

        let order: Vec<_> = budgets.iter().map(|(category, _)| category).collect();
        assert_eq!(order, vec!["Food", "Housing", "Transportation", "Entertainment"]);
        assert_eq!(
            serde_json::to_string(&budgets).unwrap(),
            r#"{"Food":9000,"Housing":20000,"Transportation":5000,"Entertainment":3000}"#
        );
    }

    #[test]
    fn test_deserialize_keeps_document_order() {
        let budgets: Budgets =
            serde_json::from_str(r#"{"Travel":1,"Food":2,"Bills":3,"Food":4}"#).unwrap();

        let entries: Vec<_> = budgets.iter().collect();
        assert_eq!(
            entries,
            vec![
                ("Travel", Money::from_units(1)),
                ("Food", Money::from_units(4)),
                ("Bills", Money::from_units(3)),
            ]
        );
        assert!(serde_json::from_str::<Budgets>("[1, 2]").is_err());
    }
}
