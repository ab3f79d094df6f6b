//! Category suggestions
//!
//! Categories are free-form labels on a transaction. These lists are only
//! what the front end offers; nothing validates against them.

/// Categories suggested when recording a transaction
pub const TRANSACTION_CATEGORIES: &[&str] = &[
    "Salary",
    "Freelance",
    "Investments",
    "Food",
    "Transportation",
    "Housing",
    "Utilities",
    "Entertainment",
    "Healthcare",
    "Education",
    "Shopping",
    "Other",
];

/// Categories that can carry a monthly budget
pub const BUDGET_CATEGORIES: &[&str] = &[
    "Food",
    "Transportation",
    "Housing",
    "Utilities",
    "Entertainment",
    "Healthcare",
    "Education",
    "Shopping",
    "Other",
];

/// Whether a label is one of the suggested transaction categories
pub fn is_suggested(category: &str) -> bool {
    TRANSACTION_CATEGORIES.contains(&category)
}
