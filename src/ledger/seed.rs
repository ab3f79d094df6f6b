//! Seed dataset
//!
//! The sample ledger a fresh installation starts from: four months of salary,
//! freelance income and household expenses, budgets for the four spending
//! categories, and a default profile.

use chrono::NaiveDate;

use crate::models::{Budgets, LedgerState, Money, Transaction, TransactionType, UserProfile};

use crate::models::TransactionType::{Expense, Income};

/// (id, type, amount, category, date, note)
const SEED_TRANSACTIONS: &[(&str, TransactionType, i64, &str, (i32, u32, u32), &str)] = &[
    ("1", Income, 55000, "Salary", (2025, 6, 1), "Monthly salary"),
    ("2", Expense, 2500, "Food", (2025, 6, 3), "Grocery shopping"),
    ("3", Expense, 6000, "Housing", (2025, 6, 5), "Rent payment"),
    ("4", Income, 12000, "Freelance", (2025, 6, 10), "Website redesign project"),
    ("5", Expense, 3000, "Transportation", (2025, 6, 15), "Car fuel"),
    ("6", Income, 55000, "Salary", (2025, 5, 1), "Monthly salary"),
    ("7", Expense, 2000, "Food", (2025, 5, 4), "Dinner at a restaurant"),
    ("8", Expense, 5000, "Housing", (2025, 5, 6), "Rent payment"),
    ("9", Income, 15000, "Freelance", (2025, 5, 12), "Mobile app development"),
    ("10", Expense, 4000, "Entertainment", (2025, 5, 18), "Concert tickets"),
    ("11", Income, 55000, "Salary", (2025, 4, 1), "Monthly salary"),
    ("12", Expense, 3000, "Food", (2025, 4, 5), "Grocery shopping"),
    ("13", Expense, 7000, "Housing", (2025, 4, 7), "Rent payment"),
    ("14", Income, 10000, "Freelance", (2025, 4, 15), "Logo design project"),
    ("15", Expense, 2500, "Transportation", (2025, 4, 20), "Bus and train tickets"),
    ("16", Income, 55000, "Salary", (2025, 3, 1), "Monthly salary"),
    ("17", Expense, 3500, "Food", (2025, 3, 3), "Grocery shopping"),
    ("18", Expense, 8000, "Housing", (2025, 3, 5), "Rent payment"),
    ("19", Income, 20000, "Freelance", (2025, 3, 10), "E-commerce website project"),
    ("20", Expense, 5000, "Entertainment", (2025, 3, 15), "Vacation expenses"),
];

const SEED_BUDGETS: &[(&str, i64)] = &[
    ("Food", 10000),
    ("Housing", 20000),
    ("Transportation", 5000),
    ("Entertainment", 3000),
];

/// Build the seed ledger state
pub fn seed_state() -> LedgerState {
    let transactions = SEED_TRANSACTIONS
        .iter()
        .filter_map(|&(id, kind, amount, category, (y, m, d), note)| {
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(Transaction::new(
                id,
                kind,
                Money::from_units(amount),
                category,
                date,
                note,
            ))
        })
        .collect();

    let budgets: Budgets = SEED_BUDGETS
        .iter()
        .map(|&(category, amount)| (category, Money::from_units(amount)))
        .collect();

    LedgerState {
        transactions,
        budgets,
        user: UserProfile::new("Manoj Yadav", "manoj@gmail.com", "₹"),
    }
}
