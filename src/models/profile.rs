//! User profile
//!
//! A singleton record. The currency symbol is a display attribute and never
//! takes part in arithmetic.

use serde::{Deserialize, Serialize};

/// Currencies offered to the user, as (symbol, name)
pub const SUPPORTED_CURRENCIES: &[(&str, &str)] = &[
    ("₹", "Indian Rupee"),
    ("$", "US Dollar"),
    ("€", "Euro"),
    ("£", "British Pound"),
    ("¥", "Japanese Yen"),
];

/// Look up the display name of a supported currency symbol
pub fn currency_name(symbol: &str) -> Option<&'static str> {
    SUPPORTED_CURRENCIES
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, name)| *name)
}

/// The user profile stored with the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub currency: String,
}

impl UserProfile {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            currency: currency.into(),
        }
    }

    /// Shallow merge: every field present in `update` overwrites, the rest is kept
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(currency) = update.currency {
            self.currency = currency;
        }
    }
}

/// Partial profile used by `Ledger::update_user`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl ProfileUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.currency.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_keeps_omitted_fields() {
        let mut profile = UserProfile::new("Ana", "ana@example.com", "₹");
        profile.apply(ProfileUpdate::new().currency("€"));

        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.email, "ana@example.com");
        assert_eq!(profile.currency, "€");
    }

    #[test]
    fn test_currency_lookup() {
        assert_eq!(currency_name("£"), Some("British Pound"));
        assert_eq!(currency_name("CHF"), None);
    }

    #[test]
    fn test_empty_update() {
        assert!(ProfileUpdate::new().is_empty());
        assert!(!ProfileUpdate::new().name("x").is_empty());
    }
}
