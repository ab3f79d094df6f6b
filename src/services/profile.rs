//! Profile service

use crate::error::{FinanceError, FinanceResult};
use crate::ledger::Ledger;
use crate::models::{profile::currency_name, ProfileUpdate, UserProfile};
use crate::storage::SnapshotBackend;

/// Service for the user profile
pub struct ProfileService<'a, B: SnapshotBackend> {
    ledger: &'a mut Ledger<B>,
}

impl<'a, B: SnapshotBackend> ProfileService<'a, B> {
    pub fn new(ledger: &'a mut Ledger<B>) -> Self {
        Self { ledger }
    }

    pub fn get(&self) -> &UserProfile {
        &self.ledger.state().user
    }

    /// Validate and merge a partial profile
    pub fn update(&mut self, update: ProfileUpdate) -> FinanceResult<&UserProfile> {
        let update = ProfileUpdate {
            name: update.name.map(|s| s.trim().to_string()),
            email: update.email.map(|s| s.trim().to_string()),
            currency: update.currency.map(|s| s.trim().to_string()),
        };

        if update.name.as_deref() == Some("") {
            return Err(FinanceError::Validation("Name cannot be empty".into()));
        }

        if let Some(email) = update.email.as_deref() {
            if email.is_empty() || !email.contains('@') {
                return Err(FinanceError::Validation(format!(
                    "'{}' is not a valid email address",
                    email
                )));
            }
        }

        if let Some(currency) = update.currency.as_deref() {
            if currency_name(currency).is_none() {
                return Err(FinanceError::Validation(format!(
                    "Unsupported currency '{}'",
                    currency
                )));
            }
        }

        if !update.is_empty() {
            self.ledger.update_user(update)?;
        }
        Ok(self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    #[test]
    fn test_update_profile() {
        let mut ledger = Ledger::open(MemoryBackend::new()).unwrap();
        let mut service = ProfileService::new(&mut ledger);

        let user = service
            .update(ProfileUpdate::new().name(" Asha ").currency("€"))
            .unwrap();
        assert_eq!(user.name, "Asha");
        assert_eq!(user.currency, "€");
        assert_eq!(user.email, "manoj@gmail.com");
    }

    #[test]
    fn test_invalid_updates_rejected() {
        let mut ledger = Ledger::open(MemoryBackend::new()).unwrap();
        let mut service = ProfileService::new(&mut ledger);

        assert!(service.update(ProfileUpdate::new().name("")).is_err());
        assert!(service.update(ProfileUpdate::new().email("nobody")).is_err());
        assert!(service.update(ProfileUpdate::new().currency("CHF")).is_err());
        assert_eq!(service.get().name, "Manoj Yadav");
    }

    #[test]
    fn test_empty_update_does_not_write() {
        let mut ledger = Ledger::open(MemoryBackend::new()).unwrap();
        let writes = ledger.backend().write_count();

        ProfileService::new(&mut ledger)
            .update(ProfileUpdate::new())
            .unwrap();
        assert_eq!(ledger.backend().write_count(), writes);
    }
}
