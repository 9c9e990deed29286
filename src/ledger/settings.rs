//! Settings operations on the ledger

use crate::activity::{ActivityEntry, EntityType, Operation};
use crate::config::{Settings, Theme};
use crate::error::{MoneyTrackError, MoneyTrackResult};
use crate::storage::KeyValueStore;

use super::Ledger;

impl<S: KeyValueStore> Ledger<S> {
    /// Switch between light and dark, returning the new theme
    pub fn toggle_theme(&mut self) -> MoneyTrackResult<Theme> {
        let theme = self.settings.theme.toggled();
        self.update_settings(format!("Theme set to {}", theme), |s| s.theme = theme)?;
        Ok(theme)
    }

    /// Change the display currency (a three-letter ISO code)
    pub fn set_currency(&mut self, code: &str) -> MoneyTrackResult<()> {
        let code = code.trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(MoneyTrackError::Validation(format!(
                "Currency must be a three-letter code, got '{}'",
                code
            )));
        }
        let code = code.to_uppercase();
        self.update_settings(format!("Currency set to {}", code), |s| s.currency = code.clone())
    }

    /// Change the view shown on start-up
    pub fn set_default_view(&mut self, view: &str) -> MoneyTrackResult<()> {
        let view = view.trim();
        if view.is_empty() {
            return Err(MoneyTrackError::Validation("View name cannot be empty".into()));
        }
        self.update_settings(format!("Default view set to {}", view), |s| {
            s.default_view = view.to_string()
        })
    }

    fn update_settings(
        &mut self,
        message: String,
        change: impl FnOnce(&mut Settings),
    ) -> MoneyTrackResult<()> {
        let mut staged = self.settings.clone();
        change(&mut staged);

        if let Err(err) = staged.save(&mut self.store) {
            self.log_failure(Operation::Update, EntityType::Settings, &err);
            return Err(err);
        }

        self.settings = staged;
        self.log_activity(ActivityEntry::info(Operation::Update, EntityType::Settings, message));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_toggle_theme_persists() {
        let mut ledger = Ledger::open(MemoryStore::new()).unwrap();
        assert_eq!(ledger.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(ledger.settings().theme, Theme::Dark);

        let mut reopened = Ledger::open(ledger.into_store()).unwrap();
        assert_eq!(reopened.settings().theme, Theme::Dark);
        assert_eq!(reopened.toggle_theme().unwrap(), Theme::Light);
    }

    #[test]
    fn test_set_currency() {
        let mut ledger = Ledger::open(MemoryStore::new()).unwrap();
        ledger.set_currency(" usd ").unwrap();
        assert_eq!(ledger.settings().currency, "USD");
        assert_eq!(ledger.settings().currency_symbol(), "$");

        assert!(ledger.set_currency("dollars").unwrap_err().is_validation());
        assert!(ledger.set_currency("U5D").unwrap_err().is_validation());
        assert_eq!(ledger.settings().currency, "USD");
    }

    #[test]
    fn test_set_default_view() {
        let mut ledger = Ledger::open(MemoryStore::new()).unwrap();
        ledger.set_default_view("transactions").unwrap();
        assert_eq!(ledger.settings().default_view, "transactions");
        assert!(ledger.set_default_view("  ").is_err());
    }

    #[test]
    fn test_failed_write_keeps_settings() {
        let mut store = Ledger::open(MemoryStore::new()).unwrap().into_store();
        store.set_quota(Some(store.used_bytes()));
        let mut ledger = Ledger::open(store).unwrap();

        assert!(ledger.toggle_theme().unwrap_err().is_storage());
        assert_eq!(ledger.settings().theme, Theme::Light);
    }
}
