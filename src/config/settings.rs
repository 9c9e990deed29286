//! User settings for MoneyTrack
//!
//! The settings singleton (currency, theme, default view) is persisted as its
//! own blob in the key-value store alongside the ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::MoneyTrackResult;
use crate::storage::{load_json, save_json, KeyValueStore, SETTINGS_KEY};

/// Color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// ISO currency code used for display
    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub theme: Theme,

    /// View shown on start-up
    #[serde(default = "default_view")]
    pub default_view: String,
}

fn default_currency() -> String {
    "ZAR".to_string()
}

fn default_view() -> String {
    "dashboard".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            theme: Theme::default(),
            default_view: default_view(),
        }
    }
}

impl Settings {
    /// Load settings from the store, falling back to defaults when absent
    pub fn load_or_default<S: KeyValueStore + ?Sized>(store: &S) -> MoneyTrackResult<Self> {
        Ok(load_json(store, SETTINGS_KEY)?.unwrap_or_default())
    }

    /// Save settings to the store
    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> MoneyTrackResult<()> {
        save_json(store, SETTINGS_KEY, self)
    }

    /// Symbol shown in front of amounts for the configured currency
    pub fn currency_symbol(&self) -> String {
        match self.currency.to_uppercase().as_str() {
            "ZAR" => "R".to_string(),
            "USD" | "AUD" | "CAD" | "NZD" => "$".to_string(),
            "EUR" => "€".to_string(),
            "GBP" => "£".to_string(),
            "JPY" | "CNY" => "¥".to_string(),
            "INR" => "₹".to_string(),
            other => format!("{} ", other),
        }
    }
}
