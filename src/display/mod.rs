//! Display formatting for terminal output
//!
//! Provides utilities for formatting transactions, categories and settings
//! for terminal display.

pub mod category;
pub mod transaction;

pub use category::{format_category_details, format_category_list};
pub use transaction::{format_transaction_details, format_transaction_register, format_transaction_row};

use crate::config::Settings;

/// Format the settings singleton
pub fn format_settings(settings: &Settings) -> String {
    format!(
        "Currency:     {} ({})\nTheme:        {}\nDefault view: {}\n",
        settings.currency,
        settings.currency_symbol().trim_end(),
        settings.theme,
        settings.default_view
    )
}
