//! Settings CLI commands

use clap::Subcommand;

use crate::display::format_settings;
use crate::error::MoneyTrackResult;
use crate::ledger::Ledger;
use crate::storage::KeyValueStore;

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show current settings
    Show,

    /// Switch between light and dark theme
    Theme,

    /// Set the display currency
    Currency {
        /// Three-letter currency code (e.g., ZAR, USD, EUR)
        code: String,
    },

    /// Set the default view
    View {
        /// View name (e.g., dashboard, transactions)
        name: String,
    },
}

/// Handle settings commands
pub fn handle_settings_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    cmd: SettingsCommands,
) -> MoneyTrackResult<()> {
    match cmd {
        SettingsCommands::Show => {
            print!("{}", format_settings(ledger.settings()));
        }
        SettingsCommands::Theme => {
            let theme = ledger.toggle_theme()?;
            println!("Theme set to {}", theme);
        }
        SettingsCommands::Currency { code } => {
            ledger.set_currency(&code)?;
            println!(
                "Currency set to {} ({})",
                ledger.settings().currency,
                ledger.settings().currency_symbol().trim_end()
            );
        }
        SettingsCommands::View { name } => {
            ledger.set_default_view(&name)?;
            println!("Default view set to {}", ledger.settings().default_view);
        }
    }

    Ok(())
}
