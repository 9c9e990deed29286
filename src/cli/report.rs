//! CLI commands for reports

use clap::Subcommand;

use crate::error::MoneyTrackResult;
use crate::ledger::Ledger;
use crate::models::Period;
use crate::storage::KeyValueStore;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Income, expenses, balance and savings rate for this month
    Summary,

    /// Expenses grouped by category
    #[command(alias = "spending")]
    Breakdown {
        /// today, week, month, year or all
        #[arg(short, long, default_value = "month")]
        period: String,
    },

    /// All-time totals
    Totals,
}

/// Handle report commands
pub fn handle_report_command<S: KeyValueStore>(
    ledger: &Ledger<S>,
    cmd: ReportCommands,
) -> MoneyTrackResult<()> {
    let symbol = ledger.settings().currency_symbol();

    match cmd {
        ReportCommands::Summary => {
            print!("{}", ledger.monthly_summary().format_terminal(&symbol));
        }
        ReportCommands::Breakdown { period } => {
            let breakdown = ledger.expense_breakdown(Period::parse(&period));
            print!("{}", breakdown.format_terminal(&symbol));
        }
        ReportCommands::Totals => {
            print!("{}", ledger.totals().format_terminal(&symbol));
        }
    }

    Ok(())
}
