//! Transaction CLI commands
//!
//! Implements CLI commands for recording, listing and deleting transactions.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::{format_transaction_details, format_transaction_register};
use crate::error::{MoneyTrackError, MoneyTrackResult};
use crate::ledger::{today, Ledger, TransactionFilter};
use crate::models::{Money, TransactionDraft, TransactionType};
use crate::storage::KeyValueStore;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new income or expense
    Add {
        /// Amount (e.g., "45.50" or "R1,200")
        amount: String,
        /// What the money was for
        description: String,
        /// income or expense
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: TransactionType,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// Transaction date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List transactions, newest first
    List {
        /// all, income, expense, today, week, month or year
        #[arg(short, long, default_value = "all")]
        filter: String,
        /// Maximum number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show transaction details
    Show {
        /// Transaction ID (or a unique prefix)
        id: String,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID (or a unique prefix)
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    cmd: TransactionCommands,
) -> MoneyTrackResult<()> {
    let symbol = ledger.settings().currency_symbol();

    match cmd {
        TransactionCommands::Add {
            amount,
            description,
            kind,
            category,
            date,
        } => {
            let amount = Money::parse(&amount)
                .map_err(|e| MoneyTrackError::Validation(format!("Invalid amount: {}", e)))?;
            let date = match date {
                Some(text) => parse_date(&text)?,
                None => today(),
            };
            let category = ledger.resolve_category(&category, Some(kind))?.id.clone();

            let txn = ledger.add_transaction(TransactionDraft::new(
                kind,
                amount,
                category,
                description,
                date,
            ))?;

            println!(
                "{} added: {} {}",
                txn.kind,
                txn.description,
                txn.amount.format_with_symbol(&symbol)
            );
            println!("  Category: {}", ledger.category_name(&txn.category));
            println!("  ID: {}", txn.id);
        }

        TransactionCommands::List { filter, limit } => {
            let mut filter = TransactionFilter::parse(&filter);
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }
            let transactions = ledger.filter(&filter);
            print!(
                "{}",
                format_transaction_register(&transactions, ledger.categories(), &symbol)
            );
        }

        TransactionCommands::Show { id } => {
            let txn = ledger
                .find_transaction_by_prefix(&id)
                .ok_or_else(|| MoneyTrackError::transaction_not_found(&id))?;
            print!(
                "{}",
                format_transaction_details(txn, ledger.category_name(&txn.category), &symbol)
            );
        }

        TransactionCommands::Delete { id } => {
            let txn = ledger
                .find_transaction_by_prefix(&id)
                .cloned()
                .ok_or_else(|| MoneyTrackError::transaction_not_found(&id))?;

            if ledger.delete_transaction(&txn.id)? {
                println!("Deleted transaction: {} ({})", txn.description, txn.id);
            }
        }
    }

    Ok(())
}

/// Parse a `YYYY-MM-DD` date argument
pub fn parse_date(text: &str) -> MoneyTrackResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| MoneyTrackError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn ledger() -> Ledger<MemoryStore> {
        Ledger::open(MemoryStore::new()).unwrap()
    }

    #[test]
    fn test_add_by_category_name() {
        let mut ledger = ledger();
        handle_transaction_command(
            &mut ledger,
            TransactionCommands::Add {
                amount: "1,250.00".into(),
                description: "January pay".into(),
                kind: TransactionType::Income,
                category: "salary".into(),
                date: Some("2025-01-25".into()),
            },
        )
        .unwrap();

        let txn = &ledger.transactions()[0];
        assert_eq!(txn.amount, Money::from_cents(1250_00));
        assert_eq!(txn.category.as_str(), "inc_salary");
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2025, 1, 25).unwrap());
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let mut ledger = ledger();
        let add = |amount: &str, category: &str, date: Option<&str>| TransactionCommands::Add {
            amount: amount.into(),
            description: "Thing".into(),
            kind: TransactionType::Expense,
            category: category.into(),
            date: date.map(String::from),
        };

        assert!(handle_transaction_command(&mut ledger, add("abc", "exp_food", None)).is_err());
        assert!(handle_transaction_command(&mut ledger, add("0", "exp_food", None)).is_err());
        assert!(handle_transaction_command(&mut ledger, add("5", "salary", None)).is_err());
        assert!(handle_transaction_command(&mut ledger, add("5", "exp_food", Some("2025-13-01"))).is_err());
        assert!(ledger.transactions().is_empty());
    }

    #[test]
    fn test_delete_by_prefix() {
        let mut ledger = ledger();
        let txn = ledger
            .add_transaction(TransactionDraft::expense(
                Money::from_cents(3_00),
                "exp_food",
                "Coffee",
                today(),
            ))
            .unwrap();

        handle_transaction_command(
            &mut ledger,
            TransactionCommands::Delete {
                id: txn.id.short().to_string(),
            },
        )
        .unwrap();
        assert!(ledger.transactions().is_empty());

        let err = handle_transaction_command(
            &mut ledger,
            TransactionCommands::Delete {
                id: txn.id.to_string(),
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
