//! Category CLI commands
//!
//! Implements CLI commands for category management.

use clap::Subcommand;

use crate::display::{format_category_details, format_category_list};
use crate::error::MoneyTrackResult;
use crate::ledger::Ledger;
use crate::models::{CategoryDraft, TransactionType};
use crate::storage::KeyValueStore;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories (grouped by type)
    List,

    /// Create a new category
    Create {
        /// Category name
        name: String,
        /// income or expense
        #[arg(short = 't', long = "type")]
        kind: TransactionType,
        /// Display color as #rrggbb
        #[arg(long)]
        color: Option<String>,
        /// Icon identifier (e.g., "fas fa-paw")
        #[arg(long)]
        icon: Option<String>,
    },

    /// Show category details
    Show {
        /// Category name or ID
        category: String,
        /// Restrict name lookup to one type
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
    },

    /// Delete a category that no transaction uses
    Delete {
        /// Category name or ID
        category: String,
        /// Restrict name lookup to one type
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
    },
}

/// Handle a category command
pub fn handle_category_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    cmd: CategoryCommands,
) -> MoneyTrackResult<()> {
    match cmd {
        CategoryCommands::List => {
            print!(
                "{}",
                format_category_list(ledger.categories(), ledger.transactions())
            );
        }

        CategoryCommands::Create {
            name,
            kind,
            color,
            icon,
        } => {
            let mut draft = CategoryDraft::new(name, kind);
            if let Some(color) = color {
                draft = draft.color(color);
            }
            if let Some(icon) = icon {
                draft = draft.icon(icon);
            }

            let category = ledger.add_category(draft)?;
            println!("Created category: {}", category.name);
            println!("  Type: {}", category.kind);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::Show { category, kind } => {
            let category = ledger.resolve_category(&category, kind)?;
            print!(
                "{}",
                format_category_details(category, ledger.category_usage(&category.id))
            );
        }

        CategoryCommands::Delete { category, kind } => {
            let category = ledger.resolve_category(&category, kind)?.clone();
            if ledger.delete_category(&category.id)? {
                println!("Deleted category: {}", category.name);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoneyTrackError;
    use crate::models::{Money, TransactionDraft};
    use crate::storage::MemoryStore;

    #[test]
    fn test_create_and_delete_by_name() {
        let mut ledger = Ledger::open(MemoryStore::new()).unwrap();

        handle_category_command(
            &mut ledger,
            CategoryCommands::Create {
                name: "Pets".into(),
                kind: TransactionType::Expense,
                color: Some("#a855f7".into()),
                icon: Some("fas fa-paw".into()),
            },
        )
        .unwrap();
        let pets = ledger
            .find_category_by_name("pets", TransactionType::Expense)
            .cloned()
            .unwrap();
        assert_eq!(pets.icon, "fas fa-paw");

        handle_category_command(
            &mut ledger,
            CategoryCommands::Delete {
                category: "PETS".into(),
                kind: None,
            },
        )
        .unwrap();
        assert!(ledger.find_category(&pets.id).is_none());
    }

    #[test]
    fn test_delete_used_category_fails() {
        let mut ledger = Ledger::open(MemoryStore::new()).unwrap();
        ledger
            .add_transaction(TransactionDraft::income(
                Money::from_cents(10_00),
                "inc_freelance",
                "Gig",
                crate::ledger::today(),
            ))
            .unwrap();

        let err = handle_category_command(
            &mut ledger,
            CategoryCommands::Delete {
                category: "Freelance".into(),
                kind: Some(TransactionType::Income),
            },
        )
        .unwrap_err();
        assert!(matches!(err, MoneyTrackError::InUse { .. }));
    }
}
