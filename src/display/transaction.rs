//! Transaction display formatting
//!
//! Formats transactions for terminal display as a register and as a detail
//! view.

use crate::models::category::UNCATEGORIZED;
use crate::models::{Category, Transaction};

/// Resolve a transaction's category name against a category list
fn category_name<'a>(txn: &Transaction, categories: &'a [Category]) -> &'a str {
    categories
        .iter()
        .find(|c| c.id == txn.category)
        .map(|c| c.name.as_str())
        .unwrap_or(UNCATEGORIZED)
}

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, category_name: &str, symbol: &str) -> String {
    let amount = format!("{}{}", txn.kind.sign(), txn.amount.format_with_symbol(symbol));
    format!(
        "{:<13} {} {:<24} {:<18} {:>14}",
        txn.id.short(),
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.description, 24),
        truncate(category_name, 18),
        amount
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(
    transactions: &[&Transaction],
    categories: &[Category],
    symbol: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<13} {:10} {:<24} {:<18} {:>14}\n",
        "ID", "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(83));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, category_name(txn, categories), symbol));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, category_name: &str, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Amount:      {}\n", txn.amount.format_with_symbol(symbol)));
    output.push_str(&format!("Category:    {}\n", category_name));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!(
        "Recorded:    {}\n",
        txn.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

/// Pad or cut a string to exactly `width` characters
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        format!("{:width$}", s, width = width)
    } else {
        let cut: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{default_categories, Money, TransactionDraft};
    use chrono::{NaiveDate, Utc};

    fn groceries() -> Transaction {
        TransactionDraft::expense(
            Money::from_cents(50_00),
            "exp_food",
            "Weekly groceries",
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )
        .build(Utc::now())
        .unwrap()
    }

    #[test]
    fn test_format_transaction_row() {
        let formatted = format_transaction_row(&groceries(), "Food & Dining", "R");
        assert!(formatted.contains("2025-01-15"));
        assert!(formatted.contains("Weekly groceries"));
        assert!(formatted.contains("-R50.00"));
    }

    #[test]
    fn test_register_resolves_category_names() {
        let txn = groceries();
        let mut orphan = groceries();
        orphan.category = "gone".into();

        let formatted = format_transaction_register(&[&txn, &orphan], &default_categories(), "$");
        assert!(formatted.contains("Food & Dining"));
        assert!(formatted.contains(UNCATEGORIZED));
    }

    #[test]
    fn test_format_empty_register() {
        let formatted = format_transaction_register(&[], &[], "R");
        assert!(formatted.contains("No transactions found"));
    }

    #[test]
    fn test_format_transaction_details() {
        let formatted = format_transaction_details(&groceries(), "Food & Dining", "€");
        assert!(formatted.contains("Type:        Expense"));
        assert!(formatted.contains("€50.00"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10), "Short     ");
        assert_eq!(truncate("A much longer description", 10), "A much ...");
        assert_eq!(truncate("Café crème brûlée", 8).chars().count(), 8);
    }
}
