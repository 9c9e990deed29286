//! CSV Export functionality
//!
//! Writes every transaction as one row of
//! `Date,Type,Category,Description,Amount`, all fields quoted.

use chrono::NaiveDate;
use std::io::Write;

use crate::error::{MoneyTrackError, MoneyTrackResult};
use crate::ledger::Ledger;
use crate::storage::KeyValueStore;

/// Column header of the transaction export
pub const CSV_HEADER: [&str; 5] = ["Date", "Type", "Category", "Description", "Amount"];

/// Write all transactions as delimited text, in ledger order
pub fn write_delimited<S: KeyValueStore, W: Write>(
    ledger: &Ledger<S>,
    writer: W,
) -> MoneyTrackResult<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;

    for txn in ledger.transactions() {
        let date = txn.date.format("%Y-%m-%d").to_string();
        let amount = txn.amount.to_string();
        csv_writer.write_record([
            date.as_str(),
            txn.kind.as_str(),
            ledger.category_name(&txn.category),
            txn.description.as_str(),
            amount.as_str(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| MoneyTrackError::Export(e.to_string()))?;

    Ok(())
}

/// Render all transactions as delimited text
pub fn to_delimited_text<S: KeyValueStore>(ledger: &Ledger<S>) -> MoneyTrackResult<String> {
    let mut buffer = Vec::new();
    write_delimited(ledger, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| MoneyTrackError::Export(e.to_string()))
}

/// Default file name for a transaction export made on `date`
pub fn default_csv_file_name(date: NaiveDate) -> String {
    format!("moneytrack-export-{}.csv", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryDraft, Money, TransactionDraft, TransactionType};
    use crate::storage::MemoryStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_header_only_for_empty_ledger() {
        let ledger = Ledger::open(MemoryStore::new()).unwrap();
        let text = to_delimited_text(&ledger).unwrap();
        assert_eq!(text, "\"Date\",\"Type\",\"Category\",\"Description\",\"Amount\"\n");
    }

    #[test]
    fn test_rows_are_quoted_and_escaped() {
        let mut ledger = Ledger::open(MemoryStore::new()).unwrap();
        ledger
            .add_transaction(TransactionDraft::expense(
                Money::from_cents(12_50),
                "exp_food",
                "Pizza \"large\", extra cheese",
                date(2025, 1, 20),
            ))
            .unwrap();
        ledger
            .add_transaction(TransactionDraft::income(
                Money::from_cents(1000_00),
                "inc_salary",
                "Pay",
                date(2025, 1, 25),
            ))
            .unwrap();

        let text = to_delimited_text(&ledger).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "\"2025-01-25\",\"income\",\"Salary\",\"Pay\",\"1000.00\"");
        assert_eq!(
            lines[2],
            "\"2025-01-20\",\"expense\",\"Food & Dining\",\"Pizza \"\"large\"\", extra cheese\",\"12.50\""
        );
    }

    #[test]
    fn test_dangling_category_exports_as_uncategorized() {
        let mut ledger = Ledger::open(MemoryStore::new()).unwrap();
        let pets = ledger
            .add_category(CategoryDraft::new("Pets", TransactionType::Expense))
            .unwrap();
        let txn = ledger
            .add_transaction(TransactionDraft::expense(
                Money::from_cents(5_00),
                pets.id.clone(),
                "Treats",
                date(2025, 1, 2),
            ))
            .unwrap();

        // Remove the transaction's category out of band by restoring a
        // backup without it
        let mut backup = ledger.backup();
        backup.categories.retain(|c| c.id != pets.id);
        ledger.restore_backup(backup).unwrap();

        assert_eq!(ledger.find_transaction(&txn.id).map(|t| &t.category), Some(&pets.id));
        assert!(ledger.find_category(&pets.id).is_none());
        let text = to_delimited_text(&ledger).unwrap();
        assert!(text.contains("\"Uncategorized\""));
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(
            default_csv_file_name(date(2025, 3, 7)),
            "moneytrack-export-2025-03-07.csv"
        );
    }
}
