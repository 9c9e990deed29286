//! JSON backup
//!
//! A backup document holds the whole ledger (transactions, categories and
//! settings) plus the time it was taken, and can be restored into a ledger.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;

use crate::config::Settings;
use crate::error::{MoneyTrackError, MoneyTrackResult};
use crate::ledger::Ledger;
use crate::models::{Category, Transaction};
use crate::storage::KeyValueStore;

/// Full ledger backup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    /// All transactions, newest-created first
    pub transactions: Vec<Transaction>,

    /// All categories
    pub categories: Vec<Category>,

    /// User settings
    #[serde(default)]
    pub settings: Settings,

    /// When the backup was taken
    pub exported_at: DateTime<Utc>,
}

impl BackupDocument {
    /// Snapshot a ledger
    pub fn from_ledger<S: KeyValueStore>(ledger: &Ledger<S>) -> Self {
        Self {
            transactions: ledger.transactions().to_vec(),
            categories: ledger.categories().to_vec(),
            settings: ledger.settings().clone(),
            exported_at: Utc::now(),
        }
    }

    /// Serialize as indented JSON
    pub fn to_json_pretty(&self) -> MoneyTrackResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| MoneyTrackError::Export(e.to_string()))
    }

    /// Write the document as indented JSON
    pub fn write_to<W: Write>(&self, writer: &mut W) -> MoneyTrackResult<()> {
        serde_json::to_writer_pretty(&mut *writer, self)
            .map_err(|e| MoneyTrackError::Export(e.to_string()))?;
        writeln!(writer).map_err(|e| MoneyTrackError::Export(e.to_string()))?;
        Ok(())
    }

    /// Parse and validate a backup document
    pub fn from_json(text: &str) -> MoneyTrackResult<Self> {
        let document: Self =
            serde_json::from_str(text).map_err(|e| MoneyTrackError::Import(e.to_string()))?;
        document.validate()?;
        Ok(document)
    }

    /// Check the document can be loaded as a ledger
    ///
    /// Transactions pointing at categories that are not in the document are
    /// accepted; they show as "Uncategorized".
    pub fn validate(&self) -> MoneyTrackResult<()> {
        let mut transaction_ids = HashSet::new();
        for txn in &self.transactions {
            if !transaction_ids.insert(&txn.id) {
                return Err(MoneyTrackError::Import(format!(
                    "Duplicate transaction id {}",
                    txn.id
                )));
            }
            txn.validate().map_err(|e| {
                MoneyTrackError::Import(format!("Transaction {}: {}", txn.id, e))
            })?;
        }

        let mut category_ids = HashSet::new();
        let mut category_names = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(&category.id) {
                return Err(MoneyTrackError::Import(format!(
                    "Duplicate category id {}",
                    category.id
                )));
            }
            category.validate().map_err(|e| {
                MoneyTrackError::Import(format!("Category {}: {}", category.id, e))
            })?;
            if !category_names.insert((category.name.trim().to_lowercase(), category.kind)) {
                return Err(MoneyTrackError::Import(format!(
                    "Duplicate {} category name '{}'",
                    category.kind.as_str(),
                    category.name
                )));
            }
        }

        Ok(())
    }
}

/// Default file name for a backup taken on `date`
pub fn default_backup_file_name(date: NaiveDate) -> String {
    format!("moneytrack-backup-{}.json", date.format("%Y-%m-%d"))
}
