//! The ledger store
//!
//! [`Ledger`] owns the in-memory transactions, categories and settings and is
//! the only thing that mutates them. Every mutation is staged: the new state
//! is serialized and written to the key-value store first and only committed
//! in memory once the write succeeded, so memory and storage never diverge.

mod categories;
mod settings;
mod transactions;

pub use transactions::TransactionFilter;

use chrono::NaiveDate;

use crate::activity::{ActivityEntry, ActivityLog, EntityType, Operation};
use crate::config::Settings;
use crate::error::{MoneyTrackError, MoneyTrackResult};
use crate::export::BackupDocument;
use crate::models::{default_categories, Category, Period, Transaction};
use crate::reports::{ExpenseBreakdown, LedgerTotals, MonthlySummary};
use crate::storage::{
    load_json, save_json, KeyValueStore, CATEGORIES_KEY, SETTINGS_KEY, TRANSACTIONS_KEY,
};

/// Today's date in local time
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Transactions, categories and settings backed by a key-value store
pub struct Ledger<S: KeyValueStore> {
    store: S,
    /// Newest-created first
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    settings: Settings,
    activity: Option<ActivityLog>,
}

/// Loaded blobs, before they are handed to a ledger
struct LoadedState {
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    settings: Settings,
}

impl LoadedState {
    fn fresh() -> Self {
        Self {
            transactions: Vec::new(),
            categories: default_categories(),
            settings: Settings::default(),
        }
    }
}

/// What a backup restore replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreSummary {
    pub transactions: usize,
    pub categories: usize,
}

impl<S: KeyValueStore> Ledger<S> {
    /// Open a ledger from the store
    ///
    /// Missing blobs fall back to defaults; missing categories are seeded with
    /// the built-in set and persisted immediately. A blob that cannot be
    /// parsed is an error.
    pub fn open(mut store: S) -> MoneyTrackResult<Self> {
        let state = load_state(&mut store)?;
        Ok(Self::from_state(store, state))
    }

    /// Open a ledger, starting fresh if the stored data cannot be read
    ///
    /// The load error, if any, is returned alongside the fresh ledger. The
    /// unreadable blobs stay in the store until the next write replaces them.
    pub fn open_or_reset(mut store: S) -> (Self, Option<MoneyTrackError>) {
        match load_state(&mut store) {
            Ok(state) => (Self::from_state(store, state), None),
            Err(err) => (Self::from_state(store, LoadedState::fresh()), Some(err)),
        }
    }

    fn from_state(store: S, state: LoadedState) -> Self {
        Self {
            store,
            transactions: state.transactions,
            categories: state.categories,
            settings: state.settings,
            activity: None,
        }
    }

    /// Attach an activity log that records mutations and failures
    pub fn with_activity_log(mut self, log: ActivityLog) -> Self {
        self.activity = Some(log);
        self
    }

    /// Append an entry to the activity log, if one is attached
    pub fn log_activity(&self, entry: ActivityEntry) {
        if let Some(ref log) = self.activity {
            // A log write never fails a ledger operation
            let _ = log.log(&entry);
        }
    }

    fn log_failure(&self, operation: Operation, entity_type: EntityType, err: &MoneyTrackError) {
        self.log_activity(ActivityEntry::error(operation, entity_type, err.to_string()));
    }

    /// All transactions, newest-created first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// All categories in creation order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the underlying store
    pub fn into_store(self) -> S {
        self.store
    }

    // === Derived views ===

    /// Income, expense, balance and savings rate for the current month
    pub fn monthly_summary(&self) -> MonthlySummary {
        MonthlySummary::compute(&self.transactions, today())
    }

    /// Expenses in `period` grouped by category
    pub fn expense_breakdown(&self, period: Period) -> ExpenseBreakdown {
        ExpenseBreakdown::generate(&self.transactions, &self.categories, period, today())
    }

    /// All-time totals
    pub fn totals(&self) -> LedgerTotals {
        LedgerTotals::compute(&self.transactions)
    }

    // === Backup ===

    /// Build a backup document of the current state
    pub fn backup(&self) -> BackupDocument {
        BackupDocument::from_ledger(self)
    }

    /// Replace the whole ledger with the contents of a backup document
    ///
    /// The document is validated first. If any blob fails to save, the blobs
    /// already written are put back and the in-memory state is untouched.
    /// Put-back writes the serialized in-memory state, so a key that was
    /// absent from the store before the restore ends up holding the empty
    /// or default document rather than staying absent.
    pub fn restore_backup(&mut self, document: BackupDocument) -> MoneyTrackResult<RestoreSummary> {
        document.validate()?;

        let staged = serialize_blobs(&document.transactions, &document.categories, &document.settings)?;
        let current = serialize_blobs(&self.transactions, &self.categories, &self.settings)?;

        for (written, (key, text)) in staged.iter().enumerate() {
            if let Err(err) = self.store.save(key, text) {
                // Best effort: put back the blobs already replaced
                for (key, text) in &current[..written] {
                    let _ = self.store.save(key, text);
                }
                self.log_failure(Operation::Restore, EntityType::Ledger, &err);
                return Err(err);
            }
        }

        let summary = RestoreSummary {
            transactions: document.transactions.len(),
            categories: document.categories.len(),
        };

        self.transactions = document.transactions;
        self.categories = document.categories;
        self.settings = document.settings;

        self.log_activity(ActivityEntry::info(
            Operation::Restore,
            EntityType::Ledger,
            format!(
                "Restored {} transactions and {} categories from backup exported {}",
                summary.transactions,
                summary.categories,
                document.exported_at.format("%Y-%m-%d %H:%M:%S")
            ),
        ));

        Ok(summary)
    }
}

fn serialize_blobs(
    transactions: &[Transaction],
    categories: &[Category],
    settings: &Settings,
) -> MoneyTrackResult<[(&'static str, String); 3]> {
    let encode = |key: &str, result: serde_json::Result<String>| {
        result.map_err(|e| MoneyTrackError::Storage(format!("Failed to serialize {}: {}", key, e)))
    };
    Ok([
        (
            TRANSACTIONS_KEY,
            encode(TRANSACTIONS_KEY, serde_json::to_string(transactions))?,
        ),
        (
            CATEGORIES_KEY,
            encode(CATEGORIES_KEY, serde_json::to_string(categories))?,
        ),
        (SETTINGS_KEY, encode(SETTINGS_KEY, serde_json::to_string(settings))?),
    ])
}

fn load_state<S: KeyValueStore>(store: &mut S) -> MoneyTrackResult<LoadedState> {
    let transactions: Vec<Transaction> = load_json(&*store, TRANSACTIONS_KEY)?.unwrap_or_default();

    let categories = match load_json::<Vec<Category>, _>(&*store, CATEGORIES_KEY)? {
        Some(categories) => categories,
        None => {
            let defaults = default_categories();
            save_json(store, CATEGORIES_KEY, &defaults)?;
            defaults
        }
    };

    let settings = Settings::load_or_default(&*store)?;

    Ok(LoadedState {
        transactions,
        categories,
        settings,
    })
}
