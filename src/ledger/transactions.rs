//! Transaction operations on the ledger

use chrono::{DateTime, NaiveDate, Utc};

use crate::activity::{ActivityEntry, EntityType, Operation};
use crate::error::{MoneyTrackError, MoneyTrackResult};
use crate::models::{Period, Transaction, TransactionDraft, TransactionId, TransactionType};
use crate::storage::{save_json, KeyValueStore, TRANSACTIONS_KEY};

use super::{today, Ledger};

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Only income or only expenses
    pub kind: Option<TransactionType>,
    /// Calendar window
    pub period: Period,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a list filter name: `income`, `expense`, or a period name
    pub fn parse(s: &str) -> Self {
        match s.parse::<TransactionType>() {
            Ok(kind) => Self::new().kind(kind),
            Err(_) => Self::new().period(Period::parse(s)),
        }
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Check a single transaction against the kind and period
    pub fn matches(&self, txn: &Transaction, today: NaiveDate) -> bool {
        self.kind.map_or(true, |kind| txn.kind == kind) && self.period.contains(txn.date, today)
    }
}

impl<S: KeyValueStore> Ledger<S> {
    /// Record a new transaction
    ///
    /// The draft is validated and its category must exist with the same type.
    /// The transaction is stored first in the sequence. Nothing changes if
    /// validation or the write fails.
    pub fn add_transaction(&mut self, draft: TransactionDraft) -> MoneyTrackResult<Transaction> {
        self.add_transaction_at(draft, Utc::now())
    }

    /// Record a new transaction with an explicit creation timestamp
    pub fn add_transaction_at(
        &mut self,
        draft: TransactionDraft,
        created_at: DateTime<Utc>,
    ) -> MoneyTrackResult<Transaction> {
        draft
            .validate()
            .map_err(|e| MoneyTrackError::Validation(e.to_string()))?;

        let category = self
            .find_category(&draft.category)
            .ok_or_else(|| MoneyTrackError::category_not_found(draft.category.as_str()))?;

        if category.kind != draft.kind {
            return Err(MoneyTrackError::Validation(format!(
                "Category '{}' is for {} transactions, not {}",
                category.name,
                category.kind.as_str(),
                draft.kind.as_str()
            )));
        }

        let txn = draft
            .build(created_at)
            .map_err(|e| MoneyTrackError::Validation(e.to_string()))?;

        let staged: Vec<&Transaction> = std::iter::once(&txn).chain(self.transactions.iter()).collect();
        if let Err(err) = save_json(&mut self.store, TRANSACTIONS_KEY, &staged) {
            self.log_failure(Operation::Create, EntityType::Transaction, &err);
            return Err(err);
        }

        self.transactions.insert(0, txn.clone());
        self.log_activity(ActivityEntry::created(
            EntityType::Transaction,
            txn.id.as_str(),
            txn.description.as_str(),
        ));

        Ok(txn)
    }

    /// Delete a transaction
    ///
    /// Returns `false` without touching storage when the ID is unknown.
    pub fn delete_transaction(&mut self, id: &TransactionId) -> MoneyTrackResult<bool> {
        let Some(index) = self.transactions.iter().position(|t| &t.id == id) else {
            return Ok(false);
        };

        let staged: Vec<&Transaction> = self
            .transactions
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, t)| t)
            .collect();
        if let Err(err) = save_json(&mut self.store, TRANSACTIONS_KEY, &staged) {
            self.log_failure(Operation::Delete, EntityType::Transaction, &err);
            return Err(err);
        }

        let removed = self.transactions.remove(index);
        self.log_activity(ActivityEntry::deleted(
            EntityType::Transaction,
            removed.id.as_str(),
            removed.description.as_str(),
        ));

        Ok(true)
    }

    /// Get a transaction by ID
    pub fn find_transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    /// Find a transaction by full ID or by an unambiguous ID prefix
    pub fn find_transaction_by_prefix(&self, prefix: &str) -> Option<&Transaction> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return None;
        }
        if let Some(txn) = self.find_transaction(&TransactionId::new(prefix)) {
            return Some(txn);
        }
        let mut matches = self
            .transactions
            .iter()
            .filter(|t| t.id.as_str().starts_with(prefix));
        match (matches.next(), matches.next()) {
            (Some(txn), None) => Some(txn),
            _ => None,
        }
    }

    /// Transactions dated within `period`, in ledger order
    pub fn query_by_period(&self, period: Period) -> Vec<&Transaction> {
        self.query_by_period_at(period, today())
    }

    /// Same as [`Ledger::query_by_period`] with an explicit "today"
    pub fn query_by_period_at(&self, period: Period, today: NaiveDate) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| period.contains(t.date, today))
            .collect()
    }

    /// Transactions matching a filter, in ledger order
    pub fn filter(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        self.filter_at(filter, today())
    }

    /// Same as [`Ledger::filter`] with an explicit "today"
    pub fn filter_at(&self, filter: &TransactionFilter, today: NaiveDate) -> Vec<&Transaction> {
        let matching = self.transactions.iter().filter(|t| filter.matches(t, today));
        match filter.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }
}
