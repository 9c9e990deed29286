//! Category operations on the ledger

use crate::activity::{ActivityEntry, EntityType, Operation};
use crate::error::{MoneyTrackError, MoneyTrackResult};
use crate::models::category::UNCATEGORIZED;
use crate::models::{Category, CategoryDraft, CategoryId, TransactionType};
use crate::storage::{save_json, KeyValueStore, CATEGORIES_KEY};

use super::Ledger;

impl<S: KeyValueStore> Ledger<S> {
    /// Create a new category
    ///
    /// Names must be unique per type, ignoring case.
    pub fn add_category(&mut self, draft: CategoryDraft) -> MoneyTrackResult<Category> {
        draft
            .validate()
            .map_err(|e| MoneyTrackError::Validation(e.to_string()))?;

        if self.find_category_by_name(&draft.name, draft.kind).is_some() {
            return Err(MoneyTrackError::Duplicate {
                entity_type: "Category",
                identifier: format!("{} ({})", draft.name.trim(), draft.kind.as_str()),
            });
        }

        let category = draft
            .build()
            .map_err(|e| MoneyTrackError::Validation(e.to_string()))?;

        let staged: Vec<&Category> = self.categories.iter().chain(std::iter::once(&category)).collect();
        if let Err(err) = save_json(&mut self.store, CATEGORIES_KEY, &staged) {
            self.log_failure(Operation::Create, EntityType::Category, &err);
            return Err(err);
        }

        self.categories.push(category.clone());
        self.log_activity(ActivityEntry::created(
            EntityType::Category,
            category.id.as_str(),
            category.name.as_str(),
        ));

        Ok(category)
    }

    /// Delete a category
    ///
    /// Returns `false` for an unknown ID. A category still used by any
    /// transaction is rejected with [`MoneyTrackError::InUse`].
    pub fn delete_category(&mut self, id: &CategoryId) -> MoneyTrackResult<bool> {
        let Some(index) = self.categories.iter().position(|c| &c.id == id) else {
            return Ok(false);
        };

        let references = self.category_usage(id);
        if references > 0 {
            return Err(MoneyTrackError::InUse {
                entity_type: "Category",
                identifier: self.categories[index].name.clone(),
                references,
            });
        }

        let staged: Vec<&Category> = self
            .categories
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, c)| c)
            .collect();
        if let Err(err) = save_json(&mut self.store, CATEGORIES_KEY, &staged) {
            self.log_failure(Operation::Delete, EntityType::Category, &err);
            return Err(err);
        }

        let removed = self.categories.remove(index);
        self.log_activity(ActivityEntry::deleted(
            EntityType::Category,
            removed.id.as_str(),
            removed.name.as_str(),
        ));

        Ok(true)
    }

    /// Get a category by ID
    pub fn find_category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Get a category by name and type, ignoring case
    pub fn find_category_by_name(&self, name: &str, kind: TransactionType) -> Option<&Category> {
        self.categories.iter().find(|c| c.matches(name, kind))
    }

    /// Categories of one type, in creation order
    pub fn categories_of_type(&self, kind: TransactionType) -> Vec<&Category> {
        self.categories.iter().filter(|c| c.kind == kind).collect()
    }

    /// Display name for a category ID, "Uncategorized" if it no longer exists
    pub fn category_name(&self, id: &CategoryId) -> &str {
        self.find_category(id)
            .map(|c| c.name.as_str())
            .unwrap_or(UNCATEGORIZED)
    }

    /// Number of transactions referencing a category
    pub fn category_usage(&self, id: &CategoryId) -> usize {
        self.transactions.iter().filter(|t| &t.category == id).count()
    }

    /// Resolve a category from user input: an ID, or a name
    ///
    /// Names are matched case-insensitively. Without a `kind` a name must be
    /// unambiguous across both types.
    pub fn resolve_category(
        &self,
        identifier: &str,
        kind: Option<TransactionType>,
    ) -> MoneyTrackResult<&Category> {
        let identifier = identifier.trim();

        if let Some(category) = self.find_category(&CategoryId::new(identifier)) {
            if kind.map_or(true, |k| k == category.kind) {
                return Ok(category);
            }
        }

        let mut matches = self.categories.iter().filter(|c| match kind {
            Some(k) => c.matches(identifier, k),
            None => TransactionType::all().iter().any(|k| c.matches(identifier, *k)),
        });

        match (matches.next(), matches.next()) {
            (Some(category), None) => Ok(category),
            (Some(_), Some(_)) => Err(MoneyTrackError::Validation(format!(
                "Category name '{}' exists for both income and expense; pass --type",
                identifier
            ))),
            _ => Err(MoneyTrackError::category_not_found(identifier)),
        }
    }
}
