//! Core data models for MoneyTrack
//!
//! This module contains the data structures that make up a ledger:
//! transactions, categories, amounts and period filters.

pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use category::{default_categories, Category, CategoryDraft, CategoryValidationError};
pub use ids::{CategoryId, TransactionId};
pub use money::Money;
pub use period::Period;
pub use transaction::{
    Transaction, TransactionDraft, TransactionType, TransactionValidationError,
};
