//! Transaction model
//!
//! A transaction is an income or expense entry tied to one category.
//! Transactions are only created from a validated [`TransactionDraft`] and are
//! immutable afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{CategoryId, TransactionId};
use super::money::Money;

/// Direction of a transaction (also used to type categories)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Get all types in display order
    pub fn all() -> &'static [Self] {
        &[Self::Income, Self::Expense]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Sign shown in front of amounts in listings
    pub fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!("Unknown transaction type: {}", other)),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Amount, always positive; direction comes from `kind`
    pub amount: Money,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Category this transaction belongs to
    pub category: CategoryId,

    /// What the money was for
    pub description: String,

    /// Date the transaction happened
    pub date: NaiveDate,

    /// When the transaction was recorded
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount with its sign applied (expenses negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Validate a stored transaction (used when importing documents)
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        validate_fields(self.amount, &self.description)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}{}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.kind.sign(),
            self.amount
        )
    }
}

/// Unvalidated input for a new transaction
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub kind: TransactionType,
    pub amount: Money,
    pub category: CategoryId,
    pub description: String,
    pub date: NaiveDate,
}

impl TransactionDraft {
    /// Create a new draft
    pub fn new(
        kind: TransactionType,
        amount: Money,
        category: CategoryId,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind,
            amount,
            category,
            description: description.into(),
            date,
        }
    }

    /// Shortcut for an income draft
    pub fn income(
        amount: Money,
        category: impl Into<CategoryId>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self::new(TransactionType::Income, amount, category.into(), description, date)
    }

    /// Shortcut for an expense draft
    pub fn expense(
        amount: Money,
        category: impl Into<CategoryId>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self::new(TransactionType::Expense, amount, category.into(), description, date)
    }

    /// Check amount and description without building
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        validate_fields(self.amount, &self.description)?;
        if self.category.as_str().trim().is_empty() {
            return Err(TransactionValidationError::MissingCategory);
        }
        Ok(())
    }

    /// Validate and turn the draft into a transaction with a fresh ID
    pub fn build(self, created_at: DateTime<Utc>) -> Result<Transaction, TransactionValidationError> {
        self.validate()?;
        Ok(Transaction {
            id: TransactionId::generate(),
            amount: self.amount,
            kind: self.kind,
            category: self.category,
            description: self.description.trim().to_string(),
            date: self.date,
            created_at,
        })
    }
}

fn validate_fields(amount: Money, description: &str) -> Result<(), TransactionValidationError> {
    if !amount.is_positive() {
        return Err(TransactionValidationError::NonPositiveAmount(amount));
    }
    if amount > Money::MAX_AMOUNT {
        return Err(TransactionValidationError::AmountTooLarge(amount));
    }
    if description.trim().is_empty() {
        return Err(TransactionValidationError::EmptyDescription);
    }
    Ok(())
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    EmptyDescription,
    MissingCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Amount {} exceeds the maximum of {}",
                amount,
                Money::MAX_AMOUNT
            ),
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::MissingCategory => write!(f, "A category is required"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
