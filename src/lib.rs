//! MoneyTrack - personal income and expense tracker
//!
//! This library provides the core of the MoneyTrack finance tracker: a ledger
//! of categorized income and expense transactions persisted to a local
//! key-value store, with dashboard summaries, category breakdowns and
//! exports derived from it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and the persisted user settings
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, money, periods)
//! - `storage`: Key-value stores and JSON blob helpers
//! - `ledger`: The ledger store that owns and mutates all state
//! - `reports`: Monthly summary, expense breakdown and totals
//! - `export`: CSV export and JSON backup
//! - `activity`: Operational activity log
//! - `display` / `cli`: Terminal formatting and command handlers
//!
//! # Example
//!
//! ```rust
//! use moneytrack::ledger::Ledger;
//! use moneytrack::models::{Money, TransactionDraft};
//! use moneytrack::storage::MemoryStore;
//!
//! let mut ledger = Ledger::open(MemoryStore::new())?;
//! ledger.add_transaction(TransactionDraft::expense(
//!     Money::from_cents(4550),
//!     "exp_food",
//!     "Groceries",
//!     moneytrack::ledger::today(),
//! ))?;
//! assert_eq!(ledger.monthly_summary().expense, Money::from_cents(4550));
//! # Ok::<(), moneytrack::MoneyTrackError>(())
//! ```

pub mod activity;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{MoneyTrackError, MoneyTrackResult};
