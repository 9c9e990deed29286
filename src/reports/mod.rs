//! Reports module for MoneyTrack
//!
//! Derived views over the ledger: the monthly dashboard summary, expense
//! breakdown by category, and all-time totals. Every report is a pure
//! function of the transactions (and categories) it is given.

pub mod breakdown;
pub mod summary;
pub mod totals;

pub use breakdown::{BreakdownSlice, ExpenseBreakdown};
pub use summary::MonthlySummary;
pub use totals::LedgerTotals;
