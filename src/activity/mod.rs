//! Activity logging for MoneyTrack
//!
//! Ledger mutations, settings changes, restores and persistence failures are
//! appended to a line-delimited JSON log (JSONL).
//!
//! - `ActivityEntry`: one log line (timestamp, level, operation, entity).
//! - `ActivityLog`: appends entries to a file and reads them back.

mod entry;
mod logger;

pub use entry::{ActivityEntry, EntityType, Level, Operation};
pub use logger::ActivityLog;
