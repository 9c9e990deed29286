//! Export module for MoneyTrack
//!
//! - CSV: every transaction as a quoted spreadsheet row
//! - JSON: a full backup document that can be restored into a ledger

pub mod csv;
pub mod json;

pub use self::csv::{default_csv_file_name, to_delimited_text, write_delimited, CSV_HEADER};
pub use self::json::{default_backup_file_name, BackupDocument};
