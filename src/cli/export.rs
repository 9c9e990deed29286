//! CLI commands for data export and backup import

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::activity::{ActivityEntry, EntityType, Operation};
use crate::config::MoneyTrackPaths;
use crate::error::{MoneyTrackError, MoneyTrackResult};
use crate::export::{default_backup_file_name, default_csv_file_name, write_delimited, BackupDocument};
use crate::ledger::{today, Ledger};
use crate::storage::{read_text, KeyValueStore};

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export transactions to CSV
    Csv {
        /// Output file path (default: exports directory)
        output: Option<PathBuf>,
    },

    /// Export a full JSON backup
    Json {
        /// Output file path (default: exports directory)
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command<S: KeyValueStore>(
    ledger: &Ledger<S>,
    paths: &MoneyTrackPaths,
    cmd: ExportCommands,
) -> MoneyTrackResult<()> {
    match cmd {
        ExportCommands::Csv { output } => {
            let output = output.unwrap_or_else(|| paths.exports_dir().join(default_csv_file_name(today())));
            let mut writer = create_output(&output)?;
            write_delimited(ledger, &mut writer)?;
            finish_output(writer, &output)?;

            ledger.log_activity(ActivityEntry::info(
                Operation::Export,
                EntityType::Ledger,
                format!("{} transactions exported to {}", ledger.transactions().len(), output.display()),
            ));
            println!(
                "Exported {} transactions to: {}",
                ledger.transactions().len(),
                output.display()
            );
        }

        ExportCommands::Json { output } => {
            let output =
                output.unwrap_or_else(|| paths.exports_dir().join(default_backup_file_name(today())));
            let document = ledger.backup();
            let mut writer = create_output(&output)?;
            document.write_to(&mut writer)?;
            finish_output(writer, &output)?;

            ledger.log_activity(ActivityEntry::info(
                Operation::Export,
                EntityType::Ledger,
                format!("Backup written to {}", output.display()),
            ));
            println!("Backup written to: {}", output.display());
            println!("  Transactions: {}", document.transactions.len());
            println!("  Categories:   {}", document.categories.len());
        }
    }

    Ok(())
}

/// Replace the ledger with the contents of a JSON backup
pub fn handle_import_command<S: KeyValueStore>(
    ledger: &mut Ledger<S>,
    input: &Path,
) -> MoneyTrackResult<()> {
    let text = read_text(input)?.ok_or_else(|| {
        MoneyTrackError::Import(format!("Backup file not found: {}", input.display()))
    })?;

    let document = BackupDocument::from_json(&text)?;
    let exported_at = document.exported_at;
    let summary = ledger.restore_backup(document)?;

    println!("Restored backup from {}", exported_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!("  Transactions: {}", summary.transactions);
    println!("  Categories:   {}", summary.categories);

    Ok(())
}

fn create_output(path: &Path) -> MoneyTrackResult<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            MoneyTrackError::Export(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }
    let file = File::create(path).map_err(|e| {
        MoneyTrackError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

fn finish_output(mut writer: BufWriter<File>, path: &Path) -> MoneyTrackResult<()> {
    writer.flush().map_err(|e| {
        MoneyTrackError::Export(format!("Failed to write {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionDraft};
    use crate::storage::MemoryStore;
    use tempfile::TempDir;

    #[test]
    fn test_export_then_import() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoneyTrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut source = Ledger::open(MemoryStore::new()).unwrap();
        source
            .add_transaction(TransactionDraft::expense(
                Money::from_cents(7_25),
                "exp_transport",
                "Train",
                today(),
            ))
            .unwrap();

        let backup_path = temp_dir.path().join("backup.json");
        handle_export_command(
            &source,
            &paths,
            ExportCommands::Json {
                output: Some(backup_path.clone()),
            },
        )
        .unwrap();

        let mut target = Ledger::open(MemoryStore::new()).unwrap();
        handle_import_command(&mut target, &backup_path).unwrap();
        assert_eq!(target.transactions(), source.transactions());
    }

    #[test]
    fn test_csv_defaults_to_exports_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoneyTrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let ledger = Ledger::open(MemoryStore::new()).unwrap();

        handle_export_command(&ledger, &paths, ExportCommands::Csv { output: None }).unwrap();

        let expected = paths.exports_dir().join(default_csv_file_name(today()));
        let contents = std::fs::read_to_string(expected).unwrap();
        assert!(contents.starts_with("\"Date\""));
    }

    #[test]
    fn test_import_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::open(MemoryStore::new()).unwrap();
        let err = handle_import_command(&mut ledger, &temp_dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, MoneyTrackError::Import(_)));
    }
}
