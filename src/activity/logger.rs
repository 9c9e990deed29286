//! Append-only activity log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{MoneyTrackError, MoneyTrackResult};

use super::entry::ActivityEntry;

/// Writes activity entries to a JSON-lines file
#[derive(Debug, Clone)]
pub struct ActivityLog {
    log_path: PathBuf,
}

impl ActivityLog {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry
    pub fn log(&self, entry: &ActivityEntry) -> MoneyTrackResult<()> {
        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| MoneyTrackError::Io(format!("Failed to create log directory: {}", e)))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| MoneyTrackError::Io(format!("Failed to open activity log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| MoneyTrackError::Json(format!("Failed to serialize log entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| MoneyTrackError::Io(format!("Failed to write log entry: {}", e)))?;

        file.flush()
            .map_err(|e| MoneyTrackError::Io(format!("Failed to flush activity log: {}", e)))?;

        Ok(())
    }

    /// Read all entries, oldest first
    pub fn read_all(&self) -> MoneyTrackResult<Vec<ActivityEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| MoneyTrackError::Io(format!("Failed to open activity log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                MoneyTrackError::Io(format!(
                    "Failed to read activity log line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: ActivityEntry = serde_json::from_str(&line).map_err(|e| {
                MoneyTrackError::Json(format!(
                    "Failed to parse activity entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent `count` entries
    pub fn read_recent(&self, count: usize) -> MoneyTrackResult<Vec<ActivityEntry>> {
        let all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::entry::{EntityType, Level, Operation};
    use tempfile::TempDir;

    fn create_test_log() -> (ActivityLog, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log = ActivityLog::new(temp_dir.path().join("activity.log"));
        (log, temp_dir)
    }

    #[test]
    fn test_log_and_read() {
        let (log, _temp) = create_test_log();
        log.log(&ActivityEntry::created(EntityType::Transaction, "txn_1", "Coffee"))
            .unwrap();

        let entries = log.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_type, EntityType::Transaction);
    }

    #[test]
    fn test_read_recent() {
        let (log, _temp) = create_test_log();
        for i in 0..5 {
            log.log(&ActivityEntry::info(
                Operation::Update,
                EntityType::Settings,
                format!("change {}", i),
            ))
            .unwrap();
        }
        log.log(&ActivityEntry::error(Operation::Create, EntityType::Category, "boom"))
            .unwrap();

        let recent = log.read_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].message.as_deref(), Some("change 4"));
        assert_eq!(recent[1].level, Level::Error);
    }

    #[test]
    fn test_missing_log_reads_empty() {
        let (log, _temp) = create_test_log();
        assert!(log.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_one_json_object_per_line() {
        let (log, _temp) = create_test_log();
        log.log(&ActivityEntry::created(EntityType::Category, "a", "A")).unwrap();
        log.log(&ActivityEntry::deleted(EntityType::Category, "a", "A")).unwrap();

        let contents = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            serde_json::from_str::<serde_json::Value>(line).unwrap();
        }
    }
}
