//! Activity log entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        })
    }
}

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
    Load,
    Restore,
    Export,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Load => write!(f, "LOAD"),
            Operation::Restore => write!(f, "RESTORE"),
            Operation::Export => write!(f, "EXPORT"),
        }
    }
}

/// What it happened to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Transaction,
    Category,
    Settings,
    Ledger,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Transaction => write!(f, "Transaction"),
            EntityType::Category => write!(f, "Category"),
            EntityType::Settings => write!(f, "Settings"),
            EntityType::Ledger => write!(f, "Ledger"),
        }
    }
}

/// A single activity log line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub timestamp: DateTime<Utc>,

    pub level: Level,

    pub operation: Operation,

    pub entity_type: EntityType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,

    /// Human-readable name (category name, transaction description)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActivityEntry {
    fn new(level: Level, operation: Operation, entity_type: EntityType) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            operation,
            entity_type,
            entity_id: None,
            entity_name: None,
            message: None,
        }
    }

    /// An entity was created
    pub fn created(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: impl Into<String>,
    ) -> Self {
        Self::new(Level::Info, Operation::Create, entity_type)
            .with_entity(entity_id, entity_name)
    }

    /// An entity was deleted
    pub fn deleted(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: impl Into<String>,
    ) -> Self {
        Self::new(Level::Info, Operation::Delete, entity_type)
            .with_entity(entity_id, entity_name)
    }

    /// Informational entry with a free-form message
    pub fn info(operation: Operation, entity_type: EntityType, message: impl Into<String>) -> Self {
        Self::new(Level::Info, operation, entity_type).with_message(message)
    }

    /// Something was recovered from
    pub fn warn(operation: Operation, entity_type: EntityType, message: impl Into<String>) -> Self {
        Self::new(Level::Warn, operation, entity_type).with_message(message)
    }

    /// An operation failed
    pub fn error(operation: Operation, entity_type: EntityType, message: impl Into<String>) -> Self {
        Self::new(Level::Error, operation, entity_type).with_message(message)
    }

    pub fn with_entity(mut self, entity_id: impl Into<String>, entity_name: impl Into<String>) -> Self {
        self.entity_id = Some(entity_id.into());
        self.entity_name = Some(entity_name.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// One-line summary for terminal output
    pub fn summary(&self) -> String {
        let mut line = format!(
            "{} {:<5} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.level,
            self.operation,
            self.entity_type
        );
        if let Some(ref name) = self.entity_name {
            line.push_str(&format!(" \"{}\"", name));
        }
        if let Some(ref id) = self.entity_id {
            line.push_str(&format!(" ({})", id));
        }
        if let Some(ref message) = self.message {
            line.push_str(&format!(": {}", message));
        }
        line
    }
}
