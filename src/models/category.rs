//! Category model
//!
//! Categories are typed (income or expense) and carry a display color and
//! icon. Names are unique per type, compared case-insensitively.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::transaction::TransactionType;

/// Label used for transactions whose category no longer exists
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Color used for the "Uncategorized" slice of a breakdown
pub const UNCATEGORIZED_COLOR: &str = "#64748b";

/// Maximum category name length
pub const MAX_NAME_LEN: usize = 50;

/// Color palette offered when creating categories; the first is the default
pub const PALETTE: &[&str] = &[
    "#ef4444", "#f59e0b", "#84cc16", "#10b981", "#06b6d4", "#3b82f6", "#6366f1", "#8b5cf6",
    "#a855f7", "#ec4899", "#f97316", "#64748b",
];

/// Icons offered when creating categories; the first is the default
pub const ICONS: &[&str] = &[
    "fas fa-shopping-cart",
    "fas fa-utensils",
    "fas fa-car",
    "fas fa-home",
    "fas fa-heartbeat",
    "fas fa-graduation-cap",
    "fas fa-film",
    "fas fa-plane",
    "fas fa-gamepad",
    "fas fa-gift",
    "fas fa-coffee",
    "fas fa-wifi",
    "fas fa-money-bill-wave",
    "fas fa-laptop-code",
    "fas fa-chart-line",
    "fas fa-coins",
];

/// An income or expense category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Which kind of transaction this category classifies
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Display color as `#rrggbb`
    pub color: String,

    /// Icon identifier
    pub icon: String,
}

impl Category {
    /// Create a category with a fixed ID
    pub fn with_id(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        kind: TransactionType,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            color: color.into(),
            icon: icon.into(),
        }
    }

    /// Whether this category has the given name (case-insensitive) and type
    pub fn matches(&self, name: &str, kind: TransactionType) -> bool {
        self.kind == kind && self.name.to_lowercase() == name.trim().to_lowercase()
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        validate_fields(&self.name, &self.color, &self.icon)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Unvalidated input for a new category
#[derive(Debug, Clone)]
pub struct CategoryDraft {
    pub name: String,
    pub kind: TransactionType,
    pub color: String,
    pub icon: String,
}

impl CategoryDraft {
    /// Create a draft with the default color and icon
    pub fn new(name: impl Into<String>, kind: TransactionType) -> Self {
        Self {
            name: name.into(),
            kind,
            color: PALETTE[0].to_string(),
            icon: ICONS[0].to_string(),
        }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        validate_fields(&self.name, &self.color, &self.icon)
    }

    /// Validate and turn the draft into a category with a fresh ID
    pub fn build(self) -> Result<Category, CategoryValidationError> {
        self.validate()?;
        Ok(Category {
            id: CategoryId::generate(),
            name: self.name.trim().to_string(),
            kind: self.kind,
            color: self.color.trim().to_lowercase(),
            icon: self.icon.trim().to_string(),
        })
    }
}

fn validate_fields(name: &str, color: &str, icon: &str) -> Result<(), CategoryValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CategoryValidationError::EmptyName);
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(CategoryValidationError::NameTooLong(len));
    }
    if !is_hex_color(color.trim()) {
        return Err(CategoryValidationError::InvalidColor(color.to_string()));
    }
    if icon.trim().is_empty() {
        return Err(CategoryValidationError::EmptyIcon);
    }
    Ok(())
}

/// `#rgb` or `#rrggbb`
fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Built-in categories seeded into a fresh ledger
pub fn default_categories() -> Vec<Category> {
    use TransactionType::{Expense, Income};

    [
        ("inc_salary", "Salary", Income, "#10b981", "fas fa-money-bill-wave"),
        ("inc_freelance", "Freelance", Income, "#3b82f6", "fas fa-laptop-code"),
        ("inc_investment", "Investment", Income, "#8b5cf6", "fas fa-chart-line"),
        ("inc_other", "Other Income", Income, "#06b6d4", "fas fa-coins"),
        ("exp_food", "Food & Dining", Expense, "#ef4444", "fas fa-utensils"),
        ("exp_transport", "Transport", Expense, "#f59e0b", "fas fa-car"),
        ("exp_shopping", "Shopping", Expense, "#ec4899", "fas fa-shopping-bag"),
        ("exp_entertainment", "Entertainment", Expense, "#8b5cf6", "fas fa-film"),
        ("exp_bills", "Bills & Utilities", Expense, "#06b6d4", "fas fa-lightbulb"),
        ("exp_health", "Health", Expense, "#10b981", "fas fa-heartbeat"),
        ("exp_education", "Education", Expense, "#6366f1", "fas fa-graduation-cap"),
        ("exp_other", "Other Expenses", Expense, "#64748b", "fas fa-question-circle"),
    ]
    .into_iter()
    .map(|(id, name, kind, color, icon)| Category::with_id(id, name, kind, color, icon))
    .collect()
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    InvalidColor(String),
    EmptyIcon,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::InvalidColor(color) => {
                write!(f, "Invalid color '{}', expected a hex value like #ef4444", color)
            }
            Self::EmptyIcon => write!(f, "Category icon cannot be empty"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
