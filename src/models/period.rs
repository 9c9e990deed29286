//! Calendar windows used to filter transactions
//!
//! Windows are evaluated against a caller-supplied "today" so that every
//! filter is a pure function of the ledger and the clock.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A period filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Only today
    Today,
    /// Today and the seven days before it
    Week,
    /// The current calendar month
    Month,
    /// The current calendar year
    Year,
    /// No filtering
    #[default]
    All,
}

impl Period {
    /// Parse a period name; anything unrecognized means "all"
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "today" => Self::Today,
            "week" => Self::Week,
            "month" => Self::Month,
            "year" => Self::Year,
            _ => Self::All,
        }
    }

    /// Inclusive date window for this period, or `None` for `All`
    pub fn window(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Self::Today => Some((today, today)),
            Self::Week => Some((today - Duration::days(7), today)),
            Self::Month => {
                let start = today.with_day(1)?;
                let next_month = if today.month() == 12 {
                    NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)?
                } else {
                    NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)?
                };
                Some((start, next_month - Duration::days(1)))
            }
            Self::Year => Some((
                NaiveDate::from_ymd_opt(today.year(), 1, 1)?,
                NaiveDate::from_ymd_opt(today.year(), 12, 31)?,
            )),
            Self::All => None,
        }
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self.window(today) {
            Some((start, end)) => date >= start && date <= end,
            None => true,
        }
    }

    /// Human-friendly label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Week => "Last 7 days",
            Self::Month => "This month",
            Self::Year => "This year",
            Self::All => "All time",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<&str> for Period {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}
