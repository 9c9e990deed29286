//! Configuration module for MoneyTrack
//!
//! This module provides:
//! - Data directory resolution
//! - The persisted user settings singleton

pub mod paths;
pub mod settings;

pub use paths::MoneyTrackPaths;
pub use settings::{Settings, Theme};
