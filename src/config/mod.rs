//! Configuration module for expense-insights
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::InsightsPaths;
pub use settings::{Settings, ValidationPolicy};
