//! Storage layer for expense-insights
//!
//! JSON file storage with atomic writes and automatic directory creation.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::InsightsPaths;
use crate::error::InsightsError;

/// Main storage coordinator
pub struct Storage {
    paths: InsightsPaths,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: InsightsPaths) -> Result<Self, InsightsError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &InsightsPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), InsightsError> {
        self.expenses.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), InsightsError> {
        self.expenses.save()
    }
}
