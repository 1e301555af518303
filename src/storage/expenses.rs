//! Expense repository for JSON storage
//!
//! Manages loading and saving expense records to `expenses.json`.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::debug;

use crate::error::InsightsError;
use crate::models::{ExpenseId, ExpenseRecord};

use super::file_io::{read_json, write_json_atomic};

/// Serializable file layout
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    expenses: Vec<ExpenseRecord>,
}

/// Repository for expense persistence, indexed by owner
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, ExpenseRecord>>,
    /// Index: owner -> expense ids
    by_owner: RwLock<HashMap<String, Vec<ExpenseId>>>,
}

fn lock_error(e: impl std::fmt::Display) -> InsightsError {
    InsightsError::Storage(format!("Failed to acquire lock: {}", e))
}

fn newest_first(records: &mut [ExpenseRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_owner: RwLock::new(HashMap::new()),
        }
    }

    /// Load records from disk and rebuild the owner index
    pub fn load(&self) -> Result<(), InsightsError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_owner = self.by_owner.write().map_err(lock_error)?;

        data.clear();
        by_owner.clear();

        for record in file_data.expenses {
            by_owner.entry(record.owner.clone()).or_default().push(record.id);
            data.insert(record.id, record);
        }

        debug!(count = data.len(), path = %self.path.display(), "loaded expenses");
        Ok(())
    }

    /// Save records to disk, newest first
    pub fn save(&self) -> Result<(), InsightsError> {
        let data = self.data.read().map_err(lock_error)?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        newest_first(&mut expenses);

        write_json_atomic(&self.path, &ExpenseData { expenses })
    }

    pub fn get(&self, id: ExpenseId) -> Result<Option<ExpenseRecord>, InsightsError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    /// Find an owner's record by full or short ID.
    ///
    /// Returns a validation error when a short ID matches several records.
    pub fn find_for_owner(
        &self,
        owner: &str,
        reference: &str,
    ) -> Result<Option<ExpenseRecord>, InsightsError> {
        let mut matches: Vec<ExpenseRecord> = self
            .list_for_owner(owner)?
            .into_iter()
            .filter(|r| r.id.matches(reference))
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            n => Err(InsightsError::Validation(format!(
                "'{}' matches {} expenses; use a longer ID",
                reference, n
            ))),
        }
    }

    /// Every record of one owner, newest first
    pub fn list_for_owner(&self, owner: &str) -> Result<Vec<ExpenseRecord>, InsightsError> {
        let data = self.data.read().map_err(lock_error)?;
        let by_owner = self.by_owner.read().map_err(lock_error)?;

        let ids = by_owner.get(owner).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut records: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        newest_first(&mut records);
        Ok(records)
    }

    /// Insert or replace a record
    pub fn upsert(&self, record: ExpenseRecord) -> Result<(), InsightsError> {
        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_owner = self.by_owner.write().map_err(lock_error)?;

        if let Some(old) = data.get(&record.id) {
            if let Some(ids) = by_owner.get_mut(&old.owner) {
                ids.retain(|&id| id != record.id);
            }
        }

        by_owner.entry(record.owner.clone()).or_default().push(record.id);
        data.insert(record.id, record);
        Ok(())
    }

    /// Remove a record, returning it if it existed
    pub fn delete(&self, id: ExpenseId) -> Result<Option<ExpenseRecord>, InsightsError> {
        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_owner = self.by_owner.write().map_err(lock_error)?;

        let removed = data.remove(&id);
        if let Some(record) = &removed {
            if let Some(ids) = by_owner.get_mut(&record.owner) {
                ids.retain(|&existing| existing != id);
            }
        }
        Ok(removed)
    }

    pub fn count(&self) -> Result<usize, InsightsError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }
}
