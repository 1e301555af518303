//! Expense service
//!
//! Business logic for recording, listing and deleting expenses on top of
//! the storage layer.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::config::ValidationPolicy;
use crate::error::{InsightsError, InsightsResult};
use crate::models::{canonical_category, CategoryFilter, DateRange, ExpenseRecord, Money};
use crate::storage::Storage;

use super::validation::{describe, validate_expense};

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub owner: String,
    pub amount: Money,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

/// Options for listing expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    pub range: Option<DateRange>,
    pub category: CategoryFilter,
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range(mut self, range: DateRange) -> Self {
        self.range = Some(range);
        self
    }

    pub fn category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    policy: ValidationPolicy,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage, policy: ValidationPolicy) -> Self {
        Self { storage, policy }
    }

    /// Validate a new expense against `today` without storing it
    pub fn check(&self, input: &CreateExpenseInput, today: NaiveDate) -> InsightsResult<()> {
        let errors = validate_expense(
            input.amount,
            &input.category,
            &input.description,
            input.date,
            today,
            self.policy,
        );
        if errors.is_empty() {
            Ok(())
        } else {
            Err(InsightsError::Validation(describe(&errors)))
        }
    }

    /// Build a record from validated input; category labels are normalised to
    /// the predefined spelling when one matches
    fn build(&self, input: CreateExpenseInput) -> ExpenseRecord {
        let category = canonical_category(&input.category)
            .map(str::to_string)
            .unwrap_or_else(|| input.category.trim().to_string());

        ExpenseRecord::new(input.owner, input.amount, category, input.date)
            .with_description(input.description.trim())
    }

    /// Validate, store and persist a new expense
    pub fn create(
        &self,
        input: CreateExpenseInput,
        today: NaiveDate,
    ) -> InsightsResult<ExpenseRecord> {
        if let Err(e) = self.check(&input, today) {
            warn!(owner = %input.owner, error = %e, "rejected expense");
            return Err(e);
        }

        let record = self.build(input);
        self.storage.expenses.upsert(record.clone())?;
        self.storage.expenses.save()?;

        info!(id = %record.id, amount = record.amount.cents(), category = %record.category, "recorded expense");
        Ok(record)
    }

    /// Validate and store several expenses with a single save.
    ///
    /// Stops at the first invalid input without storing anything.
    pub fn create_many(
        &self,
        inputs: Vec<CreateExpenseInput>,
        today: NaiveDate,
    ) -> InsightsResult<Vec<ExpenseRecord>> {
        for input in &inputs {
            self.check(input, today)?;
        }

        let records: Vec<ExpenseRecord> = inputs.into_iter().map(|i| self.build(i)).collect();
        for record in &records {
            self.storage.expenses.upsert(record.clone())?;
        }
        if !records.is_empty() {
            self.storage.expenses.save()?;
        }

        info!(count = records.len(), "recorded expenses");
        Ok(records)
    }

    /// Delete an owner's expense by full or short ID
    pub fn delete(&self, owner: &str, reference: &str) -> InsightsResult<ExpenseRecord> {
        let record = self
            .storage
            .expenses
            .find_for_owner(owner, reference)?
            .ok_or_else(|| InsightsError::expense_not_found(reference))?;

        self.storage.expenses.delete(record.id)?;
        self.storage.expenses.save()?;

        info!(id = %record.id, "deleted expense");
        Ok(record)
    }

    /// Every record belonging to `owner`, newest first
    pub fn all(&self, owner: &str) -> InsightsResult<Vec<ExpenseRecord>> {
        self.storage.expenses.list_for_owner(owner)
    }

    /// List an owner's expenses, newest first, with optional filtering
    pub fn list(&self, owner: &str, filter: &ExpenseFilter) -> InsightsResult<Vec<ExpenseRecord>> {
        let mut records = self.all(owner)?;

        if let Some(range) = filter.range {
            records.retain(|r| range.contains(r.date));
        }
        records.retain(|r| filter.category.matches(&r.category));

        if let Some(limit) = filter.limit {
            records.truncate(limit);
        }

        Ok(records)
    }
}
