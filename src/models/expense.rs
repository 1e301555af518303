//! Expense record model
//!
//! A single spend (or refund, when negative) owned by one user. The
//! analytics layer only ever reads these.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier
    pub id: ExpenseId,

    /// The user this record belongs to
    pub owner: String,

    /// Amount spent; negative for refunds and credits
    pub amount: Money,

    /// Category label
    pub category: String,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Free text, not used by aggregation
    #[serde(default)]
    pub description: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl ExpenseRecord {
    /// Create a new record with a fresh ID
    pub fn new(
        owner: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            owner: owner.into(),
            amount,
            category: category.into(),
            date,
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_refund(&self) -> bool {
        self.amount.is_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let record = ExpenseRecord::new("local", Money::from_units(100), "Food & Dining", date)
            .with_description("Groceries");

        assert_eq!(record.owner, "local");
        assert_eq!(record.amount.cents(), 10000);
        assert_eq!(record.description, "Groceries");
        assert!(!record.is_refund());
    }

    #[test]
    fn test_serde_round_trip_keeps_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let record = ExpenseRecord::new("local", Money::from_cents(-500), "Shopping", date);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"2024-02-29\""));
        let back: ExpenseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
        assert!(back.is_refund());
    }
}
