//! Input validation for new expense records
//!
//! Applied where records enter storage (CLI add and CSV import). The
//! analytics layer itself trusts whatever records it is given.

use chrono::NaiveDate;
use thiserror::Error;

use crate::config::ValidationPolicy;
use crate::models::Money;

/// Minimum description length, in characters
pub const MIN_DESCRIPTION_LEN: usize = 3;
/// Maximum description length, in characters
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// A single problem with an expense input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseValidationError {
    #[error("Amount must be a positive number")]
    NonPositiveAmount,

    #[error("Description is required")]
    MissingDescription,

    #[error("Description must be at least 3 characters long")]
    DescriptionTooShort,

    #[error("Description must be less than 100 characters")]
    DescriptionTooLong,

    #[error("Category is required")]
    MissingCategory,

    #[error("Date cannot be in the future")]
    FutureDate,
}

/// Check an expense's fields, collecting every problem found.
///
/// Under [`ValidationPolicy::Permissive`] only the category is required.
pub fn validate_expense(
    amount: Money,
    category: &str,
    description: &str,
    date: NaiveDate,
    today: NaiveDate,
    policy: ValidationPolicy,
) -> Vec<ExpenseValidationError> {
    let mut errors = Vec::new();

    if category.trim().is_empty() {
        errors.push(ExpenseValidationError::MissingCategory);
    }

    if policy == ValidationPolicy::Permissive {
        return errors;
    }

    if !amount.is_positive() {
        errors.push(ExpenseValidationError::NonPositiveAmount);
    }

    let description_len = description.trim().chars().count();
    if description_len == 0 {
        errors.push(ExpenseValidationError::MissingDescription);
    } else if description_len < MIN_DESCRIPTION_LEN {
        errors.push(ExpenseValidationError::DescriptionTooShort);
    } else if description_len > MAX_DESCRIPTION_LEN {
        errors.push(ExpenseValidationError::DescriptionTooLong);
    }

    if date > today {
        errors.push(ExpenseValidationError::FutureDate);
    }

    errors
}

/// Join validation errors into one message
pub fn describe(errors: &[ExpenseValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
