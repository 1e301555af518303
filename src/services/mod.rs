//! Service layer for expense-insights
//!
//! Business logic sitting between the CLI and storage: recording and
//! validating expenses, and bulk CSV import.

pub mod expense;
pub mod import;
pub mod validation;

pub use expense::{CreateExpenseInput, ExpenseFilter, ExpenseService};
pub use import::{parse_import_date, ImportService, ImportSummary};
pub use validation::{validate_expense, ExpenseValidationError};
