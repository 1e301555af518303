//! CSV Export functionality
//!
//! Writes the filtered expense list and a category summary in
//! spreadsheet-friendly CSV.

use std::io::Write;

use chrono::NaiveDate;
use csv::Writer;
use tracing::debug;

use crate::analytics::category_totals;
use crate::error::{InsightsError, InsightsResult};
use crate::models::{ExpenseRecord, Money};

fn export_error(e: impl std::fmt::Display) -> InsightsError {
    InsightsError::Export(e.to_string())
}

/// Plain decimal amount, no currency symbol
fn amount_field(amount: Money) -> String {
    format!("{:.2}", amount.to_f64())
}

/// Default file name for an export produced on `today`
pub fn default_export_filename(today: NaiveDate, extension: &str) -> String {
    format!("expense_report_{}.{}", today.format("%Y-%m-%d"), extension)
}

/// Export records as `Date,Category,Description,Amount`, in the order given
pub fn export_records_csv<'a, I, W>(records: I, writer: W) -> InsightsResult<()>
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
    W: Write,
{
    let mut csv = Writer::from_writer(writer);
    csv.write_record(["Date", "Category", "Description", "Amount"])
        .map_err(export_error)?;

    let mut rows = 0usize;
    for record in records {
        csv.write_record([
            record.date.format("%Y-%m-%d").to_string(),
            record.category.clone(),
            record.description.clone(),
            amount_field(record.amount),
        ])
        .map_err(export_error)?;
        rows += 1;
    }

    csv.flush().map_err(export_error)?;
    debug!(rows, "exported expense records");
    Ok(())
}

/// Export a total row followed by a per-category breakdown.
///
/// Layout:
///
/// ```text
/// Total Expenses,160.00
///
/// Category Breakdown
/// Category,Amount,Percentage
/// Food,150.00,93.75%
/// ```
pub fn export_summary_csv<'a, I, W>(records: I, writer: W) -> InsightsResult<()>
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
    W: Write,
{
    let totals = category_totals(records);
    let total: Money = totals.iter().map(|c| c.value).sum();

    // Rows have different widths
    let mut csv = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);

    csv.write_record(["Total Expenses".to_string(), amount_field(total)])
        .map_err(export_error)?;
    csv.write_record([""]).map_err(export_error)?;
    csv.write_record(["Category Breakdown"]).map_err(export_error)?;
    csv.write_record(["Category", "Amount", "Percentage"])
        .map_err(export_error)?;

    for category in &totals {
        csv.write_record([
            category.name.clone(),
            amount_field(category.value),
            format!("{:.2}%", category.percentage_of(total)),
        ])
        .map_err(export_error)?;
    }

    csv.flush().map_err(export_error)?;
    debug!(categories = totals.len(), "exported category summary");
    Ok(())
}
