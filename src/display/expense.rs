//! Expense display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::truncate;
use crate::models::ExpenseRecord;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Refunds show their magnitude with a marker
fn format_amount(record: &ExpenseRecord, currency: &str) -> String {
    if record.is_refund() {
        format!("{} (refund)", (-record.amount).format_with_symbol(currency))
    } else {
        record.amount.format_with_symbol(currency)
    }
}

/// Format expenses as a table, in the order given
pub fn format_expense_table(records: &[ExpenseRecord], currency: &str) -> String {
    if records.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows = records.iter().map(|r| ExpenseRow {
        id: r.id.to_string(),
        date: r.date.format("%Y-%m-%d").to_string(),
        category: r.category.clone(),
        description: truncate(&r.description, 40),
        amount: format_amount(r, currency),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Format a single expense for display
pub fn format_expense_details(record: &ExpenseRecord, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", record.id));
    output.push_str(&format!("Date:        {}\n", record.date.format("%Y-%m-%d")));
    output.push_str(&format!("Amount:      {}\n", record.amount.format_with_symbol(currency)));
    output.push_str(&format!("Category:    {}\n", record.category));
    if !record.description.is_empty() {
        output.push_str(&format!("Description: {}\n", record.description));
    }

    output
}
