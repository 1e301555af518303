//! Expense CLI commands
//!
//! Implements CLI commands for recording, listing, deleting and importing
//! expenses.

use std::path::PathBuf;

use clap::Subcommand;

use super::{parse_date_arg, today, FilterArgs};
use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::{InsightsError, InsightsResult};
use crate::models::{DateRange, Money};
use crate::services::{CreateExpenseInput, ExpenseFilter, ExpenseService, ImportService};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "12.50")
        amount: String,
        /// Category label (see `expenses categories`)
        #[arg(short, long)]
        category: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// List expenses, newest first
    List {
        #[command(flatten)]
        filter: FilterArgs,
        /// Number of expenses to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show expense details
    Show {
        /// Expense ID (full or short)
        id: String,
    },
    /// Delete an expense
    Delete {
        /// Expense ID (full or short)
        id: String,
    },
    /// Import expenses from a CSV file with a date,category,description,amount header
    Import {
        /// Path to CSV file
        file: PathBuf,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> InsightsResult<()> {
    let service = ExpenseService::new(storage, settings.validation);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let amount = Money::parse(&amount).map_err(|e| {
                InsightsError::Validation(format!("Invalid amount '{}': {}", amount, e))
            })?;
            let today = today();
            let date = match date {
                Some(d) => parse_date_arg(&d, "expense")?,
                None => today,
            };

            let record = service.create(
                CreateExpenseInput {
                    owner: settings.owner.clone(),
                    amount,
                    category,
                    description,
                    date,
                },
                today,
            )?;

            println!("Recorded expense:");
            print!("{}", format_expense_details(&record, currency));
        }

        ExpenseCommands::List { filter, limit } => {
            let mut options = ExpenseFilter::new()
                .category(filter.category_filter())
                .limit(limit);

            // Without explicit dates every record is listed
            if filter.start.is_some() || filter.end.is_some() {
                let start = filter
                    .start
                    .as_deref()
                    .map(|s| parse_date_arg(s, "start"))
                    .transpose()?;
                let end = filter
                    .end
                    .as_deref()
                    .map(|e| parse_date_arg(e, "end"))
                    .transpose()?;
                let all = DateRange::unbounded();
                let range = DateRange::new(start.unwrap_or(all.start), end.unwrap_or(all.end));
                if !range.is_valid() {
                    return Err(InsightsError::Validation(format!(
                        "Start date {} is after end date {}",
                        range.start, range.end
                    )));
                }
                options = options.range(range);
            }

            let records = service.list(&settings.owner, &options)?;
            println!("{}", format_expense_table(&records, currency));
        }

        ExpenseCommands::Show { id } => {
            let record = storage
                .expenses
                .find_for_owner(&settings.owner, &id)?
                .ok_or_else(|| InsightsError::expense_not_found(&id))?;
            print!("{}", format_expense_details(&record, currency));
        }

        ExpenseCommands::Delete { id } => {
            let record = service.delete(&settings.owner, &id)?;
            println!(
                "Deleted expense {} ({} {} on {})",
                record.id,
                record.amount.format_with_symbol(currency),
                record.category,
                record.date
            );
        }

        ExpenseCommands::Import { file } => {
            let importer = ImportService::new(storage, settings.owner.clone(), settings.validation);
            let summary = importer.import_file(&file, today())?;

            println!("Imported {} expense(s) from {}", summary.imported, file.display());
            if summary.has_skipped() {
                println!("Skipped {} row(s):", summary.skipped.len());
                for (line, reason) in &summary.skipped {
                    println!("  line {}: {}", line, reason);
                }
            }
        }
    }

    Ok(())
}
