//! CSV import service
//!
//! Reads `date,category,description,amount` rows, validates each one and
//! stores the valid rows in a single save. Invalid rows are reported back
//! with their line number instead of aborting the whole import.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use tracing::{info, warn};

use crate::config::ValidationPolicy;
use crate::error::{InsightsError, InsightsResult};
use crate::models::Money;
use crate::storage::Storage;

use super::expense::{CreateExpenseInput, ExpenseService};

/// Accepted date layouts, tried in order
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Expected header, case-insensitive
const EXPECTED_HEADER: [&str; 4] = ["date", "category", "description", "amount"];

/// Outcome of an import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Number of rows stored
    pub imported: usize,
    /// Skipped rows as (1-based line number, reason)
    pub skipped: Vec<(usize, String)>,
}

impl ImportSummary {
    pub fn has_skipped(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Parse a date in one of the accepted layouts
pub fn parse_import_date(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .ok_or_else(|| format!("Could not parse date: '{}'", s))
}

/// Service for CSV import
pub struct ImportService<'a> {
    expenses: ExpenseService<'a>,
    owner: String,
}

impl<'a> ImportService<'a> {
    pub fn new(storage: &'a Storage, owner: impl Into<String>, policy: ValidationPolicy) -> Self {
        Self {
            expenses: ExpenseService::new(storage, policy),
            owner: owner.into(),
        }
    }

    /// Import from a CSV file on disk
    pub fn import_file(&self, path: &Path, today: NaiveDate) -> InsightsResult<ImportSummary> {
        let file = std::fs::File::open(path).map_err(|e| {
            InsightsError::Import(format!("Failed to open {}: {}", path.display(), e))
        })?;
        self.import_reader(file, today)
    }

    /// Import from any reader producing CSV text
    pub fn import_reader<R: Read>(&self, source: R, today: NaiveDate) -> InsightsResult<ImportSummary> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);

        let headers = reader
            .headers()
            .map_err(|e| InsightsError::Import(format!("Failed to read header: {}", e)))?
            .clone();
        check_header(&headers)?;

        let mut summary = ImportSummary::default();
        let mut accepted = Vec::new();

        for (idx, result) in reader.records().enumerate() {
            // Header is line 1
            let line = idx + 2;
            let parsed = result
                .map_err(|e| format!("Error reading CSV record: {}", e))
                .and_then(|record| self.parse_row(&record))
                .and_then(|input| {
                    self.expenses
                        .check(&input, today)
                        .map(|_| input)
                        .map_err(|e| e.to_string())
                });

            match parsed {
                Ok(input) => accepted.push(input),
                Err(reason) => {
                    warn!(line, reason = %reason, "skipping import row");
                    summary.skipped.push((line, reason));
                }
            }
        }

        summary.imported = self.expenses.create_many(accepted, today)?.len();
        info!(
            imported = summary.imported,
            skipped = summary.skipped.len(),
            "import finished"
        );
        Ok(summary)
    }

    fn parse_row(&self, record: &StringRecord) -> Result<CreateExpenseInput, String> {
        let field = |idx: usize, name: &str| {
            record
                .get(idx)
                .map(str::to_string)
                .ok_or_else(|| format!("Missing {} column", name))
        };

        let date = parse_import_date(&field(0, "date")?)?;
        let category = field(1, "category")?;
        let description = field(2, "description")?;
        let amount = Money::parse(&field(3, "amount")?).map_err(|e| e.to_string())?;

        Ok(CreateExpenseInput {
            owner: self.owner.clone(),
            amount,
            category,
            description,
            date,
        })
    }
}

fn check_header(headers: &StringRecord) -> InsightsResult<()> {
    let matches = headers.len() >= EXPECTED_HEADER.len()
        && headers
            .iter()
            .zip(EXPECTED_HEADER)
            .all(|(actual, expected)| actual.eq_ignore_ascii_case(expected));

    if matches {
        Ok(())
    } else {
        Err(InsightsError::Import(format!(
            "Expected header '{}', found '{}'",
            EXPECTED_HEADER.join(","),
            headers.iter().collect::<Vec<_>>().join(",")
        )))
    }
}
