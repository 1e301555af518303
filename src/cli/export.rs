//! Export CLI commands
//!
//! Writes filtered records, a category summary or a full analytics report
//! to a file. Without `--output` the file lands in the exports directory.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Subcommand;
use tracing::info;

use super::{load_owner_records, parse_date_arg, today, FilterArgs};
use crate::config::Settings;
use crate::error::{InsightsError, InsightsResult};
use crate::export::{
    default_export_filename, export_records_csv, export_report_json, export_summary_csv,
};
use crate::models::Granularity;
use crate::reports::AnalyticsReport;
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export the filtered expense list to CSV
    Records {
        #[command(flatten)]
        filter: FilterArgs,
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export totals and a category breakdown to CSV
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the full analytics report to JSON
    Report {
        #[command(flatten)]
        filter: FilterArgs,
        /// Period length
        #[arg(short, long, value_enum)]
        granularity: Option<Granularity>,
        /// Number of periods to project
        #[arg(long)]
        horizon: Option<usize>,
        /// Reference date for the month comparison (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        reference: Option<String>,
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
}

fn create_output(path: &Path) -> InsightsResult<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            InsightsError::Export(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(path).map_err(|e| {
        InsightsError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

fn finish(mut writer: BufWriter<File>, path: &Path, what: &str) -> InsightsResult<()> {
    writer
        .flush()
        .map_err(|e| InsightsError::Export(e.to_string()))?;
    info!(path = %path.display(), kind = what, "export written");
    println!("{} exported to: {}", what, path.display());
    Ok(())
}

/// Handle export commands
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExportCommands,
) -> InsightsResult<()> {
    let records = load_owner_records(storage, settings)?;
    let today = today();
    let default_path = |extension: &str| {
        storage
            .paths()
            .exports_dir()
            .join(default_export_filename(today, extension))
    };

    match cmd {
        ExportCommands::Records { filter, output } => {
            let query = filter.query(settings, None, today)?;
            let path = output.unwrap_or_else(|| default_path("csv"));

            let mut writer = create_output(&path)?;
            // Chronological order reads better in a spreadsheet
            let mut selected = query.apply(&records);
            selected.sort_by_key(|r| r.date);
            export_records_csv(selected, &mut writer)?;
            finish(writer, &path, "Expenses")
        }

        ExportCommands::Summary { filter, output } => {
            let query = filter.query(settings, None, today)?;
            let path = output.unwrap_or_else(|| default_path("summary.csv"));

            let mut writer = create_output(&path)?;
            export_summary_csv(query.apply(&records), &mut writer)?;
            finish(writer, &path, "Summary")
        }

        ExportCommands::Report {
            filter,
            granularity,
            horizon,
            reference,
            output,
            compact,
        } => {
            let mut query = filter.query(settings, granularity, today)?;
            if let Some(horizon) = horizon {
                query = query.horizon(horizon);
            }
            let reference = match reference {
                Some(r) => parse_date_arg(&r, "reference")?,
                None => today,
            };
            let path = output.unwrap_or_else(|| default_path("json"));

            let report = AnalyticsReport::generate(&records, &query, reference);
            let mut writer = create_output(&path)?;
            export_report_json(&report, &mut writer, !compact)?;
            finish(writer, &path, "Report")
        }
    }
}
