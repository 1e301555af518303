//! JSON Export functionality
//!
//! Wraps an analytics report with schema and provenance metadata.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::error::{InsightsError, InsightsResult};
use crate::reports::AnalyticsReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Report export envelope
#[derive(Debug, Clone, Serialize)]
pub struct ReportExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    pub report: &'a AnalyticsReport,
}

impl<'a> ReportExport<'a> {
    pub fn new(report: &'a AnalyticsReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            report,
        }
    }
}

/// Export a report to JSON
pub fn export_report_json<W: Write>(
    report: &AnalyticsReport,
    writer: &mut W,
    pretty: bool,
) -> InsightsResult<()> {
    let export = ReportExport::new(report);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| InsightsError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| InsightsError::Export(e.to_string()))?;
    debug!(records = report.records.len(), "exported report json");
    Ok(())
}
