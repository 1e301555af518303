//! Export module for expense-insights
//!
//! - CSV: the filtered expense list and a category summary
//! - JSON: the full analytics report

pub mod csv;
pub mod json;

pub use self::csv::{default_export_filename, export_records_csv, export_summary_csv};
pub use self::json::{export_report_json, ReportExport, EXPORT_SCHEMA_VERSION};
