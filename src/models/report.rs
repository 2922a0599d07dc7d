//! Report descriptor model for the SDK

use super::table::TableData;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// The complete set of inputs needed to produce one report document.
///
/// A descriptor is constructed once per report, read start-to-finish by the
/// renderer, and never written back to: rendering the same descriptor twice
/// produces the same document (apart from the report date advancing with
/// the clock).
///
/// # Example
///
/// ```rust
/// use report_rendering_sdk::models::{ReportDescriptor, TableData};
///
/// let table = TableData::new(vec!["Name".to_string(), "JoinDate".to_string()]);
/// let report = ReportDescriptor::new("/tmp/reports", "members.pdf", table)
///     .with_header_text("Membership Roster")
///     .with_report_date(true)
///     .with_date_columns([1]);
/// assert_eq!(report.output_file(), std::path::PathBuf::from("/tmp/reports/members.pdf"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportDescriptor {
    /// Directory the output file is written into
    pub output_path: PathBuf,
    /// Output file name; include the `.pdf` extension
    pub output_file_name: String,
    /// Free text shown centered above the table
    #[serde(default)]
    pub header_text: String,
    /// Title line rendered under the header text and used as the document
    /// title metadata
    #[serde(default)]
    pub report_title: String,
    /// When true, a "Date of Report" line is added under the header text at
    /// render time
    #[serde(default)]
    pub use_report_date: bool,
    /// Zero-based indices of columns whose cells attempt date parsing and
    /// short-date formatting; out-of-range entries never match
    #[serde(default)]
    pub date_columns: BTreeSet<usize>,
    /// The data to render
    pub table: TableData,
}

impl ReportDescriptor {
    /// Create a descriptor with empty header fields and no date columns
    pub fn new(
        output_path: impl Into<PathBuf>,
        output_file_name: impl Into<String>,
        table: TableData,
    ) -> Self {
        Self {
            output_path: output_path.into(),
            output_file_name: output_file_name.into(),
            header_text: String::new(),
            report_title: String::new(),
            use_report_date: false,
            date_columns: BTreeSet::new(),
            table,
        }
    }

    /// Set the header text
    pub fn with_header_text(mut self, header_text: impl Into<String>) -> Self {
        self.header_text = header_text.into();
        self
    }

    /// Set the report title
    pub fn with_report_title(mut self, report_title: impl Into<String>) -> Self {
        self.report_title = report_title.into();
        self
    }

    /// Enable or disable the report-date line
    pub fn with_report_date(mut self, use_report_date: bool) -> Self {
        self.use_report_date = use_report_date;
        self
    }

    /// Set the date-column indices
    pub fn with_date_columns(mut self, columns: impl IntoIterator<Item = usize>) -> Self {
        self.date_columns = columns.into_iter().collect();
        self
    }

    /// Full path of the output document
    ///
    /// Joins the directory and file name, so descriptors work with and
    /// without a trailing separator on `output_path`.
    pub fn output_file(&self) -> PathBuf {
        self.output_path.join(Path::new(&self.output_file_name))
    }
}
