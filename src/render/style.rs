//! Presentation configuration for rendered reports
//!
//! The original report engine existed as several near-identical variants
//! differing only in borders, header casing, and margins. Those knobs live
//! here instead, as one structure consumed by the single renderer.

use super::fonts::FontSource;
use serde::{Deserialize, Serialize};

/// Accepted input formats for date-column parsing, tried in order.
///
/// Replaces the original's locale-default parsing with an explicit list:
/// ISO dates, US short dates, slashed ISO, day-month-name, ISO date-times,
/// and RFC 3339 (handled separately in the parser).
pub const ACCEPTED_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%d-%b-%Y"];

/// Accepted date-time input formats; the time component is discarded.
pub const ACCEPTED_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Page size options
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// US Letter size (8.5 x 11 inches), the report engine's historical
    /// default
    #[default]
    Letter,
    /// A4 paper size (210 x 297 mm)
    A4,
}

impl PageSize {
    /// Portrait page dimensions in millimeters (width, height)
    pub fn dimensions_mm(&self) -> (f64, f64) {
        match self {
            PageSize::Letter => (215.9, 279.4),
            PageSize::A4 => (210.0, 297.0),
        }
    }
}

/// Page orientation options
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Wide pages; reports are column-heavy so this is the default
    #[default]
    Landscape,
    Portrait,
}

/// How column names appear in the table header row
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ColumnNameDisplay {
    /// Verbatim, as supplied on the table
    #[default]
    AsIs,
    /// Upper-cased
    Uppercase,
}

impl ColumnNameDisplay {
    /// Apply the display rule to a column name
    pub fn apply(&self, name: &str) -> String {
        match self {
            ColumnNameDisplay::AsIs => name.to_string(),
            ColumnNameDisplay::Uppercase => name.to_uppercase(),
        }
    }
}

/// Styling configuration for report rendering
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderStyle {
    /// Page size
    #[serde(default)]
    pub page_size: PageSize,

    /// Page orientation
    #[serde(default)]
    pub orientation: Orientation,

    /// Uniform page margin in millimeters
    #[serde(default = "default_margin_mm")]
    pub margin_mm: f64,

    /// Table width as a percentage of the usable page width
    #[serde(default = "default_table_width_percent")]
    pub table_width_percent: u8,

    /// Font size for the header block and end-of-record marker (points)
    #[serde(default = "default_header_font_size")]
    pub header_font_size: u8,

    /// Font size for table cells, header row included (points)
    #[serde(default = "default_body_font_size")]
    pub body_font_size: u8,

    /// Column-name display in the header row
    #[serde(default)]
    pub column_names: ColumnNameDisplay,

    /// Draw cell frames around table cells
    #[serde(default)]
    pub cell_frames: bool,

    /// Re-emit the table header row on every page the body spans
    #[serde(default = "default_true")]
    pub repeat_header: bool,

    /// Output pattern for short dates (report-date line and date columns)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Vertical gap between the header block and the table, in text lines
    #[serde(default = "default_header_gap_lines")]
    pub header_gap_lines: f64,

    /// Vertical gap between the table and the end marker, in text lines
    #[serde(default = "default_table_gap_lines")]
    pub table_gap_lines: f64,

    /// Terminal marker appended after the table
    #[serde(default = "default_end_marker")]
    pub end_marker: String,

    /// Fixed-width font family used for all report text
    #[serde(default)]
    pub font: FontSource,
}

fn default_margin_mm() -> f64 {
    12.0
}

fn default_table_width_percent() -> u8 {
    95
}

fn default_header_font_size() -> u8 {
    10
}

fn default_body_font_size() -> u8 {
    8
}

fn default_true() -> bool {
    true
}

fn default_date_format() -> String {
    "%-m/%-d/%Y".to_string()
}

fn default_header_gap_lines() -> f64 {
    1.0
}

fn default_table_gap_lines() -> f64 {
    0.5
}

fn default_end_marker() -> String {
    "*** END OF RECORD ***".to_string()
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            orientation: Orientation::default(),
            margin_mm: default_margin_mm(),
            table_width_percent: default_table_width_percent(),
            header_font_size: default_header_font_size(),
            body_font_size: default_body_font_size(),
            column_names: ColumnNameDisplay::default(),
            cell_frames: false,
            repeat_header: default_true(),
            date_format: default_date_format(),
            header_gap_lines: default_header_gap_lines(),
            table_gap_lines: default_table_gap_lines(),
            end_marker: default_end_marker(),
            font: FontSource::default(),
        }
    }
}

impl RenderStyle {
    /// Page dimensions in millimeters (width, height), orientation applied
    pub fn page_dimensions_mm(&self) -> (f64, f64) {
        let (w, h) = self.page_size.dimensions_mm();
        match self.orientation {
            Orientation::Landscape => (h, w),
            Orientation::Portrait => (w, h),
        }
    }

    /// Horizontal padding in millimeters that narrows the table to
    /// `table_width_percent` of the usable page width
    pub(crate) fn table_side_padding_mm(&self, page_width_mm: f64) -> f64 {
        let usable = page_width_mm - 2.0 * self.margin_mm;
        let pct = f64::from(self.table_width_percent.min(100));
        usable * (100.0 - pct) / 200.0
    }
}
