//! Report Rendering SDK - Shared library for tabular PDF report generation
//!
//! Provides unified interfaces for:
//! - Describing a report (tabular data, header block, date columns)
//! - Rendering it into a paginated, landscape-oriented PDF document
//! - Configuring presentation (page setup, fonts, borders, date formats)
//!
//! The heavy lifting (PDF structure, pagination, font metrics) is delegated
//! to the `genpdf` layout library; this crate owns the rendering policy:
//! which strings end up in which cells, and in what order the document is
//! assembled.

pub mod models;
pub mod render;

// Re-export commonly used types
pub use models::{CellValue, ReportDescriptor, TableData};
pub use render::{
    ColumnNameDisplay, FontSource, Orientation, PageSize, RenderError, RenderStyle, ReportRenderer,
};
