//! Rendering functionality
//!
//! Turns a report descriptor into a finalized PDF document:
//! - content policy (header composition, date-column formatting)
//! - styling configuration
//! - document lifecycle around the `genpdf` layout backend

pub mod content;
pub mod elements;
pub mod fonts;
pub mod report;
pub mod style;

use std::path::PathBuf;

/// Error during report rendering
///
/// Underlying causes stay attached as error sources so callers can tell
/// configuration, data-shape, font, backend, and I/O failures apart.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The output path is not an existing directory
    #[error("output path {path:?} is not an existing directory")]
    Config { path: PathBuf },
    /// A row's length does not match the table's column count
    #[error("row {row} has {found} cells but the table defines {expected} columns")]
    DataShape {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The fixed-width font family could not be loaded
    #[error("failed to load the report font family")]
    Font(#[source] genpdf::error::Error),
    /// The layout backend failed while building or finalizing the document
    #[error("document rendering failed")]
    Backend(#[source] genpdf::error::Error),
    /// Filesystem failure outside the layout backend
    #[error("report I/O failed")]
    Io(#[from] std::io::Error),
}

// Re-export for convenience
pub use fonts::FontSource;
pub use report::ReportRenderer;
pub use style::{ColumnNameDisplay, Orientation, PageSize, RenderStyle};
