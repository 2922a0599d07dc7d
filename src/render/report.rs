//! Report renderer
//!
//! Translates a [`ReportDescriptor`] into a finalized PDF document:
//! shape check, document setup, header block, data table, end-of-record
//! marker, finalize. Every call assembles a fresh `genpdf::Document`, and
//! finalization consumes it, so a completed render can never be written to
//! again.

use super::RenderError;
use super::content;
use super::elements::RepeatingHeaderTable;
use super::style::RenderStyle;
use crate::models::ReportDescriptor;
use chrono::Local;
use genpdf::elements::{Break, Paragraph};
use genpdf::style::Style;
use genpdf::{Alignment, Element, Margins, SimplePageDecorator, Size};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Renderer for tabular PDF reports
///
/// Holds only immutable styling configuration; one renderer may serve any
/// number of sequential renders.
///
/// # Example
///
/// ```no_run
/// use report_rendering_sdk::models::{ReportDescriptor, TableData};
/// use report_rendering_sdk::render::ReportRenderer;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = TableData::with_rows(
///     vec!["Name".to_string(), "JoinDate".to_string()],
///     vec![vec!["Alice".into(), "2021-03-01".into()]],
/// );
/// let report = ReportDescriptor::new("/tmp/reports", "members.pdf", table)
///     .with_header_text("Membership Roster")
///     .with_report_date(true)
///     .with_date_columns([1]);
///
/// let renderer = ReportRenderer::new();
/// let path = renderer.render(&report)?;
/// println!("wrote {}", path.display());
/// # Ok(())
/// # }
/// ```
pub struct ReportRenderer {
    style: RenderStyle,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer {
    /// Create a renderer with the default style
    pub fn new() -> Self {
        Self {
            style: RenderStyle::default(),
        }
    }

    /// Create a renderer with a custom style
    pub fn with_style(style: RenderStyle) -> Self {
        Self { style }
    }

    /// Current style configuration
    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Render the report and return the full output path.
    ///
    /// The table shape and output directory are checked before any file is
    /// created; failures during document finalization remove the partial
    /// file before the error is returned.
    pub fn render(&self, report: &ReportDescriptor) -> Result<PathBuf, RenderError> {
        content::check_row_shape(&report.table)?;

        let out_dir = &report.output_path;
        if !out_dir.as_os_str().is_empty() && !out_dir.is_dir() {
            return Err(RenderError::Config {
                path: out_dir.clone(),
            });
        }

        let path = report.output_file();
        debug!(
            "Rendering report with {} columns and {} rows to {}",
            report.table.column_count(),
            report.table.row_count(),
            path.display()
        );

        let doc = self.build_document(report)?;
        let file = fs::File::create(&path)?;
        if let Err(err) = doc.render(file) {
            warn!("Report rendering failed, removing partial {}", path.display());
            let _ = fs::remove_file(&path);
            return Err(RenderError::Backend(err));
        }

        info!(
            "Rendered report with {} rows to {}",
            report.table.row_count(),
            path.display()
        );
        Ok(path)
    }

    /// Assemble the document: page setup, header block, table, end marker
    fn build_document(&self, report: &ReportDescriptor) -> Result<genpdf::Document, RenderError> {
        let family = self.style.font.load()?;
        let mut doc = genpdf::Document::new(family);

        let title = if report.report_title.is_empty() {
            report.output_file_name.clone()
        } else {
            report.report_title.clone()
        };
        doc.set_title(title);

        let (page_width, page_height) = self.style.page_dimensions_mm();
        doc.set_paper_size(Size::new(page_width, page_height));

        let mut decorator = SimplePageDecorator::new();
        let margin = self.style.margin_mm;
        decorator.set_margins(Margins::trbl(margin, margin, margin, margin));
        doc.set_page_decorator(decorator);

        self.push_header_block(&mut doc, report);
        doc.push(Break::new(self.style.header_gap_lines));

        if report.table.column_count() == 0 {
            warn!("Report table defines no columns; skipping the table block");
        } else {
            let table = self.build_table(report)?;
            let side_padding = self.style.table_side_padding_mm(page_width);
            doc.push(table.padded(Margins::trbl(0.0, side_padding, 0.0, side_padding)));
        }

        doc.push(Break::new(self.style.table_gap_lines));
        self.push_end_marker(&mut doc);
        Ok(doc)
    }

    /// Centered header block, one paragraph per line
    fn push_header_block(&self, doc: &mut genpdf::Document, report: &ReportDescriptor) {
        let today = Local::now().date_naive();
        let header = content::compose_header(report, today, &self.style.date_format);
        let style = Style::new().with_font_size(self.style.header_font_size);
        for line in header.lines() {
            if line.is_empty() {
                doc.push(Break::new(1.0));
            } else {
                doc.push(
                    Paragraph::new(line)
                        .aligned(Alignment::Center)
                        .styled(style.clone()),
                );
            }
        }
    }

    /// Data table with the configured header-row treatment
    fn build_table(&self, report: &ReportDescriptor) -> Result<RepeatingHeaderTable, RenderError> {
        let (labels, rows) = content::render_table(report, &self.style);

        let mut table = RepeatingHeaderTable::new(
            report.table.column_count(),
            self.style.cell_frames,
            self.style.repeat_header,
        );
        let header_style = Style::new().bold().with_font_size(self.style.body_font_size);
        table.set_header(labels, header_style);

        let body_style = Style::new().with_font_size(self.style.body_font_size);
        for row in rows {
            table
                .push_row(row, body_style.clone())
                .map_err(RenderError::Backend)?;
        }
        Ok(table)
    }

    /// Mandatory terminal marker, rendered even for zero-row tables
    fn push_end_marker(&self, doc: &mut genpdf::Document) {
        let style = Style::new().bold().with_font_size(self.style.header_font_size);
        doc.push(
            Paragraph::new(self.style.end_marker.as_str())
                .aligned(Alignment::Center)
                .styled(style),
        );
    }
}
