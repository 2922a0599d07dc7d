//! Custom layout elements
//!
//! `genpdf`'s `TableLayout` renders each row exactly once, so a table that
//! breaks across pages continues without its header row. The wrapper here
//! keeps the header cells as plain strings, rebuilds a one-row layout for
//! them on every render pass, and lets the body layout continue underneath.
//! Measurement and pagination stay with the library.

use genpdf::elements::{FrameCellDecorator, Paragraph, TableLayout};
use genpdf::error::Error;
use genpdf::style::Style;
use genpdf::{Alignment, Context, Element, Position, RenderResult, Size, render};

/// Data table whose header row is re-emitted at the top of every page the
/// body spans.
pub struct RepeatingHeaderTable {
    columns: usize,
    frames: bool,
    repeat: bool,
    header_cells: Vec<String>,
    header_style: Style,
    body: TableLayout,
    header_rendered: bool,
}

impl RepeatingHeaderTable {
    /// Create a table with `columns` equally weighted columns.
    ///
    /// `frames` draws cell borders; `repeat` re-emits the header row after
    /// page breaks (when false the header renders once, like a plain
    /// `TableLayout`).
    pub fn new(columns: usize, frames: bool, repeat: bool) -> Self {
        let mut body = TableLayout::new(vec![1; columns]);
        body.set_cell_decorator(FrameCellDecorator::new(frames, frames, frames));
        Self {
            columns,
            frames,
            repeat,
            header_cells: Vec::new(),
            header_style: Style::new(),
            body,
            header_rendered: false,
        }
    }

    /// Set the header row; one centered cell per column
    pub fn set_header(&mut self, cells: Vec<String>, style: Style) {
        self.header_cells = cells;
        self.header_style = style;
    }

    /// Append a body row of left-aligned cells
    pub fn push_row(&mut self, cells: Vec<String>, style: Style) -> Result<(), Error> {
        let mut row = self.body.row();
        for cell in cells {
            row = row.element(Paragraph::new(cell).styled(style.clone()));
        }
        row.push()
    }

    /// Fresh single-row layout for the header cells
    fn header_layout(&self) -> Result<TableLayout, Error> {
        let mut table = TableLayout::new(vec![1; self.columns]);
        table.set_cell_decorator(FrameCellDecorator::new(self.frames, self.frames, false));
        let mut row = table.row();
        for cell in &self.header_cells {
            row = row.element(
                Paragraph::new(cell.as_str())
                    .aligned(Alignment::Center)
                    .styled(self.header_style.clone()),
            );
        }
        row.push()?;
        Ok(table)
    }
}

impl Element for RepeatingHeaderTable {
    fn render(
        &mut self,
        context: &Context,
        mut area: render::Area<'_>,
        style: Style,
    ) -> Result<RenderResult, Error> {
        let mut size = Size::new(0.0, 0.0);
        if !self.header_cells.is_empty() && (self.repeat || !self.header_rendered) {
            let mut header = self.header_layout()?;
            let header_result = header.render(context, area.clone(), style.clone())?;
            if header_result.has_more {
                // Not even the header row fits; retry on the next page.
                return Ok(RenderResult {
                    size,
                    has_more: true,
                });
            }
            self.header_rendered = true;
            area.add_offset(Position::new(0.0, header_result.size.height));
            size = header_result.size;
        }

        let body_result = self.body.render(context, area, style)?;
        let width = if body_result.size.width > size.width {
            body_result.size.width
        } else {
            size.width
        };
        Ok(RenderResult {
            size: Size::new(width, size.height + body_result.size.height),
            has_more: body_result.has_more,
        })
    }
}
