//! Tabular data model for the SDK

use super::cell::CellValue;
use serde::{Deserialize, Serialize};

/// In-memory table: an ordered set of named columns plus ordered rows of
/// cell values aligned by column position.
///
/// Column headers are taken verbatim for the report's header row, so name
/// them the way they should read on the document. Rows are not validated on
/// insertion; the renderer checks that every row's length matches the
/// column count before any output is produced.
///
/// # Example
///
/// ```rust
/// use report_rendering_sdk::models::TableData;
///
/// let mut table = TableData::new(vec!["Name".to_string(), "JoinDate".to_string()]);
/// table.push_row(vec!["Alice".into(), "2021-03-01".into()]);
/// assert_eq!(table.column_count(), 2);
/// assert_eq!(table.row_count(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TableData {
    /// Column names, in display order
    pub columns: Vec<String>,
    /// Data rows; each row holds one cell per column
    #[serde(default)]
    pub rows: Vec<Vec<CellValue>>,
}

impl TableData {
    /// Create an empty table with the given column names
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Create a table with columns and rows in one step
    pub fn with_rows(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { columns, rows }
    }

    /// Append a data row
    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
