//! Row-to-cell rendering policy
//!
//! The content layer turns a report descriptor into the exact strings that
//! appear on the document: the composed header block, the header-row
//! labels, every body cell (with date-column detection and fallback), and
//! the end-of-record marker. It is deliberately free of PDF types so the
//! policy is testable without rendering anything.

use super::RenderError;
use super::style::{
    ACCEPTED_DATE_FORMATS, ACCEPTED_DATETIME_FORMATS, ColumnNameDisplay, RenderStyle,
};
use crate::models::{CellValue, ReportDescriptor, TableData};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::collections::BTreeSet;

/// Verify that every row's length matches the column count.
///
/// Runs before any output file is created so a malformed table never
/// leaves a partial document behind.
pub fn check_row_shape(table: &TableData) -> Result<(), RenderError> {
    let expected = table.column_count();
    for (row, cells) in table.rows.iter().enumerate() {
        if cells.len() != expected {
            return Err(RenderError::DataShape {
                row,
                expected,
                found: cells.len(),
            });
        }
    }
    Ok(())
}

/// Compose the header block text into a fresh string.
///
/// Order: header text, then the report title (when present) on the next
/// line, then a blank line and the `Date of Report` stamp (when enabled).
/// The descriptor is never written to, so repeated renders cannot
/// accumulate date lines.
pub fn compose_header(report: &ReportDescriptor, today: NaiveDate, date_format: &str) -> String {
    let mut header = report.header_text.clone();
    if !report.report_title.is_empty() {
        header.push('\n');
        header.push_str(&report.report_title);
    }
    if report.use_report_date {
        header.push_str("\n\nDate of Report: ");
        header.push_str(&today.format(date_format).to_string());
    }
    header
}

/// Best-effort parse of a cell's display string as a calendar date.
///
/// Tries the accepted date formats, then the accepted date-time formats
/// (time discarded), then RFC 3339. Returns `None` when nothing matches;
/// the caller falls back to the raw text.
pub fn parse_cell_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    for format in ACCEPTED_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }
    for format in ACCEPTED_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime.date());
        }
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.date_naive());
    }
    None
}

/// Render one cell to its display string.
///
/// Cells outside date columns pass through unchanged, even when their text
/// happens to look like a date. Inside date columns, tagged dates format
/// directly and anything else is reparsed opportunistically.
pub fn format_cell(value: &CellValue, date_column: bool, date_format: &str) -> String {
    if !date_column {
        return value.to_string();
    }
    match value {
        CellValue::Date(date) => date.format(date_format).to_string(),
        other => {
            let text = other.to_string();
            match parse_cell_date(&text) {
                Some(date) => date.format(date_format).to_string(),
                None => text,
            }
        }
    }
}

/// Header-row labels with the configured column-name display applied
pub fn header_labels(table: &TableData, display: ColumnNameDisplay) -> Vec<String> {
    table.columns.iter().map(|name| display.apply(name)).collect()
}

/// Render all body rows to display strings, date columns applied
pub fn render_rows(
    table: &TableData,
    date_columns: &BTreeSet<usize>,
    date_format: &str,
) -> Vec<Vec<String>> {
    table
        .rows
        .iter()
        .map(|cells| {
            cells
                .iter()
                .enumerate()
                .map(|(i, value)| format_cell(value, date_columns.contains(&i), date_format))
                .collect()
        })
        .collect()
}

/// Render the whole table (header labels plus body rows) per the style
pub fn render_table(report: &ReportDescriptor, style: &RenderStyle) -> (Vec<String>, Vec<Vec<String>>) {
    (
        header_labels(&report.table, style.column_names),
        render_rows(&report.table, &report.date_columns, &style.date_format),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TableData;

    fn descriptor(table: TableData) -> ReportDescriptor {
        ReportDescriptor::new("/out", "report.pdf", table)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_cell_date("2021-03-01"), Some(date(2021, 3, 1)));
    }

    #[test]
    fn test_parse_us_date() {
        assert_eq!(parse_cell_date("3/1/2021"), Some(date(2021, 3, 1)));
        assert_eq!(parse_cell_date("03/01/2021"), Some(date(2021, 3, 1)));
    }

    #[test]
    fn test_parse_datetime_and_rfc3339() {
        assert_eq!(
            parse_cell_date("2021-03-01 13:45:00"),
            Some(date(2021, 3, 1))
        );
        assert_eq!(
            parse_cell_date("2021-03-01T13:45:00"),
            Some(date(2021, 3, 1))
        );
        assert_eq!(
            parse_cell_date("2021-03-01T13:45:00+02:00"),
            Some(date(2021, 3, 1))
        );
    }

    #[test]
    fn test_parse_rejects_non_dates() {
        assert_eq!(parse_cell_date("not-a-date"), None);
        assert_eq!(parse_cell_date(""), None);
        assert_eq!(parse_cell_date("   "), None);
        assert_eq!(parse_cell_date("2021-13-40"), None);
    }

    #[test]
    fn test_format_cell_outside_date_column() {
        // Date-looking text in a non-date column must pass through.
        let value = CellValue::from("2021-03-01");
        assert_eq!(format_cell(&value, false, "%-m/%-d/%Y"), "2021-03-01");
    }

    #[test]
    fn test_format_cell_date_column_parses() {
        let value = CellValue::from("2021-03-01");
        assert_eq!(format_cell(&value, true, "%-m/%-d/%Y"), "3/1/2021");
    }

    #[test]
    fn test_format_cell_date_column_fallback() {
        let value = CellValue::from("not-a-date");
        assert_eq!(format_cell(&value, true, "%-m/%-d/%Y"), "not-a-date");
    }

    #[test]
    fn test_format_cell_tagged_date() {
        let value = CellValue::Date(date(2021, 3, 1));
        assert_eq!(format_cell(&value, true, "%-m/%-d/%Y"), "3/1/2021");
        // Outside a date column, tagged dates still display as ISO text.
        assert_eq!(format_cell(&value, false, "%-m/%-d/%Y"), "2021-03-01");
    }

    #[test]
    fn test_compose_header_plain() {
        let report = descriptor(TableData::default()).with_header_text("Monthly Summary");
        let header = compose_header(&report, date(2024, 7, 9), "%-m/%-d/%Y");
        assert_eq!(header, "Monthly Summary");
    }

    #[test]
    fn test_compose_header_with_report_date() {
        let report = descriptor(TableData::default())
            .with_header_text("Monthly Summary")
            .with_report_date(true);
        let header = compose_header(&report, date(2024, 7, 9), "%-m/%-d/%Y");
        assert_eq!(header, "Monthly Summary\n\nDate of Report: 7/9/2024");
    }

    #[test]
    fn test_compose_header_with_title() {
        let report = descriptor(TableData::default())
            .with_header_text("County Records Office")
            .with_report_title("Membership Roster")
            .with_report_date(true);
        let header = compose_header(&report, date(2024, 7, 9), "%-m/%-d/%Y");
        assert_eq!(
            header,
            "County Records Office\nMembership Roster\n\nDate of Report: 7/9/2024"
        );
    }

    #[test]
    fn test_compose_header_is_pure() {
        let report = descriptor(TableData::default())
            .with_header_text("Monthly Summary")
            .with_report_date(true);
        let first = compose_header(&report, date(2024, 7, 9), "%-m/%-d/%Y");
        let second = compose_header(&report, date(2024, 7, 9), "%-m/%-d/%Y");
        assert_eq!(first, second);
        assert_eq!(report.header_text, "Monthly Summary");
    }

    #[test]
    fn test_check_row_shape_ok() {
        let table = TableData::with_rows(
            vec!["a".to_string(), "b".to_string()],
            vec![vec!["1".into(), "2".into()]],
        );
        assert!(check_row_shape(&table).is_ok());
    }

    #[test]
    fn test_check_row_shape_reports_first_offender() {
        let table = TableData::with_rows(
            vec!["a".to_string(), "b".to_string()],
            vec![
                vec!["1".into(), "2".into()],
                vec!["1".into(), "2".into(), "3".into()],
            ],
        );
        let err = check_row_shape(&table).unwrap_err();
        match err {
            RenderError::DataShape {
                row,
                expected,
                found,
            } => {
                assert_eq!(row, 1);
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_render_rows_end_to_end_scenario() {
        let table = TableData::with_rows(
            vec!["Name".to_string(), "JoinDate".to_string()],
            vec![
                vec!["Alice".into(), "2021-03-01".into()],
                vec!["Bob".into(), "not-a-date".into()],
            ],
        );
        let report = descriptor(table).with_date_columns([1]);
        let rows = render_rows(&report.table, &report.date_columns, "%-m/%-d/%Y");
        assert_eq!(
            rows,
            vec![
                vec!["Alice".to_string(), "3/1/2021".to_string()],
                vec!["Bob".to_string(), "not-a-date".to_string()],
            ]
        );
    }

    #[test]
    fn test_out_of_range_date_columns_are_inert() {
        let table = TableData::with_rows(
            vec!["When".to_string()],
            vec![vec!["2021-03-01".into()]],
        );
        let report = descriptor(table).with_date_columns([5]);
        let rows = render_rows(&report.table, &report.date_columns, "%-m/%-d/%Y");
        assert_eq!(rows, vec![vec!["2021-03-01".to_string()]]);
    }

    #[test]
    fn test_header_labels_display_modes() {
        let table = TableData::new(vec!["Name".to_string(), "JoinDate".to_string()]);
        assert_eq!(
            header_labels(&table, ColumnNameDisplay::AsIs),
            vec!["Name", "JoinDate"]
        );
        assert_eq!(
            header_labels(&table, ColumnNameDisplay::Uppercase),
            vec!["NAME", "JOINDATE"]
        );
    }

    #[test]
    fn test_render_table_zero_rows() {
        let table = TableData::new(vec!["Name".to_string()]);
        let report = descriptor(table);
        let (labels, rows) = render_table(&report, &RenderStyle::default());
        assert_eq!(labels, vec!["Name"]);
        assert!(rows.is_empty());
    }
}
