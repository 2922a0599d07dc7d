//! Cell value model for the SDK

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single table cell value.
///
/// Cells are loosely typed: callers may hand over plain strings (the
/// minimal-compatible path, where every value is rendered via its display
/// string) or tag values explicitly so the renderer can format them without
/// reparsing. Date columns treat `Date` values directly and fall back to
/// parsing the display string of everything else.
///
/// # Example
///
/// ```rust
/// use report_rendering_sdk::models::CellValue;
///
/// let cell = CellValue::from("2021-03-01");
/// assert_eq!(cell.to_string(), "2021-03-01");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CellValue {
    /// Absent value, rendered as an empty cell
    Null,
    /// Boolean, rendered as `true`/`false`
    Bool(bool),
    /// Integer number
    Integer(i64),
    /// Floating-point number
    Float(f64),
    /// Free text (also the deserialization target for any string)
    Text(String),
    /// Calendar date; formats directly in date columns without reparsing
    Date(NaiveDate),
}

impl CellValue {
    /// Whether this cell carries no value
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Integer(n) => write!(f, "{}", n),
            CellValue::Float(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
            // ISO display keeps untyped round trips parseable by the
            // date-column heuristic.
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Integer(i64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::Date(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

impl From<serde_json::Value> for CellValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => CellValue::Null,
            serde_json::Value::Bool(b) => CellValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    CellValue::Integer(i)
                } else {
                    CellValue::Float(n.as_f64().unwrap_or_default())
                }
            }
            serde_json::Value::String(s) => CellValue::Text(s),
            // Arrays and objects have no tabular representation; keep their
            // JSON text so the cell still renders something inspectable.
            other => CellValue::Text(other.to_string()),
        }
    }
}
