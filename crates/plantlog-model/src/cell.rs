//! Typed cell representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single raw cell from the input grid.
///
/// The cell kind is decided once at ingestion; downstream code branches on
/// the variant instead of re-inspecting strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Number(f64),
    Bool(bool),
    Text(String),
}

impl CellValue {
    /// True for cells a spreadsheet author left blank.
    ///
    /// Whitespace-only text counts as blank; a numeric zero does not.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// True when the cell carries no usable header label.
    ///
    /// Mirrors spreadsheet-library falsiness: nulls, empty text, zero and
    /// `false` all yield a placeholder header.
    pub fn is_falsy(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Number(n) => *n == 0.0,
            CellValue::Bool(b) => !b,
            CellValue::Text(s) => s.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Bool(true) => f.write_str("TRUE"),
            CellValue::Bool(false) => f.write_str("FALSE"),
            CellValue::Text(s) => f.write_str(s),
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

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_cells() {
        assert!(CellValue::Null.is_blank());
        assert!(CellValue::Text("   ".into()).is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
        assert!(!CellValue::Text("x".into()).is_blank());
    }

    #[test]
    fn falsy_cells() {
        assert!(CellValue::Null.is_falsy());
        assert!(CellValue::Number(0.0).is_falsy());
        assert!(CellValue::Bool(false).is_falsy());
        assert!(!CellValue::Text("0".into()).is_falsy());
    }

    #[test]
    fn serializes_as_plain_json_scalars() {
        assert_eq!(serde_json::to_string(&CellValue::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&CellValue::Number(1.5)).unwrap(), "1.5");
        assert_eq!(
            serde_json::to_string(&CellValue::Text("ok".into())).unwrap(),
            "\"ok\""
        );
    }
}
