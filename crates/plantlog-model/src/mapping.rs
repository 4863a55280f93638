//! Per-column mapping decisions and per-cell parse results.

use serde::{Deserialize, Serialize};

use crate::{CellValue, Confidence};

/// The mapping decision for one column header.
///
/// Produced once per column and immutable thereafter; the pipeline keys
/// these by column index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingResult {
    /// Original header text from the detected label row.
    pub header: String,
    /// Canonical parameter id, or `None` when the column is not a
    /// measurable quantity.
    pub param_name: Option<String>,
    /// Canonical asset id when the header names or implies one.
    pub asset_name: Option<String>,
    pub confidence: Confidence,
    /// Human-readable explanation of the mapping decision.
    pub reason: String,
}

impl MappingResult {
    /// A decision for a column that carries no parameter.
    pub fn unmapped(header: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            param_name: None,
            asset_name: None,
            confidence: Confidence::Low,
            reason: reason.into(),
        }
    }

    pub fn is_mapped(&self) -> bool {
        self.param_name.is_some()
    }
}

/// One parsed data cell from a mapped column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedCell {
    /// Zero-based row index in the raw grid.
    pub row: usize,
    /// Zero-based column index in the raw grid.
    pub col: usize,
    pub param_name: String,
    pub asset_name: Option<String>,
    /// The cell exactly as ingested.
    pub raw_value: CellValue,
    /// Numeric value after the parsing cascade, when one could be derived.
    pub parsed_value: Option<f64>,
    /// Final confidence after reconciling mapping, parse method and
    /// validation. Never higher than the column's mapping confidence.
    pub confidence: Confidence,
    pub notes: String,
}

/// A column whose header could not be mapped to any parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnmappedColumn {
    pub col: usize,
    pub header: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_has_low_confidence_and_no_parameter() {
        let result = MappingResult::unmapped("Notes", "Non-parameter column detected: 'notes'");
        assert!(!result.is_mapped());
        assert_eq!(result.confidence, Confidence::Low);
        assert!(result.asset_name.is_none());
    }
}
