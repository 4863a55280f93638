//! Aggregate parse report returned to downstream consumers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ParsedCell, UnmappedColumn};

/// Overall outcome of a parse request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseStatus {
    Success,
    Error,
}

/// Summary metadata for a parsed sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseMetadata {
    pub sheet_name: String,
    pub total_rows: usize,
    /// Rows below the header row, including skipped empty ones.
    pub data_rows: usize,
    pub total_columns: usize,
    pub mapped_columns: usize,
    pub unmapped_columns: usize,
    /// True when columns referenced more than one distinct asset.
    pub multi_asset_detected: bool,
}

/// The structured response for one parsed grid.
///
/// `warnings` is deduplicated by exact text with first-occurrence order
/// preserved. `parameters` maps each mapped parameter to the sorted set of
/// asset names it was reported against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseReport {
    pub status: ParseStatus,
    pub header_row: Option<usize>,
    pub parsed_data: Vec<ParsedCell>,
    pub unmapped_columns: Vec<UnmappedColumn>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    /// Parameter id to sorted unique asset names.
    pub parameters: BTreeMap<String, Vec<String>>,
    /// Sorted unique asset names seen across all mapped columns.
    pub detected_assets: Vec<String>,
    /// Parameter id to registry unit.
    pub units: BTreeMap<String, String>,
    pub metadata: ParseMetadata,
}

impl ParseReport {
    /// A structural-failure response carrying no partial results.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ParseStatus::Error,
            header_row: None,
            parsed_data: Vec::new(),
            unmapped_columns: Vec::new(),
            warnings: Vec::new(),
            errors: vec![message.into()],
            parameters: BTreeMap::new(),
            detected_assets: Vec::new(),
            units: BTreeMap::new(),
            metadata: ParseMetadata::default(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ParseStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_report_has_no_partial_results() {
        let report = ParseReport::error("File is empty");
        assert_eq!(report.status, ParseStatus::Error);
        assert!(report.parsed_data.is_empty());
        assert!(report.header_row.is_none());
        assert_eq!(report.errors, vec!["File is empty".to_string()]);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ParseStatus::Success).unwrap(),
            "\"success\""
        );
    }
}
