//! The parse pipeline.

use plantlog_map::{HeaderMapper, MappingOracle, detect_header_row};
use plantlog_model::{
    CellValue, ParseMetadata, ParseReport, ParseStatus, ParsedCell, UnmappedColumn,
};
use plantlog_parse::{cell_notes, parse_value, reconcile_confidence, validate_value};
use plantlog_registry::Registry;

use crate::duplicates::duplicate_warnings;
use crate::report::{dedup_warnings, detected_assets, parameter_assets, unit_map};

/// Default number of leading rows scanned for the header row.
const HEADER_SCAN_LIMIT: usize = 5;

/// Single-pass, synchronous parse pipeline over one raw grid.
///
/// Holds only shared references: the registry is immutable and one engine
/// can serve any number of concurrent parse requests.
pub struct ParseEngine<'a> {
    registry: &'a Registry,
    mapper: HeaderMapper<'a>,
}

impl<'a> ParseEngine<'a> {
    /// Engine using only the deterministic fallback mapper.
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            mapper: HeaderMapper::new(registry),
        }
    }

    /// Engine that consults a mapping oracle before the fallback.
    pub fn with_oracle(registry: &'a Registry, oracle: &'a dyn MappingOracle) -> Self {
        Self {
            registry,
            mapper: HeaderMapper::with_oracle(registry, oracle),
        }
    }

    /// Parse a raw grid into the structured report.
    ///
    /// Structural failures (empty grid) return an error-status report with
    /// no partial results. Column- and cell-level problems degrade locally:
    /// unmappable headers become [`UnmappedColumn`]s and bad cells keep
    /// reduced confidence, while the rest of the grid is still processed.
    pub fn parse_grid(&self, grid: &[Vec<CellValue>], sheet_name: &str) -> ParseReport {
        if grid.is_empty() {
            return ParseReport::error("File is empty");
        }

        let header_row = detect_header_row(grid, HEADER_SCAN_LIMIT);
        let headers = header_labels(&grid[header_row]);
        tracing::info!(
            sheet_name,
            header_row,
            columns = headers.len(),
            rows = grid.len(),
            "parsing grid"
        );

        let mut warnings = Vec::new();
        warnings.push(format!("Detected header row at index {header_row}"));
        if header_row > 0 {
            warnings.push(format!(
                "Rows 0-{} appear to be title/metadata, skipped",
                header_row - 1
            ));
        }

        let mappings = self.mapper.map_headers(&headers);

        let unmapped_columns: Vec<UnmappedColumn> = mappings
            .iter()
            .filter(|(_, mapping)| !mapping.is_mapped())
            .map(|(&col, mapping)| UnmappedColumn {
                col,
                header: mapping.header.clone(),
                reason: mapping.reason.clone(),
            })
            .collect();
        for unmapped in &unmapped_columns {
            tracing::debug!(col = unmapped.col, header = %unmapped.header, reason = %unmapped.reason, "column not mapped");
        }

        let mut parsed_data = Vec::new();
        for (row_idx, row) in grid.iter().enumerate().skip(header_row + 1) {
            if row.iter().all(CellValue::is_blank) {
                warnings.push(format!("Row {row_idx} is empty, skipped"));
                continue;
            }

            for (col_idx, cell) in row.iter().enumerate() {
                // Cells beyond the header width have no mapping to attach to.
                if col_idx >= headers.len() {
                    break;
                }
                let mapping = &mappings[&col_idx];
                let Some(param_name) = &mapping.param_name else {
                    continue;
                };

                let (parsed_value, method) = parse_value(cell, param_name);
                let validity = validate_value(parsed_value, param_name);
                let confidence =
                    reconcile_confidence(mapping.confidence, method, parsed_value, validity.is_valid);

                parsed_data.push(ParsedCell {
                    row: row_idx,
                    col: col_idx,
                    param_name: param_name.clone(),
                    asset_name: mapping.asset_name.clone(),
                    raw_value: cell.clone(),
                    parsed_value,
                    confidence,
                    notes: cell_notes(method, validity.is_valid),
                });

                if let Some(warning) = validity.warning {
                    warnings.push(format!("Row {row_idx}, Col {col_idx}: {warning}"));
                }
            }
        }

        warnings.extend(duplicate_warnings(&mappings));

        let parameters = parameter_assets(&mappings);
        let assets = detected_assets(&mappings);
        let units = unit_map(&mappings, self.registry);
        let mapped_count = mappings.values().filter(|m| m.is_mapped()).count();

        let metadata = ParseMetadata {
            sheet_name: sheet_name.to_string(),
            total_rows: grid.len(),
            data_rows: grid.len() - header_row - 1,
            total_columns: headers.len(),
            mapped_columns: mapped_count,
            unmapped_columns: unmapped_columns.len(),
            multi_asset_detected: assets.len() > 1,
        };
        tracing::info!(
            mapped = mapped_count,
            unmapped = unmapped_columns.len(),
            cells = parsed_data.len(),
            "grid parsed"
        );

        ParseReport {
            status: ParseStatus::Success,
            header_row: Some(header_row),
            parsed_data,
            unmapped_columns,
            warnings: dedup_warnings(warnings),
            errors: Vec::new(),
            parameters,
            detected_assets: assets,
            units,
            metadata,
        }
    }
}

/// Header labels from the detected label row.
///
/// Cells with no usable label get a `Column_<i>` placeholder, which the
/// non-parameter classifier then flags as generic.
fn header_labels(row: &[CellValue]) -> Vec<String> {
    row.iter()
        .enumerate()
        .map(|(idx, cell)| {
            if cell.is_falsy() {
                format!("Column_{idx}")
            } else {
                cell.to_string().trim().to_string()
            }
        })
        .collect()
}
