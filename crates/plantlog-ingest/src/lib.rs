#![deny(unsafe_code)]

//! CSV ingestion into a typed grid.
//!
//! The pipeline core works on a grid of [`CellValue`]s whose kind was
//! decided once at read time. Binary spreadsheet formats are decoded by
//! external collaborators; this crate covers the CSV path the CLI uses.

use std::path::Path;

use plantlog_model::CellValue;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Read a CSV file into a raw grid, one `Vec<CellValue>` per record.
///
/// No row is treated as a header here; header detection belongs to the
/// pipeline. Rows may be ragged.
pub fn read_grid_from_path(path: &Path) -> Result<Vec<Vec<CellValue>>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut grid = Vec::new();
    for record in reader.records() {
        let record = record?;
        grid.push(record.iter().map(infer_cell).collect());
    }
    Ok(grid)
}

/// Decide a cell's kind from its raw text.
///
/// Blank text becomes [`CellValue::Null`], `true`/`false` (any case)
/// become booleans, anything that parses as a float becomes a number, and
/// the rest stays text. Text is kept verbatim apart from outer whitespace.
pub fn infer_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Null;
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return CellValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return CellValue::Bool(false);
    }
    if let Ok(number) = trimmed.parse::<f64>() {
        return CellValue::Number(number);
    }
    CellValue::Text(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_inference_covers_all_kinds() {
        assert_eq!(infer_cell(""), CellValue::Null);
        assert_eq!(infer_cell("   "), CellValue::Null);
        assert_eq!(infer_cell("TRUE"), CellValue::Bool(true));
        assert_eq!(infer_cell("false"), CellValue::Bool(false));
        assert_eq!(infer_cell("120.5"), CellValue::Number(120.5));
        assert_eq!(infer_cell(" -3 "), CellValue::Number(-3.0));
        assert_eq!(
            infer_cell("Coal Used (MT)"),
            CellValue::Text("Coal Used (MT)".to_string())
        );
    }

    #[test]
    fn reads_a_ragged_grid_with_typed_cells() {
        let dir = std::env::temp_dir().join(format!(
            "plantlog-ingest-test-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let csv_path = dir.join("daily.csv");
        std::fs::write(&csv_path, "Date,Coal Used,Steam\n2024-01-01,120.5,\n").unwrap();

        let grid = read_grid_from_path(&csv_path).unwrap();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0][1], CellValue::Text("Coal Used".to_string()));
        assert_eq!(grid[1][1], CellValue::Number(120.5));
        assert_eq!(grid[1][2], CellValue::Null);
    }
}
