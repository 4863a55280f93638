//! Header row detection.

use plantlog_model::CellValue;

/// Default number of leading rows inspected for a label row.
pub const DEFAULT_SCAN_LIMIT: usize = 5;

/// Locate the label row in a raw grid.
///
/// Scans the first `min(limit, rows)` rows and returns the first whose
/// fraction of label-like cells is at least 0.6, where a label-like cell is
/// a non-null string longer than two characters after trimming. The
/// fraction's denominator is the widest row in the grid, so sparse title
/// rows above the real header do not qualify. Falls back to row 0.
pub fn detect_header_row(grid: &[Vec<CellValue>], limit: usize) -> usize {
    let width = grid.iter().map(Vec::len).max().unwrap_or(0);
    if width == 0 {
        return 0;
    }

    for (row_idx, row) in grid.iter().take(limit.min(grid.len())).enumerate() {
        let label_count = row
            .iter()
            .filter(|cell| match cell {
                CellValue::Text(s) => s.trim().len() > 2,
                _ => false,
            })
            .count();
        if label_count as f64 >= width as f64 * 0.6 {
            return row_idx;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_row(cells: &[&str]) -> Vec<CellValue> {
        cells.iter().map(|c| CellValue::from(*c)).collect()
    }

    #[test]
    fn finds_label_row_below_title_and_blank_rows() {
        let grid = vec![
            text_row(&["Report Title"]),
            Vec::new(),
            text_row(&["Date", "Coal Consumption", "Power Generation"]),
        ];
        assert_eq!(detect_header_row(&grid, DEFAULT_SCAN_LIMIT), 2);
    }

    #[test]
    fn first_row_wins_when_it_qualifies() {
        let grid = vec![
            text_row(&["Date", "Coal Used", "Steam"]),
            vec![
                CellValue::from("2024-01-01"),
                CellValue::Number(120.0),
                CellValue::Number(45.0),
            ],
        ];
        assert_eq!(detect_header_row(&grid, DEFAULT_SCAN_LIMIT), 0);
    }

    #[test]
    fn numeric_rows_do_not_qualify() {
        let grid = vec![
            vec![CellValue::Number(1.0), CellValue::Number(2.0)],
            text_row(&["Coal Used", "Steam Generated"]),
        ];
        assert_eq!(detect_header_row(&grid, DEFAULT_SCAN_LIMIT), 1);
    }

    #[test]
    fn short_strings_do_not_count_as_labels() {
        // "No" and "Id" are too short to look like labels.
        let grid = vec![
            text_row(&["No", "Id", "x"]),
            text_row(&["Coal Used", "Steam Generated", "Power Output"]),
        ];
        assert_eq!(detect_header_row(&grid, DEFAULT_SCAN_LIMIT), 1);
    }

    #[test]
    fn defaults_to_zero_when_nothing_qualifies() {
        let grid = vec![
            vec![CellValue::Number(1.0), CellValue::Number(2.0)],
            vec![CellValue::Number(3.0), CellValue::Number(4.0)],
        ];
        assert_eq!(detect_header_row(&grid, DEFAULT_SCAN_LIMIT), 0);
    }

    #[test]
    fn scan_limit_is_honored() {
        let grid = vec![
            Vec::new(),
            Vec::new(),
            text_row(&["Coal Used", "Steam Generated"]),
        ];
        assert_eq!(detect_header_row(&grid, 2), 0);
        assert_eq!(detect_header_row(&grid, 3), 2);
    }

    #[test]
    fn empty_grid_defaults_to_zero() {
        assert_eq!(detect_header_row(&[], DEFAULT_SCAN_LIMIT), 0);
    }
}
