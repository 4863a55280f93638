//! Non-parameter column classification.

/// Terms that mark a column as structural rather than a measurable
/// quantity. Checked in this order; the first hit is reported.
const NON_PARAMETER_TERMS: &[&str] = &[
    "date",
    "time",
    "timestamp",
    "day",
    "month",
    "year",
    "id",
    "comment",
    "notes",
    "remarks",
    "description",
];

/// Classify a header as a non-parameter column.
///
/// Returns the reason when the column is structurally present but not a
/// measurable quantity (dates, ids, notes, generated placeholders), or
/// `None` when the header may name a parameter.
pub fn non_parameter_reason(header: &str) -> Option<String> {
    if header.is_empty() {
        return Some("Empty header".to_string());
    }

    let lowered = header.to_lowercase();
    for term in NON_PARAMETER_TERMS {
        if lowered.contains(term) {
            return Some(format!("Non-parameter column detected: '{term}'"));
        }
    }

    let trimmed = lowered.trim();
    if trimmed.starts_with("column_") || trimmed.starts_with("unnamed") {
        return Some("Unnamed or generic column".to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_header_is_flagged() {
        assert_eq!(non_parameter_reason(""), Some("Empty header".to_string()));
    }

    #[test]
    fn blocked_terms_match_as_substrings() {
        assert_eq!(
            non_parameter_reason("Reading Date"),
            Some("Non-parameter column detected: 'date'".to_string())
        );
        assert_eq!(
            non_parameter_reason("OPERATOR COMMENTS"),
            Some("Non-parameter column detected: 'comment'".to_string())
        );
        // "holiday" contains "day"
        assert_eq!(
            non_parameter_reason("Holiday"),
            Some("Non-parameter column detected: 'day'".to_string())
        );
    }

    #[test]
    fn first_matching_term_wins() {
        // Contains both "time" and "timestamp"; "time" is checked first.
        assert_eq!(
            non_parameter_reason("Timestamp"),
            Some("Non-parameter column detected: 'time'".to_string())
        );
    }

    #[test]
    fn generated_placeholders_are_flagged() {
        assert_eq!(
            non_parameter_reason("Column_3"),
            Some("Unnamed or generic column".to_string())
        );
        assert_eq!(
            non_parameter_reason("Unnamed: 5"),
            Some("Unnamed or generic column".to_string())
        );
    }

    #[test]
    fn parameter_headers_pass() {
        assert_eq!(non_parameter_reason("Coal Used (MT)"), None);
        assert_eq!(non_parameter_reason("Steam Generation"), None);
    }
}
