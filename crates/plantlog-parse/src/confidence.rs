//! Downgrade-only reconciliation of mapping, parse and validation signals.

use plantlog_model::Confidence;

use crate::method::ParseMethod;

/// Merge mapping confidence, parse method and validation outcome into the
/// final per-cell confidence.
///
/// Every step is a downgrade (`min`), so the result can never exceed the
/// column's mapping confidence:
/// - extracted numbers cap at medium;
/// - refused booleans drop to low;
/// - missing values from null or unparseable cells cap at medium;
/// - validation failure is terminal low.
pub fn reconcile_confidence(
    mapping: Confidence,
    method: ParseMethod,
    parsed: Option<f64>,
    is_valid: bool,
) -> Confidence {
    let mut confidence = mapping;
    if method == ParseMethod::ExtractedNumber {
        confidence = confidence.min(Confidence::Medium);
    }
    if method == ParseMethod::UnexpectedBoolean {
        confidence = confidence.min(Confidence::Low);
    }
    if parsed.is_none()
        && matches!(method, ParseMethod::NullValue | ParseMethod::Unparseable)
    {
        confidence = confidence.min(Confidence::Medium);
    }
    if !is_valid {
        confidence = Confidence::Low;
    }
    confidence
}

/// Notes string attached to each parsed cell.
pub fn cell_notes(method: ParseMethod, is_valid: bool) -> String {
    format!("parse method: {method}; valid: {is_valid}")
}

#[cfg(test)]
mod tests {
    use proptest::prelude::{Just, prop_assert, prop_oneof, proptest};
    use proptest::sample::select;

    use super::*;

    #[test]
    fn clean_parse_keeps_mapping_confidence() {
        assert_eq!(
            reconcile_confidence(Confidence::High, ParseMethod::NumericDirect, Some(1.0), true),
            Confidence::High
        );
    }

    #[test]
    fn extracted_number_caps_high_at_medium() {
        assert_eq!(
            reconcile_confidence(
                Confidence::High,
                ParseMethod::ExtractedNumber,
                Some(120.0),
                true
            ),
            Confidence::Medium
        );
        // A low mapping stays low.
        assert_eq!(
            reconcile_confidence(
                Confidence::Low,
                ParseMethod::ExtractedNumber,
                Some(120.0),
                true
            ),
            Confidence::Low
        );
    }

    #[test]
    fn unexpected_boolean_is_terminal_low() {
        assert_eq!(
            reconcile_confidence(
                Confidence::High,
                ParseMethod::UnexpectedBoolean,
                None,
                true
            ),
            Confidence::Low
        );
    }

    #[test]
    fn missing_values_cap_at_medium() {
        assert_eq!(
            reconcile_confidence(Confidence::High, ParseMethod::NullValue, None, true),
            Confidence::Medium
        );
        assert_eq!(
            reconcile_confidence(Confidence::Low, ParseMethod::Unparseable, None, true),
            Confidence::Low
        );
    }

    #[test]
    fn validation_failure_overrides_everything() {
        assert_eq!(
            reconcile_confidence(
                Confidence::High,
                ParseMethod::NumericDirect,
                Some(150.0),
                false
            ),
            Confidence::Low
        );
    }

    #[test]
    fn notes_record_method_and_validity() {
        assert_eq!(
            cell_notes(ParseMethod::NumericWithCommas, true),
            "parse method: numeric_with_commas; valid: true"
        );
    }

    proptest! {
        #[test]
        fn final_confidence_never_exceeds_mapping_confidence(
            mapping in prop_oneof![
                Just(Confidence::Low),
                Just(Confidence::Medium),
                Just(Confidence::High),
            ],
            method in select(ParseMethod::ALL.as_slice()),
            parsed in prop_oneof![Just(None), Just(Some(42.0)), Just(Some(-1.0))],
            is_valid in proptest::bool::ANY,
        ) {
            let result = reconcile_confidence(mapping, method, parsed, is_valid);
            prop_assert!(result <= mapping);
        }
    }
}
