//! Parse-method tags emitted by the value cascade.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a raw cell was turned into a numeric value (or refused).
///
/// The serialized tags are stable identifiers consumed by downstream
/// reporting; renaming them is a breaking change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMethod {
    /// Cell was null, empty, or an N/A marker.
    NullValue,
    /// Native number taken as-is.
    NumericDirect,
    /// Native number in (1, 100] for an efficiency parameter, divided by 100.
    NumericDirectInferredPercentage,
    /// String-sourced number in (1, 100] for an efficiency parameter,
    /// divided by 100.
    NumericStringInferredPercentage,
    /// Boolean-like text accepted as 1.0.
    BooleanTrue,
    /// Boolean-like text accepted as 0.0.
    BooleanFalse,
    /// Boolean-like text refused for a numeric-only parameter.
    UnexpectedBoolean,
    /// Percent-signed string divided by 100.
    Percentage,
    /// Thousands separators stripped before parsing.
    NumericWithCommas,
    /// Plain string parsed as a float.
    NumericDirectString,
    /// First numeric substring pulled out of free text.
    ExtractedNumber,
    /// Nothing numeric could be derived.
    Unparseable,
}

impl ParseMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseMethod::NullValue => "null_value",
            ParseMethod::NumericDirect => "numeric_direct",
            ParseMethod::NumericDirectInferredPercentage => "numeric_direct_inferred_percentage",
            ParseMethod::NumericStringInferredPercentage => "numeric_string_inferred_percentage",
            ParseMethod::BooleanTrue => "boolean_true",
            ParseMethod::BooleanFalse => "boolean_false",
            ParseMethod::UnexpectedBoolean => "unexpected_boolean",
            ParseMethod::Percentage => "percentage",
            ParseMethod::NumericWithCommas => "numeric_with_commas",
            ParseMethod::NumericDirectString => "numeric_direct_string",
            ParseMethod::ExtractedNumber => "extracted_number",
            ParseMethod::Unparseable => "unparseable",
        }
    }

    /// All methods, for exhaustive property tests.
    pub const ALL: [ParseMethod; 12] = [
        ParseMethod::NullValue,
        ParseMethod::NumericDirect,
        ParseMethod::NumericDirectInferredPercentage,
        ParseMethod::NumericStringInferredPercentage,
        ParseMethod::BooleanTrue,
        ParseMethod::BooleanFalse,
        ParseMethod::UnexpectedBoolean,
        ParseMethod::Percentage,
        ParseMethod::NumericWithCommas,
        ParseMethod::NumericDirectString,
        ParseMethod::ExtractedNumber,
        ParseMethod::Unparseable,
    ];
}

impl fmt::Display for ParseMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_tags_match_display() {
        for method in ParseMethod::ALL {
            let json = serde_json::to_string(&method).unwrap();
            assert_eq!(json, format!("\"{method}\""));
        }
    }
}
