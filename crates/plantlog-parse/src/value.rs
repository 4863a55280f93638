//! The multi-stage numeric parsing cascade.

use std::sync::LazyLock;

use plantlog_model::CellValue;
use regex::Regex;

use crate::method::ParseMethod;

/// Parameters that must be numeric; boolean-like text is refused for these.
/// Matched by substring against the lowercased parameter identity.
const NUMERIC_ONLY_PARAMS: &[&str] = &[
    "coal_consumption",
    "steam_generation",
    "power_generation",
    "efficiency",
];

static FIRST_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    // First signed decimal substring, e.g. "-12.5" out of "approx -12.5 MT".
    Regex::new(r"[-+]?\d*\.?\d+").unwrap_or_else(|error| unreachable!("static pattern: {error}"))
});

fn is_efficiency(param_name: &str) -> bool {
    param_name.to_lowercase().contains("efficiency")
}

fn is_numeric_only(param_name: &str) -> bool {
    let lowered = param_name.to_lowercase();
    NUMERIC_ONLY_PARAMS.iter().any(|p| lowered.contains(p))
}

/// Turn one raw cell into a numeric value, tagged with how it was derived.
///
/// The resolution order is fixed; the first applicable rule wins:
/// null markers, native numbers (with efficiency percent inference),
/// boolean-like text, percent strings, comma-grouped strings, plain float
/// strings, numeric-substring extraction, and finally `unparseable`.
/// Percent and comma parses fall through on failure rather than refusing.
pub fn parse_value(cell: &CellValue, param_name: &str) -> (Option<f64>, ParseMethod) {
    // 1. Null and N/A markers.
    match cell {
        CellValue::Null => return (None, ParseMethod::NullValue),
        CellValue::Text(s) if s.is_empty() || s == "N/A" || s == "NA" => {
            return (None, ParseMethod::NullValue);
        }
        _ => {}
    }

    // 2. Already numeric.
    if let CellValue::Number(value) = cell {
        let value = *value;
        if is_efficiency(param_name) && value > 1.0 && value <= 100.0 {
            return (
                Some(value / 100.0),
                ParseMethod::NumericDirectInferredPercentage,
            );
        }
        return (Some(value), ParseMethod::NumericDirect);
    }

    // 3. Stringify, trim, uppercase; handle boolean-like text.
    let value_str = cell.to_string().trim().to_uppercase();
    if ["YES", "TRUE", "Y", "1"].contains(&value_str.as_str()) {
        if is_numeric_only(param_name) {
            return (None, ParseMethod::UnexpectedBoolean);
        }
        return (Some(1.0), ParseMethod::BooleanTrue);
    }
    if ["NO", "FALSE", "N", "0"].contains(&value_str.as_str()) {
        if is_numeric_only(param_name) {
            return (None, ParseMethod::UnexpectedBoolean);
        }
        return (Some(0.0), ParseMethod::BooleanFalse);
    }

    // 4. Percent strings.
    if value_str.contains('%') {
        if let Ok(value) = value_str.replace('%', "").trim().parse::<f64>() {
            return (Some(value / 100.0), ParseMethod::Percentage);
        }
    }

    // 5. Thousands separators.
    if value_str.contains(',') {
        if let Ok(value) = value_str.replace(',', "").trim().parse::<f64>() {
            return (Some(value), ParseMethod::NumericWithCommas);
        }
    }

    // 6. Plain float.
    if let Ok(value) = value_str.parse::<f64>() {
        if is_efficiency(param_name) && value > 1.0 && value <= 100.0 {
            return (
                Some(value / 100.0),
                ParseMethod::NumericStringInferredPercentage,
            );
        }
        return (Some(value), ParseMethod::NumericDirectString);
    }

    // 7. First numeric substring.
    if let Some(found) = FIRST_NUMBER.find(&value_str) {
        if let Ok(value) = found.as_str().parse::<f64>() {
            return (Some(value), ParseMethod::ExtractedNumber);
        }
    }

    (None, ParseMethod::Unparseable)
}
