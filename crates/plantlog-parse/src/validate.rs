//! Parameter-specific sanity rules for parsed values.

/// Outcome of validating one parsed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validity {
    pub is_valid: bool,
    /// Advisory or failure message, when a rule fired.
    pub warning: Option<String>,
}

impl Validity {
    fn valid() -> Self {
        Self {
            is_valid: true,
            warning: None,
        }
    }

    fn invalid(message: String) -> Self {
        Self {
            is_valid: false,
            warning: Some(message),
        }
    }

    fn advisory(message: String) -> Self {
        Self {
            is_valid: true,
            warning: Some(message),
        }
    }
}

/// Check a parsed value against the sanity rules for its parameter.
///
/// A missing value is always valid. Rules match by case-insensitive
/// substring on the parameter identity and are scanned in a fixed order
/// (efficiency, coal, power, hours); the first rule that produces a verdict
/// returns it, so a name matching several rules resolves by scan position.
pub fn validate_value(parsed: Option<f64>, param_name: &str) -> Validity {
    let Some(value) = parsed else {
        return Validity::valid();
    };
    let name = param_name.to_lowercase();

    // Efficiency is stored as a fraction; values above 1 are suspicious and
    // values above 100 are impossible even as a raw percentage.
    if name.contains("efficiency") && !(0.0..=1.0).contains(&value) {
        if value > 100.0 {
            return Validity::invalid(format!("Efficiency value {value} exceeds 100%"));
        }
        return Validity::advisory(format!(
            "Efficiency {value} - verify if this is decimal or percentage"
        ));
    }

    if name.contains("coal") && value < 0.0 {
        return Validity::invalid(format!("Coal consumption cannot be negative: {value}"));
    }

    if name.contains("power") && value < 0.0 {
        return Validity::invalid(format!("Power generation cannot be negative: {value}"));
    }

    if name.contains("hour") && !(0.0..=24.0).contains(&value) {
        return Validity::invalid(format!(
            "Operating hours {value} outside expected range (0-24)"
        ));
    }

    Validity::valid()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_are_always_valid() {
        let result = validate_value(None, "efficiency");
        assert!(result.is_valid);
        assert!(result.warning.is_none());
    }

    #[test]
    fn efficiency_above_100_is_a_hard_failure() {
        let result = validate_value(Some(150.0), "efficiency");
        assert!(!result.is_valid);
        assert!(result.warning.unwrap().contains("100"));
    }

    #[test]
    fn efficiency_in_percent_range_is_advisory_only() {
        let result = validate_value(Some(85.0), "efficiency");
        assert!(result.is_valid);
        assert!(result.warning.unwrap().contains("decimal or percentage"));
    }

    #[test]
    fn efficiency_fraction_passes_clean() {
        let result = validate_value(Some(0.85), "boiler_efficiency");
        assert!(result.is_valid);
        assert!(result.warning.is_none());
    }

    #[test]
    fn negative_coal_is_rejected() {
        let result = validate_value(Some(-5.0), "coal_consumption");
        assert!(!result.is_valid);
        assert!(result.warning.unwrap().contains("negative"));
    }

    #[test]
    fn negative_power_is_rejected() {
        let result = validate_value(Some(-1.0), "power_export");
        assert!(!result.is_valid);
    }

    #[test]
    fn operating_hours_bounded_by_a_day() {
        let result = validate_value(Some(30.0), "operating_hours");
        assert!(!result.is_valid);
        assert!(result.warning.unwrap().contains("24"));

        let ok = validate_value(Some(24.0), "operating_hours");
        assert!(ok.is_valid);
    }

    #[test]
    fn first_firing_rule_wins_for_multi_match_names() {
        // A name matching both "coal" and "hour": the coal rule passes for
        // 30.0 and the hours rule then rejects it.
        let result = validate_value(Some(30.0), "coal_mill_hours");
        assert!(!result.is_valid);
        assert!(result.warning.unwrap().contains("24"));

        // Negative value: the coal rule fires first.
        let negative = validate_value(Some(-2.0), "coal_mill_hours");
        assert!(!negative.is_valid);
        assert!(negative.warning.unwrap().contains("negative"));
    }
}
