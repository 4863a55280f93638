//! Deterministic lexical fallback mapper.

use plantlog_model::{Confidence, MappingResult};
use plantlog_registry::Registry;

use crate::infer::infer_asset;
use crate::similarity::similarity;

const HIGH_THRESHOLD: f64 = 0.85;
const MEDIUM_THRESHOLD: f64 = 0.6;

/// Alias-similarity mapper used when no oracle is configured or when the
/// oracle fails.
///
/// Deterministic: identical inputs and registry always produce the same
/// decision.
#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatcher<'a> {
    registry: &'a Registry,
}

impl<'a> FuzzyMatcher<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Map a single header to the best-scoring parameter and any asset the
    /// header names or implies.
    ///
    /// The best parameter is tracked with a strict `>` comparison across
    /// every alias of every parameter, so ties keep the first candidate in
    /// registry order. A score of zero leaves the column unmapped.
    pub fn match_header(&self, header: &str) -> MappingResult {
        let header_lower = header.to_lowercase().trim().to_string();

        let mut best_param: Option<&str> = None;
        let mut best_score = 0.0_f64;
        for param in self.registry.parameters() {
            for alias in &param.aliases {
                let score = similarity(&header_lower, &alias.to_lowercase());
                if score > best_score {
                    best_score = score;
                    best_param = Some(&param.name);
                }
            }
        }

        // Direct asset match: first alias contained in the header, in
        // registry order.
        let mut asset_name: Option<&str> = None;
        'assets: for asset in self.registry.assets() {
            for alias in &asset.aliases {
                if header_lower.contains(&alias.to_lowercase()) {
                    asset_name = Some(&asset.name);
                    break 'assets;
                }
            }
        }

        let mut asset_inferred = false;
        if asset_name.is_none() {
            if let Some(inferred) = infer_asset(&header_lower) {
                asset_name = Some(inferred);
                asset_inferred = true;
            }
        }

        let mut confidence = if best_score > HIGH_THRESHOLD {
            Confidence::High
        } else if best_score > MEDIUM_THRESHOLD {
            Confidence::Medium
        } else {
            Confidence::Low
        };
        // An indirectly inferred asset is weaker evidence than a direct
        // alias hit.
        if asset_inferred && asset_name.is_some() && confidence == Confidence::High {
            confidence = Confidence::Medium;
        }

        let mut reason = format!("Fuzzy matched with score {best_score:.2}");
        if asset_inferred {
            reason.push_str("; asset inferred from boiler/turbine mapping");
        }

        MappingResult {
            header: header.to_string(),
            param_name: best_param.map(String::from),
            asset_name: asset_name.map(String::from),
            confidence,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher_registry() -> Registry {
        Registry::builtin()
    }

    #[test]
    fn exact_alias_maps_at_high_confidence() {
        let registry = matcher_registry();
        let result = FuzzyMatcher::new(&registry).match_header("Coal Used (MT)");
        assert_eq!(result.param_name.as_deref(), Some("coal_consumption"));
        assert_eq!(result.confidence, Confidence::High);
        assert!(result.reason.contains("1.00"));
    }

    #[test]
    fn direct_asset_alias_keeps_high_confidence() {
        let registry = matcher_registry();
        let result = FuzzyMatcher::new(&registry).match_header("Steam Generation AFBC-1");
        assert_eq!(result.param_name.as_deref(), Some("steam_generation"));
        assert_eq!(result.asset_name.as_deref(), Some("AFBC-1"));
        assert_eq!(result.confidence, Confidence::High);
        assert!(!result.reason.contains("inferred"));
    }

    #[test]
    fn inferred_asset_downgrades_high_to_medium() {
        let registry = matcher_registry();
        // "boiler2" is not an AFBC-2 alias, so only the inference table
        // can resolve the asset here.
        let result = FuzzyMatcher::new(&registry).match_header("Steam Generated boiler2");
        assert_eq!(result.param_name.as_deref(), Some("steam_generation"));
        assert_eq!(result.asset_name.as_deref(), Some("AFBC-2"));
        assert_eq!(result.confidence, Confidence::Medium);
        assert!(result.reason.contains("asset inferred"));
    }

    #[test]
    fn unrelated_header_scores_low() {
        let registry = matcher_registry();
        let result = FuzzyMatcher::new(&registry).match_header("zzzz qqqq");
        assert_eq!(result.confidence, Confidence::Low);
    }

    #[test]
    fn deterministic_across_calls() {
        let registry = matcher_registry();
        let matcher = FuzzyMatcher::new(&registry);
        let a = matcher.match_header("Power TG");
        let b = matcher.match_header("Power TG");
        assert_eq!(a, b);
    }
}
