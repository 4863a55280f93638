//! Aggregation helpers for the final parse report.

use std::collections::{BTreeMap, BTreeSet};

use plantlog_model::MappingResult;
use plantlog_registry::Registry;

/// Parameter id to sorted unique asset names, covering every mapped column.
/// Parameters mapped without an asset appear with an empty list.
pub(crate) fn parameter_assets(
    mappings: &BTreeMap<usize, MappingResult>,
) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for mapping in mappings.values() {
        let Some(param) = &mapping.param_name else {
            continue;
        };
        let assets = grouped.entry(param.clone()).or_default();
        if let Some(asset) = &mapping.asset_name {
            assets.insert(asset.clone());
        }
    }
    grouped
        .into_iter()
        .map(|(param, assets)| (param, assets.into_iter().collect()))
        .collect()
}

/// Sorted unique asset names across all mapped columns.
pub(crate) fn detected_assets(mappings: &BTreeMap<usize, MappingResult>) -> Vec<String> {
    let set: BTreeSet<String> = mappings
        .values()
        .filter(|m| m.param_name.is_some())
        .filter_map(|m| m.asset_name.clone())
        .collect();
    set.into_iter().collect()
}

/// Parameter id to registry unit, for every mapped parameter.
pub(crate) fn unit_map(
    mappings: &BTreeMap<usize, MappingResult>,
    registry: &Registry,
) -> BTreeMap<String, String> {
    let mut units = BTreeMap::new();
    for mapping in mappings.values() {
        let Some(param) = &mapping.param_name else {
            continue;
        };
        if let Some(unit) = registry.parameter_unit(param) {
            units.insert(param.clone(), unit.to_string());
        }
    }
    units
}

/// Deduplicate warnings by exact text, preserving first-occurrence order.
pub(crate) fn dedup_warnings(warnings: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    warnings
        .into_iter()
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use plantlog_model::Confidence;

    use super::*;

    fn mapped(param: &str, asset: Option<&str>) -> MappingResult {
        MappingResult {
            header: param.to_string(),
            param_name: Some(param.to_string()),
            asset_name: asset.map(String::from),
            confidence: Confidence::High,
            reason: "test".to_string(),
        }
    }

    #[test]
    fn parameter_assets_are_sorted_and_unique() {
        let mut mappings = BTreeMap::new();
        mappings.insert(0, mapped("steam_generation", Some("AFBC-2")));
        mappings.insert(1, mapped("steam_generation", Some("AFBC-1")));
        mappings.insert(2, mapped("steam_generation", Some("AFBC-1")));
        mappings.insert(3, mapped("heat_rate", None));

        let params = parameter_assets(&mappings);
        assert_eq!(
            params["steam_generation"],
            vec!["AFBC-1".to_string(), "AFBC-2".to_string()]
        );
        assert!(params["heat_rate"].is_empty());
    }

    #[test]
    fn detected_assets_are_sorted_unique() {
        let mut mappings = BTreeMap::new();
        mappings.insert(0, mapped("steam_generation", Some("AFBC-2")));
        mappings.insert(1, mapped("power_generation", Some("TG-1")));
        mappings.insert(2, mapped("coal_consumption", Some("AFBC-2")));

        assert_eq!(
            detected_assets(&mappings),
            vec!["AFBC-2".to_string(), "TG-1".to_string()]
        );
    }

    #[test]
    fn units_come_from_the_registry() {
        let registry = Registry::builtin();
        let mut mappings = BTreeMap::new();
        mappings.insert(0, mapped("coal_consumption", None));

        let units = unit_map(&mappings, &registry);
        assert_eq!(units["coal_consumption"], "MT");
    }

    #[test]
    fn warning_dedup_preserves_first_occurrence_order() {
        let warnings = vec![
            "b".to_string(),
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "a".to_string(),
        ];
        assert_eq!(
            dedup_warnings(warnings),
            vec!["b".to_string(), "a".to_string(), "c".to_string()]
        );
    }
}
