//! Detection of columns competing for the same (parameter, asset) key.

use std::collections::BTreeMap;

use plantlog_model::MappingResult;

/// One warning per `(parameter, asset)` key claimed by two or more mapped
/// columns, naming the first two colliding column indices. Unmapped columns
/// never collide.
pub fn duplicate_warnings(mappings: &BTreeMap<usize, MappingResult>) -> Vec<String> {
    let mut groups: BTreeMap<(&str, Option<&str>), Vec<usize>> = BTreeMap::new();
    for (&col, mapping) in mappings {
        let Some(param) = mapping.param_name.as_deref() else {
            continue;
        };
        groups
            .entry((param, mapping.asset_name.as_deref()))
            .or_default()
            .push(col);
    }

    groups
        .into_iter()
        .filter(|(_, cols)| cols.len() > 1)
        .map(|((param, asset), cols)| {
            format!(
                "Column duplication: {param} ({}) appears in columns {} and {}",
                asset.unwrap_or("no asset"),
                cols[0],
                cols[1]
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use plantlog_model::Confidence;

    use super::*;

    fn mapped(header: &str, param: &str, asset: Option<&str>) -> MappingResult {
        MappingResult {
            header: header.to_string(),
            param_name: Some(param.to_string()),
            asset_name: asset.map(String::from),
            confidence: Confidence::High,
            reason: "test".to_string(),
        }
    }

    #[test]
    fn one_warning_per_key_regardless_of_collision_count() {
        let mut mappings = BTreeMap::new();
        mappings.insert(0, mapped("Coal A", "coal_consumption", Some("AFBC-1")));
        mappings.insert(1, mapped("Coal B", "coal_consumption", Some("AFBC-1")));
        mappings.insert(2, mapped("Coal C", "coal_consumption", Some("AFBC-1")));
        mappings.insert(3, mapped("Steam", "steam_generation", Some("AFBC-1")));

        let warnings = duplicate_warnings(&mappings);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("coal_consumption"));
        assert!(warnings[0].contains("columns 0 and 1"));
    }

    #[test]
    fn same_parameter_on_different_assets_does_not_collide() {
        let mut mappings = BTreeMap::new();
        mappings.insert(0, mapped("Coal B1", "coal_consumption", Some("AFBC-1")));
        mappings.insert(1, mapped("Coal B2", "coal_consumption", Some("AFBC-2")));

        assert!(duplicate_warnings(&mappings).is_empty());
    }

    #[test]
    fn unmapped_columns_are_ignored() {
        let mut mappings = BTreeMap::new();
        mappings.insert(0, MappingResult::unmapped("Date", "Non-parameter column detected: 'date'"));
        mappings.insert(1, MappingResult::unmapped("Notes", "Non-parameter column detected: 'notes'"));

        assert!(duplicate_warnings(&mappings).is_empty());
    }

    #[test]
    fn assetless_duplicates_still_collide() {
        let mut mappings = BTreeMap::new();
        mappings.insert(2, mapped("Coal", "coal_consumption", None));
        mappings.insert(5, mapped("Coal Used", "coal_consumption", None));

        let warnings = duplicate_warnings(&mappings);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("columns 2 and 5"));
    }
}
