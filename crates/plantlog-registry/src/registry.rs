//! Indexed, immutable catalog lookup.

use std::collections::{BTreeMap, BTreeSet};

use plantlog_model::{Asset, AssetType, ParamCategory, Parameter};
use serde_json::json;

use crate::builtin::{builtin_assets, builtin_parameters};
use crate::error::RegistryError;

/// Immutable catalogs of parameters and assets with name indexes.
///
/// Constructed once at startup and passed by shared reference into every
/// pipeline component; safe to share read-only across concurrent requests.
#[derive(Debug, Clone)]
pub struct Registry {
    parameters: Vec<Parameter>,
    assets: Vec<Asset>,
    param_index: BTreeMap<String, usize>,
    asset_index: BTreeMap<String, usize>,
}

impl Registry {
    /// Build a registry, validating name uniqueness and asset references.
    pub fn new(parameters: Vec<Parameter>, assets: Vec<Asset>) -> Result<Self, RegistryError> {
        let mut asset_index = BTreeMap::new();
        for (idx, asset) in assets.iter().enumerate() {
            if asset_index.insert(asset.name.clone(), idx).is_some() {
                return Err(RegistryError::DuplicateAsset(asset.name.clone()));
            }
        }

        let mut param_index = BTreeMap::new();
        for (idx, param) in parameters.iter().enumerate() {
            if param_index.insert(param.name.clone(), idx).is_some() {
                return Err(RegistryError::DuplicateParameter(param.name.clone()));
            }
            for applicable in &param.applicable_assets {
                if !asset_index.contains_key(applicable) {
                    return Err(RegistryError::UnknownApplicableAsset {
                        param: param.name.clone(),
                        asset: applicable.clone(),
                    });
                }
            }
        }

        Ok(Self {
            parameters,
            assets,
            param_index,
            asset_index,
        })
    }

    /// The built-in catalogs.
    pub fn builtin() -> Self {
        // The built-in content is validated by tests; construction cannot fail.
        match Self::new(builtin_parameters(), builtin_assets()) {
            Ok(registry) => registry,
            Err(error) => unreachable!("built-in catalogs are valid: {error}"),
        }
    }

    /// Parameters in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Assets in declaration order.
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.param_index.get(name).map(|&idx| &self.parameters[idx])
    }

    pub fn asset(&self, name: &str) -> Option<&Asset> {
        self.asset_index.get(name).map(|&idx| &self.assets[idx])
    }

    pub fn parameter_unit(&self, name: &str) -> Option<&str> {
        self.parameter(name).map(|p| p.unit.as_str())
    }

    pub fn parameters_in_section(&self, section: &str) -> Vec<&Parameter> {
        self.parameters.iter().filter(|p| p.section == section).collect()
    }

    pub fn parameters_in_category(&self, category: ParamCategory) -> Vec<&Parameter> {
        self.parameters
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn parameters_for_asset(&self, asset_name: &str) -> Vec<&Parameter> {
        self.parameters
            .iter()
            .filter(|p| p.applies_to(asset_name))
            .collect()
    }

    pub fn assets_of_type(&self, asset_type: AssetType) -> Vec<&Asset> {
        self.assets
            .iter()
            .filter(|a| a.asset_type == asset_type)
            .collect()
    }

    /// True when the parameter is applicable to the asset.
    pub fn parameter_applies_to(&self, param_name: &str, asset_name: &str) -> bool {
        self.parameter(param_name)
            .is_some_and(|p| p.applies_to(asset_name))
    }

    /// All distinct sections, sorted.
    pub fn sections(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.parameters.iter().map(|p| p.section.as_str()).collect();
        set.into_iter().map(String::from).collect()
    }

    /// Both catalogs as a JSON document.
    ///
    /// Used as context for the external mapping oracle so that its replies
    /// can only reference known ids.
    pub fn context_json(&self) -> serde_json::Value {
        json!({
            "parameters": self.parameters,
            "assets": self.assets,
        })
    }
}
