//! Canonical catalog entries: measurable parameters and plant assets.

use serde::{Deserialize, Serialize};

use crate::{AssetType, ParamCategory};

/// A canonical measurable quantity with a stable identifier.
///
/// Immutable once loaded into the registry. The `aliases` list is ordered:
/// lexical matching scans it front to back and earlier entries win ties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Canonical id, unique within the registry (e.g. `coal_consumption`).
    pub name: String,
    pub display_name: String,
    pub unit: String,
    pub category: ParamCategory,
    /// Reporting section the parameter belongs to (e.g. "COGEN BOILER").
    pub section: String,
    /// Known textual variants seen in real sheets.
    pub aliases: Vec<String>,
    /// Asset ids this parameter can be reported against.
    pub applicable_assets: Vec<String>,
}

impl Parameter {
    pub fn applies_to(&self, asset_name: &str) -> bool {
        self.applicable_assets.iter().any(|a| a == asset_name)
    }
}

/// A canonical physical equipment unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique id (e.g. `AFBC-1`).
    pub name: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub aliases: Vec<String>,
}
