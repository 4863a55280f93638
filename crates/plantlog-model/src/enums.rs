//! Type-safe enumerations shared across the parsing pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Three-level certainty classification attached to a mapping or a parsed
/// cell.
///
/// Ordered so that a downgrade compares with `<`: `Low < Medium < High`.
/// The pipeline only ever moves confidence downward from the column's
/// mapping confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Weak or uncertain match; needs manual review.
    Low,
    /// Reasonable match or degraded parse; should be verified.
    Medium,
    /// Near-certain match with a clean parse.
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Confidence::High),
            "medium" => Ok(Confidence::Medium),
            "low" => Ok(Confidence::Low),
            _ => Err(ModelError::InvalidConfidence(s.to_string())),
        }
    }
}

/// Category of a canonical parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamCategory {
    /// Consumed resource (coal, water, steam input).
    Input,
    /// Produced quantity (steam, power, ash).
    Output,
    /// Derived figure (efficiency, heat rate).
    Calculated,
    /// Stack emission (CO2, SO2, NOx).
    Emission,
}

impl ParamCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamCategory::Input => "input",
            ParamCategory::Output => "output",
            ParamCategory::Calculated => "calculated",
            ParamCategory::Emission => "emission",
        }
    }
}

impl fmt::Display for ParamCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "input" => Ok(ParamCategory::Input),
            "output" => Ok(ParamCategory::Output),
            "calculated" => Ok(ParamCategory::Calculated),
            "emission" => Ok(ParamCategory::Emission),
            _ => Err(ModelError::InvalidCategory(s.to_string())),
        }
    }
}

/// Kind of physical equipment unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Boiler,
    Turbine,
    Product,
    Kiln,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Boiler => "boiler",
            AssetType::Turbine => "turbine",
            AssetType::Product => "product",
            AssetType::Kiln => "kiln",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "boiler" => Ok(AssetType::Boiler),
            "turbine" => Ok(AssetType::Turbine),
            "product" => Ok(AssetType::Product),
            "kiln" => Ok(AssetType::Kiln),
            _ => Err(ModelError::InvalidAssetType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_orders_low_to_high() {
        assert!(Confidence::Low < Confidence::Medium);
        assert!(Confidence::Medium < Confidence::High);
    }

    #[test]
    fn confidence_from_str_is_case_insensitive() {
        assert_eq!("High".parse::<Confidence>().unwrap(), Confidence::High);
        assert_eq!("MEDIUM".parse::<Confidence>().unwrap(), Confidence::Medium);
        assert_eq!(" low ".parse::<Confidence>().unwrap(), Confidence::Low);
        assert!("very high".parse::<Confidence>().is_err());
    }

    #[test]
    fn confidence_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Confidence::Medium).unwrap(),
            "\"medium\""
        );
    }

    #[test]
    fn category_round_trips() {
        for category in [
            ParamCategory::Input,
            ParamCategory::Output,
            ParamCategory::Calculated,
            ParamCategory::Emission,
        ] {
            assert_eq!(category.as_str().parse::<ParamCategory>().unwrap(), category);
        }
    }
}
