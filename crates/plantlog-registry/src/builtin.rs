//! Built-in catalog content.
//!
//! Declaration order matters: the fuzzy matcher keeps the first
//! best-scoring entry it encounters, so entries are listed in their
//! historical order.

use plantlog_model::{Asset, AssetType, ParamCategory, Parameter};

fn param(
    name: &str,
    display_name: &str,
    unit: &str,
    category: ParamCategory,
    section: &str,
    aliases: &[&str],
    applicable_assets: &[&str],
) -> Parameter {
    Parameter {
        name: name.to_string(),
        display_name: display_name.to_string(),
        unit: unit.to_string(),
        category,
        section: section.to_string(),
        aliases: aliases.iter().map(|a| (*a).to_string()).collect(),
        applicable_assets: applicable_assets.iter().map(|a| (*a).to_string()).collect(),
    }
}

fn asset(name: &str, display_name: &str, asset_type: AssetType, aliases: &[&str]) -> Asset {
    Asset {
        name: name.to_string(),
        display_name: display_name.to_string(),
        asset_type,
        aliases: aliases.iter().map(|a| (*a).to_string()).collect(),
    }
}

/// The canonical parameter catalog.
pub fn builtin_parameters() -> Vec<Parameter> {
    use ParamCategory::{Calculated, Emission, Input, Output};

    vec![
        param(
            "coal_consumption",
            "Coal Consumption",
            "MT",
            Input,
            "COGEN BOILER",
            &[
                "Coal Consumption",
                "Coal Used",
                "Coal (MT)",
                "Daily Coal",
                "Coal Used (MT)",
                "COAL CONSMPTN",
            ],
            &["AFBC-1", "AFBC-2"],
        ),
        param(
            "coal_gcv",
            "Coal GCV",
            "kcal/kg",
            Input,
            "COGEN BOILER",
            &["Coal GCV", "Coal Gross Calorific Value", "GCV", "COALCV"],
            &["AFBC-1", "AFBC-2"],
        ),
        param(
            "steam_generation",
            "Steam Generation",
            "T/hr",
            Output,
            "COGEN BOILER",
            &[
                "Steam",
                "Steam Generated",
                "Steam Generation",
                "Steam (Boiler)",
                "Steam Output",
                "STEAM GEN",
            ],
            &["AFBC-1", "AFBC-2"],
        ),
        param(
            "steam_consumption",
            "Steam Consumption",
            "T/hr",
            Input,
            "COGEN BOILER",
            &["Steam Consumption", "Steam Used", "Steam Input"],
            &["AFBC-1", "AFBC-2"],
        ),
        param(
            "power_generation",
            "Power Generation",
            "MWh",
            Output,
            "POWER PLANT",
            &[
                "Power",
                "Power Generated",
                "Power Output",
                "Power (MW)",
                "Power Generation",
                "Power TG",
                "POWER GEN",
            ],
            &["TG-1", "TG-2"],
        ),
        param(
            "power_consumption",
            "Power Consumption",
            "MWh",
            Input,
            "POWER PLANT",
            &["Power Consumption", "Power Used", "Auxiliary Power Load"],
            &["TG-1", "TG-2"],
        ),
        param(
            "power_export",
            "Power Export",
            "MWh",
            Output,
            "POWER PLANT",
            &["Power Export", "Power Exported", "Grid Export"],
            &["TG-1", "TG-2"],
        ),
        param(
            "water_consumption",
            "Water Consumption",
            "KL",
            Input,
            "UTILITIES",
            &["Water", "Water Consumption", "Water Used", "Water (KL)"],
            &["AFBC-1", "AFBC-2", "TG-1", "TG-2"],
        ),
        param(
            "co2_emissions",
            "CO₂ Emissions",
            "tCO2e",
            Emission,
            "EMISSIONS",
            &["CO2 Emissions", "CO2", "Carbon Dioxide"],
            &["AFBC-1", "AFBC-2", "TG-1", "TG-2"],
        ),
        param(
            "so2_emissions",
            "SO₂ Emissions",
            "kg",
            Emission,
            "EMISSIONS",
            &["SO2 Emissions", "SO2", "Sulfur Dioxide"],
            &["AFBC-1", "AFBC-2"],
        ),
        param(
            "nox_emissions",
            "NOx Emissions",
            "kg",
            Emission,
            "EMISSIONS",
            &["NOx Emissions", "NOx", "Nitrogen Oxides"],
            &["AFBC-1", "AFBC-2"],
        ),
        param(
            "fly_ash_generated",
            "Fly Ash Generated",
            "MT",
            Output,
            "WASTE",
            &["Fly Ash", "Fly Ash Generated", "Ash Output"],
            &["AFBC-1", "AFBC-2"],
        ),
        param(
            "efficiency",
            "Boiler Efficiency",
            "%",
            Calculated,
            "COGEN BOILER",
            &[
                "Efficiency",
                "Plant Efficiency",
                "Overall Efficiency",
                "EFF %",
                "Boiler Efficiency",
            ],
            &["AFBC-1", "AFBC-2"],
        ),
        param(
            "specific_coal_consumption",
            "Specific Coal Consumption",
            "kg/kWh",
            Calculated,
            "COGEN BOILER",
            &["Specific Coal Consumption", "SCC", "Coal Per Unit"],
            &["AFBC-1", "AFBC-2"],
        ),
        param(
            "heat_rate",
            "Heat Rate",
            "kcal/kWh",
            Calculated,
            "POWER PLANT",
            &["Heat Rate", "Heat Input Rate", "HR"],
            &["TG-1", "TG-2"],
        ),
        param(
            "plant_load_factor",
            "Plant Load Factor",
            "%",
            Calculated,
            "POWER PLANT",
            &["Plant Load Factor", "PLF", "Capacity Factor"],
            &["TG-1", "TG-2"],
        ),
        param(
            "lignite_consumption",
            "Lignite Consumption",
            "MT",
            Input,
            "COGEN BOILER",
            &["Lignite", "Lignite Consumption", "Brown Coal"],
            &["AFBC-1", "AFBC-2"],
        ),
        param(
            "biomass_consumption",
            "Biomass Consumption",
            "MT",
            Input,
            "COGEN BOILER",
            &["Biomass", "Biomass Consumption", "Bio-fuel"],
            &["AFBC-1", "AFBC-2"],
        ),
        param(
            "production_output",
            "Production Output",
            "MT",
            Output,
            "PRODUCTION",
            &["Production", "Output", "Production Output"],
            &["VSF"],
        ),
        param(
            "operating_hours",
            "Operating Hours",
            "hrs",
            Input,
            "OPERATIONS",
            &["Operating Hours", "Runtime", "Hours", "HOURS", "Uptime"],
            &["AFBC-1", "AFBC-2", "TG-1", "TG-2", "VSF"],
        ),
    ]
}

/// The canonical asset catalog.
pub fn builtin_assets() -> Vec<Asset> {
    use AssetType::{Boiler, Kiln, Product, Turbine};

    vec![
        asset(
            "AFBC-1",
            "AFBC Boiler 1",
            Boiler,
            &["AFBC-1", "Boiler 1", "AFBC 1", "AFB1"],
        ),
        asset(
            "AFBC-2",
            "AFBC Boiler 2",
            Boiler,
            &["AFBC-2", "Boiler 2", "AFBC 2", "AFB2"],
        ),
        asset(
            "TG-1",
            "Turbo Generator 1",
            Turbine,
            &["TG-1", "TG1", "Turbine 1", "Generator 1"],
        ),
        asset(
            "TG-2",
            "Turbo Generator 2",
            Turbine,
            &["TG-2", "TG2", "Turbine 2", "Generator 2"],
        ),
        asset(
            "VSF",
            "Viscose Staple Fiber",
            Product,
            &["VSF", "Viscose Staple Fiber", "Fiber"],
        ),
        asset(
            "KILN-1",
            "Rotary Kiln 1",
            Kiln,
            &["KILN-1", "Kiln 1", "Rotary Kiln 1", "RK1"],
        ),
    ]
}
