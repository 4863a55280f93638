//! Asset inference from lexical equipment-naming patterns.

/// Pattern table mapping boiler/turbine naming variants to canonical asset
/// ids. Scanned in order; the first substring hit wins, so the order is
/// part of the contract.
const ASSET_PATTERNS: &[(&str, &str)] = &[
    // Boiler variants
    ("boiler 1", "AFBC-1"),
    ("boiler1", "AFBC-1"),
    ("boiler-1", "AFBC-1"),
    ("afbc-1", "AFBC-1"),
    ("boiler 2", "AFBC-2"),
    ("boiler2", "AFBC-2"),
    ("boiler-2", "AFBC-2"),
    ("afbc-2", "AFBC-2"),
    // Turbine / generator variants
    ("tg-1", "TG-1"),
    ("tg1", "TG-1"),
    ("turbine 1", "TG-1"),
    ("turbine1", "TG-1"),
    ("turbine-1", "TG-1"),
    ("generator 1", "TG-1"),
    ("tg-2", "TG-2"),
    ("tg2", "TG-2"),
    ("turbine 2", "TG-2"),
    ("turbine2", "TG-2"),
    ("turbine-2", "TG-2"),
    ("generator 2", "TG-2"),
];

/// Infer a canonical asset id from free header text.
///
/// Matching is case-insensitive substring containment. Returns `None` when
/// no pattern applies.
pub fn infer_asset(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    ASSET_PATTERNS
        .iter()
        .find(|(pattern, _)| lowered.contains(pattern))
        .map(|&(_, asset)| asset)
}
