use serde::{Deserialize, Serialize};

/// Per-unit-area nutrient requirements of a crop, extracted from its
/// profile. All four magnitudes may legitimately be zero; absence of the
/// crop itself is reported separately by the lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientGuide {
    pub compost: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
}

/// Purchasable product masses covering a crop's nutrient requirements on
/// a given plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FertilizerPlan {
    pub urea: f64,
    pub dap: f64,
    pub mop: f64,
    pub compost: f64,
}
