use serde::{Deserialize, Serialize};

/// Nutrient and seed requirements for a `(crop, variety)` key, sourced
/// from the requirements table. Maintained independently of the main crop
/// table and never cross-validated against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementRecord {
    pub crop: String,
    pub variety: String,
    pub compost: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub seed_rate: String,
}
