use serde::{Deserialize, Serialize};

/// Growing-season details for a `(crop, variety)` key, sourced from the
/// growing-season table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowingInfoRecord {
    pub crop: String,
    pub variety: String,
    pub sowing_time: Option<String>,
    pub harvest_time: Option<String>,
    pub maturity_days: String,
    pub yield_range: String,
}
