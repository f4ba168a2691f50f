use crate::region::Region;
use serde::{Deserialize, Serialize};

/// A unified crop profile assembled from the main crop table.
///
/// Identity is `(crop, variety)`: crop name is matched case-insensitively,
/// variety exactly, and an empty variety denotes the default local variety.
/// Sowing windows are optional free-text month lists; a `None` window means
/// the crop is not recommended for that region. The descriptive fields
/// (`seed_rate`, `maturity_days`, `yield_range`, `remarks`) stay opaque
/// strings since the source data carries ranges like "90-120" in them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropProfile {
    pub serial: Option<u32>,
    pub crop: String,
    pub variety: String,
    pub sowing_high_hill: Option<String>,
    pub sowing_mid_hill: Option<String>,
    pub sowing_terai: Option<String>,
    pub compost: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub plant_spacing_cm: f64,
    pub row_spacing_cm: f64,
    pub seed_rate: String,
    pub maturity_days: String,
    pub yield_range: String,
    pub remarks: String,
}

impl CropProfile {
    /// The sowing window for one altitude band, if the source recommends
    /// the crop there at all.
    pub fn sowing_for(&self, region: Region) -> Option<&str> {
        let window = match region {
            Region::HighHill => &self.sowing_high_hill,
            Region::MidHill => &self.sowing_mid_hill,
            Region::Terai => &self.sowing_terai,
        };
        window.as_deref()
    }
}
