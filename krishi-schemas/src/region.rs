use serde::{Deserialize, Serialize};

/// The twelve Nepali calendar months, spelled the way the source tables
/// spell them. Sowing windows are free-text lists of these tokens, and
/// month filtering is exact substring containment against them.
pub const NEPALI_MONTHS: [&str; 12] = [
    "Baisakh", "Jestha", "Ashad", "Shrawan", "Bhadra", "Ashwin",
    "Kartik", "Mangsir", "Poush", "Magh", "Falgun", "Chaitra",
];

/// One of the three altitude bands, each with its own sowing calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    HighHill,
    MidHill,
    Terai,
}

impl Region {
    /// Resolves free-form place text to a region. "Bensi" is the valley
    /// floor and shares the terai calendar; anything unrecognized falls
    /// back to the mid-hill band.
    pub fn from_query(text: &str) -> Self {
        let lowered = text.to_lowercase();
        if lowered.contains("high") {
            Region::HighHill
        } else if lowered.contains("terai") || lowered.contains("bensi") {
            Region::Terai
        } else {
            Region::MidHill
        }
    }
}
