use serde::{Deserialize, Serialize};

/// Optimal soil pH for a vegetable, keyed by name only (no variety).
/// `optimal_ph` is a free-text range like "6.0-6.8" and `category` a
/// coarse acidic/neutral/alkaline label, both kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhRecord {
    pub vegetable: String,
    pub optimal_ph: String,
    pub category: String,
}
