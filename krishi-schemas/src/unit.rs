use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    Area,
    Weight,
}

impl UnitCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Area => "area",
            UnitCategory::Weight => "weight",
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A measurement unit with its conversion factor to the category base
/// unit (square metres for area, kilograms for weight). Conversion always
/// goes through the base unit, so adding a unit never touches existing
/// entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    pub id: String,
    pub symbol: String,
    pub category: UnitCategory,
    pub to_base: f64,
}
