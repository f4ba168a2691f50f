//! Area and weight unit conversion through category base units.

use crate::error::KrishiError;
use krishi_schemas::unit::{UnitCategory, UnitDefinition};
use std::collections::HashMap;

const SQ_M_PER_HECTARE: f64 = 10_000.0;
const SQ_M_PER_ROPANI: f64 = 508.74;
const SQ_M_PER_AANA: f64 = 31.80;
const SQ_M_PER_BIGHA: f64 = 6_772.63;
const SQ_M_PER_KATTHA: f64 = 338.63;
const SQ_M_PER_DHUR: f64 = 16.93;

/// The built-in unit table. Units are domain constants, not
/// configuration; the Nepali land units follow the official cadastral
/// factors. Bases: square metres for area, kilograms for weight.
pub struct UnitRegistry {
    units: HashMap<(UnitCategory, String), UnitDefinition>,
}

impl UnitRegistry {
    pub fn builtin() -> Self {
        let mut registry = Self {
            units: HashMap::new(),
        };
        let area = [
            ("sq_m", "m²", 1.0),
            ("hectare", "ha", SQ_M_PER_HECTARE),
            ("ropani", "ropani", SQ_M_PER_ROPANI),
            ("aana", "aana", SQ_M_PER_AANA),
            ("bigha", "bigha", SQ_M_PER_BIGHA),
            ("kattha", "kattha", SQ_M_PER_KATTHA),
            ("dhur", "dhur", SQ_M_PER_DHUR),
        ];
        let weight = [
            ("gram", "g", 0.001),
            ("kg", "kg", 1.0),
            ("quintal", "q", 100.0),
            ("tonne", "t", 1_000.0),
        ];
        for (id, symbol, to_base) in area {
            registry.insert(id, symbol, UnitCategory::Area, to_base);
        }
        for (id, symbol, to_base) in weight {
            registry.insert(id, symbol, UnitCategory::Weight, to_base);
        }
        registry
    }

    fn insert(&mut self, id: &str, symbol: &str, category: UnitCategory, to_base: f64) {
        self.units.insert(
            (category, id.to_string()),
            UnitDefinition {
                id: id.to_string(),
                symbol: symbol.to_string(),
                category,
                to_base,
            },
        );
    }

    pub fn get(&self, category: UnitCategory, id: &str) -> Option<&UnitDefinition> {
        self.units.get(&(category, id.to_lowercase()))
    }

    pub fn definitions(&self, category: UnitCategory) -> Vec<&UnitDefinition> {
        let mut defs: Vec<&UnitDefinition> = self
            .units
            .values()
            .filter(|def| def.category == category)
            .collect();
        defs.sort_by(|a, b| a.id.cmp(&b.id));
        defs
    }

    fn resolve(&self, category: UnitCategory, id: &str) -> Result<&UnitDefinition, KrishiError> {
        if let Some(def) = self.get(category, id) {
            return Ok(def);
        }
        // Distinguish a unit filed under the other category from one the
        // registry has never heard of.
        let elsewhere = self
            .units
            .values()
            .find(|def| def.id == id.to_lowercase() && def.category != category);
        match elsewhere {
            Some(def) => Err(KrishiError::UnitMismatch {
                unit: id.to_string(),
                requested: category,
                actual: def.category,
            }),
            None => Err(KrishiError::UnknownUnit {
                unit: id.to_string(),
                category,
            }),
        }
    }

    /// Converts `value` from `from` to `to` within `category`, always via
    /// the category base unit. Unknown units and category mismatches are
    /// rejected rather than silently computed.
    pub fn convert(
        &self,
        value: f64,
        from: &str,
        to: &str,
        category: UnitCategory,
    ) -> Result<f64, KrishiError> {
        let from_def = self.resolve(category, from)?;
        let to_def = self.resolve(category, to)?;
        Ok(value * from_def.to_base / to_def.to_base)
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn ropani_to_sq_m() {
        let registry = UnitRegistry::builtin();
        let sq_m = registry
            .convert(2.0, "ropani", "sq_m", UnitCategory::Area)
            .unwrap();
        assert_relative_eq!(sq_m, 1_017.48);
    }

    #[test]
    fn quintal_to_kg() {
        let registry = UnitRegistry::builtin();
        let kg = registry
            .convert(1.5, "quintal", "kg", UnitCategory::Weight)
            .unwrap();
        assert_relative_eq!(kg, 150.0);
    }

    #[test]
    fn unit_ids_are_case_insensitive() {
        let registry = UnitRegistry::builtin();
        assert!(registry
            .convert(1.0, "Ropani", "HECTARE", UnitCategory::Area)
            .is_ok());
    }

    #[test]
    fn cross_category_conversion_is_rejected() {
        let registry = UnitRegistry::builtin();
        let err = registry
            .convert(1.0, "ropani", "kg", UnitCategory::Area)
            .unwrap_err();
        assert!(matches!(err, crate::error::KrishiError::UnitMismatch { .. }));
    }

    #[test]
    fn unknown_units_are_rejected() {
        let registry = UnitRegistry::builtin();
        let err = registry
            .convert(1.0, "ropani", "acre", UnitCategory::Area)
            .unwrap_err();
        assert!(matches!(err, crate::error::KrishiError::UnknownUnit { .. }));
    }

    proptest! {
        #[test]
        fn area_round_trips_within_tolerance(
            value in 0.001f64..1e6,
            from_idx in 0usize..7,
            to_idx in 0usize..7,
        ) {
            let registry = UnitRegistry::builtin();
            let ids = ["sq_m", "hectare", "ropani", "aana", "bigha", "kattha", "dhur"];
            let (from, to) = (ids[from_idx], ids[to_idx]);
            let there = registry.convert(value, from, to, UnitCategory::Area).unwrap();
            let back = registry.convert(there, to, from, UnitCategory::Area).unwrap();
            prop_assert!((back - value).abs() <= value * 1e-9);
        }

        #[test]
        fn weight_round_trips_within_tolerance(
            value in 0.001f64..1e6,
            from_idx in 0usize..4,
            to_idx in 0usize..4,
        ) {
            let registry = UnitRegistry::builtin();
            let ids = ["gram", "kg", "quintal", "tonne"];
            let (from, to) = (ids[from_idx], ids[to_idx]);
            let there = registry.convert(value, from, to, UnitCategory::Weight).unwrap();
            let back = registry.convert(there, to, from, UnitCategory::Weight).unwrap();
            prop_assert!((back - value).abs() <= value * 1e-9);
        }
    }
}
