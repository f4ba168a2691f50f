//! In-memory knowledge base over the four normalized record collections.
//!
//! Collections keep their source order (month queries report results in
//! insertion order) and carry case-folded key indexes beside them so exact
//! lookups stay O(1) as the tables grow. Built once, never mutated.

use krishi_schemas::{
    crop::CropProfile, growing::GrowingInfoRecord, ph::PhRecord, requirement::RequirementRecord,
};
use std::collections::HashMap;

/// Case-folded `(crop, variety)` key. Crop names compare
/// case-insensitively, varieties exactly; `""` is the default variety.
type Key = (String, String);

fn key(crop: &str, variety: &str) -> Key {
    (crop.to_lowercase(), variety.to_string())
}

#[derive(Debug, Default)]
pub struct KnowledgeBase {
    profiles: Vec<CropProfile>,
    requirements: Vec<RequirementRecord>,
    growing: Vec<GrowingInfoRecord>,
    ph: Vec<PhRecord>,
    profile_index: HashMap<Key, usize>,
    requirement_index: HashMap<Key, usize>,
    growing_index: HashMap<Key, usize>,
    ph_index: HashMap<String, usize>,
}

impl KnowledgeBase {
    pub fn from_sources(
        profiles: Vec<CropProfile>,
        requirements: Vec<RequirementRecord>,
        growing: Vec<GrowingInfoRecord>,
        ph: Vec<PhRecord>,
    ) -> Self {
        // First occurrence wins on duplicate keys, keeping lookups stable
        // against repeated rows further down a table.
        let mut profile_index = HashMap::new();
        for (idx, record) in profiles.iter().enumerate() {
            profile_index
                .entry(key(&record.crop, &record.variety))
                .or_insert(idx);
        }
        let mut requirement_index = HashMap::new();
        for (idx, record) in requirements.iter().enumerate() {
            requirement_index
                .entry(key(&record.crop, &record.variety))
                .or_insert(idx);
        }
        let mut growing_index = HashMap::new();
        for (idx, record) in growing.iter().enumerate() {
            growing_index
                .entry(key(&record.crop, &record.variety))
                .or_insert(idx);
        }
        let mut ph_index = HashMap::new();
        for (idx, record) in ph.iter().enumerate() {
            ph_index.entry(record.vegetable.to_lowercase()).or_insert(idx);
        }

        Self {
            profiles,
            requirements,
            growing,
            ph,
            profile_index,
            requirement_index,
            growing_index,
            ph_index,
        }
    }

    pub fn profiles(&self) -> &[CropProfile] {
        &self.profiles
    }

    pub fn requirements(&self) -> &[RequirementRecord] {
        &self.requirements
    }

    pub fn growing(&self) -> &[GrowingInfoRecord] {
        &self.growing
    }

    pub fn ph_records(&self) -> &[PhRecord] {
        &self.ph
    }

    /// Exact `(crop, variety)` lookup in the main profile collection. An
    /// absent variety means the default local variety.
    pub fn profile(&self, crop: &str, variety: Option<&str>) -> Option<&CropProfile> {
        self.profile_index
            .get(&key(crop, variety.unwrap_or("")))
            .map(|&idx| &self.profiles[idx])
    }

    pub fn requirement(&self, crop: &str, variety: Option<&str>) -> Option<&RequirementRecord> {
        self.requirement_index
            .get(&key(crop, variety.unwrap_or("")))
            .map(|&idx| &self.requirements[idx])
    }

    pub fn growing_record(&self, crop: &str, variety: Option<&str>) -> Option<&GrowingInfoRecord> {
        self.growing_index
            .get(&key(crop, variety.unwrap_or("")))
            .map(|&idx| &self.growing[idx])
    }

    pub fn ph_record(&self, vegetable: &str) -> Option<&PhRecord> {
        self.ph_index
            .get(&vegetable.to_lowercase())
            .map(|&idx| &self.ph[idx])
    }

    /// The profile answering crop-level questions: the default variety
    /// when one exists, otherwise the first profile of that crop in
    /// source order.
    pub fn profile_for_crop(&self, crop: &str) -> Option<&CropProfile> {
        self.profile(crop, None).or_else(|| {
            self.profiles
                .iter()
                .find(|p| p.crop.eq_ignore_ascii_case(crop))
        })
    }

    /// Distinct crop names, deduplicated case-insensitively (first-seen
    /// casing wins) and sorted alphabetically.
    pub fn crop_names(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut names: Vec<String> = self
            .profiles
            .iter()
            .filter(|p| seen.insert(p.crop.to_lowercase()))
            .map(|p| p.crop.clone())
            .collect();
        names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
        names
    }

    /// Named varieties of a crop, excluding the blank default variety.
    pub fn varieties(&self, crop: &str) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.profiles
            .iter()
            .filter(|p| p.crop.eq_ignore_ascii_case(crop) && !p.variety.is_empty())
            .filter(|p| seen.insert(p.variety.clone()))
            .map(|p| p.variety.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;

    fn base() -> KnowledgeBase {
        let crops = "Crop\tVariety\tMid_Hill_Sowing\tRemarks\n\
                     Tomato\tSrijana\tBaisakh\t\n\
                     Tomato\t\tJestha\t\n\
                     potato\t\tMagh\t\n\
                     Cauliflower\tKathmandu Local\tAshwin\t\n\
                     Tomato\tSrijana\tChaitra\tduplicate row\n";
        let requirements = "Crop\tVariety\tNitrogen\nTomato\t\t100\n";
        let growing = "Crop\tVariety\tMaturity_Days\nTomato\tSrijana\t90-120\n";
        let ph = "Vegetable\tOptimal_pH\tCategory\nTomato\t6.0-6.8\tacidic\n";
        KnowledgeBase::from_sources(
            normalize::crop_profiles(crops),
            normalize::requirements(requirements),
            normalize::growing_info(growing),
            normalize::ph_records(ph),
        )
    }

    #[test]
    fn lookup_is_case_insensitive_on_crop_and_exact_on_variety() {
        let kb = base();
        assert!(kb.profile("TOMATO", Some("Srijana")).is_some());
        assert!(kb.profile("tomato", Some("srijana")).is_none());
    }

    #[test]
    fn absent_variety_means_the_default_variety() {
        let kb = base();
        let profile = kb.profile("Tomato", None).unwrap();
        assert_eq!(profile.sowing_mid_hill.as_deref(), Some("Jestha"));
    }

    #[test]
    fn first_occurrence_wins_on_duplicate_keys() {
        let kb = base();
        let profile = kb.profile("Tomato", Some("Srijana")).unwrap();
        assert_eq!(profile.sowing_mid_hill.as_deref(), Some("Baisakh"));
    }

    #[test]
    fn crop_names_are_sorted_and_deduplicated() {
        let kb = base();
        assert_eq!(kb.crop_names(), vec!["Cauliflower", "potato", "Tomato"]);
    }

    #[test]
    fn varieties_exclude_the_default_marker() {
        let kb = base();
        assert_eq!(kb.varieties("Tomato"), vec!["Srijana"]);
        assert!(kb.varieties("potato").is_empty());
    }

    #[test]
    fn the_four_collections_are_independent() {
        let kb = base();
        assert!(kb.requirement("Tomato", None).is_some());
        assert!(kb.growing_record("Tomato", Some("Srijana")).is_some());
        assert!(kb.growing_record("Tomato", None).is_none());
        assert!(kb.ph_record("tomato").is_some());
    }
}
