//! Query façade over the knowledge base: month/region filtering,
//! free-text search, and nutrient-guide extraction.

use crate::kb::KnowledgeBase;
use krishi_schemas::{crop::CropProfile, fertilizer::NutrientGuide, region::Region};

impl KnowledgeBase {
    /// Profiles whose sowing window for `region` contains `month` as a
    /// case-sensitive substring, in source order.
    ///
    /// This is a textual containment test against the free-text sowing
    /// windows, not a calendar-interval test: callers must pass the exact
    /// month token used in the source data (see
    /// [`krishi_schemas::region::NEPALI_MONTHS`]). A profile with no
    /// window for the region never matches. Known limitation of the
    /// source format, kept for compatibility with it.
    pub fn by_month(&self, month: &str, region: Region) -> Vec<&CropProfile> {
        self.profiles()
            .iter()
            .filter(|p| p.sowing_for(region).is_some_and(|w| w.contains(month)))
            .collect()
    }

    /// Case-insensitive substring search over crop name, variety name,
    /// and remarks. Matches on any one field qualify; no ranking.
    pub fn search(&self, query: &str) -> Vec<&CropProfile> {
        let needle = query.to_lowercase();
        self.profiles()
            .iter()
            .filter(|p| {
                p.crop.to_lowercase().contains(&needle)
                    || p.variety.to_lowercase().contains(&needle)
                    || p.remarks.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// The four nutrient magnitudes for a crop, or `None` when the crop
    /// is unknown. A found crop whose magnitudes are all zero is a valid
    /// guide, distinct from absence.
    pub fn nutrient_guide(&self, crop: &str) -> Option<NutrientGuide> {
        self.profile_for_crop(crop).map(|p| NutrientGuide {
            compost: p.compost,
            nitrogen: p.nitrogen,
            phosphorus: p.phosphorus,
            potassium: p.potassium,
        })
    }
}
