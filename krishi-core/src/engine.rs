//! The engine handle: owns the loaded knowledge base and re-exposes the
//! query and calculator operations to callers.
//!
//! Initialization is idempotent and single-flight. The handle is built
//! empty by whichever collaborator controls process startup and shared by
//! reference; the one-shot slot commits all four collections atomically,
//! so readers observe either the empty pre-init state or the fully
//! populated one, never a partial mix.

use crate::{
    calc::{fertilizer, harvest, units::UnitRegistry},
    error::KrishiError,
    kb::KnowledgeBase,
    normalize,
};
use krishi_schemas::{
    crop::CropProfile,
    fertilizer::{FertilizerPlan, NutrientGuide},
    growing::GrowingInfoRecord,
    ph::PhRecord,
    region::Region,
    requirement::RequirementRecord,
    source::SourceId,
    unit::UnitCategory,
};
use serde::Serialize;
use std::sync::OnceLock;
use tracing::{info, warn};

/// Supplies raw source text for a dataset. The engine does not care
/// whether the text comes from bundled resources, the filesystem, or a
/// network fetch.
pub trait SourceLoader {
    fn load_source_text(&self, source: SourceId) -> anyhow::Result<String>;
}

/// Everything a `(crop, variety)` key resolves to across the three crop
/// collections. The collections are sourced independently, so any subset
/// may be present.
#[derive(Debug, Serialize)]
pub struct LookupResult<'a> {
    pub profile: Option<&'a CropProfile>,
    pub requirement: Option<&'a RequirementRecord>,
    pub growing: Option<&'a GrowingInfoRecord>,
}

struct Loaded {
    kb: KnowledgeBase,
    failed: Vec<SourceId>,
}

#[derive(Default)]
pub struct Engine {
    units: UnitRegistry,
    loaded: OnceLock<Loaded>,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            units: UnitRegistry::builtin(),
            loaded: OnceLock::new(),
        }
    }

    /// Loads and commits the four sources. At most one load ever runs:
    /// concurrent callers block on the winner and every later call is a
    /// no-op reporting the stored outcome. A source that cannot be
    /// obtained degrades to an empty collection and marks the
    /// initialization failed overall, but the engine stays usable with
    /// whatever did load.
    pub fn initialize(&self, loader: &dyn SourceLoader) -> Result<(), KrishiError> {
        let loaded = self.loaded.get_or_init(|| Self::load(loader));
        if loaded.failed.is_empty() {
            Ok(())
        } else {
            Err(KrishiError::PartialLoad(loaded.failed.clone()))
        }
    }

    pub fn is_ready(&self) -> bool {
        self.loaded.get().is_some()
    }

    fn load(loader: &dyn SourceLoader) -> Loaded {
        let mut failed = Vec::new();
        let mut fetch = |source: SourceId| {
            loader.load_source_text(source).unwrap_or_else(|cause| {
                let err = KrishiError::SourceUnavailable(source, cause);
                warn!(error = %err, "continuing with an empty collection");
                failed.push(source);
                String::new()
            })
        };

        let profiles = normalize::crop_profiles(&fetch(SourceId::Crops));
        let requirements = normalize::requirements(&fetch(SourceId::Requirements));
        let growing = normalize::growing_info(&fetch(SourceId::Growing));
        let ph = normalize::ph_records(&fetch(SourceId::Ph));

        info!(
            crops = profiles.len(),
            requirements = requirements.len(),
            growing = growing.len(),
            ph = ph.len(),
            "knowledge base loaded"
        );

        Loaded {
            kb: KnowledgeBase::from_sources(profiles, requirements, growing, ph),
            failed,
        }
    }

    fn kb(&self) -> Option<&KnowledgeBase> {
        self.loaded.get().map(|loaded| &loaded.kb)
    }

    pub fn units(&self) -> &UnitRegistry {
        &self.units
    }

    pub fn list_crops(&self) -> Vec<String> {
        self.kb().map(KnowledgeBase::crop_names).unwrap_or_default()
    }

    pub fn varieties(&self, crop: &str) -> Vec<String> {
        self.kb().map(|kb| kb.varieties(crop)).unwrap_or_default()
    }

    /// Key lookup across the three crop collections at once. `None` when
    /// no collection knows the key.
    pub fn lookup(&self, crop: &str, variety: Option<&str>) -> Option<LookupResult<'_>> {
        let kb = self.kb()?;
        let result = LookupResult {
            profile: kb.profile(crop, variety),
            requirement: kb.requirement(crop, variety),
            growing: kb.growing_record(crop, variety),
        };
        if result.profile.is_none() && result.requirement.is_none() && result.growing.is_none() {
            None
        } else {
            Some(result)
        }
    }

    pub fn lookup_ph(&self, vegetable: &str) -> Option<&PhRecord> {
        self.kb()?.ph_record(vegetable)
    }

    pub fn by_month(&self, month: &str, region: Region) -> Vec<&CropProfile> {
        self.kb()
            .map(|kb| kb.by_month(month, region))
            .unwrap_or_default()
    }

    pub fn search(&self, query: &str) -> Vec<&CropProfile> {
        self.kb().map(|kb| kb.search(query)).unwrap_or_default()
    }

    pub fn nutrient_guide(&self, crop: &str) -> Option<NutrientGuide> {
        self.kb()?.nutrient_guide(crop)
    }

    pub fn convert_unit(
        &self,
        value: f64,
        from: &str,
        to: &str,
        category: UnitCategory,
    ) -> Result<f64, KrishiError> {
        self.units.convert(value, from, to, category)
    }

    /// Product masses covering `crop`'s requirements on `land_ropani` of
    /// land, or `CropNotFound` when the crop is unknown.
    pub fn fertilizer_plan(
        &self,
        crop: &str,
        land_ropani: f64,
    ) -> Result<FertilizerPlan, KrishiError> {
        let guide = self
            .nutrient_guide(crop)
            .ok_or_else(|| KrishiError::CropNotFound(crop.to_string()))?;
        Ok(fertilizer::plan(&guide, land_ropani))
    }

    /// Expected total output mass for `crop` on `land` units of land.
    /// Unknown crops estimate from the fallback figure rather than
    /// failing.
    pub fn estimate_yield(&self, crop: &str, land: f64) -> f64 {
        let text = self
            .kb()
            .and_then(|kb| kb.profile_for_crop(crop))
            .map(|p| p.yield_range.as_str())
            .unwrap_or("");
        harvest::estimate_yield(text, land)
    }
}
