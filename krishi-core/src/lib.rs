//! Data-integration and query core of the Krishi agronomic reference
//! engine.
//!
//! Four independently maintained tabular datasets (crop profiles, nutrient
//! requirements, growing seasons, soil pH) are decoded, normalized into
//! typed records, and committed once into an immutable in-memory knowledge
//! base. Queries and the agronomic calculators (fertilizer apportionment,
//! unit conversion, yield estimation) are pure, synchronous functions over
//! that base.

pub mod calc;
pub mod decode;
pub mod engine;
pub mod error;
pub mod kb;
pub mod normalize;
pub mod query;

pub use engine::{Engine, LookupResult, SourceLoader};
pub use error::KrishiError;
pub use kb::KnowledgeBase;
