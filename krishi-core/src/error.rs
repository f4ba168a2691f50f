use krishi_schemas::{source::SourceId, unit::UnitCategory};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KrishiError {
    #[error("source '{0}' could not be loaded")]
    SourceUnavailable(SourceId, #[source] anyhow::Error),

    #[error("initialization finished with unavailable sources: {0:?}")]
    PartialLoad(Vec<SourceId>),

    #[error("crop '{0}' not found")]
    CropNotFound(String),

    #[error("unknown {category} unit '{unit}'")]
    UnknownUnit { unit: String, category: UnitCategory },

    #[error("unit '{unit}' is a {actual} unit, cannot convert it as {requested}")]
    UnitMismatch {
        unit: String,
        requested: UnitCategory,
        actual: UnitCategory,
    },
}
