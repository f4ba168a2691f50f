use serde::{Deserialize, Serialize};
use std::fmt;

/// The four datasets the engine ingests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceId {
    Crops,
    Requirements,
    Growing,
    Ph,
}

impl SourceId {
    pub const ALL: [SourceId; 4] = [
        SourceId::Crops,
        SourceId::Requirements,
        SourceId::Growing,
        SourceId::Ph,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceId::Crops => "crops",
            SourceId::Requirements => "requirements",
            SourceId::Growing => "growing",
            SourceId::Ph => "ph",
        }
    }

    /// Conventional file name used by file-backed loaders.
    pub fn file_name(&self) -> &'static str {
        match self {
            SourceId::Crops => "crops.tsv",
            SourceId::Requirements => "requirements.tsv",
            SourceId::Growing => "growing.tsv",
            SourceId::Ph => "ph.tsv",
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
