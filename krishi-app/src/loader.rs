use anyhow::{Context, Result};
use krishi_core::SourceLoader;
use krishi_schemas::source::SourceId;
use std::fs;
use std::path::PathBuf;

/// Loads source tables from files in a single directory, one file per
/// source under its conventional name.
pub struct DirLoader {
    root: PathBuf,
}

impl DirLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SourceLoader for DirLoader {
    fn load_source_text(&self, source: SourceId) -> Result<String> {
        let path = self.root.join(source.file_name());
        fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))
    }
}
