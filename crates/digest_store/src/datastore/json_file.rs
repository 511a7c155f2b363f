use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{datastore::RecordStore, VideoRecord};

/// Persists records as a single pretty-printed JSON array.
///
/// The document is staged in a temporary file next to the target and renamed
/// over it, so readers only ever see a complete document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub const DEFAULT_PATH: &str = "zad-academy_llm.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn render(records: &[VideoRecord]) -> anyhow::Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records
            .serialize(&mut ser)
            .context("Failed to serialize video records")?;
        Ok(buf)
    }

    fn write_atomically(&self, contents: &[u8]) -> anyhow::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut staged = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
        staged.write_all(contents)?;
        staged.as_file().sync_all()?;
        staged
            .persist(&self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        Ok(())
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PATH)
    }
}

impl RecordStore for JsonFileStore {
    #[tracing::instrument(skip_all, fields(path = %self.path.display(), count = records.len()))]
    async fn save_records(&self, records: &[VideoRecord]) -> anyhow::Result<()> {
        let contents = Self::render(records)?;

        self.write_atomically(&contents)
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to write output document"))?;

        tracing::info!("Saved video summaries to {}", self.path.display());
        Ok(())
    }
}
