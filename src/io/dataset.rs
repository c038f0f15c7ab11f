//! Stroke datasets on disk
//!
//! A dataset is a JSON object keyed by `U+XXXX`, one record per character.
//! Keys are kept sorted so repeated runs write identical files.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::character::{record_key, CharacterRecord};

/// Name of the file holding every converted set together.
pub const COMBINED_FILE: &str = "strokedata.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrokeDataset {
    records: BTreeMap<String, CharacterRecord>,
}

impl StrokeDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, replacing any earlier one for the same codepoint.
    pub fn insert(&mut self, record: CharacterRecord) -> Option<CharacterRecord> {
        self.records.insert(record.key(), record)
    }

    pub fn get(&self, codepoint: u32) -> Option<&CharacterRecord> {
        self.records.get(&record_key(codepoint))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &CharacterRecord> {
        self.records.values()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &CharacterRecord)> {
        self.records.iter()
    }

    pub fn merge(&mut self, other: &StrokeDataset) {
        for record in other.records() {
            self.insert(record.clone());
        }
    }

    pub fn rounded(self, decimals: u32) -> Self {
        Self {
            records: self
                .records
                .into_iter()
                .map(|(key, record)| (key, record.rounded(decimals)))
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize stroke data")
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Wrote {} records to {:?}", self.len(), path);
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse stroke data in {}", path.display()))
    }
}

impl FromIterator<CharacterRecord> for StrokeDataset {
    fn from_iter<I: IntoIterator<Item = CharacterRecord>>(iter: I) -> Self {
        let mut dataset = Self::new();
        for record in iter {
            dataset.insert(record);
        }
        dataset
    }
}

/// Writes converted sets into an output directory.
#[derive(Debug, Clone)]
pub struct DatasetWriter {
    output_dir: PathBuf,
    precision: Option<u32>,
}

impl DatasetWriter {
    pub fn new(output_dir: impl Into<PathBuf>, precision: Option<u32>) -> Self {
        Self {
            output_dir: output_dir.into(),
            precision,
        }
    }

    fn prepare(&self, dataset: &StrokeDataset) -> StrokeDataset {
        match self.precision {
            Some(decimals) => dataset.clone().rounded(decimals),
            None => dataset.clone(),
        }
    }

    /// Write one dataset under `file_name`, returning the full path.
    pub fn write(&self, file_name: &str, dataset: &StrokeDataset) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        self.prepare(dataset).save(&path)?;
        info!("Generated {} ({} characters)", path.display(), dataset.len());
        Ok(path)
    }

    /// Write every set into [`COMBINED_FILE`].
    pub fn write_combined<'a>(
        &self,
        datasets: impl IntoIterator<Item = &'a StrokeDataset>,
    ) -> Result<PathBuf> {
        let mut combined = StrokeDataset::new();
        for dataset in datasets {
            combined.merge(dataset);
        }
        self.write(COMBINED_FILE, &combined)
    }
}
