//! Hanzi Writer character documents
//!
//! Each document carries outline paths and a median polyline per stroke.
//! Only the medians are read. They are what a learner traces, so they are turned into plain
//! `M … L …` path strings and fed through the same interpreter as
//! KanjiVG data.

use std::path::PathBuf;

use serde::Deserialize;

use super::charsets::CharacterEntry;
use super::source::{PathSource, SourceError};

/// Hanzi Writer draws with y pointing up from a baseline at 900.
pub const BASELINE: f64 = 900.0;

#[derive(Debug, Clone, Deserialize)]
pub struct HanziWriterDocument {
    pub medians: Vec<Vec<[f64; 2]>>,
}

impl HanziWriterDocument {
    /// One path string per median, flipped into y-down coordinates.
    pub fn median_paths(&self) -> Vec<String> {
        self.medians
            .iter()
            .filter(|median| !median.is_empty())
            .map(|median| median_to_path(median))
            .collect()
    }
}

fn median_to_path(median: &[[f64; 2]]) -> String {
    let mut path = String::new();
    for (i, [x, y]) in median.iter().enumerate() {
        if i > 0 {
            path.push(' ');
        }
        path.push(if i == 0 { 'M' } else { 'L' });
        path.push_str(&format!("{x},{}", BASELINE - y));
    }
    path
}

/// Document file name: the character itself.
pub fn file_name(symbol: char) -> String {
    format!("{symbol}.json")
}

/// A directory of downloaded Hanzi Writer files.
#[derive(Debug, Clone)]
pub struct HanziWriterDir {
    root: PathBuf,
}

impl HanziWriterDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn load(&self, entry: CharacterEntry) -> Result<HanziWriterDocument, SourceError> {
        let path = self.root.join(file_name(entry.symbol));
        let text = super::source::read_cached(&path, entry.codepoint)?;
        serde_json::from_str(&text).map_err(|source| SourceError::Json { path, source })
    }
}

impl PathSource for HanziWriterDir {
    fn name(&self) -> &str {
        "hanzi-writer"
    }

    fn paths(&self, entry: CharacterEntry) -> Result<Vec<String>, SourceError> {
        Ok(self.load(entry)?.median_paths())
    }
}
