//! Whole-set conversion
//!
//! Characters are independent, so a set is converted on the rayon pool and
//! the results are gathered into a sorted dataset afterwards.

use std::collections::BTreeMap;
use std::fmt;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::character::{CharacterPipeline, CharacterRecord, Conversion};
use crate::data::{CharacterEntry, CharacterSet, PathSource};
use crate::io::StrokeDataset;
use crate::qa::stroke_histogram;

/// A character that did not make it into the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Skipped {
    pub entry: CharacterEntry,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct SetResult {
    pub name: String,
    pub dataset: StrokeDataset,
    pub skipped: Vec<Skipped>,
    /// Non-fatal path diagnostics across the set
    pub diagnostics: usize,
}

enum Outcome {
    Converted(CharacterRecord, usize),
    Skipped(Skipped),
}

pub struct BatchConverter<'a> {
    pipeline: CharacterPipeline,
    source: &'a dyn PathSource,
}

impl<'a> BatchConverter<'a> {
    pub fn new(pipeline: CharacterPipeline, source: &'a dyn PathSource) -> Self {
        Self { pipeline, source }
    }

    fn convert_one(&self, entry: CharacterEntry) -> Outcome {
        let paths = match self.source.paths(entry) {
            Ok(paths) => paths,
            Err(e) => {
                warn!("Skipping {} ({}): {e}", entry.symbol, self.source.name());
                return Outcome::Skipped(Skipped {
                    entry,
                    reason: e.to_string(),
                });
            }
        };

        let Conversion {
            result,
            diagnostics,
        } = self.pipeline.convert(entry.codepoint, entry.symbol, &paths);
        match result {
            Ok(record) => {
                debug!("{} -> {} strokes", entry.symbol, record.stroke_count());
                Outcome::Converted(record, diagnostics.len())
            }
            Err(e) => Outcome::Skipped(Skipped {
                entry,
                reason: e.to_string(),
            }),
        }
    }

    /// Convert every entry. Output order does not depend on scheduling.
    pub fn convert_entries(&self, name: &str, entries: &[CharacterEntry]) -> SetResult {
        let outcomes: Vec<Outcome> = entries
            .par_iter()
            .map(|&entry| self.convert_one(entry))
            .collect();

        let mut result = SetResult {
            name: name.to_string(),
            ..SetResult::default()
        };
        for outcome in outcomes {
            match outcome {
                Outcome::Converted(record, diagnostics) => {
                    result.diagnostics += diagnostics;
                    result.dataset.insert(record);
                }
                Outcome::Skipped(skipped) => result.skipped.push(skipped),
            }
        }

        info!(
            "{}: {} converted, {} skipped",
            name,
            result.dataset.len(),
            result.skipped.len()
        );
        result
    }

    pub fn convert_set(&self, set: &CharacterSet) -> SetResult {
        self.convert_entries(set.name(), &set.entries())
    }
}

/// Run `f` on a pool with `jobs` workers, or on the global pool.
pub fn with_jobs<T: Send>(jobs: Option<usize>, f: impl FnOnce() -> T + Send) -> anyhow::Result<T> {
    match jobs {
        Some(jobs) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;
            Ok(pool.install(f))
        }
        None => Ok(f()),
    }
}

/// End-of-run summary printed by `convert`.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub sets: Vec<(String, usize, usize)>,
    pub histogram: BTreeMap<usize, usize>,
}

impl BatchSummary {
    pub fn from_results(results: &[SetResult]) -> Self {
        let mut summary = Self::default();
        for result in results {
            summary
                .sets
                .push((result.name.clone(), result.dataset.len(), result.skipped.len()));
            for (strokes, count) in stroke_histogram(result.dataset.records()) {
                *summary.histogram.entry(strokes).or_insert(0) += count;
            }
        }
        summary
    }

    pub fn converted(&self) -> usize {
        self.sets.iter().map(|(_, converted, _)| converted).sum()
    }

    pub fn skipped(&self) -> usize {
        self.sets.iter().map(|(_, _, skipped)| skipped).sum()
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Conversion Summary")?;
        for (name, converted, skipped) in &self.sets {
            writeln!(f, "  {name:<10} {converted:>4} converted, {skipped:>4} skipped")?;
        }
        writeln!(
            f,
            "  {:<10} {:>4} converted, {:>4} skipped",
            "total",
            self.converted(),
            self.skipped()
        )?;
        if !self.histogram.is_empty() {
            writeln!(f)?;
            writeln!(f, "Stroke counts")?;
            let widest = self.histogram.values().copied().max().unwrap_or(1).max(1);
            for (strokes, count) in &self.histogram {
                let bar = "#".repeat((count * 40).div_ceil(widest));
                writeln!(f, "  {strokes:>3} | {bar} {count}")?;
            }
        }
        Ok(())
    }
}
