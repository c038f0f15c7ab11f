//! Per-character stroke assembly
//!
//! Collects the strokes of a character from its path strings, fits them
//! into the unit square as a group, attaches drawing progress, and
//! packages the result as a [`CharacterRecord`].

pub mod collector;
pub mod normalizer;
pub mod record;
pub mod timing;

pub use collector::{collect, CollectedStrokes};
pub use normalizer::{character_bounds, normalize_strokes, UnitTransform, EPSILON};
pub use record::{record_key, CharacterRecord, Stroke, StrokePoint};
pub use timing::{parameterize, progress};

use thiserror::Error;
use tracing::{debug, warn};

use crate::path::{PathError, PathInterpreter};

/// Problems found while building one character.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StrokeError {
    #[error("path {path_index}: {source}")]
    Path {
        path_index: usize,
        #[source]
        source: PathError,
    },

    #[error("path {path_index} produced no points")]
    EmptyStroke { path_index: usize },

    /// Fatal for the character: nothing drawable at all.
    #[error("U+{codepoint:04X} has no drawable strokes")]
    EmptyCharacter { codepoint: u32 },
}

/// Outcome of converting one character, with the non-fatal diagnostics
/// collected along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub result: Result<CharacterRecord, StrokeError>,
    pub diagnostics: Vec<StrokeError>,
}

/// The full path-to-record pipeline for a single character.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterPipeline {
    interpreter: PathInterpreter,
}

impl CharacterPipeline {
    pub fn new(interpreter: PathInterpreter) -> Self {
        Self { interpreter }
    }

    pub fn convert<S: AsRef<str>>(&self, codepoint: u32, symbol: char, raw_paths: &[S]) -> Conversion {
        let CollectedStrokes {
            strokes,
            diagnostics,
        } = collect(&self.interpreter, raw_paths);

        for diagnostic in &diagnostics {
            debug!("{}: {diagnostic}", record_key(codepoint));
        }

        if strokes.is_empty() {
            warn!(
                "{} ({symbol}): none of {} paths produced points",
                record_key(codepoint),
                raw_paths.len()
            );
            return Conversion {
                result: Err(StrokeError::EmptyCharacter { codepoint }),
                diagnostics,
            };
        }

        let strokes = normalize_strokes(&strokes)
            .iter()
            .map(|stroke| parameterize(stroke))
            .collect();

        Conversion {
            result: Ok(CharacterRecord::build(codepoint, symbol, strokes)),
            diagnostics,
        }
    }
}

/// Build the record for one character using the default curve sampling.
pub fn normalize<S: AsRef<str>>(
    codepoint: u32,
    symbol: char,
    raw_paths: &[S],
) -> Result<CharacterRecord, StrokeError> {
    CharacterPipeline::default()
        .convert(codepoint, symbol, raw_paths)
        .result
}
