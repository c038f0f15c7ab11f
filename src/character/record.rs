//! Finished per-character stroke records
//!
//! These are the values handed to serialization. Field names match the
//! JSON consumed by the trainer apps: `character`, `codepoint`, `strokes`,
//! and `x`/`y`/`t` for each point.

use serde::{Deserialize, Serialize};

/// A normalized point with its progress along the stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokePoint {
    pub x: f64,
    pub y: f64,
    pub t: f64,
}

/// One pen stroke, serialized as a bare list of points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stroke {
    pub points: Vec<StrokePoint>,
}

impl Stroke {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&StrokePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&StrokePoint> {
        self.points.last()
    }
}

/// Every stroke of one character, in drawing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    #[serde(rename = "character")]
    pub symbol: char,
    pub codepoint: u32,
    pub strokes: Vec<Stroke>,
}

impl CharacterRecord {
    /// Assemble a record. Stroke order is kept exactly as given.
    pub fn build(codepoint: u32, symbol: char, strokes: Vec<Stroke>) -> Self {
        Self {
            symbol,
            codepoint,
            strokes,
        }
    }

    pub fn key(&self) -> String {
        record_key(self.codepoint)
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }

    /// Round every coordinate and `t` to `decimals` places.
    pub fn rounded(mut self, decimals: u32) -> Self {
        let factor = 10f64.powi(decimals as i32);
        let round = |v: f64| (v * factor).round() / factor;
        for point in self.strokes.iter_mut().flat_map(|s| s.points.iter_mut()) {
            point.x = round(point.x);
            point.y = round(point.y);
            point.t = round(point.t);
        }
        self
    }
}

/// Output key for a codepoint: `U+` and at least four upper-case hex digits.
pub fn record_key(codepoint: u32) -> String {
    format!("U+{codepoint:04X}")
}
