use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::character::CharacterRecord;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetStatistics {
    pub characters: usize,
    pub strokes: usize,
    pub points: usize,
    pub min_strokes: usize,
    pub max_strokes: usize,
    pub avg_strokes: f64,
    pub avg_points_per_stroke: f64,
}

impl DatasetStatistics {
    pub fn collect<'a>(records: impl IntoIterator<Item = &'a CharacterRecord>) -> Self {
        let mut stats = Self {
            min_strokes: usize::MAX,
            ..Self::default()
        };
        for record in records {
            let strokes = record.stroke_count();
            stats.characters += 1;
            stats.strokes += strokes;
            stats.points += record.point_count();
            stats.min_strokes = stats.min_strokes.min(strokes);
            stats.max_strokes = stats.max_strokes.max(strokes);
        }
        if stats.characters == 0 {
            stats.min_strokes = 0;
            return stats;
        }
        stats.avg_strokes = stats.strokes as f64 / stats.characters as f64;
        if stats.strokes > 0 {
            stats.avg_points_per_stroke = stats.points as f64 / stats.strokes as f64;
        }
        stats
    }
}

impl fmt::Display for DatasetStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistics")?;
        writeln!(f, "  Characters:              {}", self.characters)?;
        writeln!(f, "  Strokes:                 {}", self.strokes)?;
        writeln!(f, "  Points:                  {}", self.points)?;
        writeln!(
            f,
            "  Strokes per character:   {} min, {} max, {:.2} avg",
            self.min_strokes, self.max_strokes, self.avg_strokes
        )?;
        writeln!(f, "  Points per stroke (avg): {:.2}", self.avg_points_per_stroke)
    }
}

/// Number of characters per stroke count.
pub fn stroke_histogram<'a>(
    records: impl IntoIterator<Item = &'a CharacterRecord>,
) -> BTreeMap<usize, usize> {
    let mut histogram = BTreeMap::new();
    for record in records {
        *histogram.entry(record.stroke_count()).or_insert(0) += 1;
    }
    histogram
}
