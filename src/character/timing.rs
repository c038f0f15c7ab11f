//! Drawing-progress parameter for stroke points
//!
//! `t` is spread evenly over point indices, not arc length, so curves
//! sampled on the fixed grid animate at the same rate as straight runs.

use kurbo::Point;

use super::record::{Stroke, StrokePoint};

/// Progress of point `index` in a run of `count` points.
pub fn progress(index: usize, count: usize) -> f64 {
    if count <= 1 {
        0.0
    } else {
        index as f64 / (count - 1) as f64
    }
}

/// Attach `t` to every point of a normalized stroke.
pub fn parameterize(points: &[Point]) -> Stroke {
    let count = points.len();
    Stroke {
        points: points
            .iter()
            .enumerate()
            .map(|(i, p)| StrokePoint {
                x: p.x,
                y: p.y,
                t: progress(i, count),
            })
            .collect(),
    }
}
