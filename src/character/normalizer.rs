//! Character-level normalization into the unit square
//!
//! One bounding box is measured over every point of every stroke and one
//! transform derived from it is applied to all of them, so strokes keep
//! their positions relative to each other. The longer side spans `[0, 1]`
//! and the shorter side is centered.

use kurbo::{Point, Rect, Vec2};

/// Floor for box extents so single points and straight lines don't divide
/// by zero.
pub const EPSILON: f64 = 1e-9;

/// Box over the union of all points, or `None` when there are none.
pub fn character_bounds(strokes: &[Vec<Point>]) -> Option<Rect> {
    let mut points = strokes.iter().flatten();
    let first = *points.next()?;
    Some(points.fold(Rect::from_points(first, first), |bounds, p| {
        bounds.union_pt(*p)
    }))
}

/// Shared mapping from working space into the unit square.
///
/// Everything is stored at half size: `max / 2 - min / 2` stays finite for
/// any two finite coordinates where `max - min` can overflow. Halving is
/// exact, so the ratios come out the same.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitTransform {
    origin: Point,
    offset: Vec2,
    scale: f64,
}

fn halved(p: Point) -> Point {
    Point::new(p.x / 2.0, p.y / 2.0)
}

impl UnitTransform {
    pub fn fit(bounds: Rect) -> Self {
        let (min, max) = (halved(bounds.origin()), halved(Point::new(bounds.x1, bounds.y1)));
        let floor = EPSILON / 2.0;
        let (raw_width, raw_height) = (max.x - min.x, max.y - min.y);
        let width = raw_width.max(floor);
        let height = raw_height.max(floor);
        let scale = width.max(height);

        // A flat axis stays at the origin instead of being centered on its
        // floored extent.
        let centering = |raw: f64, extent: f64| {
            if raw < floor {
                0.0
            } else {
                (scale - extent) / 2.0
            }
        };

        Self {
            origin: min,
            offset: Vec2::new(centering(raw_width, width), centering(raw_height, height)),
            scale,
        }
    }

    pub fn apply(&self, p: Point) -> Point {
        let p = halved(p);
        let map = |v: f64, min: f64, offset: f64| ((v - min + offset) / self.scale).clamp(0.0, 1.0);
        Point::new(
            map(p.x, self.origin.x, self.offset.x),
            map(p.y, self.origin.y, self.offset.y),
        )
    }
}

/// Map every stroke of a character through the same transform.
pub fn normalize_strokes(strokes: &[Vec<Point>]) -> Vec<Vec<Point>> {
    let Some(bounds) = character_bounds(strokes) else {
        return Vec::new();
    };
    let transform = UnitTransform::fit(bounds);
    strokes
        .iter()
        .map(|stroke| stroke.iter().map(|&p| transform.apply(p)).collect())
        .collect()
}
