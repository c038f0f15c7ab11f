//! Fixed-grid flattening of Bézier segments
//!
//! Both curve families share one parametric grid, `i / steps` for
//! `i = 1..=steps`. The start point (`t = 0`) is never emitted because it is
//! the pen position the previous command already produced, and the final
//! step always yields the literal endpoint so chained segments meet exactly.

use kurbo::{Affine, CubicBez, ParamCurve, Point, QuadBez};

/// Number of parametric steps per curve segment unless configured otherwise.
pub const DEFAULT_CURVE_STEPS: usize = 4;

/// Curves are evaluated at this fraction of their size and scaled back.
/// Bernstein evaluation passes through terms up to three times the largest
/// control coordinate, which overflow near `f64::MAX`. A power of two keeps
/// ordinary inputs bit-identical.
const EVAL_SCALE: f64 = 0.25;

fn unscaled(p: Point) -> Point {
    (p.to_vec2() / EVAL_SCALE).to_point()
}

/// Parametric grid used for every curve command in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleGrid {
    steps: usize,
}

impl Default for SampleGrid {
    fn default() -> Self {
        Self {
            steps: DEFAULT_CURVE_STEPS,
        }
    }
}

impl SampleGrid {
    /// A grid with `steps` intervals. Zero is bumped to one, which emits
    /// only the endpoint.
    pub fn new(steps: usize) -> Self {
        Self {
            steps: steps.max(1),
        }
    }

    fn sample(&self, end: Point, eval: impl Fn(f64) -> Point, out: &mut Vec<Point>) {
        let n = self.steps;
        out.reserve(n);
        for i in 1..n {
            out.push(eval(i as f64 / n as f64));
        }
        out.push(end);
    }

    pub fn sample_cubic(&self, curve: CubicBez, out: &mut Vec<Point>) {
        let small = Affine::scale(EVAL_SCALE) * curve;
        self.sample(curve.p3, |t| unscaled(small.eval(t)), out);
    }

    pub fn sample_quad(&self, curve: QuadBez, out: &mut Vec<Point>) {
        let small = Affine::scale(EVAL_SCALE) * curve;
        self.sample(curve.p2, |t| unscaled(small.eval(t)), out);
    }
}
