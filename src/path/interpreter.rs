//! Executes tokenized path commands against a pen
//!
//! The pen is a small value threaded through the command stream: every
//! instruction consumes the previous [`PenState`] and returns the next one
//! together with the points it drew. Nothing is kept between path strings.

use kurbo::{CubicBez, Point, QuadBez};
use tracing::debug;

use super::error::{PathError, TokenizeError};
use super::sampling::SampleGrid;
use super::tokenizer::{RawCommand, Tokenizer};

/// A single drawing operation with its operands still in source form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    HorizontalTo(f64),
    VerticalTo(f64),
    CubicTo(Point, Point, Point),
    /// Second control point and endpoint; the first is reflected.
    SmoothCubicTo(Point, Point),
    QuadTo(Point, Point),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instruction {
    pub segment: Segment,
    /// Lower-case command: coordinates are offsets from the pen.
    pub relative: bool,
}

/// Interpreter-internal pen state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PenState {
    pub position: Point,
    /// Second control point of the immediately preceding cubic, if any.
    pub last_cubic_ctrl: Option<Point>,
}

impl PenState {
    /// State after a command that is not a cubic curve.
    pub fn interrupted(self) -> Self {
        Self {
            last_cubic_ctrl: None,
            ..self
        }
    }

    fn resolve(&self, p: Point, relative: bool) -> Point {
        if relative {
            self.position + p.to_vec2()
        } else {
            p
        }
    }

    /// First control point for a smooth cubic: the previous second control
    /// point mirrored through the pen, or the pen itself.
    pub fn reflected_ctrl(&self) -> Point {
        match self.last_cubic_ctrl {
            Some(ctrl) => self.position + (self.position - ctrl),
            None => self.position,
        }
    }

    /// Execute one instruction, returning the next state and the points drawn.
    pub fn apply(self, instruction: Instruction, grid: SampleGrid) -> (PenState, Vec<Point>) {
        let rel = instruction.relative;
        let pen = self.position;
        match instruction.segment {
            Segment::MoveTo(p) => {
                let to = self.resolve(p, rel);
                (self.at(to), vec![to])
            }
            Segment::LineTo(p) => {
                let to = self.resolve(p, rel);
                (self.at(to), vec![to])
            }
            Segment::HorizontalTo(x) => {
                let to = Point::new(if rel { pen.x + x } else { x }, pen.y);
                (self.at(to), vec![to])
            }
            Segment::VerticalTo(y) => {
                let to = Point::new(pen.x, if rel { pen.y + y } else { y });
                (self.at(to), vec![to])
            }
            Segment::CubicTo(c1, c2, end) => {
                let c1 = self.resolve(c1, rel);
                self.cubic(c1, c2, end, rel, grid)
            }
            Segment::SmoothCubicTo(c2, end) => {
                let c1 = self.reflected_ctrl();
                self.cubic(c1, c2, end, rel, grid)
            }
            Segment::QuadTo(ctrl, end) => {
                let ctrl = self.resolve(ctrl, rel);
                let end = self.resolve(end, rel);
                let mut points = Vec::new();
                grid.sample_quad(QuadBez::new(pen, ctrl, end), &mut points);
                (self.at(end), points)
            }
        }
    }

    fn cubic(
        self,
        c1: Point,
        c2: Point,
        end: Point,
        rel: bool,
        grid: SampleGrid,
    ) -> (PenState, Vec<Point>) {
        let c2 = self.resolve(c2, rel);
        let end = self.resolve(end, rel);
        let mut points = Vec::new();
        grid.sample_cubic(CubicBez::new(self.position, c1, c2, end), &mut points);
        let next = PenState {
            position: end,
            last_cubic_ctrl: Some(c2),
        };
        (next, points)
    }

    /// Pen moved by a command that is not a cubic.
    fn at(self, position: Point) -> Self {
        Self {
            position,
            last_cubic_ctrl: None,
        }
    }
}

/// Operand count per repetition for the supported letters.
fn arity(letter: char) -> Option<usize> {
    match letter.to_ascii_uppercase() {
        'M' | 'L' => Some(2),
        'H' | 'V' => Some(1),
        'C' => Some(6),
        'S' | 'Q' => Some(4),
        _ => None,
    }
}

fn segment(letter: char, repetition: usize, ops: &[f64]) -> Segment {
    let pt = |i: usize| Point::new(ops[i], ops[i + 1]);
    match letter.to_ascii_uppercase() {
        // Extra coordinate pairs after a move are implicit line-tos
        'M' if repetition == 0 => Segment::MoveTo(pt(0)),
        'M' | 'L' => Segment::LineTo(pt(0)),
        'H' => Segment::HorizontalTo(ops[0]),
        'V' => Segment::VerticalTo(ops[0]),
        'C' => Segment::CubicTo(pt(0), pt(2), pt(4)),
        'S' => Segment::SmoothCubicTo(pt(0), pt(2)),
        _ => Segment::QuadTo(pt(0), pt(2)),
    }
}

/// Split a raw command into instructions, one per complete operand group.
///
/// The error, if any, describes what stopped decoding: an unsupported letter
/// or a trailing group that is too short.
pub fn decode(raw: &RawCommand) -> (Vec<Instruction>, Option<PathError>) {
    let Some(arity) = arity(raw.letter) else {
        let error = PathError::UnsupportedCommand {
            letter: raw.letter,
            offset: raw.offset,
        };
        return (Vec::new(), Some(error));
    };

    let relative = raw.letter.is_ascii_lowercase();
    let groups = raw.operands.chunks_exact(arity);
    let remainder = groups.remainder().len();
    let instructions = groups
        .enumerate()
        .map(|(i, ops)| Instruction {
            segment: segment(raw.letter, i, ops),
            relative,
        })
        .collect();

    let error = (raw.operands.is_empty() || remainder != 0).then(|| {
        PathError::InsufficientOperands {
            letter: raw.letter,
            offset: raw.offset,
            expected: arity,
            found: remainder,
        }
    });
    (instructions, error)
}

/// Result of reading one path string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Interpretation {
    /// Non-empty point runs, one per sub-path, in drawing order.
    pub subpaths: Vec<Vec<Point>>,
    pub diagnostics: Vec<PathError>,
}

impl Interpretation {
    pub fn point_count(&self) -> usize {
        self.subpaths.iter().map(Vec::len).sum()
    }

    /// True when the string was read to the end.
    pub fn is_complete(&self) -> bool {
        !self.diagnostics.iter().any(PathError::truncates)
    }
}

/// Shared interpreter for every character set.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathInterpreter {
    grid: SampleGrid,
}

impl PathInterpreter {
    pub fn new(grid: SampleGrid) -> Self {
        Self { grid }
    }

    pub fn interpret(&self, src: &str) -> Interpretation {
        let mut pen = PenState::default();
        let mut result = Interpretation::default();

        for item in Tokenizer::new(src) {
            let raw = match item {
                Ok(raw) => raw,
                Err(e) => {
                    debug!("path truncated: {e}");
                    result.diagnostics.push(e.into());
                    break;
                }
            };

            let (instructions, fault) = decode(&raw);
            // A bad number outranks the short group it leaves behind
            let mut fault = match raw.error {
                Some(e) => Some(PathError::from(e)),
                None => fault,
            };
            for instruction in instructions {
                let starts_subpath = matches!(instruction.segment, Segment::MoveTo(_));
                let (next, points) = pen.apply(instruction, self.grid);
                if !next.position.is_finite() || !points.iter().all(|p| p.is_finite()) {
                    fault = Some(PathError::NonFinite {
                        letter: raw.letter,
                        offset: raw.offset,
                    });
                    break;
                }
                pen = next;
                if starts_subpath || result.subpaths.is_empty() {
                    result.subpaths.push(points);
                } else if let Some(current) = result.subpaths.last_mut() {
                    current.extend(points);
                }
            }

            if let Some(fault) = fault {
                debug!("{fault}");
                let stop = fault.truncates();
                result.diagnostics.push(fault);
                if stop {
                    break;
                }
                pen = pen.interrupted();
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::sampling::DEFAULT_CURVE_STEPS;

    fn interpret(src: &str) -> Interpretation {
        PathInterpreter::default().interpret(src)
    }

    fn xy(points: &[Point]) -> Vec<(f64, f64)> {
        points.iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn absolute_and_relative_lines() {
        let result = interpret("M10,10 l5,0 L0,0 h3 v-4 H7 V1");
        assert!(result.is_complete());
        assert_eq!(
            xy(&result.subpaths[0]),
            vec![
                (10.0, 10.0),
                (15.0, 10.0),
                (0.0, 0.0),
                (3.0, 0.0),
                (3.0, -4.0),
                (7.0, -4.0),
                (7.0, 1.0)
            ]
        );
    }

    #[test]
    fn extra_move_pairs_are_lines() {
        let result = interpret("m1,1 2,2 3,3");
        assert_eq!(result.subpaths.len(), 1);
        assert_eq!(xy(&result.subpaths[0]), vec![(1.0, 1.0), (3.0, 3.0), (6.0, 6.0)]);
    }

    #[test]
    fn each_move_starts_a_subpath() {
        let result = interpret("M0,0 L1,1 M5,5 L6,6 m1,0");
        assert_eq!(result.subpaths.len(), 3);
        assert_eq!(xy(&result.subpaths[1]), vec![(5.0, 5.0), (6.0, 6.0)]);
        assert_eq!(xy(&result.subpaths[2]), vec![(7.0, 6.0)]);
    }

    #[test]
    fn cubic_ends_on_literal_endpoint() {
        let result = interpret("M3.3,4.4 C10.1,20.2 30.3,-5.5 47.77,13.13");
        let stroke = &result.subpaths[0];
        assert_eq!(stroke.len(), 1 + DEFAULT_CURVE_STEPS);
        let last = stroke[stroke.len() - 1];
        assert!((last.x - 47.77).abs() < 1e-9);
        assert!((last.y - 13.13).abs() < 1e-9);
    }

    #[test]
    fn relative_cubic_controls_use_start_pen() {
        let abs = interpret("M10,10 C11,12 13,14 15,16");
        let rel = interpret("M10,10 c1,2 3,4 5,6");
        assert_eq!(abs.subpaths, rel.subpaths);
    }

    #[test]
    fn smooth_cubic_reflects_previous_control() {
        let smooth = interpret("M0,0 C0,10 10,10 10,0 S20,-10 20,0");
        // Reflection of (10,10) about (10,0) is (10,-10)
        let explicit = interpret("M0,0 C0,10 10,10 10,0 C10,-10 20,-10 20,0");
        assert_eq!(smooth.subpaths, explicit.subpaths);
    }

    #[test]
    fn relative_smooth_cubic() {
        let smooth = interpret("M0,0 c0,10 10,10 10,0 s10,-10 10,0");
        let explicit = interpret("M0,0 C0,10 10,10 10,0 C10,-10 20,-10 20,0");
        assert_eq!(smooth.subpaths.len(), 1);
        for (a, b) in smooth.subpaths[0].iter().zip(&explicit.subpaths[0]) {
            assert!((a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9);
        }
    }

    #[test]
    fn smooth_cubic_without_previous_cubic_uses_pen() {
        let smooth = interpret("M0,0 L5,5 S10,10 15,5");
        let explicit = interpret("M0,0 L5,5 C5,5 10,10 15,5");
        assert_eq!(smooth.subpaths, explicit.subpaths);

        let after_quad = interpret("M0,0 Q5,5 10,0 S15,5 20,0");
        let explicit = interpret("M0,0 Q5,5 10,0 C10,0 15,5 20,0");
        assert_eq!(after_quad.subpaths, explicit.subpaths);
    }

    #[test]
    fn curve_families_share_the_grid() {
        let cubic = interpret("M0,0 C1,1 2,1 3,0");
        let smooth = interpret("M0,0 S2,1 3,0");
        let quad = interpret("M0,0 Q1,1 3,0");
        assert_eq!(cubic.point_count(), smooth.point_count());
        assert_eq!(cubic.point_count(), quad.point_count());
    }

    #[test]
    fn custom_grid() {
        let result = PathInterpreter::new(SampleGrid::new(10)).interpret("M0,0 Q5,5 10,0");
        assert_eq!(result.point_count(), 11);
    }

    #[test]
    fn unsupported_command_contributes_nothing() {
        let result = interpret("M0,0 L10,0 A5,5 0 0 1 20,20 L10,10");
        assert_eq!(xy(&result.subpaths[0]), vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        assert!(result.is_complete());
        assert!(matches!(
            result.diagnostics[..],
            [PathError::UnsupportedCommand { letter: 'A', .. }]
        ));
    }

    #[test]
    fn unsupported_command_resets_reflection() {
        let result = interpret("M0,0 C0,10 10,10 10,0 Z S20,-10 20,0");
        let explicit = interpret("M0,0 C0,10 10,10 10,0 C10,0 20,-10 20,0");
        assert_eq!(result.subpaths, explicit.subpaths);
    }

    #[test]
    fn short_operand_group_truncates() {
        let result = interpret("M0,0 L10,0 20 L5,5");
        assert_eq!(xy(&result.subpaths[0]), vec![(0.0, 0.0), (10.0, 0.0)]);
        assert!(!result.is_complete());
        assert_eq!(
            result.diagnostics,
            vec![PathError::InsufficientOperands {
                letter: 'L',
                offset: 5,
                expected: 2,
                found: 1
            }]
        );
    }

    #[test]
    fn bare_command_letter_truncates() {
        let result = interpret("M1,1 C L5,5");
        assert_eq!(result.point_count(), 1);
        assert!(!result.is_complete());
    }

    #[test]
    fn tokenize_error_keeps_earlier_points() {
        let result = interpret("M0,0 L1,1 L2,. L3,3");
        assert_eq!(xy(&result.subpaths[0]), vec![(0.0, 0.0), (1.0, 1.0)]);
        assert!(matches!(result.diagnostics[..], [PathError::Tokenize(_)]));
    }

    #[test]
    fn bad_number_keeps_complete_groups_of_its_command() {
        let result = interpret("M0,0 L10,0 20,-");
        assert_eq!(xy(&result.subpaths[0]), vec![(0.0, 0.0), (10.0, 0.0)]);
        assert!(matches!(
            result.diagnostics[..],
            [PathError::Tokenize(TokenizeError::InvalidNumber { offset: 15, .. })]
        ));
    }

    #[test]
    fn overflowing_sum_truncates() {
        let result = interpret("M1e308,0 l1e308,0 L5,5");
        assert_eq!(xy(&result.subpaths[0]), vec![(1e308, 0.0)]);
        assert_eq!(
            result.diagnostics,
            vec![PathError::NonFinite { letter: 'l', offset: 9 }]
        );
    }

    #[test]
    fn extreme_curve_samples_stay_finite() {
        let result = interpret("M0,0 C1e308,0 1e308,0 1e308,0");
        assert!(result.is_complete());
        assert_eq!(result.point_count(), 1 + DEFAULT_CURVE_STEPS);
        assert!(result.subpaths[0].iter().all(|p| p.is_finite()));
    }

    #[test]
    fn nothing_drawable() {
        assert!(interpret("").subpaths.is_empty());
        assert!(interpret("Z").subpaths.is_empty());
        assert!(interpret("M").subpaths.is_empty());
    }

    #[test]
    fn pen_fold_is_explicit() {
        let pen = PenState::default();
        let (pen, drawn) = pen.apply(
            Instruction {
                segment: Segment::CubicTo(
                    Point::new(0.0, 1.0),
                    Point::new(1.0, 1.0),
                    Point::new(1.0, 0.0),
                ),
                relative: false,
            },
            SampleGrid::default(),
        );
        assert_eq!(drawn.len(), DEFAULT_CURVE_STEPS);
        assert_eq!(pen.position, Point::new(1.0, 0.0));
        assert_eq!(pen.reflected_ctrl(), Point::new(1.0, -1.0));
        assert_eq!(pen.interrupted().reflected_ctrl(), pen.position);
    }

    #[test]
    fn quad_after_line_forgets_cubic_ctrl() {
        let grid = SampleGrid::default();
        let step = |pen: PenState, segment| pen.apply(Instruction { segment, relative: false }, grid).0;
        let pen = step(PenState::default(), Segment::MoveTo(Point::new(5.0, 5.0)));
        let pen = step(pen, Segment::CubicTo(Point::new(6.0, 0.0), Point::new(9.0, 0.0), Point::new(10.0, 10.0)));
        assert_eq!(pen.last_cubic_ctrl, Some(Point::new(9.0, 0.0)));
        let pen = step(pen, Segment::QuadTo(Point::new(12.0, 0.0), Point::new(20.0, 10.0)));
        assert_eq!(pen.last_cubic_ctrl, None);
        assert_eq!(pen.position, Point::new(20.0, 10.0));
    }
}
