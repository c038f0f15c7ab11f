//! Gathers the strokes of one character from its path strings

use kurbo::Point;

use super::StrokeError;
use crate::path::PathInterpreter;

/// Raw strokes for one character plus anything worth reporting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectedStrokes {
    /// Working-space strokes in source order. Never contains an empty run.
    pub strokes: Vec<Vec<Point>>,
    pub diagnostics: Vec<StrokeError>,
}

/// Interpret each path string with a fresh pen and append its sub-paths.
///
/// The order of `paths` is the stroke order of the character and is kept
/// as-is. A path string that draws nothing is reported and left out.
pub fn collect<S: AsRef<str>>(interpreter: &PathInterpreter, paths: &[S]) -> CollectedStrokes {
    let mut collected = CollectedStrokes::default();

    for (path_index, path) in paths.iter().enumerate() {
        let interpretation = interpreter.interpret(path.as_ref());
        collected
            .diagnostics
            .extend(interpretation.diagnostics.into_iter().map(|source| {
                StrokeError::Path { path_index, source }
            }));

        if interpretation.subpaths.is_empty() {
            collected
                .diagnostics
                .push(StrokeError::EmptyStroke { path_index });
            continue;
        }
        collected.strokes.extend(interpretation.subpaths);
    }

    collected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_source_order() {
        let paths = ["M0,0 L1,0", "M0,5 L1,5", "M0,2 L1,2"];
        let collected = collect(&PathInterpreter::default(), &paths);
        let starts: Vec<f64> = collected.strokes.iter().map(|s| s[0].y).collect();
        assert_eq!(starts, vec![0.0, 5.0, 2.0]);
        assert!(collected.diagnostics.is_empty());
    }

    #[test]
    fn drops_empty_paths() {
        let paths = ["M0,0 L1,0", "Z", "", "M3,3"];
        let collected = collect(&PathInterpreter::default(), &paths);
        assert_eq!(collected.strokes.len(), 2);
        assert!(collected
            .diagnostics
            .contains(&StrokeError::EmptyStroke { path_index: 1 }));
        assert!(collected
            .diagnostics
            .contains(&StrokeError::EmptyStroke { path_index: 2 }));
    }

    #[test]
    fn move_inside_a_path_splits_it() {
        let collected = collect(&PathInterpreter::default(), &["M0,0 L1,1 M2,2 L3,3"]);
        assert_eq!(collected.strokes.len(), 2);
    }

    #[test]
    fn pen_does_not_leak_between_paths() {
        let collected = collect(&PathInterpreter::default(), &["M10,10", "m1,1"]);
        assert_eq!(collected.strokes[1][0], Point::new(1.0, 1.0));
    }
}
