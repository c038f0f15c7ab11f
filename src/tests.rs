#![allow(clippy::assertions_on_constants)]

#[cfg(test)]
mod pipeline_tests {
    use crate::character::{normalize, CharacterPipeline, StrokeError, StrokePoint};
    use crate::path::{PathInterpreter, SampleGrid};

    const TOLERANCE: f64 = 1e-6;

    /// A small mixed bag of real-looking KanjiVG strokes.
    const KANJIVG_TWO: [&str; 2] = [
        "M29.5,29.5c1.5,0.5,3.5,0.5,5,0.25c9.25-1.25,24.5-3.5,35.75-4.25c2.18-0.15,3.5,0,4.75,0.25",
        "M14.5,81.5c2,0.5,4.5,0.5,6.5,0.25c15-1.75,46.25-4.5,64.5-5.5c2.5-0.14,4,0.25,6.25,0.5",
    ];

    const HIRAGANA_A: [&str; 3] = [
        "M31.01,33.2c2.11,0.64,5.82,0.83,8.33,0.49c11.1-1.52,24.21-3.81,34.5-4.81",
        "M48.9,19.25c0.35,1.25,0.76,3.49,0.59,5.75C48.25,42,47.12,60.25,51.75,82.5",
        "M63.5,47.25c0.25,1.37,0.22,2.57-0.25,4.25C58.62,68,47,85.5,33.75,85.5 C24.5,85.5,21.5,77,27.5,70.25s22.5-10,30.5-10s19.75,3.75,20.5,13s-4,14.25-15.25,18.5",
    ];

    fn all_points(record: &crate::CharacterRecord) -> impl Iterator<Item = &StrokePoint> {
        record.strokes.iter().flat_map(|s| s.points.iter())
    }

    #[test]
    fn coordinates_stay_in_unit_square() {
        for (cp, symbol, paths) in [
            (0x4E8C, '二', &KANJIVG_TWO[..]),
            (0x3042, 'あ', &HIRAGANA_A[..]),
        ] {
            let record = normalize(cp, symbol, paths).unwrap();
            for p in all_points(&record) {
                assert!((-TOLERANCE..=1.0 + TOLERANCE).contains(&p.x), "{symbol}: x={}", p.x);
                assert!((-TOLERANCE..=1.0 + TOLERANCE).contains(&p.y), "{symbol}: y={}", p.y);
            }
        }
    }

    #[test]
    fn longer_side_spans_the_unit_range() {
        let record = normalize(0x3042, 'あ', &HIRAGANA_A).unwrap();
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (1.0f64, 0.0f64, 1.0f64, 0.0f64);
        for p in all_points(&record) {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        let span = (max_x - min_x).max(max_y - min_y);
        assert!((span - 1.0).abs() < 1e-9);
    }

    #[test]
    fn every_stroke_runs_from_zero_to_one() {
        let record = normalize(0x3042, 'あ', &HIRAGANA_A).unwrap();
        assert_eq!(record.stroke_count(), 3);
        for stroke in &record.strokes {
            assert_eq!(stroke.first().unwrap().t, 0.0);
            assert!((stroke.last().unwrap().t - 1.0).abs() < TOLERANCE);
            assert!(stroke.points.windows(2).all(|w| w[0].t < w[1].t));
        }
    }

    #[test]
    fn stroke_order_follows_input_order() {
        let forward = normalize(0x4E8C, '二', &KANJIVG_TWO).unwrap();
        let reversed = [KANJIVG_TWO[1], KANJIVG_TWO[0]];
        let backward = normalize(0x4E8C, '二', &reversed).unwrap();
        assert_eq!(forward.strokes[0], backward.strokes[1]);
        assert_eq!(forward.strokes[1], backward.strokes[0]);
    }

    #[test]
    fn curve_endpoints_are_hit_exactly() {
        let interpreter = PathInterpreter::default();
        for steps in [1, 3, 4, 7, 16] {
            let grid_interpreter = PathInterpreter::new(SampleGrid::new(steps));
            let run = &grid_interpreter.interpret(KANJIVG_TWO[0]).subpaths[0];
            let end = run.last().unwrap();
            // Start plus the relative offsets of all three segments
            assert!((end.x - 75.0).abs() < 1e-9, "steps={steps} x={}", end.x);
            assert!((end.y - 25.75).abs() < 1e-9, "steps={steps} y={}", end.y);
        }
        assert_eq!(interpreter.interpret(KANJIVG_TWO[0]).point_count(), 13);
    }

    #[test]
    fn strokes_share_one_bounding_box() {
        let square = |min: f64, max: f64| {
            format!("M{min},{min} L{max},{min} L{max},{max} L{min},{max}")
        };
        let record = normalize(0x53E3, '口', &[square(0.0, 10.0), square(5.0, 15.0)]).unwrap();
        let b = record.strokes[1].first().unwrap();
        assert!((b.x - 1.0 / 3.0).abs() < 1e-9);
        assert!((b.y - 1.0 / 3.0).abs() < 1e-9);
        let a_far = record.strokes[0].points[2];
        assert!((a_far.x - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn simple_line_and_single_point() {
        let line = normalize(0x4E00, '一', &["M0,0 L10,0"]).unwrap();
        assert_eq!(
            line.strokes[0].points,
            vec![
                StrokePoint { x: 0.0, y: 0.0, t: 0.0 },
                StrokePoint { x: 1.0, y: 0.0, t: 1.0 },
            ]
        );

        let dot = normalize(0x4E36, '丶', &["M0,0"]).unwrap();
        assert_eq!(dot.strokes[0].points, vec![StrokePoint { x: 0.0, y: 0.0, t: 0.0 }]);
    }

    #[test]
    fn coordinates_near_f64_limits_normalize() {
        let line = normalize(0x4E00, '一', &["M-1e308,0 L1e308,0"]).unwrap();
        assert_eq!(
            line.strokes[0].points,
            vec![
                StrokePoint { x: 0.0, y: 0.0, t: 0.0 },
                StrokePoint { x: 1.0, y: 0.0, t: 1.0 },
            ]
        );

        let curve = normalize(0x4E00, '一', &["M0,0 C1e308,0 1e308,0 1e308,0"]).unwrap();
        assert_eq!(curve.strokes[0].len(), 5);
        for p in all_points(&curve) {
            assert!((0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y), "{p:?}");
        }
        let json = serde_json::to_string(&curve).unwrap();
        assert!(!json.contains("null"));
    }

    #[test]
    fn unsupported_command_contributes_nothing() {
        let with_arc = normalize(0x4E00, '一', &["M0,0 L10,0 A5,5 0 0 1 20,0 L10,10"]).unwrap();
        let without = normalize(0x4E00, '一', &["M0,0 L10,0 L10,10"]).unwrap();
        assert_eq!(with_arc, without);
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        let first = normalize(0x3042, 'あ', &HIRAGANA_A).unwrap();
        let as_paths: Vec<String> = first
            .strokes
            .iter()
            .map(|stroke| {
                stroke
                    .points
                    .iter()
                    .enumerate()
                    .map(|(i, p)| format!("{}{},{}", if i == 0 { "M" } else { "L" }, p.x, p.y))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        let second = normalize(0x3042, 'あ', &as_paths).unwrap();
        for (a, b) in first.strokes.iter().zip(&second.strokes) {
            for (p, q) in a.points.iter().zip(&b.points) {
                assert!((p.x - q.x).abs() < 1e-9 && (p.y - q.y).abs() < 1e-9);
                assert_eq!(p.t, q.t);
            }
        }
    }

    #[test]
    fn nothing_drawable_is_excluded() {
        let empty: [&str; 0] = [];
        assert_eq!(
            normalize(0x4E00, '一', &empty),
            Err(StrokeError::EmptyCharacter { codepoint: 0x4E00 })
        );
    }

    #[test]
    fn conversion_is_deterministic() {
        let pipeline = CharacterPipeline::default();
        let a = pipeline.convert(0x3042, 'あ', &HIRAGANA_A);
        let b = pipeline.convert(0x3042, 'あ', &HIRAGANA_A);
        assert_eq!(a, b);
    }
}
