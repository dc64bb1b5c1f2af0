//! # Flattening Tests

use super::curve::{flatten_adaptive, flatten_uniform, Curve};
use super::*;

fn segment_distance(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

fn polyline_distance(p: DVec2, polyline: &[DVec2]) -> f64 {
    polyline
        .windows(2)
        .map(|w| segment_distance(p, w[0], w[1]))
        .fold(f64::INFINITY, f64::min)
}

fn adaptive_polyline(curve: &Curve, tolerance: f64, budget: u32) -> Vec<DVec2> {
    let mut points = vec![curve.from()];
    flatten_adaptive(curve, tolerance, budget, |p| points.push(p));
    points
}

fn line_points(path: &FlattenedPath) -> Vec<DVec2> {
    path.commands()
        .iter()
        .filter_map(|c| match c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            _ => None,
        })
        .collect()
}

#[test]
fn test_quad_eval_endpoints_and_midpoint() {
    let curve = Curve::Quad {
        from: DVec2::new(0.0, 0.0),
        ctrl: DVec2::new(1.0, 2.0),
        to: DVec2::new(2.0, 0.0),
    };
    assert_eq!(curve.eval(0.0), DVec2::new(0.0, 0.0));
    assert_eq!(curve.eval(1.0), DVec2::new(2.0, 0.0));
    assert_eq!(curve.eval(0.5), DVec2::new(1.0, 1.0));
}

#[test]
fn test_cubic_eval_midpoint() {
    let curve = Curve::Cubic {
        from: DVec2::new(0.0, 0.0),
        ctrl1: DVec2::new(0.0, 4.0),
        ctrl2: DVec2::new(4.0, 4.0),
        to: DVec2::new(4.0, 0.0),
    };
    assert_eq!(curve.eval(0.5), DVec2::new(2.0, 3.0));
}

#[test]
fn test_adaptive_quad_within_tolerance() {
    let curves = [
        Curve::Quad {
            from: DVec2::new(0.0, 0.0),
            ctrl: DVec2::new(50.0, 100.0),
            to: DVec2::new(100.0, 0.0),
        },
        Curve::Quad {
            from: DVec2::new(-3.0, 7.0),
            ctrl: DVec2::new(40.0, -12.0),
            to: DVec2::new(1.0, 30.0),
        },
        Curve::Quad {
            from: DVec2::new(0.0, 0.0),
            ctrl: DVec2::new(1000.0, 0.0),
            to: DVec2::new(0.0, 1.0),
        },
    ];

    for tolerance in [1.0, 0.1, 0.01] {
        for curve in &curves {
            let polyline = adaptive_polyline(curve, tolerance, 200);
            for i in 0..=2000 {
                let p = curve.eval(i as f64 / 2000.0);
                let d = polyline_distance(p, &polyline);
                assert!(
                    d <= tolerance + 1e-9,
                    "deviation {d} exceeds tolerance {tolerance} for {curve:?}"
                );
            }
        }
    }
}

#[test]
fn test_adaptive_s_cubic_within_tolerance() {
    // The lobes of the S peak away from the middle of each candidate chord.
    let curve = Curve::Cubic {
        from: DVec2::new(0.0, 0.0),
        ctrl1: DVec2::new(0.0, 100.0),
        ctrl2: DVec2::new(100.0, -100.0),
        to: DVec2::new(100.0, 0.0),
    };
    for tolerance in [1.0, 0.1] {
        let polyline = adaptive_polyline(&curve, tolerance, 200);
        for i in 0..=4000 {
            let p = curve.eval(i as f64 / 4000.0);
            let d = polyline_distance(p, &polyline);
            assert!(d <= tolerance + 1e-9, "deviation {d} exceeds tolerance {tolerance}");
        }
    }
}

#[test]
fn test_segment_matches_curve_between_parameters() {
    let curves = [
        Curve::Quad {
            from: DVec2::new(0.0, 0.0),
            ctrl: DVec2::new(4.0, 9.0),
            to: DVec2::new(10.0, 1.0),
        },
        Curve::Cubic {
            from: DVec2::new(0.0, 0.0),
            ctrl1: DVec2::new(0.0, 100.0),
            ctrl2: DVec2::new(100.0, -100.0),
            to: DVec2::new(100.0, 0.0),
        },
    ];
    for curve in &curves {
        let piece = curve.segment(0.25, 0.75);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let expected = curve.eval(0.25 + 0.5 * t);
            assert!(piece.eval(t).distance(expected) < 1e-9);
        }
    }
}

#[test]
fn test_chord_error_of_straight_curves_is_zero() {
    let quad = Curve::Quad {
        from: DVec2::ZERO,
        ctrl: DVec2::new(1.0, 1.0),
        to: DVec2::new(2.0, 2.0),
    };
    let cubic = Curve::Cubic {
        from: DVec2::ZERO,
        ctrl1: DVec2::new(1.0, 0.0),
        ctrl2: DVec2::new(2.0, 0.0),
        to: DVec2::new(3.0, 0.0),
    };
    assert_eq!(quad.chord_error_sq(), 0.0);
    assert_eq!(cubic.chord_error_sq(), 0.0);
}

#[test]
fn test_adaptive_ends_exactly_at_curve_end() {
    let curve = Curve::Quad {
        from: DVec2::new(0.1, 0.2),
        ctrl: DVec2::new(3.3, 9.7),
        to: DVec2::new(7.1, 0.3),
    };
    let polyline = adaptive_polyline(&curve, 0.05, 20);
    assert_eq!(*polyline.last().unwrap(), curve.to());
}

#[test]
fn test_tighter_tolerance_emits_more_segments() {
    let curve = Curve::Quad {
        from: DVec2::ZERO,
        ctrl: DVec2::new(50.0, 100.0),
        to: DVec2::new(100.0, 0.0),
    };
    let coarse = adaptive_polyline(&curve, 1.0, 20).len();
    let fine = adaptive_polyline(&curve, 0.01, 20).len();
    assert!(fine > coarse);
}

#[test]
fn test_straight_quad_needs_two_segments() {
    // A collinear control point has zero deviation; the first candidate at
    // t = 0.5 and the follow-up at t = 1.0 are both accepted.
    let curve = Curve::Quad {
        from: DVec2::ZERO,
        ctrl: DVec2::new(1.0, 0.0),
        to: DVec2::new(2.0, 0.0),
    };
    let polyline = adaptive_polyline(&curve, 0.1, 20);
    assert_eq!(polyline.len(), 3);
}

#[test]
fn test_budget_exhaustion_terminates() {
    let curve = Curve::Quad {
        from: DVec2::ZERO,
        ctrl: DVec2::new(1.0e6, 1.0e6),
        to: DVec2::new(2.0e6, 0.0),
    };
    let mut count = 0;
    let converged = flatten_adaptive(&curve, 1e-12, 3, |_| count += 1);
    assert!(!converged);
    assert!(count > 0);
}

#[test]
fn test_uniform_emits_fixed_segment_count() {
    let curve = Curve::Quad {
        from: DVec2::ZERO,
        ctrl: DVec2::new(1.0, 1.0),
        to: DVec2::new(2.0, 0.0),
    };
    let mut points = Vec::new();
    flatten_uniform(&curve, 5, |p| points.push(p));
    assert_eq!(points.len(), 5);
    assert_eq!(points[4], curve.to());
    assert_eq!(points[0], curve.eval(0.2));
}

#[test]
fn test_flatten_line_only_path_is_identity() {
    let mut path = OutlinePath::new();
    path.move_to(DVec2::new(0.0, 0.0))
        .line_to(DVec2::new(4.0, 0.0))
        .line_to(DVec2::new(4.0, 3.0))
        .close()
        .move_to(DVec2::new(1.0, 1.0))
        .line_to(DVec2::new(2.0, 1.0))
        .line_to(DVec2::new(1.0, 2.0))
        .close();

    for policy in [FlattenPolicy::GLYPH, FlattenPolicy::VECTOR_ART] {
        let flat = flatten(&path, policy, 0.1, Subdivision::Adaptive);
        assert_eq!(flat.path.as_path(), &path);
        assert!(flat.diagnostics.is_empty());
    }
}

#[test]
fn test_flatten_removes_all_curves() {
    let mut path = OutlinePath::new();
    path.move_to(DVec2::ZERO)
        .quad_to(DVec2::new(5.0, 5.0), DVec2::new(10.0, 0.0))
        .cubic_to(DVec2::new(10.0, -5.0), DVec2::new(0.0, -5.0), DVec2::ZERO)
        .close();
    let flat = flatten(&path, FlattenPolicy::VECTOR_ART, 0.05, Subdivision::Adaptive);
    assert!(flat.path.as_path().is_flat());
    assert!(flat.diagnostics.is_empty());
    assert!(flat.path.commands().len() > 4);
}

#[test]
fn test_glyph_policy_drops_cubics_with_diagnostic() {
    let mut path = OutlinePath::new();
    path.move_to(DVec2::ZERO)
        .line_to(DVec2::new(10.0, 0.0))
        .cubic_to(DVec2::new(10.0, 5.0), DVec2::new(5.0, 10.0), DVec2::new(0.0, 10.0))
        .close();
    let flat = flatten(&path, FlattenPolicy::GLYPH, 0.1, Subdivision::Adaptive);

    assert_eq!(flat.diagnostics.len(), 1);
    assert_eq!(flat.diagnostics[0].kind, DiagnosticKind::Unsupported);
    assert_eq!(flat.diagnostics[0].stage, Stage::Flatten);
    assert_eq!(
        line_points(&flat.path),
        vec![DVec2::ZERO, DVec2::new(10.0, 0.0)]
    );
}

#[test]
fn test_curve_after_dropped_cubic_starts_from_stale_point() {
    let mut path = OutlinePath::new();
    path.move_to(DVec2::ZERO)
        .line_to(DVec2::new(10.0, 0.0))
        .cubic_to(DVec2::new(10.0, 5.0), DVec2::new(5.0, 10.0), DVec2::new(0.0, 10.0))
        .quad_to(DVec2::new(20.0, 0.0), DVec2::new(10.0, 0.0))
        .close();
    let flat = flatten(&path, FlattenPolicy::GLYPH, 0.1, Subdivision::Uniform { segments: 2 });
    let points = line_points(&flat.path);
    // The quadratic is evaluated from (10, 0), the end of the last kept segment.
    let expected_mid = Curve::Quad {
        from: DVec2::new(10.0, 0.0),
        ctrl: DVec2::new(20.0, 0.0),
        to: DVec2::new(10.0, 0.0),
    }
    .eval(0.5);
    assert_eq!(points[2], expected_mid);
}

#[test]
fn test_close_resets_current_point_to_subpath_start() {
    let mut path = OutlinePath::new();
    path.move_to(DVec2::new(1.0, 1.0))
        .line_to(DVec2::new(5.0, 1.0))
        .close()
        .quad_to(DVec2::new(3.0, 5.0), DVec2::new(5.0, 1.0));
    let flat = flatten(&path, FlattenPolicy::GLYPH, 0.1, Subdivision::Uniform { segments: 2 });
    let points = line_points(&flat.path);
    let expected_mid = Curve::Quad {
        from: DVec2::new(1.0, 1.0),
        ctrl: DVec2::new(3.0, 5.0),
        to: DVec2::new(5.0, 1.0),
    }
    .eval(0.5);
    assert_eq!(points[2], expected_mid);
}

#[test]
fn test_flattened_path_from_flat() {
    let flat = OutlinePath::polygon(&[DVec2::ZERO, DVec2::X, DVec2::Y]);
    assert!(FlattenedPath::from_flat(flat).is_some());

    let mut curved = OutlinePath::new();
    curved.move_to(DVec2::ZERO).quad_to(DVec2::X, DVec2::Y);
    assert!(FlattenedPath::from_flat(curved).is_none());
}
