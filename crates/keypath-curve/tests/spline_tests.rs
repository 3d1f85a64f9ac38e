use approx::assert_relative_eq;
use keypath_core::KeypathError;
use keypath_curve::{
    is_segment_end, read_spline, read_splines, words_from_le_bytes, Spline, SplineBuilder,
    SplineMode, TimedCurve,
};
use keypath_math::{dvec3, Point3};

fn build(mode: SplineMode, keys: &[(Point3, f64)]) -> Spline {
    let mut builder = SplineBuilder::new(mode);
    for &(p, d) in keys {
        builder.append_point(p, d).unwrap();
    }
    builder.build().unwrap()
}

fn zigzag(mode: SplineMode) -> Spline {
    build(
        mode,
        &[
            (dvec3(0.0, 0.0, 0.0), 2.0),
            (dvec3(10.0, 4.0, 1.0), 3.5),
            (dvec3(12.0, -6.0, 3.0), 1.25),
            (dvec3(3.0, -2.0, 8.0), 4.0),
            (dvec3(-5.0, 7.0, 2.0), 2.0),
        ],
    )
}

#[test]
fn test_terminator_detection() {
    for a in [-2i16, -1, 0, 1, 2] {
        for b in [-1i16, 0, 1] {
            for c in [i16::MIN, 0, i16::MAX] {
                for d in [-1i16, 0, 7] {
                    let all_zero = a == 0 && b == 0 && c == 0 && d == 0;
                    assert_eq!(is_segment_end([a, b, c, d]), all_zero);
                }
            }
        }
    }
}

#[test]
fn test_clamped_access_any_size() {
    for n in 1..6 {
        let keys: Vec<_> = (0..n).map(|i| (dvec3(i as f64, 0.0, 0.0), 1.0)).collect();
        let s = build(SplineMode::Weighted, &keys);
        for i in -4..(n as isize + 4) {
            let expected = i.clamp(0, n as isize - 1) as f64;
            assert_eq!(s.point_clamped(i).position.x, expected);
        }
    }
}

#[test]
fn test_bezier_boundary_continuity() {
    let s = zigzag(SplineMode::Bezier);
    let starts = s.segment_start_times();
    for i in 0..s.len() - 1 {
        let p = s.resolve_position(starts[i]);
        assert!(
            (p - s.points()[i].position).length() < 1e-9,
            "point {} at t={} resolved to {:?}",
            i,
            starts[i],
            p
        );
    }
}

#[test]
fn test_bezier_is_continuous_across_boundaries() {
    let s = zigzag(SplineMode::Bezier);
    let starts = s.segment_start_times();
    for &t in &starts[1..s.len() - 1] {
        let before = s.resolve_position(t - 1e-7);
        let after = s.resolve_position(t);
        assert!((before - after).length() < 1e-4);
    }
}

#[test]
fn test_end_clamp_both_modes() {
    for mode in [SplineMode::Weighted, SplineMode::Bezier] {
        let s = zigzag(mode);
        let end = s.total_duration();
        let last = s.last().position;
        assert_eq!(s.resolve_position(end), last);
        assert_eq!(s.resolve_position(end + 0.5), last);
        assert_eq!(s.resolve_position_at(1000), last);
    }
}

#[test]
fn test_single_point_curve() {
    for mode in [SplineMode::Weighted, SplineMode::Bezier] {
        for duration in [0.0, 5.0] {
            let s = build(mode, &[(dvec3(4.0, -9.0, 12.0), duration)]);
            for t in [0.0, 0.5, 2.5, 4.99, 5.0, 100.0] {
                let p = s.resolve_position(t);
                assert!(p.is_finite());
                assert!((p - dvec3(4.0, -9.0, 12.0)).length() < 1e-12);
            }
        }
    }
}

#[test]
fn test_ingestion_example() {
    let words: &[i16] = &[0, 0, 0, 10, 100, 0, 0, 20, 0, 0, 0, 0];
    let (s, consumed) = read_spline(words, SplineMode::Bezier).unwrap();
    assert_eq!(consumed, 12);
    assert_eq!(consumed / 4, 3);
    assert_eq!(s.len(), 2);
    assert_eq!(s.points()[0].duration, 10.0);
    assert_eq!(s.points()[1].duration, 20.0);
    assert_eq!(s.total_duration(), 30.0);
}

#[test]
fn test_ingestion_from_bytes() {
    let mut bytes = Vec::new();
    for w in [0i16, 0, 0, 10, 100, 0, 0, 20, 0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0] {
        bytes.extend_from_slice(&w.to_le_bytes());
    }
    let words = words_from_le_bytes(&bytes).unwrap();
    let splines = read_splines(&words, SplineMode::Weighted).unwrap();
    assert_eq!(splines.len(), 2);
    assert_eq!(splines[1].first().position, dvec3(1.0, 1.0, 1.0));
}

#[test]
fn test_weighted_and_bezier_diverge() {
    let keys = [
        (dvec3(0.0, 0.0, 0.0), 10.0),
        (dvec3(10.0, 0.0, 0.0), 10.0),
        (dvec3(10.0, 10.0, 0.0), 10.0),
        (dvec3(0.0, 10.0, 5.0), 10.0),
    ];
    let weighted = build(SplineMode::Weighted, &keys);
    let bezier = build(SplineMode::Bezier, &keys);

    // Midway through the second segment.
    let w = weighted.resolve_position(15.0);
    let b = bezier.resolve_position(15.0);
    assert!((w - b).length() > 1.0, "weighted {:?} bezier {:?}", w, b);

    assert_relative_eq!(w.x, 20.0 / 3.0, epsilon = 1e-9);
    assert!(b.x > 10.0);
}

#[test]
fn test_negative_duration_rejection() {
    let mut builder = SplineBuilder::new(SplineMode::Bezier);
    let err = builder.append_record([1, 2, 3, -1]).unwrap_err();
    assert_eq!(err, KeypathError::InvalidDuration { duration: -1.0 });
    assert!(builder.is_empty());
    assert_eq!(builder.build().unwrap_err(), KeypathError::EmptySpline);
}

#[test]
fn test_spline_is_shareable() {
    let s = std::sync::Arc::new(zigzag(SplineMode::Bezier));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let s = std::sync::Arc::clone(&s);
            std::thread::spawn(move || s.position_at(i as f64 * 2.0))
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        assert_eq!(h.join().unwrap(), s.resolve_position(i as f64 * 2.0));
    }
}
