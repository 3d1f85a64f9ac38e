//! Turning timed curves into polylines for debug drawing and previews.

use keypath_math::Point3;

use crate::timed::TimedCurve;

/// Maximum recursion depth for adaptive subdivision.
const MAX_DEPTH: u32 = 12;

/// Sample `curve` at `segments + 1` evenly spaced times over its duration.
pub fn sample_uniform(curve: &dyn TimedCurve, segments: usize) -> Vec<Point3> {
    let segments = segments.max(1);
    let duration = curve.duration();
    (0..=segments)
        .map(|i| curve.position_at(duration * i as f64 / segments as f64))
        .collect()
}

/// Convert a curve to a polyline using adaptive subdivision.
///
/// A time span is split while the curve's midpoint deviates from the chord
/// by more than `tolerance`.
pub fn curve_to_polyline(curve: &dyn TimedCurve, tolerance: f64) -> Vec<Point3> {
    let duration = curve.duration();
    let mut points = vec![curve.position_at(0.0)];
    subdivide(curve, 0.0, duration, tolerance, &mut points, 0);
    points
}

fn subdivide(
    curve: &dyn TimedCurve,
    t0: f64,
    t1: f64,
    tolerance: f64,
    points: &mut Vec<Point3>,
    depth: u32,
) {
    let p1 = curve.position_at(t1);
    if depth >= MAX_DEPTH {
        points.push(p1);
        return;
    }

    let t_mid = (t0 + t1) * 0.5;
    let p0 = curve.position_at(t0);
    let p_mid = curve.position_at(t_mid);
    let deviation = (p_mid - (p0 + p1) * 0.5).length();

    // Always split once so a curve that happens to pass through its chord
    // midpoint is not collapsed to a single segment.
    if depth == 0 || deviation > tolerance {
        subdivide(curve, t0, t_mid, tolerance, points, depth + 1);
        subdivide(curve, t_mid, t1, tolerance, points, depth + 1);
    } else {
        points.push(p1);
    }
}
