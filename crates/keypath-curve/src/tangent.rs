//! One-time tangent handle construction.
//!
//! Each handle sits along the chord between the neighbouring points, pushed
//! out from the point by the square root of the distance to that neighbour.
//! End points are their own missing neighbour.

use keypath_math::{normalize_or_zero, Point3};

use crate::point::{clamped, ControlPoint};

/// Tangent handles `(tangent_in, tangent_out)` of the point at `index`.
pub fn handles(points: &[ControlPoint], index: isize) -> (Point3, Point3) {
    let prev = clamped(points, index - 1).position;
    let next = clamped(points, index + 1).position;
    let curr = clamped(points, index).position;

    let tangent_in = normalize_or_zero(prev - next) * (prev - curr).length().sqrt() + curr;
    let tangent_out = normalize_or_zero(next - prev) * (next - curr).length().sqrt() + curr;
    (tangent_in, tangent_out)
}

/// Fill in the tangent handles of every point.
pub fn precompute(points: &mut [ControlPoint]) {
    for i in 0..points.len() {
        let (tangent_in, tangent_out) = handles(points, i as isize);
        let point = &mut points[i];
        point.tangent_in = tangent_in;
        point.tangent_out = tangent_out;
    }
}
