//! Segment blend kernels.
//!
//! Both kernels take the base index of the active segment and the normalized
//! progress `interp` through it, and read neighbours only through
//! [`clamped`].

use keypath_math::{mix, Point3};

use crate::point::{clamped, ControlPoint};

/// Four-point weighted blend over raw positions.
///
/// Averages the three linear mixes between the points at `idx - 1 ..= idx + 2`.
/// Rounds corners off and does not pass through the interior keyframes.
pub fn weighted(points: &[ControlPoint], idx: usize, interp: f64) -> Point3 {
    let idx = idx as isize;
    let aa = clamped(points, idx - 1).position;
    let bb = clamped(points, idx).position;
    let cc = clamped(points, idx + 1).position;
    let dd = clamped(points, idx + 2).position;

    let ee = mix(aa, bb, interp);
    let ff = mix(bb, cc, interp);
    let gg = mix(cc, dd, interp);
    (ee + ff + gg) / 3.0
}

/// Cubic Bezier between the point at `idx` and its successor, using the
/// precomputed handles as interior control points (de Casteljau).
pub fn bezier(points: &[ControlPoint], idx: usize, interp: f64) -> Point3 {
    let idx = idx as isize;
    let curr = clamped(points, idx);
    let next = clamped(points, idx + 1);
    let aa = curr.position;
    let bb = curr.tangent_out;
    let cc = next.tangent_in;
    let dd = next.position;

    let ee = mix(aa, bb, interp);
    let ff = mix(bb, cc, interp);
    let gg = mix(cc, dd, interp);
    let hh = mix(ee, ff, interp);
    let ii = mix(ff, gg, interp);
    mix(hh, ii, interp)
}
