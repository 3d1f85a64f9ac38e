//! Trait for curves parameterized by elapsed time.

use keypath_math::{Point3, Vector3};

/// Step used by [`TimedCurve::tangent_at`] when the curve has no own setting.
pub const DEFAULT_TIME_STEP: f64 = 1e-3;

/// A 3D path evaluated at a time in `[0, duration()]`.
pub trait TimedCurve: Send + Sync {
    /// Evaluate the curve at `time`.
    fn position_at(&self, time: f64) -> Point3;

    /// Total time covered by the curve.
    fn duration(&self) -> f64;

    /// Velocity at `time`, by central difference.
    fn tangent_at(&self, time: f64) -> Vector3 {
        central_difference(self, time, DEFAULT_TIME_STEP)
    }

    /// Whether the path ends where it starts.
    fn is_closed(&self) -> bool {
        false
    }
}

/// Velocity of `curve` at `time` from positions `h` before and after it.
///
/// The lower sample is clamped to time 0. `h` must be positive.
pub fn central_difference<C: TimedCurve + ?Sized>(curve: &C, time: f64, h: f64) -> Vector3 {
    debug_assert!(h > 0.0, "central difference step must be positive, got {}", h);
    let t0 = (time - h).max(0.0);
    let t1 = time + h;
    (curve.position_at(t1) - curve.position_at(t0)) / (t1 - t0)
}
