//! Vector helpers shared by tangent construction and the blend kernels.

use crate::{Point3, Vector3};

/// Linear mix between `a` and `b`: `a` at `t = 0`, `b` at `t = 1`.
#[inline]
pub fn mix(a: Point3, b: Point3, t: f64) -> Point3 {
    a + (b - a) * t
}

/// Normalize `v`, mapping a zero (or non-finite length) vector to zero.
#[inline]
pub fn normalize_or_zero(v: Vector3) -> Vector3 {
    v.normalize_or_zero()
}
