//! Control points and clamped neighbour lookup.

use keypath_math::Point3;
use serde::{Deserialize, Serialize};

/// A keyframe: anchor position, derived tangent handles, and the time until
/// the next keyframe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub position: Point3,
    /// Handle on the side facing the previous point.
    pub tangent_in: Point3,
    /// Handle on the side facing the next point.
    pub tangent_out: Point3,
    /// Time from this point to the next. Unused on the last point.
    pub duration: f64,
}

impl ControlPoint {
    /// A point whose tangent handles are still zero.
    pub fn new(position: Point3, duration: f64) -> Self {
        Self {
            position,
            tangent_in: Point3::ZERO,
            tangent_out: Point3::ZERO,
            duration,
        }
    }
}

/// Look up `points[index]`, saturating to the first point for negative
/// indices and to the last point past the end.
///
/// `points` must not be empty.
pub fn clamped(points: &[ControlPoint], index: isize) -> &ControlPoint {
    debug_assert!(!points.is_empty(), "clamped access on an empty point sequence");
    if index < 0 {
        return &points[0];
    }
    let index = index as usize;
    if index >= points.len() {
        return &points[points.len() - 1];
    }
    &points[index]
}
