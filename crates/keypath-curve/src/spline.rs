//! Frozen keyframe splines and position resolution.

use keypath_core::error::{KeypathError, Result};
use keypath_core::traits::{BoundingBox, Validate};
use keypath_core::SplineConfig;
use keypath_math::{Aabb3, Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::blend;
use crate::builder::SplineBuilder;
use crate::point::{clamped, ControlPoint};
use crate::timed::{central_difference, TimedCurve};

/// How positions inside a segment are blended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplineMode {
    /// Average of three linear mixes over four neighbouring positions.
    Weighted,
    /// Cubic Bezier through the keyframes using the precomputed handles.
    Bezier,
}

/// A query-only keyframe spline.
///
/// Always holds at least one point, and tangent handles are always
/// precomputed. Obtain one from [`crate::SplineBuilder::build`] or the record
/// readers in [`crate::record`]. Deserialization goes through the builder as
/// well: durations are checked and stored handles are recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawSpline")]
pub struct Spline {
    mode: SplineMode,
    config: SplineConfig,
    points: Vec<ControlPoint>,
}

#[derive(Deserialize)]
struct RawSpline {
    mode: SplineMode,
    #[serde(default)]
    config: SplineConfig,
    points: Vec<ControlPoint>,
}

impl TryFrom<RawSpline> for Spline {
    type Error = KeypathError;

    fn try_from(raw: RawSpline) -> Result<Self> {
        let mut builder = SplineBuilder::with_config(raw.mode, raw.config);
        for point in raw.points {
            builder.append_point(point.position, point.duration)?;
        }
        builder.build()
    }
}

impl Spline {
    /// Wrap points whose handles were already computed.
    pub(crate) fn from_precomputed(
        mode: SplineMode,
        config: SplineConfig,
        points: Vec<ControlPoint>,
    ) -> Result<Self> {
        if points.is_empty() {
            return Err(KeypathError::EmptySpline);
        }
        Ok(Self {
            mode,
            config,
            points,
        })
    }

    pub fn mode(&self) -> SplineMode {
        self.mode
    }

    pub fn config(&self) -> &SplineConfig {
        &self.config
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`: a built spline has at least one point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> &ControlPoint {
        clamped(&self.points, 0)
    }

    pub fn last(&self) -> &ControlPoint {
        clamped(&self.points, isize::MAX)
    }

    /// Point at `index`, or the first/last point when `index` is out of range.
    pub fn point_clamped(&self, index: isize) -> &ControlPoint {
        clamped(&self.points, index)
    }

    /// Sum of every point's duration, the last point's included.
    ///
    /// Queries at or beyond this time return the last position.
    pub fn total_duration(&self) -> f64 {
        self.points.iter().map(|p| p.duration).sum()
    }

    /// Time at which each point is reached.
    pub fn segment_start_times(&self) -> Vec<f64> {
        let mut elapsed = 0.0;
        self.points
            .iter()
            .map(|p| {
                let start = elapsed;
                elapsed += p.duration;
                start
            })
            .collect()
    }

    /// Position at `time`.
    ///
    /// Negative and NaN times are treated as 0. Past the end of the timeline
    /// the last position is returned without extrapolation.
    pub fn resolve_position(&self, time: f64) -> Point3 {
        let time = time.max(0.0);
        let mut elapsed = 0.0;
        for (idx, point) in self.points.iter().enumerate() {
            let duration = point.duration;
            if elapsed + duration > time {
                // elapsed <= time here, so a zero-length segment is never
                // selected for non-negative durations.
                let interp = if duration > 0.0 {
                    (time - elapsed) / duration
                } else {
                    0.0
                };
                return match self.mode {
                    SplineMode::Weighted => blend::weighted(&self.points, idx, interp),
                    SplineMode::Bezier => blend::bezier(&self.points, idx, interp),
                };
            }
            elapsed += duration;
        }
        self.last().position
    }

    /// Position at an integral time stamp.
    pub fn resolve_position_at(&self, ticks: u32) -> Point3 {
        self.resolve_position(f64::from(ticks))
    }

    /// Box enclosing every position and tangent handle, and therefore the
    /// whole path in either mode.
    pub fn bounds(&self) -> Aabb3 {
        self.points.iter().fold(
            Aabb3::from_point(self.first().position),
            |aabb, p| aabb.include(p.position).include(p.tangent_in).include(p.tangent_out),
        )
    }
}

impl TimedCurve for Spline {
    fn position_at(&self, time: f64) -> Point3 {
        self.resolve_position(time)
    }

    fn duration(&self) -> f64 {
        self.total_duration()
    }

    fn tangent_at(&self, time: f64) -> Vector3 {
        central_difference(self, time, self.config.tolerance.time_step())
    }

    fn is_closed(&self) -> bool {
        let tol = self.config.tolerance;
        tol.is_zero((self.last().position - self.first().position).length())
    }
}

impl BoundingBox for Spline {
    type Point = Point3;

    fn bounding_box(&self) -> (Point3, Point3) {
        let aabb = self.bounds();
        (aabb.min, aabb.max)
    }
}

impl Validate for Spline {
    fn validate(&self) -> Result<()> {
        for (i, p) in self.points.iter().enumerate() {
            if !(p.duration.is_finite() && p.duration >= 0.0) {
                return Err(KeypathError::InvalidDuration {
                    duration: p.duration,
                });
            }
            if !p.position.is_finite() || !p.tangent_in.is_finite() || !p.tangent_out.is_finite() {
                return Err(KeypathError::InvalidOperation(format!(
                    "Control point {} has a non-finite coordinate",
                    i
                )));
            }
        }
        Ok(())
    }
}
