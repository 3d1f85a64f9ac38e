//! Append-only construction of keyframe splines.

use keypath_core::error::{KeypathError, Result};
use keypath_core::SplineConfig;
use keypath_math::{dvec3, Point3};
use tracing::{debug, trace, warn};

use crate::point::ControlPoint;
use crate::spline::{Spline, SplineMode};
use crate::tangent;

/// Collects control points in temporal order, then freezes them into a
/// [`Spline`].
#[derive(Debug, Clone)]
pub struct SplineBuilder {
    mode: SplineMode,
    config: SplineConfig,
    points: Vec<ControlPoint>,
}

impl SplineBuilder {
    pub fn new(mode: SplineMode) -> Self {
        Self::with_config(mode, SplineConfig::default())
    }

    pub fn with_config(mode: SplineMode, config: SplineConfig) -> Self {
        Self {
            mode,
            config,
            points: Vec::new(),
        }
    }

    pub fn mode(&self) -> SplineMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a keyframe reached `duration` time units before the next one.
    ///
    /// Fails with [`KeypathError::InvalidDuration`] on a negative or NaN
    /// duration unless validation is disabled; nothing is appended then.
    pub fn append_point(&mut self, position: Point3, duration: f64) -> Result<()> {
        if duration.is_nan() || duration < 0.0 {
            if self.config.validation.is_enabled() {
                return Err(KeypathError::InvalidDuration { duration });
            }
            warn!(duration, index = self.points.len(), "accepting invalid duration");
        }
        self.points.push(ControlPoint::new(position, duration));
        Ok(())
    }

    /// Append a keyframe from a compact `(x, y, z, duration)` record.
    pub fn append_record(&mut self, record: [i16; 4]) -> Result<()> {
        let [x, y, z, duration] = record;
        trace!(x, y, z, duration, "spline record");
        self.append_point(
            dvec3(f64::from(x), f64::from(y), f64::from(z)),
            f64::from(duration),
        )
    }

    /// Derive tangent handles and freeze the curve.
    ///
    /// Fails with [`KeypathError::EmptySpline`] if no point was appended.
    pub fn build(self) -> Result<Spline> {
        let Self {
            mode,
            config,
            mut points,
        } = self;
        if points.is_empty() {
            return Err(KeypathError::EmptySpline);
        }
        tangent::precompute(&mut points);
        let spline = Spline::from_precomputed(mode, config, points)?;
        debug!(
            points = spline.len(),
            total_duration = spline.total_duration(),
            ?mode,
            "built spline"
        );
        Ok(spline)
    }
}
