//! Keypath curves: time-parameterized 3D paths built from keyframe records.
//!
//! A [`SplineBuilder`] collects control points in temporal order, then
//! [`SplineBuilder::build`] derives tangent handles once and freezes the
//! result into a query-only [`Spline`].

pub mod blend;
pub mod builder;
pub mod point;
pub mod record;
pub mod spline;
pub mod tangent;
pub mod tessellate;
pub mod timed;

pub use builder::SplineBuilder;
pub use point::ControlPoint;
pub use record::{is_segment_end, read_spline, read_spline_with_config, read_splines, words_from_le_bytes};
pub use spline::{Spline, SplineMode};
pub use timed::TimedCurve;
