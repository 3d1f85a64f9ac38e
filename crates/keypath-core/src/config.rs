//! Build-time configuration for keyframe splines.

use serde::{Deserialize, Serialize};

use crate::tolerance::Tolerance;

/// Whether ingestion checks run.
///
/// With `Disabled`, negative durations are stored as given. Queries on such a
/// curve stay memory safe but their results are unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validation {
    #[default]
    Enabled,
    Disabled,
}

impl Validation {
    pub fn is_enabled(self) -> bool {
        matches!(self, Validation::Enabled)
    }
}

/// Configuration carried by a spline builder into the finished spline.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SplineConfig {
    pub validation: Validation,
    pub tolerance: Tolerance,
}

impl SplineConfig {
    pub fn new(validation: Validation, tolerance: Tolerance) -> Self {
        Self {
            validation,
            tolerance,
        }
    }

    /// Skip ingestion checks, e.g. for data already verified offline.
    pub fn unchecked() -> Self {
        Self {
            validation: Validation::Disabled,
            ..Self::default()
        }
    }
}
