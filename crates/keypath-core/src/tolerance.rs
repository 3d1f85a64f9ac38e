/// Tolerances used when comparing curve positions and stepping along time.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Distance below which two positions are considered equal (in model units)
    pub linear: f64,
    /// Time step used for finite differences along the curve (in time units)
    pub time: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-7;
    pub const DEFAULT_TIME: f64 = 1e-3;

    pub fn new(linear: f64, time: f64) -> Self {
        Self { linear, time }
    }

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            time: Self::DEFAULT_TIME,
        }
    }

    /// Tolerance suited to keyframes decoded from 16-bit integer records.
    pub fn loose() -> Self {
        Self {
            linear: 1e-4,
            time: 1e-2,
        }
    }

    /// Positive finite-difference time step; falls back to
    /// [`Self::DEFAULT_TIME`] when `time` is zero, negative, or not finite.
    pub fn time_step(self) -> f64 {
        if self.time.is_finite() && self.time > 0.0 {
            self.time
        } else {
            Self::DEFAULT_TIME
        }
    }

    /// Check if two values are equal within linear tolerance
    pub fn linear_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.linear
    }

    /// Check if a value is zero within linear tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
