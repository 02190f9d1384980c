//! Corner smoothing factor

use crate::error::{Result, SquircleError};

/// How much of each corner's curvature is carried by transition curves
/// instead of a circular arc.
///
/// `0.0` is a plain circular corner, `1.0` removes the arc entirely and the
/// corner is made of transition curves only. Values outside `[0.0, 1.0]` are
/// rejected when the factor is constructed, so the rest of the pipeline never
/// re-validates it.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct CornerSmoothing(f64);

impl CornerSmoothing {
    /// Plain rounded rectangle
    pub const NONE: CornerSmoothing = CornerSmoothing(0.0);
    /// Close to the corners used by iOS app icons
    pub const IOS: CornerSmoothing = CornerSmoothing(0.6);
    pub const PRETTY: CornerSmoothing = CornerSmoothing(0.8);
    pub const MAX: CornerSmoothing = CornerSmoothing(1.0);
    pub const DEFAULT: CornerSmoothing = Self::PRETTY;

    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SquircleError::InvalidSmoothing(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_none(self) -> bool {
        self.0 == 0.0
    }

    /// Half of the circular arc's sweep in degrees: `45 × (1 − smoothing)`
    pub fn half_arc_angle(self) -> f64 {
        45.0 * (1.0 - self.0)
    }
}

impl Default for CornerSmoothing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for CornerSmoothing {
    type Error = SquircleError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<CornerSmoothing> for f64 {
    fn from(smoothing: CornerSmoothing) -> Self {
        smoothing.0
    }
}
