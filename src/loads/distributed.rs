//! Distributed (line) loads

use serde::{Deserialize, Serialize};

/// A linearly-varying distributed load over an interval of the beam
///
/// Trapezoidal in general; uniform when both magnitudes are equal. Positive
/// intensity acts downward, matching [`crate::loads::PointLoad`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributedLoad {
    /// Intensity at the start position (positive = downward)
    pub start_magnitude: f64,
    /// Intensity at the end position
    pub end_magnitude: f64,
    /// Start of the loaded interval, from the left end of the beam
    pub start_position: f64,
    /// End of the loaded interval
    pub end_position: f64,
}

impl DistributedLoad {
    pub fn new(
        start_magnitude: f64,
        end_magnitude: f64,
        start_position: f64,
        end_position: f64,
    ) -> Self {
        Self {
            start_magnitude,
            end_magnitude,
            start_position,
            end_position,
        }
    }

    /// Create a uniform load of intensity `w` over `[x1, x2]`
    pub fn uniform(w: f64, x1: f64, x2: f64) -> Self {
        Self::new(w, w, x1, x2)
    }

    /// Create a triangular load, zero at `x1` rising to `w_max` at `x2`
    pub fn triangular(w_max: f64, x1: f64, x2: f64) -> Self {
        Self::new(0.0, w_max, x1, x2)
    }

    /// Check if the load is uniform (constant intensity)
    pub fn is_uniform(&self) -> bool {
        (self.start_magnitude - self.end_magnitude).abs() < 1e-10
    }

    /// Length of the loaded interval
    pub fn span(&self) -> f64 {
        self.end_position - self.start_position
    }

    /// Intensity slope over the interval
    pub fn slope(&self) -> f64 {
        (self.end_magnitude - self.start_magnitude) / self.span()
    }

    /// Total force resultant (positive = downward)
    pub fn resultant(&self) -> f64 {
        (self.start_magnitude + self.end_magnitude) / 2.0 * self.span()
    }

    /// First moment of the load about the beam origin, `∫ w(x)·x dx`
    ///
    /// Computed directly rather than via resultant and centroid so that
    /// self-canceling trapezoids (`w1 = -w2`) stay well-defined.
    pub fn first_moment_about_origin(&self) -> f64 {
        let (a, b) = (self.start_position, self.end_position);
        let w1 = self.start_magnitude;
        let s = self.slope();
        w1 * (b * b - a * a) / 2.0 + s * ((b * b * b - a * a * a) / 3.0 - a * (b * b - a * a) / 2.0)
    }
}
