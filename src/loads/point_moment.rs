//! Concentrated couples

use serde::{Deserialize, Serialize};

/// A concentrated couple applied to the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointMoment {
    /// Couple magnitude (positive = counterclockwise)
    pub magnitude: f64,
    /// Distance from the left end of the beam
    pub position: f64,
}

impl PointMoment {
    pub fn new(magnitude: f64, position: f64) -> Self {
        Self {
            magnitude,
            position,
        }
    }
}
