//! Concentrated transverse loads

use serde::{Deserialize, Serialize};

/// A concentrated transverse force on the beam
///
/// Positive magnitude acts downward; the same convention holds for distributed
/// loads and is fixed across every analysis stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Load magnitude (positive = downward)
    pub magnitude: f64,
    /// Distance from the left end of the beam
    pub position: f64,
}

impl PointLoad {
    pub fn new(magnitude: f64, position: f64) -> Self {
        Self {
            magnitude,
            position,
        }
    }
}
