//! Analysis pipeline: equilibrium, internal forces, deflection
//!
//! One forward pass per solve: reactions from equilibrium (plus compatibility
//! for indeterminate configurations), then shear/moment diagrams, then the
//! deflection curve from `EI v'' = M`. No stage revisits an earlier one.

pub mod deflection;
pub mod equilibrium;
pub mod internal_forces;

use serde::{Deserialize, Serialize};

use crate::model::BeamModel;

/// Options for a beam solve
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Number of uniform sampling stations over the span; break points at load
    /// and support positions are always added on top
    pub resolution: usize,
    /// Relative pivot tolerance below which the equilibrium/compatibility
    /// system is reported singular
    pub pivot_tolerance: f64,
    /// Relative tolerance for the post-solve closure self-checks
    pub consistency_tolerance: f64,
    /// Run the closure self-checks (shear/moment at the free end, deflection
    /// boundary residuals)
    pub check_consistency: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            resolution: 201,
            pivot_tolerance: 1e-12,
            consistency_tolerance: 1e-6,
            check_consistency: true,
        }
    }
}

impl AnalysisOptions {
    /// Set the uniform sampling resolution (clamped to at least 2)
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution.max(2);
        self
    }

    pub fn with_consistency_tolerance(mut self, tol: f64) -> Self {
        self.consistency_tolerance = tol;
        self
    }

    pub fn without_consistency_checks(mut self) -> Self {
        self.check_consistency = false;
        self
    }
}

/// Sampling stations: `resolution` uniform points over `[0, length]` plus every
/// break point (support, point load/moment, distributed-load boundary), sorted
/// ascending. Break points are kept exact; uniform stations falling within a
/// rounding tolerance of one are dropped in its favor.
pub(crate) fn stations(model: &BeamModel, resolution: usize) -> Vec<f64> {
    let n = resolution.max(2);
    let length = model.length;

    let mut breaks: Vec<f64> = Vec::new();
    breaks.push(0.0);
    breaks.push(length);
    breaks.extend(model.supports.iter().map(|s| s.position));
    breaks.extend(model.point_loads.iter().map(|p| p.position));
    breaks.extend(model.point_moments.iter().map(|m| m.position));
    for w in &model.distributed_loads {
        breaks.push(w.start_position);
        breaks.push(w.end_position);
    }
    breaks.sort_by(f64::total_cmp);
    let tol = length * 1e-12;
    breaks.dedup_by(|a, b| (*a - *b).abs() <= tol);

    let mut xs = breaks.clone();
    let near_break = |x: f64| breaks.iter().any(|b| (b - x).abs() <= tol);
    for k in 0..n {
        let x = length * k as f64 / (n - 1) as f64;
        if !near_break(x) {
            xs.push(x);
        }
    }
    xs.sort_by(f64::total_cmp);
    xs
}
