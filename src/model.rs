//! Beam model - the analysis input container

use serde::{Deserialize, Serialize};

use crate::analysis::{deflection, equilibrium, internal_forces, AnalysisOptions};
use crate::elements::Support;
use crate::error::SolverResult;
use crate::loads::{DistributedLoad, PointLoad, PointMoment};
use crate::results::{self, SolverResults};
use crate::validate;

/// A single-span beam with supports and transverse loading
///
/// Constructed fresh per solve; `solve` is a pure function of the model, so a
/// model can be solved repeatedly (or concurrently from multiple threads) with
/// identical results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamModel {
    /// Beam span
    pub length: f64,
    /// Young's modulus
    pub e: f64,
    /// Second moment of area
    pub i: f64,
    /// Supports, in insertion order (order fixes reaction labels only)
    pub supports: Vec<Support>,
    pub point_loads: Vec<PointLoad>,
    pub point_moments: Vec<PointMoment>,
    pub distributed_loads: Vec<DistributedLoad>,
}

impl BeamModel {
    /// Create a bare beam with no supports or loads
    pub fn new(length: f64, e: f64, i: f64) -> Self {
        Self {
            length,
            e,
            i,
            supports: Vec::new(),
            point_loads: Vec::new(),
            point_moments: Vec::new(),
            distributed_loads: Vec::new(),
        }
    }

    pub fn add_support(&mut self, support: Support) -> &mut Self {
        self.supports.push(support);
        self
    }

    pub fn add_point_load(&mut self, load: PointLoad) -> &mut Self {
        self.point_loads.push(load);
        self
    }

    pub fn add_point_moment(&mut self, moment: PointMoment) -> &mut Self {
        self.point_moments.push(moment);
        self
    }

    pub fn add_distributed_load(&mut self, load: DistributedLoad) -> &mut Self {
        self.distributed_loads.push(load);
        self
    }

    /// Flexural rigidity `EI`
    pub fn flexural_rigidity(&self) -> f64 {
        self.e * self.i
    }

    /// Solve with default options
    pub fn solve(&self) -> SolverResult<SolverResults> {
        self.solve_with(&AnalysisOptions::default())
    }

    /// Run the full pipeline: validate, reactions, shear/moment diagrams,
    /// deflection, and package the results
    pub fn solve_with(&self, options: &AnalysisOptions) -> SolverResult<SolverResults> {
        validate::validate(self)?;

        let reactions = equilibrium::solve_reactions(self, options)?;
        let (shear, moment) = internal_forces::compute_diagrams(self, &reactions, options)?;
        let defl = deflection::compute(self, &reactions, options)?;

        let results = results::assemble(&reactions, shear, moment, defl);
        log::info!(
            "solved beam: L = {}, {} supports, {} samples, max |M| = {:.4e} at x = {:.3}",
            self.length,
            results.summary.num_supports,
            results.summary.num_samples,
            results.summary.max_moment,
            results.summary.max_moment_x,
        );
        Ok(results)
    }
}
