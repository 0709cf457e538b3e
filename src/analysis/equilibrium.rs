//! Support reaction solving
//!
//! Statically determinate configurations (two reaction unknowns) are solved
//! from the two global equilibrium equations directly. Indeterminate
//! configurations add compatibility rows: the beam is treated as free with
//! loads and unknown reactions applied, deflection influence coefficients come
//! from double-integrated Macaulay terms, and zero deflection at every support
//! (plus zero slope at every fixed support) closes the system. This is the
//! stiffness-style equivalent of the classical force method: the same
//! compatibility conditions, solved for all reactions at once.

use crate::analysis::AnalysisOptions;
use crate::error::{SolverError, SolverResult};
use crate::math::{self, Mat, DVec, Side, SingularityTerm};
use crate::model::BeamModel;
use crate::results::Reaction;

use super::internal_forces::applied_moment_series;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnknownKind {
    /// Vertical reaction force (positive up)
    Force,
    /// Reaction moment at a fixed support (positive counterclockwise)
    Moment,
}

#[derive(Debug, Clone, Copy)]
struct Unknown {
    support_idx: usize,
    position: f64,
    kind: UnknownKind,
}

impl Unknown {
    /// Contribution of a unit value of this unknown to the internal moment
    /// `M(x)`, as a Macaulay term
    fn unit_moment_term(&self) -> SingularityTerm {
        match self.kind {
            UnknownKind::Force => SingularityTerm::new(1.0, self.position, 1),
            UnknownKind::Moment => SingularityTerm::new(-1.0, self.position, 0),
        }
    }
}

fn reaction_unknowns(model: &BeamModel) -> Vec<Unknown> {
    let mut unknowns = Vec::new();
    for (idx, support) in model.supports.iter().enumerate() {
        unknowns.push(Unknown {
            support_idx: idx,
            position: support.position,
            kind: UnknownKind::Force,
        });
        if support.kind.restrains_rotation() {
            unknowns.push(Unknown {
                support_idx: idx,
                position: support.position,
                kind: UnknownKind::Moment,
            });
        }
    }
    unknowns
}

/// Net applied load (positive = downward resultant)
fn net_load(model: &BeamModel) -> f64 {
    model.point_loads.iter().map(|p| p.magnitude).sum::<f64>()
        + model
            .distributed_loads
            .iter()
            .map(|w| w.resultant())
            .sum::<f64>()
}

/// First moment of the applied loading about the origin, on the
/// counterclockwise-positive convention: downward forces contribute
/// `-P x`, applied couples contribute their own magnitude.
fn net_load_moment(model: &BeamModel) -> f64 {
    let force_part: f64 = model
        .point_loads
        .iter()
        .map(|p| -p.magnitude * p.position)
        .sum::<f64>()
        + model
            .distributed_loads
            .iter()
            .map(|w| -w.first_moment_about_origin())
            .sum::<f64>();
    let couple_part: f64 = model.point_moments.iter().map(|c| c.magnitude).sum();
    force_part + couple_part
}

/// Fill the two global equilibrium rows into `a`/`b` at rows 0 and 1
fn fill_equilibrium_rows(a: &mut Mat, b: &mut DVec, unknowns: &[Unknown], model: &BeamModel) {
    for (col, u) in unknowns.iter().enumerate() {
        match u.kind {
            UnknownKind::Force => {
                a[(0, col)] = 1.0;
                a[(1, col)] = u.position;
            }
            UnknownKind::Moment => {
                a[(0, col)] = 0.0;
                a[(1, col)] = 1.0;
            }
        }
    }
    // ΣFy = 0: upward reactions balance the downward resultant
    b[0] = net_load(model);
    // ΣM about x = 0: reaction moments balance the applied load moment
    b[1] = -net_load_moment(model);
}

/// Solve for the support reactions
pub fn solve_reactions(
    model: &BeamModel,
    options: &AnalysisOptions,
) -> SolverResult<Vec<Reaction>> {
    let unknowns = reaction_unknowns(model);
    let n = unknowns.len();

    let solution = if n == 2 {
        log::debug!("statically determinate: solving 2x2 equilibrium system");
        let mut a = Mat::zeros(2, 2);
        let mut b = DVec::zeros(2);
        fill_equilibrium_rows(&mut a, &mut b, &unknowns, model);
        math::solve_partial_pivot(&a, &b, options.pivot_tolerance).ok_or_else(|| {
            SolverError::SingularSystem(
                "equilibrium matrix is singular; supports cannot restrain the beam".to_string(),
            )
        })?
    } else {
        let n_fixed = model
            .supports
            .iter()
            .filter(|s| s.kind.restrains_rotation())
            .count();
        let size = n + 2;
        log::debug!(
            "statically indeterminate ({} redundants): solving {size}x{size} compatibility system",
            n - 2
        );

        // Unknown vector: [reactions..., C1, C2] where C1/C2 are the two
        // integration constants of EI*v for the combined load + reaction
        // moment curve.
        let mut a = Mat::zeros(size, size);
        let mut b = DVec::zeros(size);
        fill_equilibrium_rows(&mut a, &mut b, &unknowns, model);

        let slope_load = applied_moment_series(model).integral();
        let defl_load = slope_load.integral();

        let mut row = 2;
        // zero deflection at every support (all kinds restrain translation)
        for support in &model.supports {
            let x = support.position;
            for (col, u) in unknowns.iter().enumerate() {
                a[(row, col)] = u.unit_moment_term().integral().integral().value(x, Side::Right);
            }
            a[(row, n)] = x; // C1
            a[(row, n + 1)] = 1.0; // C2
            b[row] = -defl_load.eval(x, Side::Right);
            row += 1;
        }
        // zero slope at every fixed support
        for support in model.supports.iter().filter(|s| s.kind.restrains_rotation()) {
            let x = support.position;
            for (col, u) in unknowns.iter().enumerate() {
                a[(row, col)] = u.unit_moment_term().integral().value(x, Side::Right);
            }
            a[(row, n)] = 1.0; // C1
            b[row] = -slope_load.eval(x, Side::Right);
            row += 1;
        }
        debug_assert_eq!(row, 2 + model.supports.len() + n_fixed);

        math::solve_partial_pivot(&a, &b, options.pivot_tolerance).ok_or_else(|| {
            SolverError::SingularSystem(
                "compatibility matrix is singular; coincident supports or insufficient restraint"
                    .to_string(),
            )
        })?
    };

    // Fold the unknown vector back into one Reaction per support
    let mut reactions = vec![Reaction::default(); model.supports.len()];
    for (col, u) in unknowns.iter().enumerate() {
        match u.kind {
            UnknownKind::Force => reactions[u.support_idx].fy = solution[col],
            UnknownKind::Moment => reactions[u.support_idx].mz = solution[col],
        }
    }

    let fy_residual: f64 = reactions.iter().map(|r| r.fy).sum::<f64>() - net_load(model);
    let mz_residual: f64 = reactions
        .iter()
        .zip(&model.supports)
        .map(|(r, s)| r.fy * s.position + r.mz)
        .sum::<f64>()
        + net_load_moment(model);
    log::debug!("equilibrium residuals: ΣFy = {fy_residual:.3e}, ΣM = {mz_residual:.3e}");

    Ok(reactions)
}
