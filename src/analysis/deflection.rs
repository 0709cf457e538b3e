//! Deflection from the Euler-Bernoulli relation `EI v'' = M`
//!
//! The moment series is integrated twice termwise, staying closed-form. The
//! two integration constants come from the first pair of independent support
//! boundary conditions; any further conditions (indeterminate configurations)
//! are consistent by construction because the reactions already enforced
//! compatibility, so they serve as a residual self-check instead.

use crate::analysis::{stations, AnalysisOptions};
use crate::error::{SolverError, SolverResult};
use crate::math::{self, Mat, DVec, Side, SingularitySeries};
use crate::model::BeamModel;
use crate::results::{Diagram, Reaction};

use super::internal_forces::{moment_series, sample};

/// One boundary condition row for the constants `[C1, C2]`:
/// `c1_coeff * C1 + c2_coeff * C2 = rhs`
struct Condition {
    c1_coeff: f64,
    c2_coeff: f64,
    rhs: f64,
    label: String,
}

fn boundary_conditions(
    model: &BeamModel,
    slope_ei: &SingularitySeries,
    defl_ei: &SingularitySeries,
) -> Vec<Condition> {
    let mut conds = Vec::new();
    for (idx, support) in model.supports.iter().enumerate() {
        let x = support.position;
        conds.push(Condition {
            c1_coeff: x,
            c2_coeff: 1.0,
            rhs: -defl_ei.eval(x, Side::Right),
            label: format!("v(x) = 0 at support {idx} (x = {x})"),
        });
        if support.kind.restrains_rotation() {
            conds.push(Condition {
                c1_coeff: 1.0,
                c2_coeff: 0.0,
                rhs: -slope_ei.eval(x, Side::Right),
                label: format!("v'(x) = 0 at support {idx} (x = {x})"),
            });
        }
    }
    conds
}

/// Compute the deflection diagram from the solved reactions
pub fn compute(
    model: &BeamModel,
    reactions: &[Reaction],
    options: &AnalysisOptions,
) -> SolverResult<Diagram> {
    let ei = model.flexural_rigidity();

    let slope_ei = moment_series(model, reactions).integral();
    let defl_ei = slope_ei.integral();

    let conds = boundary_conditions(model, &slope_ei, &defl_ei);
    debug_assert!(conds.len() >= 2);

    // First pair of independent conditions fixes the constants
    let (c1, c2, used) = solve_constants(&conds, options).ok_or_else(|| {
        SolverError::SingularSystem(
            "deflection boundary conditions are degenerate".to_string(),
        )
    })?;

    if options.check_consistency {
        check_residuals(&conds, used, c1, c2, model, &defl_ei, options)?;
    }

    // EI v(x) = ∫∫M + C1 x + C2, scaled back by 1/EI
    let mut v_ei = defl_ei;
    v_ei.push(c1, 0.0, 1);
    v_ei.push(c2, 0.0, 0);
    let v = v_ei.scaled(1.0 / ei);

    let xs = stations(model, options.resolution);
    Ok(sample(&v, &xs, f64::INFINITY))
}

/// Solve `[C1, C2]` from the first pair of conditions forming a nonsingular
/// 2x2; returns the constants and the indices of the rows consumed
fn solve_constants(
    conds: &[Condition],
    options: &AnalysisOptions,
) -> Option<(f64, f64, [usize; 2])> {
    let first = conds.first()?;
    for (j, second) in conds.iter().enumerate().skip(1) {
        let a = Mat::from_row_slice(
            2,
            2,
            &[first.c1_coeff, first.c2_coeff, second.c1_coeff, second.c2_coeff],
        );
        let b = DVec::from_row_slice(&[first.rhs, second.rhs]);
        if let Some(c) = math::solve_partial_pivot(&a, &b, options.pivot_tolerance) {
            return Some((c[0], c[1], [0, j]));
        }
    }
    None
}

fn check_residuals(
    conds: &[Condition],
    used: [usize; 2],
    c1: f64,
    c2: f64,
    model: &BeamModel,
    defl_ei: &SingularitySeries,
    options: &AnalysisOptions,
) -> SolverResult<()> {
    // Scale residuals against the largest EI-weighted deflection ordinate so
    // the check is relative to the solution magnitude
    let scale = model
        .supports
        .iter()
        .map(|s| s.position)
        .chain([0.0, model.length / 2.0, model.length])
        .map(|x| (defl_ei.eval(x, Side::Right) + c1 * x + c2).abs())
        .fold(0.0_f64, f64::max)
        .max(c2.abs())
        .max(1e-12);

    for (idx, cond) in conds.iter().enumerate() {
        if used.contains(&idx) {
            continue;
        }
        let residual = cond.c1_coeff * c1 + cond.c2_coeff * c2 - cond.rhs;
        if residual.abs() > options.consistency_tolerance * scale {
            return Err(SolverError::InternalConsistency(format!(
                "boundary condition {} has residual {residual:.3e}",
                cond.label
            )));
        }
        log::debug!(
            "boundary condition {} residual {residual:.3e}",
            cond.label
        );
    }
    Ok(())
}
