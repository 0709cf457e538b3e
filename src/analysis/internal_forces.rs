//! Internal shear and bending moment
//!
//! Builds `V(x)` and `M(x)` as Macaulay singularity series and samples them
//! into diagrams. Conventions (fixed crate-wide): y up, applied load magnitudes
//! positive downward, reactions positive upward/counterclockwise, `V(x)` is the
//! sum of upward forces left of the cut, sagging moment positive, `dM/dx = V`.

use crate::analysis::{stations, AnalysisOptions};
use crate::error::{SolverError, SolverResult};
use crate::math::{Side, SingularitySeries};
use crate::model::BeamModel;
use crate::results::{Diagram, DiagramPoint, Reaction};

/// Shear contribution of the applied loads only (no reactions)
pub(crate) fn applied_shear_series(model: &BeamModel) -> SingularitySeries {
    let mut v = SingularitySeries::new();

    for load in &model.point_loads {
        // downward-positive load drops the shear by its magnitude
        v.push(-load.magnitude, load.position, 0);
    }

    for w in &model.distributed_loads {
        // Trapezoid as a started ramp pair and its cancellation at the end:
        // inside [a, b] the shear picks up the integrated intensity, beyond b
        // the end terms freeze the accumulated resultant.
        let (a, b) = (w.start_position, w.end_position);
        let s = w.slope();
        v.push(-w.start_magnitude, a, 1);
        v.push(-s / 2.0, a, 2);
        v.push(w.end_magnitude, b, 1);
        v.push(s / 2.0, b, 2);
    }

    v
}

/// Moment contribution of the applied loads only (no reactions)
pub(crate) fn applied_moment_series(model: &BeamModel) -> SingularitySeries {
    let mut m = applied_shear_series(model).integral();

    for couple in &model.point_moments {
        // a counterclockwise couple steps the internal moment down
        m.push(-couple.magnitude, couple.position, 0);
    }

    m
}

/// Full shear series: applied loads plus support reactions
pub fn shear_series(model: &BeamModel, reactions: &[Reaction]) -> SingularitySeries {
    let mut v = applied_shear_series(model);
    for (support, reaction) in model.supports.iter().zip(reactions) {
        v.push(reaction.fy, support.position, 0);
    }
    v
}

/// Full moment series: applied loads plus support reactions
pub fn moment_series(model: &BeamModel, reactions: &[Reaction]) -> SingularitySeries {
    let mut m = shear_series(model, reactions).integral();

    for couple in &model.point_moments {
        m.push(-couple.magnitude, couple.position, 0);
    }
    for (support, reaction) in model.supports.iter().zip(reactions) {
        m.push(-reaction.mz, support.position, 0);
    }

    m
}

/// Characteristic force scale for relative residual checks
pub(crate) fn load_scale(model: &BeamModel, reactions: &[Reaction]) -> f64 {
    let applied: f64 = model.point_loads.iter().map(|p| p.magnitude.abs()).sum::<f64>()
        + model
            .distributed_loads
            .iter()
            .map(|w| w.resultant().abs())
            .sum::<f64>();
    let reacting: f64 = reactions.iter().map(|r| r.fy.abs()).sum();
    applied + reacting
}

/// Sample a series at the given stations, emitting both one-sided limits where
/// the function jumps
pub(crate) fn sample(series: &SingularitySeries, xs: &[f64], jump_tol: f64) -> Diagram {
    let mut points = Vec::with_capacity(xs.len() + 8);
    for &x in xs {
        let left = series.eval(x, Side::Left);
        let right = series.eval(x, Side::Right);
        if (left - right).abs() > jump_tol {
            points.push(DiagramPoint { x, y: left });
            points.push(DiagramPoint { x, y: right });
        } else {
            points.push(DiagramPoint { x, y: right });
        }
    }
    Diagram::new(points)
}

/// Compute the shear and moment diagrams, with the free-end closure self-check
pub fn compute_diagrams(
    model: &BeamModel,
    reactions: &[Reaction],
    options: &AnalysisOptions,
) -> SolverResult<(Diagram, Diagram)> {
    let v = shear_series(model, reactions);
    let m = moment_series(model, reactions);

    if options.check_consistency {
        // Just past the right end every applied force and reaction has entered
        // the running sums, so both must have closed back to zero; a residual
        // means the reactions are wrong.
        let scale = load_scale(model, reactions).max(1.0);
        let v_end = v.eval(model.length, Side::Right);
        let m_end = m.eval(model.length, Side::Right);
        let v_allowed = options.consistency_tolerance * scale;
        let m_allowed = options.consistency_tolerance * scale * model.length.max(1.0);
        if v_end.abs() > v_allowed || m_end.abs() > m_allowed {
            return Err(SolverError::InternalConsistency(format!(
                "shear/moment fail to close at the free end: V(L+) = {v_end:.3e}, M(L+) = {m_end:.3e}"
            )));
        }
        log::debug!("closure residuals: V(L+) = {v_end:.3e}, M(L+) = {m_end:.3e}");
    }

    let xs = stations(model, options.resolution);
    let jump_tol = 1e-9 * load_scale(model, reactions).max(1.0);
    let shear = sample(&v, &xs, jump_tol);
    let moment = sample(&m, &xs, jump_tol * model.length.max(1.0));

    Ok((shear, moment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Support;
    use crate::loads::{DistributedLoad, PointLoad, PointMoment};
    use approx::assert_relative_eq;

    fn simply_supported_with_midspan_load() -> (BeamModel, Vec<Reaction>) {
        let mut model = BeamModel::new(10.0, 210e9, 5e-6);
        model
            .add_support(Support::pinned(0.0))
            .add_support(Support::roller(10.0))
            .add_point_load(PointLoad::new(10.0, 5.0));
        let reactions = vec![Reaction::vertical(5.0), Reaction::vertical(5.0)];
        (model, reactions)
    }

    #[test]
    fn shear_jumps_at_point_load() {
        let (model, reactions) = simply_supported_with_midspan_load();
        let v = shear_series(&model, &reactions);

        assert_relative_eq!(v.eval(5.0, Side::Left), 5.0);
        assert_relative_eq!(v.eval(5.0, Side::Right), -5.0);
        assert_relative_eq!(v.eval(10.0, Side::Right), 0.0);
    }

    #[test]
    fn moment_peaks_under_the_load() {
        let (model, reactions) = simply_supported_with_midspan_load();
        let m = moment_series(&model, &reactions);

        assert_relative_eq!(m.eval(5.0, Side::Right), 25.0);
        assert_relative_eq!(m.eval(10.0, Side::Right), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn uniform_load_gives_parabolic_moment() {
        let mut model = BeamModel::new(8.0, 210e9, 5e-6);
        model
            .add_support(Support::pinned(0.0))
            .add_support(Support::roller(8.0))
            .add_distributed_load(DistributedLoad::uniform(3.0, 0.0, 8.0));
        let reactions = vec![Reaction::vertical(12.0), Reaction::vertical(12.0)];

        let m = moment_series(&model, &reactions);
        // w L^2 / 8 = 3 * 64 / 8 = 24 at midspan
        assert_relative_eq!(m.eval(4.0, Side::Right), 24.0);
        assert_relative_eq!(m.eval(8.0, Side::Right), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn point_moment_steps_the_moment_diagram() {
        let mut model = BeamModel::new(10.0, 210e9, 5e-6);
        model
            .add_support(Support::pinned(0.0))
            .add_support(Support::roller(10.0))
            .add_point_moment(PointMoment::new(20.0, 4.0));
        // R0 = C/L up, R1 = -C/L
        let reactions = vec![Reaction::vertical(2.0), Reaction::vertical(-2.0)];

        let m = moment_series(&model, &reactions);
        assert_relative_eq!(m.eval(4.0, Side::Left), 8.0);
        assert_relative_eq!(m.eval(4.0, Side::Right), -12.0);
        assert_relative_eq!(m.eval(10.0, Side::Right), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn sampling_duplicates_jump_stations() {
        let (model, reactions) = simply_supported_with_midspan_load();
        let v = shear_series(&model, &reactions);
        let diagram = sample(&v, &[0.0, 5.0, 10.0], 1e-9);

        // jumps at both supports and under the load
        let at_five: Vec<_> = diagram.points.iter().filter(|p| p.x == 5.0).collect();
        assert_eq!(at_five.len(), 2);
        assert_relative_eq!(at_five[0].y, 5.0);
        assert_relative_eq!(at_five[1].y, -5.0);
    }

    #[test]
    fn bad_reactions_fail_the_closure_check() {
        let (model, mut reactions) = simply_supported_with_midspan_load();
        reactions[1].fy = 4.0;

        let err = compute_diagrams(&model, &reactions, &AnalysisOptions::default()).unwrap_err();
        assert!(matches!(err, SolverError::InternalConsistency(_)));
    }
}
