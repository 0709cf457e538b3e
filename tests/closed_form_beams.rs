//! Determinate beams against textbook closed-form solutions

use approx::assert_relative_eq;
use beam_solver::prelude::*;

/// Diagram ordinate at `x`; where a jump is sampled on both sides this takes
/// the last point, i.e. the right limit.
fn value_at(diagram: &Diagram, x: f64) -> f64 {
    diagram
        .points
        .iter()
        .rev()
        .find(|p| (p.x - x).abs() < 1e-9)
        .map(|p| p.y)
        .expect("station not sampled")
}

/// Sum of equilibrium residuals for any solved model: reactions must balance
/// the applied loading exactly.
fn assert_equilibrium_closure(model: &BeamModel, results: &SolverResults) {
    let applied: f64 = model.point_loads.iter().map(|p| p.magnitude).sum::<f64>()
        + model
            .distributed_loads
            .iter()
            .map(|w| w.resultant())
            .sum::<f64>();
    let reacting: f64 = results.reactions.values().map(|r| r.fy).sum();
    assert_relative_eq!(reacting, applied, max_relative = 1e-9, epsilon = 1e-9);
}

#[test]
fn simply_supported_midspan_point_load() {
    // Reference scenario: L=10, E=210e9, I=5e-6, P=10 at x=5.
    let mut model = BeamModel::new(10.0, 210e9, 5e-6);
    model
        .add_support(Support::pinned(0.0))
        .add_support(Support::roller(10.0))
        .add_point_load(PointLoad::new(10.0, 5.0));

    let results = model.solve().unwrap();

    // Symmetry: Fy = 5 at each support
    assert_relative_eq!(results.reactions["R0"].fy, 5.0, epsilon = 1e-9);
    assert_relative_eq!(results.reactions["R1"].fy, 5.0, epsilon = 1e-9);
    assert_relative_eq!(results.reactions["R0"].fx, 0.0);
    assert_relative_eq!(results.reactions["R0"].mz, 0.0);

    // Max moment P*L/4 = 25 under the load
    assert_relative_eq!(value_at(&results.moment_diagram, 5.0), 25.0, epsilon = 1e-9);

    // Midspan deflection -P L^3 / 48 EI
    let expected = -10.0 * 10.0_f64.powi(3) / (48.0 * 210e9 * 5e-6);
    assert_relative_eq!(
        value_at(&results.deflection_diagram, 5.0),
        expected,
        max_relative = 1e-9
    );

    assert_equilibrium_closure(&model, &results);
}

#[test]
fn simply_supported_udl() {
    let (w, l, e, i) = (3.0, 8.0, 200e9, 4e-6);
    let mut model = BeamModel::new(l, e, i);
    model
        .add_support(Support::pinned(0.0))
        .add_support(Support::roller(l))
        .add_distributed_load(DistributedLoad::uniform(w, 0.0, l));

    let results = model.solve().unwrap();

    assert_relative_eq!(results.reactions["R0"].fy, w * l / 2.0, epsilon = 1e-9);
    assert_relative_eq!(results.reactions["R1"].fy, w * l / 2.0, epsilon = 1e-9);

    // M_max = w L^2 / 8 at midspan, v_max = -5 w L^4 / 384 EI
    assert_relative_eq!(
        value_at(&results.moment_diagram, l / 2.0),
        w * l * l / 8.0,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        value_at(&results.deflection_diagram, l / 2.0),
        -5.0 * w * l.powi(4) / (384.0 * e * i),
        max_relative = 1e-9
    );

    assert_equilibrium_closure(&model, &results);
}

#[test]
fn cantilever_end_load() {
    let (p, l, e, i) = (7.0, 4.0, 210e9, 5e-6);
    let mut model = BeamModel::new(l, e, i);
    model
        .add_support(Support::fixed(0.0))
        .add_point_load(PointLoad::new(p, l));

    let results = model.solve().unwrap();

    assert_relative_eq!(results.reactions["R0"].fy, p, epsilon = 1e-9);
    assert_relative_eq!(results.reactions["R0"].mz, p * l, epsilon = 1e-9);

    // Hogging moment -P*L at the wall, tip deflection -P L^3 / 3 EI
    assert_relative_eq!(value_at(&results.moment_diagram, 0.0), -p * l, epsilon = 1e-9);
    assert_relative_eq!(
        value_at(&results.deflection_diagram, l),
        -p * l.powi(3) / (3.0 * e * i),
        max_relative = 1e-9
    );
}

#[test]
fn couple_on_a_simple_span_steps_the_moment_diagram() {
    let (c, a, l) = (20.0, 4.0, 10.0);
    let mut model = BeamModel::new(l, 210e9, 5e-6);
    model
        .add_support(Support::pinned(0.0))
        .add_support(Support::roller(l))
        .add_point_moment(PointMoment::new(c, a));

    let results = model.solve().unwrap();

    assert_relative_eq!(results.reactions["R0"].fy, c / l, epsilon = 1e-9);
    assert_relative_eq!(results.reactions["R1"].fy, -c / l, epsilon = 1e-9);

    // Two samples at the couple position: before and after the step
    let at_couple: Vec<f64> = results
        .moment_diagram
        .points
        .iter()
        .filter(|p| (p.x - a).abs() < 1e-9)
        .map(|p| p.y)
        .collect();
    assert_eq!(at_couple.len(), 2);
    assert_relative_eq!(at_couple[0], c * a / l, epsilon = 1e-9);
    assert_relative_eq!(at_couple[1], c * a / l - c, epsilon = 1e-9);
}

#[test]
fn trapezoidal_load_balances() {
    let mut model = BeamModel::new(12.0, 200e9, 8e-6);
    model
        .add_support(Support::pinned(0.0))
        .add_support(Support::roller(12.0))
        .add_distributed_load(DistributedLoad::new(2.0, 6.0, 3.0, 9.0));

    let results = model.solve().unwrap();
    assert_equilibrium_closure(&model, &results);

    // Moment balance about the origin must also close
    let load = &model.distributed_loads[0];
    let reaction_moment: f64 = results.reactions["R1"].fy * 12.0;
    assert_relative_eq!(
        reaction_moment + results.reactions["R0"].fy * 0.0,
        load.first_moment_about_origin(),
        max_relative = 1e-9
    );
}

#[test]
fn shear_and_moment_close_at_the_free_end() {
    let mut model = BeamModel::new(10.0, 210e9, 5e-6);
    model
        .add_support(Support::pinned(0.0))
        .add_support(Support::roller(7.0))
        .add_point_load(PointLoad::new(5.0, 3.0))
        .add_distributed_load(DistributedLoad::triangular(4.0, 2.0, 9.0))
        .add_point_moment(PointMoment::new(6.0, 8.0));

    let results = model.solve().unwrap();

    let last_v = results.shear_diagram.points.last().unwrap();
    let last_m = results.moment_diagram.points.last().unwrap();
    assert_relative_eq!(last_v.x, 10.0);
    assert!(last_v.y.abs() < 1e-9, "V(L+) = {}", last_v.y);
    assert!(last_m.y.abs() < 1e-9, "M(L+) = {}", last_m.y);
}

#[test]
fn diagrams_are_sorted_and_cover_the_span() {
    let mut model = BeamModel::new(10.0, 210e9, 5e-6);
    model
        .add_support(Support::pinned(0.0))
        .add_support(Support::roller(10.0))
        .add_point_load(PointLoad::new(10.0, 2.7));

    let results = model.solve().unwrap();

    for diagram in [
        &results.shear_diagram,
        &results.moment_diagram,
        &results.deflection_diagram,
    ] {
        assert!(diagram.len() >= 201);
        assert_relative_eq!(diagram.points.first().unwrap().x, 0.0);
        assert_relative_eq!(diagram.points.last().unwrap().x, 10.0);
        assert!(diagram.points.windows(2).all(|w| w[0].x <= w[1].x));
        // break point sampled exactly
        assert!(diagram.points.iter().any(|p| p.x == 2.7));
    }
}
