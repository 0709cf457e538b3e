//! Beam Solver Example - Simply Supported and Propped Spans

use beam_solver::prelude::*;

fn print_results(results: &SolverResults) {
    println!("Support Reactions:");
    for (label, r) in &results.reactions {
        println!(
            "  {}: Fy={:.3}kN, Mz={:.3}kN·m",
            label,
            r.fy / 1000.0,
            r.mz / 1000.0
        );
    }

    let s = &results.summary;
    println!("Extremes:");
    println!("  Max |V| = {:.3}kN at x = {:.2}m", s.max_shear / 1000.0, s.max_shear_x);
    println!("  Max |M| = {:.3}kN·m at x = {:.2}m", s.max_moment / 1000.0, s.max_moment_x);
    println!(
        "  Max deflection = {:.4}mm at x = {:.2}m",
        s.max_deflection * 1000.0,
        s.max_deflection_x
    );
    println!();
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("=== Beam Solver Example: Simply Supported Span ===\n");

    // 10 m span, steel E = 210 GPa, I = 5e-6 m^4,
    // 10 kN point load at midspan
    let mut model = BeamModel::new(10.0, 210e9, 5e-6);
    model
        .add_support(Support::pinned(0.0))
        .add_support(Support::roller(10.0))
        .add_point_load(PointLoad::new(10_000.0, 5.0));

    let results = model.solve()?;
    print_results(&results);

    println!("=== Beam Solver Example: Propped Cantilever ===\n");

    // Fixed at the wall, roller at the tip, 3 kN/m over the whole span
    let mut propped = BeamModel::new(8.0, 210e9, 5e-6);
    propped
        .add_support(Support::fixed(0.0))
        .add_support(Support::roller(8.0))
        .add_distributed_load(DistributedLoad::uniform(3_000.0, 0.0, 8.0));

    let results = propped.solve()?;
    print_results(&results);

    println!("=== Analysis Complete ===");
    Ok(())
}
