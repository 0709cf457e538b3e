//! Model validation
//!
//! Checks a [`BeamModel`] for physical and numerical well-formedness before any
//! analysis runs. Every violated constraint is collected, not just the first,
//! so the caller can surface the full list in one response. Stability beyond
//! these checks (e.g. coincident supports) is left to the equilibrium stage,
//! where it surfaces as a singular system.

use std::fmt;

use crate::error::{SolverError, SolverResult};
use crate::model::BeamModel;

/// One violated constraint, naming the offending field
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Field path, e.g. `point_loads[2].position`
    pub field: String,
    /// Human-readable description of the violation
    pub message: String,
}

impl Violation {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// The complete list of violations found in a model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelDiagnostics {
    pub violations: Vec<Violation>,
}

impl ModelDiagnostics {
    fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.violations.push(Violation::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ModelDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for v in &self.violations {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{v}")?;
            first = false;
        }
        Ok(())
    }
}

fn check_positive(diag: &mut ModelDiagnostics, field: &str, value: f64) {
    if !value.is_finite() || value <= 0.0 {
        diag.push(field, format!("must be positive and finite, got {value}"));
    }
}

fn check_position(diag: &mut ModelDiagnostics, field: String, value: f64, length: f64) {
    if !value.is_finite() {
        diag.push(field, format!("must be finite, got {value}"));
    } else if length > 0.0 && !(0.0..=length).contains(&value) {
        diag.push(field, format!("{value} outside [0, {length}]"));
    }
}

fn check_magnitude(diag: &mut ModelDiagnostics, field: String, value: f64) {
    if !value.is_finite() {
        diag.push(field, format!("must be finite, got {value}"));
    }
}

/// Validate a model, returning every violated constraint at once
pub fn validate(model: &BeamModel) -> SolverResult<()> {
    let mut diag = ModelDiagnostics::default();

    check_positive(&mut diag, "length", model.length);
    check_positive(&mut diag, "E", model.e);
    check_positive(&mut diag, "I", model.i);

    // A cantilever's single fixed support is a valid determinate
    // configuration; anything less than that cannot restrain the beam.
    let has_fixed = model.supports.iter().any(|s| s.kind.restrains_rotation());
    if model.supports.len() < 2 && !has_fixed {
        diag.push(
            "supports",
            format!(
                "at least 2 supports (or one FIXED support) required, got {}",
                model.supports.len()
            ),
        );
    }

    for (idx, support) in model.supports.iter().enumerate() {
        check_position(
            &mut diag,
            format!("supports[{idx}].position"),
            support.position,
            model.length,
        );
    }

    for (idx, load) in model.point_loads.iter().enumerate() {
        check_position(
            &mut diag,
            format!("point_loads[{idx}].position"),
            load.position,
            model.length,
        );
        check_magnitude(
            &mut diag,
            format!("point_loads[{idx}].magnitude"),
            load.magnitude,
        );
    }

    for (idx, moment) in model.point_moments.iter().enumerate() {
        check_position(
            &mut diag,
            format!("point_moments[{idx}].position"),
            moment.position,
            model.length,
        );
        check_magnitude(
            &mut diag,
            format!("point_moments[{idx}].magnitude"),
            moment.magnitude,
        );
    }

    for (idx, load) in model.distributed_loads.iter().enumerate() {
        check_position(
            &mut diag,
            format!("distributed_loads[{idx}].start_position"),
            load.start_position,
            model.length,
        );
        check_position(
            &mut diag,
            format!("distributed_loads[{idx}].end_position"),
            load.end_position,
            model.length,
        );
        check_magnitude(
            &mut diag,
            format!("distributed_loads[{idx}].start_magnitude"),
            load.start_magnitude,
        );
        check_magnitude(
            &mut diag,
            format!("distributed_loads[{idx}].end_magnitude"),
            load.end_magnitude,
        );
        if load.start_position.is_finite()
            && load.end_position.is_finite()
            && load.start_position >= load.end_position
        {
            diag.push(
                format!("distributed_loads[{idx}]"),
                format!(
                    "start_position {} must be less than end_position {}",
                    load.start_position, load.end_position
                ),
            );
        }
    }

    if diag.is_empty() {
        Ok(())
    } else {
        log::debug!("model rejected with {} violation(s)", diag.violations.len());
        Err(SolverError::InvalidModel(diag))
    }
}
