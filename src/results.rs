//! Result types for beam analysis

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Reaction forces at a support
///
/// `fx` is carried for the response contract but is always zero in this
/// vertically-loaded planar model. Positive `fy` acts upward, positive `mz`
/// counterclockwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    /// Horizontal reaction force
    pub fx: f64,
    /// Vertical reaction force
    pub fy: f64,
    /// Reaction moment
    pub mz: f64,
}

impl Reaction {
    pub fn vertical(fy: f64) -> Self {
        Self {
            fy,
            ..Self::default()
        }
    }

    pub fn clamped(fy: f64, mz: f64) -> Self {
        Self {
            fy,
            mz,
            fx: 0.0,
        }
    }
}

/// One sampled point of a diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramPoint {
    pub x: f64,
    pub y: f64,
}

/// A sampled function over the beam span, ordered by ascending `x`
///
/// Shear discontinuities are represented by two consecutive points sharing the
/// same `x` (left and right limits), so charts draw the jump vertically instead
/// of smearing it between stations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagram {
    pub points: Vec<DiagramPoint>,
}

impl Diagram {
    pub fn new(points: Vec<DiagramPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The point of largest magnitude, if any
    pub fn max_abs(&self) -> Option<DiagramPoint> {
        self.points
            .iter()
            .copied()
            .max_by(|a, b| a.y.abs().total_cmp(&b.y.abs()))
    }
}

/// Summary of analysis extremes, for logging and quick inspection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Largest shear magnitude and where it occurs
    pub max_shear: f64,
    pub max_shear_x: f64,
    /// Largest bending moment magnitude and where it occurs
    pub max_moment: f64,
    pub max_moment_x: f64,
    /// Largest deflection magnitude (signed) and where it occurs
    pub max_deflection: f64,
    pub max_deflection_x: f64,
    /// Number of supports carrying reactions
    pub num_supports: usize,
    /// Number of samples per diagram
    pub num_samples: usize,
}

/// Complete output of one solve: reactions plus the three diagrams
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverResults {
    /// Reactions keyed by a stable per-support identifier (`R0`, `R1`, ... in
    /// support insertion order)
    pub reactions: BTreeMap<String, Reaction>,
    pub shear_diagram: Diagram,
    pub moment_diagram: Diagram,
    pub deflection_diagram: Diagram,
    pub summary: AnalysisSummary,
}

/// Stable identifier for the support at `index` in insertion order
pub fn support_label(index: usize) -> String {
    format!("R{index}")
}

/// Package reactions and diagrams into the response shape
pub fn assemble(
    reactions: &[Reaction],
    shear_diagram: Diagram,
    moment_diagram: Diagram,
    deflection_diagram: Diagram,
) -> SolverResults {
    let reaction_map: BTreeMap<String, Reaction> = reactions
        .iter()
        .enumerate()
        .map(|(idx, r)| (support_label(idx), *r))
        .collect();

    let max_shear = shear_diagram.max_abs().unwrap_or(DiagramPoint { x: 0.0, y: 0.0 });
    let max_moment = moment_diagram.max_abs().unwrap_or(DiagramPoint { x: 0.0, y: 0.0 });
    let max_defl = deflection_diagram
        .max_abs()
        .unwrap_or(DiagramPoint { x: 0.0, y: 0.0 });

    let summary = AnalysisSummary {
        max_shear: max_shear.y.abs(),
        max_shear_x: max_shear.x,
        max_moment: max_moment.y.abs(),
        max_moment_x: max_moment.x,
        max_deflection: max_defl.y,
        max_deflection_x: max_defl.x,
        num_supports: reactions.len(),
        num_samples: shear_diagram.len(),
    };

    SolverResults {
        reactions: reaction_map,
        shear_diagram,
        moment_diagram,
        deflection_diagram,
        summary,
    }
}
