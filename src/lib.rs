//! Beam Solver - Euler-Bernoulli beam analysis
//!
//! This library solves single-span beam models for support reactions and
//! shear, bending-moment and deflection diagrams, supporting:
//! - Pinned, roller and fixed supports, determinate or indeterminate
//! - Point loads, point moments and trapezoidal distributed loads
//! - Closed-form piecewise integration (Macaulay singularity functions)
//!
//! ## Example
//! ```rust
//! use beam_solver::prelude::*;
//!
//! let mut model = BeamModel::new(10.0, 210e9, 5e-6);
//!
//! // Simply supported span with a midspan point load
//! model
//!     .add_support(Support::pinned(0.0))
//!     .add_support(Support::roller(10.0))
//!     .add_point_load(PointLoad::new(10.0, 5.0));
//!
//! let results = model.solve().unwrap();
//!
//! // Each support carries half the load
//! assert!((results.reactions["R0"].fy - 5.0).abs() < 1e-9);
//! assert!((results.summary.max_moment - 25.0).abs() < 1e-9);
//! ```
//!
//! Sign conventions, used identically by every stage: y up, applied load
//! magnitudes positive downward, point moments positive counterclockwise,
//! reactions positive upward/counterclockwise, sagging bending moment positive.

pub mod analysis;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod model;
pub mod results;
pub mod validate;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::AnalysisOptions;
    pub use crate::elements::{Support, SupportKind};
    pub use crate::error::{SolverError, SolverResult};
    pub use crate::loads::{DistributedLoad, PointLoad, PointMoment};
    pub use crate::model::BeamModel;
    pub use crate::results::{
        AnalysisSummary, Diagram, DiagramPoint, Reaction, SolverResults,
    };
    pub use crate::validate::{ModelDiagnostics, Violation};
}
