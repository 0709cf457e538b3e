//! Error types for the beam solver

use thiserror::Error;

use crate::validate::ModelDiagnostics;

/// Main error type for solver operations
#[derive(Error, Debug)]
pub enum SolverError {
    /// The model failed validation; every violated constraint is listed.
    #[error("invalid model: {0}")]
    InvalidModel(ModelDiagnostics),

    /// The equilibrium (or compatibility) matrix is numerically singular,
    /// e.g. coincident supports or insufficient restraint.
    #[error("unstable structure: {0}")]
    SingularSystem(String),

    /// A post-solve self-check failed beyond tolerance. Indicates a solver
    /// defect, not bad input.
    #[error("internal consistency check failed: {0}")]
    InternalConsistency(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for solver operations
pub type SolverResult<T> = Result<T, SolverError>;
