//! Structural elements of the beam model

pub mod support;

pub use support::{Support, SupportKind};
