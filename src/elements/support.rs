//! Support conditions

use serde::{Deserialize, Serialize};

/// Kind of support along the beam
///
/// This is a planar, vertically-loaded model: PINNED and ROLLER each contribute
/// one vertical reaction unknown, FIXED contributes a vertical reaction plus a
/// moment reaction. Horizontal reactions are tracked but trivially zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SupportKind {
    /// Restrains vertical and horizontal translation
    Pinned,
    /// Restrains translation and rotation
    Fixed,
    /// Restrains vertical translation only
    Roller,
}

impl SupportKind {
    /// Whether this support restrains rotation (adds a moment reaction)
    pub fn restrains_rotation(&self) -> bool {
        matches!(self, SupportKind::Fixed)
    }

    /// Whether this support restrains horizontal translation
    pub fn restrains_horizontal(&self) -> bool {
        matches!(self, SupportKind::Pinned | SupportKind::Fixed)
    }

    /// Number of reaction unknowns this support contributes
    pub fn reaction_unknowns(&self) -> usize {
        if self.restrains_rotation() {
            2
        } else {
            1
        }
    }
}

/// A support at a position along the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Support {
    #[serde(rename = "type")]
    pub kind: SupportKind,
    pub position: f64,
}

impl Support {
    pub fn new(kind: SupportKind, position: f64) -> Self {
        Self { kind, position }
    }

    /// Create a pinned support
    pub fn pinned(position: f64) -> Self {
        Self::new(SupportKind::Pinned, position)
    }

    /// Create a fixed (clamped) support
    pub fn fixed(position: f64) -> Self {
        Self::new(SupportKind::Fixed, position)
    }

    /// Create a roller support
    pub fn roller(position: f64) -> Self {
        Self::new(SupportKind::Roller, position)
    }
}
