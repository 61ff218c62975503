//! # Layouts
//!
//! Every finished part exists in two orientations: flat on the print bed, or
//! placed around the shared optical axis (z) of the rig. The assembled form
//! is the printable form moved by a rigid [`Pose`].

use glam::DMat4;
use holmos_csg::transform::{rotation, translation};
use holmos_csg::Solid;
use serde::{Deserialize, Serialize};

/// Orientation a part is generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Layout {
    /// Flat on the print bed as designed for printing.
    #[default]
    Printable,
    /// Positioned relative to the optical axis, ready to be moved along it.
    Assembled,
}

impl Layout {
    /// Check if this is the assembled layout.
    pub fn is_assembled(self) -> bool {
        self == Layout::Assembled
    }

    /// Applies `pose` to `solid` in the assembled layout only.
    pub fn place(self, solid: Solid, pose: Pose) -> Solid {
        match self {
            Layout::Printable => solid,
            Layout::Assembled => pose.apply(solid),
        }
    }
}

/// Rotation followed by translation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    /// Euler angles in degrees, applied first.
    pub rotate: [f64; 3],
    /// Offset applied after the rotation.
    pub translate: [f64; 3],
}

impl Pose {
    /// No movement.
    pub const IDENTITY: Pose = Pose {
        rotate: [0.0; 3],
        translate: [0.0; 3],
    };

    /// Pure rotation.
    pub const fn rotation(angles: [f64; 3]) -> Self {
        Self {
            rotate: angles,
            translate: [0.0; 3],
        }
    }

    /// Moves `solid` by this pose.
    pub fn apply(&self, solid: Solid) -> Solid {
        let solid = if self.rotate == [0.0; 3] {
            solid
        } else {
            solid.rotate(self.rotate)
        };
        if self.translate == [0.0; 3] {
            solid
        } else {
            solid.translate(self.translate)
        }
    }

    /// Matrix mapping printable coordinates to assembled coordinates.
    pub fn matrix(&self) -> DMat4 {
        translation(self.translate) * rotation(self.rotate)
    }
}
