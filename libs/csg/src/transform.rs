//! # Transform Matrices
//!
//! Converts transform nodes into `glam` matrices with OpenSCAD semantics.
//!
//! ## Conventions
//!
//! - `rotate([x, y, z])` applies the x rotation first, then y, then z,
//!   i.e. `M = Rz * Ry * Rx`
//! - `mirror(n)` reflects across the plane through the origin with normal
//!   `n`; a zero normal leaves the geometry unchanged

use glam::{DMat3, DMat4, DVec3};

use crate::solid::Solid;

/// Translation matrix.
pub fn translation(offset: [f64; 3]) -> DMat4 {
    DMat4::from_translation(DVec3::from_array(offset))
}

/// Rotation matrix for Euler angles in degrees.
///
/// ## Example
///
/// ```rust
/// use glam::DVec3;
/// use holmos_csg::transform::rotation;
///
/// let m = rotation([0.0, 0.0, 90.0]);
/// let p = m.transform_point3(DVec3::X);
/// assert!((p - DVec3::Y).length() < 1e-12);
/// ```
pub fn rotation(angles: [f64; 3]) -> DMat4 {
    let [x, y, z] = angles.map(f64::to_radians);
    DMat4::from_rotation_z(z) * DMat4::from_rotation_y(y) * DMat4::from_rotation_x(x)
}

/// Scale matrix.
pub fn scaling(factors: [f64; 3]) -> DMat4 {
    DMat4::from_scale(DVec3::from_array(factors))
}

/// Householder reflection across the plane with the given normal.
pub fn reflection(normal: [f64; 3]) -> DMat4 {
    let n = DVec3::from_array(normal);
    if n.length_squared() < f64::EPSILON {
        return DMat4::IDENTITY;
    }
    let n = n.normalize();
    let m = DMat3::IDENTITY - DMat3::from_cols(n * n.x, n * n.y, n * n.z) * 2.0;
    DMat4::from_mat3(m)
}

impl Solid {
    /// Matrix mapping this node's child coordinates into its own, for
    /// transform nodes.
    pub fn local_transform(&self) -> Option<DMat4> {
        match self {
            Solid::Translate { offset, .. } => Some(translation(*offset)),
            Solid::Rotate { angles, .. } => Some(rotation(*angles)),
            Solid::Scale { factors, .. } => Some(scaling(*factors)),
            Solid::Mirror { normal, .. } => Some(reflection(*normal)),
            _ => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
