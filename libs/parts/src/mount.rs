//! # Universal Base
//!
//! Every upper part is a 40 x 40 mm block around the optical axis (z). The
//! base starts at `y = -20` and is symmetric in x; which base is attached is
//! selected once through [`Settings`].

use holmos_config::constants::{
    AXIS_TO_BASE, BASE_Z_LENGTH, M23_CORE_DIAMETER, OWIS_HOLE_PITCH, PART_SIZE, ROD_AXIS_OFFSET,
    ROD_DIAMETER, ROD_SEPARATION,
};
use holmos_config::{MountStyle, Settings};
use holmos_csg::{union, CsgError, Solid};
use tracing::warn;

use crate::helpers::rounded_plate;

/// Height (y) of a rod clamp block.
const CLAMP_HEIGHT: f64 = 10.0;

/// Dimensions of the base attached below a part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseSpec {
    /// Distance between the two rods.
    pub rod_sep: f64,
    /// Length of the base along the optical axis.
    pub z_length: f64,
}

impl Default for BaseSpec {
    fn default() -> Self {
        Self {
            rod_sep: ROD_SEPARATION,
            z_length: BASE_Z_LENGTH,
        }
    }
}

impl BaseSpec {
    /// Default base with a different length along the optical axis.
    pub fn with_z_length(z_length: f64) -> Self {
        Self {
            z_length,
            ..Self::default()
        }
    }
}

/// Base in the configured mount style.
///
/// With no mount configured a warning is logged and nothing is attached.
pub fn base(settings: &Settings, spec: &BaseSpec) -> Result<Solid, CsgError> {
    match settings.mount {
        MountStyle::Threads20mm => base_threads20(),
        MountStyle::Rods6mmBy30mm => base_rods30(spec.rod_sep, spec.z_length, settings.rod_tightness),
        MountStyle::None => {
            warn!("No base configured, printed parts may be difficult to mount");
            Ok(Solid::Empty)
        }
    }
}

/// Two M2.3 threads into the bottom face, cut through the whole part.
pub fn base_threads20() -> Result<Solid, CsgError> {
    Ok(owis_holes(true)?.hole())
}

/// Snap-on clamp for two rods `rod_sep` apart, below the part.
///
/// `clamp_diff` is how much narrower the entry tunnel is than the rod, i.e.
/// how far the clamp has to bend.
pub fn base_rods30(rod_sep: f64, z_length: f64, clamp_diff: f64) -> Result<Solid, CsgError> {
    let mut block = rounded_plate([rod_sep + 10.0, CLAMP_HEIGHT, z_length], 3.0)?;

    for x in [-rod_sep / 2.0, rod_sep / 2.0] {
        let rod = Solid::cylinder_d(ROD_DIAMETER, 2.0 * z_length, true)?.translate([x, 0.0, 0.0]);
        let x_tunnel = x - x.signum() * clamp_diff / 2.0;
        let tunnel = Solid::cube([ROD_DIAMETER - clamp_diff, 10.0, 2.0 * z_length], true)?
            .translate([x_tunnel, -5.0, 0.0]);
        block = block.subtract(rod).subtract(tunnel);
    }

    let relief = Solid::cylinder_d(15.0, 2.0 * z_length, true)?.translate([0.0, -CLAMP_HEIGHT / 2.0, 0.0]);
    Ok(block.subtract(relief).translate([0.0, -ROD_AXIS_OFFSET, 0.0]))
}

/// Clamp for a single rod, centered on the rod axis.
pub fn single_rod_clamp(z_length: f64, clamp_diff: f64) -> Result<Solid, CsgError> {
    let block = rounded_plate([2.0 * ROD_DIAMETER, CLAMP_HEIGHT, z_length], 3.0)?;
    let rod = Solid::cylinder_d(ROD_DIAMETER, 2.0 * z_length, true)?;
    let tunnel = Solid::cube([ROD_DIAMETER - clamp_diff, 10.0, 2.0 * z_length], true)?
        .translate([-clamp_diff / 2.0, -5.0, 0.0]);
    Ok(block.subtract(rod).subtract(tunnel))
}

// =============================================================================
// OWIS RAIL HOLES
// =============================================================================

/// Hole from below into the `z = 0` plane for an M2.3 screw, with a
/// countersink cone.
pub fn owis23hole() -> Result<Solid, CsgError> {
    let r = M23_CORE_DIAMETER / 2.0;
    let shaft = Solid::cylinder(r, 10.0, true)?;
    let sink = Solid::cone(2.0 * r, r, 2.0, true)?.translate([0.0, 0.0, -5.0]);
    Ok(shaft.union_with(sink).translate([0.0, 0.0, 5.0]))
}

/// Pair of OWIS holes 20 mm apart, centered at `x = y = 0`, extending up
/// from `z = 0`.
///
/// With `move_to_minus_y` the pair is turned to enter from the bottom face
/// at `y = -20`, for parts whose optical axis is z.
pub fn owis_holes(move_to_minus_y: bool) -> Result<Solid, CsgError> {
    let hole = owis23hole()?;
    let pair = union([
        hole.clone().translate([-OWIS_HOLE_PITCH / 2.0, 0.0, 0.0]),
        hole.translate([OWIS_HOLE_PITCH / 2.0, 0.0, 0.0]),
    ]);
    if move_to_minus_y {
        Ok(pair.rotate([-90.0, 0.0, 0.0]).translate([0.0, -AXIS_TO_BASE, 0.0]))
    } else {
        Ok(pair)
    }
}

/// 40 x 40 x 10 block with OWIS holes in the bottom face.
pub fn owis_block() -> Result<Solid, CsgError> {
    let plate = Solid::cube([PART_SIZE, PART_SIZE, 10.0], true)?;
    Ok(plate.subtract(owis_holes(true)?))
}
