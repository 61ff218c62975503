//! # Cage Parts
//!
//! Parts clipping onto the three-rod cage: the rod pair below the optical
//! axis and a third rod [`THIRD_ROD_DISTANCE`] further down.

use holmos_config::constants::{
    third_rod_diagonal, BASE_Z_LENGTH, RPI_BOARD_HOLE_PITCH_LONG, RPI_BOARD_HOLE_PITCH_SHORT, ROD_AXIS_OFFSET,
    ROD_SEPARATION, THIRD_ROD_DISTANCE,
};
use holmos_config::Settings;
use holmos_csg::{union, CsgError, Solid};

use crate::helpers::{rounded_plate, strut_with_holes};
use crate::layout::{Layout, Pose};
use crate::mount::{base, base_rods30, single_rod_clamp, BaseSpec};

const STRUT_WIDTH: f64 = 10.0;
const STRUT_THICK: f64 = 3.0;

/// Turns a base from optical-axis coordinates into a clamp standing on the
/// `z = 0` plane, rods along y.
fn standing_clamp(clamp: Solid) -> Solid {
    clamp.translate([0.0, 20.0, 0.0]).rotate([-90.0, 0.0, 0.0])
}

/// Mirrored pair of struts crossing at the origin, each `angle_deg` off y.
fn strut_cross(strut: Solid, angle_deg: f64) -> Solid {
    strut
        .clone()
        .rotate([0.0, 0.0, -angle_deg])
        .union_with(strut.rotate([0.0, 0.0, angle_deg]))
}

// =============================================================================
// RASPBERRY PI
// =============================================================================

/// Moves the printed Raspberry Pi mount onto the side of the cage, board in
/// the xz plane.
pub fn rpi_mount_pose() -> Pose {
    Pose {
        rotate: [90.0, 0.0, -90.0],
        translate: [20.0, -third_rod_diagonal() / 2.0 - ROD_AXIS_OFFSET, 0.0],
    }
}

/// Cross of two struts carrying the Raspberry Pi board on four spacers,
/// clipped to a cage rod and the third rod.
pub fn rpi_mount(settings: &Settings, layout: Layout) -> Result<Solid, CsgError> {
    let sep_z = RPI_BOARD_HOLE_PITCH_LONG;
    let sep_x = RPI_BOARD_HOLE_PITCH_SHORT;
    let hole_diagonal = sep_x.hypot(sep_z);
    let angle = (sep_x / sep_z).atan().to_degrees();

    let diag_strut = strut_with_holes(hole_diagonal, STRUT_THICK, STRUT_WIDTH)?;
    let cross = strut_cross(diag_strut, angle).translate([0.0, 0.0, STRUT_THICK / 2.0]);

    let spec = BaseSpec {
        rod_sep: third_rod_diagonal(),
        ..BaseSpec::default()
    };
    let clamp = standing_clamp(base(settings, &spec)?);
    let clamp_y = sep_z / 2.0 - STRUT_WIDTH;
    let mount = union([
        cross,
        clamp.clone().translate([0.0, clamp_y, 0.0]),
        clamp.translate([0.0, -clamp_y, 0.0]),
    ]);

    Ok(layout.place(mount, rpi_mount_pose()))
}

// =============================================================================
// STABILIZERS
// =============================================================================

/// Wedge from the rod pair to the third rod, with the side faces cut along
/// the lines to the third rod. Rods at `y = 0` and `y = THIRD_ROD_DISTANCE`.
fn rod_wedge() -> Result<Solid, CsgError> {
    let width = ROD_SEPARATION;
    let length = THIRD_ROD_DISTANCE;
    let height = 10.0;
    let angle = -(width / 2.0 / length).atan().to_degrees();

    let cut = Solid::cube([width, length, 2.0 * height], true)?;
    Ok(Solid::cube([width + 4.0, length - 10.0, height], true)?
        .translate([0.0, length / 2.0, 0.0])
        .subtract(cut.clone().rotate([0.0, 0.0, angle]).translate([-width, length / 2.0, 0.0]))
        .subtract(cut.rotate([0.0, 0.0, -angle]).translate([width, length / 2.0, 0.0])))
}

/// Flips a part laid out with the rods toward +y onto the cage, rod pair at
/// the usual offset below the axis.
fn onto_cage(part: Solid) -> Solid {
    part.mirror([0.0, 1.0, 0.0]).translate([0.0, -ROD_AXIS_OFFSET, 0.0])
}

/// Stabilizer clamping all three cage rods.
pub fn cage_stabilizer(settings: &Settings) -> Result<Solid, CsgError> {
    let wedge = rod_wedge()?
        .subtract(Solid::cylinder_d(20.0, 20.0, true)?.translate([0.0, 20.0, 0.0]))
        .subtract(Solid::cylinder_d(10.0, 20.0, true)?.translate([0.0, 40.0, 0.0]));

    let clamps = base(settings, &BaseSpec::default())?
        .translate([0.0, ROD_AXIS_OFFSET, 0.0])
        .union_with(
            single_rod_clamp(BASE_Z_LENGTH, settings.rod_tightness)?
                .rotate([0.0, 0.0, 180.0])
                .translate([0.0, THIRD_ROD_DISTANCE, 0.0]),
        );

    Ok(onto_cage(wedge.union_with(clamps)))
}

/// Crossed struts joining two rod-pair clamps 100 mm apart along the cage,
/// on the side between a rod and the third rod.
pub fn cage_side_stabilizer(settings: &Settings) -> Result<Solid, CsgError> {
    let sep_z = 100.0;
    let sep_x = third_rod_diagonal();
    let diagonal = sep_x.hypot(sep_z);
    let angle = (sep_x / sep_z).atan().to_degrees();

    let diag_strut = rounded_plate([STRUT_WIDTH, diagonal + STRUT_WIDTH, STRUT_THICK], STRUT_WIDTH / 2.0)?;
    let cross = strut_cross(diag_strut, angle).translate([0.0, 0.0, -STRUT_THICK / 2.0]);

    let mount = Solid::cube([sep_x, STRUT_WIDTH, STRUT_THICK], true)?
        .translate([0.0, 0.0, -STRUT_THICK / 2.0])
        .union_with(standing_clamp(base_rods30(sep_x, BASE_Z_LENGTH, settings.rod_tightness)?));

    Ok(union([
        cross,
        mount.clone().translate([0.0, sep_z / 2.0, 0.0]),
        mount.translate([0.0, -sep_z / 2.0, 0.0]),
    ]))
}

/// Foot plate under the cage with long clamps on all three rods and two
/// screw holes, plus two cross struts for screwing it down.
pub fn cage_base_plate(settings: &Settings) -> Result<Solid, CsgError> {
    let clamp_length = 30.0;
    let tightness = settings.rod_tightness;

    let mut plate = rod_wedge()?;
    for y in [15.0, 40.0] {
        // counterbore from the top, clearance through
        plate = plate
            .union_with(Solid::cylinder_d(12.0, 10.0, true)?.translate([0.0, y, 5.0]).hole())
            .union_with(Solid::cylinder_d(7.5, 20.0, true)?.translate([0.0, y, -5.0]).hole());
    }

    let strut = strut_with_holes(40.0, STRUT_THICK, STRUT_WIDTH)?.rotate([0.0, 0.0, 90.0]);
    for y in [10.0, THIRD_ROD_DISTANCE - 5.0] {
        plate = plate.union_with(strut.clone().translate([0.0, y, (STRUT_THICK - 10.0) / 2.0]));
    }

    let clamps = base_rods30(ROD_SEPARATION, clamp_length, tightness)?
        .translate([0.0, ROD_AXIS_OFFSET, 10.0])
        .union_with(
            single_rod_clamp(clamp_length, tightness)?
                .rotate([0.0, 0.0, 180.0])
                .translate([0.0, THIRD_ROD_DISTANCE, 10.0]),
        );

    Ok(onto_cage(plate.union_with(clamps)))
}
