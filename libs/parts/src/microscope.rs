//! # Microscope Body Parts
//!
//! Objective holders, the Raspberry Pi camera plate and the slide holder.
//! These parts are built around the optical axis (z) and need no extra
//! movement to be assembled, except the slide holder whose clamps are laid
//! out beside the plate for printing.

use std::f64::consts::SQRT_2;

use holmos_config::constants::{CLIP_SAMPLES, PART_SIZE, RPI_CAM_HOLE_PITCH_X, RPI_CAM_HOLE_PITCH_Y};
use holmos_config::Settings;
use holmos_csg::{union, CsgError, Solid};

use crate::helpers::{clip_profile, rounded_plate, ClipWave};
use crate::layout::Layout;
use crate::mount::{base, owis23hole, owis_block, BaseSpec};

const BASE_THICK: f64 = 5.0;
const KOSMOS_DIAMETER: f64 = 17.9;

// =============================================================================
// OBJECTIVES
// =============================================================================

/// Split OWIS block clamping a Kosmos objective with one screw.
pub fn kosmos_objective() -> Result<Solid, CsgError> {
    // self-cutting thread, through hole and head recess along the screw axis
    let clamp_hole = union([
        Solid::cylinder_d(3.3, 30.0, true)?,
        Solid::cylinder_d(4.5, 20.0, true)?.translate([0.0, 0.0, 10.0]),
        Solid::cylinder_d(7.5, 4.1, true)?.translate([0.0, 0.0, 18.0]),
    ]);

    let cuts = [
        Solid::cylinder_d(KOSMOS_DIAMETER, 20.0, true)?,
        Solid::cube([1.0, 40.0, 40.0], true)?.translate([0.0, 20.0, 0.0]),
        clamp_hole.rotate([0.0, 90.0, 0.0]).translate([0.0, 15.0, 0.0]),
        // weight saving
        Solid::cylinder_d(4.0, 20.0, true)?.translate([-4.0, -15.0, 0.0]),
        Solid::cylinder_d(4.0, 20.0, true)?.translate([4.0, -15.0, 0.0]),
        Solid::cube([8.0, 4.0, 20.0], true)?.translate([0.0, -15.0, 0.0]),
        Solid::cube([12.0, 10.0, 20.0], true)?.translate([0.0, -20.0, 0.0]),
        Solid::cube([10.0, 60.0, 20.0], true)?.translate([-20.0, 0.0, 0.0]),
        Solid::cube([10.0, 60.0, 20.0], true)?.translate([20.0, 0.0, 0.0]),
    ];
    Ok(cuts.into_iter().fold(owis_block()?, Solid::subtract))
}

/// Snap-in ring for a Kosmos objective, open at +x.
pub fn kosmos_objective_open(settings: &Settings) -> Result<Solid, CsgError> {
    let ring_thick = 3.0;
    let opening_diam = 15.0;
    let connector_w = 3.0;

    let base_plate = rounded_plate([30.0, 10.0, BASE_THICK], 4.0)?
        .rotate([90.0, 0.0, 0.0])
        .translate([0.0, -PART_SIZE / 2.0 + BASE_THICK / 2.0, 0.0])
        .union_with(base(settings, &BaseSpec::default())?);

    let ring = Solid::cylinder_d(KOSMOS_DIAMETER + 2.0 * ring_thick, 10.0, true)?
        .subtract(Solid::cylinder_d(KOSMOS_DIAMETER, 20.0, true)?)
        .subtract(
            Solid::cylinder_d(opening_diam, 20.0, true)?.translate([KOSMOS_DIAMETER / 2.0 + ring_thick, 0.0, 0.0]),
        );

    let connector_h = (PART_SIZE - KOSMOS_DIAMETER) / 2.0;
    let connector_yc = KOSMOS_DIAMETER / 2.0 + connector_h / 2.0;
    let connector = Solid::cube([connector_w, connector_h, 10.0], true)?;

    Ok(union([
        base_plate,
        ring,
        connector.clone().translate([5.0, -connector_yc, 0.0]),
        connector.translate([-5.0, -connector_yc, 0.0]),
    ]))
}

// =============================================================================
// CAMERA
// =============================================================================

/// Plate for the Raspberry Pi camera board, camera at the origin facing
/// down, one hole pair at `y = 0`.
pub fn rpi_plate(thick: f64) -> Result<Solid, CsgError> {
    let half_x = RPI_CAM_HOLE_PITCH_X / 2.0;
    let border = 2.0;
    let plate = rounded_plate(
        [2.0 * half_x + 2.0 * border, RPI_CAM_HOLE_PITCH_Y + 2.0 * border, thick],
        border,
    )?
    .translate([0.0, RPI_CAM_HOLE_PITCH_Y / 2.0, thick / 2.0]);

    let mut holes = Vec::new();
    for x in [half_x, -half_x] {
        for y in [0.0, RPI_CAM_HOLE_PITCH_Y] {
            holes.push(owis23hole()?.translate([x, y, 0.0]));
        }
    }
    Ok(holes.into_iter().fold(plate, Solid::subtract))
}

/// Camera plate on two curved struts above the base plate.
pub fn rpi_cam_mount(settings: &Settings) -> Result<Solid, CsgError> {
    let rpi_thick = 3.0;
    let strut_y_end = 14.5;
    let strut_thick = 3.0;

    let base_plate = rounded_plate([40.0, 10.0, BASE_THICK], 2.0)?
        .rotate([90.0, 0.0, 0.0])
        .translate([0.0, -PART_SIZE / 2.0 + BASE_THICK / 2.0, 0.0])
        .union_with(base(settings, &BaseSpec::default())?);

    let mut plate = rpi_plate(rpi_thick)?.translate([0.0, 0.0, -5.0]);
    for strut_x in [-7.5, 7.5] {
        let strut = Solid::cube([strut_thick, 20.0 + strut_y_end, 10.0], true)?
            .translate([strut_x, -(20.0 - strut_y_end) / 2.0, 0.0]);
        // quarter ellipse with its axis on the front top edge of the base plate
        let rounding = Solid::cylinder(10.0, 50.0, true)?
            .rotate([0.0, 90.0, 0.0])
            .scale([1.0, (strut_y_end + 20.0 - BASE_THICK) / 10.0, 1.0])
            .translate([0.0, -20.0 + BASE_THICK, -5.0]);
        plate = plate.union_with(strut.intersect(rounding));
    }

    Ok(base_plate.union_with(plate))
}

// =============================================================================
// SLIDE HOLDER
// =============================================================================

/// Trapezoid dovetail joining the slide clamps to their plate. The joint
/// lies in the `y = 0` plane with the tail toward -y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dovetail {
    pub height: f64,
    pub narrow: f64,
    pub wide: f64,
    /// Clearance added around the socket.
    pub pad: f64,
}

impl Default for Dovetail {
    fn default() -> Self {
        Self {
            height: 3.0,
            narrow: 5.0,
            wide: 7.0,
            pad: 0.1,
        }
    }
}

impl Dovetail {
    /// Tail of `length` along x, hollowed for flex.
    pub fn tail(&self, length: f64) -> Result<Solid, CsgError> {
        let (h, w0, w1) = (self.height, self.narrow, self.wide);
        let section = Solid::polygon(vec![
            [w0 / 2.0, 0.0],
            [-w0 / 2.0, 0.0],
            [-w1 / 2.0, -h],
            [w1 / 2.0, -h],
        ])?;
        let clearance = Solid::polygon(vec![
            [w0 / 4.0, -h / 2.0],
            [-w0 / 4.0, -h / 2.0],
            [-w1 / 4.0, -1.01 * h],
            [w1 / 4.0, -1.01 * h],
        ])?;
        Ok(section
            .subtract(clearance)
            .linear_extrude(length, true)?
            .rotate([0.0, 90.0, 0.0]))
    }

    /// Padded socket of `length` along x, cut into the plate.
    pub fn socket(&self, length: f64) -> Result<Solid, CsgError> {
        let (h, w0, w1, pad) = (self.height, self.narrow, self.wide, self.pad);
        let section = Solid::polygon(vec![
            [w0 / 2.0 + pad, 0.01],
            [-w0 / 2.0 - pad, 0.01],
            [-w1 / 2.0 - pad, -h - pad],
            [w1 / 2.0 + pad, -h - pad],
        ])?;
        Ok(section.linear_extrude(length, true)?.rotate([0.0, 90.0, 0.0]))
    }
}

/// Spring clip pressing a glass slide onto the `z = 0` plane, open
/// from +y.
pub fn slide_clamp(reach: f64, length: f64, base_height: f64, width: f64) -> Result<Solid, CsgError> {
    let wave = ClipWave::default();
    let back_thick = 4.0;
    let total_height = length + base_height;
    let clip_depth = wave.depth();

    let clip = clip_profile(&wave, reach, length, CLIP_SAMPLES)?
        .linear_extrude(width, false)?
        .rotate([0.0, -90.0, 0.0])
        .translate([width / 2.0, 0.0, 0.0]);

    let back = Solid::cube([width, total_height, back_thick], true)?.translate([
        0.0,
        -total_height / 2.0 + (length - reach),
        -back_thick / 2.0,
    ]);
    let foot = Solid::cube([width, base_height, back_thick + clip_depth], true)?.translate([
        0.0,
        -reach - base_height / 2.0,
        (clip_depth - back_thick) / 2.0,
    ]);

    Ok(union([clip, back, foot]))
}

/// Plate with two dovetailed slide clamps.
///
/// Assembled, the clamps sit in their sockets; printable, they lie flat
/// beside the plate.
pub fn slide_holder(settings: &Settings, layout: Layout) -> Result<Solid, CsgError> {
    let clamp_base = 2.0;
    let clamp_width = 8.0;
    let clamp_spacing = PART_SIZE - clamp_width;
    let clamp_reach = PART_SIZE / 2.0 - BASE_THICK - clamp_base;
    let clamp_length = SQRT_2 * clamp_reach;
    let joint_y = -clamp_reach - clamp_base;
    let dovetail = Dovetail::default();

    let socket = dovetail.socket(2.0 * clamp_width)?;
    let plate = Solid::cube([PART_SIZE, BASE_THICK, 10.0], true)?
        .translate([0.0, -(PART_SIZE - BASE_THICK) / 2.0, 0.0])
        .subtract(socket.clone().translate([PART_SIZE / 2.0, joint_y, 0.0]))
        .subtract(socket.translate([-PART_SIZE / 2.0, joint_y, 0.0]))
        .union_with(base(settings, &BaseSpec::default())?);

    let clamp = slide_clamp(clamp_reach, clamp_length, clamp_base, clamp_width)?
        .translate([0.0, 0.0, -1.0])
        .union_with(dovetail.tail(clamp_width)?.translate([0.0, joint_y, 0.0]));

    let clamps = match layout {
        Layout::Assembled => union([
            clamp.clone().translate([1.3 * clamp_spacing / 2.0, 0.0, 0.0]),
            clamp.translate([-clamp_spacing / 2.0, 0.0, 0.0]),
        ]),
        Layout::Printable => {
            let x = clamp_spacing / 2.0 + clamp_length + 5.0;
            let y = -PART_SIZE / 2.0 + clamp_width / 2.0;
            union([
                clamp.clone().rotate([0.0, 0.0, -90.0]).translate([x, y, 0.0]),
                clamp.rotate([0.0, 0.0, 90.0]).translate([-x, y, 0.0]),
            ])
        }
    };

    Ok(plate.union_with(clamps))
}
