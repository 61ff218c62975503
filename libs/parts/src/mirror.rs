//! # Mirror Mounts
//!
//! A two-axis flexure mirror mount and the fixed 45 degree mirror used on
//! the crane.
//!
//! The flexure mount faces +z with the mirror surface at `z = 0` and is
//! square around `x = y = 0`. One corner of the center plate is held by
//! springs, the other three are pushed forward by screws from the back frame.

use std::f64::consts::{PI, SQRT_2};

use holmos_config::constants::{M3_CLEARANCE_DIAMETER, M3_NUT_WIDTH, PART_SIZE};
use holmos_config::Settings;
use holmos_csg::{union, CsgError, Solid};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::helpers::{hexagon, linspace, rounded_plate, tapered_pin};
use crate::layout::Layout;
use crate::mount::{base, owis23hole, owis_holes, BaseSpec};

/// Samples along one side of the C spring profile.
const SPRING_SAMPLES: usize = 50;

/// Spring joining the center plate to the back frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpringStyle {
    /// Two parallel leaf springs per corner.
    #[default]
    Bars,
    /// C-shaped leaf springs outside the corner.
    CShape,
}

/// Depths along z derived from the mount parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thicknesses {
    /// Protrusion of the center plate caused by the pre-tilt.
    pub pre_tilt_depth: f64,
    pub front_frame: f64,
    pub back_wall: f64,
}

/// Parameters of the flexure mirror mount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MirrorMount {
    pub pre_tilt_deg: f64,
    /// Total depth of front frame and back wall.
    pub thickness: f64,
    pub front_frame_thickness: f64,
    pub center_thick: f64,
    /// Side of the square outer frame.
    pub frame_size: f64,
    /// Side of the movable center plate.
    pub center_size: f64,
    /// Smallest cross-section of a flexure.
    pub flexure_thick: f64,
    /// Smallest thickness of a leaf spring.
    pub spring_thick: f64,
    /// Gap between moving and fixed parts.
    pub gap: f64,
    /// Cross-section of the pins stuck into the back frame.
    pub join_thick: f64,
    pub screw_diam: f64,
    pub hex_width: f64,
    pub spring_style: SpringStyle,
}

impl Default for MirrorMount {
    fn default() -> Self {
        Self {
            pre_tilt_deg: 3.0,
            thickness: 15.0,
            front_frame_thickness: 10.0,
            center_thick: 4.0,
            frame_size: PART_SIZE,
            center_size: 30.0,
            flexure_thick: 1.0,
            spring_thick: 0.5,
            gap: 2.0,
            join_thick: 2.0,
            screw_diam: M3_CLEARANCE_DIAMETER,
            hex_width: M3_NUT_WIDTH,
            spring_style: SpringStyle::Bars,
        }
    }
}

impl MirrorMount {
    /// Frame depths; warns when the back wall is too thin to hold nuts.
    pub fn thicknesses(&self) -> Thicknesses {
        let pre_tilt_depth = self.pre_tilt_deg.to_radians().tan() * self.center_size * SQRT_2;
        let back_wall = self.thickness - self.front_frame_thickness;
        if back_wall < 2.0 * self.gap {
            warn!(back_wall, gap = self.gap, "Mirror mount back wall is only {back_wall:.1} thick");
        }
        Thicknesses {
            pre_tilt_depth,
            front_frame: self.front_frame_thickness,
            back_wall,
        }
    }

    /// Screw positions at the four corners of the center plate.
    fn screw_centers(&self) -> [[f64; 2]; 4] {
        corners(self.center_size / 2.0 - self.gap)
    }

    /// Untilted center plate, mirror side at `z = 0`.
    pub fn center_plate(&self) -> Result<Solid, CsgError> {
        Ok(
            Solid::cube([self.center_size, self.center_size, self.center_thick], true)?
                .translate([0.0, 0.0, -self.center_thick / 2.0]),
        )
    }

    /// Front frame with the center plate hinged on two flexures at the
    /// +x +y corner, pre-tilted so the -x -y corner sinks in.
    pub fn front_plate_flex_corner(&self) -> Result<Solid, CsgError> {
        let front = self.thicknesses().front_frame;
        let inner = self.center_size + 2.0 * self.gap;
        let frame = Solid::cube([self.frame_size, self.frame_size, front], true)?
            .translate([0.0, 0.0, -front / 2.0])
            .subtract(Solid::cube([inner, inner, 4.0 * front], true)?);

        let half = self.center_size / 2.0;
        let tilt = self.pre_tilt_deg / SQRT_2;
        let mut plate = self
            .center_plate()?
            .translate([-half, -half, 0.0])
            .rotate([tilt, -tilt, 0.0])
            .translate([half, half, 0.0]);

        // a single strut would allow rotation about z
        let flexure_length = self.frame_size / 2.0;
        let along = (self.frame_size - flexure_length) / 2.0;
        let across = (self.center_size - self.flexure_thick) / 2.0 - 2.0 * self.gap;
        let flexure = Solid::cube([flexure_length, self.flexure_thick, self.flexure_thick], true)?;
        let z = -self.center_thick - self.flexure_thick;
        for (x, y, rot) in [(along, across, 0.0), (across, along, 90.0)] {
            plate = plate.union_with(flexure.clone().rotate([0.0, 0.0, rot]).translate([x, y, z]));
        }

        Ok(frame.union_with(plate))
    }

    /// Center plate hung on three spring groups, with screw pads and
    /// dimples for the ball ends of the adjustment screws.
    ///
    /// Printable, the springs are turned to print without support; this is
    /// not a rigid move of the assembled plate.
    pub fn front_plate_three_springs(&self, layout: Layout) -> Result<Solid, CsgError> {
        let group = match self.spring_style {
            SpringStyle::Bars => self.spring_group_bars(layout)?,
            SpringStyle::CShape => self.spring_group_c(layout)?,
        };

        let mut parts = vec![
            self.center_plate()?,
            group.clone(),
            group.clone().rotate([0.0, 0.0, 90.0]),
            group.rotate([0.0, 0.0, -90.0]),
        ];
        let mut dimples = Vec::new();
        for [x, y] in self.screw_centers() {
            parts.push(
                Solid::cylinder_d(2.5 * self.screw_diam, self.center_thick, true)?
                    .translate([x, y, -self.center_thick / 2.0]),
            );
            dimples.push(Solid::sphere_d(1.3 * self.screw_diam)?.translate([x, y, 0.0]));
        }

        Ok(dimples.into_iter().fold(union(parts), Solid::subtract))
    }

    /// Pair of parallel leaf springs at the +x +y corner, joined to the
    /// center plate through a drilled pad and pinned into the back frame.
    pub fn spring_group_bars(&self, layout: Layout) -> Result<Solid, CsgError> {
        let join = self.join_thick;
        let plate_size = 3.0 * join;
        let plate_thick = self.center_thick;
        let plate_xy = self.frame_size / 2.0 - plate_size / 2.0;

        let plate = Solid::cube([plate_size, plate_size, plate_thick], true)?
            .translate([plate_xy, plate_xy, -plate_thick / 2.0])
            .subtract(Solid::cube([join, join, 5.0 * plate_thick], true)?.translate([plate_xy, plate_xy, 0.0]));

        // spring assembly around the joint at x = y = 0
        let spring_height = self.front_frame_thickness - self.center_thick;
        let spring_length = self.frame_size / 2.0;

        let shoulder = Solid::cube([plate_size, join, spring_height / 3.0], true)?;
        let top_shoulder = shoulder
            .clone()
            .translate([0.0, 0.0, -spring_height / 6.0 - self.center_thick]);
        let bottom_shoulder = shoulder.translate([0.0, 0.0, spring_height / 6.0 - self.front_frame_thickness]);

        let spring = Solid::cube([spring_length, join, self.spring_thick], true)?.translate([-spring_length / 2.0, 0.0, 0.0]);
        let top_spring = spring
            .clone()
            .translate([0.0, 0.0, -self.center_thick - spring_height / 3.0]);
        let bottom_spring = spring.translate([0.0, 0.0, -self.center_thick - 2.0 * spring_height / 3.0]);

        let connector = Solid::cube([join, join, spring_height / 3.0], true)?.translate([
            -spring_length + join / 2.0,
            0.0,
            -self.center_thick - spring_height / 2.0,
        ]);

        let taper = [0.3, 0.1];
        let top_pin = tapered_pin([join, join, self.center_thick], taper)?.translate([0.0, 0.0, -self.center_thick / 2.0]);
        let bottom_thick = self.thickness - self.front_frame_thickness;
        let bottom_pin = tapered_pin([join, join, bottom_thick], taper)?
            .rotate([180.0, 0.0, 0.0])
            .translate([0.0, 0.0, -bottom_thick / 2.0 - self.front_frame_thickness]);

        let mut springs = union([
            top_shoulder,
            bottom_shoulder,
            top_spring,
            bottom_spring,
            connector,
            top_pin,
            bottom_pin,
        ]);
        if layout == Layout::Printable {
            // flush with the bottom of the center plate
            springs = springs
                .rotate([90.0, 0.0, 0.0])
                .translate([0.0, self.center_thick, -self.center_thick + join / 2.0]);
        }

        Ok(plate.union_with(springs.translate([plate_xy, plate_xy, 0.0])))
    }

    /// Pair of C springs on two struts along the +x +y diagonal.
    pub fn spring_group_c(&self, layout: Layout) -> Result<Solid, CsgError> {
        let strut_length = self.frame_size / SQRT_2 - self.gap;
        let strut_thick = self.center_thick;
        let strut_width = self.center_thick;
        let strut = Solid::cube([strut_length, strut_width, strut_thick], true)?.translate([
            strut_length / 2.0,
            0.0,
            -strut_thick / 2.0,
        ]);
        let strut_y = (self.gap + strut_width) / 2.0;
        let struts = strut
            .clone()
            .translate([0.0, strut_y, 0.0])
            .union_with(strut.translate([0.0, -strut_y, 0.0]));

        let front = self.thicknesses().front_frame;
        let extrusion = (self.frame_size - self.center_size) / 2.0 - self.gap;
        let spring_height = front - strut_thick;
        // no wider than high to print upright
        let spring_width = spring_height;
        let spring = self
            .single_spring_c(extrusion, spring_height, spring_width)?
            .translate([0.0, self.gap, -strut_thick - spring_height / 2.0]);

        let mut springs = union([
            spring.clone(),
            spring.mirror([0.0, 1.0, 0.0]),
            Solid::cube([extrusion, 0.95 * self.gap, strut_thick], true)?.translate([0.0, 0.0, -strut_thick / 2.0]),
            Solid::cube([extrusion, 2.0 * self.gap, self.spring_thick], true)?.translate([
                0.0,
                0.0,
                -strut_thick - self.spring_thick / 2.0,
            ]),
        ]);
        if layout == Layout::Printable {
            springs = springs
                .rotate([0.0, -90.0, 0.0])
                .translate([extrusion + self.gap, 0.0, extrusion / 2.0 - self.center_thick]);
        }
        let springs = springs.translate([strut_length - extrusion / 2.0, 0.0, 0.0]);

        Ok(struts.union_with(springs).rotate([0.0, 0.0, 45.0]))
    }

    /// One-sided C spring centered in z and extruded along x, attached at
    /// `y = 0` and flexing into +y.
    pub fn single_spring_c(&self, extrusion: f64, height: f64, width: f64) -> Result<Solid, CsgError> {
        let phis = linspace(-0.6 * PI, 0.5 * PI, SPRING_SAMPLES);
        let (rx, ry) = (width / 2.0, height / 2.0);
        let (ix, iy) = (rx - self.spring_thick, ry - self.spring_thick);

        let outer = phis.iter().map(|phi| [rx * phi.cos(), ry * phi.sin()]);
        let inner = phis.iter().rev().map(|phi| [ix * phi.cos(), iy * phi.sin()]);
        let profile = Solid::polygon(outer.chain(inner).collect())?;

        Ok(profile
            .linear_extrude(extrusion, false)?
            .rotate([0.0, 0.0, 90.0])
            .rotate([0.0, 90.0, 0.0])
            .translate([-extrusion / 2.0, 0.0, 0.0]))
    }

    /// Back frame with screw holes, nut traps and sockets for the spring
    /// pins.
    pub fn back_frame(&self) -> Result<Solid, CsgError> {
        let Thicknesses {
            front_frame, back_wall, ..
        } = self.thicknesses();
        let mut frame = Solid::cube([self.frame_size, self.frame_size, back_wall], true)?.translate([
            0.0,
            0.0,
            -back_wall / 2.0 - front_frame,
        ]);

        let nut_depth = self.gap;
        for [x, y] in self.screw_centers() {
            frame = frame
                .subtract(Solid::cylinder_d(1.1 * self.screw_diam, 10.0 * self.thickness, true)?.translate([x, y, 0.0]))
                .subtract(hexagon(self.hex_width, 2.0 * nut_depth)?.translate([x, y, -front_frame - nut_depth / 2.0]));
        }

        let pin_socket = Solid::cube([self.join_thick, self.join_thick, 10.0 * self.thickness], true)?;
        for [x, y] in corners(self.frame_size / 2.0 - 1.5 * self.join_thick) {
            frame = frame.subtract(pin_socket.clone().translate([x, y, 0.0]));
        }
        Ok(frame)
    }

    /// Back frame with OWIS threads in its bottom face.
    pub fn mounted_back_frame(&self) -> Result<Solid, CsgError> {
        let z = -self.front_frame_thickness - (self.thickness - self.front_frame_thickness) / 2.0;
        Ok(self
            .back_frame()?
            .subtract(owis_holes(true)?.translate([0.0, 0.0, z])))
    }

    /// Front plate and back frame together, as mounted.
    pub fn assembly(&self) -> Result<Solid, CsgError> {
        Ok(self
            .front_plate_three_springs(Layout::Assembled)?
            .union_with(self.mounted_back_frame()?))
    }
}

fn corners(d: f64) -> [[f64; 2]; 4] {
    [[d, -d], [-d, d], [d, d], [-d, -d]]
}

// =============================================================================
// CRANE MIRROR
// =============================================================================

/// Distance of the mirror from the optical axis.
const CRANE_MIRROR_OFFSET: f64 = 35.0;
/// Distance from the mirror to the camera.
const CRANE_CAMERA_DISTANCE: f64 = 300.0;

/// Tilt of the crane mirror that folds a beam `CRANE_MIRROR_OFFSET` off the
/// axis back onto the camera.
pub fn crane_mirror_angle() -> f64 {
    -(CRANE_MIRROR_OFFSET / CRANE_CAMERA_DISTANCE).atan().to_degrees() / 2.0
}

/// Open frame with a tilted mirror plate beside it, for a movable 45 degree
/// mirror. The mirror plate takes four M2.3 screws on a 30 mm circle.
pub fn crane_45deg_mirror(settings: &Settings) -> Result<Solid, CsgError> {
    let screw_offset = 30.0 / 2.0 / SQRT_2;
    let mirror_plate = 30.0;
    let thick = 10.0;
    let angle = crane_mirror_angle();

    let frame = rounded_plate([PART_SIZE, PART_SIZE, thick], 2.0)?
        .subtract(rounded_plate([30.0, 30.0, 2.0 * thick], 2.0)?);

    let blank = rounded_plate([mirror_plate, mirror_plate, thick], 2.0)?
        .union_with(Solid::cylinder_d(20.0, 2.0 * thick, true)?.hole());

    // threads from above into the top face
    let thread = owis23hole()?.rotate([0.0, 180.0, 0.0]).hole();
    let mut threaded = blank.clone();
    for x in [1.0, -1.0] {
        for y in [1.0, -1.0] {
            threaded = threaded.union_with(thread.clone().translate([x * screw_offset, y * screw_offset, thick / 2.0]));
        }
    }
    let threaded = threaded
        .rotate([0.0, angle, 0.0])
        .translate([0.0, 0.0, PART_SIZE * (-angle).to_radians().tan()]);

    Ok(union([
        frame,
        blank.translate([CRANE_MIRROR_OFFSET, 0.0, 0.0]),
        threaded.translate([CRANE_MIRROR_OFFSET, 0.0, 0.0]),
        base(settings, &BaseSpec::default())?,
    ]))
}

#[cfg(test)]
mod tests;
