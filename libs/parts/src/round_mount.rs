//! # Round Mounts
//!
//! Rings holding cylindrical parts (objectives, lenses, lasers, LEDs)
//! centered on the optical axis. A ring is either open by a wedge, which
//! makes it a snap-in clip, or closed with a slit and two screw tabs.

use holmos_config::constants::{M3_CLEARANCE_DIAMETER, M3_NUT_WIDTH, PART_SIZE};
use holmos_config::Settings;
use holmos_csg::{CsgError, HAlign, Solid, TextStyle, VAlign};
use serde::{Deserialize, Serialize};

use crate::helpers::{cyl_arc, hexagon, rounded_plate};
use crate::layout::{Layout, Pose};
use crate::mount::{base, BaseSpec};

const BASE_THICK: f64 = 5.0;
const CONNECTOR_WIDTH: f64 = 3.0;
/// Length of the ring body along the optical axis.
const Z_THICK: f64 = 10.0;
/// Stop thickness left below the main bore.
const STOP_THICK: f64 = 2.0;

/// Font used for the engraved diameter label.
pub const LABEL_FONT: &str = "Liberation Mono:style=Bold";

/// Turns the printed ring around so its stop faces the light source.
pub const ASSEMBLED_POSE: Pose = Pose::rotation([0.0, 180.0, 0.0]);

/// Parameters of a round mount. Defaults hold a Kosmos objective.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundMount {
    /// Diameter of the part to be held.
    pub inner_diam: f64,
    /// Wall thickness of the ring; sets its stiffness.
    pub ring_thick: f64,
    /// Half angle of the wedge opening at +y. `None` closes the ring and
    /// adds clamp tabs.
    pub opening_angle: Option<f64>,
    /// Smaller bore acting as an end stop, e.g. for a lens.
    pub stop_inner_diam: Option<f64>,
    /// Total length of the ring, stop included.
    pub cyl_length: f64,
    /// Length of the base clip; longer for heavy objectives.
    pub clip_length: f64,
}

impl Default for RoundMount {
    fn default() -> Self {
        Self {
            inner_diam: 17.9,
            ring_thick: 3.0,
            opening_angle: Some(30.0),
            stop_inner_diam: None,
            cyl_length: 10.0,
            clip_length: 10.0,
        }
    }
}

impl RoundMount {
    /// Clamped ring with a 1 mm wide stop for a lens of diameter `diam`.
    pub fn lens(diam: f64) -> Self {
        Self {
            inner_diam: diam,
            opening_angle: None,
            stop_inner_diam: Some(diam - 2.0),
            ..Self::default()
        }
    }

    /// Clamped ring without a stop, e.g. for a laser module.
    pub fn clamped(diam: f64) -> Self {
        Self {
            inner_diam: diam,
            opening_angle: None,
            ..Self::default()
        }
    }

    /// Outer diameter of the ring.
    pub fn outer_diam(&self) -> f64 {
        self.inner_diam + 2.0 * self.ring_thick
    }

    /// Length of a clamp tab from the ring axis side to its tip.
    pub fn clamp_length(&self) -> f64 {
        self.ring_thick + M3_NUT_WIDTH + 2.0
    }

    /// Center of the screw hole through the tab on the +x side, in printable
    /// coordinates. `None` for open rings.
    pub fn clamp_hole_center(&self) -> Option<[f64; 3]> {
        let tab_y = self.inner_diam / 2.0 + self.clamp_length() / 2.0;
        self.opening_angle
            .is_none()
            .then(|| [self.ring_thick, tab_y + self.ring_thick / 2.0, 0.0])
    }

    /// Label engraved into the base plate.
    pub fn label(&self) -> String {
        format!("d = {:.1}", self.inner_diam)
    }
}

/// Ring mount with base plate, connectors and diameter label.
pub fn round_mount_light(settings: &Settings, params: &RoundMount, layout: Layout) -> Result<Solid, CsgError> {
    let outer_diam = params.outer_diam();
    let base_y = -PART_SIZE / 2.0 + BASE_THICK / 2.0;

    let mut base_plate = rounded_plate([30.0, 10.0, BASE_THICK], 4.0)?
        .rotate([90.0, 0.0, 0.0])
        .translate([0.0, base_y, 0.0]);
    base_plate = base_plate.union_with(
        base(settings, &BaseSpec::with_z_length(params.clip_length))?.translate([
            0.0,
            0.0,
            (params.clip_length - 10.0) / 2.0,
        ]),
    );

    let opening = params.opening_angle.unwrap_or(0.0);
    let mut ring = cyl_arc(outer_diam / 2.0, params.cyl_length, 90.0 + opening, 90.0 - opening)?
        .translate([0.0, 0.0, (params.cyl_length - Z_THICK) / 2.0]);
    ring = match params.stop_inner_diam {
        None => ring.subtract(Solid::cylinder_d(params.inner_diam, 2.0 * params.cyl_length, true)?),
        Some(stop) => ring
            .subtract(Solid::cylinder_d(stop, 2.0 * params.cyl_length, true)?)
            .subtract(Solid::cylinder_d(params.inner_diam, Z_THICK, true)?.translate([0.0, 0.0, STOP_THICK])),
    };

    if params.opening_angle.is_none() {
        ring = clamp_tabs(ring, params)?;
    }

    let connector_h = (PART_SIZE - params.inner_diam) / 2.0;
    let connector_yc = params.inner_diam / 2.0 + connector_h / 2.0;
    let connector_xc = (params.inner_diam / 2.0).min(5.0);
    let connector = Solid::cube([CONNECTOR_WIDTH, connector_h, Z_THICK], true)?;
    let connectors = connector
        .clone()
        .translate([connector_xc, -connector_yc, 0.0])
        .union_with(connector.translate([-connector_xc, -connector_yc, 0.0]));

    let style = TextStyle {
        size: 3.0,
        halign: HAlign::Center,
        valign: VAlign::Center,
        font: Some(LABEL_FONT.to_string()),
    };
    let info_text = Solid::text(params.label(), style)?.linear_extrude(0.5, true)?;
    base_plate = base_plate.union_with(info_text.translate([0.0, base_y, Z_THICK / 2.0]));

    let mount = base_plate.union_with(ring).union_with(connectors);
    Ok(layout.place(mount, ASSEMBLED_POSE))
}

/// Clamped ring for a lens of diameter `diam`, resting on a 1 mm wide stop.
pub fn lens_mount(settings: &Settings, diam: f64, layout: Layout) -> Result<Solid, CsgError> {
    round_mount_light(settings, &RoundMount::lens(diam), layout)
}

/// Slits the ring at +y and bridges the slit with two tabs holding an M3
/// screw and a captive nut.
fn clamp_tabs(ring: Solid, params: &RoundMount) -> Result<Solid, CsgError> {
    let t = params.ring_thick;
    let clamp_length = params.clamp_length();

    let through_nut_hole = Solid::cylinder_d(M3_CLEARANCE_DIAMETER, 2.0 * t, true)?
        .union_with(hexagon(M3_NUT_WIDTH, t / 3.0)?.translate([0.0, 0.0, t / 2.0]));
    let single_clamp = rounded_plate([clamp_length, Z_THICK, t], 1.0)?.subtract(through_nut_hole.translate([t / 2.0, 0.0, 0.0]));

    let slit = Solid::cube([t, 2.0 * params.inner_diam, 2.0 * params.cyl_length], true)?
        .translate([0.0, params.inner_diam, 0.0]);
    let tab_y = params.inner_diam / 2.0 + clamp_length / 2.0;

    Ok(ring
        .subtract(slit)
        .union_with(single_clamp.clone().rotate([90.0, 0.0, 90.0]).translate([t, tab_y, 0.0]))
        .union_with(single_clamp.rotate([-90.0, 0.0, 90.0]).translate([-t, tab_y, 0.0])))
}

#[cfg(test)]
mod tests;
