//! # LED Mount
//!
//! Clip-in holder for a hexagonal star LED board. The back of the board sits
//! at `z = 0` facing +z; six barbed pins snap through its mounting holes.

use holmos_config::constants::PART_SIZE;
use holmos_config::Settings;
use holmos_csg::{union, CsgError, Solid};

use crate::mount::{base, BaseSpec};

/// Dimensions of the LED board and its clip pins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexLed {
    pub pcb_thick: f64,
    /// Radius of the circle through the board's mounting holes.
    pub hole_circle_r: f64,
    pub hole_count: usize,
    pub hole_r: f64,
    pub backplate_thick: f64,
    pub barb_height: f64,
    /// Radial overhang of the barb over the pin.
    pub barb_overhang: f64,
}

impl Default for HexLed {
    fn default() -> Self {
        Self {
            pcb_thick: 1.6,
            hole_circle_r: 19.0 / 2.0,
            hole_count: 6,
            hole_r: 1.6,
            backplate_thick: 4.0,
            barb_height: 2.0,
            barb_overhang: 0.3,
        }
    }
}

impl HexLed {
    /// One slit, barbed pin at the origin, standing on the backplate.
    fn pin(&self) -> Result<Solid, CsgError> {
        let barb = Solid::cone(
            self.hole_r + self.barb_overhang,
            self.hole_r - self.barb_overhang,
            self.barb_height,
            true,
        )?
        .translate([0.0, 0.0, self.pcb_thick + self.barb_height / 2.0]);
        let shaft = Solid::cylinder(self.hole_r, self.pcb_thick + self.backplate_thick, false)?
            .translate([0.0, 0.0, -self.backplate_thick]);
        let slit = Solid::cube(
            [
                4.0 * self.hole_r,
                4.0 * self.barb_overhang,
                2.0 * (self.backplate_thick + self.barb_height),
            ],
            true,
        )?;
        Ok(shaft.union_with(barb).subtract(slit))
    }
}

/// Ring backplate with six clip pins on the universal base.
pub fn hex_led_mount(settings: &Settings, led: &HexLed) -> Result<Solid, CsgError> {
    let r = led.hole_circle_r;
    let t = led.backplate_thick;

    let ring = Solid::cylinder(r + led.hole_r, t, true)?
        .subtract(Solid::cylinder(r - led.hole_r, 2.0 * t, true)?)
        .translate([0.0, 0.0, -t / 2.0]);
    let connector = Solid::cube([r, PART_SIZE / 2.0 - r, t], true)?.translate([
        0.0,
        -(PART_SIZE / 2.0 + r) / 2.0,
        -t / 2.0,
    ]);

    // thin the plate around each pin so it can flex
    let relief = Solid::cylinder(2.0 * led.hole_r, t / 2.0, true)?.translate([r, 0.0, -t / 4.01]);
    let pin = led.pin()?.translate([r, 0.0, 0.0]);

    let step = 360.0 / led.hole_count as f64;
    let angles: Vec<f64> = (0..led.hole_count).map(|i| step * i as f64).collect();
    let plate = angles
        .iter()
        .map(|a| relief.clone().rotate([0.0, 0.0, *a]))
        .fold(ring.union_with(connector), Solid::subtract);
    let pins = union(angles.iter().map(|a| pin.clone().rotate([0.0, 0.0, *a])));

    let clip = base(settings, &BaseSpec::with_z_length(2.0 * t))?;
    Ok(union([clip, plate, pins]))
}
