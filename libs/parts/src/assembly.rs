//! # Reference Assembly
//!
//! Shows how the parts go together: every station places a part in its
//! assembled layout at a height along the optical axis, next to one cage rod.
//! The same station list numbers the printable part files.

use std::fmt;

use holmos_config::constants::{ROD_AXIS_OFFSET, ROD_DIAMETER, ROD_SEPARATION};
use holmos_config::Settings;
use holmos_csg::{union, CsgError, Solid};
use tracing::debug;

use crate::cage::{cage_base_plate, cage_side_stabilizer, cage_stabilizer, rpi_mount};
use crate::layout::Layout;
use crate::led::{hex_led_mount, HexLed};
use crate::microscope::{kosmos_objective, kosmos_objective_open, rpi_cam_mount, slide_holder};
use crate::mirror::{crane_45deg_mirror, MirrorMount};
use crate::round_mount::{lens_mount, round_mount_light, RoundMount};

/// Height of the camera above the origin of the rig.
pub const ASSEMBLY_Z0: f64 = 30.0;
/// Length of the cage rod drawn with the assembly.
pub const RAIL_LENGTH: f64 = 600.0;

/// Every part the generator knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    RpiMount,
    RpiCamMount,
    ObjectiveMount,
    SlideHolder,
    CraneMirror,
    CondenserMount,
    CageStabilizer,
    LaserMount,
    CageBasePlate,
    CageSideStabilizer,
    KosmosObjective,
    KosmosObjectiveOpen,
    HexLedMount,
    MirrorMountFront,
    MirrorMountBack,
    MirrorMount,
}

impl Part {
    pub const ALL: [Part; 16] = [
        Part::RpiMount,
        Part::RpiCamMount,
        Part::ObjectiveMount,
        Part::SlideHolder,
        Part::CraneMirror,
        Part::CondenserMount,
        Part::CageStabilizer,
        Part::LaserMount,
        Part::CageBasePlate,
        Part::CageSideStabilizer,
        Part::KosmosObjective,
        Part::KosmosObjectiveOpen,
        Part::HexLedMount,
        Part::MirrorMountFront,
        Part::MirrorMountBack,
        Part::MirrorMount,
    ];

    /// File and command line name.
    pub fn name(self) -> &'static str {
        match self {
            Part::RpiMount => "rpi_mount",
            Part::RpiCamMount => "rpi_cam_mount",
            Part::ObjectiveMount => "objective_lens_mount",
            Part::SlideHolder => "slide_holder",
            Part::CraneMirror => "crane_mirror",
            Part::CondenserMount => "condenser_lens_mount",
            Part::CageStabilizer => "cage_stabilizer",
            Part::LaserMount => "laser_mount",
            Part::CageBasePlate => "base_plate",
            Part::CageSideStabilizer => "cage_side_stabilizer",
            Part::KosmosObjective => "kosmos_objective",
            Part::KosmosObjectiveOpen => "kosmos_objective_open",
            Part::HexLedMount => "hex_led_mount",
            Part::MirrorMountFront => "mirror_mount_front",
            Part::MirrorMountBack => "mirror_mount_back",
            Part::MirrorMount => "mirror_mount",
        }
    }

    pub fn from_name(name: &str) -> Option<Part> {
        Part::ALL.into_iter().find(|part| part.name() == name)
    }

    /// Builds the part in `layout`. Parts that are printed in place ignore
    /// the layout.
    pub fn build(self, settings: &Settings, layout: Layout) -> Result<Solid, CsgError> {
        match self {
            Part::RpiMount => rpi_mount(settings, layout),
            Part::RpiCamMount => rpi_cam_mount(settings),
            Part::ObjectiveMount => round_mount_light(settings, &objective_mount(), layout),
            Part::SlideHolder => slide_holder(settings, layout),
            Part::CraneMirror => crane_45deg_mirror(settings),
            Part::CondenserMount => lens_mount(settings, 25.4, layout),
            Part::CageStabilizer => cage_stabilizer(settings),
            Part::LaserMount => round_mount_light(settings, &RoundMount::clamped(12.0), layout),
            Part::CageBasePlate => cage_base_plate(settings),
            Part::CageSideStabilizer => cage_side_stabilizer(settings),
            Part::KosmosObjective => kosmos_objective(),
            Part::KosmosObjectiveOpen => kosmos_objective_open(settings),
            Part::HexLedMount => hex_led_mount(settings, &HexLed::default()),
            Part::MirrorMountFront => MirrorMount::default().front_plate_three_springs(layout),
            Part::MirrorMountBack => MirrorMount::default().mounted_back_frame(),
            Part::MirrorMount => MirrorMount::default().assembly(),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Closed ring for a 20 mm objective with a 19 mm stop.
fn objective_mount() -> RoundMount {
    RoundMount {
        inner_diam: 20.0,
        opening_angle: None,
        stop_inner_diam: Some(19.0),
        ..RoundMount::default()
    }
}

/// A part at a height above the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    pub z: f64,
    pub part: Part,
}

const fn station(z: f64, part: Part) -> Station {
    Station { z, part }
}

/// Parts along the optical axis, camera at 0.
pub const STATIONS: [Station; 8] = [
    station(50.0, Part::RpiMount),
    station(0.0, Part::RpiCamMount),
    station(185.0, Part::ObjectiveMount),
    station(216.0, Part::SlideHolder),
    station(275.0, Part::CraneMirror),
    station(306.0, Part::CondenserMount),
    station(500.0, Part::CageStabilizer),
    station(550.0, Part::LaserMount),
];

/// Foot plate used when the rig stands on its bottom end.
pub const BASE_PLATE_STATION: Station = station(-35.0, Part::CageBasePlate);

/// Stations of the rig, the foot plate first when `mount_bottom`.
pub fn stations(mount_bottom: bool) -> Vec<Station> {
    mount_bottom
        .then_some(BASE_PLATE_STATION)
        .into_iter()
        .chain(STATIONS)
        .collect()
}

/// Every station part in its assembled layout around one cage rod.
pub fn full_assembly(settings: &Settings, mount_bottom: bool) -> Result<Solid, CsgError> {
    let rod = Solid::cylinder_d(ROD_DIAMETER, RAIL_LENGTH, true)?.translate([
        ROD_SEPARATION / 2.0,
        -ROD_AXIS_OFFSET,
        RAIL_LENGTH / 2.0,
    ]);

    let mut parts = vec![rod];
    for Station { z, part } in stations(mount_bottom) {
        debug!(%part, z, "Adding part to assembly");
        parts.push(part.build(settings, Layout::Assembled)?.translate([0.0, 0.0, ASSEMBLY_Z0 + z]));
    }
    Ok(union(parts))
}

/// Printable parts in file order: the stations, then the parts that are not
/// part of the reference rig.
pub fn catalogue(mount_bottom: bool) -> Vec<Part> {
    let mut parts: Vec<Part> = stations(mount_bottom).into_iter().map(|s| s.part).collect();
    for part in Part::ALL {
        if !parts.contains(&part) {
            parts.push(part);
        }
    }
    parts
}

/// File name of the `index`-th catalogue part, e.g. `03 - slide_holder.scad`.
pub fn file_name(index: usize, part: Part) -> String {
    format!("{index:02} - {part}.scad")
}
