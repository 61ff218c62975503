//! # Configuration Constants
//!
//! Centralized constants for the part generators. All tolerances, facet
//! resolution presets and real-world hardware dimensions are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Facet header presets ($fa, $fs) and curve sampling
//! - **Rig**: Shared envelope of the microscope parts
//! - **Hardware**: Screws, nuts, rods and board hole patterns

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used when checking geometric invariants such as the corner radius of a
/// rounded plate against half the plate width.
///
/// # Example
///
/// ```rust
/// use holmos_config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-9;

// =============================================================================
// RESOLUTION CONSTANTS (OpenSCAD $fa, $fs)
// =============================================================================

/// OpenSCAD default for $fa (minimum fragment angle in degrees).
pub const DEFAULT_FA: f64 = 12.0;

/// OpenSCAD default for $fs (minimum fragment size).
pub const DEFAULT_FS: f64 = 2.0;

/// $fa used for printable output.
///
/// Five degree facets keep lens bores and rod holes round enough to clamp
/// without post-processing.
///
/// # Example
///
/// ```rust
/// use holmos_config::constants::{DEFAULT_FA, FINE_FA};
///
/// let max_fragments = 360.0 / FINE_FA;
/// assert_eq!(max_fragments, 72.0);
/// assert!(FINE_FA < DEFAULT_FA);
/// ```
pub const FINE_FA: f64 = 5.0;

/// $fs used for printable output.
pub const FINE_FS: f64 = 0.1;

/// Number of samples along a sampled clip or spring profile.
///
/// Trades smoothness of the printed flexure against the size of the emitted
/// polygon.
pub const CLIP_SAMPLES: usize = 50;

// =============================================================================
// RIG CONSTANTS
// =============================================================================

/// Edge length of the square envelope every upper part fits into.
///
/// The optical axis runs along z through the center of that square, so the
/// mount surface of every part sits at `y = -PART_SIZE / 2`.
pub const PART_SIZE: f64 = 40.0;

/// Offset from the optical axis down to the mount surface.
pub const AXIS_TO_BASE: f64 = PART_SIZE / 2.0;

/// Default length of a base along the optical axis.
pub const BASE_Z_LENGTH: f64 = 10.0;

// =============================================================================
// HARDWARE CONSTANTS
// =============================================================================

/// Distance between the two M2.3 threads of an OWIS 40 rail carrier.
pub const OWIS_HOLE_PITCH: f64 = 20.0;

/// Core diameter of a hole an M2.3 screw cuts its own thread into.
pub const M23_CORE_DIAMETER: f64 = 2.0;

/// Clearance diameter for an M3 screw.
pub const M3_CLEARANCE_DIAMETER: f64 = 3.5;

/// Flat-to-flat width of an M3 nut.
pub const M3_NUT_WIDTH: f64 = 5.5;

/// Diameter of the cage rods.
pub const ROD_DIAMETER: f64 = 6.0;

/// Separation of the two cage rods the clamps slide onto.
pub const ROD_SEPARATION: f64 = 30.0;

/// Offset of the rod plane below the optical axis.
pub const ROD_AXIS_OFFSET: f64 = 25.0;

/// Distance from the line through the rod pair to the third cage rod.
pub const THIRD_ROD_DISTANCE: f64 = 60.0;

/// Diagonal distance from one rod of the pair to the third cage rod.
///
/// # Example
///
/// ```rust
/// use holmos_config::constants::{third_rod_diagonal, ROD_SEPARATION, THIRD_ROD_DISTANCE};
///
/// let d = third_rod_diagonal();
/// assert!(d > THIRD_ROD_DISTANCE);
/// assert!(d < THIRD_ROD_DISTANCE + ROD_SEPARATION / 2.0);
/// ```
pub fn third_rod_diagonal() -> f64 {
    (ROD_SEPARATION / 2.0).hypot(THIRD_ROD_DISTANCE)
}

/// Default amount the rod clamp is narrower than the rod.
///
/// This is how far the clip must bend to let the rod in.
pub const DEFAULT_ROD_TIGHTNESS: f64 = 0.5;

/// Horizontal pitch of the Raspberry Pi camera board mounting holes.
pub const RPI_CAM_HOLE_PITCH_X: f64 = 21.0;

/// Vertical pitch of the Raspberry Pi camera board mounting holes.
pub const RPI_CAM_HOLE_PITCH_Y: f64 = 12.5;

/// Raspberry Pi 3B+ mounting hole pitch along the long board edge.
pub const RPI_BOARD_HOLE_PITCH_LONG: f64 = 58.0;

/// Raspberry Pi 3B+ mounting hole pitch along the short board edge.
pub const RPI_BOARD_HOLE_PITCH_SHORT: f64 = 49.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use holmos_config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
