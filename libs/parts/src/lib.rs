//! # Holmos Parts
//!
//! Parametric generators for the printed parts of the Holmos microscope rig.
//!
//! ## Architecture
//!
//! ```text
//! helpers → mount (universal base) → parts → assembly / catalogue
//! ```
//!
//! Every part is a pure function returning a [`Solid`]. Parts that attach to
//! the rig take the [`Settings`] selecting the universal base, and parts
//! that are printed in a different orientation than they are used take a
//! [`Layout`].
//!
//! ## Example
//!
//! ```rust
//! use holmos_config::Settings;
//! use holmos_parts::{round_mount_light, Layout, RoundMount};
//!
//! let ring = round_mount_light(&Settings::default(), &RoundMount::lens(25.4), Layout::Printable)?;
//! assert!(ring.bounds().is_some());
//! # Ok::<(), holmos_csg::CsgError>(())
//! ```
//!
//! [`Solid`]: holmos_csg::Solid
//! [`Settings`]: holmos_config::Settings

pub mod assembly;
pub mod cage;
pub mod helpers;
pub mod layout;
pub mod led;
pub mod microscope;
pub mod mirror;
pub mod mount;
pub mod round_mount;

// Re-export public API
pub use assembly::{catalogue, file_name, full_assembly, Part, Station, STATIONS};
pub use layout::{Layout, Pose};
pub use mirror::{MirrorMount, SpringStyle};
pub use mount::{base, BaseSpec};
pub use round_mount::{round_mount_light, RoundMount};
