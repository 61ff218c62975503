//! # Holmos CSG
//!
//! Constructive solid geometry expression trees for the Holmos part
//! generators.
//!
//! ## Architecture
//!
//! ```text
//! primitives → transforms/booleans → Solid tree → resolve_holes → OpenSCAD text
//! ```
//!
//! This crate never meshes anything. Boolean evaluation, triangulation and
//! extrusion are done by the external renderer reading the emitted source.
//! For tests, [`Solid::contains`] and [`Solid::bounds`] answer membership
//! and extent questions analytically on the tree itself.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use holmos_csg::{union, Solid};
//!
//! let plate = Solid::cube([40.0, 40.0, 10.0], true)?;
//! let holes = union([-10.0, 10.0].map(|x| {
//!     Solid::cylinder(1.0, 20.0, true).map(|c| c.translate([x, 0.0, 0.0]))
//! }).into_iter().collect::<Result<Vec<_>, _>>()?);
//! let part = plate.subtract(holes);
//! assert!(!part.contains(DVec3::new(10.0, 0.0, 0.0)));
//! assert!(part.contains(DVec3::new(0.0, 0.0, 0.0)));
//! # Ok::<(), holmos_csg::CsgError>(())
//! ```

pub mod error;
pub mod export;
pub mod ops;
pub mod query;
pub mod scad;
pub mod solid;
pub mod transform;

// Re-export public API
pub use error::CsgError;
pub use export::write_scad;
pub use ops::{difference, intersection, union};
pub use query::Aabb;
pub use scad::{to_scad, ScadDocument, ScadHeader};
pub use solid::{HAlign, Solid, TextStyle, VAlign};
