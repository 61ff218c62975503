//! # Solid Tree
//!
//! The immutable CSG node type and its primitive constructors.
//!
//! Every node owns its children. Composition never mutates an existing
//! subtree in place; transforms and booleans consume their operands and
//! return a new node.
//!
//! ## Example
//!
//! ```rust
//! use holmos_csg::Solid;
//!
//! let plate = Solid::cube([40.0, 40.0, 10.0], true)?;
//! let bore = Solid::cylinder_d(17.9, 20.0, true)?;
//! let ring = plate.subtract(bore);
//! assert_eq!(ring.node_count(), 3);
//! # Ok::<(), holmos_csg::CsgError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CsgError;

// =============================================================================
// TEXT STYLE
// =============================================================================

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VAlign {
    Top,
    Center,
    Baseline,
    Bottom,
}

/// Layout of a text label; glyph outlines are produced by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Approximate glyph height.
    pub size: f64,
    /// Horizontal alignment.
    pub halign: HAlign,
    /// Vertical alignment.
    pub valign: VAlign,
    /// Font name in fontconfig syntax, renderer default when `None`.
    pub font: Option<String>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 10.0,
            halign: HAlign::Left,
            valign: VAlign::Baseline,
            font: None,
        }
    }
}

// =============================================================================
// SOLID
// =============================================================================

/// A node in a CSG expression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Solid {
    // =========================================================================
    // 3D PRIMITIVES
    // =========================================================================

    /// Axis-aligned box.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cube([x, y, z], center=true);
    /// ```
    Cube {
        /// Size as [x, y, z].
        size: [f64; 3],
        /// Whether centered at origin.
        center: bool,
    },

    /// Sphere about the origin.
    Sphere {
        /// Radius.
        radius: f64,
    },

    /// Cylinder or cone frustum about the z axis.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cylinder(h=10, r1=2, r2=1, center=true);
    /// ```
    Cylinder {
        /// Height.
        height: f64,
        /// Bottom radius.
        radius1: f64,
        /// Top radius.
        radius2: f64,
        /// Whether centered in z.
        center: bool,
    },

    /// Polyhedron from vertices and faces.
    Polyhedron {
        /// Vertex positions.
        points: Vec<[f64; 3]>,
        /// Face vertex indices.
        faces: Vec<Vec<usize>>,
    },

    // =========================================================================
    // 2D PRIMITIVES
    // =========================================================================

    /// Implicitly closed polygon in the xy plane.
    Polygon {
        /// Vertex positions.
        points: Vec<[f64; 2]>,
    },

    /// Text label in the xy plane.
    Text {
        /// Label content.
        label: String,
        /// Layout options.
        style: TextStyle,
    },

    // =========================================================================
    // EXTRUSIONS
    // =========================================================================

    /// Linear extrusion of a 2D child along +z.
    LinearExtrude {
        /// Extrusion height.
        height: f64,
        /// Whether centered in z.
        center: bool,
        /// Child 2D geometry.
        child: Box<Solid>,
    },

    // =========================================================================
    // TRANSFORMS
    // =========================================================================

    /// Translation.
    Translate {
        /// Translation vector [x, y, z].
        offset: [f64; 3],
        /// Child geometry.
        child: Box<Solid>,
    },

    /// Rotation by Euler angles in degrees, applied about x, then y, then z.
    Rotate {
        /// Rotation angles [x, y, z] in degrees.
        angles: [f64; 3],
        /// Child geometry.
        child: Box<Solid>,
    },

    /// Scale.
    Scale {
        /// Scale factors [x, y, z].
        factors: [f64; 3],
        /// Child geometry.
        child: Box<Solid>,
    },

    /// Mirror across the plane through the origin with the given normal.
    Mirror {
        /// Mirror plane normal.
        normal: [f64; 3],
        /// Child geometry.
        child: Box<Solid>,
    },

    // =========================================================================
    // BOOLEAN OPERATIONS
    // =========================================================================

    /// Union of children.
    Union {
        /// Child geometries.
        children: Vec<Solid>,
    },

    /// Difference (first child minus rest).
    Difference {
        /// Child geometries.
        children: Vec<Solid>,
    },

    /// Intersection of children.
    Intersection {
        /// Child geometries.
        children: Vec<Solid>,
    },

    // =========================================================================
    // MODIFIERS
    // =========================================================================

    /// Construction-only hole, subtracted from the whole tree on resolution.
    Hole {
        /// Geometry to cut away.
        child: Box<Solid>,
    },

    /// No geometry.
    Empty,
}

// =============================================================================
// VALIDATION
// =============================================================================

fn finite(name: &'static str, value: f64) -> Result<f64, CsgError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CsgError::InvalidDimension { name, value })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<f64, CsgError> {
    match finite(name, value)? {
        v if v >= 0.0 => Ok(v),
        value => Err(CsgError::InvalidDimension { name, value }),
    }
}

fn positive(name: &'static str, value: f64) -> Result<f64, CsgError> {
    match finite(name, value)? {
        v if v > 0.0 => Ok(v),
        value => Err(CsgError::InvalidDimension { name, value }),
    }
}

fn all_finite(name: &'static str, values: impl IntoIterator<Item = f64>) -> Result<(), CsgError> {
    values.into_iter().try_for_each(|value| finite(name, value).map(drop))
}

impl Solid {
    /// Checks that every number in this tree is finite.
    ///
    /// Constructors validate their own parameters, but transform parameters
    /// and deserialized trees are only checked here.
    pub fn check_finite(&self) -> Result<(), CsgError> {
        match self {
            Self::Cube { size, .. } => all_finite("size", *size)?,
            Self::Sphere { radius } => all_finite("radius", [*radius])?,
            Self::Cylinder {
                height,
                radius1,
                radius2,
                ..
            } => all_finite("cylinder", [*height, *radius1, *radius2])?,
            Self::Polyhedron { points, .. } => all_finite("point", points.iter().flatten().copied())?,
            Self::Polygon { points } => all_finite("point", points.iter().flatten().copied())?,
            Self::Text { style, .. } => all_finite("text size", [style.size])?,
            Self::LinearExtrude { height, .. } => all_finite("height", [*height])?,
            Self::Translate { offset, .. } => all_finite("offset", *offset)?,
            Self::Rotate { angles, .. } => all_finite("angle", *angles)?,
            Self::Scale { factors, .. } => all_finite("scale factor", *factors)?,
            Self::Mirror { normal, .. } => all_finite("mirror normal", *normal)?,
            _ => {}
        }
        self.children().iter().try_for_each(Solid::check_finite)
    }
}

// =============================================================================
// CONSTRUCTORS
// =============================================================================

impl Solid {
    /// Axis-aligned box; spans `[-s/2, s/2]` when centered, else `[0, s]`.
    ///
    /// Zero extents are accepted, negative ones are not.
    pub fn cube(size: [f64; 3], center: bool) -> Result<Self, CsgError> {
        for (name, value) in ["size.x", "size.y", "size.z"].into_iter().zip(size) {
            non_negative(name, value)?;
        }
        Ok(Self::Cube { size, center })
    }

    /// Cylinder with radius `r` and height `h`.
    pub fn cylinder(r: f64, h: f64, center: bool) -> Result<Self, CsgError> {
        Self::cone(r, r, h, center)
    }

    /// Cylinder with diameter `d` and height `h`.
    pub fn cylinder_d(d: f64, h: f64, center: bool) -> Result<Self, CsgError> {
        let d = non_negative("diameter", d)?;
        Self::cylinder(d / 2.0, h, center)
    }

    /// Cone frustum with bottom radius `r1` and top radius `r2`.
    pub fn cone(r1: f64, r2: f64, h: f64, center: bool) -> Result<Self, CsgError> {
        Ok(Self::Cylinder {
            height: positive("height", h)?,
            radius1: non_negative("radius1", r1)?,
            radius2: non_negative("radius2", r2)?,
            center,
        })
    }

    /// Sphere with radius `r`.
    pub fn sphere(r: f64) -> Result<Self, CsgError> {
        Ok(Self::Sphere {
            radius: non_negative("radius", r)?,
        })
    }

    /// Sphere with diameter `d`.
    pub fn sphere_d(d: f64) -> Result<Self, CsgError> {
        Self::sphere(non_negative("diameter", d)? / 2.0)
    }

    /// Polyhedron; every face index must refer to an existing point.
    pub fn polyhedron(points: Vec<[f64; 3]>, faces: Vec<Vec<usize>>) -> Result<Self, CsgError> {
        if points.iter().flatten().any(|c| !c.is_finite()) {
            return Err(CsgError::invalid_geometry("polyhedron point is not finite"));
        }
        if let Some(face) = faces.iter().find(|f| f.len() < 3) {
            return Err(CsgError::invalid_geometry(format!(
                "polyhedron face {face:?} has fewer than 3 vertices"
            )));
        }
        if let Some(index) = faces.iter().flatten().find(|&&i| i >= points.len()) {
            return Err(CsgError::invalid_geometry(format!(
                "polyhedron face index {index} out of range for {} points",
                points.len()
            )));
        }
        Ok(Self::Polyhedron { points, faces })
    }

    /// Implicitly closed 2D polygon. Self-intersection is not checked.
    pub fn polygon(points: Vec<[f64; 2]>) -> Result<Self, CsgError> {
        if points.len() < 3 {
            return Err(CsgError::DegeneratePolygon {
                points: points.len(),
            });
        }
        if points.iter().flatten().any(|c| !c.is_finite()) {
            return Err(CsgError::invalid_geometry("polygon point is not finite"));
        }
        Ok(Self::Polygon { points })
    }

    /// 2D text label.
    pub fn text(label: impl Into<String>, style: TextStyle) -> Result<Self, CsgError> {
        positive("text size", style.size)?;
        Ok(Self::Text {
            label: label.into(),
            style,
        })
    }

    /// Extrudes this 2D solid by `height` along +z.
    pub fn linear_extrude(self, height: f64, center: bool) -> Result<Self, CsgError> {
        let height = positive("height", height)?;
        if !self.is_2d() {
            return Err(CsgError::NotTwoDimensional {
                operation: "linear_extrude",
            });
        }
        Ok(Self::LinearExtrude {
            height,
            center,
            child: Box::new(self),
        })
    }
}

// =============================================================================
// TRANSFORMS
// =============================================================================

impl Solid {
    /// Moves this solid by `offset`.
    ///
    /// Transforms nest: `s.rotate(a).translate(v)` rotates first.
    pub fn translate(self, offset: [f64; 3]) -> Self {
        self.wrap(|child| Self::Translate { offset, child })
    }

    /// Rotates this solid by Euler angles in degrees (x, then y, then z).
    pub fn rotate(self, angles: [f64; 3]) -> Self {
        self.wrap(|child| Self::Rotate { angles, child })
    }

    /// Scales this solid about the origin.
    pub fn scale(self, factors: [f64; 3]) -> Self {
        self.wrap(|child| Self::Scale { factors, child })
    }

    /// Mirrors this solid across the plane with normal `normal`.
    pub fn mirror(self, normal: [f64; 3]) -> Self {
        self.wrap(|child| Self::Mirror { normal, child })
    }

    /// Marks this solid as a construction-only hole.
    pub fn hole(self) -> Self {
        self.wrap(|child| Self::Hole { child })
    }

    fn wrap(self, build: impl FnOnce(Box<Solid>) -> Solid) -> Self {
        if self.is_empty() {
            return Self::Empty;
        }
        build(Box::new(self))
    }
}

// =============================================================================
// INSPECTION
// =============================================================================

impl Solid {
    /// Check if this is an empty node.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Check if this node describes planar geometry.
    ///
    /// Transforms and booleans are 2D when all their children are.
    pub fn is_2d(&self) -> bool {
        match self {
            Self::Polygon { .. } | Self::Text { .. } => true,
            Self::Translate { child, .. }
            | Self::Rotate { child, .. }
            | Self::Scale { child, .. }
            | Self::Mirror { child, .. }
            | Self::Hole { child } => child.is_2d(),
            Self::Union { children }
            | Self::Difference { children }
            | Self::Intersection { children } => {
                !children.is_empty() && children.iter().all(Solid::is_2d)
            }
            _ => false,
        }
    }

    /// Returns the direct children of this node.
    pub fn children(&self) -> &[Solid] {
        match self {
            Self::LinearExtrude { child, .. }
            | Self::Translate { child, .. }
            | Self::Rotate { child, .. }
            | Self::Scale { child, .. }
            | Self::Mirror { child, .. }
            | Self::Hole { child } => std::slice::from_ref(child.as_ref()),
            Self::Union { children }
            | Self::Difference { children }
            | Self::Intersection { children } => children,
            _ => &[],
        }
    }

    /// Total number of nodes in this tree, `Empty` counting as none.
    pub fn node_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        1 + self.children().iter().map(Solid::node_count).sum::<usize>()
    }

    /// Check if any node in this tree is a hole marker.
    pub fn has_holes(&self) -> bool {
        matches!(self, Self::Hole { .. }) || self.children().iter().any(Solid::has_holes)
    }
}
