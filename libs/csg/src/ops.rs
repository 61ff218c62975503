//! # Boolean Composition
//!
//! Union, difference and intersection as free functions and methods, plus
//! resolution of construction-only holes.
//!
//! ## Flattening
//!
//! Appending to a node of the same kind extends its child list, so
//! `a.subtract(b).subtract(c)` is a single `difference() { a; b; c; }`.
//! `Empty` operands vanish from unions and subtracted lists; an empty
//! intersection operand empties the result.

use crate::solid::Solid;

// =============================================================================
// FREE FUNCTIONS
// =============================================================================

/// Union of all solids. A single remaining operand is returned unwrapped.
pub fn union<I: IntoIterator<Item = Solid>>(solids: I) -> Solid {
    let mut children: Vec<Solid> = solids.into_iter().filter(|s| !s.is_empty()).collect();
    match children.len() {
        0 => Solid::Empty,
        1 => children.remove(0),
        _ => Solid::Union { children },
    }
}

/// Subtracts every solid after the first from the first.
pub fn difference<I: IntoIterator<Item = Solid>>(solids: I) -> Solid {
    let mut iter = solids.into_iter();
    let Some(first) = iter.next() else {
        return Solid::Empty;
    };
    iter.fold(first, Solid::subtract)
}

/// Intersection of all solids.
pub fn intersection<I: IntoIterator<Item = Solid>>(solids: I) -> Solid {
    let mut iter = solids.into_iter();
    let Some(first) = iter.next() else {
        return Solid::Empty;
    };
    iter.fold(first, Solid::intersect)
}

// =============================================================================
// METHODS
// =============================================================================

impl Solid {
    /// Adds `other` to this solid.
    pub fn union_with(self, other: Solid) -> Solid {
        match (self, other) {
            (Solid::Empty, other) => other,
            (this, Solid::Empty) => this,
            (Solid::Union { mut children }, other) => {
                children.push(other);
                Solid::Union { children }
            }
            (this, other) => Solid::Union {
                children: vec![this, other],
            },
        }
    }

    /// Removes `other` from this solid.
    pub fn subtract(self, other: Solid) -> Solid {
        match (self, other) {
            (Solid::Empty, _) => Solid::Empty,
            (this, Solid::Empty) => this,
            (Solid::Difference { mut children }, other) => {
                children.push(other);
                Solid::Difference { children }
            }
            (this, other) => Solid::Difference {
                children: vec![this, other],
            },
        }
    }

    /// Keeps only the volume shared with `other`.
    pub fn intersect(self, other: Solid) -> Solid {
        match (self, other) {
            (Solid::Empty, _) | (_, Solid::Empty) => Solid::Empty,
            (Solid::Intersection { mut children }, other) => {
                children.push(other);
                Solid::Intersection { children }
            }
            (this, other) => Solid::Intersection {
                children: vec![this, other],
            },
        }
    }
}

// =============================================================================
// HOLE RESOLUTION
// =============================================================================

impl Solid {
    /// Hoists every hole marker into a final difference.
    ///
    /// Each hole keeps the transforms above it, so it cuts where it was
    /// placed, and it cuts through everything in the tree, including
    /// geometry added after it. Markers nested inside a hole are part of
    /// that hole.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use holmos_csg::Solid;
    ///
    /// let plate = Solid::cube([20.0, 20.0, 4.0], true)?;
    /// let bore = Solid::cylinder(2.0, 10.0, true)?.hole();
    /// let resolved = plate.union_with(bore).resolve_holes();
    /// assert!(matches!(resolved, Solid::Difference { .. }));
    /// assert!(!resolved.has_holes());
    /// # Ok::<(), holmos_csg::CsgError>(())
    /// ```
    pub fn resolve_holes(self) -> Solid {
        if !self.has_holes() {
            return self;
        }
        let mut holes = Vec::new();
        let positive = extract_holes(self, &mut holes);
        tracing::trace!(count = holes.len(), "resolved hole markers");
        difference(std::iter::once(positive).chain(holes))
    }

    /// Replaces every hole marker with its child.
    pub fn strip_holes(self) -> Solid {
        match self {
            Solid::Hole { child } => child.strip_holes(),
            other => rebuild(other, Solid::strip_holes),
        }
    }
}

fn extract_holes(solid: Solid, holes: &mut Vec<Solid>) -> Solid {
    if let Solid::Hole { child } = solid {
        holes.push(child.strip_holes());
        return Solid::Empty;
    }
    match Wrapper::of(&solid) {
        // Holes found below a wrapper are wrapped the same way.
        Some(wrapper) => {
            let mut found = Vec::new();
            let rebuilt = rebuild(solid, |child| extract_holes(child, &mut found));
            holes.extend(found.into_iter().map(|hole| wrapper.apply(hole)));
            rebuilt
        }
        None => rebuild(solid, |child| extract_holes(child, holes)),
    }
}

/// Rebuilds `solid` with `f` applied to each direct child.
fn rebuild(solid: Solid, mut f: impl FnMut(Solid) -> Solid) -> Solid {
    if let Some(wrapper) = Wrapper::of(&solid) {
        return match solid {
            Solid::Translate { child, .. }
            | Solid::Rotate { child, .. }
            | Solid::Scale { child, .. }
            | Solid::Mirror { child, .. }
            | Solid::LinearExtrude { child, .. } => wrapper.apply(f(*child)),
            other => other,
        };
    }
    match solid {
        Solid::Hole { child } => f(*child).hole(),
        Solid::Union { children } => union(children.into_iter().map(f)),
        Solid::Difference { children } => difference(children.into_iter().map(f)),
        Solid::Intersection { children } => intersection(children.into_iter().map(f)),
        leaf => leaf,
    }
}

/// Parameters of a single-child transform or extrusion node.
#[derive(Debug, Clone, Copy)]
enum Wrapper {
    Translate([f64; 3]),
    Rotate([f64; 3]),
    Scale([f64; 3]),
    Mirror([f64; 3]),
    Extrude { height: f64, center: bool },
}

impl Wrapper {
    fn of(solid: &Solid) -> Option<Self> {
        match *solid {
            Solid::Translate { offset, .. } => Some(Self::Translate(offset)),
            Solid::Rotate { angles, .. } => Some(Self::Rotate(angles)),
            Solid::Scale { factors, .. } => Some(Self::Scale(factors)),
            Solid::Mirror { normal, .. } => Some(Self::Mirror(normal)),
            Solid::LinearExtrude { height, center, .. } => Some(Self::Extrude { height, center }),
            _ => None,
        }
    }

    fn apply(self, inner: Solid) -> Solid {
        match self {
            Self::Translate(offset) => inner.translate(offset),
            Self::Rotate(angles) => inner.rotate(angles),
            Self::Scale(factors) => inner.scale(factors),
            Self::Mirror(normal) => inner.mirror(normal),
            Self::Extrude { .. } if inner.is_empty() => Solid::Empty,
            Self::Extrude { height, center } => Solid::LinearExtrude {
                height,
                center,
                child: Box::new(inner),
            },
        }
    }
}
