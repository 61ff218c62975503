//! # Geometry Queries
//!
//! Analytic point membership and bounding boxes evaluated directly on the
//! tree, without meshing.
//!
//! Primitives are exact: cylinders and spheres are true circles, not the
//! faceted approximation the renderer produces. Polyhedra are treated as
//! convex and text labels as empty, since glyph outlines only exist inside
//! the renderer.

use glam::{DMat4, DVec2, DVec3};

use crate::solid::Solid;

/// Slack applied to boundary comparisons.
const BOUNDARY_TOLERANCE: f64 = 1e-9;

// =============================================================================
// AXIS ALIGNED BOX
// =============================================================================

/// Axis aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    /// Creates a box from two corner points in any order.
    pub fn new(a: DVec3, b: DVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Smallest box containing all `points`.
    pub fn from_points<I: IntoIterator<Item = DVec3>>(points: I) -> Option<Self> {
        points.into_iter().fold(None, |acc: Option<Aabb>, p| {
            Some(match acc {
                Some(b) => Aabb::new(b.min.min(p), b.max.max(p)),
                None => Aabb::new(p, p),
            })
        })
    }

    /// Returns the size of the box in each dimension.
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Returns the center point of the box.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb::new(self.min.min(other.min), self.max.max(other.max))
    }

    /// Overlap of both boxes, `None` when they are disjoint.
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        (min.cmple(max).all()).then_some(Aabb { min, max })
    }

    /// Box containing this box after applying `m`.
    pub fn transformed(&self, m: &DMat4) -> Aabb {
        let corners = (0..8).map(|i| {
            DVec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            )
        });
        let mapped = corners.map(|c| m.transform_point3(c));
        Aabb::from_points(mapped).unwrap_or(*self)
    }

    /// Checks if a point is inside this box (inclusive of boundaries).
    pub fn contains_point(&self, p: DVec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}

// =============================================================================
// POINT MEMBERSHIP
// =============================================================================

impl Solid {
    /// Checks if `p` lies inside or on the boundary of this solid.
    ///
    /// Hole markers are resolved first, so a marked hole cuts the whole tree.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use holmos_csg::Solid;
    ///
    /// let tube = Solid::cylinder(5.0, 10.0, true)?
    ///     .subtract(Solid::cylinder(3.0, 20.0, true)?);
    /// assert!(tube.contains(DVec3::new(4.0, 0.0, 0.0)));
    /// assert!(!tube.contains(DVec3::ZERO));
    /// # Ok::<(), holmos_csg::CsgError>(())
    /// ```
    pub fn contains(&self, p: DVec3) -> bool {
        if self.has_holes() {
            self.clone().resolve_holes().classify(p, false)
        } else {
            self.classify(p, false)
        }
    }

    /// Classifies `p`; in planar mode only 2D geometry at `p.xy` counts.
    fn classify(&self, p: DVec3, planar: bool) -> bool {
        let tol = BOUNDARY_TOLERANCE;
        match self {
            Solid::Cube { size, center } if !planar => {
                let size = DVec3::from_array(*size);
                let min = if *center { -size / 2.0 } else { DVec3::ZERO };
                Aabb::new(min - tol, min + size + tol).contains_point(p)
            }
            Solid::Sphere { radius } if !planar => p.length() <= radius + tol,
            Solid::Cylinder {
                height,
                radius1,
                radius2,
                center,
            } if !planar => {
                let z0 = if *center { -height / 2.0 } else { 0.0 };
                let t = (p.z - z0) / height;
                if !(-tol..=1.0 + tol).contains(&t) {
                    return false;
                }
                let r = radius1 + (radius2 - radius1) * t.clamp(0.0, 1.0);
                p.truncate().length() <= r + tol
            }
            Solid::Polyhedron { points, faces } if !planar => convex_contains(points, faces, p),
            Solid::Polygon { points } if planar => polygon_contains(points, p.truncate()),
            Solid::LinearExtrude {
                height,
                center,
                child,
            } if !planar => {
                let z0 = if *center { -height / 2.0 } else { 0.0 };
                (z0 - tol..=z0 + height + tol).contains(&p.z) && child.classify(p, true)
            }
            Solid::Translate { child, .. }
            | Solid::Rotate { child, .. }
            | Solid::Scale { child, .. }
            | Solid::Mirror { child, .. } => {
                let Some(m) = self.local_transform() else {
                    return false;
                };
                let local = m.inverse().transform_point3(p);
                let local = if planar { local.truncate().extend(0.0) } else { local };
                local.is_finite() && child.classify(local, planar)
            }
            Solid::Union { children } => children.iter().any(|c| c.classify(p, planar)),
            Solid::Difference { children } => match children.split_first() {
                Some((first, rest)) => {
                    first.classify(p, planar) && !rest.iter().any(|c| c.classify(p, planar))
                }
                None => false,
            },
            Solid::Intersection { children } => {
                !children.is_empty() && children.iter().all(|c| c.classify(p, planar))
            }
            _ => false,
        }
    }
}

fn convex_contains(points: &[[f64; 3]], faces: &[Vec<usize>], p: DVec3) -> bool {
    let verts: Vec<DVec3> = points.iter().map(|v| DVec3::from_array(*v)).collect();
    if verts.is_empty() {
        return false;
    }
    let centroid = verts.iter().copied().sum::<DVec3>() / verts.len() as f64;
    faces.iter().all(|face| {
        let corner = |k: usize| face.get(k).and_then(|&i| verts.get(i)).copied();
        let (Some(a), Some(b), Some(c)) = (corner(0), corner(1), corner(2)) else {
            return true;
        };
        let mut normal = (b - a).cross(c - a);
        if normal.length_squared() == 0.0 {
            return true;
        }
        // Orient outward regardless of the face winding.
        if normal.dot(centroid - a) > 0.0 {
            normal = -normal;
        }
        normal.normalize().dot(p - a) <= BOUNDARY_TOLERANCE
    })
}

/// Even-odd ray casting point-in-polygon test.
fn polygon_contains(points: &[[f64; 2]], p: DVec2) -> bool {
    let n = points.len();
    let mut inside = false;
    let mut j = n.wrapping_sub(1);
    for i in 0..n {
        let [xi, yi] = points[i];
        let [xj, yj] = points[j];
        if ((yi > p.y) != (yj > p.y)) && (p.x < (xj - xi) * (p.y - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }
    inside
}

// =============================================================================
// BOUNDS
// =============================================================================

impl Solid {
    /// Conservative axis aligned bounds of this solid.
    ///
    /// A difference keeps the box of its first operand and an intersection
    /// the overlap of its operands' boxes. Text and empty nodes have no
    /// bounds; hole markers contribute none. Unions and intersections ignore
    /// operands without bounds.
    pub fn bounds(&self) -> Option<Aabb> {
        match self {
            Solid::Cube { size, center } => {
                let size = DVec3::from_array(*size);
                let min = if *center { -size / 2.0 } else { DVec3::ZERO };
                Some(Aabb::new(min, min + size))
            }
            Solid::Sphere { radius } => Some(Aabb::new(DVec3::splat(-radius), DVec3::splat(*radius))),
            Solid::Cylinder {
                height,
                radius1,
                radius2,
                center,
            } => {
                let r = radius1.max(*radius2);
                let z0 = if *center { -height / 2.0 } else { 0.0 };
                Some(Aabb::new(
                    DVec3::new(-r, -r, z0),
                    DVec3::new(r, r, z0 + height),
                ))
            }
            Solid::Polyhedron { points, .. } => {
                Aabb::from_points(points.iter().map(|v| DVec3::from_array(*v)))
            }
            Solid::Polygon { points } => {
                Aabb::from_points(points.iter().map(|[x, y]| DVec3::new(*x, *y, 0.0)))
            }
            Solid::LinearExtrude {
                height,
                center,
                child,
            } => {
                let planar = child.bounds()?;
                let z0 = if *center { -height / 2.0 } else { 0.0 };
                Some(Aabb::new(
                    planar.min.truncate().extend(z0),
                    planar.max.truncate().extend(z0 + height),
                ))
            }
            Solid::Translate { child, .. }
            | Solid::Rotate { child, .. }
            | Solid::Scale { child, .. }
            | Solid::Mirror { child, .. } => {
                let m = self.local_transform()?;
                child.bounds().map(|b| b.transformed(&m))
            }
            Solid::Union { children } => children
                .iter()
                .filter_map(Solid::bounds)
                .reduce(|a, b| a.union(&b)),
            Solid::Difference { children } => children.first().and_then(Solid::bounds),
            Solid::Intersection { children } => {
                let mut boxes = children.iter().filter_map(Solid::bounds);
                let first = boxes.next()?;
                boxes.try_fold(first, |acc, b| acc.intersection(&b))
            }
            Solid::Text { .. } | Solid::Hole { .. } | Solid::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests;
