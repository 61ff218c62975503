//! Tests for point membership and bounds.

use approx::assert_relative_eq;
use glam::DVec3;

use super::*;
use crate::solid::TextStyle;

fn assert_vec_eq(a: DVec3, b: DVec3) {
    assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
    assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
    assert_relative_eq!(a.z, b.z, epsilon = 1e-9);
}

// =============================================================================
// AABB
// =============================================================================

#[test]
fn test_aabb_from_points() {
    let b = Aabb::from_points([DVec3::new(1.0, -2.0, 0.0), DVec3::new(-1.0, 3.0, 2.0)]).unwrap();
    assert_eq!(b.min, DVec3::new(-1.0, -2.0, 0.0));
    assert_eq!(b.max, DVec3::new(1.0, 3.0, 2.0));
    assert!(Aabb::from_points(std::iter::empty()).is_none());
}

#[test]
fn test_aabb_intersection_disjoint() {
    let a = Aabb::new(DVec3::ZERO, DVec3::ONE);
    let b = Aabb::new(DVec3::splat(2.0), DVec3::splat(3.0));
    assert!(a.intersection(&b).is_none());
    assert_eq!(a.union(&b).size(), DVec3::splat(3.0));
}

// =============================================================================
// CONTAINS
// =============================================================================

#[test]
fn test_cube_contains() {
    let centered = Solid::cube([2.0, 4.0, 6.0], true).unwrap();
    assert!(centered.contains(DVec3::new(1.0, 2.0, 3.0)));
    assert!(!centered.contains(DVec3::new(1.1, 0.0, 0.0)));

    let corner = Solid::cube([2.0, 2.0, 2.0], false).unwrap();
    assert!(corner.contains(DVec3::new(1.5, 1.5, 1.5)));
    assert!(!corner.contains(DVec3::new(-0.5, 1.0, 1.0)));
}

#[test]
fn test_cone_contains() {
    let cone = Solid::cone(2.0, 1.0, 2.0, true).unwrap();
    assert!(cone.contains(DVec3::new(1.9, 0.0, -1.0)));
    assert!(!cone.contains(DVec3::new(1.9, 0.0, 1.0)));
    assert!(cone.contains(DVec3::new(1.0, 0.0, 1.0)));
    assert!(!cone.contains(DVec3::new(0.0, 0.0, 1.1)));
}

#[test]
fn test_sphere_contains() {
    let s = Solid::sphere(2.0).unwrap();
    assert!(s.contains(DVec3::new(0.0, 2.0, 0.0)));
    assert!(!s.contains(DVec3::new(1.5, 1.5, 0.0)));
}

#[test]
fn test_rotated_cylinder() {
    // rotate([90, 0, 0]) turns the z axis into -y
    let c = Solid::cylinder(1.0, 10.0, true).unwrap().rotate([90.0, 0.0, 0.0]);
    assert!(c.contains(DVec3::new(0.0, 4.5, 0.0)));
    assert!(!c.contains(DVec3::new(0.0, 0.0, 4.5)));
}

#[test]
fn test_mirror_contains() {
    let c = Solid::cube([1.0, 1.0, 1.0], false)
        .unwrap()
        .translate([2.0, 0.0, 0.0])
        .mirror([1.0, 0.0, 0.0]);
    assert!(c.contains(DVec3::new(-2.5, 0.5, 0.5)));
    assert!(!c.contains(DVec3::new(2.5, 0.5, 0.5)));
}

#[test]
fn test_degenerate_scale_contains_nothing() {
    let c = Solid::cube([1.0, 1.0, 1.0], true).unwrap().scale([0.0, 1.0, 1.0]);
    assert!(!c.contains(DVec3::ZERO));
}

#[test]
fn test_extruded_polygon() {
    let tri = Solid::polygon(vec![[0.0, 0.0], [4.0, 0.0], [0.0, 4.0]]).unwrap();
    let prism = tri.linear_extrude(2.0, false).unwrap();
    assert!(prism.contains(DVec3::new(1.0, 1.0, 1.0)));
    assert!(!prism.contains(DVec3::new(3.0, 3.0, 1.0)));
    assert!(!prism.contains(DVec3::new(1.0, 1.0, 2.5)));
}

#[test]
fn test_extruded_transformed_polygon() {
    let square = Solid::polygon(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]).unwrap();
    let prism = square
        .translate([5.0, 0.0, 0.0])
        .linear_extrude(1.0, true)
        .unwrap();
    assert!(prism.contains(DVec3::new(5.5, 0.5, 0.4)));
    assert!(!prism.contains(DVec3::new(0.5, 0.5, 0.0)));
}

#[test]
fn test_bare_polygon_has_no_volume() {
    let tri = Solid::polygon(vec![[0.0, 0.0], [4.0, 0.0], [0.0, 4.0]]).unwrap();
    assert!(!tri.contains(DVec3::new(1.0, 1.0, 0.0)));
}

#[test]
fn test_polyhedron_contains() {
    let tet = Solid::polyhedron(
        vec![[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]],
        vec![vec![0, 2, 1], vec![0, 1, 3], vec![1, 2, 3], vec![0, 3, 2]],
    )
    .unwrap();
    assert!(tet.contains(DVec3::new(0.3, 0.3, 0.3)));
    assert!(!tet.contains(DVec3::new(1.0, 1.0, 1.0)));
}

#[test]
fn test_boolean_contains() {
    let tube = Solid::cylinder(5.0, 10.0, true)
        .unwrap()
        .subtract(Solid::cylinder(3.0, 20.0, true).unwrap());
    assert!(tube.contains(DVec3::new(4.0, 0.0, 0.0)));
    assert!(!tube.contains(DVec3::new(2.0, 0.0, 0.0)));

    let lens = Solid::sphere(2.0)
        .unwrap()
        .translate([1.0, 0.0, 0.0])
        .intersect(Solid::sphere(2.0).unwrap().translate([-1.0, 0.0, 0.0]));
    assert!(lens.contains(DVec3::ZERO));
    assert!(!lens.contains(DVec3::new(2.5, 0.0, 0.0)));
}

#[test]
fn test_text_and_empty_contain_nothing() {
    let label = Solid::text("x", TextStyle::default()).unwrap();
    assert!(!label.contains(DVec3::ZERO));
    assert!(!Solid::Empty.contains(DVec3::ZERO));
}

// =============================================================================
// BOUNDS
// =============================================================================

#[test]
fn test_cylinder_bounds() {
    let b = Solid::cone(2.0, 1.0, 4.0, false).unwrap().bounds().unwrap();
    assert_vec_eq(b.min, DVec3::new(-2.0, -2.0, 0.0));
    assert_vec_eq(b.max, DVec3::new(2.0, 2.0, 4.0));
}

#[test]
fn test_rotated_bounds() {
    let b = Solid::cube([40.0, 10.0, 4.0], true)
        .unwrap()
        .rotate([90.0, 0.0, 0.0])
        .translate([0.0, -17.5, 0.0])
        .bounds()
        .unwrap();
    assert_vec_eq(b.min, DVec3::new(-20.0, -19.5, -5.0));
    assert_vec_eq(b.max, DVec3::new(20.0, -15.5, 5.0));
}

#[test]
fn test_difference_bounds_use_first_operand() {
    let s = Solid::cube([2.0, 2.0, 2.0], true)
        .unwrap()
        .subtract(Solid::sphere(5.0).unwrap());
    let b = s.bounds().unwrap();
    assert_vec_eq(b.size(), DVec3::splat(2.0));
}

#[test]
fn test_union_bounds_skip_text() {
    let label = Solid::text("x", TextStyle::default()).unwrap();
    let s = Solid::sphere(1.0).unwrap().union_with(label);
    let b = s.bounds().unwrap();
    assert_vec_eq(b.center(), DVec3::ZERO);
    assert!(Solid::Empty.bounds().is_none());
}

#[test]
fn test_intersection_bounds_ignore_unbounded_operands() {
    let label = Solid::text("x", TextStyle::default()).unwrap();
    let s = Solid::cube([2.0, 2.0, 2.0], true)
        .unwrap()
        .intersect(label)
        .intersect(Solid::cube([2.0, 2.0, 2.0], false).unwrap());
    let b = s.bounds().unwrap();
    assert_vec_eq(b.min, DVec3::ZERO);
    assert_vec_eq(b.max, DVec3::ONE);
}

#[test]
fn test_extrude_bounds() {
    let tri = Solid::polygon(vec![[0.0, 0.0], [4.0, 0.0], [0.0, 3.0]]).unwrap();
    let b = tri.linear_extrude(2.0, true).unwrap().bounds().unwrap();
    assert_vec_eq(b.min, DVec3::new(0.0, 0.0, -1.0));
    assert_vec_eq(b.max, DVec3::new(4.0, 3.0, 1.0));
}
