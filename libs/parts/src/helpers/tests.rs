//! Tests for the geometric helpers.

use approx::assert_relative_eq;
use glam::DVec3;

use super::*;

fn polar(r: f64, deg: f64) -> DVec3 {
    let a = deg.to_radians();
    DVec3::new(r * a.cos(), r * a.sin(), 0.0)
}

// =============================================================================
// ROUNDED PLATE
// =============================================================================

/// The bounding box is exactly the requested size.
#[test]
fn test_rounded_plate_bounds() {
    for (size, r) in [([40.0, 40.0, 10.0], 5.0), ([30.0, 10.0, 5.0], 4.0), ([12.0, 10.0, 3.0], 5.0)] {
        let b = rounded_plate(size, r).unwrap().bounds().unwrap();
        assert_relative_eq!(b.size().x, size[0], epsilon = 1e-12);
        assert_relative_eq!(b.size().y, size[1], epsilon = 1e-12);
        assert_relative_eq!(b.size().z, size[2], epsilon = 1e-12);
        assert_relative_eq!(b.center().length(), 0.0, epsilon = 1e-12);
    }
}

/// Corners are quarter circles of radius r around the corner centers.
#[test]
fn test_rounded_plate_corner_arcs() {
    let (x, y, r) = (40.0, 30.0, 5.0);
    let plate = rounded_plate([x, y, 10.0], r).unwrap();
    for (sx, sy) in [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)] {
        let center = DVec3::new(sx * (x / 2.0 - r), sy * (y / 2.0 - r), 0.0);
        for deg in [10.0, 45.0, 80.0] {
            let a = f64::to_radians(deg);
            let dir = DVec3::new(sx * a.cos(), sy * a.sin(), 0.0);
            assert!(plate.contains(center + dir * r));
            assert!(plate.contains(center + dir * (r - 1e-3)));
            assert!(!plate.contains(center + dir * (r + 1e-3)));
        }
    }
    // The sharp corner itself is cut away.
    assert!(!plate.contains(DVec3::new(x / 2.0 - 0.1, y / 2.0 - 0.1, 0.0)));
}

/// A radius above half the shorter side is rejected.
#[test]
fn test_rounded_plate_radius_limit() {
    assert!(rounded_plate([10.0, 20.0, 1.0], 5.0).is_ok());
    assert!(matches!(
        rounded_plate([10.0, 20.0, 1.0], 5.5),
        Err(CsgError::InvalidGeometry { .. })
    ));
}

/// Strut holes sit `hole_dist` apart.
#[test]
fn test_strut_with_holes() {
    let strut = strut_with_holes(40.0, 3.0, 10.0).unwrap();
    assert!(!strut.contains(DVec3::new(0.0, 20.0, 0.0)));
    assert!(!strut.contains(DVec3::new(0.0, -20.0, 0.0)));
    assert!(strut.contains(DVec3::ZERO));
    assert!(strut.contains(DVec3::new(0.0, 22.5, 0.0)));
    let b = strut.bounds().unwrap();
    assert_relative_eq!(b.size().y, 50.0, epsilon = 1e-12);
}

// =============================================================================
// ARCS
// =============================================================================

/// A zero sweep is the plain cylinder.
#[test]
fn test_cyl_arc_zero_sweep() {
    let full = Solid::cylinder(5.0, 2.0, true).unwrap();
    assert_eq!(cyl_arc(5.0, 2.0, 90.0, 90.0).unwrap(), full);
    assert_eq!(cyl_arc(5.0, 2.0, 0.0, 360.0).unwrap(), full);
}

/// A thin slice keeps only the swept angles.
#[test]
fn test_cyl_arc_below_180() {
    let slice = cyl_arc(50.0, 10.0, -30.0, -10.0).unwrap();
    for deg in [-28.0, -20.0, -12.0] {
        assert!(slice.contains(polar(25.0, deg)), "{deg} should be inside");
    }
    for deg in [-35.0, -5.0, 0.0, 90.0, 160.0, 200.0] {
        assert!(!slice.contains(polar(25.0, deg)), "{deg} should be outside");
    }
    assert!(!slice.contains(polar(55.0, -20.0)));
}

/// A sweep above 180 degrees leaves a wedge shaped opening.
#[test]
fn test_cyl_arc_above_180() {
    let pacman = cyl_arc(50.0, 10.0, 30.0, -30.0).unwrap();
    for deg in [35.0, 90.0, 180.0, 270.0, 325.0] {
        assert!(pacman.contains(polar(25.0, deg)), "{deg} should be inside");
    }
    for deg in [-25.0, 0.0, 25.0] {
        assert!(!pacman.contains(polar(25.0, deg)), "{deg} should be outside");
    }
    assert!(!pacman.contains(DVec3::new(25.0, 0.0, 6.0)));
}

/// The case split happens at exactly 180 degrees.
#[test]
fn test_cyl_arc_half() {
    let half = cyl_arc(10.0, 2.0, 0.0, 180.0).unwrap();
    assert!(matches!(half, Solid::Difference { .. }));
    assert!(half.contains(polar(5.0, 90.0)));
    assert!(!half.contains(polar(5.0, 270.0)));
}

/// Non-finite angles are rejected instead of picking a sweep branch.
#[test]
fn test_cyl_arc_rejects_non_finite_angles() {
    for (a0, a1) in [(f64::NAN, 10.0), (0.0, f64::INFINITY), (f64::NEG_INFINITY, 0.0)] {
        let err = cyl_arc(5.0, 2.0, a0, a1).unwrap_err();
        assert!(matches!(err, CsgError::InvalidDimension { name: "angle", .. }), "{a0} {a1}");
    }
}

// =============================================================================
// HEXAGON AND PIN
// =============================================================================

/// Flats sit at d/2 along x, vertices further out along y.
#[test]
fn test_hexagon() {
    let d = 5.5;
    let hex = hexagon(d, 1.0).unwrap();
    assert!(hex.contains(DVec3::ZERO));
    assert!(hex.contains(DVec3::new(d / 2.0 - 0.01, 0.0, 0.0)));
    assert!(!hex.contains(DVec3::new(0.55 * d, 0.0, 0.0)));
    assert!(hex.contains(DVec3::new(0.0, 0.55 * d, 0.0)));
    assert!(!hex.contains(DVec3::new(0.0, 0.6 * d, 0.0)));
}

/// The top half narrows toward +z.
#[test]
fn test_tapered_pin() {
    let pin = tapered_pin([2.0, 2.0, 4.0], [0.3, 0.1]).unwrap();
    let b = pin.bounds().unwrap();
    assert_relative_eq!(b.min.z, -2.0, epsilon = 1e-12);
    assert_relative_eq!(b.max.z, 2.0, epsilon = 1e-12);
    assert!(pin.contains(DVec3::new(0.95, 0.0, -1.0)));
    assert!(pin.contains(DVec3::new(0.95, 0.0, 0.1)));
    assert!(!pin.contains(DVec3::new(0.95, 0.0, 1.9)));
    assert!(pin.contains(DVec3::new(0.65, 0.0, 1.9)));
}

// =============================================================================
// CLIP PROFILE
// =============================================================================

#[test]
fn test_linspace() {
    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
    let xs = linspace(10.0, -2.0, 4);
    assert_eq!(xs, vec![10.0, 6.0, 2.0, -2.0]);
}

/// Both edges are sampled and the outer edge is offset by the thickness.
#[test]
fn test_clip_profile_points() {
    let wave = ClipWave::default();
    let profile = clip_profile(&wave, 13.0, 18.0, 50).unwrap();
    let Solid::Polygon { points } = profile else {
        panic!("expected a polygon");
    };
    assert_eq!(points.len(), 100);

    let first = points[0];
    let last = points[99];
    assert_relative_eq!(first[1], 5.0, epsilon = 1e-12);
    assert_relative_eq!(last[1], 5.0, epsilon = 1e-12);
    assert_relative_eq!(first[0] - last[0], wave.thickness, epsilon = 1e-12);

    // At y = -reach the wave peaks at gap + amplitude.
    let peak = points[50];
    assert_relative_eq!(peak[1], -13.0, epsilon = 1e-12);
    assert_relative_eq!(peak[0], wave.gap + wave.amplitude, epsilon = 1e-12);
    // At y = 0 the inner edge is back at the gap.
    let short = clip_profile(&wave, 1.0, 1.0, 3).unwrap();
    let Solid::Polygon { points } = short else {
        panic!("expected a polygon");
    };
    assert_relative_eq!(points[0][1], 0.0, epsilon = 1e-12);
    assert_relative_eq!(points[5][0], wave.gap, epsilon = 1e-12);
}

#[test]
fn test_clip_profile_rejects_zero_reach() {
    let err = clip_profile(&ClipWave::default(), 0.0, 10.0, 50).unwrap_err();
    assert!(matches!(err, CsgError::InvalidDimension { .. }));
}
