//! Tests for the mirror mounts.

use approx::assert_relative_eq;
use glam::DVec3;

use super::*;

#[test]
fn test_thicknesses() {
    let mount = MirrorMount::default();
    let t = mount.thicknesses();
    assert_eq!(t.front_frame, 10.0);
    assert_eq!(t.back_wall, 5.0);
    assert_relative_eq!(t.pre_tilt_depth, 2.2236, epsilon = 1e-3);

    // a thin back wall is only advisory
    let thin = MirrorMount {
        front_frame_thickness: 12.0,
        ..MirrorMount::default()
    };
    assert_eq!(thin.thicknesses().back_wall, 3.0);
    assert!(thin.back_frame().is_ok());
}

#[test]
fn test_center_plate() {
    let b = MirrorMount::default().center_plate().unwrap().bounds().unwrap();
    assert_eq!(b.min.to_array(), [-15.0, -15.0, -4.0]);
    assert_eq!(b.max.to_array(), [15.0, 15.0, 0.0]);
}

/// The plate pivots about its +x +y corner.
#[test]
fn test_flex_corner_tilt() {
    let front = MirrorMount::default().front_plate_flex_corner().unwrap();
    assert!(front.contains(DVec3::new(18.0, 0.0, -5.0)), "frame");
    assert!(!front.contains(DVec3::new(16.0, 0.0, -5.0)), "gap");
    assert!(front.contains(DVec3::new(14.0, 14.0, -0.5)));
    assert!(!front.contains(DVec3::new(-14.0, -14.0, -0.5)), "sunk corner");
    assert!(front.contains(DVec3::new(-14.0, -14.0, -3.0)));
    // flexures below the plate
    assert!(front.contains(DVec3::new(5.0, 10.5, -5.0)));
    assert!(front.contains(DVec3::new(10.5, 5.0, -5.0)));
}

#[test]
fn test_three_springs_assembled() {
    let front = MirrorMount::default()
        .front_plate_three_springs(Layout::Assembled)
        .unwrap();
    // ball dimples in the screw pads
    assert!(!front.contains(DVec3::new(13.0, 13.0, -1.0)));
    assert!(front.contains(DVec3::new(13.0, 13.0, -3.0)));
    assert!(front.contains(DVec3::new(-13.0, -13.0, -3.0)));

    // pins stick into the back frame at three corners
    assert!(front.contains(DVec3::new(17.0, 17.0, -1.0)));
    for (x, y) in [(17.0, 17.0), (-17.0, 17.0), (17.0, -17.0)] {
        assert!(front.contains(DVec3::new(x, y, -14.0)), "pin at {x}, {y}");
    }
    assert!(!front.contains(DVec3::new(-17.0, -17.0, -14.0)));

    let b = front.bounds().unwrap();
    assert_relative_eq!(b.min.z, -15.0, epsilon = 1e-9);
}

/// Printable springs lie flat beside the plate.
#[test]
fn test_three_springs_printable() {
    let mount = MirrorMount::default();
    let printable = mount.front_plate_three_springs(Layout::Printable).unwrap();
    let b = printable.bounds().unwrap();
    assert_relative_eq!(b.min.z, -4.0, epsilon = 1e-9);
    assert!(b.max.z <= 1e-9);
    assert_ne!(printable, mount.front_plate_three_springs(Layout::Assembled).unwrap());
}

#[test]
fn test_c_springs() {
    let mount = MirrorMount {
        spring_style: SpringStyle::CShape,
        ..MirrorMount::default()
    };
    let front = mount.front_plate_three_springs(Layout::Assembled).unwrap();
    let diagonal = |along: f64, across: f64| {
        let c = std::f64::consts::FRAC_1_SQRT_2;
        DVec3::new(c * (along - across), c * (along + across), -2.0)
    };
    // struts on both sides of the diagonal, anchor block on it
    assert!(front.contains(diagonal(24.0, 3.0)));
    assert!(front.contains(diagonal(24.0, -3.0)));
    assert!(front.contains(diagonal(24.0, 0.0)));

    let printable = mount.front_plate_three_springs(Layout::Printable).unwrap();
    assert_ne!(front, printable);
}

#[test]
fn test_single_spring_c_extent() {
    let mount = MirrorMount::default();
    let spring = mount.single_spring_c(3.0, 6.0, 6.0).unwrap();
    let b = spring.bounds().unwrap();
    assert_relative_eq!(b.min.x, -1.5, epsilon = 1e-9);
    assert_relative_eq!(b.max.x, 1.5, epsilon = 1e-9);
    assert_relative_eq!(b.max.z, 3.0, epsilon = 1e-9);
}

#[test]
fn test_back_frame() {
    let back = MirrorMount::default().back_frame().unwrap();
    assert!(back.contains(DVec3::new(0.0, 0.0, -12.5)));
    assert!(!back.contains(DVec3::new(13.0, -13.0, -12.0)), "screw hole");
    assert!(!back.contains(DVec3::new(15.5, -13.0, -10.5)), "nut trap");
    assert!(back.contains(DVec3::new(15.5, -13.0, -14.0)));
    assert!(!back.contains(DVec3::new(17.0, 17.0, -12.0)), "pin socket");

    let mounted = MirrorMount::default().mounted_back_frame().unwrap();
    assert!(!mounted.contains(DVec3::new(10.0, -19.0, -12.5)));
    assert!(back.contains(DVec3::new(10.0, -19.0, -12.5)));
}

#[test]
fn test_mirror_assembly_spans_both_parts() {
    let assembly = MirrorMount::default().assembly().unwrap();
    assert!(assembly.contains(DVec3::new(0.0, 0.0, -2.0)));
    assert!(assembly.contains(DVec3::new(0.0, 0.0, -12.5)));
}

#[test]
fn test_crane_mirror() {
    assert_relative_eq!(crane_mirror_angle(), -3.327, epsilon = 1e-3);

    let crane = crane_45deg_mirror(&Settings::default()).unwrap();
    assert!(crane.has_holes());
    assert!(crane.contains(DVec3::new(17.5, 0.0, 0.0)));
    assert!(!crane.contains(DVec3::ZERO));
    assert!(!crane.contains(DVec3::new(35.0, 0.0, 0.0)), "mirror aperture");
    assert!(crane.contains(DVec3::new(47.0, 0.0, 0.0)));
}
