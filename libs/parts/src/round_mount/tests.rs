//! Tests for the round mounts.

use glam::DVec3;
use holmos_config::MountStyle;

use super::*;

fn objective_mount() -> RoundMount {
    RoundMount {
        inner_diam: 20.0,
        opening_angle: None,
        stop_inner_diam: Some(19.0),
        ..RoundMount::default()
    }
}

fn polar(r: f64, deg: f64, z: f64) -> DVec3 {
    let a = deg.to_radians();
    DVec3::new(r * a.cos(), r * a.sin(), z)
}

/// Grid of sample points around a 40 mm part, off the round numbers.
fn sample_points() -> Vec<DVec3> {
    let mut points = Vec::new();
    for i in 0..15 {
        for j in 0..15 {
            for k in 0..5 {
                points.push(DVec3::new(
                    -21.3 + 3.01 * i as f64,
                    -31.7 + 3.73 * j as f64,
                    -6.1 + 2.97 * k as f64,
                ));
            }
        }
    }
    points
}

/// A closed ring has a slit bridged by two tabs, each with an M3 through
/// hole along x.
#[test]
fn test_closed_ring_with_clamp_tabs() {
    let params = objective_mount();
    let mount = round_mount_light(&Settings::default(), &params, Layout::Printable).unwrap();

    // no wedge opening: ring material all around except the slit
    for deg in [30.0, 60.0, 120.0, 150.0, 210.0, 270.0, 330.0] {
        assert!(mount.contains(polar(11.5, deg, 0.0)), "ring at {deg}");
    }
    assert!(!mount.contains(polar(11.5, 90.0, 0.0)), "slit");

    let [hx, hy, hz] = params.clamp_hole_center().unwrap();
    assert_eq!([hx, hy, hz], [3.0, 16.75, 0.0]);
    for x in [hx, -hx] {
        // the hole runs through the whole tab
        for dx in [-1.4, 0.0, 1.4] {
            assert!(!mount.contains(DVec3::new(x + dx, hy, hz)));
        }
        // tab material around the hole
        assert!(mount.contains(DVec3::new(x, hy, hz + 2.5)));
        assert!(mount.contains(DVec3::new(x, hy + 2.5, hz)));
    }
}

/// The stop is narrower than the bore for the last 2 mm.
#[test]
fn test_stop_bore() {
    let mount = round_mount_light(&Settings::default(), &objective_mount(), Layout::Printable).unwrap();
    assert!(!mount.contains(DVec3::ZERO));
    assert!(mount.contains(DVec3::new(-9.7, 0.0, -4.0)));
    assert!(!mount.contains(DVec3::new(-9.7, 0.0, 0.0)));
    assert!(!mount.contains(DVec3::new(-9.3, 0.0, -4.0)));
}

/// The default clip is open by a 60 degree wedge at +y.
#[test]
fn test_open_ring() {
    let params = RoundMount::default();
    let mount = round_mount_light(&Settings::default(), &params, Layout::Printable).unwrap();
    let r = (params.inner_diam / 2.0 + params.outer_diam() / 2.0) / 2.0;
    assert!(!mount.contains(polar(r, 90.0, 0.0)));
    assert!(!mount.contains(polar(r, 65.0, 0.0)));
    assert!(mount.contains(polar(r, 50.0, 0.0)));
    assert!(mount.contains(polar(r, 180.0, 0.0)));
    assert!(params.clamp_hole_center().is_none());
}

/// Both layouts describe the same part.
#[test]
fn test_dual_orientation() {
    for settings in [
        Settings::default(),
        Settings::default().with_mount(MountStyle::Threads20mm),
    ] {
        for params in [objective_mount(), RoundMount::default(), RoundMount::lens(25.4)] {
            let printable = round_mount_light(&settings, &params, Layout::Printable).unwrap();
            let assembled = round_mount_light(&settings, &params, Layout::Assembled).unwrap();
            let m = ASSEMBLED_POSE.matrix();
            for p in sample_points() {
                assert_eq!(
                    printable.contains(p),
                    assembled.contains(m.transform_point3(p)),
                    "mismatch at {p}"
                );
            }
            // the screw hole moves with the part
            if let Some(c) = params.clamp_hole_center() {
                let c = DVec3::from_array(c);
                assert!(!assembled.contains(m.transform_point3(c)));
            }
        }
    }
}

/// OWIS threads cut into the base plate from below.
#[test]
fn test_threaded_base() {
    let settings = Settings::default().with_mount(MountStyle::Threads20mm);
    let mount = round_mount_light(&settings, &objective_mount(), Layout::Printable).unwrap();
    assert!(mount.has_holes());
    assert!(!mount.contains(DVec3::new(10.0, -17.5, 0.0)));
    assert!(mount.contains(DVec3::new(5.0, -17.5, 0.0)));
}

#[test]
fn test_without_base_still_builds() {
    let settings = Settings::default().with_mount(MountStyle::None);
    let mount = round_mount_light(&settings, &RoundMount::clamped(12.0), Layout::Assembled).unwrap();
    assert!(mount.bounds().is_some());
}

#[test]
fn test_label() {
    assert_eq!(objective_mount().label(), "d = 20.0");
    assert_eq!(RoundMount::default().label(), "d = 17.9");
}

#[test]
fn test_lens_mount_preset() {
    let settings = Settings::default();
    let lens = lens_mount(&settings, 25.4, Layout::Printable).unwrap();
    assert_eq!(
        lens,
        round_mount_light(&settings, &RoundMount::lens(25.4), Layout::Printable).unwrap()
    );
    // the lens rests on the stop
    assert!(lens.contains(DVec3::new(-12.2, 0.0, -4.0)));
    assert!(!lens.contains(DVec3::new(-12.2, 0.0, 0.0)));
}
