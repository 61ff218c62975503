//! # Geometric Helpers
//!
//! Building blocks shared by the part generators.

use std::f64::consts::PI;

use holmos_config::constants::{approx_equal, approx_zero, EPSILON, M3_CLEARANCE_DIAMETER};
use holmos_csg::{union, CsgError, Solid};

// =============================================================================
// PLATES
// =============================================================================

/// Centered plate with quarter-circle corners of radius `r` in the xy plane.
///
/// ## Example
///
/// ```rust
/// use holmos_parts::helpers::rounded_plate;
///
/// let plate = rounded_plate([40.0, 40.0, 10.0], 5.0)?;
/// let b = plate.bounds().unwrap();
/// assert_eq!(b.size().to_array(), [40.0, 40.0, 10.0]);
/// # Ok::<(), holmos_csg::CsgError>(())
/// ```
///
/// ## Errors
///
/// `r` larger than half the shorter side is rejected with
/// [`CsgError::InvalidGeometry`].
pub fn rounded_plate(size: [f64; 3], r: f64) -> Result<Solid, CsgError> {
    let [x, y, z] = size;
    if r > x.min(y) / 2.0 + EPSILON {
        return Err(CsgError::invalid_geometry(format!(
            "corner radius {r} exceeds half of the plate side ({x} x {y})"
        )));
    }

    let cube_x = Solid::cube([(x - 2.0 * r).max(0.0), y, z], true)?;
    let cube_y = Solid::cube([x, (y - 2.0 * r).max(0.0), z], true)?;

    let (dx, dy) = (x / 2.0 - r, y / 2.0 - r);
    let corners = [[dx, dy], [-dx, dy], [-dx, -dy], [dx, -dy]]
        .into_iter()
        .map(|[cx, cy]| Ok(Solid::cylinder(r, z, true)?.translate([cx, cy, 0.0])))
        .collect::<Result<Vec<_>, CsgError>>()?;

    Ok(union([cube_x, cube_y].into_iter().chain(corners)))
}

/// Strut with two M3 clearance holes `hole_dist` apart along y.
pub fn strut_with_holes(hole_dist: f64, thick: f64, width: f64) -> Result<Solid, CsgError> {
    let strut = rounded_plate([width, hole_dist + width, thick], width / 2.0)?;
    let holes = [-1.0, 1.0]
        .into_iter()
        .map(|sign| {
            Ok(Solid::cylinder_d(M3_CLEARANCE_DIAMETER, 2.0 * thick, true)?
                .translate([0.0, sign * hole_dist / 2.0, 0.0]))
        })
        .collect::<Result<Vec<_>, CsgError>>()?;
    Ok(strut.subtract(union(holes)))
}

// =============================================================================
// ARCS
// =============================================================================

/// Centered cylinder section between the angles `a0` and `a1` (degrees,
/// counter-clockwise from +x).
///
/// The sweep is `(a1 - a0)` reduced modulo 360. A zero sweep yields the full
/// cylinder. Both angles must be finite.
pub fn cyl_arc(r: f64, h: f64, a0: f64, a1: f64) -> Result<Solid, CsgError> {
    if let Some(value) = [a0, a1].into_iter().find(|a| !a.is_finite()) {
        return Err(CsgError::InvalidDimension { name: "angle", value });
    }
    let sweep = (a1 - a0).rem_euclid(360.0);
    if approx_zero(sweep) || approx_equal(sweep, 360.0) {
        return Solid::cylinder(r, h, true);
    }

    if sweep < 180.0 {
        cyl_arc_lt_180(r, h, a0, a1)
    } else {
        // Cut the complementary section out of a full cylinder.
        let rest = cyl_arc_lt_180(2.0 * r, 2.0 * h, a1, a0)?;
        Ok(Solid::cylinder(r, h, true)?.subtract(rest))
    }
}

/// Cylinder section for sweeps below 180 degrees.
fn cyl_arc_lt_180(r: f64, h: f64, a0: f64, a1: f64) -> Result<Solid, CsgError> {
    let positive_y = Solid::cube([4.0 * r, 4.0 * r, 2.0 * h], true)?.translate([0.0, 2.0 * r, 0.0]);
    Ok(Solid::cylinder(r, h, true)?
        .intersect(positive_y.clone())
        .rotate([0.0, 0.0, -(a1 - a0)])
        .subtract(positive_y)
        .rotate([0.0, 0.0, a1]))
}

// =============================================================================
// NUTS AND PINS
// =============================================================================

/// Hexagonal prism; `diam` is the distance between parallel sides.
pub fn hexagon(diam: f64, height: f64) -> Result<Solid, CsgError> {
    const SIDES: usize = 6;
    let face_width = diam * (PI / SIDES as f64).tan();
    let single = Solid::cube([diam / 2.0, face_width, height], true)?.translate([-diam / 4.0, 0.0, 0.0]);
    Ok(union((0..SIDES).map(|i| {
        single
            .clone()
            .rotate([0.0, 0.0, 360.0 * i as f64 / SIDES as f64])
    })))
}

/// Centered pin of `size` whose upper half tapers by `taper` in x and y.
pub fn tapered_pin(size: [f64; 3], taper: [f64; 2]) -> Result<Solid, CsgError> {
    let [x, y, z] = size;
    let [xt, yt] = taper;
    let bottom = Solid::cube([x, y, z / 2.0], true)?.translate([0.0, 0.0, -z / 4.0]);

    let (rx, ry) = (x / 2.0, y / 2.0);
    let points = vec![
        [rx - xt, ry - yt, z / 2.0],
        [rx - xt, -ry + yt, z / 2.0],
        [-rx + xt, -ry + yt, z / 2.0],
        [-rx + xt, ry - yt, z / 2.0],
        [rx, ry, 0.0],
        [rx, -ry, 0.0],
        [-rx, -ry, 0.0],
        [-rx, ry, 0.0],
    ];
    let faces = vec![
        vec![0, 1, 2, 3],
        vec![7, 6, 5, 4],
        vec![1, 0, 4, 5],
        vec![2, 1, 5, 6],
        vec![3, 2, 6, 7],
        vec![0, 3, 7, 4],
    ];
    let top = Solid::polyhedron(points, faces)?;
    Ok(bottom.union_with(top))
}

// =============================================================================
// CLIP PROFILES
// =============================================================================

/// `n` evenly spaced samples from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Shape of the cosine spring wave of a snap clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipWave {
    /// Clearance left between clip and clamped surface.
    pub gap: f64,
    /// Material thickness of the clip.
    pub thickness: f64,
    /// Peak to peak height of the wave.
    pub amplitude: f64,
}

impl Default for ClipWave {
    fn default() -> Self {
        Self {
            gap: 0.5,
            thickness: 1.5,
            amplitude: 4.0,
        }
    }
}

impl ClipWave {
    /// Extent of the clip perpendicular to the clamped surface.
    pub fn depth(&self) -> f64 {
        self.thickness + self.amplitude + self.gap
    }
}

/// 2D clip profile in the xy plane, sampled at `samples` points per side.
///
/// The inner edge follows `x = gap + a/2 - a/2 * cos(y / reach * pi)` for `y`
/// from `length - reach` down to `-reach`; the outer edge is the same curve
/// offset by the clip thickness.
pub fn clip_profile(wave: &ClipWave, reach: f64, length: f64, samples: usize) -> Result<Solid, CsgError> {
    if !(reach.is_finite() && reach > 0.0) {
        return Err(CsgError::InvalidDimension {
            name: "clip reach",
            value: reach,
        });
    }
    let half = wave.amplitude / 2.0;
    let ys = linspace(length - reach, -reach, samples);
    let xs: Vec<f64> = ys
        .iter()
        .map(|y| wave.gap + half - half * (y / reach * PI).cos())
        .collect();

    let outer = xs.iter().zip(&ys).map(|(x, y)| [x + wave.thickness, *y]);
    let inner = xs.iter().zip(&ys).rev().map(|(x, y)| [*x, *y]);
    Solid::polygon(outer.chain(inner).collect())
}

#[cfg(test)]
mod tests;
