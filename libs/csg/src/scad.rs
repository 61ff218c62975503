//! # OpenSCAD Serializer
//!
//! Prints a [`Solid`] tree as OpenSCAD source.
//!
//! Output is deterministic: the same tree always yields byte-identical text.
//! Hole markers are resolved before printing. Numbers use Rust's shortest
//! round-trip formatting, with negative zero printed as `0`.
//!
//! ## Example
//!
//! ```rust
//! use holmos_csg::{ScadDocument, ScadHeader, Solid};
//!
//! let cube = Solid::cube([10.0, 20.0, 5.0], true)?.translate([0.0, -20.0, 0.0]);
//! let text = ScadDocument::new(cube).with_header(ScadHeader::fine()).render();
//! assert!(text.starts_with("$fa = 5;\n$fs = 0.1;\n"));
//! assert!(text.contains("translate(v = [0, -20, 0]) {"));
//! assert!(text.contains("cube(center = true, size = [10, 20, 5]);"));
//! # Ok::<(), holmos_csg::CsgError>(())
//! ```

use std::fmt::Write;

use holmos_config::constants::{DEFAULT_FA, DEFAULT_FS, FINE_FA, FINE_FS};

use crate::error::CsgError;
use crate::solid::{HAlign, Solid, TextStyle, VAlign};

// =============================================================================
// DOCUMENT
// =============================================================================

/// Facet resolution statements emitted before the geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScadHeader {
    /// Minimum fragment angle in degrees.
    pub fa: f64,
    /// Minimum fragment size.
    pub fs: f64,
}

impl ScadHeader {
    /// Resolution for printable output.
    pub fn fine() -> Self {
        Self {
            fa: FINE_FA,
            fs: FINE_FS,
        }
    }

    /// OpenSCAD's own defaults, for quick previews.
    pub fn coarse() -> Self {
        Self {
            fa: DEFAULT_FA,
            fs: DEFAULT_FS,
        }
    }
}

/// A complete `.scad` file: optional header plus one root solid.
#[derive(Debug, Clone, PartialEq)]
pub struct ScadDocument {
    header: Option<ScadHeader>,
    root: Solid,
}

impl ScadDocument {
    /// Document without a header.
    pub fn new(root: Solid) -> Self {
        Self { header: None, root }
    }

    /// Sets the facet header.
    pub fn with_header(mut self, header: ScadHeader) -> Self {
        self.header = Some(header);
        self
    }

    /// Root solid as given, before hole resolution.
    pub fn root(&self) -> &Solid {
        &self.root
    }

    /// Renders the document, rejecting NaN or infinite numbers that the
    /// renderer could not parse.
    pub fn try_render(&self) -> Result<String, CsgError> {
        if let Some(header) = self.header {
            for (name, value) in [("$fa", header.fa), ("$fs", header.fs)] {
                if !value.is_finite() {
                    return Err(CsgError::InvalidDimension { name, value });
                }
            }
        }
        self.root.check_finite()?;
        Ok(self.render())
    }

    /// Renders the document to OpenSCAD source without validation.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(header) = self.header {
            let _ = writeln!(out, "$fa = {};", num(header.fa));
            let _ = writeln!(out, "$fs = {};", num(header.fs));
            out.push('\n');
        }
        out.push_str(&to_scad(&self.root));
        out
    }
}

// =============================================================================
// TREE PRINTER
// =============================================================================

/// Prints `solid` as OpenSCAD statements, resolving hole markers first.
pub fn to_scad(solid: &Solid) -> String {
    let mut out = String::new();
    let resolved;
    let solid = if solid.has_holes() {
        resolved = solid.clone().resolve_holes();
        &resolved
    } else {
        solid
    };
    print_node(&mut out, solid, 0);
    out
}

fn print_node(out: &mut String, solid: &Solid, depth: usize) {
    let indent = "\t".repeat(depth);
    match solid {
        Solid::Cube { size, center } => {
            let _ = writeln!(out, "{indent}cube(center = {center}, size = {});", vec3(size));
        }
        Solid::Sphere { radius } => {
            let _ = writeln!(out, "{indent}sphere(r = {});", num(*radius));
        }
        Solid::Cylinder {
            height,
            radius1,
            radius2,
            center,
        } => {
            let _ = writeln!(
                out,
                "{indent}cylinder(center = {center}, h = {}, r1 = {}, r2 = {});",
                num(*height),
                num(*radius1),
                num(*radius2)
            );
        }
        Solid::Polyhedron { points, faces } => {
            let points = list(points.iter().map(vec3));
            let faces = list(faces.iter().map(|f| list(f.iter().map(usize::to_string))));
            let _ = writeln!(out, "{indent}polyhedron(faces = {faces}, points = {points});");
        }
        Solid::Polygon { points } => {
            let points = list(points.iter().map(|p| list(p.iter().map(|c| num(*c)))));
            let _ = writeln!(out, "{indent}polygon(points = {points});");
        }
        Solid::Text { label, style } => {
            let _ = writeln!(out, "{indent}text({});", text_args(label, style));
        }
        Solid::LinearExtrude {
            height,
            center,
            child,
        } => {
            let head = format!("linear_extrude(center = {center}, height = {})", num(*height));
            print_block(out, &head, std::slice::from_ref(child.as_ref()), depth);
        }
        Solid::Translate { offset, child } => {
            let head = format!("translate(v = {})", vec3(offset));
            print_block(out, &head, std::slice::from_ref(child.as_ref()), depth);
        }
        Solid::Rotate { angles, child } => {
            let head = format!("rotate(a = {})", vec3(angles));
            print_block(out, &head, std::slice::from_ref(child.as_ref()), depth);
        }
        Solid::Scale { factors, child } => {
            let head = format!("scale(v = {})", vec3(factors));
            print_block(out, &head, std::slice::from_ref(child.as_ref()), depth);
        }
        Solid::Mirror { normal, child } => {
            let head = format!("mirror(v = {})", vec3(normal));
            print_block(out, &head, std::slice::from_ref(child.as_ref()), depth);
        }
        Solid::Union { children } => print_block(out, "union()", children, depth),
        Solid::Difference { children } => print_block(out, "difference()", children, depth),
        Solid::Intersection { children } => print_block(out, "intersection()", children, depth),
        // Unreachable after resolution; printed as its geometry.
        Solid::Hole { child } => print_node(out, child, depth),
        Solid::Empty => {}
    }
}

fn print_block(out: &mut String, head: &str, children: &[Solid], depth: usize) {
    let indent = "\t".repeat(depth);
    let _ = writeln!(out, "{indent}{head} {{");
    for child in children {
        print_node(out, child, depth + 1);
    }
    let _ = writeln!(out, "{indent}}}");
}

fn text_args(label: &str, style: &TextStyle) -> String {
    let mut args = Vec::new();
    if let Some(font) = &style.font {
        args.push(format!("font = {}", quote(font)));
    }
    let halign = match style.halign {
        HAlign::Left => "left",
        HAlign::Center => "center",
        HAlign::Right => "right",
    };
    let valign = match style.valign {
        VAlign::Top => "top",
        VAlign::Center => "center",
        VAlign::Baseline => "baseline",
        VAlign::Bottom => "bottom",
    };
    args.push(format!("halign = {}", quote(halign)));
    args.push(format!("size = {}", num(style.size)));
    args.push(format!("text = {}", quote(label)));
    args.push(format!("valign = {}", quote(valign)));
    args.join(", ")
}

// =============================================================================
// VALUE FORMATTING
// =============================================================================

/// Formats a number; `-0` becomes `0`.
pub fn num(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_string()
}

fn vec3(v: &[f64; 3]) -> String {
    list(v.iter().map(|c| num(*c)))
}

fn list<I: IntoIterator<Item = String>>(items: I) -> String {
    format!("[{}]", items.into_iter().collect::<Vec<_>>().join(", "))
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

// =============================================================================
// TESTS
// =============================================================================
