//! # File Export
//!
//! Writes rendered documents to disk.

use std::path::Path;

use tracing::debug;

use crate::error::CsgError;
use crate::scad::ScadDocument;

/// Writes `doc` to `path`, creating missing parent directories.
///
/// Nothing is written when the document holds non-finite numbers.
pub fn write_scad(path: &Path, doc: &ScadDocument) -> Result<(), CsgError> {
    let io_err = |source| CsgError::Io {
        path: path.to_path_buf(),
        source,
    };
    let text = doc.try_render()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, &text).map_err(io_err)?;
    debug!(path = %path.display(), bytes = text.len(), "wrote scad file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solid::Solid;

    #[test]
    fn test_write_creates_directories() {
        let dir = std::env::temp_dir().join(format!("holmos-export-{}", std::process::id()));
        let path = dir.join("nested").join("cube.scad");
        let doc = ScadDocument::new(Solid::cube([1.0, 1.0, 1.0], false).unwrap());

        write_scad(&path, &doc).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, doc.render());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_write_rejects_non_finite_document() {
        let dir = std::env::temp_dir().join(format!("holmos-export-nan-{}", std::process::id()));
        let path = dir.join("bad.scad");
        let cube = Solid::cube([1.0, 1.0, 1.0], false).unwrap().scale([f64::NAN, 1.0, 1.0]);

        let err = write_scad(&path, &ScadDocument::new(cube)).unwrap_err();
        assert!(matches!(err, CsgError::InvalidDimension { name: "scale factor", .. }));
        assert!(!path.exists());
    }
}
