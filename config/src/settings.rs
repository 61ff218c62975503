//! # Settings File
//!
//! Runtime selection of the universal base every part attaches to, the rod
//! clamp tightness and the path to the external renderer.
//!
//! ```toml
//! [mount]
//! Threads20mm = false
//! Rods6mmBy30mm = true
//! Rods6mm_tightness = 0.5
//!
//! [environ]
//! path_to_openscad = "/usr/bin/openscad"
//! ```
//!
//! Settings are loaded once by the caller and passed into every part
//! generator; nothing in the workspace reads them implicitly.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::constants::{DEFAULT_ROD_TIGHTNESS, ROD_DIAMETER};

/// Default file name looked up by the generator binary.
pub const DEFAULT_SETTINGS_FILE: &str = "global_settings.toml";

/// Universal base style shared by all parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MountStyle {
    /// Two M2.3 threads 20 mm apart for an OWIS 40 rail carrier.
    Threads20mm,
    /// Snap-on clamp for two 6 mm rods, 30 mm apart.
    #[default]
    Rods6mmBy30mm,
    /// No base; parts are emitted without a mount.
    None,
}

/// Resolved settings passed into part generators.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Selected base style.
    pub mount: MountStyle,
    /// How much narrower the rod clamp opening is than the rod.
    pub rod_tightness: f64,
    /// Path to the external OpenSCAD executable, if configured.
    pub openscad_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mount: MountStyle::default(),
            rod_tightness: DEFAULT_ROD_TIGHTNESS,
            openscad_path: None,
        }
    }
}

/// Errors raised while reading or validating a settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file exists but could not be read.
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML or has wrong value types.
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// Both mount styles were enabled at once.
    #[error("bad configuration: Threads20mm and Rods6mmBy30mm are mutually exclusive")]
    ConflictingMountStyles,

    /// The rod clamp tightness is not usable.
    #[error("Rods6mm_tightness must be finite and within [0, {max}): {value}")]
    InvalidTightness { value: f64, max: f64 },
}

// =============================================================================
// FILE MODEL
// =============================================================================

#[derive(Debug, Deserialize, Default)]
struct SettingsFile {
    #[serde(default)]
    mount: MountSection,
    #[serde(default)]
    environ: EnvironSection,
}

#[derive(Debug, Deserialize, Default)]
struct MountSection {
    #[serde(rename = "Threads20mm", default)]
    threads_20mm: bool,
    #[serde(rename = "Rods6mmBy30mm", default)]
    rods_6mm_by_30mm: bool,
    #[serde(rename = "Rods6mm_tightness")]
    rods_6mm_tightness: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
struct EnvironSection {
    path_to_openscad: Option<PathBuf>,
}

impl Settings {
    /// Parses settings from TOML text.
    ///
    /// Keys that are absent keep their defaults except the mount flags:
    /// a file that enables neither style resolves to [`MountStyle::None`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use holmos_config::settings::{MountStyle, Settings};
    ///
    /// let settings = Settings::from_toml_str(
    ///     "[mount]\nRods6mmBy30mm = true\nRods6mm_tightness = 0.3\n",
    /// ).unwrap();
    /// assert_eq!(settings.mount, MountStyle::Rods6mmBy30mm);
    /// assert_eq!(settings.rod_tightness, 0.3);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: SettingsFile = toml::from_str(text)?;
        Self::from_file_model(file)
    }

    /// Loads settings from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Returns a copy with a different mount style.
    pub fn with_mount(mut self, mount: MountStyle) -> Self {
        self.mount = mount;
        self
    }

    fn from_file_model(file: SettingsFile) -> Result<Self, ConfigError> {
        let mount = match (file.mount.threads_20mm, file.mount.rods_6mm_by_30mm) {
            (true, true) => return Err(ConfigError::ConflictingMountStyles),
            (true, false) => MountStyle::Threads20mm,
            (false, true) => MountStyle::Rods6mmBy30mm,
            (false, false) => MountStyle::None,
        };

        let rod_tightness = file.mount.rods_6mm_tightness.unwrap_or(DEFAULT_ROD_TIGHTNESS);
        if !rod_tightness.is_finite() || !(0.0..ROD_DIAMETER).contains(&rod_tightness) {
            return Err(ConfigError::InvalidTightness {
                value: rod_tightness,
                max: ROD_DIAMETER,
            });
        }

        Ok(Self {
            mount,
            rod_tightness,
            openscad_path: file.environ.path_to_openscad,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_rod_clamps() {
        let settings = Settings::default();
        assert_eq!(settings.mount, MountStyle::Rods6mmBy30mm);
        assert_eq!(settings.rod_tightness, DEFAULT_ROD_TIGHTNESS);
        assert!(settings.openscad_path.is_none());
    }

    #[test]
    fn test_parse_full_file() {
        let text = r#"
            [mount]
            Threads20mm = true
            Rods6mmBy30mm = false
            Rods6mm_tightness = 0.25

            [environ]
            path_to_openscad = "/opt/openscad/bin/openscad"
        "#;
        let settings = Settings::from_toml_str(text).unwrap();
        assert_eq!(settings.mount, MountStyle::Threads20mm);
        assert_eq!(settings.rod_tightness, 0.25);
        assert_eq!(
            settings.openscad_path,
            Some(PathBuf::from("/opt/openscad/bin/openscad"))
        );
    }

    #[test]
    fn test_conflicting_styles_rejected() {
        let text = "[mount]\nThreads20mm = true\nRods6mmBy30mm = true\n";
        let err = Settings::from_toml_str(text).unwrap_err();
        assert!(matches!(err, ConfigError::ConflictingMountStyles));
    }

    #[test]
    fn test_no_style_resolves_to_none() {
        let settings = Settings::from_toml_str("[environ]\n").unwrap();
        assert_eq!(settings.mount, MountStyle::None);
    }

    #[test]
    fn test_tightness_out_of_range() {
        let err = Settings::from_toml_str("[mount]\nRods6mm_tightness = 7.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTightness { .. }));
        let err = Settings::from_toml_str("[mount]\nRods6mm_tightness = -0.1\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTightness { .. }));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let err = Settings::from_toml_str("[mount]\nThreads20mm = \"yes\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = Path::new("/nonexistent/holmos/global_settings.toml");
        let settings = Settings::load(path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_with_mount() {
        let settings = Settings::default().with_mount(MountStyle::Threads20mm);
        assert_eq!(settings.mount, MountStyle::Threads20mm);
    }
}
