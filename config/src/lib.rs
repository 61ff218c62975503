//! # Holmos Config
//!
//! Centralized constants and runtime settings for the Holmos part generators.
//! Hardware dimensions (screw clearances, rail hole pitch, rod spacing) live
//! in [`constants`] so that the part crates stay declarative and do not
//! scatter literals. The settings file that selects the universal mount style
//! is modelled in [`settings`].
//!
//! ## Usage
//!
//! ```rust
//! use holmos_config::constants::{OWIS_HOLE_PITCH, PART_SIZE};
//! use holmos_config::settings::{MountStyle, Settings};
//!
//! // Rail holes sit symmetric about the optical axis
//! assert_eq!(OWIS_HOLE_PITCH / 2.0, 10.0);
//! assert_eq!(PART_SIZE, 40.0);
//!
//! let settings = Settings::from_toml_str("[mount]\nThreads20mm = true\n").unwrap();
//! assert_eq!(settings.mount, MountStyle::Threads20mm);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every hardware dimension is defined once
//! - **Explicit Settings**: parts receive a [`settings::Settings`] value
//!   instead of reading a process-wide file

pub mod constants;
pub mod settings;

pub use settings::{ConfigError, MountStyle, Settings};
