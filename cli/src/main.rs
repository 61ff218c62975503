//! holmos-gen - Holmos part generator
//!
//! Writes OpenSCAD sources for the printed parts of the microscope rig.
//!
//! Usage:
//!   holmos-gen                     Write every part and the full assembly
//!   holmos-gen slide_holder ...    Write only the named parts
//!   holmos-gen --list              List the part files

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use holmos_config::settings::DEFAULT_SETTINGS_FILE;
use holmos_config::Settings;
use holmos_csg::{write_scad, ScadDocument, ScadHeader};
use holmos_parts::{catalogue, file_name, full_assembly, Layout, Part};
use rayon::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const ASSEMBLY_FILE: &str = "full_assembly.scad";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(name = "holmos-gen")]
#[command(about = "Generate OpenSCAD sources for the Holmos microscope parts")]
#[command(version)]
struct Cli {
    /// Settings file selecting the universal mount (defaults apply if missing)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_SETTINGS_FILE)]
    settings: PathBuf,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = "scad")]
    out: PathBuf,

    /// Use OpenSCAD's default facet resolution instead of print quality
    #[arg(long)]
    coarse: bool,

    /// Stand the rig on the cage base plate
    #[arg(long)]
    mount_bottom: bool,

    /// List the part files and exit
    #[arg(long)]
    list: bool,

    /// Parts to generate; all parts and the assembly when empty
    #[arg(value_name = "PART")]
    parts: Vec<String>,
}

/// Catalogue entries named in `names` with their file index, or every entry
/// when `names` is empty.
fn select(catalogue: &[Part], names: &[String]) -> Result<Vec<(usize, Part)>> {
    let indexed = catalogue.iter().copied().enumerate();
    if names.is_empty() {
        return Ok(indexed.collect());
    }

    for name in names {
        if Part::from_name(name).is_none() {
            let known: Vec<&str> = catalogue.iter().map(|p| p.name()).collect();
            bail!("unknown part '{name}', expected one of: {}", known.join(", "));
        }
    }
    Ok(indexed.filter(|(_, part)| names.iter().any(|n| n == part.name())).collect())
}

/// Log filter from `RUST_LOG`, falling back to warnings only when it is
/// unset or invalid.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn write_part(out: &Path, index: usize, part: Part, settings: &Settings, header: ScadHeader) -> Result<PathBuf> {
    let solid = part
        .build(settings, Layout::Printable)
        .with_context(|| format!("Failed to build {part}"))?;
    let path = out.join(file_name(index, part));
    write_scad(&path, &ScadDocument::new(solid).with_header(header))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

fn main() -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt().with_env_filter(log_filter(rust_log.as_deref())).init();

    let cli = Cli::parse();
    let parts = catalogue(cli.mount_bottom);

    if cli.list {
        for (index, part) in parts.iter().enumerate() {
            println!("{}", file_name(index, *part));
        }
        return Ok(());
    }

    let settings = Settings::load(&cli.settings)
        .with_context(|| format!("Failed to load settings from {}", cli.settings.display()))?;
    let header = if cli.coarse {
        ScadHeader::coarse()
    } else {
        ScadHeader::fine()
    };

    let selected = select(&parts, &cli.parts)?;
    let mut written = selected
        .par_iter()
        .map(|(index, part)| write_part(&cli.out, *index, *part, &settings, header))
        .collect::<Result<Vec<_>>>()?;

    if cli.parts.is_empty() {
        let assembly = full_assembly(&settings, cli.mount_bottom).context("Failed to build the assembly")?;
        let path = cli.out.join(ASSEMBLY_FILE);
        write_scad(&path, &ScadDocument::new(assembly).with_header(header))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }

    for path in &written {
        info!(path = %path.display(), "Wrote part");
    }
    println!("Wrote {} files to {}", written.len(), cli.out.display());

    match &settings.openscad_path {
        Some(openscad) => println!("Render to STL with: {} -o part.stl <file.scad>", openscad.display()),
        None => warn!("path_to_openscad is not set, render the files with OpenSCAD manually"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_by_default() {
        let parts = catalogue(false);
        let selected = select(&parts, &[]).unwrap();
        assert_eq!(selected.len(), parts.len());
        assert_eq!(selected[0], (0, Part::RpiMount));
    }

    #[test]
    fn test_select_keeps_catalogue_index() {
        let parts = catalogue(true);
        let selected = select(&parts, &["slide_holder".to_string()]).unwrap();
        assert_eq!(selected, vec![(4, Part::SlideHolder)]);
    }

    #[test]
    fn test_select_rejects_unknown_part() {
        let parts = catalogue(false);
        let err = select(&parts, &["warp_drive".to_string()]).unwrap_err();
        assert!(err.to_string().contains("warp_drive"));
    }

    #[test]
    fn test_log_filter_honours_rust_log() {
        use tracing::level_filters::LevelFilter;

        assert_eq!(log_filter(Some("info")).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::parse_from(["holmos-gen", "--coarse", "--out", "build", "laser_mount"]);
        assert!(cli.coarse);
        assert_eq!(cli.out, PathBuf::from("build"));
        assert_eq!(cli.parts, vec!["laser_mount".to_string()]);
    }
}
