//! Site initialization module.
//!
//! Creates new site structure with default configuration:
//!
//! - [`structure`]: directory layout and embedded starter templates
//! - [`config`]: `pagoda.toml`, `data.json` and ignore files

mod config;
mod structure;

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Create a new site with default structure.
///
/// # Steps
/// 1. Validate target directory
/// 2. Create directory structure and starter templates
/// 3. Write configuration and data files
///
/// If `dry_run` is true, only prints the config template to stdout.
pub fn new_site(site_config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    let root = site_config.get_root();
    if let Err(e) = validate_target(root, has_name) {
        log!("error"; "{}", e);
        std::process::exit(1);
    }

    structure::create_structure(root)?;
    structure::write_starter_files(root)?;

    config::write_config(root)?;
    config::write_data(root)?;
    let output_dir = site_config.root_relative(&site_config.build.output);
    config::write_ignore_files(root, &output_dir)?;

    log!("init"; "site initialized, run `pagoda serve` inside it");
    Ok(())
}

/// Validate the target directory.
///
/// With a name the directory must not exist yet; without one the current
/// directory must be empty.
fn validate_target(root: &Path, has_name: bool) -> Result<()> {
    if has_name {
        if root.exists() {
            bail!(
                "Directory '{}' already exists.\n\
                 Choose a different name or remove the existing directory.",
                root.display()
            );
        }
        return Ok(());
    }

    let occupied = root.exists()
        && fs::read_dir(root)
            .with_context(|| format!("Failed to read directory '{}'", root.display()))?
            .next()
            .is_some();
    if occupied {
        bail!(
            "Current directory is not empty.\n\
             Use `pagoda init <name>` to create in a new subdirectory."
        );
    }
    Ok(())
}
