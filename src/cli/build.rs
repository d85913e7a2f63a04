//! Site building orchestration.
//!
//! Build pipeline phases:
//! - **Load** - Read the site data document (single read, fatal on error)
//! - **Render** - Parse and populate page templates in parallel
//! - **Assets** - Copy the static directory byte-identical
//! - **Publish** - Place the data document into the output root

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::{
    config::SiteConfig,
    core::PageId,
    data::{self, SiteData},
    debug, dom, log,
    logger::ProgressLine,
    render::render_page,
    utils::{
        fs::{clean_dir, collect_files, copy_dir_recursive, write_output},
        plural_count,
    },
};

/// Build the entire site.
///
/// Pipeline: load data -> render pages -> copy assets -> publish data.
/// When `quiet` is set (watch-mode rebuilds), progress display and
/// summary logging are suppressed.
pub fn build_site(config: &SiteConfig, quiet: bool) -> Result<()> {
    let start = std::time::Instant::now();

    // Data failures abort before any output file is touched
    let data = data::load(&config.build.data)?;

    if config.build.clean {
        clean_dir(&config.build.output)?;
    }

    let templates = collect_files(&config.build.pages, Some("html"));
    if templates.is_empty() {
        log!(
            "build";
            "no page templates found in '{}'",
            config.root_relative(&config.build.pages).display()
        );
    }

    let progress = (!quiet && !templates.is_empty())
        .then(|| ProgressLine::new(&[("pages", templates.len())]));

    templates.par_iter().try_for_each(|path| -> Result<()> {
        render_template(path, &data, config)?;
        if let Some(p) = &progress {
            p.inc("pages");
        }
        Ok(())
    })?;

    if let Some(p) = progress {
        p.finish();
    }

    let assets_copied = copy_assets(config)?;
    publish_data(config)?;

    if !quiet {
        log!(
            "build";
            "{}, {} in {:.2?}",
            plural_count(templates.len(), "page"),
            plural_count(assets_copied, "asset"),
            start.elapsed()
        );
    }

    Ok(())
}

/// Render a single page template into the output directory.
fn render_template(path: &Path, data: &SiteData, config: &SiteConfig) -> Result<()> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read template '{}'", path.display()))?;

    let mut doc = dom::parse(&source);
    let page = PageId::from_marker(doc.page_marker());
    render_page(&mut doc, data, &page);

    let rel = path.strip_prefix(&config.build.pages).unwrap_or(path);
    let dest = config.build.output.join(rel);
    write_output(&dest, &dom::serialize(&doc))?;

    debug!("build"; "rendered {} ({})", rel.display(), page.name());
    Ok(())
}

/// Copy the assets directory into the output, preserving its name.
///
/// A missing assets directory is not an error; the site may be pure HTML.
fn copy_assets(config: &SiteConfig) -> Result<usize> {
    if !config.build.assets.is_dir() {
        debug!("build"; "no assets directory, skipping copy");
        return Ok(0);
    }

    let dir_name = config
        .build
        .assets
        .file_name()
        .map(Path::new)
        .unwrap_or_else(|| Path::new("assets"));
    let dest = config.build.output.join(dir_name);

    copy_dir_recursive(&config.build.assets, &dest)
}

/// Copy the data document into the output root so the published site
/// carries the content it was rendered from.
fn publish_data(config: &SiteConfig) -> Result<()> {
    let file_name = config
        .build
        .data
        .file_name()
        .map(Path::new)
        .unwrap_or_else(|| Path::new("data.json"));
    let dest = config.build.output.join(file_name);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(&config.build.data, &dest)
        .with_context(|| format!("failed to publish '{}'", config.build.data.display()))?;
    Ok(())
}
