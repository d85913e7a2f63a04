//! Site data loader.
//!
//! A single read of the JSON document per build. A read or parse failure is
//! fatal to rendering: the build aborts before any page is touched, and the
//! templates on disk keep their static placeholder content. No retry.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::SiteData;

/// Load site data from a JSON file.
pub fn load(path: &Path) -> Result<SiteData> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read site data '{}'", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("invalid JSON in site data '{}'", path.display()))
}
