//! `[build]` section configuration.
//!
//! Paths for the render pipeline, all relative to the site root:
//!
//! ```toml
//! [build]
//! pages = "pages"        # Page template directory
//! data = "data.json"     # Site data JSON document
//! assets = "assets"      # Static passthrough directory
//! output = "public"      # Rendered site destination
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::types::{ConfigDiagnostics, FieldPath};

/// Build settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Page template directory.
    pub pages: PathBuf,

    /// Site data JSON document.
    pub data: PathBuf,

    /// Static passthrough directory (copied byte-identical).
    pub assets: PathBuf,

    /// Rendered site destination.
    pub output: PathBuf,

    /// Empty the output directory before building (CLI-driven).
    #[serde(skip)]
    pub clean: bool,
}

/// Field path table for diagnostics.
pub struct BuildConfigFields {
    pub pages: FieldPath,
    pub data: FieldPath,
    pub assets: FieldPath,
    pub output: FieldPath,
}

impl BuildConfig {
    pub const FIELDS: BuildConfigFields = BuildConfigFields {
        pages: FieldPath::new("build.pages"),
        data: FieldPath::new("build.data"),
        assets: FieldPath::new("build.assets"),
        output: FieldPath::new("build.output"),
    };

    /// Pre-normalization check: configured paths must be relative so they
    /// resolve against the site root.
    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        let fields = [
            (Self::FIELDS.pages, &self.pages),
            (Self::FIELDS.data, &self.data),
            (Self::FIELDS.assets, &self.assets),
            (Self::FIELDS.output, &self.output),
        ];
        for (field, path) in fields {
            if path.is_absolute() {
                diag.error_with_hint(
                    field,
                    format!("path must be relative, got `{}`", path.display()),
                    "paths resolve against the directory containing pagoda.toml",
                );
            }
        }
    }

    /// Post-normalization check: sources must exist. The assets directory is
    /// optional; the output directory is created on demand.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.pages.is_dir() {
            diag.error_with_hint(
                Self::FIELDS.pages,
                format!("pages directory not found: `{}`", self.pages.display()),
                "run `pagoda init` to scaffold a new site",
            );
        }
        if !self.data.is_file() {
            diag.error_with_hint(
                Self::FIELDS.data,
                format!("site data file not found: `{}`", self.data.display()),
                "run `pagoda init` to scaffold a new site",
            );
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            pages: PathBuf::from("pages"),
            data: PathBuf::from("data.json"),
            assets: PathBuf::from("assets"),
            output: PathBuf::from("public"),
            clean: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_build_config_defaults() {
        let config = test_parse_config("");

        assert_eq!(config.build.pages, PathBuf::from("pages"));
        assert_eq!(config.build.data, PathBuf::from("data.json"));
        assert_eq!(config.build.assets, PathBuf::from("assets"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert!(!config.build.clean);
    }

    #[test]
    fn test_build_config_override() {
        let config = test_parse_config("[build]\npages = \"templates\"\noutput = \"dist\"");

        assert_eq!(config.build.pages, PathBuf::from("templates"));
        assert_eq!(config.build.output, PathBuf::from("dist"));
        // data keeps the default
        assert_eq!(config.build.data, PathBuf::from("data.json"));
    }

    #[test]
    fn test_absolute_path_rejected() {
        let build = BuildConfig {
            pages: PathBuf::from("/etc/pages"),
            ..BuildConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();

        build.validate_paths(&mut diag);

        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, BuildConfig::FIELDS.pages);
    }
}
