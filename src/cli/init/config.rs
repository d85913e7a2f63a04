//! Configuration and data file generation for new sites.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::data::SAMPLE_JSON;

/// Default config filename
const CONFIG_FILE: &str = "pagoda.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Generate pagoda.toml content with comments.
pub fn generate_config_template() -> String {
    format!(
        "\
# Pagoda configuration file (v{})

[build]
pages = \"pages\"            # Page template directory
data = \"data.json\"         # Site data JSON document
assets = \"assets\"          # Static passthrough directory
output = \"public\"          # Rendered site destination

[serve]
interface = \"127.0.0.1\"    # Network interface (127.0.0.1 = localhost only)
port = 5280                # HTTP port number
watch = true               # Auto-rebuild on file changes
",
        env!("CARGO_PKG_VERSION")
    )
}

/// Write default pagoda.toml configuration.
pub fn write_config(root: &Path) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(())
}

/// Write data.json from the embedded sample content.
pub fn write_data(root: &Path) -> Result<()> {
    let path = root.join("data.json");
    if !path.exists() {
        fs::write(&path, SAMPLE_JSON)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
    }
    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns.
pub fn write_ignore_files(root: &Path, output_dir: &Path) -> Result<()> {
    let output_pattern = Path::new("/").join(output_dir);
    let patterns = [
        output_pattern.to_string_lossy().into_owned(),
        ".DS_Store".to_string(),
    ];

    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Don't overwrite the user's ignore files
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_template_parses() {
        let template = generate_config_template();
        let config = crate::config::SiteConfig::from_str(&template).unwrap();

        assert_eq!(config.build.pages, Path::new("pages"));
        assert_eq!(config.serve.port, 5280);
    }

    #[test]
    fn test_write_data_is_valid_site_data() {
        let temp = TempDir::new().unwrap();
        write_data(temp.path()).unwrap();

        let data = crate::data::load::load(&temp.path().join("data.json")).unwrap();
        assert!(!data.brand.name.is_empty());
        assert!(!data.services_page.services.is_empty());
    }

    #[test]
    fn test_ignore_files_written_once() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".gitignore"), "custom").unwrap();

        write_ignore_files(temp.path(), Path::new("public")).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join(".gitignore")).unwrap(),
            "custom"
        );
        let ignore = fs::read_to_string(temp.path().join(".ignore")).unwrap();
        assert!(ignore.contains("/public"));
    }
}
