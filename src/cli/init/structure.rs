//! Site directory structure and starter templates.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Standard site directory structure.
const SITE_DIRS: &[&str] = &["pages", "assets/css", "assets/images"];

/// Starter files embedded at compile time: (relative path, content).
///
/// The home template carries the full target id vocabulary so a fresh
/// site renders every section of the sample data out of the box. The
/// secondary pages carry only the nav/footer ids and exercise the
/// fragment rewrite for in-page anchors.
const STARTER_FILES: &[(&str, &str)] = &[
    ("pages/index.html", include_str!("site/index.html")),
    ("pages/services.html", include_str!("site/services.html")),
    ("pages/contact.html", include_str!("site/contact.html")),
    ("assets/css/style.css", include_str!("site/style.css")),
];

/// Create site directory structure at the given root.
///
/// The root directory is created if it doesn't exist.
pub fn create_structure(root: &Path) -> Result<()> {
    for dir in SITE_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    }
    Ok(())
}

/// Write the starter page template and stylesheet.
///
/// Existing files are never overwritten.
pub fn write_starter_files(root: &Path) -> Result<()> {
    for (rel, content) in STARTER_FILES {
        let path = root.join(rel);
        if !path.exists() {
            fs::write(&path, content)
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
    fn test_create_structure() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("my_site");

        create_structure(&root).unwrap();

        assert!(root.join("pages").is_dir());
        assert!(root.join("assets/css").is_dir());
        assert!(root.join("assets/images").is_dir());
    }

    #[test]
    fn test_starter_template_carries_id_vocabulary() {
        let temp = TempDir::new().unwrap();
        create_structure(temp.path()).unwrap();
        write_starter_files(temp.path()).unwrap();

        let index = fs::read_to_string(temp.path().join("pages/index.html")).unwrap();
        for id in [
            "nav-menu",
            "hero-title",
            "services-container",
            "hours-table",
            "booking-info",
            "footer-copyright",
        ] {
            assert!(index.contains(&format!("id=\"{id}\"")), "missing #{id}");
        }
        assert!(index.contains("data-page=\"home\""));
    }

    #[test]
    fn test_starter_files_never_overwrite() {
        let temp = TempDir::new().unwrap();
        create_structure(temp.path()).unwrap();
        fs::write(temp.path().join("pages/index.html"), "custom").unwrap();

        write_starter_files(temp.path()).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("pages/index.html")).unwrap(),
            "custom"
        );
    }
}
