//! URL to filesystem path resolution.

use std::path::{Path, PathBuf};

/// Resolve a request URL to a file under the serve root, handling
/// `index.html` for directory URLs.
pub fn resolve_path(url: &str, serve_root: &Path) -> Option<PathBuf> {
    let clean = normalize_url(url);

    if clean.contains("..") {
        return None;
    }

    let local = serve_root.join(&clean);

    // Canonicalize to resolve symlinks and verify the path stays under
    // the serve root; rejects traversal via symlinks or encoded sequences
    let canonical = local.canonicalize().ok()?;
    let root_canonical = serve_root.canonicalize().ok()?;
    if !canonical.starts_with(&root_canonical) {
        return None;
    }

    if canonical.is_file() {
        return Some(canonical);
    }

    if canonical.is_dir() {
        let index = canonical.join("index.html");
        if index.is_file() {
            return Some(index);
        }
    }

    None
}

/// Normalize a URL: percent-decode, strip the query string, trim slashes.
fn normalize_url(url: &str) -> String {
    use percent_encoding::percent_decode_str;
    let decoded = percent_decode_str(url)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_default();

    let path = decoded.split('?').next().unwrap_or(&decoded);
    path.trim_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_file_and_directory_index() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.html"), "<html>").unwrap();
        fs::create_dir(temp.path().join("assets")).unwrap();
        fs::write(temp.path().join("assets/style.css"), "body {}").unwrap();

        let index = resolve_path("/", temp.path()).unwrap();
        assert!(index.ends_with("index.html"));

        let css = resolve_path("/assets/style.css", temp.path()).unwrap();
        assert!(css.ends_with("style.css"));

        assert!(resolve_path("/missing.html", temp.path()).is_none());
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.html"), "<html>").unwrap();

        assert!(resolve_path("/../etc/passwd", temp.path()).is_none());
        assert!(resolve_path("/%2e%2e/secret", temp.path()).is_none());
    }

    #[test]
    fn test_normalize_url_strips_query() {
        assert_eq!(normalize_url("/page.html?x=1"), "page.html");
        assert_eq!(normalize_url("/a%20b.html"), "a b.html");
    }
}
