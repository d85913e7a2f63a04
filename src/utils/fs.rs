//! Filesystem helpers for the build pipeline.
//!
//! - `collect_files` - recursive file listing with extension filter
//! - `copy_dir_recursive` - byte-identical asset passthrough
//! - `write_output` - write a rendered page, creating parent dirs
//! - `clean_dir` - remove and recreate the output directory

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jwalk::WalkDir;

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Collect all files from a directory recursively, optionally filtered by
/// extension (lowercase, without the dot).
pub fn collect_files(dir: &Path, extension: Option<&str>) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(|e| e.path())
        .filter(|p| match extension {
            Some(ext) => p
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(ext)),
            None => true,
        })
        .collect()
}

/// Recursively copy directory contents. Returns the number of files copied.
pub fn copy_dir_recursive(src_dir: &Path, dest_dir: &Path) -> Result<usize> {
    let mut count = 0;
    copy_dir_inner(src_dir, dest_dir, &mut count)?;
    Ok(count)
}

fn copy_dir_inner(src_dir: &Path, dest_dir: &Path, count: &mut usize) -> Result<()> {
    for entry in fs::read_dir(src_dir)
        .with_context(|| format!("failed to read directory: {}", src_dir.display()))?
    {
        let entry = entry?;
        let src_path = entry.path();
        let dest_path = dest_dir.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_inner(&src_path, &dest_path, count)?;
        } else {
            if let Some(parent) = dest_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(&src_path, &dest_path)
                .with_context(|| format!("failed to copy: {}", src_path.display()))?;
            *count += 1;
        }
    }

    Ok(())
}

/// Write a rendered document, creating parent directories as needed.
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write: {}", path.display()))
}

/// Remove the directory if present, then recreate it empty.
pub fn clean_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)
            .with_context(|| format!("failed to remove directory: {}", dir.display()))?;
    }
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory: {}", dir.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_collect_files_filters_extension() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("index.html"), "<html>").unwrap();
        fs::write(tmp.path().join("style.css"), "body {}").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub/contact.html"), "<html>").unwrap();

        let html = collect_files(tmp.path(), Some("html"));
        assert_eq!(html.len(), 2);

        let all = collect_files(tmp.path(), None);
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_copy_dir_recursive() {
        let src = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        fs::write(src.path().join("a.css"), "a").unwrap();
        fs::create_dir(src.path().join("img")).unwrap();
        fs::write(src.path().join("img/b.png"), "b").unwrap();

        let count = copy_dir_recursive(src.path(), dest.path()).unwrap();

        assert_eq!(count, 2);
        assert_eq!(fs::read_to_string(dest.path().join("a.css")).unwrap(), "a");
        assert_eq!(fs::read_to_string(dest.path().join("img/b.png")).unwrap(), "b");
    }

    #[test]
    fn test_write_output_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out/deep/index.html");

        write_output(&path, "<html>").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "<html>");
    }

    #[test]
    fn test_clean_dir() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("public");
        fs::create_dir(&out).unwrap();
        fs::write(out.join("stale.html"), "old").unwrap();

        clean_dir(&out).unwrap();

        assert!(out.exists());
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }
}
