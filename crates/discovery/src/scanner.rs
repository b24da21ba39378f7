//! Tolerant file-system enumeration.
//!
//! Every report treats "nothing found" as a normal, reportable state: a
//! missing directory or an empty glob match produces an empty collection or
//! a zero count, never an error. Assemblers downstream rely on this to
//! render "0 plugins installed" instead of failing.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Enumerate paths matching a glob pattern.
///
/// Returns an empty vec when the pattern matches nothing, a parent
/// directory is absent, or the pattern itself is malformed (logged at
/// warn). Unreadable entries are skipped.
pub fn list_paths(pattern: &str) -> Vec<PathBuf> {
    let walker = match glob::glob(pattern) {
        Ok(walker) => walker,
        Err(e) => {
            log::warn!("Invalid glob pattern '{pattern}': {e}");
            return Vec::new();
        }
    };

    let mut paths = Vec::new();
    for entry in walker {
        match entry {
            Ok(path) => paths.push(path),
            Err(e) => log::debug!("Skipping unreadable entry: {e}"),
        }
    }
    paths
}

/// Count files under `dir`, at any depth, whose name ends with `suffix`.
///
/// A missing directory counts as zero. Traversal order is irrelevant since
/// only a total is produced.
pub fn count_matching(dir: &Path, suffix: &str) -> usize {
    if !dir.is_dir() {
        return 0;
    }

    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("Skipping unreadable entry under {}: {e}", dir.display());
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(suffix))
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn counts_matches_at_every_depth() {
        let temp = tempdir().unwrap();
        let pages = temp.path().join("pages");
        fs::create_dir_all(pages.join("blog").join("archive")).unwrap();
        fs::write(pages.join("index.htm"), b"").unwrap();
        fs::write(pages.join("blog").join("post.htm"), b"").unwrap();
        fs::write(pages.join("blog").join("archive").join("2024.htm"), b"").unwrap();
        fs::write(pages.join("notes.txt"), b"").unwrap();

        assert_eq!(count_matching(&pages, ".htm"), 3);
    }

    #[test]
    fn missing_directory_counts_zero() {
        let temp = tempdir().unwrap();
        assert_eq!(count_matching(&temp.path().join("absent"), ".htm"), 0);
    }

    #[test]
    fn empty_glob_is_not_an_error() {
        let temp = tempdir().unwrap();
        let pattern = format!("{}/absent/*/*.htm", temp.path().display());
        assert_eq!(list_paths(&pattern), Vec::<std::path::PathBuf>::new());
    }

    #[test]
    fn lists_fixed_depth_matches() {
        let temp = tempdir().unwrap();
        let components = temp.path().join("plugins/acme/blog/components/postlist");
        fs::create_dir_all(&components).unwrap();
        fs::write(components.join("default.htm"), b"").unwrap();
        fs::write(components.join("compact.htm"), b"").unwrap();
        // Wrong depth, must not match the fixed-shape pattern.
        fs::write(
            temp.path().join("plugins/acme/blog/components/loose.htm"),
            b"",
        )
        .unwrap();

        let pattern = format!(
            "{}/plugins/*/*/components/*/*.htm",
            temp.path().display()
        );
        let found = list_paths(&pattern);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| p.to_string_lossy().contains("postlist")));
    }

    #[test]
    fn invalid_pattern_yields_empty() {
        assert_eq!(list_paths("[not-a-pattern"), Vec::<std::path::PathBuf>::new());
    }
}
