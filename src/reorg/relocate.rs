//! Move phase: relocate classified files into their destination
//! subdirectories.
//!
//! Moves run sequentially after all rewriting has completed. The first
//! failure aborts the run; files moved before that point stay moved.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use super::scan::Buckets;
use crate::config::Layout;
use crate::log;

/// Fatal move-phase errors.
#[derive(Debug, Error)]
pub enum RelocateError {
    #[error("source `{0}` no longer exists")]
    MissingSource(PathBuf),

    #[error("failed to move `{from}` to `{to}`")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Move compiled assets into the assets subdirectory and static assets
/// into the static subdirectory, preserving filenames.
///
/// Returns the destinations moved so far. On error, the returned list is
/// lost to the caller but the filesystem keeps every completed move — no
/// rollback.
pub fn relocate_all(layout: &Layout, buckets: &Buckets) -> Result<Vec<PathBuf>, RelocateError> {
    let mut moved = Vec::with_capacity(buckets.len());

    let assets_path = layout.assets_path();
    for name in buckets.compiled_assets() {
        moved.push(relocate_one(layout, name, assets_path.join(name))?);
    }

    let static_path = layout.static_path();
    for name in &buckets.statics {
        moved.push(relocate_one(layout, name, static_path.join(name))?);
    }

    Ok(moved)
}

/// Move one file from the build root to its destination.
fn relocate_one(layout: &Layout, name: &str, to: PathBuf) -> Result<PathBuf, RelocateError> {
    let from = layout.file_path(name);
    if !from.exists() {
        return Err(RelocateError::MissingSource(from));
    }

    fs::rename(&from, &to).map_err(|source| RelocateError::Rename {
        from,
        to: to.clone(),
        source,
    })?;

    log!("move"; "{} -> {}", name, to.display());
    Ok(to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reorg::scan::scan_build_dir;
    use tempfile::TempDir;

    fn populated_layout(dir: &TempDir, names: &[&str]) -> (Layout, Buckets) {
        for name in names {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        let layout = Layout::rooted_at(dir.path());
        layout.ensure_dirs().unwrap();
        let buckets = scan_build_dir(dir.path()).unwrap();
        (layout, buckets)
    }

    #[test]
    fn test_relocate_all_moves_by_kind() {
        let dir = TempDir::new().unwrap();
        let (layout, buckets) = populated_layout(
            &dir,
            &["index.html", "main.js", "main.js.map", "style.css", "logo.png"],
        );

        let moved = relocate_all(&layout, &buckets).unwrap();

        assert_eq!(moved.len(), 4);
        assert!(dir.path().join("css/style.css").exists());
        assert!(dir.path().join("css/main.js").exists());
        assert!(dir.path().join("css/main.js.map").exists());
        assert!(dir.path().join("images/logo.png").exists());
        // Markup stays at the build root.
        assert!(dir.path().join("index.html").exists());
        assert!(!dir.path().join("main.js").exists());
    }

    #[test]
    fn test_relocate_missing_source_is_fatal() {
        let dir = TempDir::new().unwrap();
        let (layout, buckets) = populated_layout(&dir, &["main.js"]);
        fs::remove_file(dir.path().join("main.js")).unwrap();

        let err = relocate_all(&layout, &buckets).unwrap_err();
        assert!(matches!(err, RelocateError::MissingSource(_)));
    }

    #[test]
    fn test_relocate_missing_target_dir_keeps_earlier_moves() {
        let dir = TempDir::new().unwrap();
        let (layout, buckets) = populated_layout(&dir, &["style.css", "logo.png"]);
        // Destination removed between setup and the move phase.
        fs::remove_dir(layout.static_path()).unwrap();

        let err = relocate_all(&layout, &buckets).unwrap_err();

        assert!(matches!(err, RelocateError::Rename { .. }));
        // The compiled asset moved before the failure stays relocated.
        assert!(dir.path().join("css/style.css").exists());
        assert!(dir.path().join("logo.png").exists());
    }
}
