//! Fixed directory layout for the reorganization run.
//!
//! The three directory names are compile-time constants; there is no
//! runtime override mechanism.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Build output directory produced by the prior build step.
pub const BASE_DIR: &str = "build";

/// Subdirectory receiving static assets (images and other files).
pub const STATIC_DIR: &str = "images";

/// Subdirectory receiving compiled assets (stylesheets, scripts, source maps).
pub const ASSETS_DIR: &str = "css";

/// Resolved directory layout for one run.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Build output directory.
    pub base: PathBuf,
    /// Static-assets subdirectory name.
    pub static_dir: String,
    /// Combined-assets subdirectory name.
    pub assets_dir: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            base: PathBuf::from(BASE_DIR),
            static_dir: STATIC_DIR.to_string(),
            assets_dir: ASSETS_DIR.to_string(),
        }
    }
}

impl Layout {
    /// Layout rooted at an arbitrary build directory (used by tests).
    pub fn rooted_at(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            ..Self::default()
        }
    }

    /// Full path of the static-assets subdirectory.
    pub fn static_path(&self) -> PathBuf {
        self.base.join(&self.static_dir)
    }

    /// Full path of the combined-assets subdirectory.
    pub fn assets_path(&self) -> PathBuf {
        self.base.join(&self.assets_dir)
    }

    /// Full path of a file at the build directory root.
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.base.join(name)
    }

    /// Create both destination subdirectories if missing.
    ///
    /// Idempotent: existing directories are left untouched.
    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [self.static_path(), self.assets_path()] {
            fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create `{}`", dir.display()))?;
        }
        Ok(())
    }
}

/// Check that the build directory exists before touching it.
pub fn check_base_dir(base: &Path) -> Result<()> {
    if !base.is_dir() {
        anyhow::bail!("build directory `{}` not found", base.display());
    }
    Ok(())
}
