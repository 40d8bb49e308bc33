//! Build directory scanning (pure over one directory listing).

use std::path::Path;

use anyhow::{Context, Result};

use super::AssetKind;

/// Classified contents of the build directory root.
///
/// Collected in one non-recursive pass; every entry name lands in at most
/// one bucket. Entries without an extension are ignored.
#[derive(Debug, Default)]
pub struct Buckets {
    pub markup: Vec<String>,
    pub scripts: Vec<String>,
    pub maps: Vec<String>,
    pub stylesheets: Vec<String>,
    pub statics: Vec<String>,
}

impl Buckets {
    /// Classify one entry name into its bucket.
    fn push(&mut self, name: String) {
        match AssetKind::from_name(&name) {
            Some(AssetKind::Markup) => self.markup.push(name),
            Some(AssetKind::Script) => self.scripts.push(name),
            Some(AssetKind::SourceMap) => self.maps.push(name),
            Some(AssetKind::Stylesheet) => self.stylesheets.push(name),
            Some(AssetKind::Static) => self.statics.push(name),
            None => {}
        }
    }

    /// All compiled assets: stylesheets, then scripts, then source maps.
    ///
    /// This order is also the move order for the combined assets directory.
    pub fn compiled_assets(&self) -> Vec<&str> {
        self.stylesheets
            .iter()
            .chain(self.scripts.iter())
            .chain(self.maps.iter())
            .map(String::as_str)
            .collect()
    }

    /// Total number of classified entries.
    pub fn len(&self) -> usize {
        self.markup.len()
            + self.scripts.len()
            + self.maps.len()
            + self.stylesheets.len()
            + self.statics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Non-empty buckets with their display names, for diagnostics.
    pub fn summary(&self) -> Vec<(&'static str, &[String])> {
        [
            (AssetKind::Markup.name(), self.markup.as_slice()),
            (AssetKind::Script.name(), self.scripts.as_slice()),
            (AssetKind::SourceMap.name(), self.maps.as_slice()),
            (AssetKind::Stylesheet.name(), self.stylesheets.as_slice()),
            (AssetKind::Static.name(), self.statics.as_slice()),
        ]
        .into_iter()
        .filter(|(_, names)| !names.is_empty())
        .collect()
    }
}

/// List the build directory root (non-recursive) and classify every entry.
///
/// The listing is read once and sorted by name so later stages behave
/// deterministically. Entry names that cannot be represented as UTF-8 are
/// skipped: they cannot appear as a textual reference in any file.
pub fn scan_build_dir(base: &Path) -> Result<Buckets> {
    let entries = std::fs::read_dir(base)
        .with_context(|| format!("failed to read build directory `{}`", base.display()))?;

    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter_map(|e| e.file_name().into_string().ok())
        .collect();
    names.sort_unstable();

    let mut buckets = Buckets::default();
    for name in names {
        buckets.push(name);
    }
    Ok(buckets)
}
