//! Reference rewriting inside markup, script, and stylesheet files.
//!
//! Runs before any file moves, against the original names at the build
//! root. Each target file gets one replacement plan applied in a single
//! read-modify-write pass.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::{NoExpand, Regex};

use super::scan::Buckets;
use crate::config::Layout;
use crate::{debug, log};

/// One literal-name replacement inside a file's text.
///
/// The match pattern is compiled once at plan construction; a plan shared
/// across several files reuses it for every file.
struct Replacement {
    to: String,
    matcher: Matcher,
}

enum Matcher {
    /// Replace every occurrence (literal name, regex-escaped).
    Global(Regex),
    /// Replace only the first occurrence (plain substring).
    First(String),
}

impl Replacement {
    fn global(from: &str, to: String) -> Result<Self> {
        let regex = Regex::new(&regex::escape(from))
            .with_context(|| format!("invalid replacement pattern for `{from}`"))?;
        Ok(Self {
            to,
            matcher: Matcher::Global(regex),
        })
    }

    fn first(from: &str, to: String) -> Self {
        Self {
            to,
            matcher: Matcher::First(from.to_string()),
        }
    }

    fn apply(&self, content: &str) -> String {
        match &self.matcher {
            Matcher::Global(regex) => regex.replace_all(content, NoExpand(&self.to)).into_owned(),
            Matcher::First(from) => content.replacen(from.as_str(), &self.to, 1),
        }
    }
}

/// Rewrite all textual references in markup, script, and stylesheet files.
///
/// Per-file failures are logged and skipped; the run continues.
pub fn rewrite_references(layout: &Layout, buckets: &Buckets) -> Result<()> {
    rewrite_markup(layout, buckets)?;
    rewrite_scripts(layout, buckets);
    rewrite_stylesheets(layout, buckets)?;
    Ok(())
}

/// Markup files: static names become `<static-dir>/<name>`, compiled asset
/// names become `<assets-dir>/<name>` (all occurrences).
fn rewrite_markup(layout: &Layout, buckets: &Buckets) -> Result<()> {
    let mut plan = Vec::new();
    for name in &buckets.statics {
        plan.push(Replacement::global(
            name,
            format!("{}/{}", layout.static_dir, name),
        )?);
    }
    for name in buckets.compiled_assets() {
        plan.push(Replacement::global(
            name,
            format!("{}/{}", layout.assets_dir, name),
        )?);
    }
    for file in &buckets.markup {
        apply_plan(layout, file, &plan);
    }
    Ok(())
}

/// Script files: source-map names become `../<assets-dir>/<name>`.
///
/// Only the first occurrence of each name is replaced. Scripts end with a
/// single sourceMappingURL comment, so one match is the common case; if a
/// name repeats, later occurrences stay untouched.
fn rewrite_scripts(layout: &Layout, buckets: &Buckets) {
    let plan: Vec<_> = buckets
        .maps
        .iter()
        .map(|name| Replacement::first(name, format!("../{}/{}", layout.assets_dir, name)))
        .collect();
    for file in &buckets.scripts {
        apply_plan(layout, file, &plan);
    }
}

/// Stylesheet files: static names become `../<static-dir>/<name>` (all
/// occurrences).
fn rewrite_stylesheets(layout: &Layout, buckets: &Buckets) -> Result<()> {
    let plan = buckets
        .statics
        .iter()
        .map(|name| Replacement::global(name, format!("../{}/{}", layout.static_dir, name)))
        .collect::<Result<Vec<_>>>()?;
    for file in &buckets.stylesheets {
        apply_plan(layout, file, &plan);
    }
    Ok(())
}

/// Apply a plan to one file, logging the outcome. Errors are non-fatal.
fn apply_plan(layout: &Layout, file: &str, plan: &[Replacement]) {
    if plan.is_empty() {
        return;
    }
    match try_apply(&layout.file_path(file), plan) {
        Ok(true) => log!("rewrite"; "{}", file),
        Ok(false) => debug!("rewrite"; "{} unchanged", file),
        Err(e) => log!("error"; "rewrite skipped for {}: {:#}", file, e),
    }
}

/// Read, apply every replacement in order, write back if anything changed.
///
/// Returns whether the file content was modified.
fn try_apply(path: &Path, plan: &[Replacement]) -> Result<bool> {
    let original = fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;

    let mut content = original.clone();
    for replacement in plan {
        content = replacement.apply(&content);
    }

    if content == original {
        return Ok(false);
    }
    fs::write(path, &content).with_context(|| format!("failed to write `{}`", path.display()))?;
    Ok(true)
}
