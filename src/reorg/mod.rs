//! Build output reorganization pipeline.
//!
//! Linear, single-threaded: Setup -> Classification -> Reference
//! rewriting -> Move. Rewriting fully completes before any move, since
//! moves change the paths rewriting depends on.

mod kind;
mod relocate;
mod rewrite;
mod scan;

pub use kind::AssetKind;
pub use relocate::RelocateError;
pub use scan::Buckets;

use anyhow::Result;

use crate::config::{self, Layout};
use crate::log;

/// Run one reorganization pass over the build directory.
pub fn reorganize(layout: &Layout) -> Result<()> {
    config::check_base_dir(&layout.base)?;
    layout.ensure_dirs()?;

    let buckets = scan::scan_build_dir(&layout.base)?;
    for (name, files) in buckets.summary() {
        log!("scan"; "{}: {}", name, files.join(", "));
    }
    if buckets.is_empty() {
        log!("scan"; "nothing to reorganize");
        return Ok(());
    }

    rewrite::rewrite_references(layout, &buckets)?;

    let moved = relocate::relocate_all(layout, &buckets)?;
    log!("move"; "relocated {} file{}",
        moved.len(), if moved.len() == 1 { "" } else { "s" });
    Ok(())
}
