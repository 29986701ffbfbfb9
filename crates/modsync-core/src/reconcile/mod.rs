//! Reconciliation: which remote files are missing or stale locally.

mod index;
mod pending;

pub use index::LocalIndex;
pub use pending::pending_downloads;

use crate::error::Result;
use std::path::Path;

/// Indexes `mods_dir` (creating it and renaming tagged files as needed), then
/// returns the remote entries that still have to be downloaded, in listing order.
///
/// Each pending entry is printed as it is found.
pub fn reconcile(mods_dir: &Path, remote: &[String]) -> Result<Vec<String>> {
    let index = LocalIndex::scan(mods_dir)?;
    tracing::debug!(local = index.len(), remote = remote.len(), "reconciling");

    let pending = pending_downloads(&index, remote);
    for name in &pending {
        println!("{}", name);
    }
    Ok(pending)
}
