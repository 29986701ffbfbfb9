//! Diff of the remote listing against the local index.

use super::LocalIndex;
use crate::identity::package_name;

/// Remote entries with no indexed file for their package, or whose indexed
/// file name is not an exact match. Order follows `remote`.
///
/// Stale local versions are left alone; only the remote name is queued.
pub fn pending_downloads(index: &LocalIndex, remote: &[String]) -> Vec<String> {
    remote
        .iter()
        .filter(|entry| index.get(package_name(entry)) != Some(entry.as_str()))
        .cloned()
        .collect()
}
