//! `modsync sync` – download every missing or outdated mod.

use anyhow::Result;
use modsync_core::sync;
use modsync_core::{SyncContext, SyncReport};

pub fn run_sync(ctx: &SyncContext) -> Result<()> {
    let report = sync::run_sync(ctx);
    print!("{}", summary(&report));
    println!();
    Ok(())
}

/// Closing lines for a sync run.
fn summary(report: &SyncReport) -> String {
    if report.listing_error.is_some() || report.reconcile_error.is_some() {
        return "Sync incomplete; see errors above.\n".to_string();
    }
    if report.pending.is_empty() {
        return "All mods are up to date.\n".to_string();
    }
    let mut lines = format!(
        "Sync complete: {} downloaded, {} failed.\n",
        report.downloaded.len(),
        report.failed.len()
    );
    for (name, err) in &report.failed {
        lines.push_str(&format!("  {}: {}\n", name, err));
    }
    lines
}
