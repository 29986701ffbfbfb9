//! `modsync check` – show pending downloads without fetching them.

use anyhow::Result;
use modsync_core::sync;
use modsync_core::SyncContext;

pub fn run_check(ctx: &SyncContext) -> Result<()> {
    let report = sync::check(ctx);
    println!();
    if report.listing_error.is_some() || report.reconcile_error.is_some() {
        println!("Check incomplete; see errors above.");
    } else if report.pending.is_empty() {
        println!("All {} mod(s) are up to date.", report.remote_count);
    } else {
        println!(
            "{} of {} mod(s) need downloading.",
            report.pending.len(),
            report.remote_count
        );
    }
    println!();
    Ok(())
}
