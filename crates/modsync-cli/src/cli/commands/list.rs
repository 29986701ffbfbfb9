//! `modsync list` – print the server's mod listing.

use anyhow::Result;
use modsync_core::identity::package_name;
use modsync_core::sync;
use modsync_core::SyncContext;

pub fn run_list(ctx: &SyncContext) -> Result<()> {
    match sync::fetch_remote(ctx) {
        Ok(entries) if entries.is_empty() => println!("Server lists no mods."),
        Ok(entries) => {
            println!("{:<32} {}", "PACKAGE", "FILE");
            for entry in &entries {
                println!("{:<32} {}", package_name(entry), entry);
            }
        }
        Err(e) => {
            println!("Error occurred, {}", e);
            tracing::error!(host = %ctx.host, "listing fetch failed: {}", e);
        }
    }
    println!();
    Ok(())
}
