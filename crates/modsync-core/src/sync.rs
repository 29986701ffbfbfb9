//! Sync run: fetch listing, reconcile, download what is pending.
//!
//! Each phase reports its own failure and the run carries on with whatever it
//! has; the worst case is a report with nothing synced.

use crate::downloader;
use crate::error::{Result, SyncError};
use crate::http::HttpOptions;
use crate::listing::{self, HtmlTableParser, ListingParser};
use crate::reconcile;
use crate::url_model;
use std::path::PathBuf;

/// Everything the core needs for one run.
#[derive(Debug, Clone)]
pub struct SyncContext {
    /// Mod server as `host[:port]`.
    pub host: String,
    /// Local mods directory.
    pub mods_dir: PathBuf,
    pub http: HttpOptions,
}

impl SyncContext {
    pub fn new(host: impl Into<String>, mods_dir: impl Into<PathBuf>) -> Self {
        Self {
            host: host.into(),
            mods_dir: mods_dir.into(),
            http: HttpOptions::default(),
        }
    }

    pub fn with_http(mut self, http: HttpOptions) -> Self {
        self.http = http;
        self
    }
}

/// Outcome of one sync run.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Entries parsed from the remote listing.
    pub remote_count: usize,
    /// Entries that needed downloading, in listing order.
    pub pending: Vec<String>,
    /// Entries downloaded successfully.
    pub downloaded: Vec<String>,
    /// Entries whose download failed, with the error.
    pub failed: Vec<(String, SyncError)>,
    pub listing_error: Option<SyncError>,
    pub reconcile_error: Option<SyncError>,
}

impl SyncReport {
    /// True when no phase and no download failed.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty() && self.listing_error.is_none() && self.reconcile_error.is_none()
    }
}

/// Fetches the remote listing with the default table parser.
pub fn fetch_remote(ctx: &SyncContext) -> Result<Vec<String>> {
    listing::fetch_listing(&ctx.host, &ctx.http, &HtmlTableParser)
}

/// Fetches the listing and reconciles it, without downloading.
pub fn check(ctx: &SyncContext) -> SyncReport {
    check_with(ctx, &HtmlTableParser)
}

/// Full run: listing, reconcile, then one download at a time in listing order.
pub fn run_sync(ctx: &SyncContext) -> SyncReport {
    run_sync_with(ctx, &HtmlTableParser)
}

/// Like [`run_sync`] with a custom listing parser.
pub fn run_sync_with(ctx: &SyncContext, parser: &dyn ListingParser) -> SyncReport {
    let mut report = check_with(ctx, parser);
    if !report.pending.is_empty() {
        println!();
        println!("Syncing {} mod(s)", report.pending.len());
        println!();
    }

    let pending = std::mem::take(&mut report.pending);
    for name in &pending {
        let result = url_model::file_url(&ctx.host, name)
            .and_then(|url| downloader::download_file(&url, &ctx.mods_dir, &ctx.http));
        match result {
            Ok(_) => report.downloaded.push(name.clone()),
            Err(e) => {
                println!("Error occurred, {}", e);
                tracing::error!(file = %name, "download failed: {}", e);
                report.failed.push((name.clone(), e));
            }
        }
        println!();
    }
    report.pending = pending;

    tracing::info!(
        pending = report.pending.len(),
        downloaded = report.downloaded.len(),
        failed = report.failed.len(),
        "sync finished"
    );
    report
}

fn check_with(ctx: &SyncContext, parser: &dyn ListingParser) -> SyncReport {
    let mut report = SyncReport::default();

    println!("Fetching mod list from {}", ctx.host);
    let remote = match listing::fetch_listing(&ctx.host, &ctx.http, parser) {
        Ok(remote) => remote,
        Err(e) => {
            println!("Error occurred, {}", e);
            tracing::error!(host = %ctx.host, "listing fetch failed: {}", e);
            report.listing_error = Some(e);
            Vec::new()
        }
    };
    report.remote_count = remote.len();

    match reconcile::reconcile(&ctx.mods_dir, &remote) {
        Ok(pending) => report.pending = pending,
        Err(e) => {
            println!("Error occurred, {}", e);
            tracing::error!(dir = %ctx.mods_dir.display(), "reconcile failed: {}", e);
            report.reconcile_error = Some(e);
        }
    }
    report
}
