pub mod config;
pub mod downloader;
pub mod error;
pub mod http;
pub mod identity;
pub mod listing;
pub mod logging;
pub mod reconcile;
pub mod sync;
pub mod url_model;

pub use error::{Result, SyncError};
pub use sync::{run_sync, SyncContext, SyncReport};
