//! Error type shared by every sync phase.

use std::io;
use std::path::{Path, PathBuf};

/// Error returned by a sync phase (listing fetch, reconcile, or one download).
///
/// Phases return this instead of aborting; the orchestrator logs it and moves on.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Curl reported an error (DNS, connection refused, connection dropped, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
    /// Host string does not form a valid `http://<host>/mods` URL.
    #[error("invalid host: {0:?}")]
    InvalidHost(String),
    /// Target filename derived from a URL cannot be used as a local file.
    #[error("invalid file name: {0:?}")]
    InvalidFileName(String),
    /// Directory creation, listing, rename, create, or write failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SyncError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        SyncError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// True for transport-level failures (curl or HTTP status).
    pub fn is_network(&self) -> bool {
        matches!(self, SyncError::Curl(_) | SyncError::Http { .. })
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
