//! URL modeling for the mod server.
//!
//! The server exposes its listing at `http://<host>/mods` and each file at
//! `http://<host>/mods/<file>`. Local filenames are derived back from the last
//! path segment.

mod path;

pub use path::{filename_from_url, is_usable_filename};

use crate::error::{Result, SyncError};

/// Path of the listing page on the server.
const LISTING_PATH: &str = "/mods";

/// Builds `http://<host>/mods`, rejecting hosts that would not land on that path.
///
/// `host` may carry a port (`mods.example.net:8080`).
pub fn listing_url(host: &str) -> Result<String> {
    Ok(parse_listing_url(host)?.into())
}

/// Builds `http://<host>/mods/<file>` with `file` encoded as a single path segment.
pub fn file_url(host: &str, file: &str) -> Result<String> {
    let mut url = parse_listing_url(host)?;
    url.path_segments_mut()
        .map_err(|_| SyncError::InvalidHost(host.to_string()))?
        .push(file);
    Ok(url.into())
}

fn parse_listing_url(host: &str) -> Result<url::Url> {
    let host = host.trim();
    let invalid = || SyncError::InvalidHost(host.to_string());
    if host.is_empty() {
        return Err(invalid());
    }
    let url = url::Url::parse(&format!("http://{}{}", host, LISTING_PATH)).map_err(|_| invalid())?;
    if url.path() != LISTING_PATH || url.query().is_some() || url.fragment().is_some() {
        return Err(invalid());
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_url_with_port() {
        assert_eq!(
            listing_url("127.0.0.1:8080").unwrap(),
            "http://127.0.0.1:8080/mods"
        );
        assert_eq!(listing_url(" mods.example.net ").unwrap(), "http://mods.example.net/mods");
    }

    #[test]
    fn listing_url_rejects_bad_hosts() {
        for host in ["", "   ", "a/b", "a b", "host?x=1", "host#frag"] {
            assert!(
                matches!(listing_url(host), Err(SyncError::InvalidHost(_))),
                "host {host:?} should be rejected"
            );
        }
    }

    #[test]
    fn file_url_appends_segment() {
        assert_eq!(
            file_url("127.0.0.1:8080", "jei-1.20.1.jar").unwrap(),
            "http://127.0.0.1:8080/mods/jei-1.20.1.jar"
        );
    }

    #[test]
    fn file_url_encodes_and_filename_decodes() {
        let name = "[Forge]iron chests-1.0.jar";
        let url = file_url("h:1", name).unwrap();
        assert!(url.contains("iron%20chests"));
        assert_eq!(filename_from_url(&url), name);
    }
}
