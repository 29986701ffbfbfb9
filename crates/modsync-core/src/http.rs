//! Blocking HTTP GET helpers built on the curl crate (libcurl).

use crate::error::{Result, SyncError};
use std::time::Duration;

/// Options applied to every curl handle the sync creates.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpOptions {
    /// Connect-phase timeout. `None` leaves libcurl's default; the transfer itself is never timed out.
    pub connect_timeout: Option<Duration>,
}

impl HttpOptions {
    /// New curl handle for `url` with redirects followed and options applied.
    pub(crate) fn easy(&self, url: &str) -> Result<curl::easy::Easy> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        if let Some(timeout) = self.connect_timeout {
            easy.connect_timeout(timeout)?;
        }
        Ok(easy)
    }
}

/// GETs `url` and returns the whole body as text (invalid UTF-8 replaced).
pub fn get_text(url: &str, opts: &HttpOptions) -> Result<String> {
    let mut body: Vec<u8> = Vec::new();
    let mut easy = opts.easy(url)?;
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    check_status(&mut easy, url)?;
    tracing::debug!(url, bytes = body.len(), "fetched page");
    Ok(String::from_utf8_lossy(&body).into_owned())
}

/// Fails with `SyncError::Http` unless the final response code is 2xx.
pub(crate) fn check_status(easy: &mut curl::easy::Easy, url: &str) -> Result<()> {
    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(SyncError::Http {
            url: url.to_string(),
            code,
        });
    }
    Ok(())
}

/// Parses a `Content-Length` value out of one raw header line.
///
/// Returns `None` for other headers, `Some(Err(value))` when the value is not a number.
pub(crate) fn content_length_header(line: &str) -> Option<std::result::Result<u64, String>> {
    let (name, value) = line.trim().split_once(':')?;
    if !name.trim().eq_ignore_ascii_case("content-length") {
        return None;
    }
    let value = value.trim();
    Some(value.parse::<u64>().map_err(|_| value.to_string()))
}
