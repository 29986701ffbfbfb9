//! Single-file streaming downloader.
//!
//! One GET per file, written chunk by chunk into the mods directory with an
//! in-place progress line. A failed transfer removes whatever was written so
//! the file shows up as pending again on the next run; a request that fails
//! before any body arrives leaves the directory as it was.

mod progress;

pub use progress::ProgressLine;

use crate::error::{Result, SyncError};
use crate::http::{self, HttpOptions};
use crate::url_model;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str;

/// Receive buffer size; libcurl hands the body over in chunks of at most this many bytes.
pub const CHUNK_SIZE: usize = 4096;

/// A completed download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    /// Local file name (last URL segment, decoded).
    pub file_name: String,
    /// Where the file was written.
    pub path: PathBuf,
    /// Body bytes written to `path`.
    pub bytes_written: u64,
    /// `Content-Length` of the response, if the server sent a usable one.
    pub expected_len: Option<u64>,
}

/// Downloads `url` into `dir`, printing progress to stdout.
pub fn download_file(url: &str, dir: &Path, opts: &HttpOptions) -> Result<DownloadOutcome> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    download_to(url, dir, opts, &mut out)
}

/// Downloads `url` into `dir`, writing progress lines to `out`.
///
/// The target name is the part of `url` after the last `/`. The destination is
/// only created (or truncated) once a 2xx response starts delivering its body;
/// an earlier failure leaves any existing file untouched. A failure after that
/// point removes the partially written file.
pub fn download_to(
    url: &str,
    dir: &Path,
    opts: &HttpOptions,
    out: &mut dyn Write,
) -> Result<DownloadOutcome> {
    let file_name = url_model::filename_from_url(url);
    if !url_model::is_usable_filename(&file_name) {
        return Err(SyncError::InvalidFileName(file_name));
    }
    let path = dir.join(&file_name);

    let _ = writeln!(out, "Start download {}", file_name);
    tracing::info!(url, path = %path.display(), "download started");

    let mut file: Option<File> = None;
    let streamed = opts.easy(url).and_then(|mut easy| {
        easy.buffer_size(CHUNK_SIZE)?;
        stream_body(&mut easy, url, &path, &mut file, &file_name, out)
    });
    let created = file.is_some();
    drop(file);

    // A 2xx response with an empty body never reaches the write callback.
    let streamed = streamed.and_then(|len| {
        if !created {
            File::create(&path).map_err(|e| SyncError::io(&path, e))?;
        }
        Ok(len)
    });

    match streamed {
        Ok((bytes_written, expected_len)) => {
            let total = expected_len.unwrap_or(bytes_written);
            let _ = writeln!(out, "\r{}", ProgressLine::finished(&file_name, total));
            let _ = writeln!(out, "Download finished {}", file_name);
            tracing::info!(path = %path.display(), bytes = bytes_written, "download finished");
            Ok(DownloadOutcome {
                file_name,
                path,
                bytes_written,
                expected_len,
            })
        }
        Err(e) => {
            let _ = writeln!(out);
            if created {
                match fs::remove_file(&path) {
                    Ok(()) => tracing::debug!(path = %path.display(), "removed partial file"),
                    Err(rm) if rm.kind() == io::ErrorKind::NotFound => {}
                    Err(rm) => tracing::warn!(path = %path.display(), "could not remove partial file: {}", rm),
                }
            }
            tracing::warn!(url, "download failed: {}", e);
            Err(e)
        }
    }
}

/// Runs the transfer, creating `path` into `file` on the first body chunk of a
/// 2xx response. Returns bytes written and the announced `Content-Length`.
fn stream_body(
    easy: &mut curl::easy::Easy,
    url: &str,
    path: &Path,
    file: &mut Option<File>,
    file_name: &str,
    out: &mut dyn Write,
) -> Result<(u64, Option<u64>)> {
    let status = std::cell::Cell::new(0u32);
    let expected = std::cell::Cell::new(None::<u64>);
    let mut written = 0u64;
    let mut write_error: Option<io::Error> = None;

    let performed = {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            let Ok(line) = str::from_utf8(data) else {
                return true;
            };
            if line.starts_with("HTTP/") {
                // New response (first one, or the target of a redirect).
                status.set(parse_status_code(line));
                expected.set(None);
            } else if let Some(len) = http::content_length_header(line) {
                match len {
                    Ok(n) => expected.set(Some(n)),
                    Err(value) => {
                        tracing::warn!(url, value = %value, "unparseable Content-Length; size unknown")
                    }
                }
            }
            true
        })?;
        transfer.write_function(|data| {
            if !(200..300).contains(&status.get()) {
                // Error page body: drain it, the status check below reports it.
                return Ok(data.len());
            }
            if file.is_none() {
                match File::create(path) {
                    Ok(f) => *file = Some(f),
                    Err(e) => {
                        write_error = Some(e);
                        return Ok(0); // abort transfer
                    }
                }
            }
            let Some(dest) = file.as_mut() else {
                return Ok(0);
            };
            if let Err(e) = dest.write_all(data) {
                write_error = Some(e);
                return Ok(0);
            }
            written += data.len() as u64;
            let _ = write!(out, "\r{}", ProgressLine::new(file_name, written, expected.get()));
            let _ = out.flush();
            Ok(data.len())
        })?;
        transfer.perform()
    };

    if let Some(e) = write_error {
        return Err(SyncError::io(path, e));
    }
    performed?;
    http::check_status(easy, url)?;
    if expected.get().is_none() {
        tracing::debug!(url, "no Content-Length in response");
    }
    Ok((written, expected.get()))
}

fn parse_status_code(status_line: &str) -> u32 {
    status_line
        .split_whitespace()
        .nth(1)
        .and_then(|code| code.parse().ok())
        .unwrap_or(0)
}
