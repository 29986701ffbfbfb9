//! Minimal HTTP/1.1 mod server for integration tests.
//!
//! Serves a listing page at `/mods` and registered files at `/mods/<name>`.
//! Files can be served without `Content-Length` or cut off mid-body to
//! simulate a dropped connection.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Serve {
    /// 200 with `Content-Length` and the full body.
    Full,
    /// 200 without `Content-Length`; body ends when the connection closes.
    NoLength,
    /// Announces the full `Content-Length` but closes after half the body.
    Truncated,
}

#[derive(Debug, Clone, Default)]
pub struct ModServer {
    listing: String,
    files: HashMap<String, (Vec<u8>, Serve)>,
}

impl ModServer {
    pub fn new(listing: impl Into<String>) -> Self {
        Self {
            listing: listing.into(),
            files: HashMap::new(),
        }
    }

    pub fn file(mut self, name: &str, body: Vec<u8>, serve: Serve) -> Self {
        self.files.insert(name.to_string(), (body, serve));
        self
    }

    /// Starts the server in a background thread. Returns the host (e.g.
    /// "127.0.0.1:12345"). The server runs until the process exits.
    pub fn start(self) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let server = Arc::new(self);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let server = Arc::clone(&server);
                thread::spawn(move || server.handle(stream));
            }
        });
        format!("127.0.0.1:{}", port)
    }

    fn handle(&self, mut stream: std::net::TcpStream) {
        let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
        let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
        let mut buf = [0u8; 8192];
        let n = match stream.read(&mut buf) {
            Ok(0) => return,
            Ok(n) => n,
            Err(_) => return,
        };
        let request = match std::str::from_utf8(&buf[..n]) {
            Ok(s) => s,
            Err(_) => return,
        };
        let path = request
            .lines()
            .next()
            .and_then(|line| line.split_whitespace().nth(1))
            .unwrap_or("");

        if path == "/mods" {
            let _ = write_response(&mut stream, "200 OK", Some(self.listing.len()), self.listing.as_bytes());
            return;
        }
        let Some((body, serve)) = path.strip_prefix("/mods/").and_then(|name| self.files.get(name)) else {
            let _ = write_response(&mut stream, "404 Not Found", Some(9), b"not found");
            return;
        };
        let _ = match serve {
            Serve::Full => write_response(&mut stream, "200 OK", Some(body.len()), body),
            Serve::NoLength => write_response(&mut stream, "200 OK", None, body),
            Serve::Truncated => {
                write_response(&mut stream, "200 OK", Some(body.len()), &body[..body.len() / 2])
            }
        };
    }
}

fn write_response(
    stream: &mut std::net::TcpStream,
    status: &str,
    content_length: Option<usize>,
    body: &[u8],
) -> std::io::Result<()> {
    let length = content_length
        .map(|n| format!("Content-Length: {}\r\n", n))
        .unwrap_or_default();
    let head = format!(
        "HTTP/1.1 {}\r\n{}Connection: close\r\n\r\n",
        status, length
    );
    stream.write_all(head.as_bytes())?;
    stream.write_all(body)?;
    stream.flush()
}

/// Listing page in the server's template: a header row, one row per name,
/// and trailing markup.
pub fn listing_page(names: &[&str]) -> String {
    let mut page = String::from(
        "<html><body><h1>Index of /mods</h1><table>\n<tr><th>Name</th><th>Size</th><th>Date</th></tr>\n",
    );
    for name in names {
        page.push_str(&format!(
            "<tr><td><a href=\"/mods/{0}\"><tt>{0}</tt></a></td><td>1 KB</td><td>2024-01-01</td></tr>\n",
            name
        ));
    }
    page.push_str("</table></body></html>\n");
    page
}

/// A host with nothing listening on it.
pub fn dead_host() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("127.0.0.1:{}", port)
}

pub fn body(len: usize) -> Vec<u8> {
    (0u8..251).cycle().take(len).collect()
}
