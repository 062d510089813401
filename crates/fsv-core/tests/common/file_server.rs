//! Minimal HTTP/1.1 file server for integration tests.
//!
//! Mimics the endpoint under test: `GET /files` returns a JSON inventory and
//! `GET /download/<percent-encoded-name>` serves a body with an attachment
//! Content-Disposition carrying a percent-encoded filename.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

use fsv_core::filename::percent_decode_bytes;

#[derive(Debug, Clone, Copy)]
pub struct FileServerOptions {
    /// Percent-encode UTF-8 filenames in Content-Disposition (the behavior
    /// the harness recovers from). When false, the raw name is sent.
    pub encode_disposition: bool,
    /// Inflate the declared Content-Length by this many bytes to force size
    /// mismatches in the harness.
    pub content_length_slack: u64,
}

impl Default for FileServerOptions {
    fn default() -> Self {
        Self {
            encode_disposition: true,
            content_length_slack: 0,
        }
    }
}

/// Starts a server in a background thread serving `files` (name, body).
/// Returns the base URL, e.g. "http://127.0.0.1:12345". The server runs
/// until the process exits.
pub fn start(files: Vec<(String, Vec<u8>)>) -> String {
    start_with_options(files, FileServerOptions::default())
}

pub fn start_with_options(files: Vec<(String, Vec<u8>)>, opts: FileServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let files = Arc::new(files);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let files = Arc::clone(&files);
            thread::spawn(move || handle(stream, &files, opts));
        }
    });
    format!("http://127.0.0.1:{port}")
}

fn handle(mut stream: std::net::TcpStream, files: &[(String, Vec<u8>)], opts: FileServerOptions) {
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
    let (method, target) = parse_request_line(request);
    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\n\r\n");
        return;
    }

    if target == "/files" {
        let body = listing_json(files);
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json; charset=utf-8\r\nContent-Length: {}\r\n\r\n",
            body.len()
        );
        let _ = stream.write_all(response.as_bytes());
        let _ = stream.write_all(body.as_bytes());
        return;
    }

    if let Some(encoded) = target.strip_prefix("/download/") {
        let name = String::from_utf8_lossy(&percent_decode_bytes(encoded)).into_owned();
        if let Some((_, body)) = files.iter().find(|(n, _)| *n == name) {
            let disposition = if opts.encode_disposition {
                percent_encode_utf8(&name)
            } else {
                name.clone()
            };
            let declared = body.len() as u64 + opts.content_length_slack;
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: {declared}\r\nContent-Disposition: attachment; filename=\"{disposition}\"\r\n\r\n",
            );
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.write_all(body);
            return;
        }
        let _ = stream.write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n");
        return;
    }

    let _ = stream.write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n");
}

fn parse_request_line(request: &str) -> (&str, &str) {
    let line = request.lines().next().unwrap_or("");
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("");
    (method, target)
}

fn listing_json(files: &[(String, Vec<u8>)]) -> String {
    let entries: Vec<serde_json::Value> = files
        .iter()
        .map(|(name, body)| {
            serde_json::json!({
                "filename": name,
                "size": body.len(),
                "mime_type": "application/octet-stream",
                "download_url": format!("/download/{}", percent_encode_utf8(name)),
            })
        })
        .collect();
    serde_json::json!({
        "status": "success",
        "count": entries.len(),
        "files": entries,
    })
    .to_string()
}

/// Percent-encodes everything but unreserved ASCII, from the name's UTF-8
/// bytes (what the server under test does for Content-Disposition).
pub fn percent_encode_utf8(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for &b in name.as_bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'_' | b'~') {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{b:02X}"));
        }
    }
    out
}
