//! HTTP GET layer over the curl crate (libcurl).
//!
//! Collects status, response headers, and body. The body either lands in
//! memory (listing fetch) or streams into a caller-provided sink (download
//! tests). Runs in the current thread.

mod headers;

pub use headers::ResponseMeta;

use crate::retry::FetchError;
use anyhow::Context;
use std::io::Write;
use std::str;
use std::time::Duration;

/// Connect/total timeouts applied to every request.
#[derive(Debug, Clone, Copy)]
pub struct Timeouts {
    pub connect: Duration,
    pub request: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(5),
            request: Duration::from_secs(120),
        }
    }
}

/// A buffered GET response.
#[derive(Debug)]
pub struct Response {
    pub status: u32,
    pub meta: ResponseMeta,
    pub body: Vec<u8>,
}

/// Joins a path (e.g. `/files` or a listed download URL) onto the server base URL.
///
/// Non-ASCII and reserved characters in `path` are percent-encoded by the URL
/// parser, which is what the server under test expects for special filenames.
pub fn join_url(base: &str, path: &str) -> anyhow::Result<url::Url> {
    let base = url::Url::parse(base).with_context(|| format!("invalid server URL {base:?}"))?;
    base.join(path)
        .with_context(|| format!("cannot join {path:?} onto {base}"))
}

/// Performs a GET and buffers the whole body in memory.
pub fn get(url: &str, timeouts: Timeouts) -> Result<Response, FetchError> {
    let mut body = Vec::new();
    let (status, meta) = get_to_sink(url, timeouts, &mut body)?;
    Ok(Response { status, meta, body })
}

/// Performs a GET, streaming the body into `sink`.
///
/// Returns the HTTP status and parsed headers. A sink write failure aborts
/// the transfer and surfaces as `FetchError::Storage`.
pub fn get_to_sink<W: Write>(
    url: &str,
    timeouts: Timeouts,
    sink: &mut W,
) -> Result<(u32, ResponseMeta), FetchError> {
    let mut header_lines: Vec<String> = Vec::new();
    let mut write_error: Option<std::io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(timeouts.connect)?;
    easy.timeout(timeouts.request)?;

    let performed = {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                header_lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| match sink.write_all(data) {
            Ok(()) => Ok(data.len()),
            Err(e) => {
                write_error = Some(e);
                Ok(0) // abort transfer
            }
        })?;
        transfer.perform()
    };

    if let Some(e) = write_error {
        return Err(FetchError::Storage(e));
    }
    if let Err(e) = performed {
        if e.is_partial_file() {
            let meta = headers::parse_headers(&header_lines);
            if let Some(expected) = meta.content_length {
                return Err(FetchError::Truncated { expected });
            }
        }
        return Err(e.into());
    }

    let status = easy.response_code()?;
    Ok((status, headers::parse_headers(&header_lines)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_plain_path() {
        let u = join_url("http://localhost:8080", "/files").unwrap();
        assert_eq!(u.as_str(), "http://localhost:8080/files");
    }

    #[test]
    fn join_url_encodes_spaces_and_cjk() {
        let u = join_url("http://localhost:8080", "/download/file with spaces.txt").unwrap();
        assert_eq!(
            u.as_str(),
            "http://localhost:8080/download/file%20with%20spaces.txt"
        );

        let u = join_url("http://localhost:8080", "/download/中文.txt").unwrap();
        assert_eq!(
            u.as_str(),
            "http://localhost:8080/download/%E4%B8%AD%E6%96%87.txt"
        );
    }

    #[test]
    fn join_url_rejects_bad_base() {
        assert!(join_url("not a url", "/files").is_err());
    }
}
