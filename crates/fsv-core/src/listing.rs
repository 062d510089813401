//! File inventory endpoint: GET /files returns a JSON listing.

use crate::http::{self, Timeouts};
use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// One entry in the server's file inventory.
#[derive(Debug, Clone, Deserialize)]
pub struct FileEntry {
    pub filename: String,
    pub size: u64,
    #[serde(default)]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Server-relative download path, e.g. `/download/report.txt`.
    pub download_url: String,
}

#[derive(Debug, Deserialize)]
struct ListingResponse {
    status: String,
    #[serde(default)]
    files: Vec<FileEntry>,
}

/// Fetches and parses the file inventory from `{server_url}/files`.
pub fn fetch_listing(server_url: &str, timeouts: Timeouts) -> Result<Vec<FileEntry>> {
    let url = http::join_url(server_url, "/files")?;
    let resp = http::get(url.as_str(), timeouts)
        .with_context(|| format!("GET {url} failed"))?;
    if resp.status != 200 {
        bail!("listing request returned HTTP {}", resp.status);
    }

    let parsed: ListingResponse =
        serde_json::from_slice(&resp.body).context("listing body is not valid JSON")?;
    if parsed.status != "success" {
        bail!("listing reported status {:?}", parsed.status);
    }

    tracing::info!(count = parsed.files.len(), "fetched file listing");
    Ok(parsed.files)
}
