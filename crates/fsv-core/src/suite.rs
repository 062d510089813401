//! Full validation suite: connect, list, download every file, probe
//! special-character names, summarize.

use crate::config::HarnessConfig;
use crate::download::{run_download_test, DownloadOptions};
use crate::filename;
use crate::http;
use crate::listing::{self, FileEntry};
use crate::report::{Summary, TestResult};
use crate::retry::{run_with_retry, FetchError, RetryPolicy};
use anyhow::{Context, Result};

/// Names exercised by the special-character probes: spaces, CJK, and
/// reserved-ish ASCII.
pub const SPECIAL_NAMES: &[&str] = &[
    "file with spaces.txt",
    "中文文件名.txt",
    "file@domain.com.txt",
];

/// Outcome of probing one special-character name.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeStatus {
    /// Server served the file; records whether the Content-Disposition
    /// filename survived the round trip.
    Served { name_preserved: bool },
    /// 404; the file simply is not on the server. Acceptable.
    NotFound,
    /// Any other HTTP status.
    HttpError(u32),
    /// The request itself failed.
    RequestFailed(String),
}

impl std::fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeStatus::Served {
                name_preserved: true,
            } => write!(f, "served, name preserved"),
            ProbeStatus::Served {
                name_preserved: false,
            } => write!(f, "served, name altered"),
            ProbeStatus::NotFound => write!(f, "absent (acceptable)"),
            ProbeStatus::HttpError(code) => write!(f, "HTTP {code}"),
            ProbeStatus::RequestFailed(e) => write!(f, "request failed: {e}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub name: String,
    pub status: ProbeStatus,
}

/// Everything a finished suite run produced.
#[derive(Debug)]
pub struct SuiteReport {
    pub results: Vec<TestResult>,
    pub probes: Vec<ProbeResult>,
    pub summary: Summary,
}

/// Verifies the server answers `GET /files` with a 200, retrying transient
/// failures per the configured policy.
pub fn check_connection(cfg: &HarnessConfig) -> Result<()> {
    let url = http::join_url(&cfg.server_url, "/files")?;
    let policy = RetryPolicy::from_config(cfg.retry.as_ref());
    let timeouts = cfg.timeouts();

    run_with_retry(&policy, || {
        let resp = http::get(url.as_str(), timeouts)?;
        if resp.status != 200 {
            return Err(FetchError::Http(resp.status));
        }
        Ok(())
    })
    .with_context(|| format!("server at {} is not answering", cfg.server_url))?;

    tracing::info!(server = %cfg.server_url, "server connection ok");
    Ok(())
}

/// Requests each special-character name through a percent-encoded URL and
/// checks how the server responds.
pub fn probe_special_names(cfg: &HarnessConfig) -> Vec<ProbeResult> {
    let timeouts = cfg.timeouts();

    SPECIAL_NAMES
        .iter()
        .map(|&name| {
            let status = probe_one(cfg, name, timeouts);
            tracing::info!(name, status = ?status, "special-name probe");
            ProbeResult {
                name: name.to_string(),
                status,
            }
        })
        .collect()
}

fn probe_one(cfg: &HarnessConfig, name: &str, timeouts: http::Timeouts) -> ProbeStatus {
    let url = match http::join_url(&cfg.server_url, &format!("/download/{name}")) {
        Ok(u) => u,
        Err(e) => return ProbeStatus::RequestFailed(format!("{e:#}")),
    };

    match http::get(url.as_str(), timeouts) {
        Ok(resp) if resp.status == 200 => {
            let recovered = resp
                .meta
                .content_disposition
                .as_deref()
                .and_then(filename::recover_filename);
            ProbeStatus::Served {
                name_preserved: recovered.as_deref() == Some(name),
            }
        }
        Ok(resp) if resp.status == 404 => ProbeStatus::NotFound,
        Ok(resp) => ProbeStatus::HttpError(resp.status),
        Err(e) => ProbeStatus::RequestFailed(e.to_string()),
    }
}

/// Runs the whole suite against the configured server.
///
/// Aborts early (with an error) only when the server cannot be reached or
/// the listing is unusable; individual download failures become statuses in
/// the report.
pub fn run_suite(cfg: &HarnessConfig) -> Result<SuiteReport> {
    check_connection(cfg)?;

    let files = listing::fetch_listing(&cfg.server_url, cfg.timeouts())?;
    if files.is_empty() {
        tracing::warn!("server listed no files; only special-name probes will run");
    }

    let opts = DownloadOptions::from_config(cfg);
    let results: Vec<TestResult> = files
        .iter()
        .map(|entry: &FileEntry| run_download_test(entry, &opts))
        .collect();

    let probes = probe_special_names(cfg);
    let summary = Summary::from_results(&results);

    tracing::info!(
        total = summary.total,
        succeeded = summary.succeeded,
        failed = summary.failed,
        "suite finished"
    );

    Ok(SuiteReport {
        results,
        probes,
        summary,
    })
}
