//! Single-file download test: fetch, save under a recovered name, verify.

use crate::checksum::DigestWriter;
use crate::config::HarnessConfig;
use crate::filename;
use crate::http::{self, ResponseMeta, Timeouts};
use crate::listing::FileEntry;
use crate::report::{TestResult, TestStatus};
use crate::retry::FetchError;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

/// Prefix applied to every saved file so test artifacts are recognizable in
/// the output directory.
pub const SAVE_PREFIX: &str = "test_download_";

/// Everything a download test needs besides the file entry itself.
#[derive(Debug, Clone, Copy)]
pub struct DownloadOptions<'a> {
    pub server_url: &'a str,
    pub output_dir: &'a Path,
    pub timeouts: Timeouts,
    pub verify_checksum: bool,
}

impl<'a> DownloadOptions<'a> {
    pub fn from_config(cfg: &'a HarnessConfig) -> Self {
        Self {
            server_url: &cfg.server_url,
            output_dir: &cfg.output_dir,
            timeouts: cfg.timeouts(),
            verify_checksum: cfg.verify_checksum,
        }
    }
}

/// Downloads one listed file and verifies it, never failing outright: every
/// error becomes a [`TestStatus`] in the returned result.
///
/// The body streams into a temp file in the output directory; once headers
/// are parsed and the filename recovered, the temp file is persisted as
/// `test_download_<name>`.
pub fn run_download_test(entry: &FileEntry, opts: &DownloadOptions) -> TestResult {
    tracing::info!(file = %entry.filename, "download test");

    let url = match http::join_url(opts.server_url, &entry.download_url) {
        Ok(u) => u,
        Err(e) => return failed(entry, TestStatus::RequestFailed(format!("{e:#}"))),
    };

    if let Err(e) = fs::create_dir_all(opts.output_dir) {
        return failed(entry, TestStatus::SaveFailed(e.to_string()));
    }
    let mut tmp = match tempfile::NamedTempFile::new_in(opts.output_dir) {
        Ok(t) => t,
        Err(e) => return failed(entry, TestStatus::SaveFailed(e.to_string())),
    };

    let mut writer = DigestWriter::new(tmp.as_file_mut(), opts.verify_checksum);
    let started = Instant::now();
    let fetched = http::get_to_sink(url.as_str(), opts.timeouts, &mut writer);
    let elapsed = started.elapsed();
    let bytes = writer.bytes_written();
    let sha256 = writer.finish();

    let meta = match fetched {
        Err(FetchError::Storage(e)) => {
            return failed(entry, TestStatus::SaveFailed(e.to_string()))
        }
        Err(FetchError::Truncated { expected }) => {
            tracing::warn!(file = %entry.filename, expected, actual = bytes, "size mismatch");
            return TestResult {
                filename: entry.filename.clone(),
                status: TestStatus::SizeMismatch {
                    expected,
                    actual: bytes,
                },
                bytes,
                elapsed,
                speed_bps: speed(bytes, elapsed),
                saved_as: None,
                sha256: None,
            };
        }
        Err(e) => return failed(entry, TestStatus::RequestFailed(e.to_string())),
        Ok((status, _)) if status != 200 => {
            tracing::warn!(file = %entry.filename, status, "download rejected");
            return failed(entry, TestStatus::HttpError(status));
        }
        Ok((_, meta)) => meta,
    };

    let save_name = save_name_for(entry, &meta);
    let path = opts.output_dir.join(&save_name);
    if let Err(e) = tmp.persist(&path) {
        return failed(entry, TestStatus::SaveFailed(e.to_string()));
    }

    let status = match meta.content_length {
        Some(expected) if expected != bytes => {
            tracing::warn!(file = %entry.filename, expected, actual = bytes, "size mismatch");
            TestStatus::SizeMismatch {
                expected,
                actual: bytes,
            }
        }
        _ => TestStatus::Success,
    };

    tracing::info!(
        file = %entry.filename,
        saved_as = %save_name,
        bytes,
        elapsed_ms = elapsed.as_millis() as u64,
        status = status.label(),
        "download test finished"
    );

    TestResult {
        filename: entry.filename.clone(),
        status,
        bytes,
        elapsed,
        speed_bps: speed(bytes, elapsed),
        saved_as: Some(save_name),
        sha256,
    }
}

/// Chooses the on-disk name: the recovered Content-Disposition filename when
/// usable, otherwise the listed filename, prefixed and sanitized.
fn save_name_for(entry: &FileEntry, meta: &ResponseMeta) -> String {
    let recovered = meta
        .content_disposition
        .as_deref()
        .and_then(filename::recover_filename)
        .filter(|s| !s.is_empty());
    let name = recovered.unwrap_or_else(|| entry.filename.clone());
    filename::sanitize_filename(&format!("{SAVE_PREFIX}{name}"))
}

fn speed(bytes: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        bytes as f64 / secs
    } else {
        0.0
    }
}

fn failed(entry: &FileEntry, status: TestStatus) -> TestResult {
    TestResult {
        filename: entry.filename.clone(),
        status,
        bytes: 0,
        elapsed: Duration::ZERO,
        speed_bps: 0.0,
        saved_as: None,
        sha256: None,
    }
}
