//! Per-file test results and suite-level aggregation.

use std::time::Duration;

/// Outcome of one download test.
#[derive(Debug, Clone, PartialEq)]
pub enum TestStatus {
    /// Downloaded, saved, and the on-disk size matched Content-Length.
    Success,
    /// Body saved but its size disagreed with the declared Content-Length.
    SizeMismatch { expected: u64, actual: u64 },
    /// The body could not be written or persisted locally.
    SaveFailed(String),
    /// Server answered with a non-200 status.
    HttpError(u32),
    /// The request itself failed (connect, timeout, bad URL).
    RequestFailed(String),
}

impl TestStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, TestStatus::Success)
    }

    /// Stable short label for reports and logs.
    pub fn label(&self) -> &'static str {
        match self {
            TestStatus::Success => "success",
            TestStatus::SizeMismatch { .. } => "size_mismatch",
            TestStatus::SaveFailed(_) => "save_failed",
            TestStatus::HttpError(_) => "http_error",
            TestStatus::RequestFailed(_) => "request_failed",
        }
    }
}

/// Result of testing one listed file.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Filename as listed by the server.
    pub filename: String,
    pub status: TestStatus,
    /// Bytes received.
    pub bytes: u64,
    /// Wall time of the transfer.
    pub elapsed: Duration,
    /// Transfer rate in bytes per second (0 when elapsed is 0).
    pub speed_bps: f64,
    /// Name the body was saved under (after recovery and sanitization).
    pub saved_as: Option<String>,
    /// SHA-256 of the saved body, when checksumming is enabled.
    pub sha256: Option<String>,
}

/// Aggregate view of a finished suite.
#[derive(Debug, Clone)]
pub struct Summary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// succeeded / total, 0.0 when nothing was tested.
    pub success_rate: f64,
    /// Mean transfer rate over successful tests.
    pub avg_speed_bps: Option<f64>,
    /// Mean wall time over successful tests.
    pub avg_elapsed: Option<Duration>,
}

impl Summary {
    pub fn from_results(results: &[TestResult]) -> Self {
        let total = results.len();
        let ok: Vec<&TestResult> = results.iter().filter(|r| r.status.is_success()).collect();
        let succeeded = ok.len();

        let (avg_speed_bps, avg_elapsed) = if succeeded > 0 {
            let speed = ok.iter().map(|r| r.speed_bps).sum::<f64>() / succeeded as f64;
            let elapsed = ok.iter().map(|r| r.elapsed).sum::<Duration>() / succeeded as u32;
            (Some(speed), Some(elapsed))
        } else {
            (None, None)
        };

        Self {
            total,
            succeeded,
            failed: total - succeeded,
            success_rate: if total > 0 {
                succeeded as f64 / total as f64
            } else {
                0.0
            },
            avg_speed_bps,
            avg_elapsed,
        }
    }
}
