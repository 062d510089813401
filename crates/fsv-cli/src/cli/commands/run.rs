//! `fsv run` – full validation suite with printed summary.

use anyhow::Result;
use fsv_core::config::HarnessConfig;
use fsv_core::suite;

pub fn run_suite(cfg: &HarnessConfig) -> Result<()> {
    println!("Validating {} ...", cfg.server_url);
    let report = suite::run_suite(cfg)?;

    if report.results.is_empty() {
        println!("Server listed no files.");
    } else {
        println!();
        println!("{:<36} {:<14} {:>12} {:>14}", "FILE", "STATUS", "BYTES", "B/S");
        for r in &report.results {
            let speed = if r.status.is_success() {
                format!("{:.0}", r.speed_bps)
            } else {
                "-".to_string()
            };
            println!(
                "{:<36} {:<14} {:>12} {:>14}",
                r.filename,
                r.status.label(),
                r.bytes,
                speed
            );
        }
    }

    println!();
    for p in &report.probes {
        println!("special {:<30} {}", p.name, p.status);
    }

    let s = &report.summary;
    println!();
    println!(
        "{} tested, {} ok, {} failed ({:.1}% success)",
        s.total,
        s.succeeded,
        s.failed,
        s.success_rate * 100.0
    );
    if let (Some(speed), Some(elapsed)) = (s.avg_speed_bps, s.avg_elapsed) {
        println!(
            "average {:.0} B/s, {:.2}s per file",
            speed,
            elapsed.as_secs_f64()
        );
    }
    for r in report.results.iter().filter(|r| !r.status.is_success()) {
        println!("  failed: {} ({})", r.filename, r.status.label());
    }

    Ok(())
}
