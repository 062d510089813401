//! `fsv download` – test a single listed file.

use anyhow::{bail, Context, Result};
use fsv_core::config::HarnessConfig;
use fsv_core::download::{run_download_test, DownloadOptions};
use fsv_core::listing;

pub fn run_download(cfg: &HarnessConfig, filename: &str) -> Result<()> {
    let files = listing::fetch_listing(&cfg.server_url, cfg.timeouts())?;
    let entry = files
        .iter()
        .find(|f| f.filename == filename)
        .with_context(|| format!("{filename:?} is not in the server listing"))?;

    let result = run_download_test(entry, &DownloadOptions::from_config(cfg));

    println!("{:<14} {}", result.status.label(), result.filename);
    if let Some(saved) = &result.saved_as {
        println!("saved as   {}", cfg.output_dir.join(saved).display());
    }
    println!(
        "received   {} bytes in {:.2}s ({:.0} B/s)",
        result.bytes,
        result.elapsed.as_secs_f64(),
        result.speed_bps
    );
    if let Some(digest) = &result.sha256 {
        println!("sha256     {digest}");
    }

    if !result.status.is_success() {
        bail!("download test failed: {}", result.status.label());
    }
    Ok(())
}
