//! `fsv list` – print the server's file inventory.

use anyhow::Result;
use fsv_core::config::HarnessConfig;
use fsv_core::listing;

pub fn run_list(cfg: &HarnessConfig) -> Result<()> {
    let files = listing::fetch_listing(&cfg.server_url, cfg.timeouts())?;
    if files.is_empty() {
        println!("Server reports no files.");
        return Ok(());
    }

    println!("{:<36} {:>12} {}", "FILE", "SIZE", "URL");
    for f in &files {
        println!("{:<36} {:>12} {}", f.filename, f.size, f.download_url);
    }
    Ok(())
}
