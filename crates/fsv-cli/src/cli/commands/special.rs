//! `fsv special` – probe special-character filenames.

use anyhow::Result;
use fsv_core::config::HarnessConfig;
use fsv_core::suite::{check_connection, probe_special_names};

pub fn run_special(cfg: &HarnessConfig) -> Result<()> {
    check_connection(cfg)?;

    for p in probe_special_names(cfg) {
        println!("{:<30} {}", p.name, p.status);
    }
    Ok(())
}
