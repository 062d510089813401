//! Logging init: file under the XDG state dir, falling back to stderr.

use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,fsv_core=debug";

/// Initialize structured logging.
///
/// Logs go to `~/.local/state/fsv/fsv.log`; if that file cannot be opened
/// (state dir unwritable, sandboxed environment), logging falls back to
/// stderr so the CLI still runs.
pub fn init() {
    let writer = match open_log_file() {
        Ok((file, path)) => {
            let w = BoxMakeWriter::new(move || {
                file.try_clone()
                    .map(|f| Box::new(f) as Box<dyn io::Write + Send>)
                    .unwrap_or_else(|_| Box::new(io::stderr()))
            });
            Some((w, path))
        }
        Err(_) => None,
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match writer {
        Some((writer, path)) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            tracing::info!("fsv logging initialized at {}", path.display());
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(io::stderr)
                .with_ansi(false)
                .init();
            tracing::warn!("log file unavailable, logging to stderr");
        }
    }
}

fn open_log_file() -> anyhow::Result<(fs::File, PathBuf)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fsv")?;
    let log_dir = xdg_dirs.get_state_home().join("fsv");
    fs::create_dir_all(&log_dir)?;
    let path = log_dir.join("fsv.log");
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}
