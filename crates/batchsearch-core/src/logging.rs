//! Diagnostic logging: file under the XDG state dir, or stderr as a fallback.
//!
//! This is the `tracing` log for troubleshooting. The user-facing search and
//! site history logs live in [`crate::history`].

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::paths::APP_PREFIX;

const LOG_FILE_NAME: &str = "batchsearch.log";
const FILE_FILTER: &str = "info,batchsearch=debug,batchsearch_core=debug";
/// The console is shared with the menu, so only problems go there by default.
const STDERR_FILTER: &str = "warn";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// `~/.local/state/batchsearch/batchsearch.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    Ok(xdg_dirs.get_state_home().join(LOG_FILE_NAME))
}

/// Open `path` for appending, creating its directory.
pub fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create log dir: {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file: {}", path.display()))
}

/// Send `tracing` output to the log file. Returns Err when the file cannot be
/// opened so the caller can fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(FILE_FILTER))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("install log subscriber: {e}"))?;

    tracing::info!("batchsearch logging to {}", path.display());
    Ok(())
}

/// Log warnings and errors to stderr only.
pub fn init_logging_stderr() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(STDERR_FILTER))
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
    if installed.is_err() {
        eprintln!("batchsearch: diagnostic logging unavailable");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn log_file_lives_in_app_state_dir() {
        let path = log_file_path().unwrap();
        assert!(path.ends_with(Path::new(APP_PREFIX).join(LOG_FILE_NAME)));
    }

    #[test]
    fn open_log_file_creates_dir_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join(LOG_FILE_NAME);
        open_log_file(&path).unwrap().write_all(b"one\n").unwrap();
        open_log_file(&path).unwrap().write_all(b"two\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }
}
