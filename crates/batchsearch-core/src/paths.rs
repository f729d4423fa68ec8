//! On-disk layout of the user's data directory.
//!
//! Everything the user owns (category files and history logs) lives under one
//! root so a backup is a single archive of that directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_PREFIX: &str = "batchsearch";

const SITES_DIR: &str = "sites";
const SEARCH_LOG: &str = "search_log.txt";
const UPDATE_LOG: &str = "site_update_history.txt";
const DELETION_LOG: &str = "site_deletion_history.txt";
const LEGACY_CONFIG: &str = "config.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `~/.local/share/batchsearch` (XDG data home).
    pub fn default_root() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
        Ok(xdg_dirs.get_data_home())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one `*.txt` file per category.
    pub fn sites_dir(&self) -> PathBuf {
        self.root.join(SITES_DIR)
    }

    pub fn search_log(&self) -> PathBuf {
        self.root.join(SEARCH_LOG)
    }

    pub fn update_log(&self) -> PathBuf {
        self.root.join(UPDATE_LOG)
    }

    pub fn deletion_log(&self) -> PathBuf {
        self.root.join(DELETION_LOG)
    }

    /// Two-line config file written by older versions of the tool.
    pub fn legacy_config(&self) -> PathBuf {
        self.root.join(LEGACY_CONFIG)
    }

    /// Create the root and sites directories if missing.
    pub fn ensure(&self) -> Result<()> {
        let sites = self.sites_dir();
        if !sites.exists() {
            tracing::info!("creating sites directory {}", sites.display());
        }
        fs::create_dir_all(&sites)
            .with_context(|| format!("create sites dir: {}", sites.display()))?;
        Ok(())
    }
}
