//! Append-only, human-readable history files: searches, site updates, site removals.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::paths::DataLayout;
use crate::updater::UrlUpdate;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn timestamp_now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

pub fn format_search_entry(timestamp: &str, category: &str, keyword: &str) -> String {
    format!("[{timestamp}] Category: {category:<30} | Search Term: {keyword}\n")
}

pub fn format_update_entry(timestamp: &str, update: &UrlUpdate) -> String {
    format!(
        "[{timestamp}] Category: {}\n  - OLD: {}\n  - NEW: {}\n---\n",
        update.category_name, update.old_template, update.new_template
    )
}

pub fn format_deletion_entry(timestamp: &str, category: &str, template: &str) -> String {
    format!("[{timestamp}] Category: {category}\n  - REMOVED: {template}\n---\n")
}

/// One history file.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn searches(layout: &DataLayout) -> Self {
        Self::new(layout.search_log())
    }

    pub fn updates(layout: &DataLayout) -> Self {
        Self::new(layout.update_log())
    }

    pub fn deletions(layout: &DataLayout) -> Self {
        Self::new(layout.deletion_log())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, entry: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open log: {}", self.path.display()))?;
        file.write_all(entry.as_bytes())
            .with_context(|| format!("append to log: {}", self.path.display()))?;
        Ok(())
    }

    pub fn record_search(&self, category: &str, keyword: &str) -> Result<()> {
        self.append(&format_search_entry(&timestamp_now(), category, keyword))
    }

    pub fn record_update(&self, update: &UrlUpdate) -> Result<()> {
        self.append(&format_update_entry(&timestamp_now(), update))
    }

    pub fn record_deletion(&self, category: &str, template: &str) -> Result<()> {
        self.append(&format_deletion_entry(&timestamp_now(), category, template))
    }

    /// Full contents, or None when the log has never been written.
    pub fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("read log: {}", self.path.display())),
        }
    }

    /// Delete the log. Returns false if it did not exist.
    pub fn clear(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "cleared log");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("delete log: {}", self.path.display())),
        }
    }
}
