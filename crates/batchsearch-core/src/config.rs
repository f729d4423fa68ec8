use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths::{DataLayout, APP_PREFIX};

/// Sites that break on `+` for spaces and need `%20` instead.
pub const DEFAULT_PERCENT_ENCODED_SITES: &[&str] = &["z-library.gs", "ankergames.net", "1tamilmv"];

/// Global configuration loaded from `~/.config/batchsearch/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Browser id from the registry (0 = system default). None until the user picks one.
    pub browser_id: Option<u8>,
    /// Append every search to the search log.
    pub logging_enabled: bool,
    /// Tabs opened before pausing for the user.
    pub tabs_per_batch: usize,
    /// Delay between opening two tabs, in milliseconds.
    pub tab_delay_ms: u64,
    /// Substrings of templates whose keyword uses `%20` encoding.
    pub percent_encoded_sites: Vec<String>,
    /// Overrides the registry's executable path for the chosen browser.
    pub browser_path: Option<PathBuf>,
    /// Overrides the data directory (category files and history logs).
    pub data_dir: Option<PathBuf>,
    /// Where backup archives are written. Defaults to the Downloads directory.
    pub backup_dir: Option<PathBuf>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            browser_id: None,
            logging_enabled: false,
            tabs_per_batch: 5,
            tab_delay_ms: 500,
            percent_encoded_sites: DEFAULT_PERCENT_ENCODED_SITES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            browser_path: None,
            data_dir: None,
            backup_dir: None,
        }
    }
}

impl SearchConfig {
    /// Data layout rooted at `data_dir`, or the XDG data home.
    pub fn layout(&self) -> Result<DataLayout> {
        let root = match &self.data_dir {
            Some(dir) => dir.clone(),
            None => DataLayout::default_root()?,
        };
        Ok(DataLayout::new(root))
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.backup_dir
            .clone()
            .or_else(dirs::download_dir)
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Batch size never drops to zero, which would stall the search loop.
    pub fn batch_size(&self) -> usize {
        self.tabs_per_batch.max(1)
    }

    /// Write the config as TOML, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self).context("serialize config")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the default location, creating it if none exists.
pub fn load_or_init() -> Result<SearchConfig> {
    let path = config_path()?;
    let legacy = DataLayout::default_root()
        .map(|root| DataLayout::new(root).legacy_config())
        .ok();
    load_or_init_at(&path, legacy.as_deref())
}

/// Load configuration from `path`. When the file is missing, a legacy two-line
/// config at `legacy` is imported if present, otherwise defaults are written.
pub fn load_or_init_at(path: &Path, legacy: Option<&Path>) -> Result<SearchConfig> {
    if !path.exists() {
        let mut cfg = SearchConfig::default();
        if let Some(legacy_path) = legacy.filter(|p| p.exists()) {
            let text = fs::read_to_string(legacy_path)
                .with_context(|| format!("read legacy config: {}", legacy_path.display()))?;
            let (browser_id, logging_enabled) = parse_legacy(&text);
            cfg.browser_id = browser_id;
            cfg.logging_enabled = logging_enabled;
            tracing::info!("imported legacy config from {}", legacy_path.display());
        }
        cfg.save(path)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: SearchConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

/// Parse the legacy format: line 1 numeric browser id, line 2 `True`/`False`.
/// Anything unparseable falls back to "unset" / `false`.
pub fn parse_legacy(text: &str) -> (Option<u8>, bool) {
    let mut lines = text.lines().map(str::trim);
    let browser_id = lines
        .next()
        .filter(|l| !l.is_empty() && l.chars().all(|c| c.is_ascii_digit()))
        .and_then(|l| l.parse::<u8>().ok());
    let logging_enabled = lines
        .next()
        .map(|l| l.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    (browser_id, logging_enabled)
}
