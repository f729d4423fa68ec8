//! Loaded config, data layout and store shared by every command.

use anyhow::Result;
use batchsearch_core::config::{self, SearchConfig};
use batchsearch_core::history::HistoryLog;
use batchsearch_core::paths::DataLayout;
use batchsearch_core::store::{Catalog, CategoryStore};
use batchsearch_core::template::EncodingRules;
use std::path::PathBuf;

pub struct App {
    pub cfg: SearchConfig,
    pub cfg_path: PathBuf,
    pub layout: DataLayout,
    pub store: CategoryStore,
}

impl App {
    /// Load config from the XDG config dir. `data_dir` overrides the configured
    /// data directory for this run only.
    pub fn load(data_dir: Option<PathBuf>) -> Result<Self> {
        let cfg_path = config::config_path()?;
        let cfg = config::load_or_init()?;
        let layout = match data_dir {
            Some(dir) => DataLayout::new(dir),
            None => cfg.layout()?,
        };
        Ok(Self::new(cfg, cfg_path, layout))
    }

    pub fn new(cfg: SearchConfig, cfg_path: PathBuf, layout: DataLayout) -> Self {
        let store = CategoryStore::from_layout(&layout);
        Self {
            cfg,
            cfg_path,
            layout,
            store,
        }
    }

    pub fn save_config(&self) -> Result<()> {
        self.cfg.save(&self.cfg_path)?;
        tracing::info!("saved config to {}", self.cfg_path.display());
        Ok(())
    }

    /// Reload every category from disk, reporting unreadable files.
    pub fn catalog(&self) -> Result<Catalog> {
        self.layout.ensure()?;
        let catalog = self.store.load_all()?;
        for file in &catalog.unreadable {
            println!(
                "Warning: could not read {}. Skipping. ({})",
                file.file_name, file.error
            );
        }
        Ok(catalog)
    }

    pub fn rules(&self) -> EncodingRules {
        EncodingRules::new(&self.cfg.percent_encoded_sites)
    }

    pub fn search_log(&self) -> HistoryLog {
        HistoryLog::searches(&self.layout)
    }

    pub fn update_log(&self) -> HistoryLog {
        HistoryLog::updates(&self.layout)
    }

    pub fn deletion_log(&self) -> HistoryLog {
        HistoryLog::deletions(&self.layout)
    }
}
