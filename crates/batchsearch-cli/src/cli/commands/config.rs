//! `batchsearch config` – show or change settings.

use anyhow::Result;
use batchsearch_core::browser::{self, BrowserLauncher};
use batchsearch_core::SearchError;

use crate::cli::App;

pub fn run_config(app: &mut App, browser: Option<u8>, logging: Option<bool>) -> Result<()> {
    let mut changed = false;

    if let Some(id) = browser {
        let spec = browser::lookup(id).ok_or(SearchError::UnknownBrowser(id))?;
        BrowserLauncher::for_browser(spec, app.cfg.browser_path.as_deref())?;
        app.cfg.browser_id = Some(id);
        changed = true;
    }
    if let Some(enabled) = logging {
        app.cfg.logging_enabled = enabled;
        changed = true;
    }
    if changed {
        app.save_config()?;
        println!("Configuration saved.");
    }

    print_settings(app);
    Ok(())
}

pub fn browser_label(app: &App) -> String {
    app.cfg
        .browser_id
        .and_then(browser::lookup)
        .map(|b| b.name.to_string())
        .unwrap_or_else(|| "Not chosen (system default)".to_string())
}

fn print_settings(app: &App) {
    println!("config file:     {}", app.cfg_path.display());
    println!("data directory:  {}", app.layout.root().display());
    println!("browser:         {}", browser_label(app));
    println!(
        "search logging:  {}",
        if app.cfg.logging_enabled { "on" } else { "off" }
    );
    println!("tabs per batch:  {}", app.cfg.batch_size());
    println!("backup dir:      {}", app.cfg.backup_dir().display());
}
