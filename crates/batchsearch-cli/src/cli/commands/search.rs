//! `batchsearch search <category> <keyword>` – open a category's sites for a keyword.

use anyhow::Result;
use batchsearch_core::browser::{BrowserLauncher, TabOpener};
use batchsearch_core::search::{self, plan_search, SearchReport};
use batchsearch_core::store::Category;
use std::time::Duration;

use crate::cli::prompt;
use crate::cli::App;

pub fn run_search(app: &App, category: &str, keyword: &str, all: bool) -> Result<()> {
    let catalog = app.catalog()?;
    let category = catalog.resolve(category)?;
    let Some(mut launcher) = configured_launcher(app) else {
        return Ok(());
    };
    search_category(app, category, keyword, !all, &mut launcher)?;
    Ok(())
}

/// The configured browser, or None after telling the user why it cannot be used.
pub fn configured_launcher(app: &App) -> Option<BrowserLauncher> {
    match BrowserLauncher::from_config(&app.cfg) {
        Ok(launcher) => {
            tracing::debug!(browser = launcher.name(), "using browser");
            Some(launcher)
        }
        Err(e) => {
            println!("{e}. Pick another browser with `batchsearch config --browser <ID>`.");
            None
        }
    }
}

/// Shared by the subcommand and the menu. With `pause_between_batches` the
/// user is asked before each batch after the first.
///
/// The search is written to the search log (when enabled) before any tab opens.
/// Returns None when nothing was opened.
pub fn search_category(
    app: &App,
    category: &Category,
    keyword: &str,
    pause_between_batches: bool,
    opener: &mut dyn TabOpener,
) -> Result<Option<SearchReport>> {
    if category.templates.is_empty() {
        println!(
            "The '{}' list is empty! Add URLs to {} and try again.",
            category.name, category.file_name
        );
        return Ok(None);
    }

    let plan = match plan_search(category, keyword, &app.rules()) {
        Ok(plan) => plan,
        Err(e) => {
            println!("{e}");
            return Ok(None);
        }
    };
    for skipped in &plan.skipped {
        println!("WARNING: {skipped}. Skipping.");
    }
    if plan.urls.is_empty() {
        println!("No usable URLs in '{}'.", category.name);
        return Ok(None);
    }

    if app.cfg.logging_enabled {
        match app.search_log().record_search(&plan.category, &plan.keyword) {
            Ok(()) => println!("Search logged to {}", app.search_log().path().display()),
            Err(e) => println!("Warning: failed to write to the search log: {e:#}"),
        }
    }

    println!("Opening {} tab(s) for \"{}\"...", plan.urls.len(), plan.keyword);
    let mut gate = |remaining: usize| -> Result<bool> {
        if pause_between_batches {
            prompt::continue_batch(remaining)
        } else {
            Ok(true)
        }
    };
    let report = search::run_search(
        &plan,
        opener,
        app.cfg.batch_size(),
        Duration::from_millis(app.cfg.tab_delay_ms),
        &mut gate,
    )?;

    for (url, error) in &report.failed {
        println!("Failed to open {url}: {error}");
    }
    if report.completed {
        println!("All done. Opened {} tab(s).", report.opened);
    } else {
        println!("Stopped after {} tab(s).", report.opened);
    }
    Ok(Some(report))
}
