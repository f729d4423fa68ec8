//! `batchsearch` / `batchsearch menu` – the interactive main menu.

use anyhow::Result;
use batchsearch_core::browser::{BrowserLauncher, BROWSERS};
use batchsearch_core::store::Catalog;
use batchsearch_core::updater::Session;
use std::path::Path;

use super::config::browser_label;
use super::list::print_setup_help;
use super::search::configured_launcher;
use super::{
    run_add, run_add_batch, run_backup, run_history, run_list, run_log_clear, run_log_view,
    run_new_category, run_remove, run_update, search_category,
};
use crate::cli::prompt;
use crate::cli::{App, HistoryKind};

pub fn run_menu(app: &mut App) -> Result<()> {
    if app.cfg.browser_id.is_none() {
        println!("Welcome! Which browser should open the search tabs?");
        choose_browser(app)?;
    }

    let mut session = Session::new();
    loop {
        let catalog = app.catalog()?;
        print_menu(app, &catalog);

        let choice = prompt::line("Choose an option")?;
        if choice == "0" {
            println!("Exiting.");
            break;
        }
        if let Err(e) = dispatch(app, &catalog, &choice, &mut session) {
            tracing::warn!(choice = %choice, "menu action failed: {:#}", e);
            println!("Error: {e:#}");
        }
        println!();
    }
    Ok(())
}

fn print_menu(app: &App, catalog: &Catalog) {
    println!("=============== batchsearch ===============");
    if catalog.is_empty() {
        print_setup_help(app);
    } else {
        for (index, category) in catalog.categories.iter().enumerate() {
            println!("  {:>2}. {}", index + 1, category.name);
        }
    }
    println!("--------------------------------------------");
    println!(
        "  L. Search logging: {}",
        if app.cfg.logging_enabled { "ON" } else { "OFF" }
    );
    println!("  V. View search log          C. Clear search log");
    println!("  T. Browser: {}", browser_label(app));
    println!("  W. Update a site URL        R. Updates this session");
    println!("  A. Add a site               B. Add sites from a file");
    println!("  N. New category             D. Remove sites");
    println!("  S. View all site files      Z. Back up data");
    println!("  U. Update history           P. Deletion history");
    println!("  0. Exit");
}

fn dispatch(app: &mut App, catalog: &Catalog, choice: &str, session: &mut Session) -> Result<()> {
    if let Ok(id) = choice.parse::<usize>() {
        let Some(category) = catalog.get(id) else {
            println!("Invalid choice. Please try again.");
            return Ok(());
        };
        let keyword = prompt::line(&format!("Search '{}' for", category.name))?;
        if keyword.is_empty() {
            println!("Keyword cannot be empty.");
            return Ok(());
        }
        if let Some(mut launcher) = configured_launcher(app) {
            search_category(app, category, &keyword, true, &mut launcher)?;
        }
        return Ok(());
    }

    match choice.to_ascii_uppercase().as_str() {
        "L" => {
            app.cfg.logging_enabled = !app.cfg.logging_enabled;
            app.save_config()?;
            println!(
                "Search logging is now {}.",
                if app.cfg.logging_enabled { "ON" } else { "OFF" }
            );
        }
        "V" => run_log_view(app)?,
        "C" => run_log_clear(app, false)?,
        "T" => choose_browser(app)?,
        "W" => {
            let url = prompt::line("New site URL")?;
            run_update(app, &url, false, Some(session))?;
        }
        "R" => print_session(session),
        "A" => {
            if let Some(file_name) = choose_category(catalog)? {
                let url = prompt::line("Site URL")?;
                if url.is_empty() {
                    println!("No URL given. Site not added.");
                } else {
                    run_add(app, &file_name, &url, false)?;
                }
            }
        }
        "B" => {
            if let Some(file_name) = choose_category(catalog)? {
                let path = prompt::line("Text file with one URL per line")?;
                if path.is_empty() {
                    println!("No file given. Batch add cancelled.");
                } else {
                    run_add_batch(app, &file_name, Path::new(&path), false)?;
                }
            }
        }
        "N" => {
            let name = prompt::line("New category name")?;
            if name.is_empty() {
                println!("Name cannot be empty.");
            } else {
                run_new_category(app, &name)?;
            }
        }
        "D" => {
            let target = prompt::line("URL or hostname to remove")?;
            if target.is_empty() {
                println!("Input cannot be empty. Removal cancelled.");
            } else {
                run_remove(app, &target, false)?;
            }
        }
        "S" => run_list(app, true)?,
        "U" => run_history(app, HistoryKind::Updates)?,
        "P" => run_history(app, HistoryKind::Deletions)?,
        "Z" => run_backup(app)?,
        _ => println!("Invalid choice. Please try again."),
    }
    Ok(())
}

/// File name of the picked category, or None when there are none.
fn choose_category(catalog: &Catalog) -> Result<Option<String>> {
    if catalog.is_empty() {
        println!("There are no categories yet. Create one with N first.");
        return Ok(None);
    }
    let names: Vec<&str> = catalog.categories.iter().map(|c| c.name.as_str()).collect();
    let index = prompt::select("Category", &names)?;
    Ok(Some(catalog.categories[index].file_name.clone()))
}

fn choose_browser(app: &mut App) -> Result<()> {
    let names: Vec<String> = BROWSERS
        .iter()
        .map(|b| format!("{} ({})", b.name, b.id))
        .collect();
    let spec = &BROWSERS[prompt::select("Browser", &names)?];

    if let Err(e) = BrowserLauncher::for_browser(spec, app.cfg.browser_path.as_deref()) {
        println!("{e}. Keeping {}.", browser_label(app));
        return Ok(());
    }
    app.cfg.browser_id = Some(spec.id);
    app.save_config()?;
    if spec.is_system_default() {
        println!("Tabs will open in the system default browser.");
    } else {
        println!("Tabs will open in {}.", spec.name);
    }
    Ok(())
}

fn print_session(session: &Session) {
    if session.updates().is_empty() {
        println!("No sites were updated during this session.");
        return;
    }
    println!("--- Updates This Session ---");
    for update in session.updates() {
        println!("[{}]", update.category_name);
        println!("  OLD: {}", update.old_template);
        println!("  NEW: {}", update.new_template);
    }
}
