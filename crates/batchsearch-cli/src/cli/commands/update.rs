//! `batchsearch update <url>` – move a stored site to its new domain.

use anyhow::Result;
use batchsearch_core::updater::{self, Session, UpdateOutcome};

use crate::cli::prompt;
use crate::cli::App;

pub fn run_update(app: &App, url: &str, yes: bool, session: Option<&mut Session>) -> Result<()> {
    let url = url.trim();
    if url.is_empty() {
        println!("Input cannot be empty. Update cancelled.");
        return Ok(());
    }
    let catalog = app.catalog()?;

    let outcome = match updater::plan_update(&catalog, url) {
        Ok(outcome) => outcome,
        Err(e) => {
            println!("{e}. Please check the format.");
            return Ok(());
        }
    };

    let update = match outcome {
        UpdateOutcome::NoMatch { brand } => {
            println!("No existing sites match the brand name '{brand}'. Update cancelled.");
            return Ok(());
        }
        UpdateOutcome::Unchanged { template, .. } => {
            println!("{template} already points there. Update skipped.");
            return Ok(());
        }
        UpdateOutcome::Proposed { brand, update } => {
            println!("Matched brand name '{brand}' in {}.", update.file_name);
            update
        }
    };

    println!("CATEGORY: {}", update.category_name);
    println!("OLD: {}", update.old_template);
    println!("NEW: {}", update.new_template);
    if !prompt::confirm("Proceed with update?", yes)? {
        println!("Update cancelled.");
        return Ok(());
    }

    updater::apply_update(&app.store, &catalog, &update, &app.update_log())?;
    println!("Updated {}.", update.file_name);
    if let Some(session) = session {
        session.record(update);
    }
    Ok(())
}
