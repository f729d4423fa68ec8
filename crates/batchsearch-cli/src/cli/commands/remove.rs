//! `batchsearch remove <url-or-host>` – remove sites by URL or hostname.

use anyhow::Result;
use batchsearch_core::store::find_removals;

use crate::cli::prompt;
use crate::cli::App;

pub fn run_remove(app: &App, target: &str, yes: bool) -> Result<()> {
    let catalog = app.catalog()?;
    let removals = find_removals(&catalog, target);
    if removals.is_empty() {
        println!("No sites match '{}'.", target.trim());
        return Ok(());
    }

    println!("Sites to remove:");
    for r in &removals {
        println!("  [{}] {}", r.category_name, r.template);
    }
    if !prompt::confirm(&format!("Remove {} site(s)?", removals.len()), yes)? {
        println!("Removal cancelled.");
        return Ok(());
    }

    let log = app.deletion_log();
    let mut removed = 0;
    for category in &catalog.categories {
        let targets: Vec<String> = removals
            .iter()
            .filter(|r| r.file_name == category.file_name)
            .map(|r| r.template.clone())
            .collect();
        if targets.is_empty() {
            continue;
        }
        match app.store.remove_templates(category, &targets) {
            Ok(n) => {
                removed += n;
                for template in &targets {
                    if let Err(e) = log.record_deletion(&category.name, template) {
                        println!("Warning: failed to write the deletion history: {e:#}");
                    }
                }
            }
            Err(e) => println!("Error updating {}: {e:#}", category.file_name),
        }
    }
    println!("Removed {removed} line(s).");
    Ok(())
}
