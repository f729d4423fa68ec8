//! `batchsearch add <category> <url>` – add one site to a category.

use anyhow::Result;
use batchsearch_core::template::ensure_placeholder;

use crate::cli::prompt;
use crate::cli::App;

pub fn run_add(app: &App, category: &str, url: &str, yes: bool) -> Result<()> {
    let catalog = app.catalog()?;
    let category = catalog.resolve(category)?;

    let template = match ensure_placeholder(url) {
        Ok(t) => t,
        Err(e) => {
            println!("{e}. Site not added.");
            return Ok(());
        }
    };
    if template != url.trim() {
        println!("Placeholder '{{}}' not found. Auto-corrected URL to: {template}");
    }

    println!("CATEGORY: {}", category.name);
    println!("NEW URL:  {template}");
    if !prompt::confirm("Proceed with adding this site?", yes)? {
        println!("Adding site cancelled.");
        return Ok(());
    }

    app.store.append_template(category, &template)?;
    println!("Added new site to {}.", category.file_name);
    Ok(())
}
