//! `batchsearch add-batch <category> <file>` – add every URL in a text file.

use anyhow::{Context, Result};
use batchsearch_core::store::parse_templates;
use batchsearch_core::template::ensure_placeholder;
use std::fs;
use std::path::Path;

use crate::cli::prompt;
use crate::cli::App;

pub fn run_add_batch(app: &App, category: &str, file: &Path, yes: bool) -> Result<()> {
    let catalog = app.catalog()?;
    let category = catalog.resolve(category)?;

    let content =
        fs::read_to_string(file).with_context(|| format!("read {}", file.display()))?;
    let candidates = parse_templates(&content);
    if candidates.is_empty() {
        println!("{} contains no URLs. Nothing to add.", file.display());
        return Ok(());
    }
    println!("Found {} potential URL(s) in {}.", candidates.len(), file.display());

    let templates = normalize_batch(&candidates);
    if templates.is_empty() {
        println!("No valid URLs left to add.");
        return Ok(());
    }

    println!("CATEGORY: {}", category.name);
    println!("VALID URLS TO ADD: {}", templates.len());
    if !prompt::confirm("Proceed with adding these sites?", yes)? {
        println!("Adding site batch cancelled.");
        return Ok(());
    }

    app.store.append_templates(category, &templates)?;
    println!("Added {} new site(s) to {}.", templates.len(), category.file_name);
    Ok(())
}

/// Auto-correct each URL, printing what was changed or skipped.
fn normalize_batch(candidates: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(candidates.len());
    for url in candidates {
        match ensure_placeholder(url) {
            Ok(template) => {
                if &template != url {
                    println!("Corrected: {url} -> {template}");
                }
                out.push(template);
            }
            Err(e) => println!("Skipping: {e}"),
        }
    }
    out
}
