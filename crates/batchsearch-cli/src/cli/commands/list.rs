//! `batchsearch list` – show categories (and optionally their templates).

use anyhow::Result;

use crate::cli::App;

pub fn run_list(app: &App, urls: bool) -> Result<()> {
    let catalog = app.catalog()?;
    if catalog.is_empty() {
        print_setup_help(app);
        return Ok(());
    }

    for (index, category) in catalog.categories.iter().enumerate() {
        println!(
            "{:>3}. {:<30} {:>3} site(s)  ({})",
            index + 1,
            category.name,
            category.templates.len(),
            category.file_name
        );
        if urls {
            if category.templates.is_empty() {
                println!("       [File is Empty]");
            }
            for template in &category.templates {
                println!("       {template}");
            }
        }
    }
    Ok(())
}

/// First-run instructions when no category file exists yet.
pub fn print_setup_help(app: &App) {
    println!("No categories found in {}.", app.store.dir().display());
    println!("  1. Create a category with `batchsearch new-category <NAME>` (or N in the menu),");
    println!("     or drop `.txt` files into that directory, e.g. `Movies.txt`, `Linux_ISOs.txt`.");
    println!("  2. Put one full URL per line, with `{{}}` where the search term goes.");
    println!("  3. Lines starting with `#` are comments. Categories are sorted by file name.");
}
