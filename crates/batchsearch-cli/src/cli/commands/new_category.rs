//! `batchsearch new-category <name>` – create an empty category file.

use anyhow::Result;

use crate::cli::App;

pub fn run_new_category(app: &App, name: &str) -> Result<()> {
    app.layout.ensure()?;
    let category = app.store.create_category(name)?;
    println!(
        "Created category '{}' ({}). Add sites with `batchsearch add`.",
        category.name,
        category.path.display()
    );
    Ok(())
}
