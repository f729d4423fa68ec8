//! `batchsearch log view|clear` – the search log.

use anyhow::Result;

use crate::cli::prompt;
use crate::cli::App;

pub fn run_log_view(app: &App) -> Result<()> {
    match app.search_log().read()? {
        None => println!(
            "The search log hasn't been created yet. Enable logging and run a search first."
        ),
        Some(content) if content.trim().is_empty() => println!("The search log is empty."),
        Some(content) => {
            println!("--- Search Log ---");
            print!("{content}");
            println!("------------------");
        }
    }
    Ok(())
}

pub fn run_log_clear(app: &App, yes: bool) -> Result<()> {
    let log = app.search_log();
    if !log.path().exists() {
        println!("The search log hasn't been created yet. Nothing to delete.");
        return Ok(());
    }
    if !prompt::confirm("Delete the search log forever?", yes)? {
        println!("Log kept.");
        return Ok(());
    }
    log.clear()?;
    println!("Search log deleted.");
    Ok(())
}
