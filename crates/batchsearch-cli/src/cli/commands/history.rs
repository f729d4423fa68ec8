//! `batchsearch history updates|deletions` – persistent site histories.

use anyhow::Result;

use crate::cli::{App, HistoryKind};

pub fn run_history(app: &App, kind: HistoryKind) -> Result<()> {
    let (log, title, hint) = match kind {
        HistoryKind::Updates => (
            app.update_log(),
            "Site Update History",
            "Run the updater (`batchsearch update` or W) first.",
        ),
        HistoryKind::Deletions => (
            app.deletion_log(),
            "Site Deletion History",
            "Remove sites (`batchsearch remove` or D) first.",
        ),
    };

    match log.read()? {
        None => println!("The {} log hasn't been created yet. {hint}", title.to_lowercase()),
        Some(content) if content.trim().is_empty() => {
            println!("The {} log is empty.", title.to_lowercase())
        }
        Some(content) => {
            println!("--- {title} ---");
            print!("{content}");
            println!("---");
        }
    }
    Ok(())
}
