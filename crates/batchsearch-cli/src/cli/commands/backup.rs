//! `batchsearch backup` – zip the data directory.

use anyhow::Result;
use batchsearch_core::backup;

use crate::cli::App;

pub fn run_backup(app: &App) -> Result<()> {
    app.layout.ensure()?;
    let archive = backup::create_backup(app.layout.root(), &app.cfg.backup_dir())?;
    println!("Backup written to {}", archive.display());
    Ok(())
}
