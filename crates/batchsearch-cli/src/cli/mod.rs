//! CLI for batchsearch. With no subcommand the interactive menu runs.

mod app;
mod commands;
mod prompt;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub use app::App;
use commands::{
    run_add, run_add_batch, run_backup, run_config, run_history, run_list, run_log_clear,
    run_log_view, run_menu, run_new_category, run_remove, run_search, run_update,
};

/// Top-level CLI for batchsearch.
#[derive(Debug, Parser)]
#[command(name = "batchsearch")]
#[command(about = "Open batches of bookmarked search URLs for a keyword", long_about = None)]
pub struct Cli {
    /// Use this data directory (category files and history logs) for this run.
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Interactive menu (the default).
    Menu,

    /// Search every site of a category for a keyword.
    Search {
        /// Category id, name or file name.
        category: String,

        /// Search keyword; several words are joined with spaces.
        #[arg(required = true)]
        keyword: Vec<String>,

        /// Open every tab without pausing between batches.
        #[arg(long)]
        all: bool,
    },

    /// List categories and their site templates.
    List {
        /// Print each category's templates too.
        #[arg(long)]
        urls: bool,
    },

    /// Add one site to a category; a missing '{}' placeholder is added automatically.
    Add {
        /// Category id, name or file name.
        category: String,

        /// Full http(s) site URL.
        url: String,

        /// Do not ask for confirmation.
        #[arg(long, short)]
        yes: bool,
    },

    /// Add every URL listed in a text file (one per line) to a category.
    AddBatch {
        /// Category id, name or file name.
        category: String,

        /// Text file with one URL per line.
        file: PathBuf,

        /// Do not ask for confirmation.
        #[arg(long, short)]
        yes: bool,
    },

    /// Point a stored site at its new domain (matched by brand name).
    Update {
        /// The new working site URL.
        url: String,

        /// Do not ask for confirmation.
        #[arg(long, short)]
        yes: bool,
    },

    /// Remove sites by exact URL or by hostname.
    Remove {
        /// URL or hostname.
        target: String,

        /// Do not ask for confirmation.
        #[arg(long, short)]
        yes: bool,
    },

    /// Create a new, empty category.
    NewCategory {
        /// Display name, e.g. "Linux ISOs".
        name: String,
    },

    /// Zip the data directory into the backup directory.
    Backup,

    /// View or clear the search log.
    Log {
        #[command(subcommand)]
        action: LogAction,
    },

    /// Show the persistent site update or deletion history.
    History {
        #[command(subcommand)]
        kind: HistoryKind,
    },

    /// Show or change settings.
    Config {
        /// Browser id (0 = system default, 1 = Chrome, 2 = Firefox, 3 = Brave).
        #[arg(long, value_name = "ID")]
        browser: Option<u8>,

        /// Turn search logging on or off.
        #[arg(long, value_enum)]
        logging: Option<Toggle>,
    },
}

#[derive(Debug, Subcommand)]
pub enum LogAction {
    /// Print the search log.
    View,
    /// Delete the search log.
    Clear {
        /// Do not ask for confirmation.
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum HistoryKind {
    /// Site URL updates.
    Updates,
    /// Removed sites.
    Deletions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut app = App::load(cli.data_dir)?;
        tracing::debug!("loaded config: {:?}", app.cfg);

        match cli.command.unwrap_or(CliCommand::Menu) {
            CliCommand::Menu => run_menu(&mut app)?,
            CliCommand::Search {
                category,
                keyword,
                all,
            } => run_search(&app, &category, &keyword.join(" "), all)?,
            CliCommand::List { urls } => run_list(&app, urls)?,
            CliCommand::Add { category, url, yes } => run_add(&app, &category, &url, yes)?,
            CliCommand::AddBatch {
                category,
                file,
                yes,
            } => run_add_batch(&app, &category, &file, yes)?,
            CliCommand::Update { url, yes } => run_update(&app, &url, yes, None)?,
            CliCommand::Remove { target, yes } => run_remove(&app, &target, yes)?,
            CliCommand::NewCategory { name } => run_new_category(&app, &name)?,
            CliCommand::Backup => run_backup(&app)?,
            CliCommand::Log { action } => match action {
                LogAction::View => run_log_view(&app)?,
                LogAction::Clear { yes } => run_log_clear(&app, yes)?,
            },
            CliCommand::History { kind } => run_history(&app, kind)?,
            CliCommand::Config { browser, logging } => {
                run_config(&mut app, browser, logging.map(|t| t == Toggle::On))?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
