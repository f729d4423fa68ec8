//! CLI command handlers, one per file. The menu reuses them.

mod add;
mod add_batch;
mod backup;
mod config;
mod history;
mod list;
mod log;
mod menu;
mod new_category;
mod remove;
mod search;
mod update;

pub use add::run_add;
pub use add_batch::run_add_batch;
pub use backup::run_backup;
pub use config::run_config;
pub use history::run_history;
pub use list::run_list;
pub use log::{run_log_clear, run_log_view};
pub use menu::run_menu;
pub use new_category::run_new_category;
pub use remove::run_remove;
pub use search::{run_search, search_category};
pub use update::run_update;
