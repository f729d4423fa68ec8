pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub mod backup;
pub mod brand;
pub mod browser;
pub mod history;
pub mod search;
pub mod store;
pub mod template;
pub mod updater;
pub mod url_parts;

pub use error::SearchError;
