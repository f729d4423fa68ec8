//! Domain errors for templates, sites and categories.
//!
//! Filesystem and orchestration code uses `anyhow` with context; these are the
//! failures callers match on to report-and-skip a single item.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// Template has no `{}` placeholder, so the keyword has nowhere to go.
    #[error("template is missing the '{{}}' placeholder: {0}")]
    MissingPlaceholder(String),

    /// Template has more than one `{}` placeholder.
    #[error("template has {count} '{{}}' placeholders, expected one: {template}")]
    ExtraPlaceholders { template: String, count: usize },

    /// Site URLs must be http or https.
    #[error("URL must start with 'http://' or 'https://': {0}")]
    UnsupportedScheme(String),

    #[error("could not determine the site's brand name from: {0}")]
    NoBrand(String),

    #[error("search keyword is empty")]
    EmptyKeyword,

    #[error("no category matches '{0}'")]
    UnknownCategory(String),

    #[error("category '{0}' already exists")]
    CategoryExists(String),

    #[error("invalid category name: '{0}'")]
    InvalidCategoryName(String),

    #[error("unknown browser id {0}")]
    UnknownBrowser(u8),

    #[error("{name} executable not found at {path}")]
    BrowserUnavailable { name: String, path: String },
}
