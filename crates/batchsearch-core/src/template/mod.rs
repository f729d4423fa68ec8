//! URL templates: a search URL with a `{}` placeholder for the keyword.
//!
//! Search-time substitution is strict (exactly one placeholder, otherwise the
//! template is skipped). Creation-time input goes through [`ensure_placeholder`],
//! which is the only place a missing placeholder gets repaired.

mod autofix;
mod encode;

pub use autofix::ensure_placeholder;
pub use encode::{encode_keyword, EncodingRules, QueryEncoding};

use crate::error::SearchError;

/// Marks where the keyword goes.
pub const PLACEHOLDER: &str = "{}";

pub fn placeholder_count(template: &str) -> usize {
    template.matches(PLACEHOLDER).count()
}

pub fn has_placeholder(template: &str) -> bool {
    template.contains(PLACEHOLDER)
}

/// Encode `keyword` and put it in place of the template's single placeholder.
pub fn substitute(
    template: &str,
    keyword: &str,
    encoding: QueryEncoding,
) -> Result<String, SearchError> {
    match placeholder_count(template) {
        0 => Err(SearchError::MissingPlaceholder(template.to_string())),
        1 => Ok(template.replacen(PLACEHOLDER, &encode_keyword(keyword, encoding), 1)),
        count => Err(SearchError::ExtraPlaceholders {
            template: template.to_string(),
            count,
        }),
    }
}
