//! Creation-time placeholder repair for newly added sites.

use crate::error::SearchError;
use crate::url_parts::UrlParts;

use super::{has_placeholder, PLACEHOLDER};

/// Prepare a user-supplied site URL for storage as a template.
///
/// - must be `http://` or `https://` (any letter case)
/// - a URL that already has `{}` is kept verbatim
/// - with a query: `&s={}` is appended
/// - without: `scheme://host/path` minus trailing `/`, plus `/?s={}`
pub fn ensure_placeholder(url: &str) -> Result<String, SearchError> {
    let url = url.trim();
    let parts = UrlParts::parse(url)
        .filter(|p| p.is_http())
        .ok_or_else(|| SearchError::UnsupportedScheme(url.to_string()))?;
    if has_placeholder(url) {
        return Ok(url.to_string());
    }

    let fixed = if parts.has_query() {
        format!("{url}&s={PLACEHOLDER}")
    } else {
        let base = format!("{}{}", parts.origin(), parts.path);
        format!("{}/?s={PLACEHOLDER}", base.trim_end_matches('/'))
    };
    let fixed = fixed.replace("//?", "/?");

    if !has_placeholder(&fixed) {
        return Err(SearchError::MissingPlaceholder(url.to_string()));
    }
    tracing::debug!(from = url, to = %fixed, "auto-corrected site URL");
    Ok(fixed)
}
