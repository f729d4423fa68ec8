//! Moving a template to a new origin while keeping its path and query.

use crate::error::SearchError;
use crate::template::{has_placeholder, PLACEHOLDER};
use crate::url_parts::UrlParts;

/// Normalize the user's new site address: trimmed, `https://` assumed when no
/// scheme is given, http/https only (scheme lowercased), and a non-empty host.
pub fn normalize_new_url(input: &str) -> Result<String, SearchError> {
    let input = input.trim();
    let url = match UrlParts::parse(input) {
        Some(parts) if parts.is_http() => {
            let rest = &input[parts.scheme.len()..];
            format!("{}{rest}", parts.scheme.to_ascii_lowercase())
        }
        Some(_) => return Err(SearchError::UnsupportedScheme(input.to_string())),
        None if input.contains("://") => {
            return Err(SearchError::UnsupportedScheme(input.to_string()))
        }
        None => format!("https://{input}"),
    };
    match url::Url::parse(&url) {
        Ok(parsed) if parsed.host_str().is_some_and(|h| !h.is_empty()) => Ok(url),
        _ => Err(SearchError::NoBrand(input.to_string())),
    }
}

/// Put `template` on `new_origin` (`scheme://authority`), keeping the path,
/// query and fragment of the template verbatim.
///
/// When the template had a placeholder that lived in its old host, the
/// placeholder is put back: `&s={}` if there is a query, else `/?s={}`.
pub fn rewrite_template(template: &str, new_origin: &str) -> String {
    let new_origin = new_origin.trim_end_matches('/');
    let rewritten = match UrlParts::parse(template) {
        Some(parts) => format!("{new_origin}{}", parts.tail()),
        None => {
            // Scheme-less template: everything from the first '/' is the tail.
            let tail = template.find('/').map_or("", |i| &template[i..]);
            format!("{new_origin}{tail}")
        }
    };

    if !has_placeholder(template) || has_placeholder(&rewritten) {
        return rewritten;
    }

    let has_query = UrlParts::parse(&rewritten).is_some_and(|p| p.has_query());
    if has_query {
        format!("{rewritten}&s={PLACEHOLDER}")
    } else {
        let base = rewritten.trim_end_matches('?').trim_end_matches('/');
        format!("{base}/?s={PLACEHOLDER}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_assumes_https() {
        assert_eq!(
            normalize_new_url(" bollyflix.miami ").unwrap(),
            "https://bollyflix.miami"
        );
        assert_eq!(
            normalize_new_url("http://example.org/").unwrap(),
            "http://example.org/"
        );
    }

    #[test]
    fn normalize_rejects_bad_input() {
        assert_eq!(
            normalize_new_url("ftp://example.org/"),
            Err(SearchError::UnsupportedScheme("ftp://example.org/".to_string()))
        );
        assert!(matches!(normalize_new_url("https://"), Err(SearchError::NoBrand(_))));
    }

    #[test]
    fn normalize_accepts_uppercase_scheme() {
        assert_eq!(
            normalize_new_url("HTTP://user@Site.ORG:8080/x").unwrap(),
            "http://user@Site.ORG:8080/x"
        );
        assert_eq!(normalize_new_url("Https://site.org").unwrap(), "https://site.org");
    }

    #[test]
    fn keeps_query_placeholder() {
        assert_eq!(
            rewrite_template("https://www.site.com/?s={}", "https://site.net"),
            "https://site.net/?s={}"
        );
        assert_eq!(
            rewrite_template("https://site.com/search.php?cat=2&q={}", "http://site.io:8080"),
            "http://site.io:8080/search.php?cat=2&q={}"
        );
    }

    #[test]
    fn keeps_path_placeholder() {
        assert_eq!(
            rewrite_template("https://site.com/search/{}/1", "https://www.site.org/"),
            "https://www.site.org/search/{}/1"
        );
    }

    #[test]
    fn keeps_fragment_and_plain_links() {
        assert_eq!(
            rewrite_template("https://site.com/latest?page=2#top", "https://site.cc"),
            "https://site.cc/latest?page=2#top"
        );
        assert_eq!(rewrite_template("https://site.com", "https://site.cc"), "https://site.cc");
    }

    #[test]
    fn reinserts_placeholder_lost_with_old_host() {
        assert_eq!(
            rewrite_template("https://{}.site.com/", "https://site.net"),
            "https://site.net/?s={}"
        );
        assert_eq!(
            rewrite_template("https://{}.site.com/find?cat=1", "https://site.net"),
            "https://site.net/find?cat=1&s={}"
        );
        assert_eq!(
            rewrite_template("https://{}.site.com/?", "https://site.net"),
            "https://site.net/?s={}"
        );
    }
}
