//! Brand-token extraction for matching an old site address to a new one.
//!
//! The brand token is the second-to-last label of the host after stripping a
//! leading `www.`: `https://www.foo.net/x` and `http://foo.org` both give
//! `foo`. It is a heuristic, not an eTLD+1 lookup (`foo.co.uk` gives `co`).

use crate::url_parts::{authority_host, UrlParts};

/// Key used to match templates belonging to the same site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BrandToken(String);

impl BrandToken {
    /// Extract the brand token from a URL, or from a bare `host/path` string.
    ///
    /// Returns None when no host can be found.
    pub fn from_url(url: &str) -> Option<Self> {
        let host = site_host(url)?;
        let labels: Vec<&str> = host.split('.').collect();
        let token = if labels.len() >= 2 {
            labels[labels.len() - 2]
        } else {
            labels[0]
        };
        if token.is_empty() {
            return None;
        }
        Some(Self(token.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BrandToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercased host with any leading `www.` removed.
///
/// Accepts full URLs (`https://www.Example.com:8080/p`) and scheme-less input
/// (`example.com/p`). Returns None for an empty host.
pub fn site_host(url: &str) -> Option<String> {
    let url = url.trim();
    let host = match url::Url::parse(url) {
        Ok(parsed) if parsed.has_host() && matches!(parsed.scheme(), "http" | "https") => {
            parsed.host_str()?.to_ascii_lowercase()
        }
        _ => match UrlParts::parse(url) {
            Some(parts) => parts.host(),
            None => {
                let head = url.split(['/', '?', '#']).next().unwrap_or(url);
                authority_host(head)
            }
        },
    };

    let host = host.strip_prefix("www.").unwrap_or(&host).to_string();
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}
