//! Keyword encoding for embedding into a URL.

/// How spaces (and `/`) in the keyword are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryEncoding {
    /// Form style: space becomes `+`, everything else percent-encoded.
    #[default]
    Plus,
    /// Path style: space becomes `%20`, `/` kept as is.
    Percent,
}

/// Percent-encode `keyword`. Unreserved characters (`A-Z a-z 0-9 - _ . ~`)
/// are kept as is.
pub fn encode_keyword(keyword: &str, encoding: QueryEncoding) -> String {
    let encoded = urlencoding::encode(keyword);
    match encoding {
        QueryEncoding::Plus => encoded.replace("%20", "+"),
        QueryEncoding::Percent => encoded.replace("%2F", "/"),
    }
}

/// Chooses the encoding per template from a list of site substrings that
/// need [`QueryEncoding::Percent`].
#[derive(Debug, Clone, Default)]
pub struct EncodingRules {
    percent_sites: Vec<String>,
}

impl EncodingRules {
    pub fn new<I, S>(percent_sites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            percent_sites: percent_sites
                .into_iter()
                .map(|s| s.as_ref().trim().to_ascii_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn encoding_for(&self, template: &str) -> QueryEncoding {
        let lower = template.to_ascii_lowercase();
        if self.percent_sites.iter().any(|site| lower.contains(site)) {
            QueryEncoding::Percent
        } else {
            QueryEncoding::Plus
        }
    }
}
