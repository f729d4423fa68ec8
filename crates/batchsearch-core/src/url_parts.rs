//! Lossless split of a URL string into scheme, authority, path, query and fragment.
//!
//! Templates carry a literal `{}` that `url::Url` would percent-encode in the
//! path, so template rewriting works on the raw text instead.

/// Borrowed pieces of a `scheme://authority/path?query#fragment` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlParts<'a> {
    pub scheme: &'a str,
    pub authority: &'a str,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> UrlParts<'a> {
    /// Returns None when there is no `scheme://` prefix.
    pub fn parse(input: &'a str) -> Option<Self> {
        let (scheme, after) = input.split_once("://")?;
        if scheme.is_empty()
            || !scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        {
            return None;
        }

        let authority_end = after.find(['/', '?', '#']).unwrap_or(after.len());
        let (authority, rest) = after.split_at(authority_end);

        let (before_fragment, fragment) = match rest.split_once('#') {
            Some((b, f)) => (b, Some(f)),
            None => (rest, None),
        };
        let (path, query) = match before_fragment.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (before_fragment, None),
        };

        Some(Self {
            scheme,
            authority,
            path,
            query,
            fragment,
        })
    }

    /// `scheme://authority`, exactly as written.
    pub fn origin(&self) -> String {
        format!("{}://{}", self.scheme, self.authority)
    }

    /// Everything after the authority: path, `?query` and `#fragment`.
    pub fn tail(&self) -> String {
        let mut out = self.path.to_string();
        if let Some(q) = self.query {
            out.push('?');
            out.push_str(q);
        }
        if let Some(f) = self.fragment {
            out.push('#');
            out.push_str(f);
        }
        out
    }

    /// Host part of the authority: no userinfo, no port, lowercased.
    pub fn host(&self) -> String {
        authority_host(self.authority)
    }

    /// `http` or `https`, in any letter case.
    pub fn is_http(&self) -> bool {
        self.scheme.eq_ignore_ascii_case("http") || self.scheme.eq_ignore_ascii_case("https")
    }

    /// A non-empty query string.
    pub fn has_query(&self) -> bool {
        self.query.is_some_and(|q| !q.is_empty())
    }
}

/// Strip userinfo and port from an authority (`user@Host:8080` -> `host`).
pub fn authority_host(authority: &str) -> String {
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    let host = if host_port.starts_with('[') {
        host_port
            .find(']')
            .map_or(host_port, |end| &host_port[..=end])
    } else {
        host_port.split(':').next().unwrap_or(host_port)
    };
    host.to_ascii_lowercase()
}
