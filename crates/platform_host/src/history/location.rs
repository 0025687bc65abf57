//! Location snapshots and browser-style URL resolution for history hosts.

#[derive(Debug, Clone, PartialEq, Eq)]
/// Path, query and fragment of a document URL as exposed by `window.location`.
pub struct LocationSnapshot {
    /// Absolute pathname, always starting with `/`.
    pub pathname: String,
    /// Query string including the leading `?`, or empty.
    pub search: String,
    /// Fragment including the leading `#`, or empty.
    pub hash: String,
}

impl Default for LocationSnapshot {
    fn default() -> Self {
        Self::root()
    }
}

impl LocationSnapshot {
    /// Location of the document root (`/`).
    pub fn root() -> Self {
        Self {
            pathname: "/".to_string(),
            search: String::new(),
            hash: String::new(),
        }
    }

    /// Parses an absolute path (`/a?b#c`) or absolute URL (`https://host/a?b#c`).
    ///
    /// Origins are discarded, a missing leading slash is added, and a bare `?` or `#` marker
    /// reads back as empty the way `location.search` and `location.hash` do.
    pub fn parse(url: &str) -> Self {
        let url = strip_origin(url.trim());
        let (rest, hash) = match url.find('#') {
            Some(idx) => url.split_at(idx),
            None => (url, ""),
        };
        let (path, search) = match rest.find('?') {
            Some(idx) => rest.split_at(idx),
            None => (rest, ""),
        };

        let pathname = if path.starts_with('/') {
            remove_dot_segments(path)
        } else {
            remove_dot_segments(&format!("/{path}"))
        };

        Self {
            pathname,
            search: marker_or_empty(search),
            hash: marker_or_empty(hash),
        }
    }

    /// Resolves `url` against this location the way `history.pushState` resolves its URL
    /// argument.
    pub fn resolve(&self, url: &str) -> Self {
        let url = url.trim();
        if url.is_empty() {
            return Self {
                pathname: self.pathname.clone(),
                search: self.search.clone(),
                hash: String::new(),
            };
        }
        if url.starts_with('#') {
            return Self {
                pathname: self.pathname.clone(),
                search: self.search.clone(),
                hash: marker_or_empty(url),
            };
        }
        if url.starts_with('?') {
            return Self::parse(&format!("{}{url}", self.pathname));
        }
        if url.starts_with('/') || has_scheme(url) {
            return Self::parse(url);
        }

        let directory = match self.pathname.rfind('/') {
            Some(idx) => &self.pathname[..=idx],
            None => "/",
        };
        Self::parse(&format!("{directory}{url}"))
    }

    /// Returns whether `url` names an origin of its own (`scheme://host/...`, `//host/...`).
    ///
    /// Leading backslashes count as slashes, as browsers treat them in `http(s)` URLs.
    pub fn carries_authority(url: &str) -> bool {
        let url = url.trim();
        let mut leading = url.chars().take(2);
        let is_slash = |ch: Option<char>| matches!(ch, Some('/' | '\\'));
        (is_slash(leading.next()) && is_slash(leading.next())) || has_scheme(url)
    }

    /// Reassembles `pathname + search + hash`.
    pub fn href(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }
}

fn has_scheme(url: &str) -> bool {
    match url.find("://") {
        Some(idx) => !url[..idx].contains(&['/', '?', '#'][..]),
        None => false,
    }
}

fn strip_origin(url: &str) -> &str {
    let authority_start = if url.starts_with("//") {
        Some(2)
    } else if has_scheme(url) {
        url.find("://").map(|idx| idx + 3)
    } else {
        None
    };

    let Some(start) = authority_start else {
        return url;
    };
    let after_scheme = &url[start..];
    match after_scheme.find(&['/', '?', '#'][..]) {
        Some(idx) => &after_scheme[idx..],
        None => "/",
    }
}

fn marker_or_empty(raw: &str) -> String {
    if raw.len() <= 1 {
        String::new()
    } else {
        raw.to_string()
    }
}

fn remove_dot_segments(path: &str) -> String {
    if !path.contains("/.") {
        return path.to_string();
    }

    let mut segments: Vec<&str> = Vec::new();
    let mut raw = path.split('/').skip(1).peekable();
    let mut trailing_slash = false;
    while let Some(segment) = raw.next() {
        let is_last = raw.peek().is_none();
        match segment {
            "." => trailing_slash = is_last,
            ".." => {
                segments.pop();
                trailing_slash = is_last;
            }
            other => {
                segments.push(other);
                trailing_slash = false;
            }
        }
    }

    let mut out = String::from("/");
    out.push_str(&segments.join("/"));
    if trailing_slash && !out.ends_with('/') {
        out.push('/');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(pathname: &str, search: &str, hash: &str) -> LocationSnapshot {
        LocationSnapshot {
            pathname: pathname.to_string(),
            search: search.to_string(),
            hash: hash.to_string(),
        }
    }

    #[test]
    fn parse_splits_path_query_and_fragment() {
        let cases = [
            ("/", loc("/", "", "")),
            ("/app/services", loc("/app/services", "", "")),
            (
                "/index.html?redirect=/services#pricing",
                loc("/index.html", "?redirect=/services", "#pricing"),
            ),
            ("/a#frag?not-query", loc("/a", "", "#frag?not-query")),
            ("/a?#", loc("/a", "", "")),
            ("services", loc("/services", "", "")),
            ("https://example.com/app/x?y=1", loc("/app/x", "?y=1", "")),
            ("https://example.com", loc("/", "", "")),
            ("//cdn.example.com/a", loc("/a", "", "")),
        ];

        for (input, expected) in cases {
            assert_eq!(LocationSnapshot::parse(input), expected, "input={input:?}");
        }
    }

    #[test]
    fn resolve_follows_browser_relative_url_rules() {
        let current = loc("/app/services/detail", "?q=1", "#top");
        let cases = [
            ("#faq", loc("/app/services/detail", "?q=1", "#faq")),
            ("?page=2", loc("/app/services/detail", "?page=2", "")),
            ("/other", loc("/other", "", "")),
            ("pricing", loc("/app/services/pricing", "", "")),
            ("../about", loc("/app/about", "", "")),
            ("./", loc("/app/services/", "", "")),
            ("", loc("/app/services/detail", "?q=1", "")),
        ];

        for (input, expected) in cases {
            assert_eq!(current.resolve(input), expected, "input={input:?}");
        }
    }

    #[test]
    fn carries_authority_detects_urls_that_name_an_origin() {
        let cases = [
            ("//evil.example/x", true),
            ("/\\evil.example", true),
            ("\\\\evil.example", true),
            ("https://example.com/app", true),
            (" //padded", true),
            ("/services", false),
            ("services//x", false),
            ("/app//double", false),
            ("?redirect=https://x", false),
            ("#//frag", false),
        ];

        for (input, expected) in cases {
            assert_eq!(
                LocationSnapshot::carries_authority(input),
                expected,
                "input={input:?}"
            );
        }
    }

    #[test]
    fn href_round_trips_parsed_locations() {
        let raw = "/index.html/services?x=1#pricing";
        assert_eq!(LocationSnapshot::parse(raw).href(), raw);
        assert_eq!(LocationSnapshot::default().href(), "/");
    }
}
