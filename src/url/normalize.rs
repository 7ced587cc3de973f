//! URL joining and normalization.
//!
//! [`normalize_url`] is the crate's joining primitive: base URLs, locale
//! prefixes, and route paths come in as separate segments and leave as one
//! clean URL. Input is tokenized into scheme, path, and query parts so each
//! gets its own slash rules:
//!
//! - scheme separators normalize to `://` (`:///` for a rooted `file:`)
//! - slash runs in the path collapse to one
//! - the query suffix is reattached verbatim

use super::error::UrlError;
use super::link::scheme_end;

/// Join URL segments into one normalized URL/path string.
///
/// Empty components produced by collapsed slashes are discarded; a slash
/// directly before the query suffix is dropped. Joining only slashes (or
/// nothing at all) yields `/` or the empty string.
///
/// # Examples
/// ```
/// use docroute::normalize_url;
/// assert_eq!(normalize_url(&["/", "docs", "en", "blog"]), "/docs/en/blog");
/// assert_eq!(
///     normalize_url(&["http://www.google.com/", "foo/bar", "?test=123"]),
///     "http://www.google.com/foo/bar?test=123",
/// );
/// ```
pub fn normalize_url<S: AsRef<str>>(segments: &[S]) -> String {
    let parts: Vec<&str> = segments.iter().map(AsRef::as_ref).collect();
    normalize_parts(&parts)
}

/// Checked variant of [`normalize_url`] for segments read from optional
/// configuration values.
///
/// A missing segment is rejected instead of being silently skipped, so a
/// half-configured base URL cannot produce a plausible-looking link.
///
/// # Errors
/// [`UrlError::NotAString`] if any segment is `None`.
pub fn try_normalize_url(segments: &[Option<&str>]) -> Result<String, UrlError> {
    let mut parts = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment {
            Some(s) => parts.push(*s),
            None => return Err(UrlError::NotAString("undefined".to_string())),
        }
    }
    Ok(normalize_parts(&parts))
}

/// Scheme token split off the first segment.
struct SchemeToken<'a> {
    name: &'a str,
    /// Slashes the input carried right after the colon.
    slashes: usize,
    /// Rest of the first segment past the colon and its slashes.
    rest: &'a str,
}

impl SchemeToken<'_> {
    /// Normalized separator.
    ///
    /// `://` for everything, except `file:` which keeps a root marker as
    /// `:///`, and opaque colon forms (`mailto:user@host`,
    /// `http:example.com`) which stay colon-only.
    fn separator(&self, body: &str) -> &'static str {
        if self.name.eq_ignore_ascii_case("file") {
            if self.slashes >= 3 || body.starts_with('/') {
                ":///"
            } else if self.slashes > 0 || !body.is_empty() {
                "://"
            } else {
                ":"
            }
        } else if self.slashes == 0 && (!self.rest.is_empty() || body.is_empty()) {
            ":"
        } else {
            "://"
        }
    }
}

fn split_scheme(first: &str) -> Option<SchemeToken<'_>> {
    let end = scheme_end(first)?;
    let after = &first[end + 1..];
    let rest = after.trim_start_matches('/');
    Some(SchemeToken {
        name: &first[..end],
        slashes: after.len() - rest.len(),
        rest,
    })
}

fn normalize_parts(segments: &[&str]) -> String {
    if segments.iter().all(|s| s.is_empty()) {
        return String::new();
    }
    let Some((first, tail)) = segments.split_first() else {
        return String::new();
    };

    let scheme = split_scheme(first);
    let first_body = scheme.as_ref().map_or(*first, |token| token.rest);

    // Scheme-stripped first segment joined with the rest. An empty first
    // body is dropped when a scheme was split off, so the join slash is not
    // mistaken for an absolute path marker.
    let mut pieces: Vec<&str> = Vec::with_capacity(segments.len());
    if scheme.is_none() || !first_body.is_empty() {
        pieces.push(first_body);
    }
    pieces.extend_from_slice(tail);
    let body = pieces.join("/");

    // Everything past the first `?` is reattached verbatim.
    let (path, query) = match body.find('?') {
        Some(at) => body.split_at(at),
        None => (body.as_str(), ""),
    };

    let components: Vec<&str> = path.split('/').filter(|c| !c.is_empty()).collect();
    let has_leading = path.starts_with('/');
    let has_trailing = path.ends_with('/');

    let mut out = String::with_capacity(body.len() + 4);
    match &scheme {
        Some(token) => {
            out.push_str(token.name);
            out.push_str(token.separator(&body));
        }
        None => {
            if components.is_empty() && query.is_empty() {
                // Only slashes (or nothing) survived the join.
                return if has_leading || has_trailing {
                    "/".to_string()
                } else {
                    String::new()
                };
            }
            if has_leading {
                out.push('/');
            }
        }
    }
    out.push_str(&components.join("/"));
    if has_trailing && !components.is_empty() && query.is_empty() {
        out.push('/');
    }
    out.push_str(query);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_path_segments() {
        assert_eq!(
            normalize_url(&["/", "docs", "en", "next", "blog"]),
            "/docs/en/next/blog"
        );
        assert_eq!(
            normalize_url(&["/test/", "/docs", "ro", "doc1"]),
            "/test/docs/ro/doc1"
        );
        assert_eq!(normalize_url(&["hello", "world"]), "hello/world");
    }

    #[test]
    fn test_collapses_slash_runs() {
        assert_eq!(normalize_url(&["///hello///"]), "/hello/");
        assert_eq!(
            normalize_url(&["/hello//world", "//again"]),
            "/hello/world/again"
        );
        assert_eq!(
            normalize_url(&["/", "", "hello", "", "/", "/", "", "/", "/world"]),
            "/hello/world"
        );
    }

    #[test]
    fn test_root_and_empty() {
        assert_eq!(normalize_url(&["/", ""]), "/");
        assert_eq!(normalize_url(&["", "/"]), "/");
        assert_eq!(normalize_url(&["/"]), "/");
        assert_eq!(normalize_url(&[""]), "");
        assert_eq!(normalize_url(&["", ""]), "");
    }

    #[test]
    fn test_leading_and_trailing_markers() {
        assert_eq!(normalize_url(&["", "/hello"]), "/hello");
        assert_eq!(normalize_url(&["", "/hello/"]), "/hello/");
        assert_eq!(normalize_url(&["hello/"]), "hello/");
    }

    #[test]
    fn test_preserves_query_suffix() {
        assert_eq!(
            normalize_url(&["http://www.google.com/", "foo/bar", "?test=123"]),
            "http://www.google.com/foo/bar?test=123"
        );
        // Slash runs inside the query are untouched; the slash right before
        // the query is dropped
        assert_eq!(
            normalize_url(&["/docs/", "?redirect=//evil//path"]),
            "/docs?redirect=//evil//path"
        );
    }

    #[test]
    fn test_scheme_separator_normalization() {
        assert_eq!(
            normalize_url(&["http:", "www.google.com///", "foo//bar", "?test=123"]),
            "http://www.google.com/foo/bar?test=123"
        );
        assert_eq!(
            normalize_url(&["http://foobar.com", "", "test"]),
            "http://foobar.com/test"
        );
        assert_eq!(
            normalize_url(&["http://foobar.com", "", "test", "/"]),
            "http://foobar.com/test/"
        );
    }

    #[test]
    fn test_opaque_colon_forms_stay() {
        assert_eq!(
            normalize_url(&["http:example.com", "foo"]),
            "http:example.com/foo"
        );
        assert_eq!(
            normalize_url(&["mailto:user@example.com"]),
            "mailto:user@example.com"
        );
        assert_eq!(normalize_url(&["http:"]), "http:");
    }

    #[test]
    fn test_file_scheme_slashes() {
        assert_eq!(
            normalize_url(&["file:", "hello/world/"]),
            "file://hello/world/"
        );
        assert_eq!(
            normalize_url(&["file:", "/hello/world/"]),
            "file:///hello/world/"
        );
        assert_eq!(
            normalize_url(&["file://", "/hello/world/"]),
            "file:///hello/world/"
        );
        assert_eq!(
            normalize_url(&["file:///already/rooted"]),
            "file:///already/rooted"
        );
    }

    #[test]
    fn test_try_normalize_url_rejects_missing_segment() {
        let err = try_normalize_url(&[Some("http:example.com"), None]).unwrap_err();
        assert_eq!(err.to_string(), "Url must be a string. Received undefined");
        assert_eq!(err, UrlError::NotAString("undefined".to_string()));
    }

    #[test]
    fn test_try_normalize_url_matches_infallible() {
        assert_eq!(
            try_normalize_url(&[Some("/docs"), Some("intro")]).unwrap(),
            "/docs/intro"
        );
        assert_eq!(try_normalize_url(&[]).unwrap(), "");
    }
}
