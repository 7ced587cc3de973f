//! Slash edge-normalizers.
//!
//! Idempotent helpers for the slash conventions routes follow: every route
//! starts with `/`, directory routes end with `/`. Removal strips the whole
//! slash run at the edge so applying a helper twice never changes the result
//! again.

/// Add a leading slash unless one is already present
///
/// # Examples
/// ```
/// use docroute::add_leading_slash;
/// assert_eq!(add_leading_slash("docs/intro"), "/docs/intro");
/// assert_eq!(add_leading_slash("/docs/intro"), "/docs/intro");
/// assert_eq!(add_leading_slash(""), "/");
/// ```
#[inline]
pub fn add_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Add a trailing slash unless one is already present
///
/// # Examples
/// ```
/// use docroute::add_trailing_slash;
/// assert_eq!(add_trailing_slash("/docs"), "/docs/");
/// assert_eq!(add_trailing_slash("/docs/"), "/docs/");
/// ```
#[inline]
pub fn add_trailing_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}

/// Strip the leading slash run from a path
///
/// # Examples
/// ```
/// use docroute::remove_leading_slash;
/// assert_eq!(remove_leading_slash("/blog/post"), "blog/post");
/// assert_eq!(remove_leading_slash("blog/post"), "blog/post");
/// assert_eq!(remove_leading_slash("/"), "");
/// ```
#[inline]
pub fn remove_leading_slash(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Strip the trailing slash run from a path
///
/// # Examples
/// ```
/// use docroute::remove_trailing_slash;
/// assert_eq!(remove_trailing_slash("/blog/post/"), "/blog/post");
/// assert_eq!(remove_trailing_slash("/blog/post"), "/blog/post");
/// assert_eq!(remove_trailing_slash("/"), "");
/// ```
#[inline]
pub fn remove_trailing_slash(path: &str) -> &str {
    path.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_leading_slash() {
        assert_eq!(add_leading_slash("docs"), "/docs");
        assert_eq!(add_leading_slash("/docs"), "/docs");
        assert_eq!(add_leading_slash(""), "/");
        assert_eq!(add_leading_slash("/"), "/");
    }

    #[test]
    fn test_add_trailing_slash() {
        assert_eq!(add_trailing_slash("/docs"), "/docs/");
        assert_eq!(add_trailing_slash("/docs/"), "/docs/");
        assert_eq!(add_trailing_slash(""), "/");
    }

    #[test]
    fn test_remove_leading_slash() {
        assert_eq!(remove_leading_slash("/blog/post"), "blog/post");
        assert_eq!(remove_leading_slash("//blog"), "blog");
        assert_eq!(remove_leading_slash("blog"), "blog");
        assert_eq!(remove_leading_slash(""), "");
    }

    #[test]
    fn test_remove_trailing_slash() {
        assert_eq!(remove_trailing_slash("/blog/post/"), "/blog/post");
        assert_eq!(remove_trailing_slash("/blog/post//"), "/blog/post");
        assert_eq!(remove_trailing_slash("/"), "");
        assert_eq!(remove_trailing_slash(""), "");
    }

    #[test]
    fn test_idempotence() {
        let inputs = ["", "/", "docs", "/docs", "/docs/", "docs//", "//docs", "///"];
        for s in inputs {
            assert_eq!(add_leading_slash(&add_leading_slash(s)), add_leading_slash(s));
            assert_eq!(add_trailing_slash(&add_trailing_slash(s)), add_trailing_slash(s));
            assert_eq!(
                remove_leading_slash(remove_leading_slash(s)),
                remove_leading_slash(s)
            );
            assert_eq!(
                remove_trailing_slash(remove_trailing_slash(s)),
                remove_trailing_slash(s)
            );
        }
    }
}
