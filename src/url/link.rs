//! Link classification helpers.

/// Byte offset of the `:` that ends a URL scheme, if the string starts
/// with one.
///
/// A scheme must have at least one character before the colon, all ASCII
/// alphanumeric or `+`, `-`, `.`.
#[inline]
pub(super) fn scheme_end(link: &str) -> Option<usize> {
    let pos = link.find(':')?;
    (pos > 0
        && link[..pos]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')))
    .then_some(pos)
}

/// Check if a link is external (has a URL scheme like `http:`, `mailto:`, etc.)
///
/// # Examples
/// ```
/// use docroute::is_external_link;
/// assert!(is_external_link("https://example.com"));
/// assert!(is_external_link("mailto:user@example.com"));
/// assert!(!is_external_link("/about"));
/// assert!(!is_external_link("./file.txt"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    scheme_end(link).is_some()
}

/// Split a URL into path and fragment parts
///
/// # Returns
/// A tuple of (path, fragment) where fragment is empty string if no `#` found
///
/// # Examples
/// ```
/// use docroute::split_path_fragment;
/// assert_eq!(split_path_fragment("/about#team"), ("/about", "team"));
/// assert_eq!(split_path_fragment("/about"), ("/about", ""));
/// ```
#[inline]
pub fn split_path_fragment(url: &str) -> (&str, &str) {
    url.split_once('#').unwrap_or((url, ""))
}
