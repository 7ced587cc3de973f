//! Edit-URL derivation for repository-hosted sources.

use crate::url::normalize_url;

/// Build the "edit this page" URL for a source file.
///
/// Returns `None` when the site has no edit base configured. Windows-style
/// separators in the file path are normalized before joining; non-ASCII
/// characters pass through unescaped, encoding is the caller's concern.
///
/// # Examples
/// ```
/// use docroute::get_edit_url;
/// assert_eq!(
///     get_edit_url("foo/bar.md", Some("https://example.com/repo")),
///     Some("https://example.com/repo/foo/bar.md".to_string()),
/// );
/// assert_eq!(get_edit_url("foo/bar.md", None), None);
/// ```
pub fn get_edit_url(file_path: &str, edit_url: Option<&str>) -> Option<String> {
    edit_url.map(|base| {
        let unix_path = file_path.replace('\\', "/");
        normalize_url(&[base, unix_path.as_str()])
    })
}
