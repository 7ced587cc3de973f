//! Percent-encoding at the output boundary.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// URI-component escape set: everything except ASCII alphanumerics and
/// `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a path, component by component.
///
/// `/` separators are never encoded; each component between them is escaped
/// with uppercase hex, multi-byte characters as their UTF-8 byte sequence.
///
/// # Examples
/// ```
/// use docroute::encode_path;
/// assert_eq!(encode_path("a/<foo>/"), "a/%3Cfoo%3E/");
/// assert_eq!(encode_path("a/你好/"), "a/%E4%BD%A0%E5%A5%BD/");
/// ```
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| utf8_percent_encode(segment, COMPONENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}
