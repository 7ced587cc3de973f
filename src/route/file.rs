//! Source file path to route path mapping.

/// Extensions routed as page sources.
const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx", "js", "jsx", "ts", "tsx"];

/// Map a source file's relative path to its site route.
///
/// Index files collapse into their directory route (`hello/index.md` ->
/// `/hello/`, root `index.md` -> `/`); anything else drops its content
/// extension and keeps no trailing slash (`foo/bar.md` -> `/foo/bar`).
/// Unrecognized extensions are preserved.
///
/// # Examples
/// ```
/// use docroute::file_to_path;
/// assert_eq!(file_to_path("index.md"), "/");
/// assert_eq!(file_to_path("hello/index.md"), "/hello/");
/// assert_eq!(file_to_path("foo/bar.md"), "/foo/bar");
/// ```
pub fn file_to_path(file: &str) -> String {
    let (dir, name) = match file.rsplit_once('/') {
        Some((dir, name)) => (dir, name),
        None => ("", file),
    };

    if is_index_file(name) {
        return if dir.is_empty() {
            "/".to_string()
        } else {
            format!("/{dir}/")
        };
    }

    match strip_content_extension(file) {
        Some(stem) => format!("/{stem}"),
        None => format!("/{file}"),
    }
}

/// `index.<content extension>`, filename matched case-insensitively.
fn is_index_file(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(stem, ext)| stem.eq_ignore_ascii_case("index") && is_content_extension(ext))
}

fn is_content_extension(ext: &str) -> bool {
    CONTENT_EXTENSIONS
        .iter()
        .any(|candidate| ext.eq_ignore_ascii_case(candidate))
}

/// Strip a trailing content extension, leaving other extensions alone.
fn strip_content_extension(file: &str) -> Option<&str> {
    file.rsplit_once('.')
        .filter(|(_, ext)| is_content_extension(ext))
        .map(|(stem, _)| stem)
}
