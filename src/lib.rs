//! Route and URL path utilities for static documentation sites.
//!
//! Everything a site generator needs between "a markdown file on disk" and
//! "a clean href in the rendered page": joining base URLs with route
//! segments, validating pathnames, resolving relative links, percent-encoding
//! for output, and mapping source files to routes.
//!
//! All functions are pure, synchronous string transformations. No I/O, no
//! shared state, safe to call from any thread.
//!
//! # Examples
//!
//! ```
//! use docroute::{RoutePath, file_to_path, normalize_url};
//!
//! let route = file_to_path("docs/intro/index.md");
//! assert_eq!(route, "/docs/intro/");
//!
//! let href = normalize_url(&["https://example.com", route.as_str()]);
//! assert_eq!(href, "https://example.com/docs/intro/");
//!
//! assert_eq!(RoutePath::from_file("docs/faq.md").as_str(), "/docs/faq");
//! ```

pub mod route;
pub mod url;

pub use route::{RoutePath, file_to_path, get_edit_url};
pub use url::{
    UrlError, add_leading_slash, add_trailing_slash, encode_path, is_external_link,
    is_valid_pathname, normalize_url, remove_leading_slash, remove_trailing_slash,
    resolve_pathname, split_path_fragment, try_normalize_url,
};
