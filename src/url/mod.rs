//! URL string utilities.
//!
//! Pure functions over URL/path strings. No side effects.
//!
//! - [`normalize_url`] / [`try_normalize_url`]: segment joining and slash
//!   normalization
//! - [`add_leading_slash`], [`add_trailing_slash`], [`remove_leading_slash`],
//!   [`remove_trailing_slash`]: slash edge-normalizers
//! - [`is_valid_pathname`]: pathname validation
//! - [`encode_path`]: percent-encoding at the output boundary
//! - [`resolve_pathname`]: relative path resolution
//! - [`is_external_link`], [`split_path_fragment`]: link classification

mod encode;
mod error;
mod link;
mod normalize;
mod resolve;
mod slash;
mod validate;

pub use encode::encode_path;
pub use error::UrlError;
pub use link::{is_external_link, split_path_fragment};
pub use normalize::{normalize_url, try_normalize_url};
pub use resolve::resolve_pathname;
pub use slash::{
    add_leading_slash, add_trailing_slash, remove_leading_slash, remove_trailing_slash,
};
pub use validate::is_valid_pathname;
