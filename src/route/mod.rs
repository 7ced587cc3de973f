//! Route derivation.
//!
//! Maps source files to site routes and derives repository edit URLs.
//!
//! - [`file_to_path`]: source file path -> route path
//! - [`get_edit_url`]: source file path + configured base -> edit URL
//! - [`RoutePath`]: decoded route path value type

mod edit;
mod file;
mod path;

pub use edit::get_edit_url;
pub use file::file_to_path;
pub use path::RoutePath;
