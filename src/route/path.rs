//! Route path type for type-safe route handling.
//!
//! - Internal representation: always decoded (human-readable)
//! - Output boundary: encode via [`RoutePath::to_encoded`]

use std::borrow::Borrow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::file::file_to_path;
use crate::url::{add_leading_slash, encode_path, is_valid_pathname, normalize_url};

/// Decoded route path.
///
/// Invariants:
/// - Always starts with `/`
/// - Slash runs are collapsed
/// - Directory routes end with `/`, file routes may not
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePath(Arc<str>);

impl RoutePath {
    /// Create from any path string, collapsing slash runs and forcing a
    /// leading slash.
    pub fn new(path: &str) -> Self {
        let normalized = normalize_url(&[path]);
        Self(Arc::from(add_leading_slash(&normalized)))
    }

    /// Create from a source file's relative path.
    ///
    /// `docs/intro/index.md` -> `/docs/intro/`, `docs/faq.md` -> `/docs/faq`
    pub fn from_file(file: &str) -> Self {
        Self(Arc::from(file_to_path(file)))
    }

    /// Get the decoded route path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Encode for href output (percent-encode each component).
    pub fn to_encoded(&self) -> String {
        encode_path(&self.0)
    }

    /// Whether the path is a well-formed pathname.
    pub fn is_valid(&self) -> bool {
        is_valid_pathname(&self.0)
    }

    /// Check if this is a directory route (ends with `/`).
    #[inline]
    pub fn is_dir_route(&self) -> bool {
        self.0.ends_with('/')
    }

    /// Get the parent route.
    ///
    /// `/posts/hello/` -> `/posts/`, `/posts/` -> `/`, `/` -> `None`
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.0.trim_end_matches('/');
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.rfind('/') {
            Some(0) | None => Some(Self(Arc::from("/"))),
            Some(at) => Some(Self(Arc::from(format!("{}/", &trimmed[..at])))),
        }
    }
}

impl std::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for RoutePath {
    fn default() -> Self {
        Self(Arc::from("/"))
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RoutePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoutePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RoutePath {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl PartialEq<str> for RoutePath {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for RoutePath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for RoutePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RoutePath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(&s))
    }
}
