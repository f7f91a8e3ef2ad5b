//! Validated namespace paths
//!
//! A namespace path is a dot-separated sequence of identifier segments,
//! e.g. `org.example.widget`. It identifies the code unit whose version
//! metadata is being resolved, and doubles as the key under which resolved
//! versions are cached.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for a string that does not satisfy the namespace path grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a valid namespace path: {0:?}")]
pub struct InvalidNamespace(pub String);

/// A validated, dot-separated namespace path
///
/// Invariants held by every constructed value:
/// - non-empty, no leading or trailing dot, no two consecutive dots
/// - every segment starts with an identifier-start character (alphabetic
///   or `_`) and continues with identifier characters (alphanumeric or `_`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Namespace(String);

impl Namespace {
    pub fn new(path: impl Into<String>) -> Result<Self, InvalidNamespace> {
        let path = path.into();
        if is_valid_path(&path) {
            Ok(Self(path))
        } else {
            Err(InvalidNamespace(path))
        }
    }

    /// Builds a namespace from a Rust module path (`::`-separated), as
    /// produced by `module_path!()` or `std::any::type_name`.
    pub fn from_module_path(module_path: &str) -> Result<Self, InvalidNamespace> {
        Self::new(module_path.replace("::", "."))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// True when the path has a single segment. Version metadata is never
    /// attached at this level, so a top-level lookup resolves to unknown.
    pub fn is_top_level(&self) -> bool {
        !self.0.contains('.')
    }

    /// The namespace with the last segment removed, or `None` for a
    /// top-level namespace.
    pub fn parent(&self) -> Option<Namespace> {
        self.0.rfind('.').map(|pos| Namespace(self.0[..pos].to_string()))
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Namespace {
    type Err = InvalidNamespace;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Namespace {
    type Error = InvalidNamespace;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Namespace> for String {
    fn from(namespace: Namespace) -> Self {
        namespace.0
    }
}

fn is_valid_path(path: &str) -> bool {
    let mut chars = path.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !is_identifier_start(first) {
        return false;
    }

    let mut last_was_dot = false;
    for c in chars {
        if c == '.' {
            if last_was_dot {
                return false;
            }
            last_was_dot = true;
            continue;
        }
        let valid = if last_was_dot {
            is_identifier_start(c)
        } else {
            is_identifier_continue(c)
        };
        if !valid {
            return false;
        }
        last_was_dot = false;
    }

    !last_was_dot
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
