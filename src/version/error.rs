use thiserror::Error;

use crate::namespace::InvalidNamespace;

/// Error surfaced to callers of the resolve operations
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    InvalidNamespace(#[from] InvalidNamespace),
}

/// Error produced by a metadata source that could not be read
///
/// Distinct from "no resource exists", which sources report as `Ok(None)`.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read metadata resource: {0}")]
    Io(#[from] std::io::Error),
}

/// Internal construction failure for a version model
///
/// Never surfaced to callers; the resolver maps it to the unknown sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MetadataError {
    #[error("version not defined in metadata record")]
    MissingVersion,
}
