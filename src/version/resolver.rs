//! Ancestor-walking version resolution
//!
//! The resolver answers "what version is the code unit at this namespace"
//! by asking its [`MetadataSource`] for a record at the namespace itself
//! and, failing that, at each ancestor namespace in turn. Results are
//! cached under the originally requested path, so repeated lookups for a
//! namespace short-circuit without re-walking the hierarchy.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::namespace::Namespace;
use crate::version::cache::VersionCache;
use crate::version::error::{MetadataError, ResolveError};
use crate::version::model::Version;
use crate::version::source::MetadataSource;

/// Resolves and caches version metadata for namespace paths
///
/// Each resolver owns its cache; independent resolvers (e.g. one per test,
/// or several configured against different sources) do not interfere.
/// A resolver is safe to share across threads by reference.
pub struct VersionResolver {
    source: Arc<dyn MetadataSource>,
    cache: VersionCache,
}

impl VersionResolver {
    pub fn new(source: impl MetadataSource + 'static) -> Self {
        Self::with_source(Arc::new(source))
    }

    pub fn with_source(source: Arc<dyn MetadataSource>) -> Self {
        Self {
            source,
            cache: VersionCache::new(),
        }
    }

    /// Resolves the version for a dot-separated namespace path.
    ///
    /// Fails only on a syntactically invalid path. Absence of metadata is a
    /// normal outcome and yields the [`Version::unknown`] sentinel.
    pub fn resolve(&self, path: &str) -> Result<Arc<Version>, ResolveError> {
        let namespace = Namespace::new(path)?;
        Ok(self.resolve_namespace(&namespace))
    }

    /// Resolves the version for a `::`-separated Rust module path, as
    /// produced by `module_path!()`. See [`own_version!`](crate::own_version)
    /// for the usual entry point.
    pub fn resolve_module(&self, module_path: &str) -> Result<Arc<Version>, ResolveError> {
        let namespace = Namespace::from_module_path(module_path)?;
        Ok(self.resolve_namespace(&namespace))
    }

    /// Resolves the version for the module enclosing type `T`.
    ///
    /// Best-effort: a type without an enclosing module (primitives), or one
    /// whose synthesized name does not form a namespace path (closures),
    /// yields the unknown sentinel without consulting the source.
    pub fn resolve_for_type<T: ?Sized>(&self) -> Arc<Version> {
        match enclosing_namespace(std::any::type_name::<T>()) {
            Some(namespace) => self.resolve_namespace(&namespace),
            None => Version::unknown(),
        }
    }

    /// Resolves the version for the module enclosing the type of `value`.
    pub fn resolve_for_value<T: ?Sized>(&self, value: &T) -> Arc<Version> {
        match enclosing_namespace(std::any::type_name_of_val(value)) {
            Some(namespace) => self.resolve_namespace(&namespace),
            None => Version::unknown(),
        }
    }

    /// Resolves the version for an already-validated namespace.
    pub fn resolve_namespace(&self, namespace: &Namespace) -> Arc<Version> {
        // Metadata is never attached to a top-level namespace.
        if namespace.is_top_level() {
            return Version::unknown();
        }

        let mut current = namespace.clone();
        loop {
            if let Some(hit) = self.cache.get(&current) {
                // An ancestor-level hit is re-keyed under the requested path
                // so the next lookup short-circuits without walking.
                return if current == *namespace {
                    hit
                } else {
                    self.cache.insert(namespace.clone(), hit)
                };
            }

            match self.source.load(&current) {
                Ok(Some(record)) => match Version::from_record(&current, &record) {
                    Ok(version) => {
                        debug!(
                            namespace = %namespace,
                            resolved_at = %current,
                            version = %version,
                            "resolved version metadata"
                        );
                        return self.cache.insert(namespace.clone(), Arc::new(version));
                    }
                    Err(MetadataError::MissingVersion) => {
                        // A record without the required version field is an
                        // error at this level, not a signal to keep searching
                        // ancestors.
                        error!(
                            namespace = %current,
                            "version not defined in metadata record"
                        );
                        return Version::unknown();
                    }
                },
                Ok(None) => {}
                Err(err) => {
                    // An unreadable resource is treated like a missing one;
                    // the ancestor walk continues.
                    warn!(
                        namespace = %current,
                        error = %err,
                        "failed to read metadata record"
                    );
                }
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => return Version::unknown(),
            }
        }
    }

    /// Drops every cached entry.
    ///
    /// Test isolation only; not safe to call while other threads are
    /// actively resolving.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

/// Namespace of the module enclosing a type, derived from its
/// `std::any::type_name` rendering.
fn enclosing_namespace(type_name: &str) -> Option<Namespace> {
    // `type_name` looks like `crate::module::Type` or `crate::module::Type<...>`.
    let base = match type_name.find('<') {
        Some(pos) => &type_name[..pos],
        None => type_name,
    };
    let (module_path, _) = base.rsplit_once("::")?;
    Namespace::from_module_path(module_path).ok()
}
