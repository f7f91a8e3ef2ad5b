//! Concurrent cache of resolved versions

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::namespace::Namespace;
use crate::version::model::Version;

/// Namespace → resolved version map shared across caller threads
///
/// Guards are held only for the individual map operation, never across a
/// metadata load, so lookups for unrelated namespaces do not serialize.
/// Entries are never evicted except by [`VersionCache::clear`].
#[derive(Debug, Default)]
pub struct VersionCache {
    entries: RwLock<HashMap<Namespace, Arc<Version>>>,
}

impl VersionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, namespace: &Namespace) -> Option<Arc<Version>> {
        self.entries.read().get(namespace).cloned()
    }

    /// Stores `version` under `namespace` unless another thread already did,
    /// and returns whichever entry ended up in the map. Concurrent first-time
    /// resolutions converge on one shared instance this way.
    pub fn insert(&self, namespace: Namespace, version: Arc<Version>) -> Arc<Version> {
        self.entries.write().entry(namespace).or_insert(version).clone()
    }

    /// Drops every entry. Test isolation only; callers must not clear while
    /// other threads are resolving.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn namespace(path: &str) -> Namespace {
        Namespace::new(path).unwrap()
    }

    fn version(artifact: &str) -> Arc<Version> {
        Arc::new(Version::new(artifact, "1.0", "").unwrap())
    }

    #[test]
    fn get_returns_inserted_entry() {
        let cache = VersionCache::new();
        assert_eq!(cache.get(&namespace("org.example")), None);

        let stored = cache.insert(namespace("org.example"), version("widget"));
        let hit = cache.get(&namespace("org.example")).unwrap();
        assert!(Arc::ptr_eq(&stored, &hit));
    }

    #[test]
    fn first_insert_wins() {
        let cache = VersionCache::new();
        let first = cache.insert(namespace("org.example"), version("first"));
        let second = cache.insert(namespace("org.example"), version("second"));

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.get(&namespace("org.example")).unwrap().artifact_id(), "first");
    }

    #[test]
    fn clear_empties_the_cache() {
        let cache = VersionCache::new();
        cache.insert(namespace("org.example"), version("widget"));
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get(&namespace("org.example")), None);
    }
}
