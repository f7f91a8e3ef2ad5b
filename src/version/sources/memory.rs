//! In-memory metadata source

use std::collections::HashMap;

use crate::namespace::Namespace;
use crate::version::error::SourceError;
use crate::version::source::{MetadataSource, RawMetadata};

/// Holds metadata records in memory, keyed by exact namespace
///
/// Useful for embedders that carry their metadata in code and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: HashMap<Namespace, RawMetadata>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion
    pub fn with_record(mut self, namespace: Namespace, record: RawMetadata) -> Self {
        self.insert(namespace, record);
        self
    }

    pub fn insert(&mut self, namespace: Namespace, record: RawMetadata) {
        self.records.insert(namespace, record);
    }
}

impl MetadataSource for MemorySource {
    fn load(&self, namespace: &Namespace) -> Result<Option<RawMetadata>, SourceError> {
        Ok(self.records.get(namespace).cloned())
    }
}
