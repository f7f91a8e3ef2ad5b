//! Filesystem-backed metadata source

use std::io;
use std::path::PathBuf;

use tracing::debug;

use crate::config::SourceConfig;
use crate::namespace::Namespace;
use crate::version::error::SourceError;
use crate::version::source::{MetadataSource, RawMetadata};

/// Loads metadata records from a directory tree mirroring the namespace
/// hierarchy
///
/// The record for `org.example.widget` is read from
/// `<root>/org/example/widget/<file name>`, where the file name defaults to
/// `.version`. A missing file or directory is "not found"; any other read
/// failure is a [`SourceError`].
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
    file_name: String,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file_name: crate::config::DEFAULT_METADATA_FILE_NAME.to_string(),
        }
    }

    pub fn with_file_name(root: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            file_name: file_name.into(),
        }
    }

    pub fn from_config(config: &SourceConfig) -> Self {
        Self::with_file_name(&config.root, &config.file_name)
    }

    fn resource_path(&self, namespace: &Namespace) -> PathBuf {
        let mut path = self.root.clone();
        for segment in namespace.segments() {
            path.push(segment);
        }
        path.push(&self.file_name);
        path
    }
}

impl MetadataSource for FsSource {
    fn load(&self, namespace: &Namespace) -> Result<Option<RawMetadata>, SourceError> {
        let path = self.resource_path(namespace);
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                debug!(
                    namespace = %namespace,
                    path = %path.display(),
                    "loaded metadata record"
                );
                Ok(Some(RawMetadata::parse(&text)))
            }
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) =>
            {
                Ok(None)
            }
            Err(err) => Err(SourceError::Io(err)),
        }
    }
}
