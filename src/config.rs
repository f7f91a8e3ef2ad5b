use serde::Deserialize;
use std::path::PathBuf;

/// File name of the metadata resource looked up inside a namespace directory
pub const DEFAULT_METADATA_FILE_NAME: &str = ".version";

/// Configuration for a filesystem metadata source
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceConfig {
    /// Directory whose subdirectories mirror the namespace hierarchy
    pub root: PathBuf,
    /// Metadata file name looked up inside each namespace directory
    pub file_name: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            file_name: DEFAULT_METADATA_FILE_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn source_config_from_partial_object_uses_defaults_for_missing_fields() {
        let config = serde_json::from_value::<SourceConfig>(json!({
            "root": "/opt/app/metadata"
        }))
        .unwrap();

        assert_eq!(config.root, PathBuf::from("/opt/app/metadata"));
        assert_eq!(config.file_name, DEFAULT_METADATA_FILE_NAME);
    }

    #[test]
    fn source_config_from_full_object_parses_all_fields() {
        let config = serde_json::from_value::<SourceConfig>(json!({
            "root": "/opt/app/metadata",
            "fileName": "build-info.properties"
        }))
        .unwrap();

        assert_eq!(
            config,
            SourceConfig {
                root: PathBuf::from("/opt/app/metadata"),
                file_name: "build-info.properties".to_string(),
            }
        );
    }
}
