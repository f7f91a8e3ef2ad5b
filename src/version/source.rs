//! Metadata source trait for loading version records

#[cfg(test)]
use mockall::automock;

use crate::namespace::Namespace;
use crate::version::error::SourceError;

/// Raw metadata record as found in a resource, before validation
///
/// All three fields are optional at this layer; the version model decides
/// which absences are tolerable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMetadata {
    pub artifact: Option<String>,
    pub version: Option<String>,
    pub build: Option<String>,
}

impl RawMetadata {
    /// Parses the properties-style metadata format.
    ///
    /// One `key=value` (or `key: value`) pair per line; `#` and `!` start
    /// comment lines; keys other than `artifact`, `version` and `build` are
    /// ignored; the last occurrence of a key wins.
    pub fn parse(text: &str) -> Self {
        let mut record = Self::default();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let Some((key, value)) = line.split_once('=').or_else(|| line.split_once(':')) else {
                continue;
            };
            let value = value.trim().to_string();
            match key.trim() {
                "artifact" => record.artifact = Some(value),
                "version" => record.version = Some(value),
                "build" => record.build = Some(value),
                _ => {}
            }
        }
        record
    }
}

/// Trait for loading the metadata record attached to a namespace
#[cfg_attr(test, automock)]
pub trait MetadataSource: Send + Sync {
    /// Attempts to load metadata for exactly `namespace`.
    ///
    /// # Returns
    /// * `Ok(Some(record))` - a resource exists, possibly with missing fields
    /// * `Ok(None)` - no resource exists at this namespace; the resolver
    ///   falls back to the parent
    /// * `Err(SourceError)` - the resource could not be read
    fn load(&self, namespace: &Namespace) -> Result<Option<RawMetadata>, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_all_three_fields() {
        let record = RawMetadata::parse("artifact=widget\nversion=1.4.0\nbuild=f3c9\n");
        assert_eq!(
            record,
            RawMetadata {
                artifact: Some("widget".to_string()),
                version: Some("1.4.0".to_string()),
                build: Some("f3c9".to_string()),
            }
        );
    }

    #[test]
    fn parse_skips_comments_and_unknown_keys() {
        let text = "# build metadata\n! legacy comment\nversion=1.0\ntimestamp=1718031600\n";
        let record = RawMetadata::parse(text);
        assert_eq!(record.version.as_deref(), Some("1.0"));
        assert_eq!(record.artifact, None);
        assert_eq!(record.build, None);
    }

    #[test]
    fn parse_accepts_colon_separator_and_trims() {
        let record = RawMetadata::parse("artifact: widget \n version : 1.0\n");
        assert_eq!(record.artifact.as_deref(), Some("widget"));
        assert_eq!(record.version.as_deref(), Some("1.0"));
    }

    #[test]
    fn parse_keeps_blank_values_as_present() {
        // A present-but-blank version is "found but empty", not "not found".
        let record = RawMetadata::parse("version=\n");
        assert_eq!(record.version.as_deref(), Some(""));
    }

    #[test]
    fn parse_last_duplicate_wins() {
        let record = RawMetadata::parse("version=1.0\nversion=2.0\n");
        assert_eq!(record.version.as_deref(), Some("2.0"));
    }
}
