//! The immutable version metadata value object
//!
//! A [`Version`] carries the artifact identifier, the release version, the
//! optional source-control build number and the version tag derived from the
//! latter two. Values are created once per resolved namespace and never
//! mutated afterwards.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::namespace::Namespace;
use crate::version::error::MetadataError;
use crate::version::source::RawMetadata;

/// Field value used by the unknown sentinel
pub const UNKNOWN_STR: &str = "unknown";

/// Suffix marking a pre-release project version
const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

/// Literal left behind by an unresolved build-time substitution
const PLACEHOLDER_MARKER: &str = "${";

static UNKNOWN: LazyLock<Arc<Version>> = LazyLock::new(|| {
    Arc::new(Version {
        artifact_id: UNKNOWN_STR.to_string(),
        project_version: UNKNOWN_STR.to_string(),
        build_number: String::new(),
        version_tag: UNKNOWN_STR.to_string(),
    })
});

/// Resolved version metadata for one namespace
///
/// Equality and hashing consider `(artifact_id, version_tag)` only: two
/// values with the same artifact and tag are interchangeable regardless of
/// how the tag was assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Version {
    artifact_id: String,
    project_version: String,
    build_number: String,
    version_tag: String,
}

impl Version {
    /// Creates a version from explicit field values.
    ///
    /// `artifact_id` is expected to be a non-empty display name. The project
    /// version is required; a blank one is rejected. A blank build number is
    /// normalized to the empty string. All fields are trimmed.
    pub fn new(
        artifact_id: impl Into<String>,
        project_version: impl Into<String>,
        build_number: impl Into<String>,
    ) -> Result<Self, MetadataError> {
        let artifact_id = artifact_id.into().trim().to_string();
        let project_version = project_version.into().trim().to_string();
        let build_number = build_number.into().trim().to_string();
        if project_version.is_empty() {
            return Err(MetadataError::MissingVersion);
        }
        Ok(Self {
            version_tag: derive_tag(&project_version, &build_number),
            artifact_id,
            project_version,
            build_number,
        })
    }

    /// Builds a version from a raw metadata record resolved for `namespace`.
    ///
    /// A record without a version field fails construction. A record without
    /// an artifact field falls back to the namespace path as the artifact id.
    /// Fields still containing a `${` placeholder are reported and used
    /// verbatim.
    pub(crate) fn from_record(
        namespace: &Namespace,
        record: &RawMetadata,
    ) -> Result<Self, MetadataError> {
        for (field, value) in [
            ("artifact", record.artifact.as_deref()),
            ("version", record.version.as_deref()),
            ("build", record.build.as_deref()),
        ] {
            if value.is_some_and(|v| v.contains(PLACEHOLDER_MARKER)) {
                warn!(
                    namespace = %namespace,
                    field,
                    "unresolved template variable found in metadata record"
                );
            }
        }

        let project_version = record.version.as_deref().map(str::trim).unwrap_or("");
        if project_version.is_empty() {
            return Err(MetadataError::MissingVersion);
        }

        let artifact_id = match record.artifact.as_deref().map(str::trim) {
            Some(artifact) if !artifact.is_empty() => artifact.to_string(),
            _ => {
                warn!(
                    namespace = %namespace,
                    "artifact not defined in metadata record, using namespace path"
                );
                namespace.as_str().to_string()
            }
        };

        let build_number = record.build.as_deref().map(str::trim).unwrap_or("");

        Ok(Self {
            version_tag: derive_tag(project_version, build_number),
            artifact_id,
            project_version: project_version.to_string(),
            build_number: build_number.to_string(),
        })
    }

    /// The shared sentinel for "no metadata could be resolved".
    ///
    /// Every call returns the same allocation, so sentinel results compare
    /// pointer-equal as well as value-equal.
    pub fn unknown() -> Arc<Self> {
        UNKNOWN.clone()
    }

    /// True for the unknown sentinel, false for any resolved version.
    pub fn is_unknown(&self) -> bool {
        self.artifact_id == UNKNOWN_STR && self.version_tag == UNKNOWN_STR
    }

    /// Display name of the delivered unit
    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// Release version as found in the metadata record
    pub fn project_version(&self) -> &str {
        &self.project_version
    }

    /// Source-control build identifier, empty when not provided
    pub fn build_number(&self) -> &str {
        &self.build_number
    }

    /// Canonical tag derived from the project version and build number
    ///
    /// The project version is prefixed with `v` when it ends in `-SNAPSHOT`
    /// and `r` otherwise; a non-blank build number is appended after a dash.
    pub fn version_tag(&self) -> &str {
        &self.version_tag
    }
}

fn derive_tag(project_version: &str, build_number: &str) -> String {
    let decorated = decorate(project_version);
    if build_number.is_empty() {
        decorated
    } else {
        format!("{decorated}-{build_number}")
    }
}

fn decorate(project_version: &str) -> String {
    if project_version.ends_with(SNAPSHOT_SUFFIX) {
        format!("v{project_version}")
    } else {
        format!("r{project_version}")
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.artifact_id == other.artifact_id && self.version_tag == other.version_tag
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.artifact_id.hash(state);
        self.version_tag.hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.artifact_id, self.version_tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use std::collections::hash_map::DefaultHasher;

    fn hash_of(version: &Version) -> u64 {
        let mut hasher = DefaultHasher::new();
        version.hash(&mut hasher);
        hasher.finish()
    }

    fn namespace(path: &str) -> Namespace {
        Namespace::new(path).unwrap()
    }

    #[rstest]
    #[case("1.0.0-SNAPSHOT", "", "v1.0.0-SNAPSHOT")]
    #[case("1.0.0", "a1b2", "r1.0.0-a1b2")]
    #[case("1.0.0", "", "r1.0.0")]
    #[case("0.8-SNAPSHOT", "3a77", "v0.8-SNAPSHOT-3a77")]
    fn version_tag_is_derived_from_version_and_build(
        #[case] project_version: &str,
        #[case] build_number: &str,
        #[case] expected: &str,
    ) {
        let version = Version::new("widget", project_version, build_number).unwrap();
        assert_eq!(version.version_tag(), expected);
    }

    #[test]
    fn new_rejects_blank_project_version() {
        assert_eq!(
            Version::new("widget", "  ", "a1b2"),
            Err(MetadataError::MissingVersion)
        );
    }

    #[test]
    fn new_trims_fields_and_normalizes_blank_build() {
        let version = Version::new(" widget ", " 1.0 ", "  ").unwrap();
        assert_eq!(version.artifact_id(), "widget");
        assert_eq!(version.project_version(), "1.0");
        assert_eq!(version.build_number(), "");
        assert_eq!(version.version_tag(), "r1.0");
    }

    #[test]
    fn display_is_artifact_dash_tag() {
        let version = Version::new("widget", "1.4.0", "f3c9").unwrap();
        assert_eq!(version.to_string(), "widget-r1.4.0-f3c9");

        let snapshot = Version::new("widget", "2.0-SNAPSHOT", "").unwrap();
        assert_eq!(snapshot.to_string(), "widget-v2.0-SNAPSHOT");
    }

    #[test]
    fn equality_considers_artifact_and_tag_only() {
        // Same tag assembled two different ways: once from a build number,
        // once baked into the project version.
        let from_build = Version::new("widget", "1.0", "a1b2").unwrap();
        let from_version = Version::new("widget", "1.0-a1b2", "").unwrap();
        assert_ne!(from_build.build_number(), from_version.build_number());
        assert_eq!(from_build, from_version);
        assert_eq!(hash_of(&from_build), hash_of(&from_version));
    }

    #[rstest]
    #[case("other", "1.0", "a1b2")]
    #[case("widget", "1.1", "a1b2")]
    #[case("widget", "1.0", "a1b3")]
    fn differing_artifact_or_tag_is_not_equal(
        #[case] artifact: &str,
        #[case] project_version: &str,
        #[case] build: &str,
    ) {
        let base = Version::new("widget", "1.0", "a1b2").unwrap();
        let other = Version::new(artifact, project_version, build).unwrap();
        assert_ne!(base, other);
    }

    #[test]
    fn unknown_is_a_shared_sentinel() {
        let a = Version::unknown();
        let b = Version::unknown();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(a.is_unknown());
        assert_eq!(a.to_string(), "unknown-unknown");
    }

    #[test]
    fn resolved_versions_are_not_unknown() {
        let version = Version::new("widget", "1.0", "").unwrap();
        assert!(!version.is_unknown());

        // "unknown" fields alone are not enough, the tag never matches.
        let lookalike = Version::new(UNKNOWN_STR, UNKNOWN_STR, "").unwrap();
        assert!(!lookalike.is_unknown());
    }

    #[test]
    fn from_record_defaults_artifact_to_namespace_path() {
        let record = RawMetadata {
            artifact: None,
            version: Some("1.0".to_string()),
            build: None,
        };
        let version = Version::from_record(&namespace("p.q"), &record).unwrap();
        assert_eq!(version.artifact_id(), "p.q");
        assert_eq!(version.version_tag(), "r1.0");
    }

    #[test]
    fn from_record_fails_without_version() {
        let record = RawMetadata {
            artifact: Some("widget".to_string()),
            version: None,
            build: Some("a1b2".to_string()),
        };
        assert_eq!(
            Version::from_record(&namespace("p.q"), &record),
            Err(MetadataError::MissingVersion)
        );

        let blank = RawMetadata {
            version: Some("   ".to_string()),
            ..record
        };
        assert_eq!(
            Version::from_record(&namespace("p.q"), &blank),
            Err(MetadataError::MissingVersion)
        );
    }

    #[test]
    fn from_record_keeps_leaked_placeholders_verbatim() {
        let record = RawMetadata {
            artifact: Some("${project.artifactId}".to_string()),
            version: Some("${project.version}".to_string()),
            build: Some("${buildNumber}".to_string()),
        };
        let version = Version::from_record(&namespace("net.tab"), &record).unwrap();
        assert_eq!(version.artifact_id(), "${project.artifactId}");
        assert_eq!(version.project_version(), "${project.version}");
        assert_eq!(version.build_number(), "${buildNumber}");
        assert_eq!(version.version_tag(), "r${project.version}-${buildNumber}");
    }

    #[test]
    fn serde_round_trip_preserves_equality() {
        let version = Version::new("widget", "1.4.0-SNAPSHOT", "f3c9").unwrap();
        let json = serde_json::to_string(&version).unwrap();
        let restored: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(version, restored);
        assert_eq!(restored.version_tag(), "v1.4.0-SNAPSHOT-f3c9");
    }
}
