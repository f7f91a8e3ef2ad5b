//! Resolve build/version metadata for a namespace path
//!
//! Libraries and applications ship a small metadata record (artifact id,
//! release version, source-control build number) alongside their code. This
//! crate resolves that record for a dot-separated namespace path by walking
//! up the namespace hierarchy until a record is found, caches the result,
//! and renders it as a canonical version tag, so a component can report
//! "what version am I" without hard-coding it.
//!
//! # Example
//!
//! ```
//! use version_probe::{MemorySource, Namespace, RawMetadata, VersionResolver};
//!
//! let source = MemorySource::new().with_record(
//!     Namespace::new("org.example.widget")?,
//!     RawMetadata {
//!         artifact: Some("widget".to_string()),
//!         version: Some("1.4.0".to_string()),
//!         build: Some("f3c9".to_string()),
//!     },
//! );
//!
//! let resolver = VersionResolver::new(source);
//!
//! // `org.example.widget.codec` has no record of its own; the walk finds
//! // the one at `org.example.widget` and caches it under the asked path.
//! let version = resolver.resolve("org.example.widget.codec")?;
//! assert_eq!(version.to_string(), "widget-r1.4.0-f3c9");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Metadata that cannot be resolved is not an error: lookups degrade to the
//! shared [`Version::unknown`] sentinel. Only a syntactically invalid
//! namespace path fails.
//!
//! Production deployments usually pair the resolver with an [`FsSource`]
//! pointed at a directory tree that mirrors the namespace hierarchy, where
//! each level may carry a `.version` properties file:
//!
//! ```text
//! metadata/
//! └── org/
//!     └── example/
//!         └── widget/
//!             └── .version      # artifact=widget / version=1.4.0 / build=f3c9
//! ```

pub mod config;
pub mod namespace;
pub mod version;

pub use namespace::{InvalidNamespace, Namespace};
pub use version::error::{ResolveError, SourceError};
pub use version::model::Version;
pub use version::resolver::VersionResolver;
pub use version::source::{MetadataSource, RawMetadata};
pub use version::sources::{FsSource, MemorySource};

/// Resolves the version of the module that invokes the macro.
///
/// `module_path!()` expands at the call site, so the invoking module's own
/// namespace is what gets resolved; no runtime caller introspection is
/// involved. Expands to a `Result<Arc<Version>, ResolveError>` expression.
///
/// ```
/// use version_probe::{FsSource, VersionResolver, own_version};
///
/// let resolver = VersionResolver::new(FsSource::new("/opt/app/metadata"));
/// let my_version = own_version!(resolver)?;
/// println!("running {my_version}");
/// # Ok::<(), version_probe::ResolveError>(())
/// ```
#[macro_export]
macro_rules! own_version {
    ($resolver:expr) => {
        $resolver.resolve_module(::core::module_path!())
    };
}
