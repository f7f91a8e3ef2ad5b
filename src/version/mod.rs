//! Version metadata resolution layer
//!
//! This module provides the core functionality for resolving, caching and
//! rendering build/version metadata attached to namespace paths.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Source    │────▶│    Cache    │◀────│  Resolver   │
//! │   (load)    │     │  (storage)  │     │   (walk)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       │
//!        ▼                                       ▼
//! ┌─────────────┐                         ┌─────────────┐
//! │   Sources   │                         │    Model    │
//! │ (fs,memory) │                         │ (value obj) │
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cache`]: concurrent namespace → version map with first-insert-wins
//!   population
//! - [`model`]: the immutable [`model::Version`] value object and its tag
//!   derivation
//! - [`resolver`]: the ancestor-walking lookup over a metadata source
//! - [`source`]: the [`source::MetadataSource`] collaborator trait and raw
//!   record type
//! - [`sources`]: concrete source implementations (filesystem, in-memory)
//! - [`error`]: error types for resolution and source access

pub mod cache;
pub mod error;
pub mod model;
pub mod resolver;
pub mod source;
pub mod sources;
