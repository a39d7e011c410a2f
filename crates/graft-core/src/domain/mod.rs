//! Core domain layer for Graft.
//!
//! Pure metadata resolution: naming-convention validation, derived
//! application-space locations and namespaces, and suffix-based discovery of
//! mapping artifacts. No writes happen here; generation lives in the
//! application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **Read-only I/O**: discovery scans directories, nothing else
//! - **Immutable values**: everything is derived once and never mutated

pub mod config;
pub mod discovery;
pub mod error;
pub mod mapping;
pub mod package;
pub mod render;

// Re-exports for convenience
pub use config::{
    DEFAULT_NAMESPACE_TEMPLATE, GenerateConfig, NAMESPACE_SEPARATOR, VENDOR_TOKEN,
};
pub use discovery::{DiscoveredFile, find_by_suffix};
pub use error::DomainError;
pub use mapping::{MappingDescriptor, MappingKind, REPOSITORY_SUFFIX};
pub use package::{PackageDetails, PackageIdentity, PackageMetadata, RESERVED_NAMESPACE};
pub use render::{render, snake_case, source_namespace};
