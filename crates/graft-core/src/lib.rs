//! Graft Core - extension scaffolding pipeline
//!
//! This crate provides the domain and application layers for the Graft
//! extension generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            graft-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Service            │
//! │          (GenerateService)              │
//! │    Orchestrates the Generator chain     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: PackageRegistry, Reporter)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     graft-adapters (Infrastructure)     │
//! │   (ManifestRegistry, BufferReporter)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (GenerateConfig, PackageMetadata,      │
//! │   MappingDescriptor, FileDiscovery)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```text
//! // 1. Build the run configuration
//! let config = GenerateConfig::new(Path::new("."), DEFAULT_NAMESPACE_TEMPLATE, "")?;
//!
//! // 2. Use the application service (with an injected registry)
//! let service = GenerateService::new(registry);
//! service.run(&["SonataAcmeBundle".into()], &config, &reporter)?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService, Generator, Outcome, RunSummary,
        ports::{PackageRegistry, Reporter},
    };
    pub use crate::domain::{
        DEFAULT_NAMESPACE_TEMPLATE, DiscoveredFile, GenerateConfig, MappingDescriptor,
        MappingKind, PackageIdentity, PackageMetadata,
    };
    pub use crate::error::{GraftError, GraftResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
