//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `graft-adapters` crate provides the production implementations; tests
//! substitute static ones.

use crate::application::ApplicationError;
use crate::domain::PackageIdentity;

/// Port for enumerating installed packages.
///
/// Implemented by:
/// - `graft_adapters::registry::ManifestRegistry` (production, TOML manifest)
/// - `graft_adapters::registry::StaticRegistry` (testing/embedding)
///
/// The host application owns package installation; this port is the only
/// thing the core knows about it.
pub trait PackageRegistry: Send + Sync {
    /// Every installed package, with its identity and install path.
    fn installed_packages(&self) -> Result<Vec<PackageIdentity>, ApplicationError>;
}

/// Port for line-oriented progress reporting.
///
/// Implemented by:
/// - the CLI's console reporter (production)
/// - `graft_adapters::reporter::BufferReporter` (testing)
///
/// Reporting is best-effort; implementations swallow their own I/O errors.
pub trait Reporter: Send + Sync {
    /// Emit one status line.
    fn report(&self, line: &str);
}
