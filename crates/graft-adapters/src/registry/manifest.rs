//! TOML package-manifest registry.
//!
//! The manifest stands in for the host application's package enumeration: a
//! flat list of installed packages with their fully-qualified identities and
//! install paths.
//!
//! # `packages.toml` format
//!
//! ```toml
//! [[package]]
//! identity = "Sonata.AcmeBundle.SonataAcmeBundle"
//! path     = "vendor/sonata/acme-bundle"     # relative to the manifest
//!
//! [[package]]
//! identity = "Sonata.PageBundle.SonataPageBundle"
//! path     = "/opt/packages/page-bundle"     # or absolute
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use graft_core::application::ApplicationError;
use graft_core::application::ports::PackageRegistry;
use graft_core::domain::PackageIdentity;

/// Deserialised representation of a `packages.toml` file.
#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default, rename = "package")]
    packages: Vec<PackageIdentity>,
}

/// Production registry reading installed packages from a TOML manifest.
#[derive(Debug, Clone)]
pub struct ManifestRegistry {
    packages: Vec<PackageIdentity>,
}

impl ManifestRegistry {
    /// Load and parse a manifest. Relative install paths are resolved
    /// against the manifest's own directory.
    pub fn load(path: &Path) -> Result<Self, ApplicationError> {
        let raw = fs::read_to_string(path).map_err(|e| ApplicationError::Registry {
            reason: format!("failed to read package manifest '{}': {e}", path.display()),
        })?;

        let manifest: ManifestFile =
            toml::from_str(&raw).map_err(|e| ApplicationError::Registry {
                reason: format!("failed to parse package manifest '{}': {e}", path.display()),
            })?;

        let base = path.parent().unwrap_or(Path::new("."));
        let packages = manifest
            .packages
            .into_iter()
            .map(|package| {
                let install: PathBuf = if package.install_path().is_absolute() {
                    package.install_path().to_path_buf()
                } else {
                    base.join(package.install_path())
                };
                PackageIdentity::new(package.fully_qualified_name(), install)
            })
            .collect::<Vec<_>>();

        debug!(manifest = %path.display(), count = packages.len(), "manifest loaded");
        Ok(Self { packages })
    }
}

impl PackageRegistry for ManifestRegistry {
    fn installed_packages(&self) -> Result<Vec<PackageIdentity>, ApplicationError> {
        Ok(self.packages.clone())
    }
}
