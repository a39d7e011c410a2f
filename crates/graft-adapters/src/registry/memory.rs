//! Static in-memory registry for tests and embedding.

use graft_core::application::ApplicationError;
use graft_core::application::ports::PackageRegistry;
use graft_core::domain::PackageIdentity;

/// A registry backed by a fixed list of packages.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    packages: Vec<PackageIdentity>,
}

impl StaticRegistry {
    pub fn new(packages: Vec<PackageIdentity>) -> Self {
        Self { packages }
    }
}

impl PackageRegistry for StaticRegistry {
    fn installed_packages(&self) -> Result<Vec<PackageIdentity>, ApplicationError> {
        Ok(self.packages.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_the_configured_packages() {
        let registry = StaticRegistry::new(vec![PackageIdentity::new(
            "Sonata.AcmeBundle.SonataAcmeBundle",
            "/vendor/acme",
        )]);
        let packages = registry.installed_packages().unwrap();
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].name(), "SonataAcmeBundle");
    }

    #[test]
    fn empty_registry_is_fine() {
        assert!(StaticRegistry::default().installed_packages().unwrap().is_empty());
    }
}
