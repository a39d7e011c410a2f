//! Generation orchestrator.
//!
//! Resolves each requested package against the registry, reports skip
//! reasons, and drives the generator chain in its fixed order: skeleton,
//! relational, document, content-repository, serializer.

use tracing::{info, instrument};

use crate::application::error::ApplicationError;
use crate::application::generators::{
    Generator, MappingGenerator, Outcome, SerializerGenerator, SkeletonGenerator,
};
use crate::application::ports::{PackageRegistry, Reporter};
use crate::domain::{GenerateConfig, PackageIdentity, PackageMetadata};
use crate::error::GraftResult;

/// Aggregate result of one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct RunSummary {
    /// Packages that went through the full generator chain.
    pub processed: usize,
    /// Packages skipped as non-extendable or structurally invalid.
    pub ignored: usize,
    /// Artifacts written.
    pub written: usize,
    /// Artifacts already present and left alone.
    pub skipped: usize,
}

/// The generation orchestrator.
pub struct GenerateService {
    registry: Box<dyn PackageRegistry>,
    generators: Vec<Box<dyn Generator>>,
}

impl GenerateService {
    /// Build a service with the default generator chain.
    pub fn new(registry: Box<dyn PackageRegistry>) -> Self {
        Self::with_generators(
            registry,
            vec![
                Box::new(SkeletonGenerator::new()),
                Box::new(MappingGenerator::relational()),
                Box::new(MappingGenerator::document()),
                Box::new(MappingGenerator::content_repository()),
                Box::new(SerializerGenerator::new()),
            ],
        )
    }

    /// Build a service with an explicit generator chain (tests, embedding).
    pub fn with_generators(
        registry: Box<dyn PackageRegistry>,
        generators: Vec<Box<dyn Generator>>,
    ) -> Self {
        Self {
            registry,
            generators,
        }
    }

    /// Generate extensions for the requested packages.
    ///
    /// With no names, the extendable installed packages are listed as a hint
    /// and the run succeeds. Names without a matching installed package are
    /// collected across the whole run and raised as one fatal
    /// [`ApplicationError::PackagesNotFound`] afterwards.
    #[instrument(skip_all, fields(requested = package_names.len()))]
    pub fn run(
        &self,
        package_names: &[String],
        config: &GenerateConfig,
        reporter: &dyn Reporter,
    ) -> GraftResult<RunSummary> {
        let installed = self.registry.installed_packages()?;
        info!(installed = installed.len(), "registry consulted");

        if package_names.is_empty() {
            reporter.report("");
            reporter.report("You must provide a package name!");
            self.list_extendable(&installed, config, reporter);
            return Ok(RunSummary::default());
        }

        let mut summary = RunSummary::default();
        let mut missing = Vec::new();

        for requested in package_names {
            let mut matched = false;
            for identity in &installed {
                if identity.name() != requested {
                    continue;
                }
                matched = true;
                self.generate_package(identity.clone(), config, reporter, &mut summary)?;
            }
            if !matched {
                missing.push(requested.clone());
            }
        }

        if !missing.is_empty() {
            self.list_extendable(&installed, config, reporter);
            return Err(ApplicationError::PackagesNotFound { names: missing }.into());
        }

        info!(?summary, "run finished");
        Ok(summary)
    }

    fn generate_package(
        &self,
        identity: PackageIdentity,
        config: &GenerateConfig,
        reporter: &dyn Reporter,
        summary: &mut RunSummary,
    ) -> GraftResult<()> {
        let metadata = PackageMetadata::resolve(identity, config);
        let fqn = metadata.identity().fully_qualified_name();

        if !metadata.is_extendable() {
            reporter.report(&format!("Ignoring package : \"{fqn}\""));
            summary.ignored += 1;
            return Ok(());
        }
        if !metadata.is_valid() {
            reporter.report(&format!("{fqn} : wrong directory structure"));
            summary.ignored += 1;
            return Ok(());
        }

        let name = metadata.identity().name().to_owned();
        let mut total = Outcome::default();
        for generator in &self.generators {
            reporter.report(&format!(
                "Processing {} : \"{name}\"",
                generator.description()
            ));
            total.merge(generator.generate(&metadata, reporter)?);
        }

        summary.processed += 1;
        summary.written += total.written;
        summary.skipped += total.skipped;
        reporter.report("");
        Ok(())
    }

    /// Hint listing shown for empty and unresolvable requests.
    fn list_extendable(
        &self,
        installed: &[PackageIdentity],
        config: &GenerateConfig,
        reporter: &dyn Reporter,
    ) {
        reporter.report("");
        reporter.report("  Packages available :");
        for identity in installed {
            let metadata = PackageMetadata::resolve(identity.clone(), config);
            if metadata.is_extendable() {
                reporter.report(&format!("     - {}", identity.name()));
            }
        }
        reporter.report("");
    }
}
