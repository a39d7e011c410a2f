//! Per-technology extension generator.
//!
//! One instance runs per mapping technology. For each technology it
//! materialises three artifact families from the source package: extension
//! type stubs (one per mapped name), mapping descriptors (skeleton files
//! with the `.skeleton` suffix stripped), and repository stubs.

use std::fs;

use tracing::debug;

use crate::application::error::ApplicationError;
use crate::application::generators::{Generator, Outcome, emit, templates};
use crate::application::ports::Reporter;
use crate::domain::{
    MappingDescriptor, MappingKind, PackageDetails, PackageMetadata, render, source_namespace,
};
use crate::error::GraftResult;

/// Scaffolds extension artifacts for one mapping technology.
#[derive(Debug, Clone, Copy)]
pub struct MappingGenerator {
    kind: MappingKind,
}

impl MappingGenerator {
    pub const fn relational() -> Self {
        Self {
            kind: MappingKind::Relational,
        }
    }

    pub const fn document() -> Self {
        Self {
            kind: MappingKind::Document,
        }
    }

    pub const fn content_repository() -> Self {
        Self {
            kind: MappingKind::ContentRepository,
        }
    }

    fn generate_type_stubs(
        &self,
        details: &PackageDetails,
        descriptor: &MappingDescriptor,
        reporter: &dyn Reporter,
        outcome: &mut Outcome,
    ) -> Result<(), ApplicationError> {
        let subdir = self.kind.code_subdir();
        let namespace =
            source_namespace(&format!("{}.{}", details.extended_namespace(), subdir));

        for name in descriptor.entity_names() {
            let base = source_namespace(&format!("{}.{}.{}", details.namespace(), subdir, name));
            let content = render(
                templates::EXTENSION_CLASS,
                &[
                    ("namespace", namespace.as_str()),
                    ("base", base.as_str()),
                    ("name", name.as_str()),
                ],
            );
            let dest = descriptor.dest_code_dir().join(format!("{name}.php"));
            emit(outcome, reporter, &name, &dest, &content)?;
        }
        Ok(())
    }

    fn generate_mapping_descriptors(
        &self,
        details: &PackageDetails,
        descriptor: &MappingDescriptor,
        reporter: &dyn Reporter,
        outcome: &mut Outcome,
    ) -> Result<(), ApplicationError> {
        let namespace = source_namespace(details.namespace());
        let extended = source_namespace(details.extended_namespace());

        for file in descriptor.mapping_files() {
            let dest_name = file
                .base_name
                .strip_suffix(".skeleton")
                .unwrap_or(&file.base_name);
            let name = file.base_name.split('.').next().unwrap_or_default();

            let source = fs::read_to_string(&file.absolute_path).map_err(|e| {
                ApplicationError::Read {
                    path: file.absolute_path.clone(),
                    source: e,
                }
            })?;
            let content = render(
                &source,
                &[
                    ("namespace", namespace.as_str()),
                    ("extended_namespace", extended.as_str()),
                    ("name", name),
                ],
            );
            let dest = descriptor.dest_mapping_dir().join(dest_name);
            emit(outcome, reporter, dest_name, &dest, &content)?;
        }
        Ok(())
    }

    fn generate_repository_stubs(
        &self,
        details: &PackageDetails,
        descriptor: &MappingDescriptor,
        reporter: &dyn Reporter,
        outcome: &mut Outcome,
    ) -> Result<(), ApplicationError> {
        let subdir = self.kind.code_subdir();
        let namespace =
            source_namespace(&format!("{}.{}", details.extended_namespace(), subdir));

        for file in descriptor.repository_files() {
            let Some(class) = file.base_name.strip_suffix(".php") else {
                continue;
            };
            let base = source_namespace(&format!("{}.{}.{}", details.namespace(), subdir, class));
            let content = render(
                templates::REPOSITORY_CLASS,
                &[
                    ("namespace", namespace.as_str()),
                    ("base", base.as_str()),
                    ("name", class),
                ],
            );
            let dest = descriptor.dest_code_dir().join(&file.base_name);
            emit(outcome, reporter, class, &dest, &content)?;
        }
        Ok(())
    }
}

impl Generator for MappingGenerator {
    fn description(&self) -> &'static str {
        match self.kind {
            MappingKind::Relational => "relational mappings",
            MappingKind::Document => "document mappings",
            MappingKind::ContentRepository => "content-repository mappings",
        }
    }

    fn generate(
        &self,
        metadata: &PackageMetadata,
        reporter: &dyn Reporter,
    ) -> GraftResult<Outcome> {
        let Some(details) = metadata.details() else {
            return Ok(Outcome::default());
        };

        let descriptor = details.descriptor(self.kind);
        let mut outcome = Outcome::default();

        self.generate_type_stubs(details, descriptor, reporter, &mut outcome)?;
        self.generate_mapping_descriptors(details, descriptor, reporter, &mut outcome)?;
        self.generate_repository_stubs(details, descriptor, reporter, &mut outcome)?;

        debug!(
            package = details.short_name(),
            kind = self.kind.label(),
            ?outcome,
            "mapping artifacts generated"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GenerateConfig, PackageIdentity};
    use std::path::Path;
    use tempfile::TempDir;

    struct NullReporter;
    impl Reporter for NullReporter {
        fn report(&self, _line: &str) {}
    }

    /// A source package with two relational mappings and one repository.
    fn fixture_package(root: &Path) {
        let mapping_dir = root.join("Resources/config/doctrine");
        fs::create_dir_all(&mapping_dir).unwrap();
        fs::write(
            mapping_dir.join("Block.orm.xml.skeleton"),
            "<entity name=\"{{ extended_namespace }}\\Entity\\{{ name }}\"/>\n",
        )
        .unwrap();
        fs::write(mapping_dir.join("Page.orm.xml.skeleton"), "<entity/>\n").unwrap();

        let entity_dir = root.join("Entity");
        fs::create_dir_all(&entity_dir).unwrap();
        fs::write(entity_dir.join("BlockRepository.php"), "<?php\n").unwrap();
    }

    fn resolved(source: &Path, dest: &Path) -> PackageMetadata {
        let config = GenerateConfig::new(dest, "Application.:vendor", "").unwrap();
        PackageMetadata::resolve(
            PackageIdentity::new("Sonata.AcmeBundle.SonataAcmeBundle", source),
            &config,
        )
    }

    #[test]
    fn generates_stubs_mappings_and_repositories() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        fixture_package(source.path());
        let metadata = resolved(source.path(), dest.path());

        let outcome = MappingGenerator::relational()
            .generate(&metadata, &NullReporter)
            .unwrap();
        // Block + Page stubs, two mapping files, one repository.
        assert_eq!(outcome.written, 5);

        let extension_dir = metadata.details().unwrap().extended_directory().to_path_buf();
        let block = fs::read_to_string(extension_dir.join("Entity/Block.php")).unwrap();
        assert!(block.contains("namespace Application\\Sonata\\AcmeBundle\\Entity;"));
        assert!(block.contains("use Sonata\\AcmeBundle\\Entity\\Block as BaseBlock;"));
        assert!(block.contains("class Block extends BaseBlock"));

        let mapping = fs::read_to_string(
            extension_dir.join("Resources/config/doctrine/Block.orm.xml"),
        )
        .unwrap();
        assert!(mapping.contains("Application\\Sonata\\AcmeBundle\\Entity\\Block"));

        let repository =
            fs::read_to_string(extension_dir.join("Entity/BlockRepository.php")).unwrap();
        assert!(repository.contains("class BlockRepository extends BaseBlockRepository"));
    }

    #[test]
    fn second_run_skips_everything_and_preserves_edits() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        fixture_package(source.path());
        let metadata = resolved(source.path(), dest.path());
        let generator = MappingGenerator::relational();

        generator.generate(&metadata, &NullReporter).unwrap();
        let stub = metadata
            .details()
            .unwrap()
            .extended_directory()
            .join("Entity/Block.php");
        fs::write(&stub, "manual edit").unwrap();

        let outcome = generator.generate(&metadata, &NullReporter).unwrap();
        assert_eq!(outcome.written, 0);
        assert_eq!(outcome.skipped, 5);
        assert_eq!(fs::read_to_string(&stub).unwrap(), "manual edit");
    }

    #[test]
    fn package_without_mappings_yields_empty_outcome() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        let metadata = resolved(source.path(), dest.path());

        let outcome = MappingGenerator::document()
            .generate(&metadata, &NullReporter)
            .unwrap();
        assert_eq!(outcome, Outcome::default());
    }
}
