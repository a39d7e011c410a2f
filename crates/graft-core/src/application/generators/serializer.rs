//! Serializer descriptor generator.

use tracing::debug;

use crate::application::generators::{Generator, Outcome, emit, templates};
use crate::application::ports::Reporter;
use crate::domain::{MappingKind, PackageMetadata, render, snake_case, source_namespace};
use crate::error::GraftResult;

/// Renders one serializer descriptor per mapped name, across all three
/// mapping technologies. Relational names use the entity template; document
/// and content-repository names share the document template.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerializerGenerator;

impl SerializerGenerator {
    pub fn new() -> Self {
        Self
    }

    const fn template_for(kind: MappingKind) -> &'static str {
        match kind {
            MappingKind::Relational => templates::ENTITY_SERIALIZER,
            MappingKind::Document | MappingKind::ContentRepository => {
                templates::DOCUMENT_SERIALIZER
            }
        }
    }
}

impl Generator for SerializerGenerator {
    fn description(&self) -> &'static str {
        "serializer config"
    }

    fn generate(
        &self,
        metadata: &PackageMetadata,
        reporter: &dyn Reporter,
    ) -> GraftResult<Outcome> {
        let Some(details) = metadata.details() else {
            return Ok(Outcome::default());
        };

        let namespace = source_namespace(details.extended_namespace());
        let mut outcome = Outcome::default();

        for descriptor in details.descriptors() {
            let names = descriptor.entity_names();
            if names.is_empty() {
                continue;
            }

            let kind = descriptor.kind();
            reporter.report(&format!(
                " - generating {} serializer files",
                kind.label()
            ));

            for name in names {
                let root_name = snake_case(&name);
                let content = render(
                    Self::template_for(kind),
                    &[
                        ("name", name.as_str()),
                        ("namespace", namespace.as_str()),
                        ("root_name", root_name.as_str()),
                    ],
                );
                let dest = descriptor
                    .dest_serializer_dir()
                    .join(format!("{}.{name}.xml", kind.serializer_prefix()));
                emit(&mut outcome, reporter, &name, &dest, &content)?;
            }
        }

        debug!(package = details.short_name(), ?outcome, "serializer files generated");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GenerateConfig, PackageIdentity};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    struct NullReporter;
    impl Reporter for NullReporter {
        fn report(&self, _line: &str) {}
    }

    fn fixture_package(root: &Path) {
        let mapping_dir = root.join("Resources/config/doctrine");
        fs::create_dir_all(&mapping_dir).unwrap();
        fs::write(mapping_dir.join("Block.orm.xml.skeleton"), "").unwrap();
        fs::write(mapping_dir.join("BlockEntity.phpcr.xml.skeleton"), "").unwrap();
    }

    fn resolved(source: &Path, dest: &Path) -> PackageMetadata {
        let config = GenerateConfig::new(dest, "Application.:vendor", "").unwrap();
        PackageMetadata::resolve(
            PackageIdentity::new("Sonata.AcmeBundle.SonataAcmeBundle", source),
            &config,
        )
    }

    #[test]
    fn writes_one_descriptor_per_name_per_technology() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        fixture_package(source.path());
        let metadata = resolved(source.path(), dest.path());

        let outcome = SerializerGenerator::new()
            .generate(&metadata, &NullReporter)
            .unwrap();
        assert_eq!(outcome.written, 2);

        let serializer_dir = metadata
            .details()
            .unwrap()
            .relational()
            .dest_serializer_dir()
            .to_path_buf();

        let entity = fs::read_to_string(serializer_dir.join("Entity.Block.xml")).unwrap();
        assert!(entity.contains("Application\\Sonata\\AcmeBundle\\Entity\\Block"));
        assert!(entity.contains("xml-root-name=\"block\""));

        let document =
            fs::read_to_string(serializer_dir.join("Document.BlockEntity.xml")).unwrap();
        assert!(document.contains("Application\\Sonata\\AcmeBundle\\Document\\BlockEntity"));
        assert!(document.contains("xml-root-name=\"block_entity\""));
    }

    #[test]
    fn existing_descriptors_are_skipped() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        fixture_package(source.path());
        let metadata = resolved(source.path(), dest.path());
        let generator = SerializerGenerator::new();

        generator.generate(&metadata, &NullReporter).unwrap();
        let outcome = generator.generate(&metadata, &NullReporter).unwrap();
        assert_eq!(outcome.written, 0);
        assert_eq!(outcome.skipped, 2);
    }
}
