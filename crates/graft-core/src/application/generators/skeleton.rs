//! Extension-package scaffold generator.

use tracing::debug;

use crate::application::generators::{Generator, Outcome, emit, templates};
use crate::application::ports::Reporter;
use crate::domain::{PackageMetadata, render, snake_case, source_namespace};
use crate::error::GraftResult;

/// Creates the minimal extension-package scaffold: the root declaration
/// class and the package descriptor. Existing scaffold files are never
/// touched.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkeletonGenerator;

impl SkeletonGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for SkeletonGenerator {
    fn description(&self) -> &'static str {
        "package skeleton"
    }

    fn generate(
        &self,
        metadata: &PackageMetadata,
        reporter: &dyn Reporter,
    ) -> GraftResult<Outcome> {
        let Some(details) = metadata.details() else {
            return Ok(Outcome::default());
        };

        let mut outcome = Outcome::default();
        let class = format!("{}{}", details.application_root(), details.short_name());
        let namespace = source_namespace(details.extended_namespace());

        let class_file = details.extended_directory().join(format!("{class}.php"));
        let class_content = render(
            templates::BUNDLE_CLASS,
            &[("namespace", namespace.as_str()), ("class", class.as_str())],
        );
        emit(&mut outcome, reporter, &class, &class_file, &class_content)?;

        // composer.json autoload keys escape backslashes twice over.
        let autoload = format!("{}\\\\", namespace.replace('\\', "\\\\"));
        let slug = format!(
            "{}/{}",
            details.vendor().to_lowercase(),
            snake_case(details.short_name()).replace('_', "-"),
        );
        let descriptor_file = details.extended_directory().join("composer.json");
        let descriptor_content = render(
            templates::PACKAGE_DESCRIPTOR,
            &[
                ("slug", slug.as_str()),
                ("package", details.short_name()),
                ("autoload", autoload.as_str()),
            ],
        );
        emit(
            &mut outcome,
            reporter,
            "composer.json",
            &descriptor_file,
            &descriptor_content,
        )?;

        debug!(package = details.short_name(), ?outcome, "skeleton generated");
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

    fn resolved(dest: &Path) -> PackageMetadata {
        let config = GenerateConfig::new(dest, "Application.:vendor", "").unwrap();
        PackageMetadata::resolve(
            PackageIdentity::new("Sonata.AcmeBundle.SonataAcmeBundle", "/vendor/acme"),
            &config,
        )
    }

    #[test]
    fn writes_root_declaration_and_descriptor() {
        let temp = TempDir::new().unwrap();
        let metadata = resolved(temp.path());

        let outcome = SkeletonGenerator::new()
            .generate(&metadata, &NullReporter)
            .unwrap();
        assert_eq!(outcome.written, 2);
        assert_eq!(outcome.skipped, 0);

        let dir = metadata.details().unwrap().extended_directory().to_path_buf();
        let class = fs::read_to_string(dir.join("ApplicationSonataAcmeBundle.php")).unwrap();
        assert!(class.contains("namespace Application\\Sonata\\AcmeBundle;"));
        assert!(class.contains("class ApplicationSonataAcmeBundle extends Bundle"));

        let descriptor = fs::read_to_string(dir.join("composer.json")).unwrap();
        assert!(descriptor.contains("\"sonata/sonata-acme-bundle\""));
        assert!(descriptor.contains("\"Application\\\\Sonata\\\\AcmeBundle\\\\\""));
    }

    #[test]
    fn existing_scaffold_is_preserved() {
        let temp = TempDir::new().unwrap();
        let metadata = resolved(temp.path());
        let generator = SkeletonGenerator::new();

        generator.generate(&metadata, &NullReporter).unwrap();
        let class_file = metadata
            .details()
            .unwrap()
            .extended_directory()
            .join("ApplicationSonataAcmeBundle.php");
        fs::write(&class_file, "customized").unwrap();

        let outcome = generator.generate(&metadata, &NullReporter).unwrap();
        assert_eq!(outcome.written, 0);
        assert_eq!(outcome.skipped, 2);
        assert_eq!(fs::read_to_string(&class_file).unwrap(), "customized");
    }

    #[test]
    fn unresolved_metadata_is_a_no_op() {
        let config = GenerateConfig::new(Path::new("/dest"), "Application.:vendor", "").unwrap();
        let metadata = PackageMetadata::resolve(
            PackageIdentity::new("Symfony.Bundle.NotExtendableBundle", "/vendor/x"),
            &config,
        );

        let outcome = SkeletonGenerator::new()
            .generate(&metadata, &NullReporter)
            .unwrap();
        assert_eq!(outcome, Outcome::default());
    }
}
