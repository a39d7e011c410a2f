//! End-to-end tests for the generation pipeline: a real source package tree
//! on disk, a static registry, and a recording reporter.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::TempDir;

use graft_core::application::ports::{PackageRegistry, Reporter};
use graft_core::application::{ApplicationError, GenerateService};
use graft_core::domain::{GenerateConfig, PackageIdentity};
use graft_core::error::GraftError;

struct StaticPackages(Vec<PackageIdentity>);

impl PackageRegistry for StaticPackages {
    fn installed_packages(&self) -> Result<Vec<PackageIdentity>, ApplicationError> {
        Ok(self.0.clone())
    }
}

#[derive(Default)]
struct RecordingReporter {
    lines: Mutex<Vec<String>>,
}

impl Reporter for RecordingReporter {
    fn report(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_owned());
    }
}

impl RecordingReporter {
    fn contains(&self, needle: &str) -> bool {
        self.lines.lock().unwrap().iter().any(|l| l.contains(needle))
    }
}

/// Lay out an installed package following the expected conventions.
fn install_acme_package(root: &Path) -> PathBuf {
    let package = root.join("vendor/sonata/acme-bundle");
    let mapping_dir = package.join("Resources/config/doctrine");
    fs::create_dir_all(&mapping_dir).unwrap();
    fs::write(mapping_dir.join("Block.orm.xml.skeleton"), "<entity/>\n").unwrap();
    fs::write(mapping_dir.join("Page.orm.xml.skeleton"), "<entity/>\n").unwrap();

    let entity_dir = package.join("Entity");
    fs::create_dir_all(&entity_dir).unwrap();
    fs::write(entity_dir.join("BlockRepository.php"), "<?php\n").unwrap();

    package
}

fn acme_service(package: &Path) -> GenerateService {
    GenerateService::new(Box::new(StaticPackages(vec![PackageIdentity::new(
        "Sonata.AcmeBundle.SonataAcmeBundle",
        package,
    )])))
}

fn collect_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir(root);
    files.sort();
    files
}

fn walkdir(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    if let Ok(entries) = fs::read_dir(root) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                out.extend(walkdir(&path));
            } else {
                out.push(path);
            }
        }
    }
    out
}

#[test]
fn full_run_scaffolds_the_extension_tree() {
    let temp = TempDir::new().unwrap();
    let package = install_acme_package(temp.path());
    let dest = temp.path().join("src");
    fs::create_dir_all(&dest).unwrap();

    let config = GenerateConfig::new(&dest, "Application.:vendor", "").unwrap();
    let reporter = RecordingReporter::default();
    let summary = acme_service(&package)
        .run(&["SonataAcmeBundle".into()], &config, &reporter)
        .unwrap();

    assert_eq!(summary.processed, 1);
    assert_eq!(summary.ignored, 0);
    assert_eq!(summary.skipped, 0);

    let extension = dest.join("Application/Sonata/AcmeBundle");
    for expected in [
        "ApplicationSonataAcmeBundle.php",
        "composer.json",
        "Entity/Block.php",
        "Entity/Page.php",
        "Entity/BlockRepository.php",
        "Resources/config/doctrine/Block.orm.xml",
        "Resources/config/doctrine/Page.orm.xml",
        "Resources/config/serializer/Entity.Block.xml",
        "Resources/config/serializer/Entity.Page.xml",
    ] {
        assert!(
            extension.join(expected).is_file(),
            "missing artifact: {expected}"
        );
    }
    assert_eq!(summary.written, 9);

    let serializer =
        fs::read_to_string(extension.join("Resources/config/serializer/Entity.Block.xml")).unwrap();
    assert!(serializer.contains("Application\\Sonata\\AcmeBundle"));

    assert!(reporter.contains("Processing package skeleton : \"SonataAcmeBundle\""));
    assert!(reporter.contains("Processing relational mappings : \"SonataAcmeBundle\""));
    assert!(reporter.contains("Processing serializer config : \"SonataAcmeBundle\""));
}

#[test]
fn second_run_writes_nothing_and_leaves_files_byte_identical() {
    let temp = TempDir::new().unwrap();
    let package = install_acme_package(temp.path());
    let dest = temp.path().join("src");
    fs::create_dir_all(&dest).unwrap();

    let config = GenerateConfig::new(&dest, "Application.:vendor", "").unwrap();
    let service = acme_service(&package);
    let names = vec!["SonataAcmeBundle".to_string()];

    let first = service.run(&names, &config, &RecordingReporter::default()).unwrap();
    let files = collect_files(&dest);
    let snapshots: Vec<(PathBuf, Vec<u8>)> = files
        .iter()
        .map(|p| (p.clone(), fs::read(p).unwrap()))
        .collect();

    let reporter = RecordingReporter::default();
    let second = service.run(&names, &config, &reporter).unwrap();

    assert_eq!(second.written, 0);
    assert_eq!(second.skipped, first.written);
    assert_eq!(collect_files(&dest), files);
    for (path, before) in snapshots {
        assert_eq!(fs::read(&path).unwrap(), before, "{} changed", path.display());
    }
    assert!(reporter.contains("   ~ Block"));
}

#[test]
fn unknown_package_fails_after_listing_available_ones() {
    let temp = TempDir::new().unwrap();
    let package = install_acme_package(temp.path());
    let dest = temp.path().join("src");
    fs::create_dir_all(&dest).unwrap();

    let config = GenerateConfig::new(&dest, "Application.:vendor", "").unwrap();
    let reporter = RecordingReporter::default();
    let err = acme_service(&package)
        .run(&["FakeBundle".into()], &config, &reporter)
        .unwrap_err();

    match err {
        GraftError::Application(ApplicationError::PackagesNotFound { names }) => {
            assert_eq!(names, vec!["FakeBundle".to_string()]);
        }
        other => panic!("expected PackagesNotFound, got {other:?}"),
    }
    assert!(reporter.contains("- SonataAcmeBundle"));
    assert!(collect_files(&dest).is_empty());
}

#[test]
fn missing_names_are_collected_across_the_whole_run() {
    let temp = TempDir::new().unwrap();
    let package = install_acme_package(temp.path());
    let dest = temp.path().join("src");
    fs::create_dir_all(&dest).unwrap();

    let config = GenerateConfig::new(&dest, "Application.:vendor", "").unwrap();
    let reporter = RecordingReporter::default();
    let err = acme_service(&package)
        .run(
            &["MissingOne".into(), "SonataAcmeBundle".into(), "MissingTwo".into()],
            &config,
            &reporter,
        )
        .unwrap_err();

    // The matched package was still generated before the failure surfaced.
    assert!(dest.join("Application/Sonata/AcmeBundle/composer.json").is_file());
    match err {
        GraftError::Application(ApplicationError::PackagesNotFound { names }) => {
            assert_eq!(names, vec!["MissingOne".to_string(), "MissingTwo".to_string()]);
        }
        other => panic!("expected PackagesNotFound, got {other:?}"),
    }
}

#[test]
fn framework_package_is_ignored_without_failing_the_run() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("src");
    fs::create_dir_all(&dest).unwrap();

    let registry = StaticPackages(vec![PackageIdentity::new(
        "Symfony.Bundle.NotExtendableBundle",
        temp.path().join("vendor/framework"),
    )]);
    let config = GenerateConfig::new(&dest, "Application.:vendor", "").unwrap();
    let reporter = RecordingReporter::default();

    let summary = GenerateService::new(Box::new(registry))
        .run(&["NotExtendableBundle".into()], &config, &reporter)
        .unwrap();

    assert_eq!(summary.ignored, 1);
    assert_eq!(summary.processed, 0);
    assert!(reporter.contains("Ignoring package : \"Symfony.Bundle.NotExtendableBundle\""));
    assert!(collect_files(&dest).is_empty());
}

#[test]
fn structurally_invalid_package_reports_the_violation() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("src");
    fs::create_dir_all(&dest).unwrap();

    let registry = StaticPackages(vec![PackageIdentity::new(
        "Application.Sonata.NotExtendableBundle",
        temp.path().join("vendor/broken"),
    )]);
    let config = GenerateConfig::new(&dest, "Application.:vendor", "").unwrap();
    let reporter = RecordingReporter::default();

    let summary = GenerateService::new(Box::new(registry))
        .run(&["NotExtendableBundle".into()], &config, &reporter)
        .unwrap();

    assert_eq!(summary.ignored, 1);
    assert!(
        reporter.contains("Application.Sonata.NotExtendableBundle : wrong directory structure")
    );
}

#[test]
fn empty_request_lists_extendable_packages() {
    let temp = TempDir::new().unwrap();
    let package = install_acme_package(temp.path());
    let dest = temp.path().join("src");
    fs::create_dir_all(&dest).unwrap();

    let registry = StaticPackages(vec![
        PackageIdentity::new("Sonata.AcmeBundle.SonataAcmeBundle", &package),
        PackageIdentity::new("Symfony.Bundle.FrameworkBundle", temp.path()),
    ]);
    let config = GenerateConfig::new(&dest, "Application.:vendor", "").unwrap();
    let reporter = RecordingReporter::default();

    let summary = GenerateService::new(Box::new(registry))
        .run(&[], &config, &reporter)
        .unwrap();

    assert_eq!(summary, Default::default());
    assert!(reporter.contains("You must provide a package name!"));
    assert!(reporter.contains("- SonataAcmeBundle"));
    assert!(!reporter.contains("- FrameworkBundle"));
    assert!(collect_files(&dest).is_empty());
}
