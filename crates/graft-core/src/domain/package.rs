//! Package identity and resolved metadata.
//!
//! A package is extendable when it lives outside the application namespace
//! and the host framework namespace, and valid when it follows the
//! `Vendor.ShortName.VendorShortName` convention. Everything the generators
//! need (vendor, namespaces, target directory, mapping descriptors) is
//! derived here, once, from the identity and the run configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::config::{GenerateConfig, NAMESPACE_SEPARATOR, VENDOR_TOKEN};
use crate::domain::mapping::{MappingDescriptor, MappingKind};

/// Namespace prefix reserved by the host framework. Packages under it are
/// never extension candidates.
pub const RESERVED_NAMESPACE: &str = "Symfony";

/// An installed package as reported by the package registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageIdentity {
    /// Fully-qualified, dot-separated name, e.g.
    /// `Sonata.AcmeBundle.SonataAcmeBundle`.
    #[serde(rename = "identity")]
    fully_qualified_name: String,
    /// Filesystem location of the installed package.
    #[serde(rename = "path")]
    install_path: PathBuf,
}

impl PackageIdentity {
    pub fn new(fully_qualified_name: impl Into<String>, install_path: impl Into<PathBuf>) -> Self {
        Self {
            fully_qualified_name: fully_qualified_name.into(),
            install_path: install_path.into(),
        }
    }

    pub fn fully_qualified_name(&self) -> &str {
        &self.fully_qualified_name
    }

    /// Short name used for lookups: the last namespace segment.
    pub fn name(&self) -> &str {
        self.fully_qualified_name
            .rsplit(NAMESPACE_SEPARATOR)
            .next()
            .unwrap_or(&self.fully_qualified_name)
    }

    pub fn install_path(&self) -> &Path {
        &self.install_path
    }
}

/// Resolution result for one installed package.
///
/// Non-extendable and structurally invalid packages still yield metadata so
/// the orchestrator can report a skip reason; derived details exist only for
/// packages that passed both checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    identity: PackageIdentity,
    extendable: bool,
    details: Option<PackageDetails>,
}

/// Derived naming and location data for a valid, extendable package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageDetails {
    vendor: String,
    short_name: String,
    namespace: String,
    extended_namespace: String,
    extended_directory: PathBuf,
    application_root: String,
    relational: MappingDescriptor,
    document: MappingDescriptor,
    content_repository: MappingDescriptor,
}

impl PackageMetadata {
    /// Resolve an installed package against the run configuration.
    ///
    /// Checks run in order: extendability first (no derivation happens for
    /// packages inside the application or framework namespaces), then the
    /// three-segment structural convention.
    pub fn resolve(identity: PackageIdentity, config: &GenerateConfig) -> Self {
        if !is_extendable(identity.fully_qualified_name(), config) {
            return Self {
                identity,
                extendable: false,
                details: None,
            };
        }

        let details = derive_details(&identity, config);
        Self {
            identity,
            extendable: true,
            details,
        }
    }

    pub fn identity(&self) -> &PackageIdentity {
        &self.identity
    }

    /// `false` for packages inside the configured application namespace or
    /// the reserved framework namespace.
    pub fn is_extendable(&self) -> bool {
        self.extendable
    }

    /// `true` only when the package is extendable and follows the
    /// `Vendor.ShortName.VendorShortName` convention.
    pub fn is_valid(&self) -> bool {
        self.details.is_some()
    }

    pub fn details(&self) -> Option<&PackageDetails> {
        self.details.as_ref()
    }
}

impl PackageDetails {
    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    /// Last segment of the identity, e.g. `SonataAcmeBundle`.
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Namespace of the original package, e.g. `Sonata.AcmeBundle`.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Namespace of the generated extension, e.g.
    /// `Application.Sonata.AcmeBundle`.
    pub fn extended_namespace(&self) -> &str {
        &self.extended_namespace
    }

    /// Directory the extension scaffold is written to.
    pub fn extended_directory(&self) -> &Path {
        &self.extended_directory
    }

    /// First segment of the configured namespace template.
    pub fn application_root(&self) -> &str {
        &self.application_root
    }

    pub fn relational(&self) -> &MappingDescriptor {
        &self.relational
    }

    pub fn document(&self) -> &MappingDescriptor {
        &self.document
    }

    pub fn content_repository(&self) -> &MappingDescriptor {
        &self.content_repository
    }

    pub fn descriptor(&self, kind: MappingKind) -> &MappingDescriptor {
        match kind {
            MappingKind::Relational => &self.relational,
            MappingKind::Document => &self.document,
            MappingKind::ContentRepository => &self.content_repository,
        }
    }

    /// The three descriptors in generation order.
    pub fn descriptors(&self) -> [&MappingDescriptor; 3] {
        [&self.relational, &self.document, &self.content_repository]
    }
}

/// Literal substring prefix comparison.
///
/// This deliberately does not check segment boundaries: a package named
/// `VendorX.CmsBundle...` counts as inside a configured `Vendor` namespace
/// even when the operator meant `Vendor` alone. See the quirk test below.
fn is_extendable(fully_qualified_name: &str, config: &GenerateConfig) -> bool {
    !(fully_qualified_name.starts_with(config.namespace())
        || fully_qualified_name.starts_with(RESERVED_NAMESPACE))
}

fn derive_details(identity: &PackageIdentity, config: &GenerateConfig) -> Option<PackageDetails> {
    let segments: Vec<&str> = identity
        .fully_qualified_name()
        .split(NAMESPACE_SEPARATOR)
        .collect();

    if segments.len() != 3 {
        return None;
    }
    if format!("{}{}", segments[0], segments[1]) != segments[2] {
        return None;
    }

    let vendor = segments[0];
    let extended_directory = PathBuf::from(format!(
        "{}{}{}",
        config.application_dir().replace(VENDOR_TOKEN, vendor),
        std::path::MAIN_SEPARATOR,
        segments[1],
    ));
    let extended_namespace = format!(
        "{}{}{NAMESPACE_SEPARATOR}{}",
        config.namespace_prefix(),
        config.namespace().replace(VENDOR_TOKEN, vendor),
        segments[1],
    );

    Some(PackageDetails {
        vendor: vendor.to_owned(),
        short_name: segments[2].to_owned(),
        namespace: format!("{vendor}{NAMESPACE_SEPARATOR}{}", segments[1]),
        extended_namespace,
        application_root: config.application_root().to_owned(),
        relational: MappingDescriptor::new(
            MappingKind::Relational,
            identity.install_path(),
            &extended_directory,
        ),
        document: MappingDescriptor::new(
            MappingKind::Document,
            identity.install_path(),
            &extended_directory,
        ),
        content_repository: MappingDescriptor::new(
            MappingKind::ContentRepository,
            identity.install_path(),
            &extended_directory,
        ),
        extended_directory,
    })
}
