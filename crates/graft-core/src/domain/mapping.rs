//! Mapping technology descriptors.
//!
//! One [`MappingDescriptor`] exists per supported mapping technology per
//! resolved package. A descriptor is pure derived data (five directories
//! computed by concatenation) plus discovery operations over the source
//! side. Mapping files are opaque: only their names are interpreted.

use std::path::{Path, PathBuf};

use crate::domain::discovery::{self, DiscoveredFile};

/// Subdirectory holding mapping descriptor files, on both sides.
pub const MAPPING_CONFIG_SUBDIR: &str = "Resources/config/doctrine";

/// Subdirectory serializer descriptors are generated into.
pub const SERIALIZER_CONFIG_SUBDIR: &str = "Resources/config/serializer";

/// Filename suffix identifying repository classes in the code directory.
pub const REPOSITORY_SUFFIX: &str = "Repository.php";

/// The supported mapping technologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingKind {
    /// Relational object mappings (ORM).
    Relational,
    /// Document-store mappings (ODM).
    Document,
    /// Content-repository mappings (PHPCR).
    ContentRepository,
}

impl MappingKind {
    /// Filename suffixes of the mapping skeletons this technology ships.
    pub const fn mapping_suffixes(&self) -> &'static [&'static str] {
        match self {
            Self::Relational => &[".orm.xml.skeleton", ".orm.yml.skeleton"],
            Self::Document => &[".mongodb.xml.skeleton"],
            Self::ContentRepository => &[".phpcr.xml.skeleton"],
        }
    }

    /// Source-code subdirectory holding the mapped types.
    pub const fn code_subdir(&self) -> &'static str {
        match self {
            Self::Relational => "Entity",
            Self::Document => "Document",
            Self::ContentRepository => "PHPCR",
        }
    }

    /// Filename prefix of generated serializer descriptors.
    pub const fn serializer_prefix(&self) -> &'static str {
        match self {
            Self::Relational => "Entity",
            Self::Document | Self::ContentRepository => "Document",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Relational => "relational",
            Self::Document => "document",
            Self::ContentRepository => "content-repository",
        }
    }
}

/// Source and destination locations for one mapping technology.
///
/// Owned exclusively by the package metadata it was derived from; recomputed
/// with it, immutable otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingDescriptor {
    kind: MappingKind,
    source_mapping_dir: PathBuf,
    dest_mapping_dir: PathBuf,
    source_code_dir: PathBuf,
    dest_code_dir: PathBuf,
    dest_serializer_dir: PathBuf,
}

impl MappingDescriptor {
    pub(crate) fn new(kind: MappingKind, install_path: &Path, extended_directory: &Path) -> Self {
        Self {
            kind,
            source_mapping_dir: install_path.join(MAPPING_CONFIG_SUBDIR),
            dest_mapping_dir: extended_directory.join(MAPPING_CONFIG_SUBDIR),
            source_code_dir: install_path.join(kind.code_subdir()),
            dest_code_dir: extended_directory.join(kind.code_subdir()),
            dest_serializer_dir: extended_directory.join(SERIALIZER_CONFIG_SUBDIR),
        }
    }

    pub fn kind(&self) -> MappingKind {
        self.kind
    }

    pub fn source_mapping_dir(&self) -> &Path {
        &self.source_mapping_dir
    }

    pub fn dest_mapping_dir(&self) -> &Path {
        &self.dest_mapping_dir
    }

    pub fn source_code_dir(&self) -> &Path {
        &self.source_code_dir
    }

    pub fn dest_code_dir(&self) -> &Path {
        &self.dest_code_dir
    }

    pub fn dest_serializer_dir(&self) -> &Path {
        &self.dest_serializer_dir
    }

    /// Mapping skeletons shipped by the source package.
    pub fn mapping_files(&self) -> Vec<DiscoveredFile> {
        discovery::find_by_suffix(&self.source_mapping_dir, self.kind.mapping_suffixes())
    }

    /// Mapped type names: each mapping file's name up to the first `.`,
    /// sorted and deduplicated.
    pub fn entity_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .mapping_files()
            .into_iter()
            .filter_map(|file| {
                let name = file.base_name.split('.').next()?;
                (!name.is_empty()).then(|| name.to_owned())
            })
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Repository classes shipped in the source code directory.
    pub fn repository_files(&self) -> Vec<DiscoveredFile> {
        discovery::find_by_suffix(&self.source_code_dir, &[REPOSITORY_SUFFIX])
    }
}
